//! Chat message types for the assistant transcript.

use chrono::{DateTime, Utc};

use crate::ids::MessageId;

/// Role of a message in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    /// Visitor message.
    User,
    /// Scripted assistant message.
    Assistant,
}

/// A message in the transcript. Immutable once created.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    id: MessageId,
    role: ChatRole,
    content: String,
    created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new chat message stamped with the current time.
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: MessageId::generate(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn role(&self) -> ChatRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Append-only, insertion-ordered sequence of chat turns.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Create a transcript whose first message is the assistant greeting.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(greeting)],
        }
    }

    /// Append a message and return its id.
    pub fn push(&mut self, message: ChatMessage) -> MessageId {
        let id = message.id().clone();
        self.messages.push(message);
        id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}
