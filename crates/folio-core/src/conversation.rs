//! Transcript plus the delayed assistant replies.
//!
//! Time is the elapsed duration since the session started, supplied by the caller.

use std::time::Duration;

use tracing::debug;

use crate::chat::{ChatMessage, Transcript};
use crate::content::GREETING;
use crate::dispatcher::{respond, Reply};
use crate::ids::MessageId;
use crate::section::Section;

/// Delay before the assistant answers.
pub const REPLY_DELAY: Duration = Duration::from_millis(1000);

/// Delay between an answer and the scroll it requests.
pub const SCROLL_DELAY: Duration = Duration::from_millis(500);

/// Something the presentation layer must act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationEffect {
    /// Bring a section into view.
    ScrollTo(Section),
}

#[derive(Debug, Clone, Copy)]
enum Pending {
    Reply(Reply),
    Scroll(Section),
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    due: Duration,
    seq: u64,
    action: Pending,
}

/// The assistant conversation.
#[derive(Debug, Clone)]
pub struct Conversation {
    transcript: Transcript,
    scheduled: Vec<Scheduled>,
    next_seq: u64,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    /// Start a conversation with the greeting.
    pub fn new() -> Self {
        Self {
            transcript: Transcript::with_greeting(GREETING),
            scheduled: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Whether an assistant answer is still on its way.
    pub fn is_typing(&self) -> bool {
        self.scheduled
            .iter()
            .any(|s| matches!(s.action, Pending::Reply(_)))
    }

    /// Append the visitor's message and schedule the answer.
    ///
    /// The answer is chosen now, from the text as sent.
    pub fn send(&mut self, text: &str, now: Duration) -> MessageId {
        let reply = respond(text);
        debug!(
            scroll_target = ?reply.scroll_target,
            "Scheduling assistant reply"
        );
        let id = self.transcript.push(ChatMessage::user(text));
        self.schedule(now + REPLY_DELAY, Pending::Reply(reply));
        id
    }

    /// Deliver everything due at `now`, in due order.
    pub fn advance(&mut self, now: Duration) -> Vec<ConversationEffect> {
        let mut effects = Vec::new();

        loop {
            let next = self
                .scheduled
                .iter()
                .enumerate()
                .filter(|(_, s)| s.due <= now)
                .min_by_key(|(_, s)| (s.due, s.seq))
                .map(|(i, _)| i);

            let Some(index) = next else {
                break;
            };
            let item = self.scheduled.remove(index);

            match item.action {
                Pending::Reply(reply) => {
                    self.transcript.push(ChatMessage::assistant(reply.text));
                    if let Some(section) = reply.scroll_target {
                        self.schedule(item.due + SCROLL_DELAY, Pending::Scroll(section));
                    }
                }
                Pending::Scroll(section) => {
                    effects.push(ConversationEffect::ScrollTo(section));
                }
            }
        }

        effects
    }

    fn schedule(&mut self, due: Duration, action: Pending) {
        self.scheduled.push(Scheduled {
            due,
            seq: self.next_seq,
            action,
        });
        self.next_seq += 1;
    }
}
