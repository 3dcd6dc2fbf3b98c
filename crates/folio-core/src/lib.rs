//! Folio Core Portfolio State
//!
//! This crate contains the portfolio content and its behaviour with no dependencies on:
//! - Terminal rendering
//! - Network access
//! - Wall-clock timers
//!
//! Every animation is a state machine advanced by an elapsed-time value supplied by
//! the caller, so the whole session can be driven deterministically.

pub mod chat;
pub mod content;
pub mod conversation;
pub mod dispatcher;
pub mod error;
pub mod ids;
pub mod portfolio;
pub mod progress;
pub mod section;
pub mod stats;
pub mod trigger;
pub mod typewriter;

// Re-export commonly used types
pub use chat::{ChatMessage, ChatRole, Transcript};
pub use content::{ExperienceEntry, FunFact, ProjectEntry, QuickPrompt};
pub use conversation::{Conversation, ConversationEffect};
pub use dispatcher::{respond, Reply};
pub use error::CoreError;
pub use ids::MessageId;
pub use portfolio::Portfolio;
pub use progress::{progress_fraction, progress_width, ViewportMetrics};
pub use section::Section;
pub use stats::{AnimationPhase, CodingStats, StatsAnimation, FALLBACK_COMMITS};
pub use trigger::{Latch, Throttle, VisibilityTrigger};
pub use typewriter::{FactReveal, FunFactReel};
