//! Portfolio screen widgets.

pub mod chat;
pub mod footer;
pub mod fun_facts;
pub mod header;
pub mod input;
pub mod progress;
pub mod prompts;
pub mod stats;
