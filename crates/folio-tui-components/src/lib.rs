//! Terminal widgets for the Folio portfolio.
//!
//! This crate provides the widgets, theme and text utilities the portfolio
//! screen is assembled from.
//!
//! # Architecture
//!
//! The crate is organized into:
//! - `widgets` - ratatui widgets (header, progress bar, chat, quick prompts, input,
//!   stats panel, fun facts, footer)
//! - `theme` - Colors and styles
//! - `utils` - Word wrapping and truncation
//!
//! # Usage
//!
//! Widgets are data-agnostic: pass plain strings and small structs rather than
//! `folio-core` types.

pub mod theme;
pub mod utils;
pub mod widgets;

pub use theme::Theme;
pub use utils::{display_width, truncate, wrap_text_indented, wrap_words};
pub use widgets::chat::{ChatLine, ChatRole, ChatWidget};
pub use widgets::fun_facts::{FunFactLine, FunFactsWidget};
pub use widgets::footer::Footer;
pub use widgets::header::Header;
pub use widgets::input::InputLine;
pub use widgets::progress::ProgressBar;
pub use widgets::prompts::{PromptLine, QuickPromptsWidget};
pub use widgets::stats::{StatEntry, StatsPanel};
