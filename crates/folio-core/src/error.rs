//! Core errors.

use thiserror::Error;

/// Core errors for Folio.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Section identifier not recognised.
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Quick prompt index out of range.
    #[error("No quick prompt at index {index} (have {count})")]
    QuickPromptOutOfRange { index: usize, count: usize },
}
