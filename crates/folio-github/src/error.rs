//! Error types for the activity client.

use thiserror::Error;

/// Errors that can occur while fetching activity.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport or body decoding error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status code.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// Body was valid JSON but not the expected shape.
    #[error("unexpected payload shape: {0}")]
    UnexpectedShape(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Network access disabled.
    #[error("offline mode")]
    Offline,
}
