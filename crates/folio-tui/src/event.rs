//! Event types for communication between the background runtime and the UI.

/// Events sent from the backend to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Commits pushed this month (or the fallback).
    ActivityResolved(u32),
}

/// Commands sent from the UI to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    /// Look up this month's commit total once.
    FetchActivity,

    /// Quit the backend.
    Quit,
}
