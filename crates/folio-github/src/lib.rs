//! GitHub activity client for Folio.
//!
//! Fetches recent public events for one account and counts this month's pushed
//! commits. Every failure folds into [`folio_core::FALLBACK_COMMITS`].

pub mod activity;
pub mod error;
pub mod http;

pub use activity::{
    count_commits_since, month_start, resolve_commit_total, CommitSource, GitHubEvent,
    OfflineSource,
};
pub use error::ClientError;
pub use http::GitHubClient;
