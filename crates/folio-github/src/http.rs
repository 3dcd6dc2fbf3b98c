//! HTTP client for the GitHub events endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::activity::{parse_events, CommitSource, GitHubEvent};
use crate::error::ClientError;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const PAGE_SIZE: u32 = 100;

/// Client for one account's public events.
pub struct GitHubClient {
    inner: reqwest::Client,
    base_url: String,
    user: String,
}

impl GitHubClient {
    /// Create a client against api.github.com.
    pub fn new(user: &str) -> Result<Self, ClientError> {
        Self::with_base_url(DEFAULT_BASE_URL, user)
    }

    /// Create a client against another API root.
    pub fn with_base_url(base_url: &str, user: &str) -> Result<Self, ClientError> {
        let inner = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            inner,
            base_url: base_url.trim_end_matches('/').to_string(),
            user: user.to_string(),
        })
    }

    /// URL of the events listing.
    pub fn events_url(&self) -> String {
        format!(
            "{}/users/{}/events/public?per_page={}",
            self.base_url, self.user, PAGE_SIZE
        )
    }

    /// Fetch the most recent events. One attempt, no retry.
    pub async fn fetch_events(&self) -> Result<Vec<GitHubEvent>, ClientError> {
        let url = self.events_url();
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status().as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ClientError::Serialization(e.to_string()))?;

        parse_events(body)
    }
}

#[async_trait]
impl CommitSource for GitHubClient {
    async fn recent_events(&self) -> Result<Vec<GitHubEvent>, ClientError> {
        self.fetch_events().await
    }
}
