//! Commit counting over GitHub public events.

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use folio_core::FALLBACK_COMMITS;

use crate::error::ClientError;

const PUSH_EVENT: &str = "PushEvent";

/// One record from the events listing. Only the fields we count are decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub payload: EventPayload,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub commits: Option<Vec<Value>>,
}

/// Decode an events listing body. The top level must be an array.
pub fn parse_events(body: Value) -> Result<Vec<GitHubEvent>, ClientError> {
    if !body.is_array() {
        return Err(ClientError::UnexpectedShape(format!(
            "expected an array of events, got {}",
            json_kind(&body)
        )));
    }
    serde_json::from_value(body).map_err(|e| ClientError::Serialization(e.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Sum pushed commits in events created at or after `since`.
///
/// A push without a commit list counts as one commit.
pub fn count_commits_since(events: &[GitHubEvent], since: DateTime<Utc>) -> u32 {
    events
        .iter()
        .filter(|event| event.kind == PUSH_EVENT && event.created_at >= since)
        .map(|event| {
            event
                .payload
                .commits
                .as_ref()
                .map_or(1, |commits| commits.len() as u32)
        })
        .sum()
}

/// Midnight UTC on the first day of `now`'s month.
pub fn month_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive()
        .with_day(1)
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|start| start.and_utc())
        .unwrap_or(now)
}

/// Anything that can list recent events.
#[async_trait]
pub trait CommitSource: Send + Sync {
    async fn recent_events(&self) -> Result<Vec<GitHubEvent>, ClientError>;
}

/// Source used when network access is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineSource;

#[async_trait]
impl CommitSource for OfflineSource {
    async fn recent_events(&self) -> Result<Vec<GitHubEvent>, ClientError> {
        Err(ClientError::Offline)
    }
}

/// Commits pushed this month, or the fallback on any failure. Single attempt.
pub async fn resolve_commit_total(source: &dyn CommitSource, now: DateTime<Utc>) -> u32 {
    match source.recent_events().await {
        Ok(events) => {
            let total = count_commits_since(&events, month_start(now));
            info!(events = events.len(), total, "Counted commits this month");
            total
        }
        Err(e) => {
            debug!(error = %e, fallback = FALLBACK_COMMITS, "Activity fetch failed, using fallback");
            FALLBACK_COMMITS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn sample_events() -> Value {
        json!([
            {
                "type": "PushEvent",
                "created_at": "2026-10-17T09:00:00Z",
                "payload": { "commits": [{ "sha": "a" }, { "sha": "b" }, { "sha": "c" }] }
            },
            {
                "type": "WatchEvent",
                "created_at": "2026-10-16T09:00:00Z",
                "payload": {}
            },
            {
                "type": "PushEvent",
                "created_at": "2026-10-01T00:00:00Z",
                "payload": { "ref": "refs/heads/main" }
            },
            {
                "type": "PushEvent",
                "created_at": "2026-09-30T23:59:59Z",
                "payload": { "commits": [{ "sha": "d" }] }
            }
        ])
    }

    #[test]
    fn test_counts_this_month_pushes_only() {
        let events = parse_events(sample_events()).unwrap();
        assert_eq!(events.len(), 4);

        let since = month_start(at(2026, 10, 18, 12));
        // 3 listed commits + 1 for the push without a list; September excluded.
        assert_eq!(count_commits_since(&events, since), 4);
    }

    #[test]
    fn test_month_start() {
        assert_eq!(month_start(at(2026, 10, 18, 12)), at(2026, 10, 1, 0));
        assert_eq!(month_start(at(2024, 2, 29, 23)), at(2024, 2, 1, 0));
    }

    #[test]
    fn test_non_array_body() {
        let err = parse_events(json!({ "message": "API rate limit exceeded" })).unwrap_err();
        assert!(matches!(err, ClientError::UnexpectedShape(_)));
    }

    #[test]
    fn test_malformed_record() {
        let err = parse_events(json!([{ "type": "PushEvent" }])).unwrap_err();
        assert!(matches!(err, ClientError::Serialization(_)));
    }

    #[test]
    fn test_empty_listing() {
        let events = parse_events(json!([])).unwrap();
        assert_eq!(count_commits_since(&events, at(2026, 10, 1, 0)), 0);
    }

    struct Fixed(Value);

    #[async_trait]
    impl CommitSource for Fixed {
        async fn recent_events(&self) -> Result<Vec<GitHubEvent>, ClientError> {
            parse_events(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_resolve_counts_events() {
        let total = resolve_commit_total(&Fixed(sample_events()), at(2026, 10, 18, 12)).await;
        assert_eq!(total, 4);
    }

    #[tokio::test]
    async fn test_resolve_falls_back_on_failure() {
        let total = resolve_commit_total(&OfflineSource, Utc::now()).await;
        assert_eq!(total, FALLBACK_COMMITS);

        let total = resolve_commit_total(&Fixed(json!("nope")), Utc::now()).await;
        assert_eq!(total, 47);
    }
}
