//! Source adapters for fetching raw articles from upstream news services.
//!
//! Three adapters feed the pipeline:
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | NewsAPI | [`newsapi`] | JSON search API | Requires `NEWS_API_KEY`; skipped when absent |
//! | Bing News | [`bing`] | RSS search feed | Unauthenticated |
//! | Google News | [`google`] | RSS search feed | Unauthenticated |
//!
//! Each adapter runs a fixed list of topical queries against its upstream
//! and returns one [`SourceBatch`]. Failures are isolated per query: a
//! network error, non-success status, or malformed body degrades that query
//! to zero results (recorded in [`SourceBatch::failures`]) and never aborts
//! the adapter's remaining queries or the run. Duplicates across queries and
//! sources are left in place; the pipeline deduplicates later.

use crate::models::Article;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

pub mod bing;
pub mod feed;
pub mod google;
pub mod newsapi;

/// Why a single upstream query produced no articles.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or its body could not be read
    /// (connection failure, timeout, etc.).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The upstream answered with a non-success HTTP status.
    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),
    /// The response body did not match the expected shape.
    #[error("malformed response body: {0}")]
    Malformed(String),
}

/// Whether a source was actually queried this run.
#[derive(Debug, PartialEq, Eq)]
pub enum SourceStatus {
    /// The adapter issued its queries (some may still have failed).
    Queried,
    /// The adapter was skipped entirely, with the reason why.
    Disabled(&'static str),
}

/// A failed query within an otherwise healthy source.
#[derive(Debug)]
pub struct QueryFailure {
    pub query: String,
    pub error: FetchError,
}

/// Everything one adapter produced in a run: the articles it fetched, in
/// query order with duplicates intact, plus enough bookkeeping to tell an
/// empty-because-disabled source from an empty-because-everything-failed
/// one.
#[derive(Debug)]
pub struct SourceBatch {
    pub source: &'static str,
    pub status: SourceStatus,
    pub articles: Vec<Article>,
    pub failures: Vec<QueryFailure>,
}

impl SourceBatch {
    /// An empty batch for a source that ran its queries.
    pub fn queried(source: &'static str) -> Self {
        Self {
            source,
            status: SourceStatus::Queried,
            articles: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// A batch for a source that was skipped before issuing any query.
    pub fn disabled(source: &'static str, reason: &'static str) -> Self {
        Self {
            source,
            status: SourceStatus::Disabled(reason),
            articles: Vec::new(),
            failures: Vec::new(),
        }
    }
}

/// Build the shared HTTP client with the fixed per-request timeout. A call
/// exceeding the timeout surfaces as that query's [`FetchError`], not a
/// pipeline failure.
pub fn http_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_batch_carries_reason() {
        let batch = SourceBatch::disabled("NewsAPI", "no API key configured");
        assert_eq!(batch.status, SourceStatus::Disabled("no API key configured"));
        assert!(batch.articles.is_empty());
        assert!(batch.failures.is_empty());
    }

    #[test]
    fn test_queried_batch_starts_empty() {
        let batch = SourceBatch::queried("Bing News");
        assert_eq!(batch.status, SourceStatus::Queried);
        assert!(batch.articles.is_empty());
    }
}
