//! Time-window filtering over heterogeneous publication timestamps.
//!
//! Upstream sources disagree on date formats: the keyed search API emits
//! ISO-8601 (`2026-08-25T09:30:00Z`) while the RSS feeds emit RFC-2822 mail
//! header dates (`Mon, 25 Aug 2026 09:30:00 GMT`). Parsing runs an ordered
//! list of strategies, first success wins, and total failure surfaces as a
//! single typed [`TimestampError`] so the filter (and its tests) can tell
//! *why* an article was rejected. No parse error ever escapes this stage.

use crate::models::Article;
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use thiserror::Error;
use tracing::debug;

/// Why a publication timestamp could not be used.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    /// The article carried no timestamp at all.
    #[error("article has no publication timestamp")]
    Missing,
    /// The timestamp matched none of the supported formats.
    #[error("unrecognized timestamp format: {0:?}")]
    Unrecognized(String),
}

/// Parse an upstream publication timestamp into UTC.
///
/// Strategies, tried in order:
/// 1. RFC-3339 when the value is ISO-shaped (contains the `T` separator);
///    a trailing `Z` designator is normalized to an explicit offset first.
/// 2. Offset-less ISO-8601, assumed to be UTC.
/// 3. RFC-2822.
pub fn parse_published(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(TimestampError::Missing);
    }

    if raw.contains('T') {
        let normalized = match raw.strip_suffix('Z') {
            Some(stripped) => format!("{stripped}+00:00"),
            None => raw.to_string(),
        };
        if let Ok(parsed) = DateTime::parse_from_rfc3339(&normalized) {
            return Ok(parsed.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(DateTime::from_naive_utc_and_offset(naive, Utc));
        }
    }

    if let Ok(parsed) = DateTime::parse_from_rfc2822(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    Err(TimestampError::Unrecognized(raw.to_string()))
}

/// Retain only articles published within the trailing `window` ending at
/// `now`.
///
/// The cutoff is computed once from the caller-supplied `now` so every
/// comparison shares a single reference point. Articles whose timestamp is
/// missing or unparseable are rejected, never silently included. Input order
/// is preserved; this stage filters only.
pub fn filter_recent(articles: Vec<Article>, now: DateTime<Utc>, window: Duration) -> Vec<Article> {
    let cutoff = now - window;
    articles
        .into_iter()
        .filter(|article| match parse_published(&article.published_at) {
            Ok(published) => published >= cutoff,
            Err(error) => {
                debug!(
                    title = %article.title,
                    raw = %article.published_at,
                    %error,
                    "Dropping article with unusable timestamp"
                );
                false
            }
        })
        .collect()
}
