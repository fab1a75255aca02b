//! The ingestion-normalization-classification pipeline.
//!
//! Stages, in order:
//!
//! 1. **Fetch**: run the three source adapters one after another; each
//!    isolates its own per-query failures. Outputs are concatenated in
//!    adapter order, then per-adapter query order, duplicates intact.
//! 2. **Dedup**: single-pass stable dedup on the lowercased title key.
//! 3. **Window**: keep only articles published in the trailing window
//!    (cutoff computed once per run).
//! 4. **Classify**: keep only negative banking-sector articles.
//! 5. **Order**: sort descending by the raw `published_at` string.
//!
//! Every stage is best-effort: nothing an upstream source or a single
//! article does can abort the run.

use crate::classify;
use crate::config::Config;
use crate::models::Article;
use crate::sources::{self, SourceBatch, SourceStatus};
use crate::window;
use chrono::Utc;
use reqwest::Client;
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

/// Remove cross-source duplicates, keeping the first occurrence of each
/// title key in input order.
///
/// Articles with an empty title produce no key: they are dropped outright
/// and never recorded as seen, so they cannot suppress later entries.
pub fn dedup(articles: Vec<Article>) -> Vec<Article> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::new();
    for article in articles {
        let Some(key) = article.dedup_key() else {
            debug!(source = %article.source, "Dropping article without a title");
            continue;
        };
        if seen.insert(key) {
            unique.push(article);
        }
    }
    unique
}

/// Sort newest-first on the raw upstream timestamp string.
///
/// This is a lexicographic comparison, not a parsed-timestamp one, so
/// articles carrying different date formats (ISO-8601 vs RFC-2822) do not
/// interleave chronologically. Downstream consumers rely on today's exact
/// ordering, so it stays as observed; see DESIGN.md.
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}

/// Run the full pipeline and return the final ordered article list.
#[instrument(level = "info", skip_all)]
pub async fn run(client: &Client, config: &Config) -> Vec<Article> {
    let batches: Vec<SourceBatch> = vec![
        sources::newsapi::fetch(client, config).await,
        sources::bing::fetch(client, config).await,
        sources::google::fetch(client, config).await,
    ];

    for batch in &batches {
        match &batch.status {
            SourceStatus::Queried => info!(
                source = batch.source,
                count = batch.articles.len(),
                failed_queries = batch.failures.len(),
                "Source queried"
            ),
            SourceStatus::Disabled(reason) => {
                info!(source = batch.source, reason, "Source disabled")
            }
        }
        for failure in &batch.failures {
            warn!(
                source = batch.source,
                query = %failure.query,
                error = %failure.error,
                "Query degraded to zero results"
            );
        }
    }

    let fetched: Vec<Article> = batches.into_iter().flat_map(|b| b.articles).collect();
    info!(count = fetched.len(), "Total articles fetched");

    let unique = dedup(fetched);
    info!(count = unique.len(), "Unique articles after dedup");

    let recent = window::filter_recent(unique, Utc::now(), config.window);
    info!(count = recent.len(), "Recent articles inside the window");

    let mut negative: Vec<Article> = recent
        .into_iter()
        .filter(|article| classify::is_negative_banking_news(article, config))
        .collect();
    info!(count = negative.len(), "Negative banking articles");

    for article in &negative {
        // Informational signal only; tracked-institution mentions never
        // gate inclusion.
        debug!(
            title = %article.title,
            tracked_institution = classify::mentions_tracked_institution(article, config),
            "Classified negative"
        );
    }

    sort_newest_first(&mut negative);
    negative
}
