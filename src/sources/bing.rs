//! Bing News source adapter (unauthenticated RSS search feed).
//!
//! Runs six fixed queries against the Bing News search endpoint in RSS mode
//! and parses each feed item into an article labeled `Bing News`.

use super::{FetchError, QueryFailure, SourceBatch, feed};
use crate::config::Config;
use crate::models::Article;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use tracing::{debug, info, instrument};

pub const SOURCE: &str = "Bing News";

const ENDPOINT: &str = "https://www.bing.com/news/search";

const SEARCH_QUERIES: [&str; 6] = [
    "US regional banks negative news",
    "bank earnings miss 2026",
    "US banking sector crisis",
    "regional bank failures",
    "bank regulatory enforcement",
    "banking cybersecurity",
];

/// Fetch all Bing News queries sequentially. Failed queries are recorded
/// and skipped without failing the batch.
#[instrument(level = "info", skip_all)]
pub async fn fetch(client: &Client, _config: &Config) -> SourceBatch {
    let mut batch = SourceBatch::queried(SOURCE);
    let results: Vec<(&str, Result<Vec<Article>, FetchError>)> = stream::iter(SEARCH_QUERIES)
        .then(|query| async move { (query, search(client, query).await) })
        .collect()
        .await;

    for (query, result) in results {
        match result {
            Ok(articles) => {
                debug!(query, count = articles.len(), "Bing query succeeded");
                batch.articles.extend(articles);
            }
            Err(error) => {
                debug!(query, %error, "Bing query failed; treating as zero results");
                batch.failures.push(QueryFailure {
                    query: query.to_string(),
                    error,
                });
            }
        }
    }

    info!(
        count = batch.articles.len(),
        failed_queries = batch.failures.len(),
        "Fetched Bing News articles"
    );
    batch
}

async fn search(client: &Client, query: &str) -> Result<Vec<Article>, FetchError> {
    let response = client
        .get(ENDPOINT)
        .query(&[("q", query), ("format", "rss")])
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }
    let body = response.text().await?;
    feed::parse_items(&body, SOURCE)
}
