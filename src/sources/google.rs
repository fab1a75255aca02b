//! Google News source adapter (unauthenticated RSS search feed).
//!
//! Runs four fixed queries against the Google News RSS search endpoint and
//! parses each feed item into an article labeled `Google News`. The query
//! phrases are already URL-shaped (`+` as the word separator) and are placed
//! into the URL verbatim.

use super::{FetchError, QueryFailure, SourceBatch, feed};
use crate::config::Config;
use crate::models::Article;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use tracing::{debug, info, instrument};

pub const SOURCE: &str = "Google News";

const SEARCH_QUERIES: [&str; 4] = [
    "regional+banks+negative",
    "US+bank+earnings",
    "bank+crisis",
    "banking+regulation",
];

/// Fetch all Google News queries sequentially. Failed queries are recorded
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
                debug!(query, count = articles.len(), "Google News query succeeded");
                batch.articles.extend(articles);
            }
            Err(error) => {
                debug!(query, %error, "Google News query failed; treating as zero results");
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
        "Fetched Google News articles"
    );
    batch
}

async fn search(client: &Client, query: &str) -> Result<Vec<Article>, FetchError> {
    let url = format!("https://news.google.com/rss/search?q={query}&hl=en-US&gl=US&ceid=US:en");
    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }
    let body = response.text().await?;
    feed::parse_items(&body, SOURCE)
}
