//! NewsAPI source adapter (keyed JSON search API).
//!
//! Runs six fixed topical searches against the
//! [NewsAPI `everything` endpoint](https://newsapi.org/docs/endpoints/everything)
//! and parses the structured article list out of each response. The adapter
//! needs an API key; without one it reports itself disabled and contributes
//! nothing, which is an expected configuration, not an error.

use super::{FetchError, QueryFailure, SourceBatch};
use crate::config::Config;
use crate::models::Article;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, instrument};

pub const SOURCE: &str = "NewsAPI";

const ENDPOINT: &str = "https://newsapi.org/v2/everything";

const SEARCH_TERMS: [&str; 6] = [
    "US regional banks negative",
    "US banking crisis",
    "bank earnings miss",
    "bank regulatory action",
    "bank cybersecurity breach",
    "regional bank stress",
];

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    articles: Vec<WireArticle>,
}

#[derive(Debug, Deserialize)]
struct WireArticle {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default, rename = "publishedAt")]
    published_at: Option<String>,
    #[serde(default)]
    source: WireSource,
}

#[derive(Debug, Default, Deserialize)]
struct WireSource {
    #[serde(default)]
    name: Option<String>,
}

/// Fetch all NewsAPI search terms sequentially. Failed queries are recorded
/// and skipped without failing the batch.
#[instrument(level = "info", skip_all)]
pub async fn fetch(client: &Client, config: &Config) -> SourceBatch {
    let Some(api_key) = config.news_api_key.as_deref() else {
        info!("No NewsAPI key configured; skipping source");
        return SourceBatch::disabled(SOURCE, "no API key configured");
    };

    let mut batch = SourceBatch::queried(SOURCE);
    let results: Vec<(&str, Result<Vec<Article>, FetchError>)> = stream::iter(SEARCH_TERMS)
        .then(|term| async move { (term, search(client, api_key, term).await) })
        .collect()
        .await;

    for (term, result) in results {
        match result {
            Ok(articles) => {
                debug!(query = term, count = articles.len(), "NewsAPI query succeeded");
                batch.articles.extend(articles);
            }
            Err(error) => {
                debug!(query = term, %error, "NewsAPI query failed; treating as zero results");
                batch.failures.push(QueryFailure {
                    query: term.to_string(),
                    error,
                });
            }
        }
    }

    info!(
        count = batch.articles.len(),
        failed_queries = batch.failures.len(),
        "Fetched NewsAPI articles"
    );
    batch
}

async fn search(client: &Client, api_key: &str, term: &str) -> Result<Vec<Article>, FetchError> {
    let url = format!(
        "{ENDPOINT}?q={}&sortBy=publishedAt&language=en&pageSize=100",
        urlencoding::encode(term)
    );
    let response = client
        .get(&url)
        .header(reqwest::header::AUTHORIZATION, api_key)
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }
    let body = response.text().await?;
    parse_body(&body)
}

fn parse_body(body: &str) -> Result<Vec<Article>, FetchError> {
    let parsed: SearchResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    Ok(parsed
        .articles
        .into_iter()
        .map(|wire| Article {
            title: wire.title.unwrap_or_default(),
            description: wire.description.unwrap_or_default(),
            url: wire.url.unwrap_or_default(),
            published_at: wire.published_at.unwrap_or_default(),
            source: wire.source.name.unwrap_or_else(|| SOURCE.to_string()),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::SourceStatus;
    use std::path::PathBuf;

    #[test]
    fn test_parse_body_maps_wire_fields() {
        let body = r#"{
            "status": "ok",
            "totalResults": 1,
            "articles": [{
                "source": {"id": null, "name": "Example Wire"},
                "title": "Bank downgraded",
                "description": "Outlook negative",
                "url": "https://example.com/a",
                "publishedAt": "2026-08-25T09:30:00Z"
            }]
        }"#;
        let articles = parse_body(body).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Bank downgraded");
        assert_eq!(articles[0].description, "Outlook negative");
        assert_eq!(articles[0].published_at, "2026-08-25T09:30:00Z");
        assert_eq!(articles[0].source, "Example Wire");
    }

    #[test]
    fn test_parse_body_defaults_missing_fields() {
        let body = r#"{"articles": [{"title": "Bare item"}]}"#;
        let articles = parse_body(body).unwrap();
        assert_eq!(articles[0].description, "");
        assert_eq!(articles[0].url, "");
        assert_eq!(articles[0].published_at, "");
        assert_eq!(articles[0].source, "NewsAPI");
    }

    #[test]
    fn test_parse_body_rejects_non_json() {
        assert!(matches!(parse_body("<html>"), Err(FetchError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_fetch_without_key_is_disabled() {
        let config = Config::new(None, PathBuf::from("output"));
        let client = crate::sources::http_client(config.request_timeout);
        let batch = fetch(&client, &config).await;
        assert_eq!(batch.status, SourceStatus::Disabled("no API key configured"));
        assert!(batch.articles.is_empty());
        assert!(batch.failures.is_empty());
    }
}
