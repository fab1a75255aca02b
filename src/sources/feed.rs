//! Shared RSS 2.0 item parsing for the feed-style sources.

use super::FetchError;
use crate::models::Article;
use chrono::Utc;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(default, rename = "item")]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default, rename = "pubDate")]
    pub_date: Option<String>,
}

/// Parse an RSS search-feed body into articles labeled with `source`.
///
/// Items without a publication date default to the current instant in
/// RFC-3339 form, so a feed that omits dates still lands inside the
/// relevance window. Items without a title come through with an empty one
/// and are dropped later at dedup.
pub fn parse_items(body: &str, source: &str) -> Result<Vec<Article>, FetchError> {
    let rss: Rss = quick_xml::de::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    Ok(rss
        .channel
        .items
        .into_iter()
        .map(|item| Article {
            title: item.title.unwrap_or_default(),
            description: item.description.unwrap_or_default(),
            url: item.link.unwrap_or_default(),
            published_at: item.pub_date.unwrap_or_else(|| Utc::now().to_rfc3339()),
            source: source.to_string(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::parse_published;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>search results</title>
    <link>https://example.com</link>
    <item>
      <title>Regional bank downgraded</title>
      <description>Ratings agency cites deposit outflow.</description>
      <link>https://example.com/a</link>
      <pubDate>Tue, 25 Aug 2026 09:30:00 GMT</pubDate>
    </item>
    <item>
      <title>Bank posts loss</title>
      <link>https://example.com/b</link>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_parse_items_reads_all_fields() {
        let articles = parse_items(SAMPLE, "Bing News").unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Regional bank downgraded");
        assert_eq!(articles[0].description, "Ratings agency cites deposit outflow.");
        assert_eq!(articles[0].url, "https://example.com/a");
        assert_eq!(articles[0].published_at, "Tue, 25 Aug 2026 09:30:00 GMT");
        assert_eq!(articles[0].source, "Bing News");
    }

    #[test]
    fn test_missing_fields_default() {
        let articles = parse_items(SAMPLE, "Bing News").unwrap();
        assert_eq!(articles[1].description, "");
        // A missing pubDate defaults to "now", which must itself parse.
        assert!(parse_published(&articles[1].published_at).is_ok());
    }

    #[test]
    fn test_malformed_body_is_reported() {
        let result = parse_items("this is not xml", "Bing News");
        assert!(matches!(result, Err(FetchError::Malformed(_))));
    }

    #[test]
    fn test_empty_channel_yields_no_articles() {
        let xml = r#"<rss version="2.0"><channel><title>empty</title></channel></rss>"#;
        let articles = parse_items(xml, "Google News").unwrap();
        assert!(articles.is_empty());
    }
}
