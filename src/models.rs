//! Core data model for fetched news articles.
//!
//! There is a single entity, [`Article`]: the normalized record every source
//! adapter produces and every pipeline stage consumes. Articles live only for
//! the duration of one run and carry no identity beyond their title text.

/// A news article as normalized by a source adapter.
///
/// `published_at` keeps the upstream publication timestamp in its original
/// textual form (ISO-8601 from the keyed search API, RFC-2822 from the RSS
/// feeds). Parsing is deferred to the time-window filter so that adapters
/// never fail on a bad date.
#[derive(Debug, Clone)]
pub struct Article {
    /// Headline text. May be empty; such articles are dropped at dedup.
    pub title: String,
    /// Summary or description text. Defaults to empty when the upstream
    /// record omits it.
    pub description: String,
    /// Link to the article, or empty when the upstream record omits it.
    pub url: String,
    /// Raw publication timestamp as delivered by the upstream source.
    pub published_at: String,
    /// Display name of the source that produced this record.
    pub source: String,
}

impl Article {
    /// Key used for cross-source deduplication: the lowercased, trimmed
    /// title. Returns `None` when the title is empty or whitespace-only;
    /// such articles have no comparable key and are excluded from output
    /// entirely rather than merely left unkeyed.
    pub fn dedup_key(&self) -> Option<String> {
        let key = self.title.trim().to_lowercase();
        if key.is_empty() { None } else { Some(key) }
    }

    /// The lowercased `title + description` blob the keyword classifier
    /// matches against.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.description).to_lowercase()
    }
}
