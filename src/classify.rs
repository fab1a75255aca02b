//! Keyword-heuristic relevance and sentiment classification.
//!
//! An article counts as negative banking news iff its lowercased
//! title+description blob contains at least one banking-context term AND at
//! least one negative keyword. Both checks are plain substring matches over
//! the lists carried in [`Config`]. A third check, whether the article
//! mentions one of the tracked regional banks, is computed for diagnostics
//! but never gates inclusion.

use crate::config::Config;
use crate::models::Article;

/// Whether the article is both about the banking sector and carries a
/// negative keyword. Pure function of the article text; calling it twice
/// yields the same answer.
pub fn is_negative_banking_news(article: &Article, config: &Config) -> bool {
    let text = article.search_text();
    let has_banking_context = config
        .banking_terms
        .iter()
        .any(|term| text.contains(term.as_str()));
    let has_negative = config
        .negative_keywords
        .iter()
        .any(|keyword| text.contains(keyword.as_str()));
    has_banking_context && has_negative
}

/// Whether the article names (by ticker or full name) one of the tracked
/// regional banks. Informational only; not part of the inclusion decision.
pub fn mentions_tracked_institution(article: &Article, config: &Config) -> bool {
    let text = article.search_text();
    config.tracked_institutions.iter().any(|institution| {
        text.contains(&institution.name.to_lowercase())
            || text.contains(&institution.ticker.to_lowercase())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config() -> Config {
        Config::new(None, PathBuf::from("output"))
    }

    fn article(title: &str, description: &str) -> Article {
        Article {
            title: title.to_string(),
            description: description.to_string(),
            url: String::new(),
            published_at: String::new(),
            source: "Test".to_string(),
        }
    }

    #[test]
    fn test_negative_banking_article_matches() {
        let a = article("Bank faces downgrade amid liquidity stress", "");
        assert!(is_negative_banking_news(&a, &config()));
    }

    #[test]
    fn test_positive_banking_article_does_not_match() {
        let a = article("Bank reports record profit", "");
        assert!(!is_negative_banking_news(&a, &config()));
    }

    #[test]
    fn test_negative_without_banking_context_does_not_match() {
        let a = article("Company faces lawsuit", "");
        assert!(!is_negative_banking_news(&a, &config()));
    }

    #[test]
    fn test_description_alone_can_satisfy_either_check() {
        let a = article("Quarterly update", "The bank disclosed a data breach");
        assert!(is_negative_banking_news(&a, &config()));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let a = article("BANK DOWNGRADED BY RATINGS AGENCY", "");
        assert!(is_negative_banking_news(&a, &config()));
    }

    #[test]
    fn test_classification_is_idempotent() {
        let config = config();
        let a = article("Regional bank hit by deposit outflow", "");
        let first = is_negative_banking_news(&a, &config);
        let second = is_negative_banking_news(&a, &config);
        assert_eq!(first, second);
        assert!(first);
    }

    #[test]
    fn test_tracked_institution_by_name() {
        let a = article("Wells Fargo under investigation", "");
        assert!(mentions_tracked_institution(&a, &config()));
    }

    #[test]
    fn test_tracked_institution_by_ticker() {
        let a = article("ZION shares slide after earnings miss", "");
        assert!(mentions_tracked_institution(&a, &config()));
    }

    #[test]
    fn test_tracked_institution_does_not_gate_inclusion() {
        // Negative banking news about an untracked bank still classifies.
        let a = article("Community bank reports loan loss surge", "");
        let config = config();
        assert!(is_negative_banking_news(&a, &config));
        assert!(!mentions_tracked_institution(&a, &config));
    }
}
