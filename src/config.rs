//! Run configuration: credentials, keyword lists, and fixed limits.
//!
//! Everything the pipeline stages consult is gathered into a single
//! immutable [`Config`] constructed once at startup and passed by reference
//! into each component. Nothing reads ambient global state, which keeps the
//! stages deterministic under test: a test builds a `Config` with whatever
//! fixture lists it needs.

use chrono::Duration;
use std::path::PathBuf;
use std::time::Duration as StdDuration;

/// Generic banking-context terms. An article must contain at least one of
/// these (as a substring of its lowercased text) to be considered about the
/// banking sector at all.
const BANKING_TERMS: &[&str] = &["bank", "banking", "financial", "credit", "lending", "deposit"];

/// Adverse-news phrases, matched case-insensitively as substrings. Covers
/// ratings actions, earnings misses, security incidents, liquidity and
/// credit stress, regulatory and legal actions, leadership turnover, and
/// generic distress words. Substring matching is intentionally coarse: there
/// is no negation handling and no word-boundary check, so "passed stress
/// test" matches "stress test" just like "stress test failure" does. That
/// imprecision is the accepted cost of a keyword heuristic.
const NEGATIVE_KEYWORDS: &[&str] = &[
    "downgrade", "downgraded", "negative outlook",
    "earnings miss", "earnings shortfall", "guidance cut",
    "cybersecurity breach", "data breach", "hacked",
    "credit spread", "widening spreads",
    "financial loss", "loss", "impairment",
    "liquidity stress", "liquidity crisis",
    "deposit outflow", "deposit flight",
    "regulatory enforcement", "consent order", "settlement",
    "capital ratio decline", "capital deficiency",
    "non-performing loan", "npl", "charge-off",
    "commercial real estate exposure", "office loan",
    "funding cost", "net interest margin decline",
    "failed capital raise", "bond issuance cancelled",
    "management turnover", "ceo resignation",
    "operational disruption", "technology outage",
    "emergency funding", "fed lending",
    "equity decline", "share price drop",
    "short interest", "bankruptcy", "restructuring",
    "stress test failure", "asset quality", "loan loss",
    "covenant breach", "default", "fail",
    "investigation", "lawsuit", "litigation",
    "scandal", "fraud", "misconduct",
    "weakness", "weakness in", "troubled",
    "crisis", "emergency", "critical",
    "fined", "penalty", "violated",
];

/// Ticker/name roster of tracked US regional banks. Used only for the
/// informational "mentions a tracked institution" signal; it does not gate
/// whether an article appears in the report.
const TRACKED_INSTITUTIONS: &[(&str, &str)] = &[
    ("JPM", "JPMorgan Chase"),
    ("BAC", "Bank of America"),
    ("WFC", "Wells Fargo"),
    ("GS", "Goldman Sachs"),
    ("MS", "Morgan Stanley"),
    ("BLK", "BlackRock"),
    ("SCHW", "Charles Schwab"),
    ("TFC", "Truist Financial"),
    ("PNC", "PNC Financial"),
    ("USB", "U.S. Bancorp"),
    ("FITB", "Fifth Third Bancorp"),
    ("RF", "Regions Financial"),
    ("KEY", "KeyCorp"),
    ("MTB", "M&T Bank"),
    ("ZION", "Zions Bancorporation"),
    ("CFG", "Citizens Financial Group"),
    ("STL", "Sterling Bancorp"),
    ("FRC", "First Republic Bank"),
    ("SBNY", "Signature Bank"),
    ("UVSP", "Univest Financial"),
];

/// A tracked banking institution: stock ticker plus display name. Either
/// appearing in an article's text counts as a mention.
#[derive(Debug, Clone)]
pub struct Institution {
    pub ticker: String,
    pub name: String,
}

/// Immutable per-run configuration shared by every pipeline stage.
#[derive(Debug, Clone)]
pub struct Config {
    /// NewsAPI credential. `None` disables that source entirely; an empty
    /// string from the environment is treated the same as unset.
    pub news_api_key: Option<String>,
    /// Directory the rendered report is written into.
    pub output_dir: PathBuf,
    /// Per-request timeout for every upstream HTTP call.
    pub request_timeout: StdDuration,
    /// Length of the trailing relevance window.
    pub window: Duration,
    /// Banking-context terms for the relevance check.
    pub banking_terms: Vec<String>,
    /// Adverse-news phrases for the negative-keyword check.
    pub negative_keywords: Vec<String>,
    /// Tracked regional banks for the informational mention check.
    pub tracked_institutions: Vec<Institution>,
}

impl Config {
    /// Build the standard configuration with the compiled-in keyword lists,
    /// a 10-second request timeout, and a 24-hour relevance window.
    pub fn new(news_api_key: Option<String>, output_dir: PathBuf) -> Self {
        Self {
            news_api_key: news_api_key.filter(|k| !k.is_empty()),
            output_dir,
            request_timeout: StdDuration::from_secs(10),
            window: Duration::hours(24),
            banking_terms: BANKING_TERMS.iter().map(|s| s.to_string()).collect(),
            negative_keywords: NEGATIVE_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            tracked_institutions: TRACKED_INSTITUTIONS
                .iter()
                .map(|(ticker, name)| Institution {
                    ticker: ticker.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_counts_as_absent() {
        let config = Config::new(Some(String::new()), PathBuf::from("output"));
        assert_eq!(config.news_api_key, None);
    }

    #[test]
    fn test_present_api_key_is_kept() {
        let config = Config::new(Some("secret".to_string()), PathBuf::from("output"));
        assert_eq!(config.news_api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_default_lists_are_populated() {
        let config = Config::new(None, PathBuf::from("output"));
        assert_eq!(config.banking_terms.len(), 6);
        assert!(config.negative_keywords.len() >= 50);
        assert_eq!(config.tracked_institutions.len(), 20);
    }

    #[test]
    fn test_keyword_lists_are_lowercase() {
        // The classifier lowercases article text once and matches keywords
        // verbatim, so every keyword must already be lowercase.
        let config = Config::new(None, PathBuf::from("output"));
        for keyword in config.banking_terms.iter().chain(&config.negative_keywords) {
            assert_eq!(keyword, &keyword.to_lowercase());
        }
    }
}
