//! Command-line interface definitions for the banking news monitor.
//!
//! Arguments can be provided via flags or environment variables.

use clap::Parser;

/// Command-line arguments for the banking news monitor.
///
/// # Examples
///
/// ```sh
/// # Default output directory (./output)
/// banking_news_monitor
///
/// # Custom output directory, with the NewsAPI source enabled
/// NEWS_API_KEY=... banking_news_monitor -o ./reports
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory the text report is written into
    #[arg(short, long, default_value = "output")]
    pub output_dir: String,

    /// NewsAPI key; the NewsAPI source is skipped when absent
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    pub news_api_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["banking_news_monitor"]);
        assert_eq!(cli.output_dir, "output");
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "banking_news_monitor",
            "-o",
            "/tmp/reports",
            "--news-api-key",
            "secret",
        ]);
        assert_eq!(cli.output_dir, "/tmp/reports");
        assert_eq!(cli.news_api_key.as_deref(), Some("secret"));
    }
}
