//! Report rendering and persistence.
//!
//! The report is a fixed-format UTF-8 text document: a header block with the
//! generation timestamp and article count, one numbered block per article,
//! and an end-of-report trailer. Rendering is pure formatting over the
//! pipeline's final ordered list; writing it out is the only side effect,
//! and a write failure degrades to a `None` path rather than aborting.

use crate::models::Article;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

fn heavy_rule() -> String {
    "=".repeat(80)
}

fn light_rule() -> String {
    "-".repeat(80)
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

/// Render the final article list into the report text.
pub fn render(articles: &[Article], generated_at: DateTime<Local>) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(heavy_rule());
    lines.push("MARKET NEWS MONITORING - US REGIONAL BANKING SECTOR".to_string());
    lines.push(heavy_rule());
    lines.push(format!(
        "Report Generated: {}",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    lines.push(format!("Total Negative News Articles Found: {}", articles.len()));
    lines.push(heavy_rule());
    lines.push(String::new());

    if articles.is_empty() {
        lines.push("No significant negative news found in the monitoring period.".to_string());
        lines.push(String::new());
    } else {
        for (idx, article) in articles.iter().enumerate() {
            lines.push(format!("[{}] {}", idx + 1, or_default(&article.title, "Untitled")));
            lines.push(light_rule());
            lines.push(format!("Source: {}", or_default(&article.source, "Unknown")));
            lines.push(format!(
                "Published: {}",
                or_default(&article.published_at, "Unknown")
            ));
            lines.push(format!("URL: {}", or_default(&article.url, "No URL provided")));
            lines.push(String::new());
            lines.push("Summary:".to_string());
            lines.push(or_default(&article.description, "No summary available").to_string());
            lines.push(String::new());
            lines.push(String::new());
        }
    }

    lines.push(heavy_rule());
    lines.push("End of Report".to_string());
    lines.push(heavy_rule());
    lines.join("\n")
}

/// Write the rendered report under `output_dir` as
/// `banking_news_{date}_{time}.txt`.
///
/// Creates the directory if needed. Any failure is logged and yields
/// `None`, signaling "report not persisted"; the caller still exits
/// successfully.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir.display()))]
pub async fn save(
    report: &str,
    output_dir: &Path,
    generated_at: DateTime<Local>,
) -> Option<PathBuf> {
    if let Err(e) = fs::create_dir_all(output_dir).await {
        error!(error = %e, "Failed to create output directory");
        return None;
    }

    let filename = format!(
        "banking_news_{}_{}.txt",
        generated_at.format("%Y-%m-%d"),
        generated_at.format("%H-%M-%S")
    );
    let path = output_dir.join(filename);

    match fs::write(&path, report).await {
        Ok(()) => {
            info!(path = %path.display(), "Report saved");
            Some(path)
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to save report");
            None
        }
    }
}
