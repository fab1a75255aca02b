//! # Banking News Monitor
//!
//! A one-shot batch pipeline that scans public news sources for negative
//! news on the US regional banking sector and writes a daily text report.
//!
//! ## Architecture
//!
//! 1. **Fetch**: three source adapters (NewsAPI, Bing News, Google News)
//!    each run a fixed list of topical queries; failures are isolated per
//!    query and per source
//! 2. **Dedup**: cross-source deduplication by lowercased title
//! 3. **Window**: keep only articles published in the trailing 24 hours
//! 4. **Classify**: keyword heuristics for banking context plus negative
//!    sentiment
//! 5. **Report**: render a fixed-format text report and write it to a
//!    timestamped file
//!
//! ## Usage
//!
//! ```sh
//! NEWS_API_KEY=... banking_news_monitor -o ./output
//! ```
//!
//! Every run exits successfully: missing sources, bad articles, and even a
//! failed report write degrade gracefully rather than aborting.

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod classify;
mod cli;
mod config;
mod models;
mod pipeline;
mod report;
mod sources;
mod window;

use cli::Cli;
use config::Config;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("banking news monitor starting up");

    let args = Cli::parse();
    debug!(?args.output_dir, "Parsed CLI arguments");

    let config = Config::new(args.news_api_key, args.output_dir.into());
    let client = sources::http_client(config.request_timeout);

    let negative = pipeline::run(&client, &config).await;

    let generated_at = Local::now();
    let rendered = report::render(&negative, generated_at);
    match report::save(&rendered, &config.output_dir, generated_at).await {
        Some(path) => info!(path = %path.display(), "Monitoring complete"),
        None => warn!("Monitoring complete; report was not persisted"),
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
