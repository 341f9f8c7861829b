//! # sunnah_scrape
//!
//! Scrapes hadith collections from [sunnah.com](https://sunnah.com) into
//! flat datasets, one row per hadith.
//!
//! ## Usage
//!
//! ```sh
//! sunnah_scrape                      # walk `bukhari` into ./datasets
//! sunnah_scrape walk muslim -o ./datasets
//! sunnah_scrape page bukhari 3 --output ./book3.csv
//! ```
//!
//! ## Architecture
//!
//! The application is a one-way pipeline:
//! 1. **Fetching**: Request `/{slug}/{book}` for book 1, 2, 3, ...
//! 2. **Extraction**: Parse every hadith container on the page into a [`models::Record`]
//! 3. **Accumulation**: Collect records in fetch order until a page fetch fails
//! 4. **Output**: Write the whole collection once, as CSV (default) or JSON

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod models;
mod outputs;
mod scrapers;
mod utils;
mod walker;

#[cfg(test)]
mod test_support;

use cli::{Cli, Command, PageArgs, WalkArgs};
use config::ScrapeConfig;
use error::ScrapeError;
use models::PageOutcome;
use scrapers::sunnah::SunnahClient;
use utils::ensure_writable_dir;

#[tokio::main]
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

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = ScrapeConfig::new(&args.base_url, &args.user_agent, args.timeout_secs)?;
    info!(
        base_url = %config.base_url,
        user_agent = %config.user_agent,
        timeout = ?config.timeout,
        "sunnah_scrape starting up"
    );
    let client = SunnahClient::new(config)?;

    let result = match args.command.unwrap_or_default() {
        Command::Walk(walk) => run_walk(&client, walk).await,
        Command::Page(page) => run_page(&client, page).await,
    };

    let elapsed = start_time.elapsed();
    match &result {
        Ok(count) => info!(?elapsed, count, "Execution complete"),
        Err(e) => error!(?elapsed, error = %e, "Execution failed"),
    }
    result.map(|_| ()).map_err(Into::into)
}

/// Walk a whole collection and write it to `{out_dir}/{title}_all_books.*`.
#[instrument(level = "info", skip(client))]
async fn run_walk(client: &SunnahClient, args: WalkArgs) -> Result<usize, ScrapeError> {
    // Fail on a bad output directory before spending minutes on the walk.
    if let Err(e) = ensure_writable_dir(&args.out_dir).await {
        error!(
            path = %args.out_dir.display(),
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e.into());
    }

    let summary =
        walker::walk_collection(client, &args.slug, args.stop_policy, args.max_pages).await?;
    if summary.records.len() < 2 {
        warn!(
            slug = %summary.slug,
            count = summary.records.len(),
            "Fewer than two records; output name may fall back to the slug"
        );
    }

    let path = walker::write_collection(&summary, &args.out_dir, args.format).await?;
    info!(
        path = %path.display(),
        count = summary.records.len(),
        pages = summary.pages_scraped(),
        stop_reason = ?summary.stop_reason,
        "Saved collection"
    );
    Ok(summary.records.len())
}

/// Scrape one page into a single file.
#[instrument(level = "info", skip(client))]
async fn run_page(client: &SunnahClient, args: PageArgs) -> Result<usize, ScrapeError> {
    match client.fetch_and_extract(&args.slug, args.page).await? {
        PageOutcome::Records(records) => {
            let path = args.output_path();
            outputs::write_records(&records, &path, args.format).await?;
            info!(path = %path.display(), count = records.len(), "Saved page");
            Ok(records.len())
        }
        PageOutcome::Missing { status } => Err(ScrapeError::UnexpectedStatus {
            slug: args.slug,
            page: args.page,
            status,
        }),
    }
}
