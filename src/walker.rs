//! Collection walker.
//!
//! Requests book 1, 2, 3, ... of a collection until a page fetch signals the
//! end, accumulating every record in fetch order. The whole collection is
//! written once, after the walk; nothing is persisted while pages are still
//! being fetched.
//!
//! # Stop Policy
//!
//! The site answers a book past the end of a collection with a non-200
//! status, but a flaky connection or a 5xx looks much the same from here.
//! [`StopPolicy`] makes the choice explicit:
//!
//! - [`StopPolicy::AnyFailure`]: any non-200 status or transport error ends
//!   the walk and the records gathered so far are kept
//! - [`StopPolicy::NotFoundOnly`]: only a 404 ends the walk; anything else
//!   aborts it with an error

use crate::error::ScrapeError;
use crate::models::{PageOutcome, Record, StopReason, WalkSummary};
use crate::outputs::{self, OutputFormat};
use crate::scrapers::PageSource;
use clap::ValueEnum;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::StatusCode;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

static TRAILING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\d+$").expect("static regex is valid"));

/// What ends a collection walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StopPolicy {
    /// Every failed page fetch is read as the end of the collection.
    #[default]
    AnyFailure,
    /// Only `404 Not Found` ends the walk; other failures are errors.
    NotFoundOnly,
}

/// Walk every page of `slug`, starting at page 1.
///
/// # Arguments
///
/// * `source` - Where pages come from; the live site or a stub
/// * `slug` - Collection slug, e.g. `"bukhari"`
/// * `policy` - Which failed fetches end the walk
/// * `max_pages` - Caps the number of pages requested; `None` walks until
///   the source signals the end
///
/// # Returns
///
/// A [`WalkSummary`] holding every record in fetch order and the page the
/// walk stopped at.
///
/// # Errors
///
/// Only under [`StopPolicy::NotFoundOnly`]: a transport failure or a
/// non-404 status aborts the walk and the gathered records are dropped.
#[instrument(level = "info", skip(source))]
pub async fn walk_collection<S: PageSource>(
    source: &S,
    slug: &str,
    policy: StopPolicy,
    max_pages: Option<u32>,
) -> Result<WalkSummary, ScrapeError> {
    let mut records: Vec<Record> = Vec::new();
    let mut page_number: u32 = 1;

    let (stopped_at, stop_reason) = loop {
        if max_pages.is_some_and(|max| page_number > max) {
            info!(slug, max_pages, "Reached page limit");
            break (page_number - 1, StopReason::PageLimit);
        }

        info!(slug, page = page_number, "Scraping page");
        match source.fetch_page(slug, page_number).await {
            Ok(PageOutcome::Records(page)) => {
                info!(slug, page = page_number, count = page.len(), "Collected records");
                records.extend(page);
                page_number += 1;
            }
            Ok(PageOutcome::Missing { status }) => {
                if policy == StopPolicy::NotFoundOnly && status != StatusCode::NOT_FOUND {
                    return Err(ScrapeError::UnexpectedStatus {
                        slug: slug.to_string(),
                        page: page_number,
                        status,
                    });
                }
                break (page_number, StopReason::Status(status));
            }
            Err(e) => {
                if policy == StopPolicy::NotFoundOnly {
                    return Err(e);
                }
                warn!(
                    slug,
                    page = page_number,
                    error = %e,
                    "Page fetch failed; treating as end of collection"
                );
                break (page_number, StopReason::Transport(e.to_string()));
            }
        }
    };

    info!(
        slug,
        last_page = stopped_at.saturating_sub(1),
        count = records.len(),
        "Finished walking collection"
    );
    Ok(WalkSummary {
        slug: slug.to_string(),
        records,
        stopped_at,
        stop_reason,
    })
}

/// Collection name from a canonical reference.
///
/// Drops the trailing hadith number and joins the words with underscores:
/// `"Sahih al-Bukhari 1"` becomes `"Sahih_al-Bukhari"`.
pub fn collection_title(reference: &str) -> String {
    TRAILING_NUMBER
        .replace(reference.trim(), "")
        .replace(' ', "_")
}

/// File stem for a walked collection.
///
/// Prefers the second record's reference, then the first non-empty one, and
/// falls back to `slug` when no record carries a usable reference. The stem
/// never contains a path separator, so the file stays inside the output
/// directory whatever the page text says.
pub fn output_stem(records: &[Record], slug: &str) -> String {
    let usable = |reference: &&str| !reference.trim().is_empty();
    records
        .get(1)
        .map(|r| r.reference.as_str())
        .filter(usable)
        .or_else(|| records.iter().map(|r| r.reference.as_str()).find(usable))
        .and_then(|reference| file_safe(&collection_title(reference)))
        .or_else(|| file_safe(slug))
        .unwrap_or_else(|| "collection".to_string())
}

/// `stem` with path separators replaced; `None` if nothing usable is left.
fn file_safe(stem: &str) -> Option<String> {
    let safe = stem.replace(['/', '\\'], "_");
    match safe.as_str() {
        "" | "." | ".." => None,
        _ => Some(safe),
    }
}

/// `{out_dir}/{stem}_all_books.{csv|json}` for the given walk.
pub fn output_path(summary: &WalkSummary, out_dir: &Path, format: OutputFormat) -> PathBuf {
    let stem = output_stem(&summary.records, &summary.slug);
    out_dir.join(format!("{stem}_all_books.{}", format.extension()))
}

/// Write a finished walk to `out_dir`.
///
/// # Arguments
///
/// * `summary` - The finished walk
/// * `out_dir` - Directory the file is written to; created if missing
/// * `format` - CSV or JSON
///
/// # Returns
///
/// The path written, `{out_dir}/{stem}_all_books.{ext}` (see [`output_stem`]).
#[instrument(
    level = "info",
    skip(summary),
    fields(slug = %summary.slug, count = summary.records.len())
)]
pub async fn write_collection(
    summary: &WalkSummary,
    out_dir: &Path,
    format: OutputFormat,
) -> Result<PathBuf, ScrapeError> {
    let path = output_path(summary, out_dir, format);
    outputs::write_records(&summary.records, &path, format).await?;
    info!(path = %path.display(), count = summary.records.len(), "Saved collection");
    Ok(path)
}
