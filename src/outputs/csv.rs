//! CSV output.
//!
//! UTF-8, comma-delimited, header row always present (even with no records),
//! one row per record in fetch order. Quoting is left to the `csv` crate so
//! passages containing commas, quotes or newlines survive a round trip.

use crate::error::ScrapeError;
use crate::models::{COLUMNS, Record};
use crate::outputs::ensure_parent_dir;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Render `records` as CSV bytes, header first.
pub fn to_csv_bytes(records: &[Record]) -> Result<Vec<u8>, ScrapeError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.into_inner().map_err(|e| ScrapeError::Io(e.into_error()))
}

/// Write `records` to `path` as CSV.
#[instrument(level = "info", skip(records), fields(path = %path.display(), count = records.len()))]
pub async fn write_records(records: &[Record], path: &Path) -> Result<(), ScrapeError> {
    let bytes = to_csv_bytes(records)?;
    ensure_parent_dir(path).await?;
    fs::write(path, bytes).await?;
    info!("Wrote CSV");
    Ok(())
}
