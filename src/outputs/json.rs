//! JSON output: a pretty-printed array of records keyed by the CSV column names.

use crate::error::ScrapeError;
use crate::models::Record;
use crate::outputs::ensure_parent_dir;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write `records` to `path` as a JSON array.
#[instrument(level = "info", skip(records), fields(path = %path.display(), count = records.len()))]
pub async fn write_records(records: &[Record], path: &Path) -> Result<(), ScrapeError> {
    let json = serde_json::to_string_pretty(records)?;

    if let Err(e) = ensure_parent_dir(path).await {
        error!(error = %e, "Failed to create JSON dir");
        return Err(e);
    }

    fs::write(path, json).await?;
    info!("Wrote JSON");
    Ok(())
}
