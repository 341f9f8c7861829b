//! Dataset writers.
//!
//! # Submodules
//!
//! - [`csv`]: Writes records as a comma-delimited file with a header row
//! - [`json`]: Writes records as a JSON array keyed by the same column names
//!
//! # Output Structure
//!
//! ```text
//! out_dir/
//! ├── Sahih_al-Bukhari_all_books.csv   # `walk`, derived from the references
//! └── hadiths.csv                      # `page`, fixed name unless overridden
//! ```

use crate::error::ScrapeError;
use crate::models::Record;
use clap::ValueEnum;
use std::path::Path;

pub mod csv;
pub mod json;

/// Serialization format of the exported dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    /// File extension written for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Write `records` to `path` in the given format, creating parent directories.
pub async fn write_records(
    records: &[Record],
    path: &Path,
    format: OutputFormat,
) -> Result<(), ScrapeError> {
    match format {
        OutputFormat::Csv => self::csv::write_records(records, path).await,
        OutputFormat::Json => self::json::write_records(records, path).await,
    }
}

/// Create the parent directory of `path` if it has one.
pub(crate) async fn ensure_parent_dir(path: &Path) -> Result<(), ScrapeError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }
    Ok(())
}
