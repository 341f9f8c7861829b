//! File system helpers.

use std::io;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Ensure a directory exists and is writable.
///
/// Creates the directory if it doesn't exist, then writes and removes a
/// probe file. Run before a walk so a bad output directory is reported
/// before any page is fetched rather than after the whole collection.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The directory is not writable (permission denied, read-only filesystem, etc.)
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path).await?;
    let probe_path = path.join("..__probe_write__");
    fs::write(&probe_path, b"").await?;
    let _ = fs::remove_file(&probe_path).await;
    info!("Output directory is writable");
    Ok(())
}
