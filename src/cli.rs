//! Command-line interface definitions for sunnah_scrape.
//!
//! Connection settings are global flags, each also readable from an
//! environment variable. Running without a subcommand walks the default
//! collection into the default output directory.

use crate::config::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use crate::outputs::OutputFormat;
use crate::walker::StopPolicy;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Collection walked when none is given.
pub const DEFAULT_SLUG: &str = "bukhari";

/// Directory datasets are written to when none is given.
pub const DEFAULT_OUT_DIR: &str = "datasets";

/// Command-line arguments for sunnah_scrape.
///
/// # Examples
///
/// ```sh
/// # Whole collection, CSV named after the collection
/// sunnah_scrape walk muslim --out-dir ./datasets
///
/// # One book only
/// sunnah_scrape page bukhari 3 --output ./book3.csv
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Site to scrape; hadith links are resolved against it too
    #[arg(long, env = "SUNNAH_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// User-Agent header sent with every request
    #[arg(long, env = "SUNNAH_USER_AGENT", default_value = DEFAULT_USER_AGENT, global = true)]
    pub user_agent: String,

    /// Per-request timeout in seconds; waits indefinitely when unset
    #[arg(long, env = "SUNNAH_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Scrape every book of a collection into one file
    Walk(WalkArgs),
    /// Scrape a single book page
    Page(PageArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Walk(WalkArgs::default())
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct WalkArgs {
    /// Collection slug, e.g. `bukhari` or `muslim`
    #[arg(default_value = DEFAULT_SLUG)]
    pub slug: String,

    /// Output directory for the collection file
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Which failed page fetches end the walk
    #[arg(long, value_enum, default_value_t)]
    pub stop_policy: StopPolicy,

    /// Stop after this many pages even if more exist
    #[arg(long)]
    pub max_pages: Option<u32>,
}

impl Default for WalkArgs {
    fn default() -> Self {
        Self {
            slug: DEFAULT_SLUG.to_string(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            format: OutputFormat::default(),
            stop_policy: StopPolicy::default(),
            max_pages: None,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PageArgs {
    /// Collection slug
    pub slug: String,

    /// Book (page) number, starting at 1
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Output file [default: datasets/hadiths.<format>]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

impl PageArgs {
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            PathBuf::from(DEFAULT_OUT_DIR).join(format!("hadiths.{}", self.format.extension()))
        })
    }
}
