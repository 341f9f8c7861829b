//! Error type shared by the fetcher, the walker and the writers.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("page {page} of {slug} returned unexpected status {status}")]
    UnexpectedStatus {
        slug: String,
        page: u32,
        status: StatusCode,
    },
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
