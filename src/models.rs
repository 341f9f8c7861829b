//! Data models for scraped hadith records and walk results.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Record`]: One hadith entry as extracted from a collection page
//! - [`PageOutcome`]: What a single page fetch produced
//! - [`WalkSummary`]: The accumulated result of walking a whole collection
//!
//! `Record` serializes with the dataset column names (`book_number`, `arabic`,
//! `english`, ...) so the CSV and JSON outputs share one schema.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Column names of the exported dataset, in order.
pub const COLUMNS: [&str; 6] = [
    "book_number",
    "arabic",
    "english",
    "reference",
    "in_book_reference",
    "hadith_url",
];

/// A single hadith entry extracted from one content container.
///
/// Only `book_label` is guaranteed to be non-empty; every other field falls
/// back to an empty string when the page is missing the matching element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Record {
    /// `"Book {N} - {Title}"`.
    #[serde(rename = "book_number")]
    pub book_label: String,
    /// The Arabic passage.
    #[serde(rename = "arabic")]
    pub arabic_text: String,
    /// The English translation.
    #[serde(rename = "english")]
    pub translated_text: String,
    /// Canonical citation, e.g. `"Sahih al-Bukhari 1"`.
    pub reference: String,
    /// Numbering local to the book, e.g. `"Book 1, Hadith 1"`.
    #[serde(rename = "in_book_reference")]
    pub in_collection_reference: String,
    /// Absolute URL of the canonical reference.
    #[serde(rename = "hadith_url")]
    pub source_url: String,
}

/// Result of fetching one collection page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// HTTP 200; one record per content container (possibly none).
    Records(Vec<Record>),
    /// Any other status. Signals the end of the collection.
    Missing { status: StatusCode },
}

/// Why a walk stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The page answered with a non-200 status.
    Status(StatusCode),
    /// The request itself failed and the stop policy treated it as the end.
    Transport(String),
    /// The configured page cap was reached.
    PageLimit,
}

/// Accumulated result of walking a collection.
#[derive(Debug, Clone)]
pub struct WalkSummary {
    /// The collection slug that was walked.
    pub slug: String,
    /// Every record, in fetch order.
    pub records: Vec<Record>,
    /// The page number whose fetch ended the walk, or under
    /// [`StopReason::PageLimit`] the last page fetched.
    pub stopped_at: u32,
    pub stop_reason: StopReason,
}

impl WalkSummary {
    /// Number of pages that returned records (or an empty 200).
    pub fn pages_scraped(&self) -> u32 {
        match self.stop_reason {
            StopReason::PageLimit => self.stopped_at,
            _ => self.stopped_at.saturating_sub(1),
        }
    }
}
