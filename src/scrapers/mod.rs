//! Collection page scrapers.
//!
//! A scraper turns `(collection slug, page number)` into a [`PageOutcome`].
//! The walker only depends on the [`PageSource`] trait, so the same loop
//! drives the live site and in-memory stubs alike.
//!
//! # Supported Sources
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | sunnah.com | [`sunnah`] | HTML scraping | One page per book, `/{slug}/{book}` |

use crate::error::ScrapeError;
use crate::models::PageOutcome;

pub mod sunnah;

/// Something that can produce the records of one collection page.
pub trait PageSource {
    /// Fetch page `page_number` of collection `slug`.
    ///
    /// A non-200 answer is `Ok(PageOutcome::Missing { .. })`; only failures to
    /// get an answer at all are `Err`.
    async fn fetch_page(&self, slug: &str, page_number: u32) -> Result<PageOutcome, ScrapeError>;
}
