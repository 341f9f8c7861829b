//! sunnah.com collection page scraper.
//!
//! Each book of a collection lives at `https://sunnah.com/{slug}/{book}`, e.g.
//! `https://sunnah.com/bukhari/1`. A page carries the book title and one
//! `div.actualHadithContainer` per hadith:
//!
//! ```text
//! div.book_page_english_name          -> book title
//! div.actualHadithContainer           -> one Record each
//! ├── div.arabic_hadith_full          -> arabic
//! ├── div.text_details                -> english
//! └── table.hadith_reference
//!     ├── tr: ... <a href="/bukhari:1">Sahih al-Bukhari 1</a>
//!     └── tr: <td>In-book reference</td><td>: Book 1, Hadith 1</td>
//! ```
//!
//! Requesting a book past the end of the collection answers with a non-200
//! status, which is how the walker knows to stop.

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::models::{PageOutcome, Record};
use crate::scrapers::PageSource;
use once_cell::sync::Lazy;
use std::borrow::Cow;
use reqwest::{Client, StatusCode};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument};
use url::Url;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

static BOOK_TITLE: Lazy<Selector> = Lazy::new(|| selector("div.book_page_english_name"));
static HADITH_CONTAINER: Lazy<Selector> = Lazy::new(|| selector("div.actualHadithContainer"));
static ARABIC: Lazy<Selector> = Lazy::new(|| selector("div.arabic_hadith_full"));
static ENGLISH: Lazy<Selector> = Lazy::new(|| selector("div.text_details"));
static REFERENCE_TABLE: Lazy<Selector> = Lazy::new(|| selector("table.hadith_reference"));
static ROW: Lazy<Selector> = Lazy::new(|| selector("tr"));
static CELL: Lazy<Selector> = Lazy::new(|| selector("td"));
static LINK: Lazy<Selector> = Lazy::new(|| selector("a"));

/// HTTP client for sunnah.com collection pages.
#[derive(Debug, Clone)]
pub struct SunnahClient {
    client: Client,
    config: ScrapeConfig,
}

impl SunnahClient {
    /// Build a client sending the configured `User-Agent` and timeout.
    pub fn new(config: ScrapeConfig) -> Result<Self, ScrapeError> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ScrapeError::Client)?;
        Ok(Self { client, config })
    }

    /// Fetch one collection page and extract its records.
    ///
    /// # Returns
    ///
    /// - `PageOutcome::Records` on HTTP 200, one record per hadith container
    /// - `PageOutcome::Missing` on any other status
    ///
    /// # Errors
    ///
    /// [`ScrapeError::Transport`] when no response could be read.
    #[instrument(level = "info", skip(self))]
    pub async fn fetch_and_extract(
        &self,
        slug: &str,
        page_number: u32,
    ) -> Result<PageOutcome, ScrapeError> {
        let url = self.config.page_url(slug, page_number);
        let transport = |source| ScrapeError::Transport {
            url: url.clone(),
            source,
        };

        let response = self.client.get(&url).send().await.map_err(transport)?;
        let status = response.status();
        if status != StatusCode::OK {
            info!(%url, %status, "Failed to retrieve page");
            return Ok(PageOutcome::Missing { status });
        }

        let body = response.text().await.map_err(transport)?;
        debug!(%url, bytes = body.len(), "Fetched page");
        let records = parse_page(&body, page_number, &self.config.base_url);
        info!(%url, count = records.len(), "Parsed page");
        Ok(PageOutcome::Records(records))
    }
}

impl PageSource for SunnahClient {
    async fn fetch_page(&self, slug: &str, page_number: u32) -> Result<PageOutcome, ScrapeError> {
        self.fetch_and_extract(slug, page_number).await
    }
}

/// Extract every hadith record from a collection page.
///
/// Never fails: a missing element only empties the field it would have
/// filled.
///
/// # Arguments
///
/// * `html` - The page body
/// * `page_number` - Book number, used in every record's `"Book N - Title"` label
/// * `base_url` - Site root the hadith links are resolved against
///
/// # Returns
///
/// One [`Record`] per `div.actualHadithContainer`, in document order.
pub fn parse_page(html: &str, page_number: u32, base_url: &Url) -> Vec<Record> {
    let document = Html::parse_document(html);

    let title = document
        .select(&BOOK_TITLE)
        .next()
        .map(element_text)
        .unwrap_or_else(|| format!("Book {page_number}"));
    let book_label = format!("Book {page_number} - {title}");

    document
        .select(&HADITH_CONTAINER)
        .map(|container| parse_container(container, &book_label, base_url))
        .collect()
}

fn parse_container(container: ElementRef<'_>, book_label: &str, base_url: &Url) -> Record {
    let mut record = Record {
        book_label: book_label.to_string(),
        arabic_text: first_text(container, &ARABIC),
        translated_text: first_text(container, &ENGLISH),
        ..Record::default()
    };

    let Some(table) = container.select(&REFERENCE_TABLE).next() else {
        return record;
    };
    let rows: Vec<ElementRef<'_>> = table.select(&ROW).collect();
    if rows.len() < 2 {
        return record;
    }

    if let Some(link) = rows[0].select(&LINK).next() {
        record.reference = element_text(link);
        record.source_url = link
            .value()
            .attr("href")
            .map(|href| hadith_url(base_url, href))
            .unwrap_or_default();
    }

    record.in_collection_reference = rows[1]
        .select(&CELL)
        .nth(1)
        .map(|cell| cell.text().collect::<String>().replace(':', "").trim().to_string())
        .unwrap_or_default();

    record
}

/// Absolute link for a reference `href`.
///
/// Site links are root-relative (`/bukhari:1`). An href without the leading
/// slash is still read as a site path, since `bukhari:1` would otherwise
/// parse as a URL with scheme `bukhari`. Absolute http(s) links are kept.
fn hadith_url(base_url: &Url, href: &str) -> String {
    let href = href.trim();
    if href.is_empty() {
        return String::new();
    }
    if let Ok(absolute) = Url::parse(href)
        && matches!(absolute.scheme(), "http" | "https")
    {
        return absolute.into();
    }
    let rooted = if href.starts_with('/') {
        Cow::Borrowed(href)
    } else {
        Cow::Owned(format!("/{href}"))
    };
    base_url.join(&rooted).map(String::from).unwrap_or_default()
}

fn first_text(scope: ElementRef<'_>, selector: &Selector) -> String {
    scope.select(selector).next().map(element_text).unwrap_or_default()
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
