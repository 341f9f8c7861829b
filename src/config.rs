//! Runtime configuration for talking to the hadith site.

use crate::error::ScrapeError;
use std::time::Duration;
use url::Url;

/// Host every collection page is served from.
pub const DEFAULT_BASE_URL: &str = "https://sunnah.com";

/// The site refuses some default client signatures, so a browser-like agent is sent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Connection settings for [`SunnahClient`](crate::scrapers::sunnah::SunnahClient).
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Scheme and host pages are fetched from; also the base for hadith links.
    pub base_url: Url,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ScrapeConfig {
    pub fn new(
        base_url: &str,
        user_agent: &str,
        timeout_secs: Option<u64>,
    ) -> Result<Self, ScrapeError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            user_agent: user_agent.to_string(),
            timeout: timeout_secs.map(Duration::from_secs),
        })
    }

    /// URL of one page of a collection: `{base}/{slug}/{page}`.
    pub fn page_url(&self, slug: &str, page_number: u32) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            slug,
            page_number
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScrapeConfig::new(DEFAULT_BASE_URL, DEFAULT_USER_AGENT, None).unwrap();
        assert_eq!(config.base_url.as_str(), "https://sunnah.com/");
        assert_eq!(config.user_agent, "Mozilla/5.0");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_page_url() {
        let config = ScrapeConfig::new(DEFAULT_BASE_URL, DEFAULT_USER_AGENT, None).unwrap();
        assert_eq!(config.page_url("bukhari", 3), "https://sunnah.com/bukhari/3");
    }

    #[test]
    fn test_page_url_with_trailing_slash_base() {
        let config = ScrapeConfig::new("http://127.0.0.1:8080/", "ua", Some(5)).unwrap();
        assert_eq!(config.page_url("demo", 1), "http://127.0.0.1:8080/demo/1");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(ScrapeConfig::new("not a url", "ua", None).is_err());
    }
}
