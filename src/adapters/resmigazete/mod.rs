//! Official Gazette collector
//!
//! Fetches the daily index from the gazette site. The RSS feeds are tried
//! first; when none yields entries the web index pages are tried instead.
//! Each URL gets a single attempt.

mod feed;
mod index;
mod page;

use std::time::Duration;

use anyhow::{Context, bail};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};

use crate::config::SourceConfig;
use crate::core::models::Gazette;
use crate::core::ports::GazetteSource;

pub use feed::{is_feed, parse_feed};
pub use index::{
    FALLBACK_SECTION, FALLBACK_SUBSECTION, Heading, IndexBuilder, absolute_link, classify_heading,
    parse_issue_date, parse_issue_number,
};
pub use page::parse_page;

/// Public site of the Official Gazette
pub const BASE_URL: &str = "https://www.resmigazete.gov.tr";

/// Feed paths, current index first
pub const FEED_PATHS: &[&str] = &["rss/fihrist.xml", "rss/eskifihrist.xml"];

/// Web index paths tried when no feed yields entries
pub const WEB_PATHS: &[&str] = &["default.aspx", ""];

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Collector for the live gazette site
#[derive(Debug)]
pub struct ResmiGazeteClient {
    client: Client,
    base_url: String,
    feed_timeout: Duration,
    web_timeout: Duration,
}

impl ResmiGazeteClient {
    /// Build a client from the `[source]` configuration
    pub fn new(config: &SourceConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/rss+xml, application/xml, text/xml, text/html, */*"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("tr-TR,tr;q=0.9,en-US;q=0.8,en;q=0.7"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            feed_timeout: Duration::from_secs(config.feed_timeout_secs),
            web_timeout: Duration::from_secs(config.web_timeout_secs),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    fn get(&self, url: &str, timeout: Duration) -> anyhow::Result<String> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .with_context(|| format!("Request to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("{url} returned an error status"))?;
        response.text().with_context(|| format!("Failed to read body of {url}"))
    }

    fn try_feeds(&self, today: chrono::NaiveDate) -> Option<Gazette> {
        for path in FEED_PATHS {
            let url = self.url(path);
            match self.get(&url, self.feed_timeout) {
                Ok(body) => {
                    let gazette = parse_feed(&body, &self.base_url, today);
                    if !gazette.entries.is_empty() {
                        log::info!("Collected {} entries from {url}", gazette.entries.len());
                        return Some(gazette);
                    }
                    log::warn!("Feed {url} listed no entries");
                },
                Err(e) => log::warn!("Feed unavailable: {e:#}"),
            }
        }
        None
    }

    fn try_pages(&self, today: chrono::NaiveDate) -> Option<Gazette> {
        for path in WEB_PATHS {
            let url = self.url(path);
            match self.get(&url, self.web_timeout) {
                Ok(body) => {
                    let gazette = parse_page(&body, &self.base_url, today);
                    log::info!("Collected {} entries from {url}", gazette.entries.len());
                    return Some(gazette);
                },
                Err(e) => log::warn!("Web index unavailable: {e:#}"),
            }
        }
        None
    }
}

impl GazetteSource for ResmiGazeteClient {
    fn fetch(&self) -> anyhow::Result<Gazette> {
        let today = chrono::Local::now().date_naive();

        if let Some(gazette) = self.try_feeds(today) {
            return Ok(gazette);
        }
        log::info!("No feed yielded entries, trying the web index");

        match self.try_pages(today) {
            Some(gazette) => Ok(gazette),
            None => bail!("Neither the feed nor the web index of {} could be reached", self.base_url),
        }
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}
