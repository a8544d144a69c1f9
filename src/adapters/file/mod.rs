//! Saved index source
//!
//! Reads a previously downloaded feed or web index from disk. Useful for
//! replaying a past issue and for running without network access.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;

use crate::adapters::resmigazete::{BASE_URL, is_feed, parse_feed, parse_page};
use crate::core::models::Gazette;
use crate::core::ports::GazetteSource;

/// Gazette source backed by a saved feed or index page
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    base_url: String,
}

impl FileSource {
    /// Read from `path`, resolving relative links against the public site
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Resolve relative links against `base_url` instead
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl GazetteSource for FileSource {
    fn fetch(&self) -> anyhow::Result<Gazette> {
        let body = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let today = chrono::Local::now().date_naive();

        let gazette = if is_feed(&body) {
            log::debug!("Parsing {} as a feed", self.path.display());
            parse_feed(&body, &self.base_url, today)
        } else {
            log::debug!("Parsing {} as a web index", self.path.display());
            parse_page(&body, &self.base_url, today)
        };
        log::info!("Collected {} entries from {}", gazette.entries.len(), self.path.display());
        Ok(gazette)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
