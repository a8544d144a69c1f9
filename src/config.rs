//! Configuration management
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. Built-in defaults
//! 2. `config.toml` (default location from [`paths::config_file`], or `--config`)
//! 3. Environment: `SENDGRID_API_KEY`, `TO_EMAIL`, `FROM_EMAIL`
//!
//! The API key is never read from or written to the TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::FilterConfig;
use crate::paths;

/// Environment variable holding the SendGrid API key
pub const ENV_API_KEY: &str = "SENDGRID_API_KEY";
/// Environment variable holding the recipient address
pub const ENV_TO_EMAIL: &str = "TO_EMAIL";
/// Environment variable holding the sender address
pub const ENV_FROM_EMAIL: &str = "FROM_EMAIL";

/// Complete gazette-digest configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Category toggles
    #[serde(default)]
    pub filters: FilterConfig,
    /// Sender and recipient
    #[serde(default)]
    pub email: EmailConfig,
    /// Where the index is fetched from
    #[serde(default)]
    pub source: SourceConfig,
}

/// Email settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Sender address
    #[serde(default = "default_from_email")]
    pub from_email: String,
    /// Sender display name
    #[serde(default = "default_from_name")]
    pub from_name: String,
    /// Recipient address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_email: Option<String>,
    /// SendGrid API key, environment only
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_from_email() -> String {
    "resmigazete@bot.com".to_string()
}

fn default_from_name() -> String {
    "Resmi Gazete Bot".to_string()
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            from_email: default_from_email(),
            from_name: default_from_name(),
            to_email: None,
            api_key: None,
        }
    }
}

/// Collector settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Site root the feed and index paths are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout for feed downloads
    #[serde(default = "default_feed_timeout")]
    pub feed_timeout_secs: u64,
    /// Per-request timeout for web index downloads
    #[serde(default = "default_web_timeout")]
    pub web_timeout_secs: u64,
}

fn default_base_url() -> String {
    crate::adapters::resmigazete::BASE_URL.to_string()
}

const fn default_feed_timeout() -> u64 {
    30
}

const fn default_web_timeout() -> u64 {
    45
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            feed_timeout_secs: default_feed_timeout(),
            web_timeout_secs: default_web_timeout(),
        }
    }
}

impl AppConfig {
    /// Parse a TOML document
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Invalid configuration")
    }

    /// Load the configuration file
    ///
    /// `path` overrides the default location. A missing file at the default
    /// location yields defaults; a missing file that was asked for by name is
    /// an error. Returns the config and the path it was looked up at.
    pub fn load(path: Option<&Path>) -> anyhow::Result<(Self, PathBuf)> {
        let (path, explicit) = path.map_or_else(|| (paths::config_file(), false), |p| (p.to_path_buf(), true));

        if !path.exists() {
            if explicit {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            log::debug!("No config at {}, using defaults", path.display());
            return Ok((Self::default(), path));
        }

        let content =
            fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::from_toml(&content).with_context(|| format!("In {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok((config, path))
    }

    /// Apply environment overrides
    ///
    /// `lookup` resolves a variable name, normally `std::env::var`. Empty
    /// values are ignored.
    #[must_use]
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = get(ENV_API_KEY) {
            self.email.api_key = Some(key);
        }
        if let Some(to) = get(ENV_TO_EMAIL) {
            self.email.to_email = Some(to);
        }
        if let Some(from) = get(ENV_FROM_EMAIL) {
            self.email.from_email = from;
        }
        self
    }

    /// Render as TOML, without secrets
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
