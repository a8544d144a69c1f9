//! Config command - show the effective configuration

use std::path::Path;

use gazette_digest::config::AppConfig;
use gazette_digest::output::{ConfigView, OutputMode};

/// Print the configuration a run would use
pub fn config(config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let (config, path) = AppConfig::load(config_path)?;
    let config = config.with_env(|name| std::env::var(name).ok());

    ConfigView {
        exists: path.exists(),
        path,
        api_key_set: config.email.api_key.is_some(),
        config,
    }
    .render(mode)
}
