//! Rules command - show the rule table

use std::path::Path;

use gazette_digest::config::AppConfig;
use gazette_digest::core::services::rules as rule_table;
use gazette_digest::output::{OutputMode, RuleListing};

/// List the filter rules with their configured state
pub fn rules(config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let (config, _) = AppConfig::load(config_path)?;
    let filters = config.filters;

    RuleListing::new(rule_table(), |rule| filters.suppresses(rule.category())).render(mode);
    Ok(())
}
