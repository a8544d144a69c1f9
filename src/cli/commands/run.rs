//! Run command - one pass of the digest pipeline

use std::path::Path;

use crate::cli::app::RunArgs;
use gazette_digest::adapters::{FileSource, ResmiGazeteClient, SendGridNotifier};
use gazette_digest::config::AppConfig;
use gazette_digest::core::models::FilterConfig;
use gazette_digest::core::ports::{GazetteSource, Notifier};
use gazette_digest::output::OutputMode;
use gazette_digest::runner;

/// Collect, filter and deliver today's digest
pub fn run(args: RunArgs, config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let (config, _) = AppConfig::load(config_path)?;
    let mut config = config.with_env(|name| std::env::var(name).ok());
    let filters = effective_filters(config.filters, &args);
    if let Some(to) = args.to {
        config.email.to_email = Some(to);
    }

    // Checked before fetching so a misconfigured run fails fast
    let notifier: Option<Box<dyn Notifier>> = if args.dry_run {
        None
    } else {
        Some(Box::new(SendGridNotifier::new(&config.email)?))
    };

    let source: Box<dyn GazetteSource> = match args.input {
        Some(path) => Box::new(FileSource::new(path).with_base_url(config.source.base_url.as_str())),
        None => Box::new(ResmiGazeteClient::new(&config.source)?),
    };

    let report = runner::run(source.as_ref(), notifier.as_deref(), filters)?;
    report.render(mode);
    Ok(())
}

/// Apply per-run toggles; `--suppress` wins over `--include`
fn effective_filters(base: FilterConfig, args: &RunArgs) -> FilterConfig {
    let included = args.include.iter().fold(base, |acc, &c| acc.with(c, false));
    args.suppress.iter().fold(included, |acc, &c| acc.with(c, true))
}
