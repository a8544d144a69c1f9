//! Pipeline orchestration
//!
//! One run: collect the issue, filter it, build the digest and hand it to
//! the notifier. Each step runs once; nothing is retried.

use anyhow::Context;

use crate::core::models::FilterConfig;
use crate::core::ports::{GazetteSource, Notifier};
use crate::core::services::{Digest, build, filter};
use crate::output::{RunOutcome, RunReport};

/// Run the pipeline once
///
/// With `notifier` set to `None` the digest is built but not sent. An issue
/// without entries, or one where every entry is filtered, completes without
/// sending anything.
pub fn run(
    source: &dyn GazetteSource,
    notifier: Option<&dyn Notifier>,
    filters: FilterConfig,
) -> anyhow::Result<RunReport> {
    log::info!("Collecting gazette index from {}", source.describe());
    let gazette = source
        .fetch()
        .with_context(|| format!("Failed to collect the gazette from {}", source.describe()))?;
    let issue = gazette.issue;
    log::info!(
        "Issue {} (Sayı: {}) lists {} entries",
        issue.display_date(),
        issue.display_number(),
        gazette.entries.len()
    );

    let active: Vec<String> = filters.active().iter().map(ToString::to_string).collect();
    log::debug!("Active filters: {}", if active.is_empty() { "none".to_string() } else { active.join(", ") });

    if gazette.entries.is_empty() {
        log::warn!("The issue lists no entries, nothing to send");
        return Ok(RunReport::new(RunOutcome::NothingPublished, source.describe(), issue, Digest::default()));
    }

    let result = filter(gazette.entries, filters)?;
    let digest = build(&result);
    log::info!("Kept {} entries, {}", digest.kept, digest.summary.describe());

    if digest.is_empty() {
        log::warn!("Every entry was filtered out, nothing to send");
        return Ok(RunReport::new(RunOutcome::AllFiltered, source.describe(), issue, digest));
    }

    let Some(notifier) = notifier else {
        log::info!("Dry run, digest not sent");
        return Ok(RunReport::new(RunOutcome::DryRun, source.describe(), issue, digest));
    };

    notifier
        .send(&issue, &digest)
        .with_context(|| format!("Failed to deliver the digest to {}", notifier.recipient()))?;
    let recipient = notifier.recipient().to_string();
    Ok(RunReport::new(RunOutcome::Sent, source.describe(), issue, digest).with_recipient(recipient))
}
