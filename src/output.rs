//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::fmt::Write as _;
use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;

use crate::config::AppConfig;
use crate::core::models::{IssueInfo, Section};
use crate::core::services::{Digest, Rule};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// Digest delivered
    Sent,
    /// Digest built but not sent
    DryRun,
    /// The issue listed no entries
    NothingPublished,
    /// Every entry was filtered out
    AllFiltered,
}

/// Kept entries in one section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionCount {
    /// Section tag
    pub section: Section,
    /// Kept entries in it
    pub count: usize,
}

/// Result of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// How the run ended
    pub outcome: RunOutcome,
    /// Where the entries came from
    pub source: String,
    /// Issue metadata
    pub issue: IssueInfo,
    /// Who received the digest, when it was sent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    /// Kept counts per section, largest first
    pub section_counts: Vec<SectionCount>,
    /// The digest itself
    pub digest: Digest,
}

impl RunReport {
    /// Build a report, deriving the per-section counts from `digest`
    ///
    /// Sections are ordered by kept count, largest first; ties keep the
    /// order in which the sections appear in the issue.
    #[must_use]
    pub fn new(outcome: RunOutcome, source: String, issue: IssueInfo, digest: Digest) -> Self {
        let mut section_counts: Vec<SectionCount> = digest
            .sections
            .iter()
            .map(|s| SectionCount {
                section: s.section,
                count: s.items.len(),
            })
            .collect();
        // Stable sort keeps appearance order among equal counts
        section_counts.sort_by(|a, b| b.count.cmp(&a.count));

        Self {
            outcome,
            source,
            issue,
            recipient: None,
            section_counts,
            digest,
        }
    }

    /// Record the recipient of a sent digest
    #[must_use]
    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = Some(recipient.into());
        self
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable rendering
    #[must_use]
    pub fn human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {} (Sayı: {})",
            "Resmi Gazete".bold(),
            self.issue.display_date(),
            self.issue.display_number()
        );
        let _ = writeln!(out, "  Source: {}", self.source);
        let _ = writeln!(
            out,
            "  {} entries collected, {} kept, {}",
            self.digest.total(),
            self.digest.kept,
            self.digest.summary.describe()
        );

        match self.outcome {
            RunOutcome::NothingPublished => {
                let _ = writeln!(out, "\n{} The issue lists no entries. Nothing sent.", "!".yellow());
                return out;
            },
            RunOutcome::AllFiltered => {
                let _ = writeln!(out, "\n{} Every entry was filtered out. Nothing sent.", "!".yellow());
                return out;
            },
            RunOutcome::Sent | RunOutcome::DryRun => {},
        }

        if self.outcome == RunOutcome::DryRun {
            for section in &self.digest.sections {
                let _ = writeln!(out, "\n{} ({})", section.label.bold(), section.items.len());
                for item in &section.items {
                    let _ = writeln!(out, "  • {} [{}]", item.title, item.doc_type.badge());
                    let _ = writeln!(out, "    {}", item.link.dimmed());
                }
            }
        } else {
            out.push('\n');
            for count in &self.section_counts {
                let _ = writeln!(out, "  {:>4}  {}", count.count, count.section.label());
            }
        }

        out.push('\n');
        match (&self.outcome, &self.recipient) {
            (RunOutcome::Sent, Some(to)) => {
                let _ = writeln!(out, "{} Digest sent to {to}", "✓".green());
            },
            (RunOutcome::Sent, None) => {
                let _ = writeln!(out, "{} Digest sent", "✓".green());
            },
            _ => {
                let _ = writeln!(out, "{} Dry run: nothing sent", "-".cyan());
            },
        }
        out
    }
}

/// One row of the rule listing
#[derive(Debug, Clone, Serialize)]
pub struct RuleRow {
    /// Position in the precedence order, starting at 1
    pub precedence: usize,
    /// Category tag
    pub category: String,
    /// Whether the rule is active under the effective configuration
    pub active: bool,
    /// What the rule inspects
    pub description: String,
}

/// Result of the `rules` command
#[derive(Debug, Clone, Serialize)]
pub struct RuleListing {
    /// Rules in precedence order
    pub rules: Vec<RuleRow>,
}

impl RuleListing {
    /// Describe `rules` against the active toggles
    #[must_use]
    pub fn new<'a>(rules: impl IntoIterator<Item = &'a Rule>, is_active: impl Fn(&Rule) -> bool) -> Self {
        Self {
            rules: rules
                .into_iter()
                .enumerate()
                .map(|(i, rule)| RuleRow {
                    precedence: i + 1,
                    category: rule.category().tag().to_string(),
                    active: is_active(rule),
                    description: rule.describe(),
                })
                .collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable rendering
    #[must_use]
    pub fn human(&self) -> String {
        let mut out = String::from("Rules (first match wins):\n\n");
        for row in &self.rules {
            let state = if row.active {
                "on ".green()
            } else {
                "off".dimmed()
            };
            let _ = writeln!(out, "  {}. [{state}] {}", row.precedence, row.category.bold());
            let _ = writeln!(out, "         {}\n", row.description);
        }
        out
    }
}

/// Result of the `config` command
#[derive(Debug, Clone, Serialize)]
pub struct ConfigView {
    /// Where the config file was looked up
    pub path: PathBuf,
    /// Whether that file exists
    pub exists: bool,
    /// Whether a SendGrid API key is available
    pub api_key_set: bool,
    /// Effective configuration
    pub config: AppConfig,
}

impl ConfigView {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) -> anyhow::Result<()> {
        match mode {
            OutputMode::Human => print!("{}", self.human()?),
            OutputMode::Json => print_json(self),
        }
        Ok(())
    }

    /// Human-readable rendering
    pub fn human(&self) -> anyhow::Result<String> {
        let mut out = String::new();
        let status = if self.exists { "" } else { " (not found, using defaults)" };
        let _ = writeln!(out, "Config file: {}{status}", self.path.display());
        let _ = writeln!(out, "API key:     {}", if self.api_key_set { "set" } else { "not set" });
        let _ = writeln!(out, "\n{}", self.config.to_toml()?);
        Ok(out)
    }
}
