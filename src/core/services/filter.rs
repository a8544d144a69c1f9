//! Filter engine - decides keep or drop for every entry
//!
//! This is pure business logic with no I/O. Each entry is tested against the
//! rule table in precedence order; the first active rule that matches wins
//! and becomes the entry's drop category. Entries no active rule claims are
//! kept, grouped by section in the order the collector produced them.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::core::models::{DropCategory, Entry, FilterConfig, Section};

use super::rules::{haystack, rules};

/// Errors raised by the filter engine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// An entry reached the engine without a required field
    #[error("malformed entry {title:?} ({link}): missing {missing}")]
    MalformedEntry {
        /// Title of the offending entry (may be empty)
        title: String,
        /// Link of the offending entry
        link: String,
        /// Name of the missing field
        missing: &'static str,
    },
}

/// Outcome for a single entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Entry goes into the digest
    Keep,
    /// Entry is suppressed under this category
    Drop(DropCategory),
}

/// Aggregate result of one filter pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterResult {
    sections: Vec<(Section, Vec<Entry>)>,
    dropped: Vec<(Entry, DropCategory)>,
    counts: BTreeMap<DropCategory, usize>,
}

impl FilterResult {
    /// Kept entries grouped by section, sections in order of first appearance
    #[must_use]
    pub fn sections(&self) -> &[(Section, Vec<Entry>)] {
        &self.sections
    }

    /// Kept entries in input order within each section
    pub fn kept(&self) -> impl Iterator<Item = &Entry> {
        self.sections.iter().flat_map(|(_, entries)| entries)
    }

    /// Dropped entries with the category that claimed them, in input order
    #[must_use]
    pub fn dropped(&self) -> &[(Entry, DropCategory)] {
        &self.dropped
    }

    /// Number of dropped entries per category, in precedence order
    #[must_use]
    pub const fn drop_counts(&self) -> &BTreeMap<DropCategory, usize> {
        &self.counts
    }

    /// Number of kept entries
    #[must_use]
    pub fn kept_count(&self) -> usize {
        self.sections.iter().map(|(_, entries)| entries.len()).sum()
    }

    /// Number of dropped entries
    #[must_use]
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }

    /// Number of entries the pass received
    #[must_use]
    pub fn total(&self) -> usize {
        self.kept_count() + self.dropped_count()
    }

    fn keep(&mut self, section: Section, entry: Entry) {
        match self.sections.iter_mut().find(|(s, _)| *s == section) {
            Some((_, entries)) => entries.push(entry),
            None => self.sections.push((section, vec![entry])),
        }
    }

    fn drop_entry(&mut self, entry: Entry, category: DropCategory) {
        *self.counts.entry(category).or_insert(0) += 1;
        self.dropped.push((entry, category));
    }
}

/// Decide a single entry
///
/// Walks the rule table top to bottom and returns the first active category
/// that matches. An entry matching several categories is reported under the
/// earliest one only.
#[must_use]
pub fn classify(entry: &Entry, config: FilterConfig) -> Decision {
    let text = haystack(entry);
    rules()
        .iter()
        .filter(|rule| config.suppresses(rule.category()))
        .find(|rule| rule.matches(entry, &text))
        .map_or(Decision::Keep, |rule| Decision::Drop(rule.category()))
}

/// Run one filter pass over a collected issue
///
/// # Errors
///
/// Returns [`FilterError::MalformedEntry`] for the first entry with a blank
/// title or no section. No partial result is returned.
pub fn filter(entries: Vec<Entry>, config: FilterConfig) -> Result<FilterResult, FilterError> {
    let mut result = FilterResult::default();

    for entry in entries {
        let section = validate(&entry)?;
        match classify(&entry, config) {
            Decision::Keep => result.keep(section, entry),
            Decision::Drop(category) => result.drop_entry(entry, category),
        }
    }

    Ok(result)
}

fn validate(entry: &Entry) -> Result<Section, FilterError> {
    let malformed = |missing: &'static str| FilterError::MalformedEntry {
        title: entry.title.clone(),
        link: entry.link.clone(),
        missing,
    };

    if entry.title.trim().is_empty() {
        return Err(malformed("title"));
    }
    entry.section.ok_or_else(|| malformed("section"))
}
