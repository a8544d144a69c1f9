//! Digest builder - turns a filter result into a presentation-ready structure
//!
//! Rendering-agnostic: no markup, no I/O, no clock. The same
//! [`FilterResult`] always yields an identical [`Digest`].

use serde::Serialize;

use crate::core::models::{DocType, DropCategory, Section};

use super::filter::FilterResult;

/// One kept entry, reduced to what a reader needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigestItem {
    /// Entry title as published
    pub title: String,
    /// Link to the full document
    pub link: String,
    /// Linked document format
    pub doc_type: DocType,
}

/// A section with at least one kept entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigestSection {
    /// Section tag
    pub section: Section,
    /// Heading to print
    pub label: String,
    /// Kept entries in index order
    pub items: Vec<DigestItem>,
}

/// Dropped entries of one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// Drop category
    pub category: DropCategory,
    /// Number of entries dropped under it
    pub count: usize,
}

/// What the filter removed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DropSummary {
    /// Total dropped entries
    pub total: usize,
    /// Non-zero counts in rule precedence order
    pub breakdown: Vec<CategoryCount>,
}

impl DropSummary {
    /// One-line summary, e.g. "15 filtered: 10 university regulations, 5 announcement-section notices"
    #[must_use]
    pub fn describe(&self) -> String {
        if self.total == 0 {
            return "nothing filtered".to_string();
        }

        let parts: Vec<String> =
            self.breakdown.iter().map(|c| c.category.describe(c.count)).collect();
        format!("{} filtered: {}", self.total, parts.join(", "))
    }
}

/// Grouped, filtered summary of one gazette issue
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Digest {
    /// Sections with kept entries, in order of first appearance
    pub sections: Vec<DigestSection>,
    /// Number of kept entries
    pub kept: usize,
    /// Dropped entry counts
    pub summary: DropSummary,
}

impl Digest {
    /// Whether nothing survived filtering
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Entries the filter pass received
    #[must_use]
    pub const fn total(&self) -> usize {
        self.kept + self.summary.total
    }
}

/// Build the digest for a filter result
#[must_use]
pub fn build(result: &FilterResult) -> Digest {
    let sections: Vec<DigestSection> = result
        .sections()
        .iter()
        .filter(|(_, entries)| !entries.is_empty())
        .map(|(section, entries)| DigestSection {
            section: *section,
            label: section.label().to_string(),
            items: entries
                .iter()
                .map(|e| DigestItem {
                    title: e.title.clone(),
                    link: e.link.clone(),
                    doc_type: e.doc_type,
                })
                .collect(),
        })
        .collect();

    let breakdown: Vec<CategoryCount> = result
        .drop_counts()
        .iter()
        .filter(|&(_, &count)| count > 0)
        .map(|(&category, &count)| CategoryCount { category, count })
        .collect();

    Digest {
        kept: sections.iter().map(|s| s.items.len()).sum(),
        sections,
        summary: DropSummary {
            total: result.dropped_count(),
            breakdown,
        },
    }
}
