//! Entry model
//!
//! One listed item in a gazette issue.

use serde::{Deserialize, Serialize};

use super::Section;

/// Format of the linked document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
    /// PDF scan of the printed page
    Pdf,
    /// HTML rendition
    Htm,
    /// Anything else
    #[default]
    Unknown,
}

impl DocType {
    /// Infer the document type from its link
    #[must_use]
    pub fn from_link(link: &str) -> Self {
        let link = link.to_lowercase();
        if link.contains(".pdf") {
            Self::Pdf
        } else if link.contains(".htm") {
            Self::Htm
        } else {
            Self::Unknown
        }
    }

    /// Upper-case badge text (`PDF`, `HTM`)
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Htm => "HTM",
            Self::Unknown => "?",
        }
    }
}

impl std::fmt::Display for DocType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pdf => write!(f, "pdf"),
            Self::Htm => write!(f, "htm"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A gazette entry as handed over by a collector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Title as published
    pub title: String,

    /// Top-level division; `None` only when the collector failed to place it
    pub section: Option<Section>,

    /// Finer category label, e.g. "YÖNETMELİKLER" or "university regulation"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsection: Option<String>,

    /// Absolute URL of the full document
    pub link: String,

    /// Linked document format
    #[serde(default)]
    pub doc_type: DocType,
}

impl Entry {
    /// Create an entry filed under `section`, inferring the doc type from the link
    pub fn new(title: impl Into<String>, section: Section, link: impl Into<String>) -> Self {
        let link = link.into();
        Self {
            title: title.into(),
            section: Some(section),
            subsection: None,
            doc_type: DocType::from_link(&link),
            link,
        }
    }

    /// Set the subsection label
    #[must_use]
    pub fn with_subsection(mut self, subsection: impl Into<String>) -> Self {
        self.subsection = Some(subsection.into());
        self
    }
}
