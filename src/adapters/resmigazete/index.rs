//! Shared pieces of index parsing
//!
//! Both the feed and the web page list entries under running headings.
//! [`IndexBuilder`] tracks the current section and subsection while a parser
//! walks the index in order, and applies the admission rules every parser
//! shares.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::core::models::{DocType, Entry, Gazette, IssueInfo, Section, TURKISH_MONTHS};
use crate::core::services::text::{compact, fold};

/// Titles shorter than this are navigation links, not entries
const MIN_TITLE_CHARS: usize = 5;

/// Division for entries listed before any recognizable heading
pub const FALLBACK_SECTION: Section = Section::Administrative;

/// Subsection label for those entries when no grouping label is known
pub const FALLBACK_SUBSECTION: &str = "Genel";

/// Printed division headings, checked in order
const SECTION_HEADINGS: &[(&str, Section)] = &[
    ("yargiilanlari", Section::JudicialNotices),
    ("artirmaeksiltme", Section::TenderNotices),
    ("ihaleilanlari", Section::TenderNotices),
    ("cesitliilanlar", Section::MiscellaneousNotices),
    ("ilanbolumu", Section::Announcements),
    ("yasamabolumu", Section::Legislative),
    ("yurutmeveidare", Section::Administrative),
    ("yargibolumu", Section::Judicial),
];

/// Sub-headings and the division they are printed under
const SUBSECTION_HEADINGS: &[(&str, Section)] = &[
    ("kanun", Section::Legislative),
    ("anayasamahkemesi", Section::Judicial),
    ("yargitay", Section::Judicial),
    ("danistay", Section::Judicial),
    ("yonetmelik", Section::Administrative),
    ("teblig", Section::Administrative),
    ("genelge", Section::Administrative),
    ("cumhurbaskan", Section::Administrative),
    ("milletlerarasi", Section::Administrative),
    ("kurulkarar", Section::Administrative),
    ("atamakarar", Section::Administrative),
    ("kararname", Section::Administrative),
];

/// A heading found in the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Heading {
    /// Top-level division
    Section(Section),
    /// Finer grouping inside a division
    Subsection {
        /// Label as printed
        label: String,
        /// Division it belongs to
        section: Section,
    },
}

/// Recognize a printed heading
#[must_use]
pub fn classify_heading(text: &str) -> Option<Heading> {
    let key = compact(text);
    if key.is_empty() {
        return None;
    }

    if let Some((_, section)) = SECTION_HEADINGS.iter().find(|(needle, _)| key.contains(needle)) {
        return Some(Heading::Section(*section));
    }

    SUBSECTION_HEADINGS.iter().find(|(needle, _)| key.starts_with(needle)).map(|(_, section)| {
        Heading::Subsection {
            label: text.trim().to_string(),
            section: *section,
        }
    })
}

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let months: Vec<String> = TURKISH_MONTHS.iter().map(|m| fold(m)).collect();
    Regex::new(&format!(r"(\d{{1,2}})\s+({})\s+(\d{{4}})", months.join("|")))
        .unwrap_or_else(|e| panic!("invalid date pattern: {e}"))
});

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"sayi\s*:\s*(\d+)").unwrap_or_else(|e| panic!("invalid issue number pattern: {e}"))
});

/// First Turkish date in `text`, e.g. "04 Şubat 2026"
#[must_use]
pub fn parse_issue_date(text: &str) -> Option<NaiveDate> {
    let folded = fold(text);
    let caps = DATE_RE.captures(&folded)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = TURKISH_MONTHS.iter().position(|m| fold(m) == caps[2])?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()? + 1, day)
}

/// Issue number from a "Sayı: 33158" marker
#[must_use]
pub fn parse_issue_number(text: &str) -> Option<u32> {
    NUMBER_RE.captures(&fold(text))?[1].parse().ok()
}

/// Resolve a possibly relative link against the site root
#[must_use]
pub fn absolute_link(base_url: &str, href: &str) -> String {
    let href = href.trim();
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else {
        format!("{}/{}", base_url.trim_end_matches('/'), href.trim_start_matches('/'))
    }
}

/// Accumulates entries while walking an index in order
#[derive(Debug)]
pub struct IndexBuilder {
    base_url: String,
    section: Option<Section>,
    subsection: Option<String>,
    entries: Vec<Entry>,
}

impl IndexBuilder {
    /// Start an empty index for the site at `base_url`
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            section: None,
            subsection: None,
            entries: Vec::new(),
        }
    }

    /// Apply a heading; returns `false` when the text is not a known heading
    pub fn heading(&mut self, text: &str) -> bool {
        match classify_heading(text) {
            Some(Heading::Section(section)) => {
                self.section = Some(section);
                self.subsection = None;
                true
            },
            Some(Heading::Subsection { label, section }) => {
                // Announcement divisions have no sub-headings of their own
                if !self.section.is_some_and(Section::is_announcement) {
                    self.section = Some(section);
                }
                self.subsection = Some(label);
                true
            },
            None => false,
        }
    }

    /// Use an unrecognized grouping label as the current subsection
    ///
    /// The current section is left as it is.
    pub fn label(&mut self, text: &str) {
        let text = text.trim();
        if !text.is_empty() {
            self.subsection = Some(text.to_string());
        }
    }

    /// Record an entry under the current headings
    ///
    /// Entries without a link or with a too-short title are skipped. An entry
    /// seen before any recognizable division heading is filed under
    /// [`FALLBACK_SECTION`], keeping its grouping label or
    /// [`FALLBACK_SUBSECTION`]. Every recorded entry has a section.
    pub fn entry(&mut self, title: &str, href: &str) {
        let title = title.split_whitespace().collect::<Vec<_>>().join(" ");
        if href.trim().is_empty() || title.chars().count() < MIN_TITLE_CHARS {
            return;
        }

        let (section, subsection) = match self.section {
            Some(section) => (section, self.subsection.clone()),
            None => {
                log::debug!("No division heading before {title:?}, filing it under {FALLBACK_SUBSECTION}");
                let label = self.subsection.clone().unwrap_or_else(|| FALLBACK_SUBSECTION.to_string());
                (FALLBACK_SECTION, Some(label))
            },
        };

        let link = absolute_link(&self.base_url, href);
        self.entries.push(Entry {
            title,
            section: Some(section),
            subsection,
            doc_type: DocType::from_link(&link),
            link,
        });
    }

    /// Number of entries recorded so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries were recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finish the index
    #[must_use]
    pub fn finish(self, date: NaiveDate, number: Option<u32>) -> Gazette {
        Gazette {
            issue: IssueInfo {
                date,
                number,
                url: self.base_url,
            },
            entries: self.entries,
        }
    }
}
