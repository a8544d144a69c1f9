//! Suppression rule table
//!
//! Rules are data: an ordered list of `(category, matcher)` pairs evaluated
//! top to bottom. Adding a keyword means editing a pattern list below, not
//! the filter's control flow.
//!
//! Text rules run against the folded (ASCII, lowercase) title, subsection and
//! section heading of an entry, one field per line, so a pattern cannot span
//! two fields.

use std::sync::LazyLock;

use regex::RegexSet;

use crate::core::models::{DropCategory, Entry};

use super::text::fold;

/// Academic-institution vocabulary, Turkish and English
const UNIVERSITY_PATTERNS: &[&str] = &[
    r"universite",
    r"fakulte",
    r"enstitu",
    r"yuksekokul",
    r"rektor",
    r"dekan",
    r"akademik",
    r"ogretim uyesi",
    r"docent",
    r"profesor",
    r"university",
    r"faculty",
    r"institute",
    r"vocational school",
    r"higher school",
    r"academic",
];

/// The central bank followed closely by an exchange-rate term
const CENTRAL_BANK_PATTERNS: &[&str] = &[
    r"merkez bankasi.{0,30}(doviz|kur|efektif|parite)",
    r"central bank.{0,30}(exchange|currency|fx)",
];

/// Personnel decisions and staffing calls
const APPOINTMENT_PATTERNS: &[&str] = &[
    r"\batama",
    r"\bkadro",
    r"munhal",
    r"personel alimi",
    r"sozlesmeli personel",
    r"appointment",
];

/// How a rule decides whether an entry belongs to its category
#[derive(Debug)]
enum Matcher {
    /// Any pattern found in the folded entry text
    Keywords(RegexSet),
    /// Entry is filed under an announcement section
    AnnouncementSection,
}

/// One row of the rule table
#[derive(Debug)]
pub struct Rule {
    category: DropCategory,
    matcher: Matcher,
}

impl Rule {
    fn keywords(category: DropCategory, patterns: &[&str]) -> Self {
        // Patterns are literals in this file
        let set = RegexSet::new(patterns).unwrap_or_else(|e| panic!("invalid {category} pattern: {e}"));
        Self {
            category,
            matcher: Matcher::Keywords(set),
        }
    }

    /// Category this rule assigns
    #[must_use]
    pub const fn category(&self) -> DropCategory {
        self.category
    }

    /// Human-readable description of what the rule inspects
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.matcher {
            Matcher::Keywords(set) => format!("text matches any of: {}", set.patterns().join(", ")),
            Matcher::AnnouncementSection => "filed under an announcements section".to_string(),
        }
    }

    /// Whether `entry` falls under this rule
    ///
    /// `haystack` is the entry's folded text, see [`haystack`].
    #[must_use]
    pub fn matches(&self, entry: &Entry, haystack: &str) -> bool {
        match &self.matcher {
            Matcher::Keywords(set) => set.is_match(haystack),
            Matcher::AnnouncementSection => entry.section.is_some_and(|s| s.is_announcement()),
        }
    }
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::keywords(DropCategory::University, UNIVERSITY_PATTERNS),
        Rule {
            category: DropCategory::Announcement,
            matcher: Matcher::AnnouncementSection,
        },
        Rule::keywords(DropCategory::CentralBank, CENTRAL_BANK_PATTERNS),
        Rule::keywords(DropCategory::Appointment, APPOINTMENT_PATTERNS),
    ]
});

/// The rule table, in precedence order
#[must_use]
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Folded text the keyword rules search: title, subsection, section heading
#[must_use]
pub fn haystack(entry: &Entry) -> String {
    let mut text = fold(&entry.title);
    if let Some(subsection) = &entry.subsection {
        text.push('\n');
        text.push_str(&fold(subsection));
    }
    if let Some(section) = entry.section {
        text.push('\n');
        text.push_str(&fold(section.label()));
    }
    text
}
