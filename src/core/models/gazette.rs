//! Issue metadata and the collector's hand-off type

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::Entry;

/// Turkish month names, January first
pub const TURKISH_MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

/// Date and number of one gazette issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueInfo {
    /// Publication date
    pub date: NaiveDate,
    /// Issue number, when the index states it
    pub number: Option<u32>,
    /// Where the full issue can be read
    pub url: String,
}

impl IssueInfo {
    /// Date as printed on the gazette masthead, e.g. "04 Şubat 2026"
    #[must_use]
    pub fn display_date(&self) -> String {
        let month = TURKISH_MONTHS[self.date.month0() as usize];
        format!("{:02} {} {}", self.date.day(), month, self.date.year())
    }

    /// Issue number, or a placeholder when unknown
    #[must_use]
    pub fn display_number(&self) -> String {
        self.number.map_or_else(|| "?".to_string(), |n| n.to_string())
    }
}

/// Everything a collector hands to the filter engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gazette {
    /// Issue metadata
    pub issue: IssueInfo,
    /// Entries in index order
    pub entries: Vec<Entry>,
}
