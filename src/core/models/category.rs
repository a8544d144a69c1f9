//! Drop categories
//!
//! The label attached to a suppressed entry, used for summary reporting.

use serde::{Deserialize, Serialize};

/// Why an entry was dropped from the digest
///
/// Variant order is rule precedence: when an entry could fall under more
/// than one category, the earliest one is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropCategory {
    /// University, faculty and institute regulations
    University,
    /// Anything printed in an announcements section
    Announcement,
    /// Daily foreign-exchange communiqués from the central bank
    CentralBank,
    /// Personnel appointment and staffing decisions
    Appointment,
}

impl DropCategory {
    /// Every category, in precedence order
    pub const ALL: [Self; 4] = [Self::University, Self::Announcement, Self::CentralBank, Self::Appointment];

    /// Short reporting label
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::University => "university/academic",
            Self::Announcement => "announcement-section",
            Self::CentralBank => "central-bank/currency",
            Self::Appointment => "appointment",
        }
    }

    /// Plural noun phrase for summaries ("10 university regulations")
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::University => "university regulations",
            Self::Announcement => "announcement-section notices",
            Self::CentralBank => "central bank currency bulletins",
            Self::Appointment => "appointment notices",
        }
    }

    /// Singular form of [`Self::plural`]
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::University => "university regulation",
            Self::Announcement => "announcement-section notice",
            Self::CentralBank => "central bank currency bulletin",
            Self::Appointment => "appointment notice",
        }
    }

    /// `"<count> <noun>"` with the noun inflected for the count
    #[must_use]
    pub fn describe(self, count: usize) -> String {
        let noun = if count == 1 { self.singular() } else { self.plural() };
        format!("{count} {noun}")
    }
}

impl std::fmt::Display for DropCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for DropCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "university" | "universities" | "academic" | "university/academic" => Ok(Self::University),
            "announcement" | "announcements" | "announcement-section" => Ok(Self::Announcement),
            "central-bank" | "central-bank/currency" | "currency" => Ok(Self::CentralBank),
            "appointment" | "appointments" => Ok(Self::Appointment),
            _ => Err(format!(
                "Invalid category: {s}. Use: university, announcement, central-bank, appointment"
            )),
        }
    }
}
