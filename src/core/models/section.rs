//! Gazette sections
//!
//! The top-level structural divisions of an issue, as printed in its index.

use serde::{Deserialize, Serialize};

/// Top-level division of a gazette issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Laws passed by the assembly
    Legislative,
    /// Executive and administrative acts: decrees, regulations, communiqués
    Administrative,
    /// Court decisions published in full
    Judicial,
    /// The announcements part of the issue, when not further divided
    Announcements,
    /// Court and enforcement notices
    JudicialNotices,
    /// Auction, tender and procurement notices
    TenderNotices,
    /// Everything else printed under announcements
    MiscellaneousNotices,
}

impl Section {
    /// Every section, in the order the gazette prints them
    pub const ALL: [Self; 7] = [
        Self::Legislative,
        Self::Administrative,
        Self::Judicial,
        Self::Announcements,
        Self::JudicialNotices,
        Self::TenderNotices,
        Self::MiscellaneousNotices,
    ];

    /// Heading as printed in the gazette index
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Legislative => "YASAMA BÖLÜMÜ",
            Self::Administrative => "YÜRÜTME VE İDARE BÖLÜMÜ",
            Self::Judicial => "YARGI BÖLÜMÜ",
            Self::Announcements => "İLÂN BÖLÜMÜ",
            Self::JudicialNotices => "YARGI İLÂNLARI",
            Self::TenderNotices => "ARTIRMA, EKSİLTME VE İHALE İLÂNLARI",
            Self::MiscellaneousNotices => "ÇEŞİTLİ İLÂNLAR",
        }
    }

    /// Whether this section belongs to the announcements part of the issue
    #[must_use]
    pub const fn is_announcement(self) -> bool {
        matches!(
            self,
            Self::Announcements
                | Self::JudicialNotices
                | Self::TenderNotices
                | Self::MiscellaneousNotices
        )
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
