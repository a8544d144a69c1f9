//! Filter toggles
//!
//! One independent switch per drop category. `true` suppresses the category.

use serde::{Deserialize, Serialize};

use super::DropCategory;

/// Which noise categories to suppress
///
/// Builders return a modified copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Suppress university and academic-institution content
    #[serde(alias = "universities")]
    pub filter_universities: bool,
    /// Suppress entries printed in announcement sections
    #[serde(alias = "announcements")]
    pub filter_announcements: bool,
    /// Suppress central bank currency-rate bulletins
    #[serde(alias = "central_bank")]
    pub filter_central_bank: bool,
    /// Suppress personnel appointment notices
    #[serde(alias = "appointments")]
    pub filter_appointments: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            filter_universities: true,
            filter_announcements: true,
            filter_central_bank: true,
            filter_appointments: false,
        }
    }
}

impl FilterConfig {
    /// Configuration that keeps everything
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            filter_universities: false,
            filter_announcements: false,
            filter_central_bank: false,
            filter_appointments: false,
        }
    }

    /// Whether entries of `category` are suppressed
    #[must_use]
    pub const fn suppresses(self, category: DropCategory) -> bool {
        match category {
            DropCategory::University => self.filter_universities,
            DropCategory::Announcement => self.filter_announcements,
            DropCategory::CentralBank => self.filter_central_bank,
            DropCategory::Appointment => self.filter_appointments,
        }
    }

    /// Copy of this configuration with one toggle changed
    #[must_use]
    pub const fn with(mut self, category: DropCategory, suppress: bool) -> Self {
        match category {
            DropCategory::University => self.filter_universities = suppress,
            DropCategory::Announcement => self.filter_announcements = suppress,
            DropCategory::CentralBank => self.filter_central_bank = suppress,
            DropCategory::Appointment => self.filter_appointments = suppress,
        }
        self
    }

    /// Categories currently suppressed, in precedence order
    #[must_use]
    pub fn active(self) -> Vec<DropCategory> {
        DropCategory::ALL.into_iter().filter(|c| self.suppresses(*c)).collect()
    }
}
