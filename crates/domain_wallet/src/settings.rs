//! Document-wide preferences

use serde::{Deserialize, Serialize};

use core_kernel::Currency;
use domain_planning::NO_REMINDER;

/// Reminder defaults applied to new planned expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationDefaults {
    pub enabled: bool,
    pub reminder_days: i32,
}

impl Default for NotificationDefaults {
    fn default() -> Self {
        Self {
            enabled: true,
            reminder_days: 3,
        }
    }
}

impl NotificationDefaults {
    /// Reminder lead time a new planned expense should start with
    pub fn effective_reminder_days(&self) -> i32 {
        if self.enabled {
            self.reminder_days
        } else {
            NO_REMINDER
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub currency: Currency,
}
