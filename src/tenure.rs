use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::CalendarMonth;

/// Roster state of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffStatus {
    #[default]
    Active,
    Inactive,
}

/// A staff member's roster state, when they joined and, if they left, when
/// they were marked inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StaffTenure {
    pub status:      StaffStatus,
    pub entry:       Option<NaiveDate>,
    pub inactivated: Option<NaiveDate>,
}

impl StaffTenure {
    pub const fn new(status: StaffStatus, entry: Option<NaiveDate>, inactivated: Option<NaiveDate>) -> Self {
        Self {
            status,
            entry,
            inactivated,
        }
    }

    /// Whether the staff member gets a tracking sheet for `month`.
    ///
    /// An active member qualifies whatever their inactivation date says. An
    /// inactive one qualifies only when marked inactive on or after the last
    /// day of the month. Either way they must have joined by that day; an
    /// unknown join date never excludes.
    pub fn is_active_in(&self, month: &CalendarMonth) -> bool {
        let last = month.last_day();
        let on_roster = match self.status {
            StaffStatus::Active => true,
            StaffStatus::Inactive => self.inactivated.is_some_and(|left| left >= last),
        };
        let joined = self.entry.is_none_or(|entry| entry <= last);
        on_roster && joined
    }
}
