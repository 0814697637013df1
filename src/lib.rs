mod consts;
mod format;
mod label;
mod objective;
mod period;
mod prelude;
mod segment;
mod tenure;
mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use consts::*;
pub use format::{
    format_amount, format_percentage, normalize_decimal, parse_amount, parse_decimal,
    parse_percentage, sanitize_file_name,
};
pub use label::{format_period_label, month_name};
pub use objective::ObjectiveStatus;
pub use period::{Period, PeriodError};
pub use segment::{MonthPeriods, segment};
pub use tenure::{StaffStatus, StaffTenure};
pub use types::{Month, Year};

use crate::prelude::*;
use chrono::{Datelike, Days, Months, NaiveDate};
use std::str::FromStr;

/// A month of a given year, the unit every reporting period belongs to.
///
/// The first and last calendar days are resolved once at construction so
/// the segmenter never has to handle a missing date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}", "year.get()", "month.get()")]
pub struct CalendarMonth {
    year:  Year,
    month: Month,
    first: NaiveDate,
    last:  NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CalendarError {
    #[display(fmt = "Invalid month format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Year {_0} is outside the supported calendar")]
    OutOfRange(i32),
    #[display(fmt = "Empty month string")]
    EmptyInput,
}

impl std::error::Error for CalendarError {}

/// Splits `month` of `year` into its reporting periods.
///
/// Periods are returned in chronological order; a caller that numbers them
/// uses the 1-based position in the returned vector.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` when `month` is outside `1..=12` and
/// `CalendarError::InvalidYear` when `year` is outside `1..=MAX_YEAR`.
pub fn compute_periods(year: u16, month: u8) -> Result<Vec<Period>, CalendarError> {
    Ok(CalendarMonth::from_parts(year, month)?.periods().into_periods())
}

impl CalendarMonth {
    /// Creates a calendar month from already validated parts.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if chrono cannot represent the month.
    pub fn new(year: Year, month: Month) -> Result<Self, CalendarError> {
        let out_of_range = || CalendarError::OutOfRange(year.as_i32());
        let first = NaiveDate::from_ymd_opt(year.as_i32(), month.as_u32(), 1).ok_or_else(out_of_range)?;
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(out_of_range)?;
        Ok(Self {
            year,
            month,
            first,
            last,
        })
    }

    /// Creates a calendar month from raw numbers, validating the month first.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` or `CalendarError::InvalidYear`.
    pub fn from_parts(year: u16, month: u8) -> Result<Self, CalendarError> {
        let month = Month::new(month)?;
        let year = Year::new(year)?;
        Self::new(year, month)
    }

    /// The month containing `date`.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` for dates outside years `1..=MAX_YEAR`.
    pub fn from_date(date: NaiveDate) -> Result<Self, CalendarError> {
        let year = Year::try_from(date.year())?;
        let month = Month::try_from(date.month())?;
        Self::new(year, month)
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    /// Day 1 of the month
    pub const fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Last calendar day of the month
    pub const fn last_day(&self) -> NaiveDate {
        self.last
    }

    pub fn days_in_month(&self) -> u32 {
        self.last.day()
    }

    /// First day the salon is open: day 1, or day 2 when day 1 is a Sunday.
    pub fn first_worked_day(&self) -> NaiveDate {
        if self.first.weekday() == CLOSED_DAY {
            self.first + Days::new(1)
        } else {
            self.first
        }
    }

    /// French name of the month
    pub const fn name(&self) -> &'static str {
        self.month.name()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first <= date && date <= self.last
    }

    /// The reporting periods of this month.
    pub fn periods(&self) -> MonthPeriods {
        segment(*self)
    }

    /// The following month, or `None` past December `MAX_YEAR`.
    pub fn succ(&self) -> Option<Self> {
        let (year, month) = if self.month.get() == DECEMBER {
            (self.year.get().checked_add(1)?, JANUARY)
        } else {
            (self.year.get(), self.month.get() + 1)
        };
        Self::from_parts(year, month).ok()
    }

    /// The preceding month, or `None` before January of year 1.
    pub fn pred(&self) -> Option<Self> {
        let (year, month) = if self.month.get() == JANUARY {
            (self.year.get().checked_sub(1)?, DECEMBER)
        } else {
            (self.year.get(), self.month.get() - 1)
        };
        Self::from_parts(year, month).ok()
    }
}

impl FromStr for CalendarMonth {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::EmptyInput);
        }

        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(MONTH_FIRST_SEPARATOR);

        let (year_part, month_part) = match (has_hyphen, has_slash) {
            (true, true) => {
                return Err(CalendarError::InvalidFormat(format!(
                    "Mixed delimiters ({DATE_SEPARATOR} and {MONTH_FIRST_SEPARATOR})"
                )));
            },
            // ISO format: YYYY-MM
            (true, false) => split_pair(trimmed, DATE_SEPARATOR)?,
            // Month-first format: MM/YYYY
            (false, true) => {
                let (month, year) = split_pair(trimmed, MONTH_FIRST_SEPARATOR)?;
                (year, month)
            },
            (false, false) => return Err(CalendarError::InvalidFormat(trimmed.to_owned())),
        };

        Self::from_parts(parse_digits(year_part)?, parse_digits(month_part)?)
    }
}

/// Parses a plain run of ASCII digits; signs and inner spaces are rejected.
fn parse_digits<T: FromStr>(part: &str) -> Result<T, CalendarError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalendarError::InvalidFormat(part.to_owned()));
    }
    part.parse().map_err(|_| CalendarError::InvalidFormat(part.to_owned()))
}

fn split_pair(s: &str, separator: char) -> Result<(&str, &str), CalendarError> {
    let parts: Vec<&str> = s.split(separator).map(str::trim).collect();
    match parts.as_slice() {
        [first, second] => Ok((*first, *second)),
        _ => Err(CalendarError::InvalidFormat(format!(
            "Expected exactly one {separator} separator, found {}",
            parts.len() - 1
        ))),
    }
}

impl serde::Serialize for CalendarMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
