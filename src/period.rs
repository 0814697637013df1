use std::{cmp::Ordering, str::FromStr};

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{CalendarError, CalendarMonth, PERIOD_SEPARATOR, prelude::*};

/// Date format used for the textual and column forms of a period
const ISO_DATE: &str = "%Y-%m-%d";

/// A reporting period: an inclusive span of calendar days.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct Period {
    start: NaiveDate,
    end:   NaiveDate,
}

/// Error type for period operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    /// Start date is after end date.
    #[error("Invalid period: start ({start}) is after end ({end})")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },

    /// A date component could not be parsed.
    #[error("Invalid date {input:?}: {source}")]
    InvalidDate {
        input:  String,
        source: chrono::ParseError,
    },

    /// Error resolving the month a period belongs to.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Invalid period format.
    #[error("Invalid period format: {0}")]
    InvalidFormat(String),
}

impl Period {
    /// Creates a new period with validation.
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidPeriod` if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, PeriodError> {
        if start > end {
            return Err(PeriodError::InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// Builds a period the segmenter has already ordered.
    pub(crate) fn from_ordered(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "period {start}/{end} is reversed");
        Self { start, end }
    }

    /// Moves the end of the period forward to `end`.
    pub(crate) fn extend_to(&mut self, end: NaiveDate) {
        debug_assert!(end >= self.end, "cannot shrink period to {end}");
        self.end = end;
    }

    /// Returns the first day of the period
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the period (inclusive)
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    /// Number of calendar days covered, both ends included
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Checks if the period contains a given date
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Checks if this period shares at least one day with another
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this period is completely contained within another
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Every day of the period in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    /// The month the period opens in
    ///
    /// # Errors
    /// Returns `PeriodError::Calendar` for dates outside the supported years.
    pub fn calendar_month(&self) -> Result<CalendarMonth, PeriodError> {
        Ok(CalendarMonth::from_date(self.start)?)
    }

    /// The day after the period ends
    pub(crate) fn following_day(&self) -> NaiveDate {
        self.end + Days::new(1)
    }

    /// Converts to database columns: (`date_debut`, `date_fin`) as `YYYY-MM-DD`
    pub fn to_columns(&self) -> (String, String) {
        (
            self.start.format(ISO_DATE).to_string(),
            self.end.format(ISO_DATE).to_string(),
        )
    }

    /// Creates from database columns: (`date_debut`, `date_fin`) as `YYYY-MM-DD`
    ///
    /// # Errors
    /// Returns `PeriodError` if either date is malformed or start > end.
    pub fn from_columns(start: &str, end: &str) -> Result<Self, PeriodError> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }
}

fn parse_date(input: &str) -> Result<NaiveDate, PeriodError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, ISO_DATE).map_err(|source| PeriodError::InvalidDate {
        input: trimmed.to_owned(),
        source,
    })
}

impl FromStr for Period {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let Some((start, end)) = trimmed.split_once(PERIOD_SEPARATOR) else {
            return Err(PeriodError::InvalidFormat(format!(
                "No period separator found (expected '{PERIOD_SEPARATOR}'): {s}"
            )));
        };
        if end.contains(PERIOD_SEPARATOR) {
            let found = 1 + end.matches(PERIOD_SEPARATOR).count();
            return Err(PeriodError::InvalidFormat(format!(
                "Too many '{PERIOD_SEPARATOR}' separators: expected 1, found {found}"
            )));
        }
        Self::from_columns(start, end)
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start dates first, then end dates
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl Serialize for Period {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
