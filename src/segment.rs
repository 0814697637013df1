//! Splits a calendar month into reporting periods.
//!
//! Every period closes on a Saturday, with three adjustments at the edges
//! of the month:
//!
//! - a month opening on a Sunday starts on the Monday after it;
//! - a first worked day from Thursday to Saturday runs the first period
//!   through the Saturday of the following week;
//! - a month closing from Monday to Wednesday folds its trailing days into
//!   the period before them.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

use crate::{
    CalendarMonth, LOOKAHEAD_FROM, MERGE_UNTIL, PERIOD_END_DAY, Period, label::format_period_label,
};

const DAYS_PER_WEEK: u64 = 7;

/// The reporting periods of one month, in chronological order.
///
/// Periods are numbered from 1 by position; callers persist that number
/// next to each period's dates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MonthPeriods {
    month:   CalendarMonth,
    anchor:  NaiveDate,
    periods: Vec<Period>,
}

/// Splits `month` into Saturday-ending periods.
///
/// The result always holds at least one period, and the periods cover every
/// day from the first worked day to the last day of the month exactly once.
pub fn segment(month: CalendarMonth) -> MonthPeriods {
    let anchor = month.first_worked_day();
    let last = month.last_day();

    let first_end = first_period_end(anchor).min(last);
    let mut periods = vec![Period::from_ordered(anchor, first_end)];

    let mut cursor = first_end + Days::new(1);
    while cursor <= last {
        let end = cursor + Days::new(days_to_next_saturday(cursor.weekday()));
        if end <= last {
            let period = Period::from_ordered(cursor, end);
            cursor = period.following_day();
            periods.push(period);
            continue;
        }

        match periods.last_mut() {
            Some(previous) if on_or_before(last.weekday(), MERGE_UNTIL) => {
                tracing::trace!(%month, from = %cursor, to = %last, "merging trailing days into previous period");
                previous.extend_to(last);
            },
            _ => periods.push(Period::from_ordered(cursor, last)),
        }
        break;
    }

    tracing::debug!(%month, %anchor, count = periods.len(), "segmented month");
    MonthPeriods {
        month,
        anchor,
        periods,
    }
}

/// End of the opening period, before clamping to the month.
fn first_period_end(anchor: NaiveDate) -> NaiveDate {
    let weekday = anchor.weekday();
    let days = if weekday == PERIOD_END_DAY {
        DAYS_PER_WEEK
    } else if on_or_after(weekday, LOOKAHEAD_FROM) {
        days_to_saturday(weekday) + DAYS_PER_WEEK
    } else {
        days_to_saturday(weekday)
    };
    anchor + Days::new(days)
}

/// Days from `weekday` to the coming Saturday, 0 on a Saturday.
fn days_to_saturday(weekday: Weekday) -> u64 {
    let from = u64::from(weekday.num_days_from_monday());
    let to = u64::from(PERIOD_END_DAY.num_days_from_monday());
    (to + DAYS_PER_WEEK - from) % DAYS_PER_WEEK
}

/// Like `days_to_saturday`, but a Saturday moves a full week ahead.
fn days_to_next_saturday(weekday: Weekday) -> u64 {
    match days_to_saturday(weekday) {
        0 => DAYS_PER_WEEK,
        days => days,
    }
}

fn on_or_before(weekday: Weekday, limit: Weekday) -> bool {
    weekday.num_days_from_monday() <= limit.num_days_from_monday()
}

fn on_or_after(weekday: Weekday, limit: Weekday) -> bool {
    weekday.num_days_from_monday() >= limit.num_days_from_monday()
}

impl MonthPeriods {
    pub const fn month(&self) -> CalendarMonth {
        self.month
    }

    /// First worked day of the month; every label counts from here.
    pub const fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Always false for a segmented month.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Period by its 1-based number
    pub fn get(&self, number: usize) -> Option<&Period> {
        number.checked_sub(1).and_then(|index| self.periods.get(index))
    }

    /// Periods paired with their 1-based number
    pub fn numbered(&self) -> impl Iterator<Item = (usize, Period)> + '_ {
        self.periods.iter().copied().enumerate().map(|(index, period)| (index + 1, period))
    }

    /// 1-based number of the period holding `date`
    pub fn period_containing(&self, date: NaiveDate) -> Option<usize> {
        self.periods
            .iter()
            .position(|period| period.contains(date))
            .map(|index| index + 1)
    }

    /// Cumulative label of a period, e.g. `Du 1 au 15 Mars`
    pub fn label(&self, number: usize) -> Option<String> {
        self.get(number).map(|period| format_period_label(period.end(), self.anchor))
    }

    /// Cumulative labels of every period, in order
    pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
        self.periods
            .iter()
            .map(|period| format_period_label(period.end(), self.anchor))
    }

    pub fn into_periods(self) -> Vec<Period> {
        self.periods
    }
}

impl<'a> IntoIterator for &'a MonthPeriods {
    type Item = &'a Period;
    type IntoIter = std::slice::Iter<'a, Period>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.iter()
    }
}
