//! Fixtures shared by the unit tests.

use chrono::{Datelike, NaiveDate};

use crate::{CalendarMonth, Period};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date should be valid")
}

pub fn calendar_month(year: u16, month: u8) -> CalendarMonth {
    CalendarMonth::from_parts(year, month).expect("test month should be valid")
}

/// Day-of-month pairs, for compact expectations
pub fn spans(periods: &[Period]) -> Vec<(u32, u32)> {
    periods
        .iter()
        .map(|period| (period.start().day(), period.end().day()))
        .collect()
}
