use crate::CalendarError;
use crate::consts::{MAX_MONTH, MAX_YEAR, MONTH_NAMES};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// Calendar year a reporting month belongs to, from 1 through `MAX_YEAR`.
///
/// Backed by `NonZeroU16`; serialized as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Checks that `value` is a year the calendar can segment.
    ///
    /// # Errors
    /// `CalendarError::InvalidYear` when `value` is zero or past `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, CalendarError> {
        let non_zero = NonZeroU16::new(value).ok_or(CalendarError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(CalendarError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Numeric year, e.g. `2025`
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// The year as chrono expects it
    #[inline]
    pub(crate) fn as_i32(self) -> i32 {
        i32::from(self.0.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = CalendarError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i32> for Year {
    type Error = CalendarError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        let narrowed = u16::try_from(value).map_err(|_| CalendarError::OutOfRange(value))?;
        Self::new(narrowed)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Month of the year, January = 1 through December = `MAX_MONTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Checks that `value` names one of the twelve months.
    ///
    /// # Errors
    /// `CalendarError::InvalidMonth` when `value` is zero or past December.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        let non_zero = NonZeroU8::new(value).ok_or(CalendarError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(CalendarError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Month number, 1-based
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// French name of the month
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.0.get() as usize]
    }

    #[inline]
    pub(crate) fn as_u32(self) -> u32 {
        u32::from(self.0.get())
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u32> for Month {
    type Error = CalendarError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        let narrowed = u8::try_from(value).map_err(|_| CalendarError::InvalidFormat(value.to_string()))?;
        Self::new(narrowed)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
