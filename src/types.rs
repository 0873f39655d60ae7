use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MIN_MONTH, MONTH_ABBREVIATIONS, MONTH_NAMES,
};
use crate::{Month, MonthError, prelude::*};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month number guaranteed to be in the range `MIN_MONTH..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MonthNumber(NonZeroU8);

impl MonthNumber {
    /// Creates a new `MonthNumber`, validating that it's within `MIN_MONTH..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `MonthError::InvalidMonthNumber` if the value is outside `MIN_MONTH..=MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, MonthError> {
        let non_zero = NonZeroU8::new(value).ok_or(MonthError::InvalidMonthNumber(value))?;
        if !(MIN_MONTH..=MAX_MONTH).contains(&value) {
            return Err(MonthError::InvalidMonthNumber(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month number as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based position in the name tables
    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl TryFrom<u8> for MonthNumber {
    type Error = MonthError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MonthNumber> for u8 {
    fn from(number: MonthNumber) -> Self {
        number.0.get()
    }
}

impl From<MonthOfYear> for MonthNumber {
    fn from(month: MonthOfYear) -> Self {
        // Discriminants are 1..=12, so the offset from MIN never saturates.
        Self(NonZeroU8::MIN.saturating_add(month as u8 - 1))
    }
}

impl fmt::Display for MonthNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The twelve months of the year, numbered 1 (January) to 12 (December).
///
/// This is the single name table behind `Month::name`, the `is_*` predicates
/// and the named-month constructors.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum MonthOfYear {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl MonthOfYear {
    /// Every month in calendar order
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Looks up a month by its number (1 = January).
    ///
    /// # Errors
    /// Returns `MonthError::InvalidMonthNumber` if the value is outside 1..=12.
    pub fn from_number(value: u8) -> Result<Self, MonthError> {
        let number = MonthNumber::new(value)?;
        Ok(Self::ALL[number.index()])
    }

    /// Returns the 1-based month number
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Full English name, e.g. `"January"`
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self as usize - 1]
    }

    /// Three-letter upper-case abbreviation, e.g. `"JAN"`
    pub const fn abbreviation(self) -> &'static str {
        MONTH_ABBREVIATIONS[self as usize - 1]
    }

    /// This month in the given year.
    pub fn of(self, year: i32) -> Month {
        Month::from_parts(year, MonthNumber::from(self))
    }

    /// A single day of this month in the given year.
    ///
    /// # Errors
    /// Returns `MonthError::InvalidConversionInput` if the day does not exist
    /// in that month (e.g. February 30).
    pub fn on(self, day: u32, year: i32) -> Result<NaiveDate, MonthError> {
        NaiveDate::from_ymd_opt(year, u32::from(self.number()), day).ok_or_else(|| {
            MonthError::InvalidConversionInput(format!(
                "day {day} does not exist in {} {year}",
                self.name()
            ))
        })
    }
}

impl From<MonthNumber> for MonthOfYear {
    fn from(number: MonthNumber) -> Self {
        Self::ALL[number.index()]
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
