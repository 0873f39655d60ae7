//! A calendar month value type: a `(year, month)` pair with month arithmetic,
//! iteration, parsing and calendar-boundary queries.
//!
//! ```
//! use calendar_month::Month;
//!
//! let month: Month = "2014 JAN".parse().unwrap();
//! assert_eq!(month.to_string(), "2014-01");
//! assert_eq!((month - 1).to_string(), "2013-12");
//! assert_eq!(month.length(), 31);
//! ```

pub mod clock;
mod consts;
mod convert;
mod parse;
mod prelude;
mod range;
pub mod scalar;
mod types;

#[cfg(test)]
mod test_utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use convert::IntoMonth;
pub use range::{Dates, MonthStep};
pub use types::{MonthNumber, MonthOfYear, days_in_month, is_leap_year};

use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A calendar month: a year of any sign paired with a month number in 1..=12.
///
/// Ordering is chronological (year first, then month number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-{:02}", year, "number.get()")]
pub struct Month {
    year:   i32,
    number: MonthNumber,
}

/// Error type for month construction, parsing, iteration and conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonthError {
    /// Month number outside 1..=12.
    #[error("Invalid month number: {0} (must be 1-12)")]
    InvalidMonthNumber(u8),

    /// Input matched none of the recognized month formats.
    #[error("Invalid month format: {0}")]
    InvalidFormat(String),

    /// Iteration was requested with a step size of zero.
    #[error("Invalid step: step size must be non-zero")]
    InvalidStep,

    /// A value could not be converted into a month or a date.
    #[error("Invalid conversion input: {0}")]
    InvalidConversionInput(String),

    /// The month lies outside the range of representable dates.
    #[error("Month {year}-{month:02} is outside the supported date range")]
    DateOutOfRange { year: i32, month: u8 },
}

impl Month {
    /// Creates a new month.
    ///
    /// # Errors
    /// Returns `MonthError::InvalidMonthNumber` if `number` is not in 1..=12.
    pub fn new(year: i32, number: u8) -> Result<Self, MonthError> {
        Ok(Self {
            year,
            number: MonthNumber::new(number)?,
        })
    }

    /// Creates a month from already-validated parts
    pub const fn from_parts(year: i32, number: MonthNumber) -> Self {
        Self { year, number }
    }

    /// Returns the year
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month number (1 = January)
    #[inline]
    pub const fn number(&self) -> u8 {
        self.number.get()
    }

    /// Returns the validated month number
    #[inline]
    pub const fn month_number(&self) -> MonthNumber {
        self.number
    }

    /// Returns which of the twelve months this is
    pub fn month_of_year(&self) -> MonthOfYear {
        MonthOfYear::from(self.number)
    }

    /// Canonical English name, e.g. `"January"`
    pub const fn name(&self) -> &'static str {
        MONTH_NAMES[self.number.index()]
    }

    /// Returns `true` if this month is the given month of the year.
    pub fn is(&self, month: MonthOfYear) -> bool {
        self.number.get() == month.number()
    }

    /// Canonical `YYYY-MM` form, identical to `Display`
    pub fn iso8601(&self) -> String {
        self.to_string()
    }

    /// Converts to `(year, number)` columns
    pub const fn to_parts(&self) -> (i32, u8) {
        (self.year, self.number.get())
    }
}

macro_rules! month_predicates {
    ($($predicate:ident => $month:ident),* $(,)?) => {
        impl Month {
            $(
                #[doc = concat!("Returns `true` if this month is ", stringify!($month), ".")]
                #[inline]
                pub fn $predicate(&self) -> bool {
                    self.is(MonthOfYear::$month)
                }
            )*
        }
    };
}

month_predicates! {
    is_january => January,
    is_february => February,
    is_march => March,
    is_april => April,
    is_may => May,
    is_june => June,
    is_july => July,
    is_august => August,
    is_september => September,
    is_october => October,
    is_november => November,
    is_december => December,
}

// --- arithmetic ---
impl Month {
    /// The month `months` months after this one (before it, if negative).
    ///
    /// Returns `None` if the resulting year does not fit in an `i32`.
    pub fn checked_add(self, months: i64) -> Option<Self> {
        let total = i64::from(self.number.get() - 1).checked_add(months)?;
        let per_year = i64::from(MONTHS_PER_YEAR);

        let year = i64::from(self.year).checked_add(total.div_euclid(per_year))?;
        let year = i32::try_from(year).ok()?;
        // rem_euclid keeps the offset in 0..12 for negative totals too
        let number = u8::try_from(total.rem_euclid(per_year) + 1).ok()?;

        Some(Self {
            year,
            number: MonthNumber::new(number).ok()?,
        })
    }

    /// The month `months` months before this one (after it, if negative).
    ///
    /// Returns `None` if the resulting year does not fit in an `i32`.
    pub fn checked_sub(self, months: i64) -> Option<Self> {
        self.checked_add(months.checked_neg()?)
    }

    /// Signed number of months from `other` to `self`.
    ///
    /// `other + self.months_since(other) == self` always holds.
    pub fn months_since(self, other: Self) -> i64 {
        i64::from(MONTHS_PER_YEAR) * (i64::from(self.year) - i64::from(other.year))
            + (i64::from(self.number.get()) - i64::from(other.number.get()))
    }

    /// The following month.
    ///
    /// # Panics
    /// Panics if the year overflows.
    #[allow(clippy::should_implement_trait)]
    pub fn next(self) -> Self {
        self + 1
    }

    /// Alias for [`Month::next`].
    ///
    /// # Panics
    /// Panics if the year overflows.
    pub fn succ(self) -> Self {
        self.next()
    }

    /// The preceding month.
    ///
    /// # Panics
    /// Panics if the year underflows.
    pub fn previous(self) -> Self {
        self - 1
    }

    /// Alias for [`Month::previous`].
    ///
    /// # Panics
    /// Panics if the year underflows.
    pub fn pred(self) -> Self {
        self.previous()
    }

    /// Shifts forward by `months`; a negative count shifts back.
    ///
    /// # Panics
    /// Panics if the year leaves the `i32` range.
    pub fn forward(self, months: i64) -> Self {
        self + months
    }

    /// Shifts back by `months`; a negative count shifts forward.
    ///
    /// # Panics
    /// Panics if the year leaves the `i32` range.
    pub fn back(self, months: i64) -> Self {
        self - months
    }
}

impl Add<i64> for Month {
    type Output = Self;

    fn add(self, months: i64) -> Self {
        match self.checked_add(months) {
            Some(month) => month,
            None => panic!("`{self} + {months} months` overflowed the year range"),
        }
    }
}

impl Sub<i64> for Month {
    type Output = Self;

    fn sub(self, months: i64) -> Self {
        match self.checked_sub(months) {
            Some(month) => month,
            None => panic!("`{self} - {months} months` overflowed the year range"),
        }
    }
}

impl Sub for Month {
    type Output = i64;

    fn sub(self, other: Self) -> i64 {
        self.months_since(other)
    }
}

impl AddAssign<i64> for Month {
    fn add_assign(&mut self, months: i64) {
        *self = *self + months;
    }
}

impl SubAssign<i64> for Month {
    fn sub_assign(&mut self, months: i64) {
        *self = *self - months;
    }
}

// --- calendar boundaries ---
impl Month {
    /// First day of the month.
    ///
    /// # Errors
    /// Returns `MonthError::DateOutOfRange` if the year is beyond the date range.
    pub fn start_date(&self) -> Result<NaiveDate, MonthError> {
        self.date(MIN_DAY)
    }

    /// Last day of the month, accounting for leap years.
    ///
    /// # Errors
    /// Returns `MonthError::DateOutOfRange` if the year is beyond the date range.
    pub fn end_date(&self) -> Result<NaiveDate, MonthError> {
        self.date(self.length())
    }

    /// Number of days in the month (28, 29, 30 or 31)
    pub const fn length(&self) -> u8 {
        days_in_month(self.year, self.number.get())
    }

    /// Every day of the month, first to last.
    ///
    /// # Errors
    /// Returns `MonthError::DateOutOfRange` if the year is beyond the date range.
    pub fn dates(&self) -> Result<Dates, MonthError> {
        Ok(Dates::new(self.start_date()?, self.end_date()?))
    }

    /// Returns `true` if the date (or timestamp) falls within this month.
    pub fn includes<D: Datelike>(&self, date: &D) -> bool {
        date.year() == self.year && date.month() == u32::from(self.number.get())
    }

    fn date(&self, day: u8) -> Result<NaiveDate, MonthError> {
        NaiveDate::from_ymd_opt(self.year, u32::from(self.number.get()), u32::from(day))
            .ok_or_else(|| {
                log::debug!("month {self} has no representable day {day}");
                MonthError::DateOutOfRange {
                    year:  self.year,
                    month: self.number.get(),
                }
            })
    }
}

impl TryFrom<(i32, u8)> for Month {
    type Error = MonthError;

    fn try_from(value: (i32, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1)
    }
}

impl From<Month> for (i32, u8) {
    fn from(month: Month) -> Self {
        month.to_parts()
    }
}

impl serde::Serialize for Month {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Month {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        // Display output first, so years of any width come back
        parse::parse_canonical(&s)
            .unwrap_or_else(|| s.parse())
            .map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_month() -> impl Strategy<Value = Month> {
        (-100_000i32..100_000, 1u8..=12).prop_map(|(y, m)| Month::from_parts(y, MonthNumber::new(m).unwrap()))
    }

    proptest! {
        #[test]
        fn prop_new_keeps_parts(year in any::<i32>(), number in 1u8..=12) {
            let m = Month::new(year, number).unwrap();
            prop_assert_eq!(m.year(), year);
            prop_assert_eq!(m.number(), number);
        }

        #[test]
        fn prop_new_rejects_out_of_range(year in any::<i32>(), number in 13u8..=u8::MAX) {
            prop_assert_eq!(Month::new(year, number), Err(MonthError::InvalidMonthNumber(number)));
        }

        #[test]
        fn prop_whole_years(m in any_month(), k in -1000i64..1000) {
            let shifted = m + 12 * k;
            prop_assert_eq!(shifted.number(), m.number());
            prop_assert_eq!(i64::from(shifted.year()), i64::from(m.year()) + k);
        }

        #[test]
        fn prop_difference_round_trip(a in any_month(), b in any_month()) {
            prop_assert_eq!(b + (a - b), a);
            prop_assert_eq!(a - (a - b), b);
        }

        #[test]
        fn prop_add_is_associative(m in any_month(), x in -5000i64..5000, y in -5000i64..5000) {
            prop_assert_eq!((m + x) + y, m + (x + y));
        }

        #[test]
        fn prop_serde_round_trip(m in any_month(), year in any::<i32>()) {
            for m in [m, Month::from_parts(year, m.month_number())] {
                let json = serde_json::to_string(&m).unwrap();
                let parsed: Month = serde_json::from_str(&json).unwrap();
                prop_assert_eq!(parsed, m);
            }
        }

        #[test]
        fn prop_order_matches_difference(a in any_month(), b in any_month()) {
            prop_assert_eq!(a.cmp(&b), (a - b).cmp(&0));
        }
    }
}
