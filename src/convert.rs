use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};

use crate::{Clock, Month, MonthError, MonthNumber, SystemClock};

/// Conversion of date-like values, timestamps and months into a [`Month`].
///
/// * [`Month`] converts to itself.
/// * `i64` is a Unix timestamp in seconds, placed on the calendar by the clock.
/// * `NaiveDate`, `NaiveDateTime` and `DateTime<Tz>` use their year and month.
pub trait IntoMonth {
    /// Converts using `clock` for any timestamp-to-calendar step.
    ///
    /// # Errors
    /// Returns `MonthError::InvalidConversionInput` if the value cannot be
    /// placed on the calendar.
    fn into_month_with<C: Clock + ?Sized>(self, clock: &C) -> Result<Month, MonthError>;

    /// Converts using the [`SystemClock`].
    ///
    /// # Errors
    /// Returns `MonthError::InvalidConversionInput` if the value cannot be
    /// placed on the calendar.
    fn into_month(self) -> Result<Month, MonthError>
    where
        Self: Sized,
    {
        self.into_month_with(&SystemClock)
    }
}

impl IntoMonth for Month {
    fn into_month_with<C: Clock + ?Sized>(self, _clock: &C) -> Result<Month, MonthError> {
        Ok(self)
    }
}

impl IntoMonth for i64 {
    fn into_month_with<C: Clock + ?Sized>(self, clock: &C) -> Result<Month, MonthError> {
        let at = clock.at(self).ok_or_else(|| {
            log::debug!("timestamp {self} is outside the representable range");
            MonthError::InvalidConversionInput(format!("timestamp {self} is out of range"))
        })?;
        Month::from_date(&at)
    }
}

impl IntoMonth for NaiveDate {
    fn into_month_with<C: Clock + ?Sized>(self, _clock: &C) -> Result<Month, MonthError> {
        Month::from_date(&self)
    }
}

impl IntoMonth for NaiveDateTime {
    fn into_month_with<C: Clock + ?Sized>(self, _clock: &C) -> Result<Month, MonthError> {
        Month::from_date(&self)
    }
}

impl<Tz: TimeZone> IntoMonth for DateTime<Tz> {
    fn into_month_with<C: Clock + ?Sized>(self, _clock: &C) -> Result<Month, MonthError> {
        Month::from_date(&self)
    }
}

impl Month {
    /// The month containing a date or timestamp.
    ///
    /// # Errors
    /// Returns `MonthError::InvalidConversionInput` if the value reports a
    /// month outside 1..=12.
    pub fn from_date<D: Datelike>(date: &D) -> Result<Self, MonthError> {
        let number = u8::try_from(date.month())
            .ok()
            .and_then(|number| MonthNumber::new(number).ok())
            .ok_or_else(|| {
                MonthError::InvalidConversionInput(format!(
                    "month {} is not a calendar month",
                    date.month()
                ))
            })?;
        Ok(Self::from_parts(date.year(), number))
    }

    /// The month containing a Unix timestamp, in the local time zone.
    ///
    /// # Errors
    /// Returns `MonthError::InvalidConversionInput` if the timestamp is out of range.
    pub fn from_timestamp(timestamp: i64) -> Result<Self, MonthError> {
        timestamp.into_month()
    }

    /// The month containing a Unix timestamp, as placed by `clock`.
    ///
    /// # Errors
    /// Returns `MonthError::InvalidConversionInput` if the timestamp is out of range.
    pub fn from_timestamp_with<C: Clock + ?Sized>(
        timestamp: i64,
        clock: &C,
    ) -> Result<Self, MonthError> {
        timestamp.into_month_with(clock)
    }

    /// The current month, from the system clock.
    ///
    /// # Errors
    /// Returns `MonthError::InvalidConversionInput` if the clock reports an invalid month.
    pub fn now() -> Result<Self, MonthError> {
        Self::now_with(&SystemClock)
    }

    /// The current month according to `clock`.
    ///
    /// # Errors
    /// Returns `MonthError::InvalidConversionInput` if the clock reports an invalid month.
    pub fn now_with<C: Clock + ?Sized>(clock: &C) -> Result<Self, MonthError> {
        Self::from_date(&clock.now())
    }

    /// The month of today's date, from the system clock.
    ///
    /// # Errors
    /// Returns `MonthError::InvalidConversionInput` if the clock reports an invalid month.
    pub fn today() -> Result<Self, MonthError> {
        Self::today_with(&SystemClock)
    }

    /// The month of today's date according to `clock`.
    ///
    /// # Errors
    /// Returns `MonthError::InvalidConversionInput` if the clock reports an invalid month.
    pub fn today_with<C: Clock + ?Sized>(clock: &C) -> Result<Self, MonthError> {
        Self::from_date(&clock.today())
    }
}
