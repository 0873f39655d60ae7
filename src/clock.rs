//! Sources of the current time.
//!
//! Everything in the crate that needs "now" or has to place a Unix timestamp
//! on the calendar goes through a [`Clock`], so tests can substitute a
//! [`FixedClock`] for the [`SystemClock`].

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Supplies the current date and converts timestamps to calendar time.
pub trait Clock {
    /// The current wall-clock date and time.
    fn now(&self) -> NaiveDateTime;

    /// The current wall-clock date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// Wall-clock date and time of a Unix timestamp (in seconds).
    ///
    /// Returns `None` if the timestamp is outside the representable range.
    fn at(&self, timestamp: i64) -> Option<NaiveDateTime>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }

    fn at(&self, timestamp: i64) -> Option<NaiveDateTime> {
        (**self).at(timestamp)
    }
}

/// The operating system clock, in the local time zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn at(&self, timestamp: i64) -> Option<NaiveDateTime> {
        Local
            .timestamp_opt(timestamp, 0)
            .single()
            .map(|dt| dt.naive_local())
    }
}

/// A clock frozen at one instant, in a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: DateTime<FixedOffset>,
}

impl FixedClock {
    /// Creates a clock frozen at `now`; timestamps are converted in its offset.
    pub const fn new(now: DateTime<FixedOffset>) -> Self {
        Self { now }
    }

    /// Creates a UTC clock frozen at the given UTC date and time.
    pub fn utc(now: NaiveDateTime) -> Self {
        Self {
            now: Utc.from_utc_datetime(&now).fixed_offset(),
        }
    }

    /// Returns the frozen instant
    pub const fn instant(&self) -> DateTime<FixedOffset> {
        self.now
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now.naive_local()
    }

    fn at(&self, timestamp: i64) -> Option<NaiveDateTime> {
        DateTime::from_timestamp(timestamp, 0).map(|dt| dt.with_timezone(self.now.offset()).naive_local())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    fn noon(year: i32, month: u32, day: u32) -> NaiveDateTime {
        date(year, month, day).and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn test_fixed_clock_now_and_today() {
        let clock = FixedClock::utc(noon(2014, 1, 15));
        assert_eq!(clock.now(), noon(2014, 1, 15));
        assert_eq!(clock.today(), date(2014, 1, 15));
    }

    #[test]
    fn test_fixed_clock_at_utc() {
        let clock = FixedClock::utc(noon(2014, 1, 15));
        let at = clock.at(1_234_567_890).unwrap();
        assert_eq!(at, date(2009, 2, 13).and_hms_opt(23, 31, 30).unwrap());
    }

    #[test]
    fn test_fixed_clock_at_respects_offset() {
        let offset = FixedOffset::east_opt(7 * 3600).unwrap();
        let now = offset.from_local_datetime(&noon(2001, 2, 3)).unwrap();
        let clock = FixedClock::new(now);

        assert_eq!(clock.instant(), now);
        assert_eq!(clock.now(), noon(2001, 2, 3));
        // 2009-02-13T23:31:30Z is already the 14th at +07:00
        assert_eq!(
            clock.at(1_234_567_890).unwrap().date(),
            date(2009, 2, 14)
        );
    }

    #[test]
    fn test_out_of_range_timestamp() {
        let clock = FixedClock::utc(noon(2014, 1, 15));
        assert_eq!(clock.at(i64::MAX), None);
        assert_eq!(SystemClock.at(i64::MIN), None);
    }

    #[test]
    fn test_clock_by_reference() {
        let clock = FixedClock::utc(noon(2014, 1, 15));
        let by_ref: &dyn Clock = &clock;
        assert_eq!(by_ref.today(), date(2014, 1, 15));
        assert_eq!((&clock).at(0).unwrap().date(), date(1970, 1, 1));
    }

    #[test]
    fn test_system_clock_is_consistent() {
        let clock = SystemClock;
        let at_epoch = clock.at(0).unwrap();
        // the epoch is the 1st of January or the 31st of December depending on zone
        assert!(at_epoch.date() == date(1970, 1, 1) || at_epoch.date() == date(1969, 12, 31));
    }
}
