use std::iter::FusedIterator;

use chrono::NaiveDate;

use crate::{Month, MonthError};

/// Lazy walk from a starting month towards an inclusive limit.
///
/// A positive step yields ascending months while they are `<= limit`; a
/// negative step yields descending months while they are `>= limit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthStep {
    origin:  Month,
    current: Option<Month>,
    limit:   Month,
    step:    i64,
}

impl MonthStep {
    /// Creates a new walk.
    ///
    /// # Errors
    /// Returns `MonthError::InvalidStep` if `step` is zero.
    pub fn new(start: Month, limit: Month, step: i64) -> Result<Self, MonthError> {
        if step == 0 {
            return Err(MonthError::InvalidStep);
        }
        Ok(Self {
            origin: start,
            current: Some(start),
            limit,
            step,
        })
    }

    /// Returns the month the walk started from
    pub const fn start(&self) -> Month {
        self.origin
    }

    /// Returns the inclusive limit
    pub const fn limit(&self) -> Month {
        self.limit
    }

    /// Returns the step size
    pub const fn step_size(&self) -> i64 {
        self.step
    }

    /// Rewinds the walk to its starting month.
    pub fn restart(&mut self) {
        self.current = Some(self.origin);
    }

    fn in_bounds(&self, month: Month) -> bool {
        if self.step > 0 {
            month <= self.limit
        } else {
            month >= self.limit
        }
    }

    fn remaining(&self) -> usize {
        match self.current {
            Some(current) if self.in_bounds(current) => {
                let span = self.limit.months_since(current) / self.step;
                usize::try_from(span)
                    .map_or(usize::MAX, |span| span.saturating_add(1))
            },
            _ => 0,
        }
    }
}

impl Iterator for MonthStep {
    type Item = Month;

    fn next(&mut self) -> Option<Month> {
        let current = self.current?;
        if !self.in_bounds(current) {
            self.current = None;
            return None;
        }
        // Stops the walk instead of wrapping when the year would overflow.
        self.current = current.checked_add(self.step);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MonthStep {}

impl FusedIterator for MonthStep {}

impl Month {
    /// Walks from `self` towards `limit` (inclusive) by `step` months.
    ///
    /// # Errors
    /// Returns `MonthError::InvalidStep` if `step` is zero.
    pub fn step(self, limit: Self, step: i64) -> Result<MonthStep, MonthError> {
        MonthStep::new(self, limit, step)
    }

    /// Eagerly visits every month [`Month::step`] would yield, in order.
    ///
    /// # Errors
    /// Returns `MonthError::InvalidStep` if `step` is zero; nothing is visited.
    pub fn step_each<F>(self, limit: Self, step: i64, mut visit: F) -> Result<(), MonthError>
    where
        F: FnMut(Self),
    {
        for month in self.step(limit, step)? {
            visit(month);
        }
        Ok(())
    }

    /// Every month from `self` up to `limit`, inclusive.
    pub fn up_to(self, limit: Self) -> MonthStep {
        MonthStep {
            origin: self,
            current: Some(self),
            limit,
            step: 1,
        }
    }

    /// Every month from `self` down to `limit`, inclusive.
    pub fn down_to(self, limit: Self) -> MonthStep {
        MonthStep {
            origin: self,
            current: Some(self),
            limit,
            step: -1,
        }
    }
}

/// The days of a single month, first to last (inclusive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dates {
    start: NaiveDate,
    end:   NaiveDate,
    front: Option<NaiveDate>,
    back:  Option<NaiveDate>,
}

impl Dates {
    pub(crate) const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            front: Some(start),
            back: Some(end),
        }
    }

    /// Returns the first day of the range
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the range
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Checks if the range contains a given date
    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    fn remaining(&self) -> usize {
        match (self.front, self.back) {
            (Some(front), Some(back)) if front <= back => {
                usize::try_from((back - front).num_days() + 1).unwrap_or(0)
            },
            _ => 0,
        }
    }

    fn finish(&mut self) {
        self.front = None;
        self.back = None;
    }
}

impl Iterator for Dates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let (front, back) = (self.front?, self.back?);
        if front == back {
            self.finish();
        } else {
            self.front = front.succ_opt();
        }
        Some(front)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Dates {
    fn next_back(&mut self) -> Option<NaiveDate> {
        let (front, back) = (self.front?, self.back?);
        if front == back {
            self.finish();
        } else {
            self.back = back.pred_opt();
        }
        Some(back)
    }
}

impl ExactSizeIterator for Dates {}

impl FusedIterator for Dates {}
