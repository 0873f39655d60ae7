//! Shared constructors for unit tests.

use chrono::NaiveDate;

use crate::Month;

pub fn month(year: i32, number: u8) -> Month {
    Month::new(year, number).expect("test month should be valid")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date should be valid")
}

pub fn months(values: &[(i32, u8)]) -> Vec<Month> {
    values.iter().map(|&(y, m)| month(y, m)).collect()
}
