use std::str::FromStr;

use crate::{
    DATE_SEPARATOR, MONTH_ABBREVIATIONS, MONTH_NAMES, Month, MonthError, MonthOfYear,
    NAME_SEPARATOR,
    consts::{MONTH_DIGITS, YEAR_DIGITS},
};

/// How month names and abbreviations are compared while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Case {
    Sensitive,
    Insensitive,
}

impl Case {
    fn matches(self, input: &str, expected: &str) -> bool {
        match self {
            Self::Sensitive => input == expected,
            Self::Insensitive => input.eq_ignore_ascii_case(expected),
        }
    }

    fn lookup(self, input: &str, table: &[&str; 12]) -> Option<MonthOfYear> {
        table
            .iter()
            .position(|name| self.matches(input, name))
            .map(|index| MonthOfYear::ALL[index])
    }
}

impl Month {
    /// Parses a month from one of the recognized forms:
    ///
    /// * `YYYY-MM`, e.g. `"2014-01"`
    /// * `YYYY ABBR`, e.g. `"2014 JAN"`
    /// * `FullName YYYY`, e.g. `"January 2014"`
    ///
    /// Month names are matched case-sensitively.
    ///
    /// # Errors
    /// Returns `MonthError::InvalidFormat` if the input matches none of the forms,
    /// or `MonthError::InvalidMonthNumber` for an ISO form with month `00` or above `12`.
    pub fn parse(s: &str) -> Result<Self, MonthError> {
        parse_with(s, Case::Sensitive)
    }

    /// Like [`Month::parse`], but month names and abbreviations match regardless
    /// of ASCII case (`"2014 jan"`, `"JANUARY 2014"`).
    ///
    /// # Errors
    /// Same as [`Month::parse`].
    pub fn parse_ignore_case(s: &str) -> Result<Self, MonthError> {
        parse_with(s, Case::Insensitive)
    }
}

impl FromStr for Month {
    type Err = MonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_with(s: &str, case: Case) -> Result<Month, MonthError> {
    if let Some(month) = parse_iso(s) {
        return month;
    }
    if let Some(month) = parse_year_abbreviation(s, case) {
        return Ok(month);
    }
    if let Some(month) = parse_name_year(s, case) {
        return Ok(month);
    }

    log::trace!("no month format matched {s:?}");
    Err(MonthError::InvalidFormat(s.to_owned()))
}

/// `YYYY-MM`. Returns `None` when the shape doesn't match, and `Some(Err(_))`
/// when it does but the month number is out of range.
pub(crate) fn parse_iso(s: &str) -> Option<Result<Month, MonthError>> {
    let (year, number) = s.split_once(DATE_SEPARATOR)?;
    let year = parse_digits(year, YEAR_DIGITS)?;
    let number = parse_digits(number, MONTH_DIGITS)?;
    // at most two digits, always fits
    let number = u8::try_from(number).ok()?;

    Some(Month::new(year, number))
}

/// The form `Display` writes: an optional `-`, one or more year digits, `-`,
/// then a two-digit month (`"2014-01"`, `"-5-03"`, `"12345-11"`).
///
/// Returns `None` when the shape doesn't match (including years outside
/// `i32`), and `Some(Err(_))` for an out-of-range month number.
pub(crate) fn parse_canonical(s: &str) -> Option<Result<Month, MonthError>> {
    let unsigned = s.strip_prefix(DATE_SEPARATOR).unwrap_or(s);
    let (digits, number) = unsigned.split_once(DATE_SEPARATOR)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // the signed year, i.e. everything before the last separator
    let year: i32 = s[..s.len() - number.len() - 1].parse().ok()?;
    let number = u8::try_from(parse_digits(number, MONTH_DIGITS)?).ok()?;

    Some(Month::new(year, number))
}

/// `YYYY ABBR`
fn parse_year_abbreviation(s: &str, case: Case) -> Option<Month> {
    let (year, abbreviation) = s.split_once(NAME_SEPARATOR)?;
    let year = parse_digits(year, YEAR_DIGITS)?;
    let month = case.lookup(abbreviation, &MONTH_ABBREVIATIONS)?;

    Some(month.of(year))
}

/// `FullName YYYY`
fn parse_name_year(s: &str, case: Case) -> Option<Month> {
    let (name, year) = s.split_once(NAME_SEPARATOR)?;
    let month = case.lookup(name, &MONTH_NAMES)?;
    let year = parse_digits(year, YEAR_DIGITS)?;

    Some(month.of(year))
}

/// Parses exactly `width` ASCII digits; signs and whitespace are rejected.
fn parse_digits(s: &str, width: usize) -> Option<i32> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
