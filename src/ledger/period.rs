use std::fmt;

use chrono::{Datelike, Duration, Month, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::InputError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` calendar date: four-digit year, two-digit month
/// and day, no sign.
pub fn parse_date(raw: &str) -> Result<NaiveDate, InputError> {
    let trimmed = raw.trim();
    let invalid = || InputError::InvalidDate(trimmed.to_string());
    if !has_iso_shape(trimmed) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| invalid())
}

fn has_iso_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

/// Monday-to-Sunday window containing a date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekRange {
    /// Clamps to chrono's supported range at its extremes.
    pub fn containing(date: NaiveDate) -> Self {
        let delta = date.weekday().num_days_from_monday() as i64;
        let start = date
            .checked_sub_signed(Duration::days(delta))
            .unwrap_or(NaiveDate::MIN);
        let end = start
            .checked_add_signed(Duration::days(6))
            .unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    /// Identifier of the form `"2024-01-01 to 2024-01-07"`.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

/// Calendar month number, ignoring the year.
///
/// Dates from the same month in different years share a key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey(u32);

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self(date.month())
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    /// Full English month name, e.g. `January`.
    pub fn name(&self) -> &'static str {
        u8::try_from(self.0)
            .ok()
            .and_then(|n| Month::try_from(n).ok())
            .map(|month| month.name())
            .unwrap_or("Unknown")
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}
