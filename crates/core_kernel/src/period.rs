//! Billing period keys
//!
//! A period is a calendar month identified by a `YYYY-MM` key. The key is
//! used both as a map key in persisted documents and for ordering, so the
//! derived ordering (year, then month) matches the lexicographic ordering of
//! the zero-padded string form.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when building or parsing a period key
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    #[error("Malformed period key '{0}', expected YYYY-MM")]
    Malformed(String),

    #[error("Invalid month {0}, expected 1-12")]
    InvalidMonth(u32),

    #[error("Invalid year {0}, expected 1-9999")]
    InvalidYear(i32),
}

/// A calendar month, serialized as `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PeriodKey {
    year: i32,
    month: u32,
}

impl PeriodKey {
    /// Latest representable period
    pub const LAST: PeriodKey = PeriodKey { year: 9999, month: 12 };

    /// Creates a period key, validating the month and year
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month));
        }
        if !(1..=9999).contains(&year) {
            return Err(PeriodError::InvalidYear(year));
        }
        Ok(Self { year, month })
    }

    /// The period containing the given date
    pub fn from_date(date: NaiveDate) -> Result<Self, PeriodError> {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Advances by `months` calendar months, rolling over year boundaries
    ///
    /// Returns `None` past [`PeriodKey::LAST`].
    pub fn add_months(&self, months: u32) -> Option<Self> {
        let index = self.month_index() + i64::from(months);
        if index > Self::LAST.month_index() {
            return None;
        }
        Some(Self::from_month_index(index))
    }

    /// The following calendar month, `None` after [`PeriodKey::LAST`]
    pub fn next(&self) -> Option<Self> {
        self.add_months(1)
    }

    /// Signed number of months from `self` to `other`
    pub fn months_until(&self, other: &PeriodKey) -> i64 {
        other.month_index() - self.month_index()
    }

    /// First calendar day of the period
    pub fn first_day(&self) -> NaiveDate {
        // Years 1..=9999 are all inside chrono's range
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Number of days in the period
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            2 if NaiveDate::from_ymd_opt(self.year, 2, 29).is_some() => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// The given day of this month, clamped to the month's last day
    ///
    /// Day 31 in a 30-day month resolves to the 30th, day 0 to the 1st.
    pub fn clamped_day(&self, day: u32) -> NaiveDate {
        let day = day.clamp(1, self.days_in_month());
        self.first_day()
            .with_day(day)
            .unwrap_or_else(|| self.first_day())
    }

    /// Returns true if the date falls inside this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    fn month_index(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    fn from_month_index(index: i64) -> Self {
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for PeriodKey {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || PeriodError::Malformed(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(malformed)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(malformed());
        }
        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for PeriodKey {
    type Error = PeriodError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PeriodKey> for String {
    fn from(key: PeriodKey) -> String {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> PeriodKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let p = key("2024-03");
        assert_eq!(p.year(), 2024);
        assert_eq!(p.month(), 3);
        assert_eq!(p.to_string(), "2024-03");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("2024-3".parse::<PeriodKey>().is_err());
        assert!("2024/03".parse::<PeriodKey>().is_err());
        assert!("".parse::<PeriodKey>().is_err());
        assert_eq!(
            "2024-13".parse::<PeriodKey>(),
            Err(PeriodError::InvalidMonth(13))
        );
    }

    #[test]
    fn test_add_months_rolls_over_year() {
        assert_eq!(key("2024-11").add_months(1), Some(key("2024-12")));
        assert_eq!(key("2024-12").add_months(1), Some(key("2025-01")));
        assert_eq!(key("2024-11").add_months(2), Some(key("2025-01")));
        assert_eq!(key("2024-01").add_months(24), Some(key("2026-01")));
    }

    #[test]
    fn test_add_months_stops_at_last_period() {
        assert_eq!(key("9999-11").next(), Some(PeriodKey::LAST));
        assert_eq!(PeriodKey::LAST.next(), None);
        assert_eq!(key("2024-01").add_months(u32::MAX), None);
        assert_eq!(PeriodKey::LAST.to_string().parse::<PeriodKey>(), Ok(PeriodKey::LAST));
    }

    #[test]
    fn test_ordering_matches_string_ordering() {
        let a = key("2024-09");
        let b = key("2024-10");
        let c = key("2025-01");
        assert!(a < b && b < c);
        assert!(a.to_string() < b.to_string() && b.to_string() < c.to_string());
    }

    #[test]
    fn test_clamped_day() {
        assert_eq!(
            key("2024-02").clamped_day(31),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            key("2023-02").clamped_day(30),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
        assert_eq!(
            key("2024-04").clamped_day(0),
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
        );
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&key("2024-05")).unwrap();
        assert_eq!(json, "\"2024-05\"");
        let back: PeriodKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key("2024-05"));
        assert!(serde_json::from_str::<PeriodKey>("\"May 2024\"").is_err());
    }
}
