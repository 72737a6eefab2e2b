//! Calendar month key used for grouping expenses
//!
//! Months are the grouping unit for summaries, budget alerts, and the bar
//! chart. Ordering is chronological, so a sorted map keyed by `Month` yields
//! ascending display order.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A (year, month) pair identifying one calendar month (e.g., "2025-08")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    /// Create a month key; returns None for an out-of-range month number
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month a date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthParseError(String);

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid month format (expected YYYY-MM): {}", self.0)
    }
}

impl std::error::Error for MonthParseError {}

impl FromStr for Month {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MonthParseError(s.to_string());

        let (year_str, month_str) = s.split_once('-').ok_or_else(err)?;
        let year: i32 = year_str.parse().map_err(|_| err())?;
        let month: u32 = month_str.parse().map_err(|_| err())?;

        Month::new(year, month).ok_or_else(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
        let month = Month::from_date(date);
        assert_eq!(month, Month::new(2025, 8).unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(Month::new(2025, 8).unwrap().to_string(), "2025-08");
        assert_eq!(Month::new(2025, 12).unwrap().to_string(), "2025-12");
    }

    #[test]
    fn test_parse() {
        let month: Month = "2025-08".parse().unwrap();
        assert_eq!(month, Month::new(2025, 8).unwrap());

        assert!("2025".parse::<Month>().is_err());
        assert!("2025-13".parse::<Month>().is_err());
        assert!("2025-xx".parse::<Month>().is_err());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let jan = Month::new(2025, 1).unwrap();
        let aug = Month::new(2025, 8).unwrap();
        let next_year = Month::new(2026, 1).unwrap();

        assert!(jan < aug);
        assert!(aug < next_year);
    }

    #[test]
    fn test_contains() {
        let month = Month::new(2025, 8).unwrap();
        assert!(month.contains(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()));
        assert!(month.contains(NaiveDate::from_ymd_opt(2025, 8, 31).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()));
    }
}
