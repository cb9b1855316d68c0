//! Year-month keys for monthly resampling
//!
//! The trends engine buckets records by calendar month (year + month, ignoring
//! the day). `Month` is that bucket key: totally ordered chronologically, with
//! a successor operation so gaps between observed months can be zero-filled.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month (year + month), used as a resampling bucket key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Month {
    year: i32,
    /// 1-12
    month: u32,
}

impl Month {
    /// Create a month from a year and a 1-based month number
    ///
    /// Returns `None` if the month number is out of range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month containing a given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Get the year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Get the month number (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The next calendar month, wrapping December into January
    pub fn succ(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_range() {
        assert!(Month::new(2024, 1).is_some());
        assert!(Month::new(2024, 12).is_some());
        assert!(Month::new(2024, 0).is_none());
        assert!(Month::new(2024, 13).is_none());
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let month = Month::from_date(date);
        assert_eq!(month.year(), 2024);
        assert_eq!(month.month(), 3);
    }

    #[test]
    fn test_succ_wraps_december() {
        let december = Month::new(2024, 12).unwrap();
        assert_eq!(december.succ(), Month::new(2025, 1).unwrap());

        let march = Month::new(2024, 3).unwrap();
        assert_eq!(march.succ(), Month::new(2024, 4).unwrap());
    }

    #[test]
    fn test_chronological_ordering() {
        let jan_2024 = Month::new(2024, 1).unwrap();
        let dec_2023 = Month::new(2023, 12).unwrap();
        let feb_2024 = Month::new(2024, 2).unwrap();

        assert!(dec_2023 < jan_2024);
        assert!(jan_2024 < feb_2024);
    }

    #[test]
    fn test_display() {
        assert_eq!(Month::new(2024, 1).unwrap().to_string(), "2024-01");
        assert_eq!(Month::new(987, 11).unwrap().to_string(), "0987-11");
    }
}
