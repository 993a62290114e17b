//! Calendar month used by monthly totals
//!
//! Formatted and parsed as "YYYY-MM".

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;

/// A year and month (1-12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Create a month, rejecting month numbers outside 1-12
    pub fn new(year: i32, month: u32) -> Result<Self, ExpenseError> {
        if !(1..=12).contains(&month) {
            return Err(ExpenseError::Validation(format!(
                "Invalid month: {}. Use 1-12",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in local time
    pub fn current() -> Self {
        Self::of(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// All twelve months of a year, January first
    pub fn all_in_year(year: i32) -> impl Iterator<Item = Month> {
        (1..=12).map(move |month| Month { year, month })
    }

    /// Abbreviated English month name
    pub fn short_name(&self) -> &'static str {
        const NAMES: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        NAMES[(self.month - 1) as usize]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ExpenseError::Validation(format!("Invalid month: '{}'. Use YYYY-MM", s));

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Month::new(year, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let month: Month = "2024-01".parse().unwrap();
        assert_eq!(month.year(), 2024);
        assert_eq!(month.month(), 1);
        assert_eq!(month.to_string(), "2024-01");
        assert_eq!(month.short_name(), "Jan");
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!("2024-13".parse::<Month>().unwrap_err().is_validation());
        assert!("2024-00".parse::<Month>().is_err());
        assert!("January".parse::<Month>().is_err());
        assert!(Month::new(2024, 0).is_err());
    }

    #[test]
    fn test_all_in_year() {
        let months: Vec<_> = Month::all_in_year(2024).collect();
        assert_eq!(months.len(), 12);
        assert_eq!(months[11].to_string(), "2024-12");
    }

    #[test]
    fn test_of_date() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 31).unwrap();
        assert_eq!(Month::of(date).to_string(), "2025-07");
    }
}
