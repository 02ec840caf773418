use derive_more::{Deref, From, Into};
use serde::{Deserialize, Serialize};

use crate::domain::errors::FormatError;

/// Value Object - a monetary amount in the page's display currency
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Serialize, Deserialize)]
pub struct Money(f64);

impl Money {
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - a plain Gregorian calendar date with no timezone attached.
///
/// Kept timezone-free on purpose: a date typed into a form is a calendar
/// fact, and shifting it through a timestamp changes the day near UTC
/// boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, FormatError> {
        if !(1..=12).contains(&month) || day == 0 || day > Self::days_in_month(year, month) {
            return Err(FormatError::InvalidCalendarDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn is_leap_year(year: i32) -> bool {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }

    pub fn days_in_month(year: i32, month: u32) -> u32 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_rules() {
        assert!(CalendarDate::is_leap_year(2024));
        assert!(CalendarDate::is_leap_year(2000));
        assert!(!CalendarDate::is_leap_year(1900));
        assert!(!CalendarDate::is_leap_year(2023));
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(CalendarDate::new(2024, 2, 30).is_err());
        assert!(CalendarDate::new(2023, 2, 29).is_err());
        assert!(CalendarDate::new(2024, 13, 1).is_err());
        assert!(CalendarDate::new(2024, 0, 1).is_err());
        assert!(CalendarDate::new(2024, 4, 0).is_err());
        assert!(CalendarDate::new(2024, 4, 31).is_err());
    }

    #[test]
    fn accepts_boundary_dates() {
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert!(CalendarDate::new(2024, 12, 31).is_ok());
        assert!(CalendarDate::new(2024, 1, 1).is_ok());
    }
}
