//! Calendar month period.
//!
//! This module contains the [`MonthPeriod`] type that bounds a monthly
//! aggregation to an inclusive `[first_day, last_day]` date range.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{EngineError, EngineResult};

/// One calendar month of one year.
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::MonthPeriod;
/// use chrono::NaiveDate;
///
/// let period = MonthPeriod::new(2024, 2).unwrap();
/// assert_eq!(period.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert!(period.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
/// assert!(!period.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthPeriod {
    year: i32,
    month: u32,
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl MonthPeriod {
    /// Creates the period for `month` (1-12) of `year`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonth` when the month is outside 1-12 or the year is
    /// outside the supported calendar range.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidMonth { month };

        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next_month_first = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or_else(invalid)?;
        let last_day = next_month_first.pred_opt().ok_or_else(invalid)?;

        Ok(Self {
            year,
            month,
            first_day,
            last_day,
        })
    }

    /// Returns the period containing `date`.
    pub fn of(date: NaiveDate) -> EngineResult<Self> {
        Self::new(date.year(), date.month())
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Checks if a date falls within the month, both ends inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day && date <= self.last_day
    }
}

impl std::fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
