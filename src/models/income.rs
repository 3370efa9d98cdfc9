//! Freelance income model.
//!
//! Freelance income is independent of shifts and only feeds income reporting.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::timestamp::{date_or_timestamp, option_date_or_timestamp};

/// Payment state of a freelance income entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeStatus {
    /// Invoiced, not yet paid.
    Pending,
    /// Paid.
    Paid,
    /// Past its due date and unpaid.
    Overdue,
}

/// One freelance payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreelanceIncome {
    /// Unique identifier.
    pub id: String,
    /// Short description of the work.
    pub title: String,
    /// Amount invoiced.
    pub amount: Decimal,
    /// Invoice date.
    #[serde(with = "date_or_timestamp")]
    pub date: NaiveDate,
    /// Client name.
    #[serde(default)]
    pub client: String,
    /// Free-form category.
    #[serde(default)]
    pub category: String,
    /// Stored status.
    pub status: IncomeStatus,
    /// Date payment is due.
    #[serde(default, with = "option_date_or_timestamp")]
    pub due_date: Option<NaiveDate>,
    /// Date payment was received.
    #[serde(default, with = "option_date_or_timestamp")]
    pub paid_date: Option<NaiveDate>,
}

impl FreelanceIncome {
    /// Status as of `today`: a pending entry past its due date reads as overdue.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_pay_engine::models::{FreelanceIncome, IncomeStatus};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let income = FreelanceIncome {
    ///     id: "inc_1".to_string(),
    ///     title: "Logo".to_string(),
    ///     amount: Decimal::from(800),
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
    ///     client: String::new(),
    ///     category: String::new(),
    ///     status: IncomeStatus::Pending,
    ///     due_date: NaiveDate::from_ymd_opt(2026, 1, 31),
    ///     paid_date: None,
    /// };
    /// let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
    /// assert_eq!(income.effective_status(today), IncomeStatus::Overdue);
    /// ```
    pub fn effective_status(&self, today: NaiveDate) -> IncomeStatus {
        match (self.status, self.due_date) {
            (IncomeStatus::Pending, Some(due)) if due < today => IncomeStatus::Overdue,
            (status, _) => status,
        }
    }
}
