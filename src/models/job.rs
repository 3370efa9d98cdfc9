//! Job model.
//!
//! A job holds the employment contract parameters that pay calculations read:
//! the hourly rate and the flat monthly transport stipend. The remaining fields
//! are informational and displayed alongside the totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_overtime_rate() -> Decimal {
    Decimal::new(125, 2)
}

/// A user's employment contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique identifier for the job.
    pub id: String,
    /// Job title.
    #[serde(default)]
    pub title: String,
    /// Employer name.
    #[serde(default)]
    pub company: String,
    /// Base pay per hour.
    pub hourly_rate: Decimal,
    /// Display-only overtime multiplier. The classifier uses the pay rules instead.
    #[serde(default = "default_overtime_rate")]
    pub overtime_rate: Decimal,
    /// Display-only monthly overtime threshold in hours.
    #[serde(default)]
    pub overtime_threshold: Decimal,
    /// Fixed monthly transport stipend.
    #[serde(default)]
    pub transport_payment: Decimal,
    /// Day of the month the stipend is paid.
    #[serde(default)]
    pub transport_payment_day: Option<u32>,
    /// Paid vacation days granted.
    #[serde(default)]
    pub vacation_days: Decimal,
    /// Vacation days already used.
    #[serde(default)]
    pub used_vacation_days: Decimal,
    /// Illness days granted.
    #[serde(default)]
    pub illness_days: Decimal,
    /// Illness days already used.
    #[serde(default)]
    pub used_illness_days: Decimal,
}

impl Job {
    /// Creates a job with the given rate and stipend and no leave balances.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_pay_engine::models::Job;
    /// use rust_decimal::Decimal;
    ///
    /// let job = Job::new("job_001", Decimal::from(50), Decimal::from(200));
    /// assert_eq!(job.hourly_rate, Decimal::from(50));
    /// assert_eq!(job.overtime_rate, Decimal::new(125, 2));
    /// ```
    pub fn new(id: impl Into<String>, hourly_rate: Decimal, transport_payment: Decimal) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            company: String::new(),
            hourly_rate,
            overtime_rate: default_overtime_rate(),
            overtime_threshold: Decimal::ZERO,
            transport_payment,
            transport_payment_day: None,
            vacation_days: Decimal::ZERO,
            used_vacation_days: Decimal::ZERO,
            illness_days: Decimal::ZERO,
            used_illness_days: Decimal::ZERO,
        }
    }

    /// Vacation days still available, never negative.
    pub fn remaining_vacation_days(&self) -> Decimal {
        (self.vacation_days - self.used_vacation_days).max(Decimal::ZERO)
    }

    /// Illness days still available, never negative.
    pub fn remaining_illness_days(&self) -> Decimal {
        (self.illness_days - self.used_illness_days).max(Decimal::ZERO)
    }
}
