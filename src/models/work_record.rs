//! Monthly work record models.
//!
//! A [`WorkRecord`] is the persisted snapshot of one job's month. It is either
//! derived from the month's shifts ([`WorkRecord::from_totals`]) or typed in by
//! hand ([`WorkRecord::from_manual`]). The store keeps at most one record per
//! [`RecordKey`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::MonthPeriod;

/// Aggregated hours and pay for one job over one month.
///
/// Produced by [`crate::calculation::aggregate_month`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotals {
    /// Sum of every shift's worked hours.
    pub total_hours: Decimal,
    /// Hours paid at the regular rate.
    pub regular_hours: Decimal,
    /// Hours paid at any overtime rate.
    pub overtime_hours: Decimal,
    /// Hours paid at 125%.
    pub overtime125_hours: Decimal,
    /// Hours paid at 150%.
    pub overtime150_hours: Decimal,
    /// Pay for regular hours.
    pub regular_pay: Decimal,
    /// Pay for all overtime hours.
    pub overtime_pay: Decimal,
    /// Pay for 125% hours.
    pub overtime125_pay: Decimal,
    /// Pay for 150% hours.
    pub overtime150_pay: Decimal,
    /// Flat monthly transport stipend included in the total.
    pub transport_payment: Decimal,
    /// Grand total: all pay plus transport.
    pub total_pay: Decimal,
    /// IDs of the shifts that were summed.
    pub shift_ids: Vec<String>,
}

/// The identity of a monthly record: one per job, month and year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey {
    /// The job the record belongs to.
    pub job_id: String,
    /// Calendar year.
    pub year: i32,
    /// Month number, 1-12.
    pub month: u32,
}

/// A persisted monthly work snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The job the record belongs to.
    pub job_id: String,
    /// Month number, 1-12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// Total hours worked.
    pub total_hours: Decimal,
    /// Hours at the regular rate.
    pub regular_hours: Decimal,
    /// Hours at any overtime rate.
    pub overtime_hours: Decimal,
    /// Hours at 125%.
    #[serde(default)]
    pub overtime125_hours: Decimal,
    /// Hours at 150%.
    #[serde(default)]
    pub overtime150_hours: Decimal,
    /// Pay for regular hours.
    pub regular_pay: Decimal,
    /// Pay for all overtime hours.
    pub overtime_pay: Decimal,
    /// Pay for 125% hours.
    #[serde(default)]
    pub overtime125_pay: Decimal,
    /// Pay for 150% hours.
    #[serde(default)]
    pub overtime150_pay: Decimal,
    /// Transport stipend included in the total.
    #[serde(default)]
    pub transport_payment: Decimal,
    /// Vacation days taken in the month.
    #[serde(default)]
    pub vacation_days_used: Decimal,
    /// Illness days taken in the month.
    #[serde(default)]
    pub illness_days_used: Decimal,
    /// Grand total for the month.
    pub total_pay: Decimal,
    /// IDs of the shifts the record was derived from; empty when entered manually.
    #[serde(default)]
    pub shifts: Vec<String>,
}

/// Leave taken during a month, recorded alongside the totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDays {
    /// Vacation days taken.
    #[serde(default)]
    pub vacation_days_used: Decimal,
    /// Illness days taken.
    #[serde(default)]
    pub illness_days_used: Decimal,
}

/// A monthly record typed in by the user instead of derived from shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualWorkRecord {
    /// The job the record belongs to.
    pub job_id: String,
    /// Month number, 1-12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// Total hours worked.
    #[serde(default)]
    pub total_hours: Decimal,
    /// Hours at the regular rate.
    #[serde(default)]
    pub regular_hours: Decimal,
    /// Hours at 125%.
    #[serde(default)]
    pub overtime125_hours: Decimal,
    /// Hours at 150%.
    #[serde(default)]
    pub overtime150_hours: Decimal,
    /// Pay for regular hours.
    #[serde(default)]
    pub regular_pay: Decimal,
    /// Pay for 125% hours.
    #[serde(default)]
    pub overtime125_pay: Decimal,
    /// Pay for 150% hours.
    #[serde(default)]
    pub overtime150_pay: Decimal,
    /// Transport stipend.
    #[serde(default)]
    pub transport_payment: Decimal,
    /// Leave taken.
    #[serde(flatten)]
    pub leave: LeaveDays,
}

impl WorkRecord {
    /// Builds a record from aggregated monthly totals.
    ///
    /// The record gets a fresh ID; the store replaces it with the existing
    /// record's ID when the key is already taken.
    pub fn from_totals(
        job_id: impl Into<String>,
        period: MonthPeriod,
        totals: &MonthlyTotals,
        leave: LeaveDays,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            job_id: job_id.into(),
            month: period.month(),
            year: period.year(),
            total_hours: totals.total_hours,
            regular_hours: totals.regular_hours,
            overtime_hours: totals.overtime_hours,
            overtime125_hours: totals.overtime125_hours,
            overtime150_hours: totals.overtime150_hours,
            regular_pay: totals.regular_pay,
            overtime_pay: totals.overtime_pay,
            overtime125_pay: totals.overtime125_pay,
            overtime150_pay: totals.overtime150_pay,
            transport_payment: totals.transport_payment,
            vacation_days_used: leave.vacation_days_used,
            illness_days_used: leave.illness_days_used,
            total_pay: totals.total_pay,
            shifts: totals.shift_ids.clone(),
        }
    }

    /// Builds a record from a manual entry, deriving the overtime and grand totals.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonth` when the month is outside 1-12.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_pay_engine::models::{LeaveDays, ManualWorkRecord, WorkRecord};
    /// use rust_decimal::Decimal;
    ///
    /// let manual = ManualWorkRecord {
    ///     job_id: "job_001".to_string(),
    ///     month: 3,
    ///     year: 2026,
    ///     total_hours: Decimal::from(160),
    ///     regular_hours: Decimal::from(150),
    ///     overtime125_hours: Decimal::from(10),
    ///     overtime150_hours: Decimal::ZERO,
    ///     regular_pay: Decimal::from(7500),
    ///     overtime125_pay: Decimal::from(625),
    ///     overtime150_pay: Decimal::ZERO,
    ///     transport_payment: Decimal::from(200),
    ///     leave: LeaveDays::default(),
    /// };
    /// let record = WorkRecord::from_manual(&manual).unwrap();
    /// assert_eq!(record.overtime_pay, Decimal::from(625));
    /// assert_eq!(record.total_pay, Decimal::from(8325));
    /// assert!(record.shifts.is_empty());
    /// ```
    pub fn from_manual(manual: &ManualWorkRecord) -> EngineResult<Self> {
        let period = MonthPeriod::new(manual.year, manual.month)?;
        let overtime_hours = manual.overtime125_hours + manual.overtime150_hours;
        let overtime_pay = manual.overtime125_pay + manual.overtime150_pay;

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            job_id: manual.job_id.clone(),
            month: period.month(),
            year: period.year(),
            total_hours: manual.total_hours,
            regular_hours: manual.regular_hours,
            overtime_hours,
            overtime125_hours: manual.overtime125_hours,
            overtime150_hours: manual.overtime150_hours,
            regular_pay: manual.regular_pay,
            overtime_pay,
            overtime125_pay: manual.overtime125_pay,
            overtime150_pay: manual.overtime150_pay,
            transport_payment: manual.transport_payment,
            vacation_days_used: manual.leave.vacation_days_used,
            illness_days_used: manual.leave.illness_days_used,
            total_pay: manual.regular_pay + overtime_pay + manual.transport_payment,
            shifts: Vec::new(),
        })
    }

    /// The (job, year, month) key this record occupies.
    pub fn key(&self) -> RecordKey {
        RecordKey {
            job_id: self.job_id.clone(),
            year: self.year,
            month: self.month,
        }
    }

    /// Checks the month number of a record read back from the store.
    pub fn validate(&self) -> EngineResult<()> {
        if !(1..=12).contains(&self.month) {
            return Err(EngineError::InvalidMonth { month: self.month });
        }
        Ok(())
    }
}
