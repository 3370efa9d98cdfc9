//! Yearly rollups over stored monthly work records.
//!
//! Two views are produced: [`rollup_year`] totals one job's year, and
//! [`build_year_grid`] lays every record out as year rows with twelve month
//! cells for the history grid.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::WorkRecord;

/// One job's totals across a calendar year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyTotals {
    /// Sum of the records' total pay.
    pub total_pay: Decimal,
    /// Sum of the records' total hours.
    pub total_hours: Decimal,
    /// Number of records (months) that contributed.
    pub months_count: u32,
}

/// Totals one job's records for one year.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::rollup_year;
///
/// let totals = rollup_year(&[], "job_001", 2026);
/// assert_eq!(totals.months_count, 0);
/// ```
pub fn rollup_year(records: &[WorkRecord], job_id: &str, year: i32) -> YearlyTotals {
    records
        .iter()
        .filter(|r| r.job_id == job_id && r.year == year)
        .fold(YearlyTotals::default(), |mut acc, r| {
            acc.total_pay += r.total_pay;
            acc.total_hours += r.total_hours;
            acc.months_count += 1;
            acc
        })
}

/// One month cell of the history grid, summed over every job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCell {
    /// Hours worked in the month across jobs.
    pub total_hours: Decimal,
    /// Pay for the month across jobs.
    pub total_pay: Decimal,
    /// IDs of the records in the cell.
    pub record_ids: Vec<String>,
    /// Jobs with a record in the cell.
    pub job_ids: Vec<String>,
}

/// One year row of the history grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearGrid {
    /// Calendar year.
    pub year: i32,
    /// January through December; `None` where no record exists.
    pub months: [Option<MonthCell>; 12],
    /// Hours for the whole year.
    pub total_hours: Decimal,
    /// Pay for the whole year.
    pub total_pay: Decimal,
}

impl YearGrid {
    fn empty(year: i32) -> Self {
        Self {
            year,
            months: Default::default(),
            total_hours: Decimal::ZERO,
            total_pay: Decimal::ZERO,
        }
    }
}

/// Groups records into year rows, newest year first.
///
/// Records with a month outside 1-12 are skipped with a warning.
pub fn build_year_grid(records: &[WorkRecord]) -> Vec<YearGrid> {
    let mut years: BTreeMap<i32, YearGrid> = BTreeMap::new();

    for record in records {
        if record.validate().is_err() {
            warn!(
                record_id = %record.id,
                month = record.month,
                "Skipping work record with invalid month"
            );
            continue;
        }

        let row = years
            .entry(record.year)
            .or_insert_with(|| YearGrid::empty(record.year));
        let cell = row.months[(record.month - 1) as usize].get_or_insert_with(MonthCell::default);

        cell.total_hours += record.total_hours;
        cell.total_pay += record.total_pay;
        cell.record_ids.push(record.id.clone());
        if !cell.job_ids.contains(&record.job_id) {
            cell.job_ids.push(record.job_id.clone());
        }

        row.total_hours += record.total_hours;
        row.total_pay += record.total_pay;
    }

    years.into_values().rev().collect()
}
