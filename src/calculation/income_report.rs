//! Yearly income reporting across work records and freelance income.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{FreelanceIncome, IncomeStatus, WorkRecord};

/// Freelance income for one year, bucketed by effective status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreelanceSummary {
    /// Sum of paid entries.
    pub paid_total: Decimal,
    /// Sum of pending entries not yet past due.
    pub pending_total: Decimal,
    /// Sum of entries past due and unpaid.
    pub overdue_total: Decimal,
    /// Number of entries dated in the year.
    pub entries: u32,
}

/// Summarizes the freelance entries dated in `year`, as of `today`.
pub fn summarize_freelance(
    incomes: &[FreelanceIncome],
    year: i32,
    today: NaiveDate,
) -> FreelanceSummary {
    let mut summary = FreelanceSummary::default();

    for income in incomes.iter().filter(|i| i.date.year() == year) {
        match income.effective_status(today) {
            IncomeStatus::Paid => summary.paid_total += income.amount,
            IncomeStatus::Pending => summary.pending_total += income.amount,
            IncomeStatus::Overdue => summary.overdue_total += income.amount,
        }
        summary.entries += 1;
    }

    summary
}

/// Combined income for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeReport {
    /// Calendar year.
    pub year: i32,
    /// Sum of every job's monthly record totals.
    pub work_income: Decimal,
    /// Freelance breakdown.
    pub freelance: FreelanceSummary,
    /// Work income plus paid freelance income.
    pub total_income: Decimal,
}

/// Builds the income report for `year`.
///
/// Only paid freelance income counts toward `total_income`.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::income_report;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let report = income_report(&[], &[], 2026, today);
/// assert_eq!(report.total_income, Decimal::ZERO);
/// ```
pub fn income_report(
    records: &[WorkRecord],
    incomes: &[FreelanceIncome],
    year: i32,
    today: NaiveDate,
) -> IncomeReport {
    let work_income = records
        .iter()
        .filter(|r| r.year == year)
        .map(|r| r.total_pay)
        .sum::<Decimal>();
    let freelance = summarize_freelance(incomes, year, today);

    IncomeReport {
        year,
        work_income,
        total_income: work_income + freelance.paid_total,
        freelance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeaveDays, MonthPeriod, MonthlyTotals};

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn income(
        id: &str,
        amount: i64,
        date: &str,
        status: IncomeStatus,
        due: Option<&str>,
    ) -> FreelanceIncome {
        FreelanceIncome {
            id: id.to_string(),
            title: "Work".to_string(),
            amount: Decimal::from(amount),
            date: make_date(date),
            client: String::new(),
            category: String::new(),
            status,
            due_date: due.map(make_date),
            paid_date: None,
        }
    }

    fn record(year: i32, month: u32, pay: i64) -> WorkRecord {
        let totals = MonthlyTotals {
            total_pay: Decimal::from(pay),
            ..MonthlyTotals::default()
        };
        WorkRecord::from_totals(
            "job_001",
            MonthPeriod::new(year, month).unwrap(),
            &totals,
            LeaveDays::default(),
        )
    }

    #[test]
    fn test_summary_buckets_by_effective_status() {
        let incomes = vec![
            income("a", 1000, "2026-02-01", IncomeStatus::Paid, None),
            income("b", 300, "2026-09-01", IncomeStatus::Pending, Some("2026-10-30")),
            income("c", 200, "2026-08-01", IncomeStatus::Pending, Some("2026-09-01")),
            income("d", 50, "2026-03-01", IncomeStatus::Overdue, None),
            income("e", 999, "2025-12-31", IncomeStatus::Paid, None),
        ];
        let summary = summarize_freelance(&incomes, 2026, make_date("2026-10-19"));

        assert_eq!(summary.paid_total, Decimal::from(1000));
        assert_eq!(summary.pending_total, Decimal::from(300));
        assert_eq!(summary.overdue_total, Decimal::from(250));
        assert_eq!(summary.entries, 4);
    }

    #[test]
    fn test_report_adds_paid_freelance_to_work_income() {
        let records = vec![record(2026, 1, 5000), record(2026, 2, 4000), record(2025, 12, 700)];
        let incomes = vec![
            income("a", 1000, "2026-02-01", IncomeStatus::Paid, None),
            income("b", 300, "2026-09-01", IncomeStatus::Pending, None),
        ];
        let report = income_report(&records, &incomes, 2026, make_date("2026-10-19"));

        assert_eq!(report.year, 2026);
        assert_eq!(report.work_income, Decimal::from(9000));
        assert_eq!(report.freelance.pending_total, Decimal::from(300));
        assert_eq!(report.total_income, Decimal::from(10000));
    }
}
