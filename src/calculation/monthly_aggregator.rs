//! Monthly aggregation of classified shifts.
//!
//! Totals are built per job and calendar month. The job's transport stipend is
//! added once on top of the worked pay, and only when at least one shift fell
//! in the month.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::PayRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{Job, MonthPeriod, MonthlyTotals, Shift};

use super::classify;

fn add(total: &mut Decimal, value: Decimal, field: &str) -> EngineResult<()> {
    *total = total
        .checked_add(value)
        .ok_or_else(|| EngineError::PayOverflow {
            context: format!("monthly {}", field),
        })?;
    Ok(())
}

/// Aggregates one job's shifts for one month.
///
/// Shifts belonging to other jobs or dated outside the period are ignored.
///
/// # Arguments
///
/// * `shifts` - Shifts to consider; may span several jobs and months
/// * `job` - The job being aggregated
/// * `period` - The calendar month
/// * `rules` - The rule table used to classify each shift
///
/// # Errors
///
/// Returns the first error raised while classifying a shift, or
/// `PayOverflow` if a monthly sum does not fit in a `Decimal`.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::aggregate_month;
/// use shift_pay_engine::config::PayRules;
/// use shift_pay_engine::models::{Job, MonthPeriod, Shift, ShiftType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let job = Job::new("job_001", Decimal::from(50), Decimal::from(200));
/// let shift = Shift::new(
///     "shift_001",
///     "job_001",
///     NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
///     "08:00",
///     "20:00",
///     ShiftType::Morning,
/// );
/// let period = MonthPeriod::new(2026, 1).unwrap();
///
/// let totals = aggregate_month(&[shift], &job, period, &PayRules::default()).unwrap();
/// assert_eq!(totals.total_pay, Decimal::new(8875, 1));
/// ```
pub fn aggregate_month(
    shifts: &[Shift],
    job: &Job,
    period: MonthPeriod,
    rules: &PayRules,
) -> EngineResult<MonthlyTotals> {
    let mut totals = MonthlyTotals::default();

    for shift in shifts
        .iter()
        .filter(|s| s.job_id == job.id && period.contains(s.date))
    {
        let classification = classify(shift, job, rules)?;

        totals.total_hours += classification.hours;
        totals.regular_hours += classification.regular_hours;
        totals.overtime125_hours += classification.overtime125_hours;
        totals.overtime150_hours += classification.overtime150_hours;
        add(&mut totals.regular_pay, classification.regular_pay, "regular pay")?;
        add(&mut totals.overtime125_pay, classification.overtime125_pay, "125% pay")?;
        add(&mut totals.overtime150_pay, classification.overtime150_pay, "150% pay")?;
        totals.shift_ids.push(shift.id.clone());
    }

    totals.overtime_hours = totals.overtime125_hours + totals.overtime150_hours;
    totals.overtime_pay = totals.overtime125_pay;
    add(&mut totals.overtime_pay, totals.overtime150_pay, "overtime pay")?;

    if !totals.shift_ids.is_empty() {
        totals.transport_payment = job.transport_payment;
    }
    totals.total_pay = totals.regular_pay;
    add(&mut totals.total_pay, totals.overtime_pay, "total pay")?;
    add(&mut totals.total_pay, totals.transport_payment, "total pay")?;

    debug!(
        job_id = %job.id,
        period = %period,
        shifts = totals.shift_ids.len(),
        total_pay = %totals.total_pay,
        "Aggregated month"
    );

    Ok(totals)
}

/// Aggregates every job that has at least one shift in the month.
///
/// Shifts whose job is not in `jobs` are skipped with a warning. The result
/// is keyed by job ID.
///
/// # Errors
///
/// Returns the first error raised while computing a shift's hours.
pub fn aggregate_month_for_jobs(
    shifts: &[Shift],
    jobs: &[Job],
    period: MonthPeriod,
    rules: &PayRules,
) -> EngineResult<BTreeMap<String, MonthlyTotals>> {
    let jobs_by_id: HashMap<&str, &Job> = jobs.iter().map(|j| (j.id.as_str(), j)).collect();
    let mut result = BTreeMap::new();

    for shift in shifts.iter().filter(|s| period.contains(s.date)) {
        if !jobs_by_id.contains_key(shift.job_id.as_str()) {
            warn!(
                shift_id = %shift.id,
                job_id = %shift.job_id,
                "Skipping shift for unknown job"
            );
        }
    }

    for job in jobs {
        if !shifts
            .iter()
            .any(|s| s.job_id == job.id && period.contains(s.date))
        {
            continue;
        }
        let totals = aggregate_month(shifts, job, period, rules)?;
        result.insert(job.id.clone(), totals);
    }

    Ok(result)
}
