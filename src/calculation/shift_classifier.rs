//! Shift classification functionality.
//!
//! This module splits a shift's hours into regular, 125% and 150% buckets
//! according to the rule table and prices each bucket at the job's hourly rate.
//!
//! ## Rule Table (built-in)
//!
//! | Rule     | Regular | 125%        | 150%       |
//! |----------|---------|-------------|------------|
//! | Saturday | 0-7 h   | 7-10 h      | beyond 10 h |
//! | Night    | 0-7 h   | 7-8 h       | none       |
//! | Friday   | 0-8 h   | 8-10 h      | beyond 10 h |
//! | Standard | all     | none        | none       |

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::{PayRules, TierRule};
use crate::error::{EngineError, EngineResult};
use crate::models::{Job, Shift, ShiftType};

use super::{PayRule, select_rule};

/// The hour buckets and pay of one classified shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftClassification {
    /// The rule table row that was applied.
    pub rule: PayRule,
    /// Hours classified (negative input is treated as zero).
    pub hours: Decimal,
    /// Hours at the regular rate.
    pub regular_hours: Decimal,
    /// Hours at 125%.
    pub overtime125_hours: Decimal,
    /// Hours at 150%.
    pub overtime150_hours: Decimal,
    /// Hours beyond every tier of a rule without a 150% tier. Not paid.
    pub unclassified_hours: Decimal,
    /// Pay for regular hours.
    pub regular_pay: Decimal,
    /// Pay for 125% hours.
    pub overtime125_pay: Decimal,
    /// Pay for 150% hours.
    pub overtime150_pay: Decimal,
    /// Sum of the three pay buckets.
    pub total_pay: Decimal,
    /// Whether any overtime bucket is non-zero.
    pub is_overtime: bool,
    /// Human-readable explanation of the split.
    pub reasoning: String,
}

impl ShiftClassification {
    /// Hours at any overtime rate.
    pub fn overtime_hours(&self) -> Decimal {
        self.overtime125_hours + self.overtime150_hours
    }

    /// Pay for all overtime hours.
    pub fn overtime_pay(&self) -> Decimal {
        self.overtime125_pay + self.overtime150_pay
    }
}

struct HourSplit {
    regular: Decimal,
    overtime125: Decimal,
    overtime150: Decimal,
    unclassified: Decimal,
}

fn split_hours(hours: Decimal, tier: Option<&TierRule>) -> HourSplit {
    let Some(tier) = tier else {
        return HourSplit {
            regular: hours,
            overtime125: Decimal::ZERO,
            overtime150: Decimal::ZERO,
            unclassified: Decimal::ZERO,
        };
    };

    let regular = hours.min(tier.regular_hours);
    let remaining = hours - regular;
    let overtime125 = remaining.min(tier.overtime125_hours);
    let remaining = remaining - overtime125;

    let (overtime150, unclassified) = if tier.overtime150 {
        (remaining, Decimal::ZERO)
    } else {
        (Decimal::ZERO, remaining)
    };

    HourSplit {
        regular,
        overtime125,
        overtime150,
        unclassified,
    }
}

fn bucket_pay(
    hours: Decimal,
    hourly_rate: Decimal,
    multiplier: Decimal,
    bucket: &str,
) -> EngineResult<Decimal> {
    hours
        .checked_mul(hourly_rate)
        .and_then(|pay| pay.checked_mul(multiplier))
        .ok_or_else(|| EngineError::PayOverflow {
            context: format!("{} pay", bucket),
        })
}

/// Classifies a shift's hours and computes the pay for each bucket.
///
/// Hours less than or equal to zero are treated as no work: every bucket and
/// every pay amount is zero.
///
/// # Errors
///
/// Returns `PayOverflow` if a pay amount does not fit in a `Decimal`.
///
/// # Arguments
///
/// * `date` - The shift date (its day of week selects the rule)
/// * `hours` - The hours worked
/// * `shift_type` - Morning, afternoon or night
/// * `hourly_rate` - The job's base hourly rate
/// * `rules` - The rule table
///
/// # Examples
///
/// ## Saturday 12 hours at $50
///
/// ```
/// use shift_pay_engine::calculation::classify_shift;
/// use shift_pay_engine::config::PayRules;
/// use shift_pay_engine::models::ShiftType;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// let result = classify_shift(
///     saturday,
///     Decimal::from(12),
///     ShiftType::Morning,
///     Decimal::from(50),
///     &PayRules::default(),
/// )
/// .unwrap();
///
/// assert_eq!(result.regular_hours, Decimal::from(7));
/// assert_eq!(result.overtime125_hours, Decimal::from(3));
/// assert_eq!(result.overtime150_hours, Decimal::from(2));
/// // 7 × 50 + 3 × 50 × 1.25 + 2 × 50 × 1.5 = 687.50
/// assert_eq!(result.total_pay, Decimal::from_str("687.5").unwrap());
/// ```
pub fn classify_shift(
    date: NaiveDate,
    hours: Decimal,
    shift_type: ShiftType,
    hourly_rate: Decimal,
    rules: &PayRules,
) -> EngineResult<ShiftClassification> {
    let rule = select_rule(date, shift_type);
    let hours = hours.max(Decimal::ZERO);
    let split = split_hours(hours, rule.tier(rules));

    let multipliers = &rules.multipliers;
    let regular_pay = bucket_pay(split.regular, hourly_rate, multipliers.regular, "regular")?;
    let overtime125_pay = bucket_pay(
        split.overtime125,
        hourly_rate,
        multipliers.overtime125,
        "125%",
    )?;
    let overtime150_pay = bucket_pay(
        split.overtime150,
        hourly_rate,
        multipliers.overtime150,
        "150%",
    )?;
    let total_pay = regular_pay
        .checked_add(overtime125_pay)
        .and_then(|sum| sum.checked_add(overtime150_pay))
        .ok_or_else(|| EngineError::PayOverflow {
            context: "shift total".to_string(),
        })?;

    if split.unclassified > Decimal::ZERO {
        warn!(
            date = %date,
            rule = %rule,
            hours = %hours.normalize(),
            unclassified_hours = %split.unclassified.normalize(),
            "Shift exceeds every tier of its rule; excess hours are unpaid"
        );
    }

    let reasoning = format!(
        "{} rule on {}: {} h = {} regular + {} at 125% + {} at 150% + {} unclassified; \
         pay ${} + ${} + ${} = ${}",
        rule,
        date,
        hours.normalize(),
        split.regular.normalize(),
        split.overtime125.normalize(),
        split.overtime150.normalize(),
        split.unclassified.normalize(),
        regular_pay.normalize(),
        overtime125_pay.normalize(),
        overtime150_pay.normalize(),
        total_pay.normalize()
    );

    Ok(ShiftClassification {
        rule,
        hours,
        regular_hours: split.regular,
        overtime125_hours: split.overtime125,
        overtime150_hours: split.overtime150,
        unclassified_hours: split.unclassified,
        regular_pay,
        overtime125_pay,
        overtime150_pay,
        total_pay,
        is_overtime: split.overtime125 > Decimal::ZERO || split.overtime150 > Decimal::ZERO,
        reasoning,
    })
}

/// Classifies a [`Shift`] against its [`Job`].
///
/// # Errors
///
/// Propagates the errors of [`Shift::worked_hours`] and [`classify_shift`].
pub fn classify(shift: &Shift, job: &Job, rules: &PayRules) -> EngineResult<ShiftClassification> {
    let hours = shift.worked_hours()?;
    classify_shift(
        shift.date,
        hours,
        shift.shift_type,
        job.hourly_rate,
        rules,
    )
}
