//! Pay rule selection.
//!
//! This module decides which row of the rule table applies to a shift from
//! the shift date's day of week and the shift type.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::config::{PayRules, TierRule};
use crate::models::ShiftType;

/// The rule table row applied to a shift.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::PayRule;
///
/// assert_eq!(PayRule::Saturday.to_string(), "saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayRule {
    /// Any shift dated on a Saturday.
    Saturday,
    /// A night shift on any day except Saturday.
    Night,
    /// A morning or afternoon shift on a Friday.
    Friday,
    /// Everything else: all hours at the regular rate.
    Standard,
}

impl PayRule {
    /// Returns the tier configuration for this rule, or `None` for [`PayRule::Standard`].
    pub fn tier<'a>(&self, rules: &'a PayRules) -> Option<&'a TierRule> {
        match self {
            PayRule::Saturday => Some(&rules.saturday),
            PayRule::Night => Some(&rules.night),
            PayRule::Friday => Some(&rules.friday),
            PayRule::Standard => None,
        }
    }
}

impl std::fmt::Display for PayRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayRule::Saturday => write!(f, "saturday"),
            PayRule::Night => write!(f, "night"),
            PayRule::Friday => write!(f, "friday"),
            PayRule::Standard => write!(f, "standard"),
        }
    }
}

/// Selects the rule for a shift.
///
/// Priority: Saturday first, then night shifts, then Friday, then standard.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::{select_rule, PayRule};
/// use shift_pay_engine::models::ShiftType;
/// use chrono::NaiveDate;
///
/// // 2026-01-17 is a Saturday: the Saturday rule wins over night
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert_eq!(select_rule(saturday, ShiftType::Night), PayRule::Saturday);
///
/// // 2026-01-16 is a Friday: night wins over Friday
/// let friday = NaiveDate::from_ymd_opt(2026, 1, 16).unwrap();
/// assert_eq!(select_rule(friday, ShiftType::Night), PayRule::Night);
/// assert_eq!(select_rule(friday, ShiftType::Morning), PayRule::Friday);
/// ```
pub fn select_rule(date: NaiveDate, shift_type: ShiftType) -> PayRule {
    match (date.weekday(), shift_type) {
        (Weekday::Sat, _) => PayRule::Saturday,
        (_, ShiftType::Night) => PayRule::Night,
        (Weekday::Fri, _) => PayRule::Friday,
        _ => PayRule::Standard,
    }
}
