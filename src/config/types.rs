//! Configuration types for shift pay classification.
//!
//! This module contains the strongly-typed rule table that is deserialized
//! from `pay_rules.yaml`. [`PayRules::default`] reproduces the built-in table,
//! so a missing file is never required for correct pay.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pay multipliers for each hour bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Multipliers {
    /// Multiplier for regular hours.
    pub regular: Decimal,
    /// Multiplier for the first overtime tier.
    pub overtime125: Decimal,
    /// Multiplier for the second overtime tier.
    pub overtime150: Decimal,
}

impl Default for Multipliers {
    fn default() -> Self {
        Self {
            regular: Decimal::ONE,
            overtime125: Decimal::new(125, 2),
            overtime150: Decimal::new(15, 1),
        }
    }
}

/// How one rule splits a shift's hours into buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRule {
    /// Hours paid at the regular rate before overtime starts.
    pub regular_hours: Decimal,
    /// Hours paid at the first overtime tier after the regular hours.
    pub overtime125_hours: Decimal,
    /// Whether hours beyond both caps are paid at the second overtime tier.
    /// When false those hours are left unclassified and unpaid.
    pub overtime150: bool,
}

/// The day-of-week and shift-type rule table.
///
/// Rules are evaluated in the order Saturday, night, Friday; any other shift
/// is paid entirely at the regular rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRules {
    /// Version label of the rule table.
    #[serde(default = "default_version")]
    pub version: String,
    /// Bucket multipliers.
    #[serde(default)]
    pub multipliers: Multipliers,
    /// Rule for any Saturday shift.
    pub saturday: TierRule,
    /// Rule for night shifts on other days.
    pub night: TierRule,
    /// Rule for non-night Friday shifts.
    pub friday: TierRule,
}

fn default_version() -> String {
    "builtin".to_string()
}

impl Default for PayRules {
    fn default() -> Self {
        Self {
            version: default_version(),
            multipliers: Multipliers::default(),
            saturday: TierRule {
                regular_hours: Decimal::from(7),
                overtime125_hours: Decimal::from(3),
                overtime150: true,
            },
            night: TierRule {
                regular_hours: Decimal::from(7),
                overtime125_hours: Decimal::ONE,
                overtime150: false,
            },
            friday: TierRule {
                regular_hours: Decimal::from(8),
                overtime125_hours: Decimal::from(2),
                overtime150: true,
            },
        }
    }
}
