//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the pay rule
//! table from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};

use super::types::{PayRules, TierRule};

/// Loads and provides access to the pay rule table.
///
/// # File Format
///
/// ```text
/// version: "2026-01"
/// multipliers: { regular: "1", overtime125: "1.25", overtime150: "1.5" }
/// saturday: { regular_hours: "7", overtime125_hours: "3", overtime150: true }
/// night:    { regular_hours: "7", overtime125_hours: "1", overtime150: false }
/// friday:   { regular_hours: "8", overtime125_hours: "2", overtime150: true }
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_pay_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/pay_rules.yaml").unwrap();
/// println!("Loaded rules: {}", loader.rules().version);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    rules: PayRules,
}

impl ConfigLoader {
    /// Loads the rule table from the specified file.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if the file cannot be read
    /// - `ConfigParseError` if the YAML is invalid or a value is out of range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let rules = Self::load_yaml::<PayRules>(path)?;
        Self::validate(&rules, path)?;

        info!(path = %path.display(), version = %rules.version, "Loaded pay rules");
        Ok(Self { rules })
    }

    /// Loads the rule table from `path` when given, otherwise uses the built-in table.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> EngineResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("No pay rules file configured, using built-in table");
                Ok(Self::default())
            }
        }
    }

    /// Wraps an already built rule table.
    pub fn from_rules(rules: PayRules) -> Self {
        Self { rules }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(rules: &PayRules, path: &Path) -> EngineResult<()> {
        let fail = |message: String| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };

        let multipliers = [
            ("regular", rules.multipliers.regular),
            ("overtime125", rules.multipliers.overtime125),
            ("overtime150", rules.multipliers.overtime150),
        ];
        for (name, value) in multipliers {
            if value <= Decimal::ZERO {
                return Err(fail(format!("multiplier '{}' must be positive", name)));
            }
        }

        let tiers: [(&str, &TierRule); 3] = [
            ("saturday", &rules.saturday),
            ("night", &rules.night),
            ("friday", &rules.friday),
        ];
        for (name, tier) in tiers {
            if tier.regular_hours < Decimal::ZERO || tier.overtime125_hours < Decimal::ZERO {
                return Err(fail(format!("rule '{}' has negative hours", name)));
            }
        }

        Ok(())
    }

    /// Returns the loaded rule table.
    pub fn rules(&self) -> &PayRules {
        &self.rules
    }
}
