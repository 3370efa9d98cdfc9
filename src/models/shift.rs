//! Shift model and related types.
//!
//! This module defines the [`Shift`] struct and [`ShiftType`] enum for
//! representing one worked period. The hour-split fields on a shift are
//! derived data: [`Shift::recompute`] overwrites them from the date, the
//! worked hours, the shift type and the owning job's rate.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculation::{ShiftClassification, classify_shift, elapsed_hours};
use crate::config::PayRules;
use crate::error::{EngineError, EngineResult};

use super::Job;

/// Longest shift the engine accepts, in hours.
pub const MAX_SHIFT_HOURS: u32 = 24;

use super::timestamp::date_or_timestamp;

/// The part of the day a shift covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// Morning shift.
    Morning,
    /// Afternoon shift.
    Afternoon,
    /// Night shift. Night shifts have their own overtime tiers.
    Night,
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftType::Morning => write!(f, "morning"),
            ShiftType::Afternoon => write!(f, "afternoon"),
            ShiftType::Night => write!(f, "night"),
        }
    }
}

/// Represents one worked period for a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The job this shift was worked for.
    pub job_id: String,
    /// The calendar date the shift starts on (drives the day-of-week rules).
    #[serde(with = "date_or_timestamp")]
    pub date: NaiveDate,
    /// Start clock time, `HH:MM`.
    #[serde(default)]
    pub start_time: Option<String>,
    /// End clock time, `HH:MM`. Earlier than the start means the shift crossed midnight.
    #[serde(default)]
    pub end_time: Option<String>,
    /// The part of the day the shift covers.
    pub shift_type: ShiftType,
    /// Elapsed hours. Derived from the clock times when both are present.
    #[serde(default)]
    pub hours: Option<Decimal>,
    /// Whether any hour was paid at an overtime rate.
    #[serde(default)]
    pub is_overtime: bool,
    /// Hours paid at the regular rate.
    #[serde(default)]
    pub regular_hours: Decimal,
    /// Hours paid at 125%.
    #[serde(default)]
    pub overtime125_hours: Decimal,
    /// Hours paid at 150%.
    #[serde(default)]
    pub overtime150_hours: Decimal,
}

impl Shift {
    /// Creates an unclassified shift from clock times.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_pay_engine::models::{Shift, ShiftType};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let shift = Shift::new(
    ///     "shift_001",
    ///     "job_001",
    ///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    ///     "22:00",
    ///     "06:00",
    ///     ShiftType::Night,
    /// );
    /// assert_eq!(shift.worked_hours().unwrap(), Decimal::from(8));
    /// ```
    pub fn new(
        id: impl Into<String>,
        job_id: impl Into<String>,
        date: NaiveDate,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        shift_type: ShiftType,
    ) -> Self {
        Self {
            id: id.into(),
            job_id: job_id.into(),
            date,
            start_time: Some(start_time.into()),
            end_time: Some(end_time.into()),
            shift_type,
            hours: None,
            is_overtime: false,
            regular_hours: Decimal::ZERO,
            overtime125_hours: Decimal::ZERO,
            overtime150_hours: Decimal::ZERO,
        }
    }

    /// Creates an unclassified shift from an already elapsed number of hours.
    pub fn with_hours(
        id: impl Into<String>,
        job_id: impl Into<String>,
        date: NaiveDate,
        hours: Decimal,
        shift_type: ShiftType,
    ) -> Self {
        Self {
            id: id.into(),
            job_id: job_id.into(),
            date,
            start_time: None,
            end_time: None,
            shift_type,
            hours: Some(hours),
            is_overtime: false,
            regular_hours: Decimal::ZERO,
            overtime125_hours: Decimal::ZERO,
            overtime150_hours: Decimal::ZERO,
        }
    }

    /// Returns the hours worked on this shift.
    ///
    /// Clock times take precedence over the stored `hours` since `hours` is
    /// derived from them.
    ///
    /// # Errors
    ///
    /// - `InvalidTimeFormat` if a clock time cannot be parsed
    /// - `InvalidShift` if neither both clock times nor `hours` are present,
    ///   or if the stored hours exceed [`MAX_SHIFT_HOURS`]
    ///
    /// Negative stored hours count as no work.
    pub fn worked_hours(&self) -> EngineResult<Decimal> {
        match (&self.start_time, &self.end_time, self.hours) {
            (Some(start), Some(end), _) => elapsed_hours(start, end),
            (_, _, Some(hours)) if hours > Decimal::from(MAX_SHIFT_HOURS) => {
                Err(EngineError::InvalidShift {
                    shift_id: self.id.clone(),
                    message: format!("hours cannot exceed {}", MAX_SHIFT_HOURS),
                })
            }
            (_, _, Some(hours)) if hours < Decimal::ZERO => {
                warn!(shift_id = %self.id, hours = %hours, "Negative shift hours treated as zero");
                Ok(Decimal::ZERO)
            }
            (_, _, Some(hours)) => Ok(hours),
            _ => Err(EngineError::InvalidShift {
                shift_id: self.id.clone(),
                message: "either startTime and endTime or hours is required".to_string(),
            }),
        }
    }

    /// Returns the day of the week of the shift date.
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }

    /// Classifies the shift against the job's rate and overwrites every derived field.
    ///
    /// This is the save-time recomputation: `hours`, `is_overtime` and the three
    /// hour buckets are replaced, whatever they held before.
    pub fn recompute(&mut self, job: &Job, rules: &PayRules) -> EngineResult<ShiftClassification> {
        let hours = self.worked_hours()?;
        let classification =
            classify_shift(self.date, hours, self.shift_type, job.hourly_rate, rules)?;

        self.hours = Some(hours);
        self.is_overtime = classification.is_overtime;
        self.regular_hours = classification.regular_hours;
        self.overtime125_hours = classification.overtime125_hours;
        self.overtime150_hours = classification.overtime150_hours;

        Ok(classification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_day_shift_worked_hours() {
        let shift = Shift::new(
            "SH-001",
            "job_001",
            make_date("2026-01-15"),
            "09:00",
            "17:30",
            ShiftType::Morning,
        );
        assert_eq!(shift.worked_hours().unwrap(), Decimal::new(85, 1));
    }

    #[test]
    fn test_clock_times_take_precedence_over_stale_hours() {
        let mut shift = Shift::new(
            "SH-002",
            "job_001",
            make_date("2026-01-15"),
            "09:00",
            "13:00",
            ShiftType::Morning,
        );
        shift.hours = Some(Decimal::from(12));
        assert_eq!(shift.worked_hours().unwrap(), Decimal::from(4));
    }

    #[test]
    fn test_pre_elapsed_hours_used_without_clock_times() {
        let shift = Shift::with_hours(
            "SH-003",
            "job_001",
            make_date("2026-01-15"),
            Decimal::new(75, 1),
            ShiftType::Afternoon,
        );
        assert_eq!(shift.worked_hours().unwrap(), Decimal::new(75, 1));
    }

    #[test]
    fn test_negative_pre_elapsed_hours_count_as_zero() {
        let shift = Shift::with_hours(
            "SH-004",
            "job_001",
            make_date("2026-01-15"),
            Decimal::from(-2),
            ShiftType::Morning,
        );
        assert_eq!(shift.worked_hours().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_pre_elapsed_hours_beyond_a_day_rejected() {
        let mut shift = Shift::with_hours(
            "SH-007",
            "job_001",
            make_date("2026-01-15"),
            Decimal::from(24),
            ShiftType::Morning,
        );
        assert_eq!(shift.worked_hours().unwrap(), Decimal::from(24));

        shift.hours = Some(Decimal::new(2401, 2));
        assert!(matches!(
            shift.worked_hours(),
            Err(EngineError::InvalidShift { .. })
        ));
    }

    #[test]
    fn test_missing_times_and_hours_rejected() {
        let mut shift = Shift::with_hours(
            "SH-005",
            "job_001",
            make_date("2026-01-15"),
            Decimal::ONE,
            ShiftType::Morning,
        );
        shift.hours = None;
        assert!(matches!(
            shift.worked_hours(),
            Err(EngineError::InvalidShift { .. })
        ));
    }

    #[test]
    fn test_invalid_clock_time_rejected() {
        let shift = Shift::new(
            "SH-006",
            "job_001",
            make_date("2026-01-15"),
            "9am",
            "17:00",
            ShiftType::Morning,
        );
        assert!(matches!(
            shift.worked_hours(),
            Err(EngineError::InvalidTimeFormat { .. })
        ));
    }

    #[test]
    fn test_recompute_overwrites_derived_fields() {
        let job = Job::new("job_001", Decimal::from(50), Decimal::ZERO);
        // 2026-01-17 is a Saturday
        let mut shift = Shift::new(
            "SH-007",
            "job_001",
            make_date("2026-01-17"),
            "08:00",
            "20:00",
            ShiftType::Morning,
        );
        shift.regular_hours = Decimal::from(99);
        shift.is_overtime = false;

        let classification = shift.recompute(&job, &PayRules::default()).unwrap();

        assert_eq!(shift.hours, Some(Decimal::from(12)));
        assert_eq!(shift.regular_hours, Decimal::from(7));
        assert_eq!(shift.overtime125_hours, Decimal::from(3));
        assert_eq!(shift.overtime150_hours, Decimal::from(2));
        assert!(shift.is_overtime);
        assert_eq!(classification.total_pay, Decimal::new(6875, 1));
    }

    #[test]
    fn test_day_of_week() {
        let shift = Shift::new(
            "shift_001",
            "job_001",
            make_date("2026-01-16"),
            "09:00",
            "17:00",
            ShiftType::Morning,
        );
        assert_eq!(shift.day_of_week(), Weekday::Fri);
    }

    #[test]
    fn test_shift_deserialization() {
        let json = r#"{
            "id": "shift_001",
            "jobId": "job_001",
            "date": "2026-01-15",
            "startTime": "22:00",
            "endTime": "06:00",
            "shiftType": "night"
        }"#;

        let shift: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(shift.job_id, "job_001");
        assert_eq!(shift.shift_type, ShiftType::Night);
        assert_eq!(shift.hours, None);
        assert!(!shift.is_overtime);
    }

    #[test]
    fn test_shift_serialization_round_trip() {
        let shift = Shift::new(
            "shift_001",
            "job_001",
            make_date("2026-01-15"),
            "09:00",
            "17:00",
            ShiftType::Afternoon,
        );

        let json = serde_json::to_string(&shift).unwrap();
        assert!(json.contains("\"shiftType\":\"afternoon\""));
        let deserialized: Shift = serde_json::from_str(&json).unwrap();
        assert_eq!(shift, deserialized);
    }
}
