//! Gym attendance records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::timestamp::date_or_timestamp;

/// The action that produced an attendance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceSource {
    /// A logged workout.
    Workout,
    /// A lesson marked as attended.
    Lesson,
}

/// One day of gym attendance. The streak only looks at the date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The day attended.
    #[serde(with = "date_or_timestamp")]
    pub date: NaiveDate,
    /// What was attended.
    pub source: AttendanceSource,
}
