//! Request types for the shift pay API.
//!
//! Bodies use the same camelCase field names as the stored documents, so a
//! client can post its Job and Shift documents as they are.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{
    AttendanceRecord, FreelanceIncome, Job, LeaveDays, Shift, date_or_timestamp, option_date_or_timestamp,
};

/// Request body for `POST /shifts/hours`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftHoursRequest {
    /// Start clock time, `HH:MM`.
    pub start_time: String,
    /// End clock time, `HH:MM`.
    pub end_time: String,
}

/// Request body for `POST /shifts/classify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// The job the shift belongs to.
    pub job: Job,
    /// The shift to classify.
    pub shift: Shift,
}

/// Request body for `POST /months/aggregate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateRequest {
    /// The job being aggregated.
    pub job: Job,
    /// Candidate shifts; those for other jobs or months are ignored.
    #[serde(default)]
    pub shifts: Vec<Shift>,
    /// Calendar year.
    pub year: i32,
    /// Month number, 1-12.
    pub month: u32,
}

/// Request body for `POST /work-records`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveWorkRecordRequest {
    /// The job being saved.
    pub job: Job,
    /// Candidate shifts; those for other jobs or months are ignored.
    #[serde(default)]
    pub shifts: Vec<Shift>,
    /// Calendar year.
    pub year: i32,
    /// Month number, 1-12.
    pub month: u32,
    /// Leave taken in the month.
    #[serde(flatten)]
    pub leave: LeaveDays,
}

/// Query string of `GET /work-records/rollup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollupQuery {
    /// The job to total.
    pub job_id: String,
    /// Calendar year.
    pub year: i32,
}

/// One attended day: a `YYYY-MM-DD` string or a `{seconds, nanos}` timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDate(
    /// The attended day.
    #[serde(with = "date_or_timestamp")]
    pub NaiveDate,
);

/// Request body for `POST /attendance/streak`.
///
/// Attended days come from `attendance` records, bare `dates`, or both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakRequest {
    /// Logged workouts and attended lessons.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    /// Attended days without a source.
    #[serde(default)]
    pub dates: Vec<AttendanceDate>,
    /// The day to count back from; the server's current UTC date when absent.
    #[serde(default, with = "option_date_or_timestamp")]
    pub today: Option<NaiveDate>,
}

impl StreakRequest {
    /// Every attended day in the request, duplicates included.
    pub fn attended_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.attendance
            .iter()
            .map(|record| record.date)
            .chain(self.dates.iter().map(|date| date.0))
    }
}

/// Request body for `POST /income/report`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeReportRequest {
    /// Freelance entries to include.
    #[serde(default)]
    pub freelance: Vec<FreelanceIncome>,
    /// Calendar year to report.
    pub year: i32,
    /// The day overdue status is judged against; the server's current UTC date when absent.
    #[serde(default, with = "option_date_or_timestamp")]
    pub today: Option<NaiveDate>,
}
