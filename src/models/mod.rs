//! Core data models for the shift pay engine.
//!
//! This module contains the documents exchanged with the persistence layer
//! (jobs, shifts, work records, freelance income, attendance) and the value
//! types the calculations are parameterised by.

mod attendance;
mod income;
mod job;
mod month_period;
mod shift;
mod timestamp;
mod work_record;

pub use attendance::{AttendanceRecord, AttendanceSource};
pub use income::{FreelanceIncome, IncomeStatus};
pub use job::Job;
pub use month_period::MonthPeriod;
pub use shift::{MAX_SHIFT_HOURS, Shift, ShiftType};
pub use timestamp::{Timestamp, date_or_timestamp, option_date_or_timestamp};
pub use work_record::{LeaveDays, ManualWorkRecord, MonthlyTotals, RecordKey, WorkRecord};
