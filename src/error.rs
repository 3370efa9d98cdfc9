//! Error types for the shift pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine can report. All failures are recoverable:
//! callers surface them as messages, nothing in the engine panics on bad input.

use thiserror::Error;

/// The main error type for the shift pay engine.
///
/// # Example
///
/// ```
/// use shift_pay_engine::error::EngineError;
///
/// let error = EngineError::InvalidTimeFormat {
///     value: "25:00".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time format '25:00': expected HH:MM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A clock time could not be parsed as 24-hour `HH:MM`.
    #[error("Invalid time format '{value}': expected HH:MM")]
    InvalidTimeFormat {
        /// The rejected input.
        value: String,
    },

    /// A month number outside 1-12 was supplied.
    #[error("Invalid month: {month} (expected 1-12)")]
    InvalidMonth {
        /// The rejected month number.
        month: u32,
    },

    /// A shift was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A job referenced by ID could not be resolved.
    #[error("Job not found: {job_id}")]
    JobNotFound {
        /// The job ID that was not found.
        job_id: String,
    },

    /// A work record referenced by ID does not exist.
    #[error("Work record not found: {id}")]
    RecordNotFound {
        /// The record ID that was not found.
        id: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A pay amount exceeded the range of a decimal.
    #[error("Pay calculation overflowed: {context}")]
    PayOverflow {
        /// The amount being computed.
        context: String,
    },

    /// The work record store rejected an operation.
    #[error("Storage error: {message}")]
    StorageError {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
