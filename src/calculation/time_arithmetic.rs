//! Clock-time arithmetic for shifts.
//!
//! Shifts are entered as 24-hour `HH:MM` start and end times on the shift
//! date. An end time earlier than the start time means the shift crossed
//! midnight; no shift spans more than one midnight.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parses a 24-hour `HH:MM` clock time into minutes since midnight.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns `InvalidTimeFormat` for anything that is not a valid `HH:MM` time.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::parse_clock_time;
///
/// assert_eq!(parse_clock_time("07:30").unwrap(), 450);
/// assert!(parse_clock_time("24:00").is_err());
/// ```
pub fn parse_clock_time(value: &str) -> EngineResult<u32> {
    let trimmed = value.trim();
    let invalid = || EngineError::InvalidTimeFormat {
        value: value.to_string(),
    };

    // chrono accepts single-digit minutes; the minute field must be two digits
    let (_, minutes) = trimmed.split_once(':').ok_or_else(invalid)?;
    if minutes.len() != 2 {
        return Err(invalid());
    }

    let time = NaiveTime::parse_from_str(trimmed, "%H:%M").map_err(|_| invalid())?;
    Ok(time.hour() * 60 + time.minute())
}

/// Returns the hours elapsed between two `HH:MM` clock times.
///
/// When the end is numerically before the start, 24 hours are added to model
/// a shift that crossed midnight. Equal times give zero hours.
///
/// # Errors
///
/// Returns `InvalidTimeFormat` when either time cannot be parsed.
///
/// # Examples
///
/// ```
/// use shift_pay_engine::calculation::elapsed_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(elapsed_hours("09:00", "17:30").unwrap(), Decimal::new(85, 1));
/// assert_eq!(elapsed_hours("22:00", "06:00").unwrap(), Decimal::from(8));
/// ```
pub fn elapsed_hours(start_time: &str, end_time: &str) -> EngineResult<Decimal> {
    let start = i64::from(parse_clock_time(start_time)?);
    let end = i64::from(parse_clock_time(end_time)?);

    let mut minutes = end - start;
    if minutes < 0 {
        minutes += MINUTES_PER_DAY;
    }

    Ok(Decimal::from(minutes) / Decimal::from(60))
}
