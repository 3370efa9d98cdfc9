//! Consecutive-day attendance streak.

use std::collections::HashSet;

use chrono::NaiveDate;

/// Counts consecutive attended days ending at `today`.
///
/// Dates are compared as calendar days, so duplicates and multiple records on
/// one day count once. If `today` has no attendance yet the count starts from
/// yesterday; any other missing day ends the streak.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::compute_streak;
/// use chrono::NaiveDate;
///
/// let day = |d| NaiveDate::from_ymd_opt(2026, 10, d).unwrap();
/// let dates = [day(16), day(17), day(18)];
///
/// assert_eq!(compute_streak(dates, day(19)), 3);
/// assert_eq!(compute_streak(dates, day(20)), 0);
/// ```
pub fn compute_streak<I>(dates: I, today: NaiveDate) -> u32
where
    I: IntoIterator<Item = NaiveDate>,
{
    let attended: HashSet<NaiveDate> = dates.into_iter().collect();

    let mut cursor = if attended.contains(&today) {
        Some(today)
    } else {
        today.pred_opt()
    };

    let mut streak = 0;
    while let Some(day) = cursor {
        if !attended.contains(&day) {
            break;
        }
        streak += 1;
        cursor = day.pred_opt();
    }
    streak
}
