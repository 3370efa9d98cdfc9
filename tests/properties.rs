//! Property tests for shift classification, time arithmetic and aggregation.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use proptest::prelude::*;
use rust_decimal::Decimal;

use shift_pay_engine::calculation::{
    aggregate_month, classify_shift, compute_streak, elapsed_hours,
};
use shift_pay_engine::config::PayRules;
use shift_pay_engine::models::{Job, MonthPeriod, Shift, ShiftType};

// 2026-01-11 is a Sunday
fn day_of_week(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 11).unwrap() + Days::new(offset)
}

fn shift_type_strategy() -> impl Strategy<Value = ShiftType> {
    prop_oneof![
        Just(ShiftType::Morning),
        Just(ShiftType::Afternoon),
        Just(ShiftType::Night),
    ]
}

// Quarter hours from 0 to 24
fn hours_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=96).prop_map(|quarters| Decimal::new(quarters * 25, 2))
}

fn clock_strategy() -> impl Strategy<Value = String> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| format!("{:02}:{:02}", h, m))
}

proptest! {
    #[test]
    fn prop_buckets_sum_to_hours(
        offset in 0u64..7,
        shift_type in shift_type_strategy(),
        hours in hours_strategy(),
    ) {
        let r = classify_shift(
            day_of_week(offset),
            hours,
            shift_type,
            Decimal::from(50),
            &PayRules::default(),
        )
        .unwrap();
        prop_assert_eq!(
            r.regular_hours + r.overtime125_hours + r.overtime150_hours + r.unclassified_hours,
            hours
        );
        prop_assert!(r.regular_hours >= Decimal::ZERO);
        prop_assert!(r.overtime125_hours >= Decimal::ZERO);
        prop_assert!(r.overtime150_hours >= Decimal::ZERO);
        prop_assert_eq!(r.total_pay, r.regular_pay + r.overtime125_pay + r.overtime150_pay);
        prop_assert_eq!(
            r.is_overtime,
            r.overtime125_hours > Decimal::ZERO || r.overtime150_hours > Decimal::ZERO
        );
    }

    #[test]
    fn prop_sunday_to_thursday_day_shifts_all_regular(
        offset in 0u64..5,
        morning in any::<bool>(),
        hours in hours_strategy(),
    ) {
        let shift_type = if morning { ShiftType::Morning } else { ShiftType::Afternoon };
        let r = classify_shift(day_of_week(offset), hours, shift_type, Decimal::from(50), &PayRules::default()).unwrap();
        prop_assert_eq!(r.regular_hours, hours);
        prop_assert!(!r.is_overtime);
        prop_assert_eq!(r.total_pay, hours * Decimal::from(50));
    }

    #[test]
    fn prop_only_night_leaves_hours_unclassified(
        offset in 0u64..7,
        shift_type in shift_type_strategy(),
        hours in hours_strategy(),
    ) {
        let date = day_of_week(offset);
        let r = classify_shift(date, hours, shift_type, Decimal::from(50), &PayRules::default()).unwrap();
        let night_rule = shift_type == ShiftType::Night && date.weekday() != Weekday::Sat;
        if !night_rule {
            prop_assert_eq!(r.unclassified_hours, Decimal::ZERO);
        }
    }

    #[test]
    fn prop_elapsed_hours_within_a_day(start in clock_strategy(), end in clock_strategy()) {
        let hours = elapsed_hours(&start, &end).unwrap();
        prop_assert!(hours >= Decimal::ZERO);
        prop_assert!(hours < Decimal::from(24));
        if start == end {
            prop_assert_eq!(hours, Decimal::ZERO);
        }
    }

    #[test]
    fn prop_month_total_is_pay_plus_transport(
        days in proptest::collection::vec(
            (0u64..31, shift_type_strategy(), hours_strategy()),
            0..20,
        ),
    ) {
        let job = Job::new("job_001", Decimal::from(40), Decimal::from(150));
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let shifts: Vec<Shift> = days
            .iter()
            .enumerate()
            .map(|(i, (offset, shift_type, hours))| {
                Shift::with_hours(
                    format!("s{}", i),
                    "job_001",
                    start + Days::new(*offset),
                    *hours,
                    *shift_type,
                )
            })
            .collect();
        let period = MonthPeriod::new(2026, 1).unwrap();

        let totals = aggregate_month(&shifts, &job, period, &PayRules::default()).unwrap();
        let expected_transport = if shifts.is_empty() { Decimal::ZERO } else { Decimal::from(150) };

        prop_assert_eq!(totals.transport_payment, expected_transport);
        prop_assert_eq!(
            totals.total_pay,
            totals.regular_pay + totals.overtime_pay + totals.transport_payment
        );
        prop_assert_eq!(totals.shift_ids.len(), shifts.len());
    }

    #[test]
    fn prop_streak_of_consecutive_days(len in 1u32..60, today_logged in any::<bool>()) {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let first_offset = if today_logged { 0 } else { 1 };
        let dates: Vec<NaiveDate> = (0..len)
            .map(|i| today - Days::new(u64::from(i + first_offset)))
            .collect();

        prop_assert_eq!(compute_streak(dates, today), len);
    }
}
