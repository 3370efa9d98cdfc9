//! Calculation logic for the shift pay engine.
//!
//! This module contains the pure computations: clock-time arithmetic, rule
//! selection by day of week and shift type, per-shift hour classification,
//! monthly aggregation with the transport stipend, yearly rollups over stored
//! records, the attendance streak and the yearly income report.

mod income_report;
mod monthly_aggregator;
mod rule_selection;
mod shift_classifier;
mod streak;
mod time_arithmetic;
mod yearly_rollup;

pub use income_report::{FreelanceSummary, IncomeReport, income_report, summarize_freelance};
pub use monthly_aggregator::{aggregate_month, aggregate_month_for_jobs};
pub use rule_selection::{PayRule, select_rule};
pub use shift_classifier::{ShiftClassification, classify, classify_shift};
pub use streak::compute_streak;
pub use time_arithmetic::{elapsed_hours, parse_clock_time};
pub use yearly_rollup::{MonthCell, YearGrid, YearlyTotals, build_year_grid, rollup_year};
