//! Calculation logic for the paysheet reporting pipeline.
//!
//! This module contains the pure pipeline stages: first-match period
//! lookup, start-date derivation, weekly date walking with period-boundary
//! re-anchoring, holiday exclusion, weekly-hours annotation, calendar-month
//! aggregation, and month pricing. Every stage is a free function of its
//! inputs; "today" is always an explicit parameter.

mod hours;
mod month_aggregation;
mod period_lookup;
mod salary;
mod start_date;
mod week_walker;
mod working_day;

pub use hours::hours_for_date;
pub use month_aggregation::aggregate_by_month;
pub use period_lookup::find_period;
pub use salary::price_month;
pub use start_date::derive_start_date;
pub use week_walker::walk_weeks;
pub use working_day::is_working_day;
