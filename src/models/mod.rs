//! Core data models for the paysheet reporting pipeline.
//!
//! This module contains all the domain types used throughout the crate.

mod aggregate;
mod period;

pub use aggregate::{DateWithHours, MonthAggregate, SalaryGroup};
pub use period::{DatedPeriod, HolidayPeriod, PeriodSpan, SalaryPeriod, WorkPeriod};
