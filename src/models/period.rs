//! Period table models.
//!
//! This module contains the [`PeriodSpan`] date range, the [`DatedPeriod`]
//! trait unifying the three period kinds, and the [`WorkPeriod`],
//! [`HolidayPeriod`] and [`SalaryPeriod`] entries that make up the three
//! configuration tables.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;

/// An inclusive range of calendar dates, possibly open-ended.
///
/// `to: None` means the span extends indefinitely into the future. Both
/// bounds are inclusive when present.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use paysheet::models::PeriodSpan;
///
/// let span = PeriodSpan {
///     from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     to: Some(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()),
/// };
///
/// assert!(span.contains(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));  // from
/// assert!(span.contains(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())); // to
/// assert!(!span.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())); // after
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodSpan {
    /// The first date covered by the span (inclusive).
    pub from: NaiveDate,
    /// The last date covered by the span (inclusive), or `None` for an
    /// open-ended span.
    pub to: Option<NaiveDate>,
}

impl PeriodSpan {
    /// Checks whether a date falls inside this span.
    ///
    /// # Arguments
    ///
    /// * `date` - The date to check.
    ///
    /// # Returns
    ///
    /// `true` when `from <= date` and either the span is open-ended or
    /// `date <= to`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && self.to.map_or(true, |to| date <= to)
    }
}

/// A table entry that covers a span of dates.
///
/// The three period tables share their lookup semantics; this trait lets
/// [`crate::calculation::find_period`] scan any of them.
pub trait DatedPeriod {
    /// The date span this entry covers.
    fn span(&self) -> &PeriodSpan;
}

/// One entry of the work-schedule table.
///
/// While this period is in effect, one work week happens per calendar week,
/// keyed to `weekday`, and counts `hours_per_week` billable hours.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use paysheet::models::{PeriodSpan, WorkPeriod};
/// use rust_decimal::Decimal;
///
/// let period = WorkPeriod {
///     span: PeriodSpan {
///         from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///         to: None,
///     },
///     weekday: Weekday::Mon,
///     hours_per_week: Decimal::from(40),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkPeriod {
    /// The dates during which this schedule entry applies.
    pub span: PeriodSpan,
    /// The weekday the weekly cadence is anchored to.
    pub weekday: Weekday,
    /// Billable hours per work week under this entry.
    pub hours_per_week: Decimal,
}

impl DatedPeriod for WorkPeriod {
    fn span(&self) -> &PeriodSpan {
        &self.span
    }
}

/// One entry of the holiday table. Work dates inside the span are excluded
/// from the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayPeriod {
    /// The dates during which no work happens.
    pub span: PeriodSpan,
}

impl DatedPeriod for HolidayPeriod {
    fn span(&self) -> &PeriodSpan {
        &self.span
    }
}

/// One entry of the salary table.
///
/// Months whose first day falls inside the span are priced at
/// `salary_per_hour`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryPeriod {
    /// The dates during which this rate applies.
    pub span: PeriodSpan,
    /// The hourly rate used to price a month.
    pub salary_per_hour: Decimal,
}

impl DatedPeriod for SalaryPeriod {
    fn span(&self) -> &PeriodSpan {
        &self.span
    }
}
