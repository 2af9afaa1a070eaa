//! Aggregation models for the monthly report.
//!
//! This module contains the [`DateWithHours`] annotation produced for each
//! walked work date, the [`MonthAggregate`] accumulator that groups those
//! dates by calendar month, and the priced [`SalaryGroup`] that becomes one
//! report line.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A work date annotated with the billable hours of its week.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use paysheet::models::DateWithHours;
/// use rust_decimal::Decimal;
///
/// let sample = DateWithHours {
///     date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
///     hours_worked: Decimal::from(40),
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWithHours {
    /// The work date.
    pub date: NaiveDate,
    /// Billable hours attributed to this date's week.
    pub hours_worked: Decimal,
}

/// One calendar month's worth of accumulated work dates.
///
/// This is the only mutable state in the pipeline: the aggregator seeds one
/// accumulator per month, absorbs samples into it, and freezes it when the
/// month changes.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use paysheet::models::{DateWithHours, MonthAggregate};
/// use rust_decimal::Decimal;
///
/// let first = DateWithHours {
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     hours_worked: Decimal::from(40),
/// };
/// let mut aggregate = MonthAggregate::seed(&first);
///
/// let next = DateWithHours {
///     date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
///     hours_worked: Decimal::from(40),
/// };
/// assert!(aggregate.covers(next.date));
/// aggregate.absorb(&next);
///
/// assert_eq!(aggregate.hours_worked, Decimal::from(80));
/// assert_eq!(aggregate.concerned_dates.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthAggregate {
    /// The calendar year of the month.
    pub year: i32,
    /// The calendar month, 1-12.
    pub month: u32,
    /// Total billable hours accumulated for the month.
    pub hours_worked: Decimal,
    /// The work dates that contributed to the total, in input order.
    pub concerned_dates: Vec<NaiveDate>,
}

impl MonthAggregate {
    /// Starts a new accumulator from the first sample of a month.
    pub fn seed(sample: &DateWithHours) -> Self {
        MonthAggregate {
            year: sample.date.year(),
            month: sample.date.month(),
            hours_worked: sample.hours_worked,
            concerned_dates: vec![sample.date],
        }
    }

    /// Checks whether a date belongs to this accumulator's month.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Adds a sample to the running total.
    ///
    /// The caller is responsible for only absorbing samples whose date
    /// [`covers`](Self::covers) accepts.
    pub fn absorb(&mut self, sample: &DateWithHours) {
        self.hours_worked += sample.hours_worked;
        self.concerned_dates.push(sample.date);
    }

    /// The first day of this accumulator's month, used as the salary probe
    /// date.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month taken from a valid date")
    }
}

/// A priced month: one line of the final report.
///
/// The individual dates are dropped at this stage; only the totals remain.
/// Decimal fields serialize as strings.
///
/// # Example
///
/// ```
/// use paysheet::models::SalaryGroup;
/// use rust_decimal::Decimal;
///
/// let group = SalaryGroup {
///     year: 2024,
///     month: 1,
///     hours_worked: Decimal::from(160),
///     monthly_charge: Decimal::from(4000),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryGroup {
    /// The calendar year of the month.
    pub year: i32,
    /// The calendar month, 1-12.
    pub month: u32,
    /// Total billable hours for the month.
    pub hours_worked: Decimal,
    /// `hours_worked` times the hourly rate in effect on day 1.
    pub monthly_charge: Decimal,
}
