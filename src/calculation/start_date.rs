//! Report start-date derivation.
//!
//! The report does not begin at an arbitrary date: each work period implies
//! a first work date (its `from`, advanced to the period's weekday anchor),
//! and the report starts at the earliest of them.

use chrono::{Datelike, NaiveDate};

use crate::error::{PaysheetError, PaysheetResult};
use crate::models::WorkPeriod;

/// Derives the report's start date from the work-schedule table.
///
/// For every period, takes its `from` date and advances it day by day
/// until the weekday matches the period's anchor (at most six steps), then
/// returns the chronologically earliest of the aligned dates.
///
/// # Arguments
///
/// * `work_periods` - The work-schedule table
///
/// # Returns
///
/// The earliest aligned work date, or [`PaysheetError::EmptySchedule`] when
/// the table has no entries.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use paysheet::calculation::derive_start_date;
/// use paysheet::models::{PeriodSpan, WorkPeriod};
/// use rust_decimal::Decimal;
///
/// // 2024-01-01 is a Monday, so the from date is already aligned.
/// let table = vec![WorkPeriod {
///     span: PeriodSpan {
///         from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///         to: None,
///     },
///     weekday: Weekday::Mon,
///     hours_per_week: Decimal::from(40),
/// }];
///
/// let start = derive_start_date(&table).unwrap();
/// assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// ```
pub fn derive_start_date(work_periods: &[WorkPeriod]) -> PaysheetResult<NaiveDate> {
    work_periods
        .iter()
        .map(aligned_start)
        .min()
        .ok_or(PaysheetError::EmptySchedule)
}

/// The first date on or after the period's `from` that falls on its weekday
/// anchor.
fn aligned_start(period: &WorkPeriod) -> NaiveDate {
    let mut date = period.span.from;
    while date.weekday() != period.weekday {
        date = date.succ_opt().expect("date within supported range");
    }
    date
}
