//! First-match period lookup.
//!
//! This module provides the single lookup primitive shared by every stage
//! that consults a period table: the work schedule, the holiday calendar
//! and the salary schedule.

use chrono::NaiveDate;

use crate::models::DatedPeriod;

/// Finds the period covering a date.
///
/// Scans the table front to back and returns the first entry whose span
/// contains the date, or `None` when no entry does. Callers decide how
/// severe an empty result is: the holiday filter treats it as "a working
/// day", the walker and the annotators treat it as a configuration gap.
///
/// # Arguments
///
/// * `periods` - The table to scan, in file order
/// * `date` - The date to locate
///
/// # Returns
///
/// A reference to the first covering entry, or `None`.
///
/// # Behavior
///
/// - Table order is the priority order: when spans overlap, the earlier
///   entry wins.
/// - The scan is linear. Tables are hand-authored and hold tens of entries,
///   so nothing cleverer is warranted.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use paysheet::calculation::find_period;
/// use paysheet::models::{PeriodSpan, WorkPeriod};
/// use rust_decimal::Decimal;
///
/// let table = vec![WorkPeriod {
///     span: PeriodSpan {
///         from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///         to: None,
///     },
///     weekday: Weekday::Mon,
///     hours_per_week: Decimal::from(40),
/// }];
///
/// let hit = find_period(&table, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
/// assert!(hit.is_some());
///
/// let miss = find_period(&table, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
/// assert!(miss.is_none());
/// ```
pub fn find_period<'a, P: DatedPeriod>(periods: &'a [P], date: NaiveDate) -> Option<&'a P> {
    periods.iter().find(|period| period.span().contains(date))
}
