//! Calendar-month aggregation.
//!
//! Collapses the annotated date sequence into one accumulator per month.

use crate::models::{DateWithHours, MonthAggregate};

/// Groups a chronologically sorted sequence of annotated dates by calendar
/// month.
///
/// A single forward pass with one in-flight accumulator: a sample in the
/// accumulator's month is absorbed, a sample in a new month freezes the
/// accumulator and seeds the next one. The final accumulator is always
/// emitted. Empty input yields empty output.
///
/// # Arguments
///
/// * `samples` - Annotated work dates, sorted ascending. Sortedness is the
///   caller's responsibility; the walker's output satisfies it. Unsorted
///   input splinters months instead of merging them.
///
/// # Returns
///
/// One [`MonthAggregate`] per month, in first-seen order.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use paysheet::calculation::aggregate_by_month;
/// use paysheet::models::DateWithHours;
/// use rust_decimal::Decimal;
///
/// let samples = vec![
///     DateWithHours {
///         date: NaiveDate::from_ymd_opt(2024, 1, 22).unwrap(),
///         hours_worked: Decimal::from(40),
///     },
///     DateWithHours {
///         date: NaiveDate::from_ymd_opt(2024, 1, 29).unwrap(),
///         hours_worked: Decimal::from(40),
///     },
///     DateWithHours {
///         date: NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
///         hours_worked: Decimal::from(40),
///     },
/// ];
///
/// let months = aggregate_by_month(&samples);
/// assert_eq!(months.len(), 2);
/// assert_eq!(months[0].hours_worked, Decimal::from(80));
/// assert_eq!(months[1].hours_worked, Decimal::from(40));
/// ```
pub fn aggregate_by_month(samples: &[DateWithHours]) -> Vec<MonthAggregate> {
    let mut groups = Vec::new();
    let mut samples = samples.iter();

    let Some(first) = samples.next() else {
        return groups;
    };
    let mut current = MonthAggregate::seed(first);

    for sample in samples {
        if current.covers(sample.date) {
            current.absorb(sample);
        } else {
            groups.push(current);
            current = MonthAggregate::seed(sample);
        }
    }
    groups.push(current);

    groups
}
