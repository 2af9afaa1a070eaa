//! Weekly date walking with period-boundary re-anchoring.
//!
//! This module produces the sequence of work dates the report is built
//! from: one date per week while a single work period is in effect, jumping
//! to a new period's own start date whenever a week step crosses a period
//! boundary.

use chrono::{Duration, NaiveDate};

use crate::error::{PaysheetError, PaysheetResult};
use crate::models::WorkPeriod;

use super::period_lookup::find_period;

/// Walks work dates one week at a time from `start_date` up to `today`.
///
/// Every emitted date is followed by a step: look up the period covering
/// the current date and the one covering the date seven days later. The
/// same period means a plain seven-day advance; a different period means
/// the walk re-anchors to that period's `from` date, so the jump may be
/// shorter or longer than a week. Identity is per table entry: two entries
/// with identical spans are still different periods.
///
/// # Arguments
///
/// * `work_periods` - The work-schedule table
/// * `start_date` - The first date to emit
/// * `today` - The last date allowed into the report
///
/// # Returns
///
/// The emitted dates in walk order, or [`PaysheetError::ScheduleGap`] when
/// no period covers the week-step target. The step happens after every
/// emission, including the final in-range one, so a table that stops
/// covering right after `today` is still reported as a gap.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use paysheet::calculation::walk_weeks;
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
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 1, 22).unwrap();
/// let dates = walk_weeks(&table, start, today).unwrap();
/// assert_eq!(dates.len(), 4);
/// ```
pub fn walk_weeks(
    work_periods: &[WorkPeriod],
    start_date: NaiveDate,
    today: NaiveDate,
) -> PaysheetResult<Vec<NaiveDate>> {
    let mut dates = Vec::new();
    let mut current = start_date;

    while current <= today {
        dates.push(current);

        let next_week = current + Duration::days(7);
        let here = find_period(work_periods, current);
        let there = find_period(work_periods, next_week);

        match (here, there) {
            (Some(a), Some(b)) if std::ptr::eq(a, b) => current = next_week,
            (_, Some(b)) => current = b.span.from,
            (_, None) => return Err(PaysheetError::ScheduleGap { date: next_week }),
        }
    }

    Ok(dates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PeriodSpan;
    use chrono::Weekday;
    use rust_decimal::Decimal;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn work(from: NaiveDate, to: Option<NaiveDate>, weekday: Weekday, hours: i64) -> WorkPeriod {
        WorkPeriod {
            span: PeriodSpan { from, to },
            weekday,
            hours_per_week: Decimal::from(hours),
        }
    }

    // ==========================================================================
    // WW-001: one open-ended period walks a plain weekly cadence
    // ==========================================================================
    #[test]
    fn test_ww_001_plain_weekly_cadence() {
        let table = vec![work(make_date(2024, 1, 1), None, Weekday::Mon, 40)];
        let dates = walk_weeks(&table, make_date(2024, 1, 1), make_date(2024, 1, 22)).unwrap();
        assert_eq!(
            dates,
            vec![
                make_date(2024, 1, 1),
                make_date(2024, 1, 8),
                make_date(2024, 1, 15),
                make_date(2024, 1, 22),
            ]
        );
    }

    // ==========================================================================
    // WW-002: a start date past today emits nothing
    // ==========================================================================
    #[test]
    fn test_ww_002_start_after_today_is_empty() {
        let table = vec![work(make_date(2024, 1, 1), None, Weekday::Mon, 40)];
        let dates = walk_weeks(&table, make_date(2024, 2, 5), make_date(2024, 1, 22)).unwrap();
        assert!(dates.is_empty());
    }

    // ==========================================================================
    // WW-003: a start date equal to today emits exactly one date
    // ==========================================================================
    #[test]
    fn test_ww_003_start_equal_today_emits_once() {
        let table = vec![work(make_date(2024, 1, 1), None, Weekday::Mon, 40)];
        let dates = walk_weeks(&table, make_date(2024, 1, 22), make_date(2024, 1, 22)).unwrap();
        assert_eq!(dates, vec![make_date(2024, 1, 22)]);
    }

    // ==========================================================================
    // WW-004: crossing into a new period re-anchors to its from date
    // ==========================================================================
    #[test]
    fn test_ww_004_reanchors_to_new_period_start() {
        // 2024-01-10 is a Wednesday, two days past the old Monday cadence.
        let table = vec![
            work(
                make_date(2024, 1, 1),
                Some(make_date(2024, 1, 9)),
                Weekday::Mon,
                40,
            ),
            work(make_date(2024, 1, 10), None, Weekday::Wed, 20),
        ];
        let dates = walk_weeks(&table, make_date(2024, 1, 1), make_date(2024, 1, 22)).unwrap();
        assert_eq!(
            dates,
            vec![
                make_date(2024, 1, 1),
                make_date(2024, 1, 8),
                make_date(2024, 1, 10),
                make_date(2024, 1, 17),
            ]
        );
    }

    // ==========================================================================
    // WW-005: a table that ends right after today is a schedule gap
    // ==========================================================================
    #[test]
    fn test_ww_005_closed_table_ends_in_gap() {
        let table = vec![work(
            make_date(2024, 1, 1),
            Some(make_date(2024, 1, 22)),
            Weekday::Mon,
            40,
        )];
        let result = walk_weeks(&table, make_date(2024, 1, 1), make_date(2024, 1, 22));
        match result {
            Err(PaysheetError::ScheduleGap { date }) => {
                assert_eq!(date, make_date(2024, 1, 29));
            }
            other => panic!("Expected ScheduleGap, got {:?}", other),
        }
    }

    // ==========================================================================
    // WW-006: a hole between periods is a schedule gap at the step target
    // ==========================================================================
    #[test]
    fn test_ww_006_hole_between_periods_is_gap() {
        let table = vec![
            work(
                make_date(2024, 1, 1),
                Some(make_date(2024, 1, 5)),
                Weekday::Mon,
                40,
            ),
            work(make_date(2024, 1, 12), None, Weekday::Fri, 20),
        ];
        let result = walk_weeks(&table, make_date(2024, 1, 1), make_date(2024, 1, 22));
        match result {
            Err(PaysheetError::ScheduleGap { date }) => {
                assert_eq!(date, make_date(2024, 1, 8));
            }
            other => panic!("Expected ScheduleGap, got {:?}", other),
        }
    }

    // ==========================================================================
    // WW-007: back-to-back periods with aligned cadence need no re-anchor jump
    // ==========================================================================
    #[test]
    fn test_ww_007_adjacent_period_reanchors_on_boundary() {
        // The second period starts the day after the first ends. The Monday
        // step from 2024-01-08 lands on 2024-01-15 inside the second period,
        // so the walk re-anchors to its from date 2024-01-14 (a Sunday).
        let table = vec![
            work(
                make_date(2024, 1, 1),
                Some(make_date(2024, 1, 13)),
                Weekday::Mon,
                40,
            ),
            work(make_date(2024, 1, 14), None, Weekday::Sun, 20),
        ];
        let dates = walk_weeks(&table, make_date(2024, 1, 1), make_date(2024, 1, 28)).unwrap();
        assert_eq!(
            dates,
            vec![
                make_date(2024, 1, 1),
                make_date(2024, 1, 8),
                make_date(2024, 1, 14),
                make_date(2024, 1, 21),
                make_date(2024, 1, 28),
            ]
        );
    }

    // ==========================================================================
    // WW-008: emitted dates never decrease and never pass today
    // ==========================================================================
    #[test]
    fn test_ww_008_output_ordered_and_bounded() {
        let table = vec![
            work(
                make_date(2024, 1, 1),
                Some(make_date(2024, 2, 9)),
                Weekday::Mon,
                40,
            ),
            work(make_date(2024, 2, 10), None, Weekday::Sat, 16),
        ];
        let start = make_date(2024, 1, 1);
        let today = make_date(2024, 3, 31);
        let dates = walk_weeks(&table, start, today).unwrap();

        assert_eq!(dates[0], start);
        for pair in dates.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert!(dates.iter().all(|d| *d <= today));
    }

    // ==========================================================================
    // WW-009: identical twin entries resolve to the first, keeping the cadence
    // ==========================================================================
    #[test]
    fn test_ww_009_duplicate_entries_keep_cadence() {
        let twin_span = PeriodSpan {
            from: make_date(2024, 1, 1),
            to: None,
        };
        let table = vec![
            WorkPeriod {
                span: twin_span,
                weekday: Weekday::Mon,
                hours_per_week: Decimal::from(40),
            },
            WorkPeriod {
                span: twin_span,
                weekday: Weekday::Mon,
                hours_per_week: Decimal::from(40),
            },
        ];
        // Both lookups always land on the first entry, so the walk never
        // mistakes the twin for a boundary crossing.
        let dates = walk_weeks(&table, make_date(2024, 1, 1), make_date(2024, 1, 15)).unwrap();
        assert_eq!(
            dates,
            vec![
                make_date(2024, 1, 1),
                make_date(2024, 1, 8),
                make_date(2024, 1, 15),
            ]
        );
    }
}
