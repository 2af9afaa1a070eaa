//! Holiday exclusion predicate.

use chrono::NaiveDate;

use crate::models::HolidayPeriod;

use super::period_lookup::find_period;

/// Checks whether a date is a working day, i.e. not covered by any holiday
/// period. An empty holiday table makes every date a working day.
pub fn is_working_day(holiday_periods: &[HolidayPeriod], date: NaiveDate) -> bool {
    find_period(holiday_periods, date).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PeriodSpan;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn holiday(from: NaiveDate, to: Option<NaiveDate>) -> HolidayPeriod {
        HolidayPeriod {
            span: PeriodSpan { from, to },
        }
    }

    // ==========================================================================
    // HD-001: a date inside a holiday span is not a working day
    // ==========================================================================
    #[test]
    fn test_hd_001_holiday_date_excluded() {
        let table = vec![holiday(make_date(2024, 1, 8), Some(make_date(2024, 1, 8)))];
        assert!(!is_working_day(&table, make_date(2024, 1, 8)));
    }

    // ==========================================================================
    // HD-002: dates outside every holiday span are working days
    // ==========================================================================
    #[test]
    fn test_hd_002_non_holiday_date_included() {
        let table = vec![holiday(make_date(2024, 1, 8), Some(make_date(2024, 1, 8)))];
        assert!(is_working_day(&table, make_date(2024, 1, 1)));
        assert!(is_working_day(&table, make_date(2024, 1, 15)));
    }

    // ==========================================================================
    // HD-003: holiday bounds are inclusive
    // ==========================================================================
    #[test]
    fn test_hd_003_holiday_bounds_inclusive() {
        let table = vec![holiday(
            make_date(2024, 7, 1),
            Some(make_date(2024, 7, 21)),
        )];
        assert!(!is_working_day(&table, make_date(2024, 7, 1)));
        assert!(!is_working_day(&table, make_date(2024, 7, 21)));
        assert!(is_working_day(&table, make_date(2024, 6, 30)));
        assert!(is_working_day(&table, make_date(2024, 7, 22)));
    }

    // ==========================================================================
    // HD-004: an empty holiday table never excludes anything
    // ==========================================================================
    #[test]
    fn test_hd_004_empty_table_excludes_nothing() {
        assert!(is_working_day(&[], make_date(2024, 1, 1)));
    }

    // ==========================================================================
    // HD-005: an open-ended holiday excludes everything from its start
    // ==========================================================================
    #[test]
    fn test_hd_005_open_ended_holiday() {
        let table = vec![holiday(make_date(2024, 6, 1), None)];
        assert!(is_working_day(&table, make_date(2024, 5, 31)));
        assert!(!is_working_day(&table, make_date(2024, 6, 1)));
        assert!(!is_working_day(&table, make_date(2030, 1, 1)));
    }
}
