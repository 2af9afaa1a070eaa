//! Report assembly: wires the calculation stages into a single run.

use std::time::Instant;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::calculation::{
    aggregate_by_month, derive_start_date, hours_for_date, is_working_day, price_month, walk_weeks,
};
use crate::config::ReportConfig;
use crate::error::PaysheetResult;
use crate::models::{DateWithHours, SalaryGroup};

/// Builds the monthly report for every week worked up to `today`.
///
/// The stages run in a fixed order: derive the start date from the work
/// schedule, walk week by week up to `today`, drop dates that fall inside a
/// holiday period, annotate the survivors with their week's hours, fold them
/// into calendar months, and price each month with the rate in effect on its
/// first day.
///
/// # Errors
///
/// Returns [`EmptySchedule`] when the work schedule has no entries,
/// [`ScheduleGap`] when the walk steps onto a date no work period covers,
/// and [`SalaryGap`] when a month's first day has no salary period.
///
/// [`EmptySchedule`]: crate::error::PaysheetError::EmptySchedule
/// [`ScheduleGap`]: crate::error::PaysheetError::ScheduleGap
/// [`SalaryGap`]: crate::error::PaysheetError::SalaryGap
pub fn build_report(config: &ReportConfig, today: NaiveDate) -> PaysheetResult<Vec<SalaryGroup>> {
    let start_time = Instant::now();

    let start_date = derive_start_date(config.work_periods())?;
    debug!(%start_date, "Derived schedule start date");

    let walked = walk_weeks(config.work_periods(), start_date, today)?;
    let walked_count = walked.len();

    let working_dates: Vec<NaiveDate> = walked
        .into_iter()
        .filter(|&date| is_working_day(config.holiday_periods(), date))
        .collect();
    let excluded_count = walked_count - working_dates.len();

    let samples = working_dates
        .into_iter()
        .map(|date| hours_for_date(config.work_periods(), date))
        .collect::<PaysheetResult<Vec<DateWithHours>>>()?;

    let aggregates = aggregate_by_month(&samples);

    let groups = aggregates
        .iter()
        .map(|aggregate| price_month(config.salary_periods(), aggregate))
        .collect::<PaysheetResult<Vec<SalaryGroup>>>()?;

    let duration = start_time.elapsed();
    info!(
        %start_date,
        %today,
        walked_dates = walked_count,
        excluded_holidays = excluded_count,
        months = groups.len(),
        duration_us = duration.as_micros(),
        "Report assembled"
    );

    Ok(groups)
}
