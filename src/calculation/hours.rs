//! Weekly-hours annotation.
//!
//! Each date that survives the holiday filter is paired with the billable
//! hours of the work period covering it.

use chrono::NaiveDate;

use crate::error::{PaysheetError, PaysheetResult};
use crate::models::{DateWithHours, WorkPeriod};

use super::period_lookup::find_period;

/// Annotates a work date with its period's weekly hours.
///
/// Every date reaching this stage was produced by walking the work
/// schedule, so an uncovered date means the configuration changed out from
/// under the pipeline or a table has a hole. That is a
/// [`PaysheetError::ScheduleGap`], never a default of zero hours.
///
/// # Arguments
///
/// * `work_periods` - The work-schedule table
/// * `date` - The work date to annotate
///
/// # Returns
///
/// The date paired with the covering period's `hours_per_week`.
pub fn hours_for_date(
    work_periods: &[WorkPeriod],
    date: NaiveDate,
) -> PaysheetResult<DateWithHours> {
    let period =
        find_period(work_periods, date).ok_or(PaysheetError::ScheduleGap { date })?;
    Ok(DateWithHours {
        date,
        hours_worked: period.hours_per_week,
    })
}
