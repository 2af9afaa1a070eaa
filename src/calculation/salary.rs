//! Month pricing against the salary table.
//!
//! Each aggregated month is priced with the hourly rate in effect on its
//! first day. No other day of the month is consulted, so a rate change in
//! the middle of a month deliberately does not split the charge.

use crate::error::{PaysheetError, PaysheetResult};
use crate::models::{MonthAggregate, SalaryGroup, SalaryPeriod};

use super::period_lookup::find_period;

/// Prices a month aggregate with the salary period covering day 1.
///
/// # Arguments
///
/// * `salary_periods` - The salary table
/// * `aggregate` - The month to price
///
/// # Returns
///
/// A [`SalaryGroup`] whose `monthly_charge` is the aggregate's hours times
/// the probed hourly rate, or [`PaysheetError::SalaryGap`] when no salary
/// period covers the month's first day.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use paysheet::calculation::price_month;
/// use paysheet::models::{MonthAggregate, PeriodSpan, SalaryPeriod};
/// use rust_decimal::Decimal;
///
/// let table = vec![SalaryPeriod {
///     span: PeriodSpan {
///         from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///         to: None,
///     },
///     salary_per_hour: Decimal::from(25),
/// }];
///
/// let aggregate = MonthAggregate {
///     year: 2024,
///     month: 1,
///     hours_worked: Decimal::from(160),
///     concerned_dates: vec![],
/// };
///
/// let group = price_month(&table, &aggregate).unwrap();
/// assert_eq!(group.monthly_charge, Decimal::from(4000));
/// ```
pub fn price_month(
    salary_periods: &[SalaryPeriod],
    aggregate: &MonthAggregate,
) -> PaysheetResult<SalaryGroup> {
    let probe = aggregate.first_day();
    let period =
        find_period(salary_periods, probe).ok_or(PaysheetError::SalaryGap { date: probe })?;

    Ok(SalaryGroup {
        year: aggregate.year,
        month: aggregate.month,
        hours_worked: aggregate.hours_worked,
        monthly_charge: aggregate.hours_worked * period.salary_per_hour,
    })
}
