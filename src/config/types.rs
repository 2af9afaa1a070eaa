//! Configuration types for the period tables.
//!
//! This module contains the wire-format structures deserialized from the
//! three JSON table files, and their validated conversion into the domain
//! models. Dates arrive as `{year, month, day}` sub-objects and field names
//! are camelCase, matching the table file contract.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{HolidayPeriod, PeriodSpan, SalaryPeriod, WorkPeriod};

/// A calendar date as it appears in the table files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DateSpec {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Day of month.
    pub day: u32,
}

impl DateSpec {
    /// Resolves the wire triple into a real calendar date.
    ///
    /// Returns an error message when the combination does not name a date
    /// (month outside 1-12, day past the end of the month).
    pub fn to_date(self) -> Result<NaiveDate, String> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or_else(|| {
            format!(
                "impossible calendar date {}-{}-{}",
                self.year, self.month, self.day
            )
        })
    }
}

/// One entry of `schedule.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    /// The first date the entry applies to.
    pub from: DateSpec,
    /// The last date the entry applies to; absent means open-ended.
    pub to: Option<DateSpec>,
    /// Weekday anchor for the weekly cadence, 0 = Sunday through
    /// 6 = Saturday.
    pub week_day: u8,
    /// Billable hours per work week.
    pub hours_per_week: Decimal,
}

impl WorkEntry {
    /// Validates the entry and converts it into a [`WorkPeriod`].
    pub fn into_period(self) -> Result<WorkPeriod, String> {
        let span = resolve_span(self.from, self.to)?;
        let weekday = weekday_from_index(self.week_day)
            .ok_or_else(|| format!("weekDay must be 0-6, got {}", self.week_day))?;
        Ok(WorkPeriod {
            span,
            weekday,
            hours_per_week: self.hours_per_week,
        })
    }
}

/// One entry of `holidays.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayEntry {
    /// The first excluded date.
    pub from: DateSpec,
    /// The last excluded date; absent means open-ended.
    pub to: Option<DateSpec>,
}

impl HolidayEntry {
    /// Validates the entry and converts it into a [`HolidayPeriod`].
    pub fn into_period(self) -> Result<HolidayPeriod, String> {
        let span = resolve_span(self.from, self.to)?;
        Ok(HolidayPeriod { span })
    }
}

/// One entry of `salary.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryEntry {
    /// The first date the rate applies to.
    pub from: DateSpec,
    /// The last date the rate applies to; absent means open-ended.
    pub to: Option<DateSpec>,
    /// The hourly rate in effect during the span.
    pub salary_per_hour: Decimal,
}

impl SalaryEntry {
    /// Validates the entry and converts it into a [`SalaryPeriod`].
    pub fn into_period(self) -> Result<SalaryPeriod, String> {
        let span = resolve_span(self.from, self.to)?;
        Ok(SalaryPeriod {
            span,
            salary_per_hour: self.salary_per_hour,
        })
    }
}

/// Resolves a from/to pair into a span, rejecting inverted ranges.
fn resolve_span(from: DateSpec, to: Option<DateSpec>) -> Result<PeriodSpan, String> {
    let from = from.to_date()?;
    let to = to.map(DateSpec::to_date).transpose()?;
    if let Some(to) = to
        && from > to
    {
        return Err(format!("'from' {} is after 'to' {}", from, to));
    }
    Ok(PeriodSpan { from, to })
}

/// Maps the table files' weekday encoding onto [`chrono::Weekday`].
fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// The three period tables, fully validated.
///
/// Tables keep their file order; when spans overlap, the earlier entry wins
/// every lookup. Nothing is sorted here.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Work-schedule table in file order.
    work_periods: Vec<WorkPeriod>,
    /// Holiday table in file order.
    holiday_periods: Vec<HolidayPeriod>,
    /// Salary table in file order.
    salary_periods: Vec<SalaryPeriod>,
}

impl ReportConfig {
    /// Creates a new ReportConfig from its component tables.
    pub fn new(
        work_periods: Vec<WorkPeriod>,
        holiday_periods: Vec<HolidayPeriod>,
        salary_periods: Vec<SalaryPeriod>,
    ) -> Self {
        Self {
            work_periods,
            holiday_periods,
            salary_periods,
        }
    }

    /// Returns the work-schedule table.
    pub fn work_periods(&self) -> &[WorkPeriod] {
        &self.work_periods
    }

    /// Returns the holiday table.
    pub fn holiday_periods(&self) -> &[HolidayPeriod] {
        &self.holiday_periods
    }

    /// Returns the salary table.
    pub fn salary_periods(&self) -> &[SalaryPeriod] {
        &self.salary_periods
    }
}
