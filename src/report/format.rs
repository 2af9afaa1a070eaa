//! Plain-text rendering of the monthly report.

use std::io::{self, Write};

use crate::models::SalaryGroup;

/// Renders one report line: `YYYY.MM`, hours and charge, tab separated.
///
/// The month is zero padded to two digits and both decimals are normalized,
/// so a charge of `4000.00` prints as `4000`.
///
/// # Example
///
/// ```
/// use paysheet::models::SalaryGroup;
/// use paysheet::report::format_group;
/// use rust_decimal::Decimal;
///
/// let group = SalaryGroup {
///     year: 2024,
///     month: 1,
///     hours_worked: Decimal::from(160),
///     monthly_charge: Decimal::from(4000),
/// };
/// assert_eq!(format_group(&group), "2024.01\t160\t4000");
/// ```
pub fn format_group(group: &SalaryGroup) -> String {
    format!(
        "{}.{:02}\t{}\t{}",
        group.year,
        group.month,
        group.hours_worked.normalize(),
        group.monthly_charge.normalize()
    )
}

/// Writes the whole report to `writer`, one line per month.
pub fn write_report<W: Write>(writer: &mut W, groups: &[SalaryGroup]) -> io::Result<()> {
    for group in groups {
        writeln!(writer, "{}", format_group(group))?;
    }
    Ok(())
}
