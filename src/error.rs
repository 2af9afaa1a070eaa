//! Error types for the paysheet reporting pipeline.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading the period tables
//! and building the monthly report.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the paysheet reporting pipeline.
///
/// All fallible operations in the crate return this error type. Every
/// variant is fatal for the run: the tool reports the problem and exits
/// rather than guessing at missing configuration.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use paysheet::error::PaysheetError;
///
/// let error = PaysheetError::ScheduleGap {
///     date: NaiveDate::from_ymd_opt(2024, 1, 29).unwrap(),
/// };
/// assert_eq!(error.to_string(), "No work period covers 2024-01-29");
/// ```
#[derive(Debug, Error)]
pub enum PaysheetError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed as the expected JSON shape.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A table entry parsed but violates the data model.
    #[error("Invalid entry {index} in '{path}': {message}")]
    InvalidEntry {
        /// The path to the file containing the entry.
        path: String,
        /// The zero-based position of the entry in the table.
        index: usize,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// The work-schedule table has no entries, so no start date exists.
    #[error("Work schedule table is empty")]
    EmptySchedule,

    /// No work period covers a date the pipeline needs.
    ///
    /// Raised by the week walker when stepping lands outside every work
    /// period, and by the hours annotator for an uncovered date.
    #[error("No work period covers {date}")]
    ScheduleGap {
        /// The uncovered date.
        date: NaiveDate,
    },

    /// No salary period covers the first day of a month being priced.
    #[error("No salary period covers {date}")]
    SalaryGap {
        /// The first day of the month that could not be priced.
        date: NaiveDate,
    },
}

/// A type alias for Results that return PaysheetError.
pub type PaysheetResult<T> = Result<T, PaysheetError>;
