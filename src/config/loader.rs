//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the three
//! period tables from JSON files.

use std::fs;
use std::path::Path;

use crate::error::{PaysheetError, PaysheetResult};

use super::types::{HolidayEntry, ReportConfig, SalaryEntry, WorkEntry};

/// Loads and provides access to the period tables.
///
/// The `ConfigLoader` reads the three JSON table files from a directory,
/// validates every entry, and hands out the resulting [`ReportConfig`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/
/// ├── schedule.json   # work-schedule table
/// ├── holidays.json   # holiday table
/// └── salary.json     # salary-rate table
/// ```
///
/// # Example
///
/// ```no_run
/// use paysheet::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// let schedule = loader.config().work_periods();
/// println!("{} schedule entries", schedule.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ReportConfig,
}

impl ConfigLoader {
    /// Loads the period tables from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any of the three table files is missing
    /// - Any file contains invalid JSON for the expected shape
    /// - Any entry violates the data model (impossible date, weekday
    ///   outside 0-6, inverted span)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use paysheet::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config")?;
    /// # Ok::<(), paysheet::error::PaysheetError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> PaysheetResult<Self> {
        let path = path.as_ref();

        let schedule_path = path.join("schedule.json");
        let work_entries: Vec<WorkEntry> = Self::load_json(&schedule_path)?;
        let work_periods =
            Self::convert_table(work_entries, &schedule_path, WorkEntry::into_period)?;

        let holidays_path = path.join("holidays.json");
        let holiday_entries: Vec<HolidayEntry> = Self::load_json(&holidays_path)?;
        let holiday_periods =
            Self::convert_table(holiday_entries, &holidays_path, HolidayEntry::into_period)?;

        let salary_path = path.join("salary.json");
        let salary_entries: Vec<SalaryEntry> = Self::load_json(&salary_path)?;
        let salary_periods =
            Self::convert_table(salary_entries, &salary_path, SalaryEntry::into_period)?;

        Ok(Self {
            config: ReportConfig::new(work_periods, holiday_periods, salary_periods),
        })
    }

    /// Loads and parses a JSON file.
    fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> PaysheetResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PaysheetError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_json::from_str(&content).map_err(|e| PaysheetError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Converts a table of wire entries, attaching file and position context
    /// to any validation failure.
    fn convert_table<E, P>(
        entries: Vec<E>,
        path: &Path,
        convert: impl Fn(E) -> Result<P, String>,
    ) -> PaysheetResult<Vec<P>> {
        entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                convert(entry).map_err(|message| PaysheetError::InvalidEntry {
                    path: path.display().to_string(),
                    index,
                    message,
                })
            })
            .collect()
    }

    /// Returns the loaded period tables.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }
}
