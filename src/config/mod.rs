//! Configuration loading for the paysheet reporting pipeline.
//!
//! This module provides functionality to load the three period tables from
//! JSON files and validate them into domain models.
//!
//! # Example
//!
//! ```no_run
//! use paysheet::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config").unwrap();
//! println!(
//!     "{} schedule entries",
//!     loader.config().work_periods().len()
//! );
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DateSpec, HolidayEntry, ReportConfig, SalaryEntry, WorkEntry};
