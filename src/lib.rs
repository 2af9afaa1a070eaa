//! Monthly work-hours and pay reporting from declarative period tables
//!
//! This crate reads three JSON period tables (work schedule, holidays and
//! salary rates), replays the weekly work cadence from the earliest scheduled
//! day up to a reporting date, and produces one priced group per calendar
//! month.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
