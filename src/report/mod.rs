//! Report assembly and rendering.
//!
//! The pipeline turns a validated configuration into priced monthly groups;
//! the formatter renders those groups as tab separated text lines.

mod format;
mod pipeline;

pub use format::{format_group, write_report};
pub use pipeline::build_report;
