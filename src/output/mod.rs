//! Output writers for aggregated report data.
//!
//! This module handles rendering aggregate totals to disk:
//! - CSV reports with human-scaled decimal amounts

pub mod csv;

// Re-export main functions
pub use self::csv::{report_rows, write_report, ReportRow, REPORT_HEADER};
