//! CSV report writer.
//!
//! Renders per-recipient totals to a comma-separated file with
//! human-scaled decimal amounts.

use crate::aggregator::RecipientTotals;
use crate::utils::config::SHARE_DECIMALS;
use crate::utils::error::OutputError;
use crate::utils::units::format_units;
use alloy_primitives::Address;
use log::{debug, info};
use std::collections::BTreeMap;
use std::path::Path;

/// Column titles for the report header
pub const REPORT_HEADER: [&str; 3] = ["Recipient", "Total Shares Out", "Total Assets In"];

/// One rendered report row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Checksummed recipient address
    pub recipient: String,

    /// Total shares, decimal-scaled
    pub shares_out: String,

    /// Total assets, decimal-scaled
    pub assets_in: String,
}

/// Project aggregated totals into rendered report rows
///
/// Rows come out in map (address) order, so repeated runs over the same
/// range produce byte-identical files.
pub fn report_rows(totals: &BTreeMap<Address, RecipientTotals>) -> Vec<ReportRow> {
    totals
        .iter()
        .map(|(recipient, entry)| ReportRow {
            recipient: recipient.to_checksum(None),
            shares_out: format_units(entry.shares_out, SHARE_DECIMALS),
            assets_in: format_units(entry.assets_in, SHARE_DECIMALS),
        })
        .collect()
}

/// Write report rows to a CSV file
///
/// **Public** - main entry point for CSV output
///
/// # Arguments
/// * `rows` - Rendered rows (may be empty; the header is always written)
/// * `output_path` - Path to output CSV file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - CSV serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(rows: &[ReportRow], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    // Validate path
    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let mut writer = csv::Writer::from_path(output_path)?;

    writer.write_record(REPORT_HEADER)?;
    for row in rows {
        writer.write_record([&row.recipient, &row.shares_out, &row.assets_in])?;
    }

    writer.flush()?;

    info!("Report written successfully ({} data rows)", rows.len());

    Ok(())
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Refuse to overwrite a directory
    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
