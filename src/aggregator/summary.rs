//! Snapshot-level statistics for logging and the --summary printout.

use super::totals::RecipientTotals;
use crate::utils::config::SHARE_DECIMALS;
use crate::utils::error::AggregateError;
use crate::utils::units::format_units;
use alloy_primitives::{Address, U256};
use std::collections::BTreeMap;

/// Totals across the whole snapshot
#[derive(Debug, Clone, Default)]
pub struct SnapshotSummary {
    /// Number of events folded into the aggregate
    pub event_count: usize,

    /// Number of distinct recipients
    pub recipient_count: usize,

    /// Grand total of sharesOut across recipients
    pub total_shares_out: U256,

    /// Grand total of assetsIn across recipients
    pub total_assets_in: U256,
}

/// Compute snapshot statistics from aggregated totals
///
/// # Arguments
/// * `event_count` - Number of events that went into the aggregate
/// * `totals` - Per-recipient totals
pub fn summarize(
    event_count: usize,
    totals: &BTreeMap<Address, RecipientTotals>,
) -> Result<SnapshotSummary, AggregateError> {
    let mut summary = SnapshotSummary {
        event_count,
        recipient_count: totals.len(),
        ..Default::default()
    };

    for entry in totals.values() {
        summary.total_shares_out = summary
            .total_shares_out
            .checked_add(entry.shares_out)
            .ok_or(AggregateError::SummaryOverflow)?;
        summary.total_assets_in = summary
            .total_assets_in
            .checked_add(entry.assets_in)
            .ok_or(AggregateError::SummaryOverflow)?;
    }

    Ok(summary)
}

impl SnapshotSummary {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and the --summary printout
    pub fn summary(&self) -> String {
        format!(
            "Events: {} | Recipients: {} | Shares out: {} | Assets in: {}",
            self.event_count,
            self.recipient_count,
            format_units(self.total_shares_out, SHARE_DECIMALS),
            format_units(self.total_assets_in, SHARE_DECIMALS)
        )
    }
}
