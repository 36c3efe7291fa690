//! Aggregation of decoded events into per-recipient totals.
//!
//! This module transforms decoded event records into:
//! - Per-recipient running totals (the report rows)
//! - Snapshot statistics (event and recipient counts, grand totals)

pub mod totals;
pub mod summary;

// Re-export main types and functions
pub use totals::{aggregate_events, RecipientTotals};
pub use summary::{summarize, SnapshotSummary};
