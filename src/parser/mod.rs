//! Decoding of raw logs into typed event records.
//!
//! This module handles:
//! - Computing the event signature topic
//! - Extracting the indexed recipient from topic words
//! - Extracting the two amounts from the ABI data section

pub mod event;

// Re-export main types
pub use event::{decode_log, decode_logs, event_topic, ShareEvent};
