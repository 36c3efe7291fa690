//! Types for JSON-RPC communication with an Ethereum node.
//!
//! Based on the Ethereum JSON-RPC spec; only the slice needed for
//! eth_getLogs is modeled here.

use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 request structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
    pub id: u64,
}

impl JsonRpcRequest {
    /// Create a new JSON-RPC request for eth_getLogs
    ///
    /// # Arguments
    /// * `filter` - Log filter (contract, event topic, block range)
    /// * `id` - Request ID (for response correlation)
    pub fn eth_get_logs(filter: &LogFilter, id: u64) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: "eth_getLogs".to_string(),
            params: serde_json::json!([filter.to_params()]),
            id,
        }
    }
}

/// Server-side filter for one contract event over a block range
#[derive(Debug, Clone)]
pub struct LogFilter {
    /// Contract that emitted the logs
    pub address: Address,

    /// Event signature hash (topic0)
    pub topic0: B256,

    /// Inclusive start of the block range
    pub from_block: u64,

    /// Inclusive end of the block range
    pub to_block: u64,
}

impl LogFilter {
    /// Build the eth_getLogs filter object
    ///
    /// Block numbers are hex quantities per the JSON-RPC spec.
    pub fn to_params(&self) -> serde_json::Value {
        serde_json::json!({
            "address": format!("{:#x}", self.address),
            "topics": [format!("{:#x}", self.topic0)],
            "fromBlock": format!("{:#x}", self.from_block),
            "toBlock": format!("{:#x}", self.to_block),
        })
    }
}

/// JSON-RPC 2.0 response structure
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse<T> {
    pub jsonrpc: String,
    pub id: u64,
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error object
#[derive(Debug, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// One raw log entry from an eth_getLogs response
///
/// Every field stays a hex string here; `parser` turns the interesting
/// ones into typed values.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLog {
    /// Emitting contract address
    pub address: String,

    /// Indexed topics; topics[0] is the event signature hash
    pub topics: Vec<String>,

    /// ABI-encoded non-indexed fields
    pub data: String,

    #[serde(default)]
    pub block_number: Option<String>,

    #[serde(default)]
    pub transaction_hash: Option<String>,

    #[serde(default)]
    pub log_index: Option<String>,
}
