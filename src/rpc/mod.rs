//! JSON-RPC communication with an Ethereum node.
//!
//! This module handles:
//! - Building eth_getLogs requests for one event over a block range
//! - The blocking HTTP transport
//! - Mapping provider errors to typed failures

pub mod client;
pub mod types;

// Re-export main types
pub use client::RpcClient;
pub use types::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, LogFilter, RawLog};
