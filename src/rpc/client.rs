//! HTTP client for querying historical logs from an Ethereum RPC endpoint.

use super::types::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, LogFilter, RawLog};
use crate::utils::config::DEFAULT_RPC_TIMEOUT;
use crate::utils::error::RpcError;
use log::{debug, info};
use reqwest::blocking::Client;

/// RPC client for fetching contract logs
pub struct RpcClient {
    client: Client,
    rpc_url: String,
}

impl RpcClient {
    /// Create a new RPC client
    pub fn new(rpc_url: impl Into<String>) -> Result<Self, RpcError> {
        let client = Client::builder()
            .timeout(DEFAULT_RPC_TIMEOUT)
            .build()
            .map_err(RpcError::RequestFailed)?;

        Ok(Self {
            client,
            rpc_url: rpc_url.into(),
        })
    }

    /// Fetch all logs matching `filter` in a single eth_getLogs call
    ///
    /// The whole block range goes out in one request; ranges large enough
    /// to hit a provider's result cap surface as `QueryTooLarge`.
    pub fn eth_get_logs(&self, filter: &LogFilter) -> Result<Vec<RawLog>, RpcError> {
        info!(
            "Querying logs for {:#x} over blocks {}..={}",
            filter.address, filter.from_block, filter.to_block
        );

        let request = JsonRpcRequest::eth_get_logs(filter, 1);

        debug!("RPC request: {:?}", request);

        // Make HTTP POST request
        let response = self
            .client
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .map_err(RpcError::RequestFailed)?;

        // Check HTTP status
        if !response.status().is_success() {
            return Err(RpcError::InvalidResponse(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().unwrap_or_default()
            )));
        }

        // Parse JSON-RPC response
        let rpc_response: JsonRpcResponse<Vec<RawLog>> = response
            .json()
            .map_err(RpcError::RequestFailed)?;

        // Handle JSON-RPC error
        if let Some(error) = rpc_response.error {
            return Err(map_rpc_error(error));
        }

        // Extract result
        rpc_response
            .result
            .ok_or_else(|| RpcError::InvalidResponse("Missing result field".to_string()))
    }
}

/// Map JSON-RPC error to our error type
fn map_rpc_error(error: JsonRpcError) -> RpcError {
    let message = error.message.to_lowercase();

    match error.code {
        -32601 => RpcError::MethodNotSupported,
        // -32005 is the conventional "limit exceeded" code; some providers
        // report result caps with a generic code and an explanatory message
        -32005 => RpcError::QueryTooLarge(error.message),
        _ if message.contains("response size") || message.contains("more than") => {
            RpcError::QueryTooLarge(error.message)
        }
        _ => RpcError::InvalidResponse(format!("{}: {}", error.code, error.message)),
    }
}
