//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use alloy_primitives::hex;
use thiserror::Error;

/// Errors that can occur during RPC communication
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid RPC response: {0}")]
    InvalidResponse(String),

    #[error("eth_getLogs not supported by this RPC endpoint")]
    MethodNotSupported,

    #[error("Log query too large for this RPC endpoint: {0}")]
    QueryTooLarge(String),
}

/// Errors that can occur while decoding event logs
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Log has no topics")]
    MissingTopics,

    #[error("Log topic does not match the event signature: {0}")]
    UnexpectedTopic(String),

    #[error("Log is missing the indexed recipient topic")]
    MissingRecipient,

    #[error("Invalid hex in log field: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Event data must hold {expected} bytes, got {actual}")]
    DataLength { expected: usize, actual: usize },
}

/// Errors that can occur during aggregation
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Running total overflowed 256 bits for recipient {0}")]
    TotalOverflow(String),

    #[error("Grand total overflowed 256 bits")]
    SummaryOverflow,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize CSV: {0}")]
    SerializationFailed(#[from] csv::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
