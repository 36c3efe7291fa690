//! Export command implementation.
//!
//! The export command:
//! 1. Fetches matching logs from RPC
//! 2. Decodes them into typed events
//! 3. Aggregates totals per recipient
//! 4. Writes the CSV report

use crate::aggregator::{aggregate_events, summarize};
use crate::output::{report_rows, write_report};
use crate::parser::{decode_logs, event_topic};
use crate::rpc::{LogFilter, RawLog, RpcClient};
use crate::utils::config::{
    DEFAULT_CONTRACT, DEFAULT_END_BLOCK, DEFAULT_OUTPUT_FILE, DEFAULT_START_BLOCK, EVENT_NAME,
    SHARE_DECIMALS,
};
use crate::utils::units::format_units;
use alloy_primitives::Address;
use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the export command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ExportArgs {
    /// RPC endpoint URL
    pub rpc_url: String,

    /// Contract address emitting the events
    pub contract: String,

    /// Inclusive start of the block range
    pub from_block: u64,

    /// Inclusive end of the block range
    pub to_block: u64,

    /// Output path for the CSV report
    pub output: PathBuf,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ExportArgs {
    fn default() -> Self {
        Self {
            rpc_url: String::new(),
            contract: DEFAULT_CONTRACT.to_string(),
            from_block: DEFAULT_START_BLOCK,
            to_block: DEFAULT_END_BLOCK,
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            print_summary: false,
        }
    }
}

/// Execute the export command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Export command arguments
///
/// # Returns
/// Ok if the report was written, Err with context if any step fails
///
/// # Errors
/// * RPC connection or query failures
/// * Log decoding errors
/// * File write errors
pub fn execute_export(args: ExportArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Starting export for contract: {}", args.contract);
    info!("RPC endpoint: {}", args.rpc_url);

    let contract: Address = args
        .contract
        .parse()
        .context("Invalid contract address")?;

    // Step 1: Fetch matching logs from RPC
    info!("Step 1/4: Fetching {} logs...", EVENT_NAME);
    let raw_logs = fetch_logs(&args.rpc_url, contract, args.from_block, args.to_block)
        .context("Failed to fetch logs from RPC")?;

    info!("Found {} events", raw_logs.len());

    // Step 2: Decode raw logs
    info!("Step 2/4: Decoding event data...");
    let events = decode_logs(&raw_logs).context("Failed to decode event logs")?;

    // Step 3: Aggregate per recipient
    info!("Step 3/4: Aggregating totals per recipient...");
    let totals = aggregate_events(&events).context("Failed to aggregate events")?;

    let snapshot = summarize(events.len(), &totals).context("Failed to summarize totals")?;
    debug!("Aggregate: {}", snapshot.summary());

    // Step 4: Write the CSV report
    info!("Step 4/4: Writing CSV report...");
    let rows = report_rows(&totals);
    write_report(&rows, &args.output).context("Failed to write CSV report")?;

    info!("✓ Report written to: {}", args.output.display());

    // Print text summary (if requested)
    if args.print_summary {
        println!("\n{}", "=".repeat(72));
        println!("EXPORT SUMMARY");
        println!("{}", "=".repeat(72));
        println!("Contract:   {}", args.contract);
        println!("Blocks:     {}..={}", args.from_block, args.to_block);
        println!("Events:     {}", snapshot.event_count);
        println!("Recipients: {}", snapshot.recipient_count);
        println!(
            "Shares out: {}",
            format_units(snapshot.total_shares_out, SHARE_DECIMALS)
        );
        println!(
            "Assets in:  {}",
            format_units(snapshot.total_assets_in, SHARE_DECIMALS)
        );
        println!("Generated:  {}", Utc::now().to_rfc3339());
        println!("{}", "=".repeat(72));
    }

    let elapsed = start_time.elapsed();
    info!("Export completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Fetch logs from the RPC endpoint
///
/// **Private** - internal helper for execute_export
fn fetch_logs(
    rpc_url: &str,
    contract: Address,
    from_block: u64,
    to_block: u64,
) -> Result<Vec<RawLog>> {
    let client = RpcClient::new(rpc_url).context("Failed to create RPC client")?;

    let filter = LogFilter {
        address: contract,
        topic0: event_topic(),
        from_block,
        to_block,
    };

    let logs = client.eth_get_logs(&filter).context(format!(
        "Failed to fetch logs for blocks {from_block}..={to_block}"
    ))?;

    Ok(logs)
}

/// Validate export arguments
///
/// **Public** - called before execute_export for early validation
///
/// # Arguments
/// * `args` - Arguments to validate
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &ExportArgs) -> Result<()> {
    // Validate RPC URL
    if args.rpc_url.is_empty() {
        anyhow::bail!("RPC URL cannot be empty");
    }

    if !args.rpc_url.starts_with("http://") && !args.rpc_url.starts_with("https://") {
        anyhow::bail!("RPC URL must start with http:// or https://");
    }

    // Validate contract address (with or without 0x prefix)
    let contract = args.contract.strip_prefix("0x").unwrap_or(&args.contract);

    if contract.len() != 40 {
        anyhow::bail!("Contract address must be 20 bytes (40 hex characters)");
    }

    if !contract.chars().all(|c| c.is_ascii_hexdigit()) {
        anyhow::bail!("Contract address contains invalid characters");
    }

    // Validate block range
    if args.from_block > args.to_block {
        anyhow::bail!(
            "Start block {} is past end block {}",
            args.from_block,
            args.to_block
        );
    }

    // Validate output path
    if args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    Ok(())
}
