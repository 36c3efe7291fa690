//! Shares Export CLI
//!
//! Exports per-recipient BuyFixedShares purchase totals from an
//! Ethereum contract into a CSV report.

use clap::{Parser, Subcommand};
use env_logger::Env;
use log::error;
use std::path::PathBuf;
use std::process;

use shares_export::commands::{execute_export, validate_args, ExportArgs};
use shares_export::utils::config::{
    DEFAULT_CONTRACT, DEFAULT_END_BLOCK, DEFAULT_OUTPUT_FILE, DEFAULT_START_BLOCK,
    EXIT_MISSING_ENDPOINT, EXIT_RUN_FAILED, RPC_ENV_VAR,
};

/// Shares Export - per-recipient purchase totals as CSV
#[derive(Parser, Debug)]
#[command(name = "shares-export")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch, aggregate, and export purchase events to CSV
    Export {
        /// RPC endpoint URL (falls back to the RPC environment variable)
        #[arg(short, long, env = RPC_ENV_VAR)]
        rpc: Option<String>,

        /// Contract address emitting the events
        #[arg(short, long, default_value = DEFAULT_CONTRACT)]
        contract: String,

        /// Inclusive start block
        #[arg(long, default_value_t = DEFAULT_START_BLOCK)]
        from_block: u64,

        /// Inclusive end block
        #[arg(long, default_value_t = DEFAULT_END_BLOCK)]
        to_block: u64,

        /// Output path for the CSV report
        #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
        output: PathBuf,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Display version information
    Version,
}

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Export {
            rpc,
            contract,
            from_block,
            to_block,
            output,
            summary,
        } => {
            // The endpoint is the one piece of configuration with no
            // default; refuse to start before any network or file work.
            let Some(rpc_url) = rpc else {
                eprintln!(
                    "error: no RPC endpoint configured (pass --rpc or set {RPC_ENV_VAR})"
                );
                process::exit(EXIT_MISSING_ENDPOINT);
            };

            let args = ExportArgs {
                rpc_url,
                contract,
                from_block,
                to_block,
                output,
                print_summary: summary,
            };

            if let Err(err) = validate_args(&args).and_then(|()| execute_export(args)) {
                error!("Export failed: {err:#}");
                process::exit(EXIT_RUN_FAILED);
            }
        }

        Commands::Version => display_version(),
    }
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("Shares Export v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Exports per-recipient BuyFixedShares totals to CSV.");
}
