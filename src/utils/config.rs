//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default timeout for RPC requests
pub const DEFAULT_RPC_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable consulted when --rpc is not passed
pub const RPC_ENV_VAR: &str = "RPC";

/// Contract that emitted the fixed-shares sale events
pub const DEFAULT_CONTRACT: &str = "0xD5430D6cfF45E1319CAC204F2a4e51E2cA3213B1";

/// Inclusive block range covering the sale
pub const DEFAULT_START_BLOCK: u64 = 20_804_136;
pub const DEFAULT_END_BLOCK: u64 = 20_846_133;

/// Default path for the CSV report
pub const DEFAULT_OUTPUT_FILE: &str = "buyFixedShares.csv";

/// Event name and its canonical ABI signature
///
/// recipient is indexed; sharesOut and assetsIn ride in the data section.
pub const EVENT_NAME: &str = "BuyFixedShares";
pub const EVENT_SIGNATURE: &str = "BuyFixedShares(address,uint256,uint256)";

/// Fixed-point scale shared by sharesOut and assetsIn (ERC20-style)
pub const SHARE_DECIMALS: u32 = 18;

// Process exit codes. A missing endpoint is a deliberate pre-flight refusal
// and must stay distinguishable from a failure during the run itself.
pub const EXIT_MISSING_ENDPOINT: i32 = 1;
pub const EXIT_RUN_FAILED: i32 = 2;
