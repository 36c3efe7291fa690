//! Fixed-point decimal rendering for 256-bit amounts.
//!
//! On-chain amounts are integers with an implied decimal scale. Rendering
//! stays in integer arithmetic throughout: 18-decimal values routinely
//! exceed the range where binary floating point is exact.

use alloy_primitives::U256;

/// Render `value` as a decimal string scaled by `10^-decimals`
///
/// **Public** - used for CSV fields and summary output
///
/// Trailing zeros in the fractional part are trimmed, but at least one
/// fractional digit is always kept: `10^18` renders as "1.0", zero as "0.0".
///
/// # Arguments
/// * `value` - Raw integer amount
/// * `decimals` - Implied decimal places (18 for share amounts)
pub fn format_units(value: U256, decimals: u32) -> String {
    if decimals == 0 {
        return value.to_string();
    }

    let scale = U256::from(10u64).pow(U256::from(decimals));
    let (whole, frac) = value.div_rem(scale);

    // Left-pad the fractional digits to the full width before trimming,
    // otherwise 1 and 10^17 would render the same.
    let frac = format!("{:0>width$}", frac.to_string(), width = decimals as usize);
    let trimmed = frac.trim_end_matches('0');

    if trimmed.is_empty() {
        format!("{whole}.0")
    } else {
        format!("{whole}.{trimmed}")
    }
}
