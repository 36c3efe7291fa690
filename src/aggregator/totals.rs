//! Per-recipient accumulation of purchase events.
//!
//! The fold is the whole algorithm: a recipient gets an entry at zero on
//! first sighting, then every event adds its two amounts to that entry.
//! Duplicate events are summed, never deduplicated.

use crate::parser::ShareEvent;
use crate::utils::error::AggregateError;
use alloy_primitives::{Address, U256};
use log::debug;
use std::collections::BTreeMap;

/// Running totals for one recipient
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecipientTotals {
    /// Sum of sharesOut across the recipient's events
    pub shares_out: U256,

    /// Sum of assetsIn across the recipient's events
    pub assets_in: U256,
}

/// Aggregate events into per-recipient totals
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `events` - Decoded events, in any order (summation is commutative)
///
/// # Returns
/// Map from recipient to totals, keyed in address order so the report is
/// reproducible across runs
///
/// # Errors
/// * `AggregateError::TotalOverflow` - a running total exceeded 256 bits;
///   additions are checked rather than wrapping
pub fn aggregate_events(
    events: &[ShareEvent],
) -> Result<BTreeMap<Address, RecipientTotals>, AggregateError> {
    debug!("Aggregating {} events", events.len());

    let mut totals: BTreeMap<Address, RecipientTotals> = BTreeMap::new();

    for event in events {
        let entry = totals.entry(event.recipient).or_default();

        entry.shares_out = entry
            .shares_out
            .checked_add(event.shares_out)
            .ok_or_else(|| AggregateError::TotalOverflow(format!("{:#x}", event.recipient)))?;
        entry.assets_in = entry
            .assets_in
            .checked_add(event.assets_in)
            .ok_or_else(|| AggregateError::TotalOverflow(format!("{:#x}", event.recipient)))?;
    }

    debug!("Aggregated into {} recipients", totals.len());

    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn event(recipient: Address, shares_out: u64, assets_in: u64) -> ShareEvent {
        ShareEvent {
            recipient,
            shares_out: U256::from(shares_out),
            assets_in: U256::from(assets_in),
        }
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        let totals = aggregate_events(&[]).unwrap();
        assert!(totals.is_empty());
    }

    #[test]
    fn test_repeated_recipient_sums_both_fields() {
        let buyer = Address::repeat_byte(0x01);
        let events = vec![
            event(buyer, 10, 1),
            event(buyer, 20, 2),
            event(buyer, 5, 3),
        ];

        let totals = aggregate_events(&events).unwrap();

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[&buyer].shares_out, U256::from(35u64));
        assert_eq!(totals[&buyer].assets_in, U256::from(6u64));
    }

    #[test]
    fn test_key_set_matches_distinct_recipients() {
        let events = vec![
            event(Address::repeat_byte(0x01), 1, 1),
            event(Address::repeat_byte(0x02), 1, 1),
            event(Address::repeat_byte(0x01), 1, 1),
            event(Address::repeat_byte(0x03), 1, 1),
        ];

        let totals = aggregate_events(&events).unwrap();

        let expected: BTreeSet<Address> = events.iter().map(|e| e.recipient).collect();
        let actual: BTreeSet<Address> = totals.keys().copied().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_identical_events_are_summed_not_deduplicated() {
        let buyer = Address::repeat_byte(0x01);
        let events = vec![event(buyer, 7, 3), event(buyer, 7, 3)];

        let totals = aggregate_events(&events).unwrap();

        assert_eq!(totals[&buyer].shares_out, U256::from(14u64));
        assert_eq!(totals[&buyer].assets_in, U256::from(6u64));
    }

    #[test]
    fn test_large_value_is_preserved_exactly() {
        let buyer = Address::repeat_byte(0x01);
        let big: U256 = "123456789012345678901234567890".parse().unwrap();
        let events = vec![ShareEvent {
            recipient: buyer,
            shares_out: big,
            assets_in: U256::ZERO,
        }];

        let totals = aggregate_events(&events).unwrap();

        assert_eq!(totals[&buyer].shares_out, big);
    }

    #[test]
    fn test_conservation_over_mixed_multiset() {
        let events = vec![
            event(Address::repeat_byte(0x01), 11, 5),
            event(Address::repeat_byte(0x02), 13, 7),
            event(Address::repeat_byte(0x01), 17, 11),
            event(Address::repeat_byte(0x03), 19, 13),
            event(Address::repeat_byte(0x02), 23, 17),
        ];

        let totals = aggregate_events(&events).unwrap();

        let input_shares: U256 = events
            .iter()
            .fold(U256::ZERO, |acc, e| acc.checked_add(e.shares_out).unwrap());
        let input_assets: U256 = events
            .iter()
            .fold(U256::ZERO, |acc, e| acc.checked_add(e.assets_in).unwrap());
        let output_shares: U256 = totals
            .values()
            .fold(U256::ZERO, |acc, t| acc.checked_add(t.shares_out).unwrap());
        let output_assets: U256 = totals
            .values()
            .fold(U256::ZERO, |acc, t| acc.checked_add(t.assets_in).unwrap());

        assert_eq!(input_shares, output_shares);
        assert_eq!(input_assets, output_assets);
    }

    #[test]
    fn test_running_total_overflow_is_an_error() {
        let buyer = Address::repeat_byte(0x01);
        let events = vec![
            ShareEvent {
                recipient: buyer,
                shares_out: U256::MAX,
                assets_in: U256::ZERO,
            },
            ShareEvent {
                recipient: buyer,
                shares_out: U256::from(1u64),
                assets_in: U256::ZERO,
            },
        ];

        let err = aggregate_events(&events).unwrap_err();
        assert!(matches!(err, AggregateError::TotalOverflow(_)));
    }
}
