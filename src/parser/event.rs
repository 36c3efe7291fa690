//! Decoding of raw eth_getLogs entries into typed purchase events.
//!
//! Wire layout for BuyFixedShares(address indexed, uint256, uint256):
//! - topics[0]: keccak256 of the canonical event signature
//! - topics[1]: recipient address, left-padded to a 32-byte word
//! - data: sharesOut then assetsIn, each a 32-byte big-endian word

use crate::rpc::RawLog;
use crate::utils::config::EVENT_SIGNATURE;
use crate::utils::error::DecodeError;
use alloy_primitives::{hex, keccak256, Address, B256, U256};
use log::debug;

/// Size of one ABI word
const WORD_BYTES: usize = 32;

/// Non-indexed fields carried in the data section
const DATA_WORDS: usize = 2;

/// One decoded BuyFixedShares event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareEvent {
    /// Account that received the shares (indexed)
    pub recipient: Address,

    /// Shares credited, fixed-point with 18 decimals
    pub shares_out: U256,

    /// Assets paid in, fixed-point with 18 decimals
    pub assets_in: U256,
}

/// Topic hash identifying the event
///
/// **Public** - used for the server-side log filter and decode checks
pub fn event_topic() -> B256 {
    keccak256(EVENT_SIGNATURE.as_bytes())
}

/// Decode every raw log into a typed event
///
/// A malformed log is a data-contract violation by the node, so the first
/// failure aborts the whole batch instead of being skipped.
pub fn decode_logs(logs: &[RawLog]) -> Result<Vec<ShareEvent>, DecodeError> {
    let topic = event_topic();

    debug!("Decoding {} raw logs", logs.len());

    logs.iter().map(|log| decode_log(log, topic)).collect()
}

/// Decode a single raw log
///
/// # Arguments
/// * `log` - Raw log entry from eth_getLogs
/// * `expected_topic` - Signature hash the log must carry in topics[0]
///
/// # Errors
/// * `DecodeError::MissingTopics` / `MissingRecipient` - topic list too short
/// * `DecodeError::UnexpectedTopic` - topics[0] is a different event
/// * `DecodeError::InvalidHex` / `DataLength` - malformed hex fields
pub fn decode_log(log: &RawLog, expected_topic: B256) -> Result<ShareEvent, DecodeError> {
    let topic0: B256 = log
        .topics
        .first()
        .ok_or(DecodeError::MissingTopics)?
        .parse()?;

    if topic0 != expected_topic {
        return Err(DecodeError::UnexpectedTopic(format!("{topic0:#x}")));
    }

    // Indexed address parameters are right-aligned in their topic word
    let recipient_word: B256 = log
        .topics
        .get(1)
        .ok_or(DecodeError::MissingRecipient)?
        .parse()?;
    let recipient = Address::from_word(recipient_word);

    let data = hex::decode(&log.data)?;
    if data.len() != DATA_WORDS * WORD_BYTES {
        return Err(DecodeError::DataLength {
            expected: DATA_WORDS * WORD_BYTES,
            actual: data.len(),
        });
    }

    let shares_out = U256::from_be_slice(&data[..WORD_BYTES]);
    let assets_in = U256::from_be_slice(&data[WORD_BYTES..]);

    Ok(ShareEvent {
        recipient,
        shares_out,
        assets_in,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn golden_log(recipient: Address, shares_out: U256, assets_in: U256) -> RawLog {
        let mut data = shares_out.to_be_bytes::<32>().to_vec();
        data.extend_from_slice(&assets_in.to_be_bytes::<32>());

        RawLog {
            address: "0xd5430d6cff45e1319cac204f2a4e51e2ca3213b1".to_string(),
            topics: vec![
                format!("{:#x}", event_topic()),
                format!("0x000000000000000000000000{recipient:x}"),
            ],
            data: format!("0x{}", hex::encode(data)),
            block_number: Some("0x13d6ba8".to_string()),
            transaction_hash: None,
            log_index: Some("0x0".to_string()),
        }
    }

    #[test]
    fn test_event_topic_matches_signature_hash() {
        assert_eq!(
            format!("{:#x}", event_topic()),
            "0x16481c457cfa97f1508c848b8ce22b67b27711f139806040aeb662abdfc4996b"
        );
    }

    #[test]
    fn test_decode_golden_log() {
        let recipient = Address::repeat_byte(0x42);
        let log = golden_log(recipient, U256::from(1000u64), U256::from(7u64));

        let event = decode_log(&log, event_topic()).unwrap();

        assert_eq!(event.recipient, recipient);
        assert_eq!(event.shares_out, U256::from(1000u64));
        assert_eq!(event.assets_in, U256::from(7u64));
    }

    #[test]
    fn test_decode_preserves_values_beyond_64_bits() {
        let big: U256 = "123456789012345678901234567890".parse().unwrap();
        let log = golden_log(Address::repeat_byte(0x01), big, U256::from(1u64));

        let event = decode_log(&log, event_topic()).unwrap();

        assert_eq!(event.shares_out, big);
    }

    #[test]
    fn test_decode_logs_batch() {
        let logs = vec![
            golden_log(Address::repeat_byte(0x01), U256::from(1u64), U256::from(2u64)),
            golden_log(Address::repeat_byte(0x02), U256::from(3u64), U256::from(4u64)),
        ];

        let events = decode_logs(&logs).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[1].assets_in, U256::from(4u64));
    }

    #[test]
    fn test_wrong_topic_rejected() {
        let mut log = golden_log(Address::repeat_byte(0x01), U256::ZERO, U256::ZERO);
        log.topics[0] = format!("{:#x}", B256::repeat_byte(0xaa));

        let err = decode_log(&log, event_topic()).unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedTopic(_)));
    }

    #[test]
    fn test_missing_recipient_topic() {
        let mut log = golden_log(Address::repeat_byte(0x01), U256::ZERO, U256::ZERO);
        log.topics.truncate(1);

        let err = decode_log(&log, event_topic()).unwrap_err();
        assert!(matches!(err, DecodeError::MissingRecipient));
    }

    #[test]
    fn test_no_topics() {
        let mut log = golden_log(Address::repeat_byte(0x01), U256::ZERO, U256::ZERO);
        log.topics.clear();

        let err = decode_log(&log, event_topic()).unwrap_err();
        assert!(matches!(err, DecodeError::MissingTopics));
    }

    #[test]
    fn test_short_data_rejected() {
        let mut log = golden_log(Address::repeat_byte(0x01), U256::ZERO, U256::ZERO);
        log.data = "0x1234".to_string();

        let err = decode_log(&log, event_topic()).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::DataLength {
                expected: 64,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_bad_hex_rejected() {
        let mut log = golden_log(Address::repeat_byte(0x01), U256::ZERO, U256::ZERO);
        log.data = "0xzz".to_string();

        let err = decode_log(&log, event_topic()).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidHex(_)));
    }
}
