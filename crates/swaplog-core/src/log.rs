//! Raw log input type.

use alloy_primitives::{Address, Bytes, B256};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw, undecoded log as delivered by a chain source.
/// This is the input to every decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLog {
    /// topics[0] is the event signature hash; topics[1..] are indexed params.
    pub topics: Vec<B256>,
    /// ABI-encoded non-indexed parameters.
    #[serde(default)]
    pub data: Bytes,
    pub block_hash: B256,
    pub block_number: u64,
    pub tx_hash: B256,
    /// Position of the log within its block.
    #[serde(default)]
    pub log_index: u64,
    /// Contract that emitted the log, when the source reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

impl RawLog {
    /// topics[0], the event signature hash, if present.
    pub fn signature(&self) -> Option<&B256> {
        self.topics.first()
    }

    /// Identity of this log for error reports.
    pub fn id(&self) -> LogId {
        LogId {
            tx_hash: self.tx_hash,
            log_index: self.log_index,
            block_number: self.block_number,
        }
    }
}

/// Identifies a single raw log: transaction hash, log index and block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogId {
    pub tx_hash: B256,
    pub log_index: u64,
    pub block_number: u64,
}

impl fmt::Display for LogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{}#{} (block {})",
            hex::encode(self.tx_hash),
            self.log_index,
            self.block_number
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "topics": ["0x833cb5872c808322e8666b65ac48146042bc300435300238bb929b559b9e1f6a"],
            "data": "0x",
            "blockHash": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "blockNumber": 12345,
            "txHash": "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"
        }"#
    }

    #[test]
    fn raw_log_from_json() {
        let log: RawLog = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(log.block_number, 12345);
        assert_eq!(log.log_index, 0);
        assert!(log.address.is_none());
        assert!(log.data.is_empty());
        assert_eq!(log.signature().unwrap()[0], 0x83);
    }

    #[test]
    fn log_id_display() {
        let log: RawLog = serde_json::from_str(sample_json()).unwrap();
        let id = log.id().to_string();
        assert!(id.starts_with("0xbbbb"));
        assert!(id.ends_with("#0 (block 12345)"));
    }
}
