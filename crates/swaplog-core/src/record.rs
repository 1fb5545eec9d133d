//! Canonical transaction-log records handed to the settlement pipeline.
//!
//! Records carry strings only: checksummed hex addresses, base-10 amounts
//! and 0x-prefixed hashes, so they serialize the same way regardless of
//! which chain produced them.

use serde::{Deserialize, Serialize};

/// A swap was started on one side of the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapStartTxLog {
    pub token_addr: String,
    pub from_address: String,
    /// Base-10, no leading zeros
    pub amount: String,
    /// Base-10, no leading zeros
    pub fee_amount: String,
    pub block_hash: String,
    pub tx_hash: String,
    pub height: i64,
}

/// A token pair was registered with the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapPairRegisterTxLog {
    pub origin_token_addr: String,
    pub dest_token_addr: String,
    pub sponsor: String,
    pub symbol: String,
    pub name: String,
    pub decimals: i32,
    pub block_hash: String,
    pub tx_hash: String,
    pub height: i64,
}

/// Either canonical record, tagged for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CanonicalRecord {
    SwapStart(SwapStartTxLog),
    SwapPairRegister(SwapPairRegisterTxLog),
}

impl CanonicalRecord {
    /// The serialized `kind` tag.
    pub fn label(&self) -> &'static str {
        match self {
            CanonicalRecord::SwapStart(_) => "swap_start",
            CanonicalRecord::SwapPairRegister(_) => "swap_pair_register",
        }
    }

    pub fn height(&self) -> i64 {
        match self {
            CanonicalRecord::SwapStart(r) => r.height,
            CanonicalRecord::SwapPairRegister(r) => r.height,
        }
    }

    pub fn tx_hash(&self) -> &str {
        match self {
            CanonicalRecord::SwapStart(r) => &r.tx_hash,
            CanonicalRecord::SwapPairRegister(r) => &r.tx_hash,
        }
    }

    pub fn as_swap_start(&self) -> Option<&SwapStartTxLog> {
        match self {
            CanonicalRecord::SwapStart(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_pair_register(&self) -> Option<&SwapPairRegisterTxLog> {
        match self {
            CanonicalRecord::SwapPairRegister(r) => Some(r),
            _ => None,
        }
    }
}
