//! Projects a decoded `EventShape` onto a canonical record.
//!
//! Addresses become EIP-55 checksummed hex, amounts become base-10 strings
//! and hashes become 0x-prefixed lowercase hex. Never fails: every input the
//! projector sees has already passed the decoder.

use alloy_primitives::{Address, B256, U256};
use swaplog_core::{
    log::RawLog,
    record::{CanonicalRecord, SwapPairRegisterTxLog, SwapStartTxLog},
};

use crate::shapes::EventShape;

/// Project `shape`, decoded from `raw`, onto its canonical record.
///
/// `raw.block_number` must fit `i64`. [`decode`](crate::decoder::decode)
/// rejects logs where it does not; for logs that bypassed it the height
/// saturates at `i64::MAX`.
pub fn project(shape: &EventShape, raw: &RawLog) -> CanonicalRecord {
    let block_hash = hash_hex(&raw.block_hash);
    let tx_hash = hash_hex(&raw.tx_hash);
    let height = saturating_height(raw.block_number);

    match shape {
        EventShape::SwapStartedTwoParty(ev) => CanonicalRecord::SwapStart(SwapStartTxLog {
            token_addr: checksum(&ev.token),
            from_address: checksum(&ev.from),
            amount: decimal(&ev.amount),
            fee_amount: decimal(&ev.fee_amount),
            block_hash,
            tx_hash,
            height,
        }),
        EventShape::SwapStartedThreeParty(ev) => CanonicalRecord::SwapStart(SwapStartTxLog {
            token_addr: checksum(&ev.origin_token),
            from_address: checksum(&ev.from),
            amount: decimal(&ev.amount),
            fee_amount: decimal(&ev.fee_amount),
            block_hash,
            tx_hash,
            height,
        }),
        EventShape::PairRegister(ev) => {
            CanonicalRecord::SwapPairRegister(SwapPairRegisterTxLog {
                origin_token_addr: checksum(&ev.origin_token),
                dest_token_addr: checksum(&ev.dest_token),
                sponsor: checksum(&ev.sponsor),
                symbol: ev.symbol.clone(),
                name: ev.name.clone(),
                decimals: i32::from(ev.decimals),
                block_hash,
                tx_hash,
                height,
            })
        }
    }
}

fn saturating_height(block_number: u64) -> i64 {
    i64::try_from(block_number).unwrap_or(i64::MAX)
}

fn checksum(addr: &Address) -> String {
    addr.to_checksum(None)
}

fn decimal(value: &U256) -> String {
    value.to_string()
}

fn hash_hex(hash: &B256) -> String {
    format!("0x{}", hex::encode(hash))
}
