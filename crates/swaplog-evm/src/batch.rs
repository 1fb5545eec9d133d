//! Rayon-powered batch decoding.
//!
//! Every log in a batch is decoded independently; a failing log never
//! affects its neighbours. Records come back in input order.

use rayon::prelude::*;
use swaplog_core::{error::DecodeError, log::RawLog, record::CanonicalRecord};
use tracing::warn;

use crate::profile::ChainProfile;

/// Controls what a batch keeps of individual decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Log failures and drop them.
    #[default]
    Skip,
    /// Return failures alongside the records.
    Collect,
}

/// The output of a batch decode.
#[derive(Debug, Default)]
pub struct BatchDecodeResult {
    pub records: Vec<CanonicalRecord>,
    /// `(index into the input, error)`. Populated only in `ErrorMode::Collect`.
    pub errors: Vec<(usize, DecodeError)>,
    /// Logs whose topic0 did not match any of the chain's events.
    pub ignored: usize,
}

impl BatchDecodeResult {
    fn absorb(&mut self, other: BatchDecodeResult, offset: usize) {
        self.records.extend(other.records);
        self.errors
            .extend(other.errors.into_iter().map(|(idx, e)| (offset + idx, e)));
        self.ignored += other.ignored;
    }
}

/// Decode `logs` in parallel against `profile`.
pub fn decode_batch(profile: &ChainProfile, logs: &[RawLog], mode: ErrorMode) -> BatchDecodeResult {
    let results: Vec<Result<Option<CanonicalRecord>, DecodeError>> =
        logs.par_iter().map(|raw| profile.decode_log(raw)).collect();

    let mut out = BatchDecodeResult {
        records: Vec::with_capacity(results.len()),
        ..Default::default()
    };
    for (idx, result) in results.into_iter().enumerate() {
        match result {
            Ok(Some(record)) => out.records.push(record),
            Ok(None) => out.ignored += 1,
            Err(err) => {
                warn!(chain = %profile.chain(), index = idx, kind = err.kind(), "{err}");
                if mode == ErrorMode::Collect {
                    out.errors.push((idx, err));
                }
            }
        }
    }
    out
}

/// Decode `logs` in slices of at most `chunk_size`, each slice in parallel.
/// Error indices are relative to the whole of `logs`.
pub fn chunked_decode(
    profile: &ChainProfile,
    logs: &[RawLog],
    mode: ErrorMode,
    chunk_size: usize,
) -> BatchDecodeResult {
    let mut out = BatchDecodeResult::default();
    let mut offset = 0;
    for chunk in logs.chunks(chunk_size.max(1)) {
        out.absorb(decode_batch(profile, chunk, mode), offset);
        offset += chunk.len();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::ContractInterface;
    use alloy_core::dyn_abi::DynSolValue;
    use alloy_primitives::{Address, Bytes, B256, U256};
    use std::sync::Arc;
    use swaplog_core::{
        config::{SignatureConfig, ETH_TO_BSC_SWAP_STARTED_HASH},
        event::EventKind,
    };

    const ETH_ABI: &str = r#"[
        {"type":"event","name":"SphynxSwapStarted","anonymous":false,"inputs":[
            {"name":"erc20Addr","type":"address","indexed":true},
            {"name":"fromAddr","type":"address","indexed":true},
            {"name":"amount","type":"uint256","indexed":false},
            {"name":"feeAmount","type":"uint256","indexed":false}]}
    ]"#;

    fn profile() -> ChainProfile {
        ChainProfile::new(
            swaplog_core::chain::chains::ethereum(),
            Arc::new(ContractInterface::from_json(ETH_ABI).unwrap()),
            &[EventKind::SwapStartedEthToBsc],
            &SignatureConfig::default(),
        )
        .unwrap()
    }

    fn swap_log(block_number: u64) -> RawLog {
        let data: Bytes = DynSolValue::Tuple(vec![
            DynSolValue::Uint(U256::from(block_number), 256),
            DynSolValue::Uint(U256::from(1u64), 256),
        ])
        .abi_encode_params()
        .into();
        RawLog {
            topics: vec![
                ETH_TO_BSC_SWAP_STARTED_HASH,
                Address::repeat_byte(0x11).into_word(),
                Address::repeat_byte(0x22).into_word(),
            ],
            data,
            block_hash: B256::repeat_byte(0xaa),
            block_number,
            tx_hash: B256::repeat_byte(0xbb),
            log_index: 0,
            address: None,
        }
    }

    fn mixed_batch() -> Vec<RawLog> {
        let mut short = swap_log(2);
        short.topics.truncate(2);
        let mut unknown = swap_log(3);
        unknown.topics[0] = B256::repeat_byte(0x77);
        vec![swap_log(1), short, unknown, swap_log(4)]
    }

    #[test]
    fn collect_keeps_errors_and_order() {
        let result = decode_batch(&profile(), &mixed_batch(), ErrorMode::Collect);
        let heights: Vec<i64> = result.records.iter().map(|r| r.height()).collect();
        assert_eq!(heights, vec![1, 4]);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].0, 1);
        assert!(matches!(result.errors[0].1, DecodeError::TopicRange { .. }));
        assert_eq!(result.ignored, 1);
    }

    #[test]
    fn skip_drops_errors() {
        let result = decode_batch(&profile(), &mixed_batch(), ErrorMode::Skip);
        assert_eq!(result.records.len(), 2);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn chunked_indices_are_global() {
        let result = chunked_decode(&profile(), &mixed_batch(), ErrorMode::Collect, 1);
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.errors[0].0, 1);
        assert_eq!(result.ignored, 1);
    }
}
