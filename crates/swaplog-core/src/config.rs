//! Signature-hash and per-chain configuration.
//!
//! The signature hashes are configuration, not values computed at runtime:
//! they are loaded once, checked against the contract interface when a chain
//! profile is built, and then read for the lifetime of the process.

use alloy_primitives::{b256, B256};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::chain::ChainId;
use crate::event::EventKind;

pub const SWAP_STARTED_EVENT_NAME: &str = "SphynxSwapStarted";
pub const SWAP_PAIR_REGISTER_EVENT_NAME: &str = "SphynxSwapPairRegister";

/// keccak256("SphynxSwapStarted(address,address,uint256,uint256)")
pub const ETH_TO_BSC_SWAP_STARTED_HASH: B256 =
    b256!("833cb5872c808322e8666b65ac48146042bc300435300238bb929b559b9e1f6a");
/// keccak256("SphynxSwapStarted(address,address,address,uint256,uint256)")
pub const BSC_TO_ETH_SWAP_STARTED_HASH: B256 =
    b256!("fc1a6eab912bd888ec0f7a92e1ee241615ab5e87aadc94db8c334a17efaae97d");
/// keccak256("SphynxSwapPairRegister(address,address,address,string,string,uint8)")
pub const SWAP_PAIR_REGISTER_HASH: B256 =
    b256!("06101386f3a9dd45570dce2027311173d0e136955e5b912edece89cca5bb526d");

static GLOBAL_SIGNATURES: OnceLock<SignatureConfig> = OnceLock::new();

/// Event names and routing hashes for every event kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureConfig {
    pub swap_started_event: String,
    pub pair_register_event: String,
    pub eth_to_bsc_swap_started: B256,
    pub bsc_to_eth_swap_started: B256,
    pub swap_pair_register: B256,
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            swap_started_event: SWAP_STARTED_EVENT_NAME.into(),
            pair_register_event: SWAP_PAIR_REGISTER_EVENT_NAME.into(),
            eth_to_bsc_swap_started: ETH_TO_BSC_SWAP_STARTED_HASH,
            bsc_to_eth_swap_started: BSC_TO_ETH_SWAP_STARTED_HASH,
            swap_pair_register: SWAP_PAIR_REGISTER_HASH,
        }
    }
}

impl SignatureConfig {
    /// The configured routing hash for `kind`.
    pub fn hash_for(&self, kind: EventKind) -> B256 {
        match kind {
            EventKind::SwapStartedEthToBsc => self.eth_to_bsc_swap_started,
            EventKind::SwapStartedBscToEth => self.bsc_to_eth_swap_started,
            EventKind::SwapPairRegister => self.swap_pair_register,
        }
    }

    /// Install the process-wide signature set. Only the first call wins;
    /// returns `false` if a set was already installed.
    pub fn install(self) -> bool {
        GLOBAL_SIGNATURES.set(self).is_ok()
    }

    /// The process-wide signature set, or the built-in defaults when none
    /// was installed.
    pub fn global() -> &'static SignatureConfig {
        GLOBAL_SIGNATURES.get_or_init(SignatureConfig::default)
    }
}

/// One chain the decoder is attached to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Chain slug, e.g. "ethereum"
    pub chain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evm_chain_id: Option<u64>,
    /// Path to the bridge contract's JSON ABI on this chain
    pub abi: PathBuf,
    /// Event kinds emitted by the bridge contract on this chain
    pub events: Vec<EventKind>,
}

impl ChainConfig {
    pub fn chain_id(&self) -> ChainId {
        match self.evm_chain_id {
            Some(id) => ChainId::evm(self.chain.clone(), id),
            None => crate::chain::chains::from_slug(&self.chain),
        }
    }
}
