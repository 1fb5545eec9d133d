//! Event signature hashes.
//!
//! The signature hash of an EVM event is the keccak256 hash of its canonical
//! signature string, e.g.:
//!   keccak256("SphynxSwapStarted(address,address,uint256,uint256)")
//!   → 0x833cb5872c808322e8666b65ac48146042bc300435300238bb929b559b9e1f6a
//!
//! Routing never recomputes these; they are only used to check the
//! configured hashes against the loaded interface at startup.

use alloy_json_abi::Event;
use alloy_primitives::B256;
use tiny_keccak::{Hasher, Keccak};

/// keccak256 of a canonical event signature string.
pub fn keccak256_signature(signature: &str) -> B256 {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(signature.as_bytes());
    hasher.finalize(&mut output);
    B256::from(output)
}

/// Signature hash of an event declared in a JSON ABI.
pub fn event_fingerprint(event: &Event) -> B256 {
    keccak256_signature(&event.signature())
}
