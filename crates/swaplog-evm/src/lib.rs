//! # swaplog-evm
//!
//! Decodes the swap bridge contract's EVM logs into canonical records.
//!
//! ## Implementation notes
//! - Uses `alloy-core` for ABI decode
//! - Topics[0] → event signature hash, routed through a fixed table
//! - Topics[1..] → indexed `address` parameters (each 32 bytes, zero-padded)
//! - `data` → non-indexed parameters (ABI-encoded tuple, decoded strictly)

pub mod batch;
pub mod decoder;
pub mod fingerprint;
pub mod interface;
pub mod profile;
pub mod projector;
pub mod router;
pub mod shapes;

pub use batch::{chunked_decode, decode_batch, BatchDecodeResult, ErrorMode};
pub use decoder::{decode, decode_resolved};
pub use interface::{ContractInterface, ResolvedEvent};
pub use profile::ChainProfile;
pub use projector::project;
pub use router::SignatureRouter;
pub use shapes::{EventShape, PairRegister, SwapStartedThreeParty, SwapStartedTwoParty};
