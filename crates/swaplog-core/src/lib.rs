//! # swaplog-core
//!
//! Chain-agnostic primitives shared by every swaplog crate: the raw log
//! input, the canonical swap records, event kinds with their on-chain
//! layouts, signature-hash configuration and the decode error taxonomy.

pub mod chain;
pub mod config;
pub mod error;
pub mod event;
pub mod log;
pub mod record;

pub use chain::ChainId;
pub use config::{ChainConfig, SignatureConfig};
pub use error::{DecodeError, InterfaceError};
pub use event::{EventKind, EventLayout};
pub use log::{LogId, RawLog};
pub use record::{CanonicalRecord, SwapPairRegisterTxLog, SwapStartTxLog};
