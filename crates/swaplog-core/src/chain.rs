//! Chain identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A chain taking part in the swap bridge, e.g. `ethereum` or `bsc`.
/// Used as the key when selecting a chain profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainId {
    /// Human-readable slug, e.g. "ethereum", "bsc"
    pub slug: String,
    /// EVM chain ID integer (e.g. 1 for Ethereum mainnet, 56 for BSC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evm_chain_id: Option<u64>,
}

impl ChainId {
    pub fn evm(slug: impl Into<String>, chain_id: u64) -> Self {
        Self {
            slug: slug.into(),
            evm_chain_id: Some(chain_id),
        }
    }

    /// A chain known only by its slug.
    pub fn named(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            evm_chain_id: None,
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug)
    }
}

/// Well-known chain IDs for convenience.
pub mod chains {
    use super::ChainId;

    pub fn ethereum() -> ChainId { ChainId::evm("ethereum", 1) }
    pub fn bsc() -> ChainId { ChainId::evm("bsc", 56) }
    pub fn goerli() -> ChainId { ChainId::evm("goerli", 5) }
    pub fn bsc_testnet() -> ChainId { ChainId::evm("bsc-testnet", 97) }

    /// Resolve a slug to a well-known chain, falling back to a bare name.
    pub fn from_slug(slug: &str) -> ChainId {
        match slug.to_lowercase().as_str() {
            "ethereum" | "eth" => ethereum(),
            "bsc" | "bnb" => bsc(),
            "goerli" => goerli(),
            "bsc-testnet" => bsc_testnet(),
            other => ChainId::named(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_id_display() {
        assert_eq!(chains::ethereum().to_string(), "ethereum");
        assert_eq!(chains::bsc().to_string(), "bsc");
    }

    #[test]
    fn from_slug_aliases() {
        assert_eq!(chains::from_slug("ETH"), chains::ethereum());
        assert_eq!(chains::from_slug("bnb").evm_chain_id, Some(56));
        assert_eq!(chains::from_slug("heco"), ChainId::named("heco"));
    }

    #[test]
    fn chain_id_serde_skips_missing_id() {
        let json = serde_json::to_string(&ChainId::named("heco")).unwrap();
        assert_eq!(json, r#"{"slug":"heco"}"#);
    }
}
