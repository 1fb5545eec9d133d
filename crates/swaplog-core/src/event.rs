//! Event kinds and their on-chain layouts.
//!
//! Every event the bridge contracts emit puts its address fields in
//! indexed topics (in declaration order, after topics[0]) and its remaining
//! fields in the ABI-encoded data payload. The layout tables below record
//! which is which, so a single decode routine can serve every kind.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::SignatureConfig;

/// The event variants the swap bridge emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// `SphynxSwapStarted` on the Ethereum side: one token identity.
    SwapStartedEthToBsc,
    /// `SphynxSwapStarted` on the BSC side: origin and destination tokens.
    SwapStartedBscToEth,
    /// `SphynxSwapPairRegister`: a sponsor registers a token pair.
    SwapPairRegister,
}

/// Field layout of one event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventLayout {
    /// Indexed `address` fields, in topic order (topics[1..]).
    pub indexed: &'static [&'static str],
    /// Non-indexed fields as `(name, abi type)`, in declaration order.
    pub data: &'static [(&'static str, &'static str)],
}

impl EventLayout {
    /// Number of topics a log of this layout must carry, topics[0] included.
    pub fn topic_count(&self) -> usize {
        1 + self.indexed.len()
    }

    /// Canonical ABI signature, e.g. `Name(address,address,uint256,uint256)`.
    pub fn signature(&self, event_name: &str) -> String {
        let types: Vec<&str> = self
            .indexed
            .iter()
            .map(|_| "address")
            .chain(self.data.iter().map(|(_, ty)| *ty))
            .collect();
        format!("{}({})", event_name, types.join(","))
    }
}

const SWAP_STARTED_TWO_PARTY: EventLayout = EventLayout {
    indexed: &["token", "from"],
    data: &[("amount", "uint256"), ("fee_amount", "uint256")],
};

const SWAP_STARTED_THREE_PARTY: EventLayout = EventLayout {
    indexed: &["origin_token", "dest_token", "from"],
    data: &[("amount", "uint256"), ("fee_amount", "uint256")],
};

const SWAP_PAIR_REGISTER: EventLayout = EventLayout {
    indexed: &["sponsor", "origin_token", "dest_token"],
    data: &[("name", "string"), ("symbol", "string"), ("decimals", "uint8")],
};

impl EventKind {
    pub const ALL: [EventKind; 3] = [
        EventKind::SwapStartedEthToBsc,
        EventKind::SwapStartedBscToEth,
        EventKind::SwapPairRegister,
    ];

    pub fn layout(&self) -> &'static EventLayout {
        match self {
            EventKind::SwapStartedEthToBsc => &SWAP_STARTED_TWO_PARTY,
            EventKind::SwapStartedBscToEth => &SWAP_STARTED_THREE_PARTY,
            EventKind::SwapPairRegister => &SWAP_PAIR_REGISTER,
        }
    }

    /// The event name as declared in the contract interface.
    pub fn event_name<'a>(&self, signatures: &'a SignatureConfig) -> &'a str {
        match self {
            EventKind::SwapStartedEthToBsc | EventKind::SwapStartedBscToEth => {
                &signatures.swap_started_event
            }
            EventKind::SwapPairRegister => &signatures.pair_register_event,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::SwapStartedEthToBsc => "swap_started_eth_to_bsc",
            EventKind::SwapStartedBscToEth => "swap_started_bsc_to_eth",
            EventKind::SwapPairRegister => "swap_pair_register",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown event kind '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signatures_from_layouts() {
        let cfg = SignatureConfig::default();
        let sig = |k: EventKind| k.layout().signature(k.event_name(&cfg));
        assert_eq!(
            sig(EventKind::SwapStartedEthToBsc),
            "SphynxSwapStarted(address,address,uint256,uint256)"
        );
        assert_eq!(
            sig(EventKind::SwapStartedBscToEth),
            "SphynxSwapStarted(address,address,address,uint256,uint256)"
        );
        assert_eq!(
            sig(EventKind::SwapPairRegister),
            "SphynxSwapPairRegister(address,address,address,string,string,uint8)"
        );
    }

    #[test]
    fn topic_counts() {
        assert_eq!(EventKind::SwapStartedEthToBsc.layout().topic_count(), 3);
        assert_eq!(EventKind::SwapStartedBscToEth.layout().topic_count(), 4);
        assert_eq!(EventKind::SwapPairRegister.layout().topic_count(), 4);
    }

    #[test]
    fn kind_str_roundtrip() {
        for kind in EventKind::ALL {
            assert_eq!(kind.as_str().parse::<EventKind>().unwrap(), kind);
        }
        assert!("swap".parse::<EventKind>().is_err());
    }

    #[test]
    fn kind_serde_snake_case() {
        let json = serde_json::to_string(&EventKind::SwapStartedBscToEth).unwrap();
        assert_eq!(json, "\"swap_started_bsc_to_eth\"");
    }
}
