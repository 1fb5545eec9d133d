//! Contract interface descriptions.
//!
//! A `ContractInterface` wraps the bridge contract's JSON ABI. Before any log
//! is decoded against it, the declared event is matched against the layout
//! the decoder assumes for the event kind, so a contract whose event differs
//! (extra field, reordered types, non-address indexed params) is rejected
//! instead of being mis-mapped.

use alloy_core::dyn_abi::DynSolType;
use alloy_json_abi::{Event, JsonAbi};
use alloy_primitives::B256;
use std::path::Path;
use swaplog_core::{
    error::{DecodeError, InterfaceError},
    event::EventKind,
};

use crate::fingerprint;

/// A parsed contract ABI. Read-only after load; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ContractInterface {
    abi: JsonAbi,
}

/// An ABI event declaration checked against an event kind's layout.
#[derive(Debug, Clone)]
pub struct ResolvedEvent {
    pub kind: EventKind,
    pub name: String,
    /// Canonical signature, e.g. `SphynxSwapStarted(address,address,uint256,uint256)`
    pub signature: String,
    /// keccak256 of `signature`
    pub signature_hash: B256,
    /// Tuple of the non-indexed parameter types, in declaration order.
    pub data_type: DynSolType,
}

impl ContractInterface {
    /// Create an interface from a standard Ethereum ABI JSON string.
    pub fn from_json(abi_json: &str) -> Result<Self, InterfaceError> {
        let abi: JsonAbi = serde_json::from_str(abi_json)?;
        Ok(Self { abi })
    }

    pub fn from_path(path: &Path) -> Result<Self, InterfaceError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Every declared event as `(signature, signature hash)`.
    pub fn event_signatures(&self) -> Vec<(String, B256)> {
        self.abi
            .events()
            .map(|e| (e.signature(), fingerprint::event_fingerprint(e)))
            .collect()
    }

    /// Find the declaration of `event_name` whose layout matches `kind`.
    ///
    /// Overloads sharing the name are tried in declaration order; the first
    /// one with a matching layout wins.
    pub fn resolve(&self, event_name: &str, kind: EventKind) -> Result<ResolvedEvent, DecodeError> {
        let overloads = self
            .abi
            .event(event_name)
            .ok_or_else(|| DecodeError::EventNotFound {
                event: event_name.to_string(),
            })?;

        let mut last_reason = String::new();
        for event in overloads {
            match check_layout(event, kind) {
                Ok(data_type) => {
                    return Ok(ResolvedEvent {
                        kind,
                        name: event.name.clone(),
                        signature: event.signature(),
                        signature_hash: fingerprint::event_fingerprint(event),
                        data_type,
                    })
                }
                Err(reason) => last_reason = reason,
            }
        }

        Err(DecodeError::LayoutMismatch {
            event: event_name.to_string(),
            reason: last_reason,
        })
    }

    /// Startup variant of [`resolve`](Self::resolve) with interface errors.
    pub fn resolve_for_startup(
        &self,
        event_name: &str,
        kind: EventKind,
    ) -> Result<ResolvedEvent, InterfaceError> {
        self.resolve(event_name, kind).map_err(|e| match e {
            DecodeError::EventNotFound { event } => InterfaceError::EventNotFound { event },
            _ => InterfaceError::LayoutMismatch {
                event: event_name.to_string(),
                expected: kind.layout().signature(event_name),
            },
        })
    }
}

/// Compare one declaration with the layout of `kind`; on success return the
/// tuple type of its data payload.
fn check_layout(event: &Event, kind: EventKind) -> Result<DynSolType, String> {
    let layout = kind.layout();

    if event.anonymous {
        return Err("anonymous events carry no signature topic".into());
    }

    let indexed: Vec<&str> = event
        .inputs
        .iter()
        .filter(|p| p.indexed)
        .map(|p| p.ty.as_str())
        .collect();
    if indexed.len() != layout.indexed.len() {
        return Err(format!(
            "{} indexed params declared, {} expected",
            indexed.len(),
            layout.indexed.len()
        ));
    }
    if let Some(ty) = indexed.iter().find(|ty| **ty != "address") {
        return Err(format!("indexed param of type {ty}, only address is supported"));
    }

    let data: Vec<&str> = event
        .inputs
        .iter()
        .filter(|p| !p.indexed)
        .map(|p| p.ty.as_str())
        .collect();
    let expected: Vec<&str> = layout.data.iter().map(|(_, ty)| *ty).collect();
    if data != expected {
        return Err(format!(
            "data params ({}) differ from ({})",
            data.join(","),
            expected.join(",")
        ));
    }

    let types = data
        .iter()
        .map(|ty| DynSolType::parse(ty).map_err(|e| e.to_string()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DynSolType::Tuple(types))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ETH_ABI: &str = r#"[
        {"type":"event","name":"SphynxSwapStarted","anonymous":false,"inputs":[
            {"name":"erc20Addr","type":"address","indexed":true},
            {"name":"fromAddr","type":"address","indexed":true},
            {"name":"amount","type":"uint256","indexed":false},
            {"name":"feeAmount","type":"uint256","indexed":false}]},
        {"type":"event","name":"SphynxSwapPairRegister","anonymous":false,"inputs":[
            {"name":"sponsor","type":"address","indexed":true},
            {"name":"erc20Addr","type":"address","indexed":true},
            {"name":"bep20Addr","type":"address","indexed":true},
            {"name":"name","type":"string","indexed":false},
            {"name":"symbol","type":"string","indexed":false},
            {"name":"decimals","type":"uint8","indexed":false}]}
    ]"#;

    #[test]
    fn resolves_two_party_swap() {
        let iface = ContractInterface::from_json(ETH_ABI).unwrap();
        let resolved = iface
            .resolve("SphynxSwapStarted", EventKind::SwapStartedEthToBsc)
            .unwrap();
        assert_eq!(
            resolved.signature,
            "SphynxSwapStarted(address,address,uint256,uint256)"
        );
        assert_eq!(
            resolved.data_type,
            DynSolType::Tuple(vec![DynSolType::Uint(256), DynSolType::Uint(256)])
        );
    }

    #[test]
    fn three_party_layout_rejected_on_two_party_abi() {
        let iface = ContractInterface::from_json(ETH_ABI).unwrap();
        let err = iface
            .resolve("SphynxSwapStarted", EventKind::SwapStartedBscToEth)
            .unwrap_err();
        assert!(matches!(err, DecodeError::LayoutMismatch { .. }), "{err}");
    }

    #[test]
    fn missing_event() {
        let iface = ContractInterface::from_json("[]").unwrap();
        let err = iface
            .resolve_for_startup("SphynxSwapStarted", EventKind::SwapStartedEthToBsc)
            .unwrap_err();
        assert!(matches!(err, InterfaceError::EventNotFound { .. }));
    }

    #[test]
    fn reordered_data_params_rejected() {
        let abi = r#"[{"type":"event","name":"SphynxSwapPairRegister","anonymous":false,"inputs":[
            {"name":"sponsor","type":"address","indexed":true},
            {"name":"erc20Addr","type":"address","indexed":true},
            {"name":"bep20Addr","type":"address","indexed":true},
            {"name":"decimals","type":"uint8","indexed":false},
            {"name":"name","type":"string","indexed":false},
            {"name":"symbol","type":"string","indexed":false}]}]"#;
        let iface = ContractInterface::from_json(abi).unwrap();
        let err = iface
            .resolve_for_startup("SphynxSwapPairRegister", EventKind::SwapPairRegister)
            .unwrap_err();
        assert!(matches!(err, InterfaceError::LayoutMismatch { .. }));
    }

    #[test]
    fn invalid_json() {
        assert!(matches!(
            ContractInterface::from_json("{not json"),
            Err(InterfaceError::InvalidAbi(_))
        ));
    }

    #[test]
    fn lists_signatures() {
        let iface = ContractInterface::from_json(ETH_ABI).unwrap();
        let sigs = iface.event_signatures();
        assert_eq!(sigs.len(), 2);
        assert!(sigs
            .iter()
            .any(|(s, _)| s == "SphynxSwapPairRegister(address,address,address,string,string,uint8)"));
    }
}
