//! Typed event shapes.
//!
//! One struct per on-chain event variant, plus the `EventShape` sum type the
//! decoder returns. Shapes are assembled positionally: addresses in the
//! layout's indexed order, data values in the layout's declaration order.

use alloy_core::dyn_abi::DynSolValue;
use alloy_primitives::{Address, U256};
use swaplog_core::event::EventKind;

/// `SphynxSwapStarted` as emitted on the Ethereum side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapStartedTwoParty {
    pub token: Address,
    pub from: Address,
    pub amount: U256,
    pub fee_amount: U256,
}

/// `SphynxSwapStarted` as emitted on the BSC side, which also names the
/// destination-chain token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapStartedThreeParty {
    pub origin_token: Address,
    pub dest_token: Address,
    pub from: Address,
    pub amount: U256,
    pub fee_amount: U256,
}

/// `SphynxSwapPairRegister`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairRegister {
    pub sponsor: Address,
    pub origin_token: Address,
    pub dest_token: Address,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventShape {
    SwapStartedTwoParty(SwapStartedTwoParty),
    SwapStartedThreeParty(SwapStartedThreeParty),
    PairRegister(PairRegister),
}

impl EventShape {
    pub fn kind(&self) -> EventKind {
        match self {
            EventShape::SwapStartedTwoParty(_) => EventKind::SwapStartedEthToBsc,
            EventShape::SwapStartedThreeParty(_) => EventKind::SwapStartedBscToEth,
            EventShape::PairRegister(_) => EventKind::SwapPairRegister,
        }
    }

    /// Build the shape for `kind` from its topic addresses and data values.
    ///
    /// The caller guarantees both slices follow `kind.layout()`; a count or
    /// type mismatch is reported as a reason string.
    pub(crate) fn assemble(
        kind: EventKind,
        addresses: &[Address],
        values: Vec<DynSolValue>,
    ) -> Result<Self, String> {
        let layout = kind.layout();
        if addresses.len() != layout.indexed.len() || values.len() != layout.data.len() {
            return Err(format!(
                "got {} addresses and {} values for a layout of {} and {}",
                addresses.len(),
                values.len(),
                layout.indexed.len(),
                layout.data.len()
            ));
        }
        let mut values = values.into_iter();

        match kind {
            EventKind::SwapStartedEthToBsc => Ok(EventShape::SwapStartedTwoParty(
                SwapStartedTwoParty {
                    token: addresses[0],
                    from: addresses[1],
                    amount: take_uint(&mut values, "amount")?,
                    fee_amount: take_uint(&mut values, "fee_amount")?,
                },
            )),
            EventKind::SwapStartedBscToEth => Ok(EventShape::SwapStartedThreeParty(
                SwapStartedThreeParty {
                    origin_token: addresses[0],
                    dest_token: addresses[1],
                    from: addresses[2],
                    amount: take_uint(&mut values, "amount")?,
                    fee_amount: take_uint(&mut values, "fee_amount")?,
                },
            )),
            EventKind::SwapPairRegister => {
                let name = take_string(&mut values, "name")?;
                let symbol = take_string(&mut values, "symbol")?;
                let decimals = take_uint(&mut values, "decimals")?;
                let decimals = u8::try_from(decimals)
                    .map_err(|_| format!("decimals {decimals} does not fit uint8"))?;
                Ok(EventShape::PairRegister(PairRegister {
                    sponsor: addresses[0],
                    origin_token: addresses[1],
                    dest_token: addresses[2],
                    name,
                    symbol,
                    decimals,
                }))
            }
        }
    }
}

fn take_uint(values: &mut impl Iterator<Item = DynSolValue>, field: &str) -> Result<U256, String> {
    match values.next() {
        Some(DynSolValue::Uint(v, _)) => Ok(v),
        Some(other) => Err(format!("{field}: expected uint, got {other:?}")),
        None => Err(format!("{field}: missing")),
    }
}

fn take_string(
    values: &mut impl Iterator<Item = DynSolValue>,
    field: &str,
) -> Result<String, String> {
    match values.next() {
        Some(DynSolValue::String(s)) => Ok(s),
        Some(other) => Err(format!("{field}: expected string, got {other:?}")),
        None => Err(format!("{field}: missing")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> Address {
        Address::repeat_byte(byte)
    }

    #[test]
    fn assembles_three_party_in_topic_order() {
        let shape = EventShape::assemble(
            EventKind::SwapStartedBscToEth,
            &[addr(1), addr(2), addr(3)],
            vec![
                DynSolValue::Uint(U256::from(10u64), 256),
                DynSolValue::Uint(U256::from(1u64), 256),
            ],
        )
        .unwrap();
        let EventShape::SwapStartedThreeParty(ev) = shape else {
            panic!("wrong shape: {shape:?}");
        };
        assert_eq!(ev.origin_token, addr(1));
        assert_eq!(ev.dest_token, addr(2));
        assert_eq!(ev.from, addr(3));
        assert_eq!(ev.amount, U256::from(10u64));
        assert_eq!(ev.fee_amount, U256::from(1u64));
    }

    #[test]
    fn rejects_wrong_address_count() {
        let err = EventShape::assemble(
            EventKind::SwapStartedEthToBsc,
            &[addr(1), addr(2), addr(3)],
            vec![
                DynSolValue::Uint(U256::ZERO, 256),
                DynSolValue::Uint(U256::ZERO, 256),
            ],
        )
        .unwrap_err();
        assert!(err.contains("3 addresses"));
    }

    #[test]
    fn rejects_oversized_decimals() {
        let err = EventShape::assemble(
            EventKind::SwapPairRegister,
            &[addr(1), addr(2), addr(3)],
            vec![
                DynSolValue::String("Tether USD".into()),
                DynSolValue::String("USDT".into()),
                DynSolValue::Uint(U256::from(256u64), 8),
            ],
        )
        .unwrap_err();
        assert!(err.contains("decimals 256"));
    }

    #[test]
    fn shape_reports_kind() {
        let shape = EventShape::PairRegister(PairRegister {
            sponsor: addr(1),
            origin_token: addr(2),
            dest_token: addr(3),
            name: String::new(),
            symbol: String::new(),
            decimals: 18,
        });
        assert_eq!(shape.kind(), EventKind::SwapPairRegister);
    }
}
