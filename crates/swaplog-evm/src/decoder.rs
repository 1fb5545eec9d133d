//! Event decoder: raw log + contract interface → typed event shape.
//!
//! # Wire layout
//! - topics[0] → event signature hash (already matched by the router)
//! - topics[1..] → indexed `address` params, each left-padded to 32 bytes
//! - `data` → non-indexed params as an ABI-encoded tuple
//!
//! The topic count is checked before any topic is read, and address topics
//! must carry exactly twelve zero bytes of padding. The payload is decoded
//! strictly: it must re-encode to the same bytes, so a truncated payload,
//! trailing garbage or a non-canonical encoding is rejected.

use alloy_core::dyn_abi::{DynSolType, DynSolValue};
use alloy_primitives::{Address, B256, U256};
use swaplog_core::{error::DecodeError, event::EventKind, log::RawLog};

use crate::interface::{ContractInterface, ResolvedEvent};
use crate::shapes::EventShape;

/// Decode `raw` as the `kind` variant of `event_name` declared in `interface`.
pub fn decode(
    interface: &ContractInterface,
    event_name: &str,
    kind: EventKind,
    raw: &RawLog,
) -> Result<EventShape, DecodeError> {
    let resolved = interface.resolve(event_name, kind)?;
    decode_resolved(&resolved, raw)
}

/// Decode `raw` against an already-resolved event declaration.
pub fn decode_resolved(resolved: &ResolvedEvent, raw: &RawLog) -> Result<EventShape, DecodeError> {
    let layout = resolved.kind.layout();

    if raw.topics.len() < layout.topic_count() {
        return Err(DecodeError::TopicRange {
            event: resolved.name.clone(),
            log: raw.id(),
            expected: layout.topic_count(),
            got: raw.topics.len(),
        });
    }

    if i64::try_from(raw.block_number).is_err() {
        return Err(DecodeError::HeightOverflow {
            log: raw.id(),
            block_number: raw.block_number,
        });
    }

    let values = decode_payload(resolved, raw)?;

    let addresses = (1..layout.topic_count())
        .map(|index| {
            topic_address(&raw.topics[index]).ok_or_else(|| DecodeError::DirtyTopicPadding {
                event: resolved.name.clone(),
                log: raw.id(),
                index,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    EventShape::assemble(resolved.kind, &addresses, values).map_err(|reason| {
        DecodeError::Payload {
            event: resolved.name.clone(),
            log: raw.id(),
            reason,
        }
    })
}

/// Decode the data payload as the tuple of non-indexed params.
fn decode_payload(resolved: &ResolvedEvent, raw: &RawLog) -> Result<Vec<DynSolValue>, DecodeError> {
    let payload_err = |reason: String| DecodeError::Payload {
        event: resolved.name.clone(),
        log: raw.id(),
        reason,
    };

    check_dynamic_bounds(&resolved.data_type, &raw.data).map_err(payload_err)?;

    let decoded = resolved
        .data_type
        .abi_decode_params(&raw.data)
        .map_err(|e| payload_err(e.to_string()))?;

    let canonical = decoded.abi_encode_params();
    if canonical.len() != raw.data.len() {
        return Err(payload_err(format!(
            "payload is {} bytes, declared fields encode to {}",
            raw.data.len(),
            canonical.len()
        )));
    }
    if canonical.as_slice() != &raw.data[..] {
        return Err(payload_err("payload is not canonically encoded".into()));
    }

    match decoded {
        DynSolValue::Tuple(values) => Ok(values),
        other => Ok(vec![other]),
    }
}

/// Check the head offset and length word of every top-level `string` or
/// `bytes` field against the payload size before handing it to the ABI
/// decoder. Forged words near `u256::MAX` must not reach offset arithmetic.
fn check_dynamic_bounds(data_type: &DynSolType, data: &[u8]) -> Result<(), String> {
    let DynSolType::Tuple(types) = data_type else {
        return Ok(());
    };
    let head_len = types.len() * 32;
    if data.len() < head_len {
        return Err(format!(
            "payload is {} bytes, head needs {}",
            data.len(),
            head_len
        ));
    }

    for (index, ty) in types.iter().enumerate() {
        if !matches!(ty, DynSolType::String | DynSolType::Bytes) {
            continue;
        }
        let offset = read_usize(data, index * 32)
            .ok_or_else(|| format!("param {index}: offset does not fit the payload"))?;
        let body = offset
            .checked_add(32)
            .filter(|end| *end <= data.len())
            .ok_or_else(|| format!("param {index}: offset {offset} is past the payload"))?;
        let len = read_usize(data, offset)
            .ok_or_else(|| format!("param {index}: length does not fit the payload"))?;
        body.checked_add(len)
            .filter(|end| *end <= data.len())
            .ok_or_else(|| format!("param {index}: length {len} runs past the payload"))?;
    }
    Ok(())
}

/// The 32-byte word at `at` as a `usize`, or `None` when it is out of range.
fn read_usize(data: &[u8], at: usize) -> Option<usize> {
    let word = data.get(at..at.checked_add(32)?)?;
    usize::try_from(U256::from_be_slice(word)).ok()
}

/// The address in the low 20 bytes of a topic, or `None` when any of the
/// 12 padding bytes is non-zero.
pub fn topic_address(topic: &B256) -> Option<Address> {
    let (padding, address) = topic.split_at(12);
    if padding.iter().any(|b| *b != 0) {
        return None;
    }
    Some(Address::from_slice(address))
}
