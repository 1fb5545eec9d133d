//! Routes raw logs to an event kind by their first topic.
//!
//! The routing table is built once per chain from the configured signature
//! hashes and is read-only afterwards. Logs whose topic0 is not registered,
//! or which carry no topics at all, are not routed.

use alloy_primitives::B256;
use std::collections::HashMap;
use swaplog_core::{config::SignatureConfig, error::InterfaceError, event::EventKind, log::RawLog};

#[derive(Debug, Clone, Default)]
pub struct SignatureRouter {
    routes: HashMap<B256, EventKind>,
}

impl SignatureRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route `hash` to `kind`. A hash may only be registered once.
    pub fn register(&mut self, hash: B256, kind: EventKind) -> Result<(), InterfaceError> {
        if let Some(existing) = self.routes.get(&hash) {
            if *existing == kind {
                return Ok(());
            }
            return Err(InterfaceError::DuplicateSignature {
                hash,
                first: existing.to_string(),
                second: kind.to_string(),
            });
        }
        self.routes.insert(hash, kind);
        Ok(())
    }

    /// Build a router for `kinds` using the hashes in `signatures`.
    pub fn from_kinds(
        kinds: &[EventKind],
        signatures: &SignatureConfig,
    ) -> Result<Self, InterfaceError> {
        let mut router = Self::new();
        for kind in kinds {
            router.register(signatures.hash_for(*kind), *kind)?;
        }
        Ok(router)
    }

    /// The event kind for `raw`, or `None` when its topic0 is unknown.
    pub fn route(&self, raw: &RawLog) -> Option<EventKind> {
        raw.signature().and_then(|topic0| self.routes.get(topic0).copied())
    }

    /// Registered kinds, in a stable order.
    pub fn kinds(&self) -> Vec<EventKind> {
        EventKind::ALL
            .iter()
            .copied()
            .filter(|k| self.routes.values().any(|v| v == k))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
