//! Per-chain decode profile.
//!
//! A `ChainProfile` ties one chain's bridge contract interface to the event
//! kinds that chain emits. Every declaration is resolved and its signature
//! hash compared with the configured routing hash when the profile is built,
//! so a wrong ABI or a stale hash fails at startup rather than per log.

use std::collections::HashMap;
use std::sync::Arc;

use swaplog_core::{
    chain::ChainId,
    config::{ChainConfig, SignatureConfig},
    error::{DecodeError, InterfaceError},
    event::EventKind,
    log::RawLog,
    record::CanonicalRecord,
};
use tracing::{debug, info};

use crate::decoder::decode_resolved;
use crate::interface::{ContractInterface, ResolvedEvent};
use crate::projector::project;
use crate::router::SignatureRouter;
use crate::shapes::EventShape;

#[derive(Debug, Clone)]
pub struct ChainProfile {
    chain: ChainId,
    interface: Arc<ContractInterface>,
    router: SignatureRouter,
    resolved: HashMap<EventKind, ResolvedEvent>,
}

impl ChainProfile {
    /// Build a profile for `chain` decoding `kinds` against `interface`.
    pub fn new(
        chain: ChainId,
        interface: Arc<ContractInterface>,
        kinds: &[EventKind],
        signatures: &SignatureConfig,
    ) -> Result<Self, InterfaceError> {
        let router = SignatureRouter::from_kinds(kinds, signatures)?;
        let mut resolved = HashMap::with_capacity(kinds.len());

        for kind in kinds {
            let event = interface.resolve_for_startup(kind.event_name(signatures), *kind)?;
            let configured = signatures.hash_for(*kind);
            if event.signature_hash != configured {
                return Err(InterfaceError::SignatureMismatch {
                    kind: kind.to_string(),
                    configured,
                    computed: event.signature_hash,
                });
            }
            resolved.insert(*kind, event);
        }

        info!(
            chain = %chain,
            kinds = ?router.kinds(),
            "chain profile ready"
        );

        Ok(Self {
            chain,
            interface,
            router,
            resolved,
        })
    }

    /// Load the ABI named by `config` and build its profile.
    pub fn from_config(
        config: &ChainConfig,
        signatures: &SignatureConfig,
    ) -> Result<Self, InterfaceError> {
        let interface = ContractInterface::from_path(&config.abi)?;
        Self::new(config.chain_id(), Arc::new(interface), &config.events, signatures)
    }

    pub fn chain(&self) -> &ChainId {
        &self.chain
    }

    pub fn interface(&self) -> &Arc<ContractInterface> {
        &self.interface
    }

    pub fn router(&self) -> &SignatureRouter {
        &self.router
    }

    pub fn resolved(&self, kind: EventKind) -> Option<&ResolvedEvent> {
        self.resolved.get(&kind)
    }

    /// Decode `raw` into its typed shape.
    ///
    /// `Ok(None)` means the log is not one of this chain's events.
    pub fn decode_shape(&self, raw: &RawLog) -> Result<Option<EventShape>, DecodeError> {
        let Some(kind) = self.router.route(raw) else {
            debug!(chain = %self.chain, log = %raw.id(), "ignoring unrouted log");
            return Ok(None);
        };
        let resolved = self
            .resolved
            .get(&kind)
            .ok_or_else(|| DecodeError::EventNotFound {
                event: kind.to_string(),
            })?;
        decode_resolved(resolved, raw).map(Some)
    }

    /// Decode `raw` and project it onto a canonical record.
    pub fn decode_log(&self, raw: &RawLog) -> Result<Option<CanonicalRecord>, DecodeError> {
        let Some(shape) = self.decode_shape(raw)? else {
            return Ok(None);
        };
        debug!(
            chain = %self.chain,
            kind = %shape.kind(),
            height = raw.block_number,
            "decoded log"
        );
        Ok(Some(project(&shape, raw)))
    }
}
