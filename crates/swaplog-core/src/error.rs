//! Error types for the swaplog decode pipeline.

use alloy_primitives::B256;
use thiserror::Error;

use crate::log::LogId;

/// Errors that can occur while decoding a single log.
///
/// Decoding is a pure function of already-fetched bytes, so none of these
/// is ever worth retrying: the caller logs the failure and skips the log.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{event}: payload of log {log} does not decode: {reason}")]
    Payload {
        event: String,
        log: LogId,
        reason: String,
    },

    #[error("{event}: log {log} has {got} topics, layout needs {expected}")]
    TopicRange {
        event: String,
        log: LogId,
        expected: usize,
        got: usize,
    },

    #[error("{event}: topic {index} of log {log} is not a zero-padded address")]
    DirtyTopicPadding {
        event: String,
        log: LogId,
        index: usize,
    },

    #[error("{event}: interface layout does not match: {reason}")]
    LayoutMismatch { event: String, reason: String },

    #[error("event '{event}' is not declared by the contract interface")]
    EventNotFound { event: String },

    #[error("log {log}: block number {block_number} does not fit a signed height")]
    HeightOverflow { log: LogId, block_number: u64 },
}

impl DecodeError {
    /// Always `false`: a second attempt on the same bytes gives the same result.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Short, stable label for metrics and structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::Payload { .. } => "payload",
            DecodeError::TopicRange { .. } => "topic_range",
            DecodeError::DirtyTopicPadding { .. } => "dirty_topic_padding",
            DecodeError::LayoutMismatch { .. } => "layout_mismatch",
            DecodeError::EventNotFound { .. } => "event_not_found",
            DecodeError::HeightOverflow { .. } => "height_overflow",
        }
    }

    /// The raw log this error refers to, when it is log-specific.
    pub fn log_id(&self) -> Option<&LogId> {
        match self {
            DecodeError::Payload { log, .. }
            | DecodeError::TopicRange { log, .. }
            | DecodeError::DirtyTopicPadding { log, .. }
            | DecodeError::HeightOverflow { log, .. } => Some(log),
            DecodeError::LayoutMismatch { .. } | DecodeError::EventNotFound { .. } => None,
        }
    }
}

/// Errors raised while loading a contract interface or building a chain
/// profile at startup.
#[derive(Debug, Error)]
pub enum InterfaceError {
    #[error("invalid ABI JSON: {0}")]
    InvalidAbi(#[from] serde_json::Error),

    #[error("event '{event}' is not declared by the contract interface")]
    EventNotFound { event: String },

    #[error("{event}: no declaration matches the expected layout {expected}")]
    LayoutMismatch { event: String, expected: String },

    #[error("{kind}: configured signature hash {configured} does not match computed {computed}")]
    SignatureMismatch {
        kind: String,
        configured: B256,
        computed: B256,
    },

    #[error("signature hash {hash} is registered for both {first} and {second}")]
    DuplicateSignature {
        hash: B256,
        first: String,
        second: String,
    },

    #[error("invalid config: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
