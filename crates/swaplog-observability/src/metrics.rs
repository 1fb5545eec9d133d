//! swaplog metrics definitions.
//!
//! All metrics use OpenTelemetry conventions. Without an installed meter
//! provider they are no-ops.

use opentelemetry::{
    metrics::{Counter, Histogram, Meter},
    KeyValue,
};
use swaplog_core::{error::DecodeError, record::CanonicalRecord};

/// Central metrics handle for the decode pipeline.
#[derive(Clone)]
pub struct SwapLogMetrics {
    pub logs_decoded: Counter<u64>,
    pub logs_ignored: Counter<u64>,
    pub decode_errors: Counter<u64>,
    pub batch_size: Histogram<u64>,
}

impl SwapLogMetrics {
    pub fn new(meter: &Meter) -> Self {
        Self {
            logs_decoded: meter
                .u64_counter("swaplog.logs_decoded")
                .with_description("Logs decoded into canonical records")
                .build(),
            logs_ignored: meter
                .u64_counter("swaplog.logs_ignored")
                .with_description("Logs whose topic0 matched no configured event")
                .build(),
            decode_errors: meter
                .u64_counter("swaplog.decode_errors")
                .with_description("Routed logs that failed to decode")
                .build(),
            batch_size: meter
                .u64_histogram("swaplog.batch_size")
                .with_description("Number of logs in a batch decode")
                .build(),
        }
    }

    /// Handle backed by the global meter provider.
    pub fn global() -> Self {
        Self::new(&opentelemetry::global::meter("swaplog"))
    }

    pub fn record_decoded(&self, chain: &str, record: &CanonicalRecord) {
        self.logs_decoded.add(
            1,
            &[
                KeyValue::new("chain", chain.to_string()),
                KeyValue::new("record", record.label()),
            ],
        );
    }

    pub fn record_ignored(&self, chain: &str, count: u64) {
        self.logs_ignored
            .add(count, &[KeyValue::new("chain", chain.to_string())]);
    }

    pub fn record_error(&self, chain: &str, error: &DecodeError) {
        self.decode_errors.add(
            1,
            &[
                KeyValue::new("chain", chain.to_string()),
                KeyValue::new("error_type", error.kind()),
            ],
        );
    }

    pub fn record_batch_size(&self, chain: &str, size: u64) {
        self.batch_size
            .record(size, &[KeyValue::new("chain", chain.to_string())]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swaplog_core::record::SwapStartTxLog;

    #[test]
    fn records_without_provider() {
        let metrics = SwapLogMetrics::global();
        let record = CanonicalRecord::SwapStart(SwapStartTxLog {
            token_addr: "0x55d398326f99059fF775485246999027B3197955".into(),
            from_address: "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045".into(),
            amount: "1".into(),
            fee_amount: "0".into(),
            block_hash: format!("0x{}", "aa".repeat(32)),
            tx_hash: format!("0x{}", "bb".repeat(32)),
            height: 1,
        });
        metrics.record_decoded("ethereum", &record);
        metrics.record_ignored("ethereum", 3);
        metrics.record_error(
            "bsc",
            &DecodeError::EventNotFound {
                event: "SphynxSwapStarted".into(),
            },
        );
        metrics.record_batch_size("bsc", 10);
    }
}
