//! # swaplog-observability
//!
//! OpenTelemetry-based observability for swaplog.
//!
//! ## Built-in metrics
//! - `swaplog.logs_decoded`   : counter, tagged with chain + record kind
//! - `swaplog.logs_ignored`   : counter, tagged with chain
//! - `swaplog.decode_errors`  : counter, tagged with chain + error kind
//! - `swaplog.batch_size`     : histogram
//!
//! ## Structured logging
//! Text or JSON logs through `tracing-subscriber`, with levels configurable
//! per crate.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::SwapLogMetrics;
pub use tracing_setup::{init_tracing, LogConfig};
