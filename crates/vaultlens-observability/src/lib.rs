//! # vaultlens-observability
//!
//! OpenTelemetry-based observability for VaultLens.
//!
//! ## Built-in metrics
//! - `vaultlens.calls_mapped`   : counter, tagged with reference
//! - `vaultlens.call_errors`    : counter, tagged with reference + method
//! - `vaultlens.queue_lookups`  : counter
//! - `vaultlens.queue_misses`   : counter, vaults absent from the helper batch
//!
//! ## Structured logging
//! Text or JSON logs through `tracing-subscriber`, with per-component levels
//! and a `VAULTLENS_LOG` override.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::VaultLensMetrics;
pub use tracing_setup::{init_tracing, LogConfig, LogFormat, LOG_ENV};
