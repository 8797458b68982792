//! VaultLens metrics definitions.
//!
//! All metrics use OpenTelemetry conventions and are exported by whatever
//! `MeterProvider` the host application installs.

use opentelemetry::{
    metrics::{Counter, Meter},
    KeyValue,
};
use vaultlens_core::{MappedScalarResult, QueueIndexEntry};

/// Central metrics handle for VaultLens.
#[derive(Clone)]
pub struct VaultLensMetrics {
    pub calls_mapped: Counter<u64>,
    pub call_errors: Counter<u64>,
    pub queue_lookups: Counter<u64>,
    pub queue_misses: Counter<u64>,
}

impl VaultLensMetrics {
    pub fn new(meter: &Meter) -> Self {
        Self {
            calls_mapped: meter
                .u64_counter("vaultlens.calls_mapped")
                .with_description("Multicall results mapped to a scalar value")
                .build(),
            call_errors: meter
                .u64_counter("vaultlens.call_errors")
                .with_description("Multicall results that failed or had an unsupported shape")
                .build(),
            queue_lookups: meter
                .u64_counter("vaultlens.queue_lookups")
                .with_description("Strategy queue lookups performed")
                .build(),
            queue_misses: meter
                .u64_counter("vaultlens.queue_misses")
                .with_description("Strategy queue lookups for vaults absent from the batch")
                .build(),
        }
    }

    /// Record the outcome of `flatten_to_scalars` for one reference.
    pub fn record_mapped(&self, reference: &str, mapped: &MappedScalarResult) {
        self.calls_mapped.add(
            mapped.values.len() as u64,
            &[KeyValue::new("reference", reference.to_string())],
        );
        for method in &mapped.errors {
            self.call_errors.add(
                1,
                &[
                    KeyValue::new("reference", reference.to_string()),
                    KeyValue::new("method", method.clone()),
                ],
            );
        }
    }

    /// Record one `map_queue_indexes` lookup.
    pub fn record_queue(&self, entries: &[QueueIndexEntry]) {
        self.queue_lookups.add(1, &[]);
        if entries.is_empty() {
            self.queue_misses.add(1, &[]);
        }
    }
}
