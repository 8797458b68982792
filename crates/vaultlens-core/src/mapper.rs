//! Maps raw multicall batches into application data.
//!
//! - `flatten_to_scalars` turns a batch of single-output getters into a
//!   method-name → value map plus the list of calls that produced nothing
//!   usable.
//! - `map_queue_indexes` finds a vault's strategy list in a strategies-helper
//!   batch and numbers each strategy by its position.

use crate::call::{BatchResult, ContractCallResults};
use crate::error::MapError;
use crate::types::{DecodedValue, ScalarValue};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Scalar view of a batch.
///
/// Every method name of the input appears exactly once, either in `values`
/// or in `errors`. Serialized as `{"values": {...}, "errors": [...]}` so a
/// method named `errors` cannot collide with the error list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MappedScalarResult {
    /// method name → value, in first-insertion order
    pub values: IndexMap<String, ScalarValue>,
    /// Method names whose call failed or returned an unsupported shape
    pub errors: Vec<String>,
}

impl MappedScalarResult {
    pub fn get(&self, method_name: &str) -> Option<&ScalarValue> {
        self.values.get(method_name)
    }

    /// Text value (including big integers rendered as decimal strings).
    pub fn text(&self, method_name: &str) -> Option<&str> {
        self.get(method_name).and_then(ScalarValue::as_text)
    }

    pub fn has_error(&self, method_name: &str) -> bool {
        self.errors.iter().any(|e| e == method_name)
    }

    fn record_value(&mut self, method_name: &str, value: ScalarValue) {
        // a later success supersedes an earlier failure of the same method
        self.errors.retain(|e| e != method_name);
        self.values.insert(method_name.to_string(), value);
    }

    fn record_error(&mut self, method_name: &str) {
        if self.values.contains_key(method_name) || self.has_error(method_name) {
            return;
        }
        self.errors.push(method_name.to_string());
    }
}

/// Position of a strategy within a vault's withdrawal queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueIndexEntry {
    pub queue_index: usize,
    /// Lower-cased strategy address
    pub address: String,
}

/// Convert a decoded value into a scalar, if it has a scalar shape.
fn to_scalar(value: &DecodedValue) -> Option<ScalarValue> {
    match value {
        DecodedValue::Str(s) => Some(ScalarValue::Text(s.clone())),
        DecodedValue::Bool(b) => Some(ScalarValue::Bool(*b)),
        DecodedValue::Number(n) => Some(ScalarValue::Number(*n)),
        DecodedValue::BigInt(i) => Some(ScalarValue::Text(i.to_string())),
        DecodedValue::Array(_) | DecodedValue::Other(_) => None,
    }
}

/// Flatten a batch into one scalar per method.
///
/// Repeated method names resolve to the last successful occurrence.
pub fn flatten_to_scalars(batch: &BatchResult) -> MappedScalarResult {
    let mut mapped = MappedScalarResult::default();

    for call in &batch.calls {
        let Some(first) = call.first_value() else {
            debug!(
                reference = %batch.reference,
                method = %call.method_name,
                success = call.success,
                "call returned no value"
            );
            mapped.record_error(&call.method_name);
            continue;
        };

        match to_scalar(first) {
            Some(value) => {
                trace!(method = %call.method_name, %value, "mapped call");
                mapped.record_value(&call.method_name, value);
            }
            None => {
                debug!(
                    reference = %batch.reference,
                    method = %call.method_name,
                    "unsupported return shape"
                );
                mapped.record_error(&call.method_name);
            }
        }
    }

    mapped
}

/// Number the strategies of `vault_address` by queue position.
///
/// A vault with no entry in the batch yields an empty list.
pub fn map_queue_indexes(vault_address: &str, batch: &BatchResult) -> Vec<QueueIndexEntry> {
    let matched = batch.calls.iter().find(|call| {
        call.method_parameters
            .first()
            .and_then(DecodedValue::as_str)
            .is_some_and(|param| param.eq_ignore_ascii_case(vault_address))
    });

    let Some(call) = matched else {
        debug!(vault = %vault_address, reference = %batch.reference, "vault not in strategies batch");
        return Vec::new();
    };

    call.return_values
        .iter()
        .enumerate()
        .map(|(queue_index, value)| QueueIndexEntry {
            queue_index,
            address: value.to_string().to_lowercase(),
        })
        .collect()
}

/// Look up the strategies-helper batch by reference and map the vault's queue.
///
/// A missing reference means the response does not match the request and
/// is reported as an error rather than an empty queue.
pub fn map_queue_indexes_from_results(
    vault_address: &str,
    results: &ContractCallResults,
    strategies_helper_reference: &str,
) -> Result<Vec<QueueIndexEntry>, MapError> {
    let batch = results
        .get(strategies_helper_reference)
        .ok_or_else(|| MapError::MissingReference {
            reference: strategies_helper_reference.to_string(),
        })?;
    Ok(map_queue_indexes(vault_address, batch))
}
