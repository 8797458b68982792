//! Request and response shapes exchanged with the multicall collaborator.
//!
//! The request side (`CallContext`, `ContractCallContext`) is plain data: ABI
//! encoding and the network round trip happen on the other side of the
//! `BatchCaller` seam. Field names on the wire are camelCase.

use crate::config::ContractAddresses;
use crate::types::DecodedValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Method on the strategies helper returning a vault's ordered strategy list.
pub const ASSET_STRATEGIES_ADDRESSES: &str = "assetStrategiesAddresses";

/// Outcome of one call inside a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallResult {
    pub method_name: String,
    pub success: bool,
    /// Decoded outputs in ABI order; empty when the call produced nothing
    #[serde(default)]
    pub return_values: Vec<DecodedValue>,
    /// Arguments the call was made with, used to correlate results
    #[serde(default)]
    pub method_parameters: Vec<DecodedValue>,
}

impl CallResult {
    pub fn ok(method_name: impl Into<String>, return_values: Vec<DecodedValue>) -> Self {
        Self {
            method_name: method_name.into(),
            success: true,
            return_values,
            method_parameters: vec![],
        }
    }

    pub fn failed(method_name: impl Into<String>) -> Self {
        Self {
            method_name: method_name.into(),
            success: false,
            return_values: vec![],
            method_parameters: vec![],
        }
    }

    pub fn with_parameters(mut self, params: Vec<DecodedValue>) -> Self {
        self.method_parameters = params;
        self
    }

    /// First return value, if the call succeeded and produced one.
    pub fn first_value(&self) -> Option<&DecodedValue> {
        if self.success {
            self.return_values.first()
        } else {
            None
        }
    }
}

/// All call results for one reference (one target contract).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    #[serde(default)]
    pub reference: String,
    #[serde(rename = "callsReturnContext")]
    pub calls: Vec<CallResult>,
}

impl BatchResult {
    pub fn new(reference: impl Into<String>, calls: Vec<CallResult>) -> Self {
        Self {
            reference: reference.into(),
            calls,
        }
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

/// Full multicall response: reference → batch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawCallResults")]
pub struct ContractCallResults {
    pub results: HashMap<String, BatchResult>,
}

#[derive(Deserialize)]
struct RawCallResults {
    results: HashMap<String, BatchResult>,
}

impl From<RawCallResults> for ContractCallResults {
    // batches nested under a reference key usually omit their own reference
    fn from(raw: RawCallResults) -> Self {
        let results = raw
            .results
            .into_iter()
            .map(|(reference, mut batch)| {
                if batch.reference.is_empty() {
                    batch.reference = reference.clone();
                }
                (reference, batch)
            })
            .collect();
        Self { results }
    }
}

impl ContractCallResults {
    pub fn get(&self, reference: &str) -> Option<&BatchResult> {
        self.results.get(reference)
    }

    pub fn insert(&mut self, batch: BatchResult) {
        self.results.insert(batch.reference.clone(), batch);
    }
}

/// One call to include in a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallContext {
    pub method_name: String,
    pub method_parameters: Vec<DecodedValue>,
    pub reference: String,
}

/// A batch of calls against a single contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractCallContext {
    pub reference: String,
    pub contract_address: String,
    pub calls: Vec<CallContext>,
}

/// Minimal vault handle needed to build per-vault calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VaultRef {
    pub address: String,
}

impl VaultRef {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

/// Build one `assetStrategiesAddresses(vault)` call per vault against the
/// configured strategies helper.
pub fn strategies_helper_calls(
    vaults: &[VaultRef],
    addresses: &ContractAddresses,
) -> ContractCallContext {
    let helper = addresses.strategies_helper.clone();
    let calls = vaults
        .iter()
        .map(|vault| CallContext {
            method_name: ASSET_STRATEGIES_ADDRESSES.to_string(),
            method_parameters: vec![DecodedValue::Str(vault.address.clone())],
            reference: helper.clone(),
        })
        .collect();

    ContractCallContext {
        reference: helper.clone(),
        contract_address: helper,
        calls,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn call_result_from_wire_json() {
        let call: CallResult = serde_json::from_value(json!({
            "methodName": "totalAssets",
            "success": true,
            "returnValues": [{ "type": "BigNumber", "hex": "0x64" }],
            "methodParameters": []
        }))
        .unwrap();
        assert_eq!(call.method_name, "totalAssets");
        assert_eq!(call.first_value().map(|v| v.to_string()), Some("100".into()));
    }

    #[test]
    fn missing_return_values_default_to_empty() {
        let call: CallResult =
            serde_json::from_value(json!({ "methodName": "name", "success": false })).unwrap();
        assert!(call.return_values.is_empty());
        assert!(call.first_value().is_none());
    }

    #[test]
    fn strategies_helper_calls_one_per_vault() {
        let addresses = ContractAddresses::default();
        let vaults = vec![VaultRef::new("0xVaultA"), VaultRef::new("0xVaultB")];
        let ctx = strategies_helper_calls(&vaults, &addresses);

        assert_eq!(ctx.reference, addresses.strategies_helper);
        assert_eq!(ctx.contract_address, addresses.strategies_helper);
        assert_eq!(ctx.calls.len(), 2);
        assert_eq!(ctx.calls[1].method_name, ASSET_STRATEGIES_ADDRESSES);
        assert_eq!(ctx.calls[1].method_parameters, vec![DecodedValue::from("0xVaultB")]);
        assert_eq!(ctx.calls[0].reference, addresses.strategies_helper);
    }

    #[test]
    fn helper_address_is_injected() {
        let addresses = ContractAddresses {
            strategies_helper: "0xTestHelper".into(),
            ..ContractAddresses::default()
        };
        let ctx = strategies_helper_calls(&[VaultRef::new("0x1")], &addresses);
        assert_eq!(ctx.reference, "0xTestHelper");
    }
}
