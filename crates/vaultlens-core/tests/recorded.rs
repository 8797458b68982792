//! Recorded multicall fixture tests.
//!
//! Loads a captured multicall response from `fixtures/multicall/`, replays it
//! through `RecordedCaller`, and checks the mapped output.

use vaultlens_core::{
    flatten_to_scalars, map_queue_indexes_from_results, strategies_helper_calls, BatchCaller,
    ContractAddresses, ContractCallContext, MapError, QueueIndexEntry, RecordedCaller,
    ScalarValue, VaultRef,
};

const VAULT: &str = "0x5F18C75AbDAe578b483E5F43f12a39cF75b973a9";

/// The fixtures live two levels above the crate root.
fn fixture_path(name: &str) -> std::path::PathBuf {
    let mut p = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("../../fixtures/multicall");
    p.push(name);
    p
}

fn recorded() -> RecordedCaller {
    RecordedCaller::from_json_file(&fixture_path("vault-batch.json")).expect("fixture not found")
}

fn vault_context() -> ContractCallContext {
    ContractCallContext {
        reference: VAULT.into(),
        contract_address: VAULT.into(),
        calls: vec![],
    }
}

// ─── Vault getters ────────────────────────────────────────────────────────────

#[test]
fn vault_getters_flatten() {
    let results = recorded().call(&[vault_context()]).unwrap();
    let batch = results.get(VAULT).expect("vault batch");
    assert_eq!(batch.reference, VAULT);

    let mapped = flatten_to_scalars(batch);

    assert_eq!(mapped.text("name"), Some("yvUSDC 0.3.0"));
    assert_eq!(mapped.get("decimals"), Some(&ScalarValue::Number(6.0)));
    assert_eq!(mapped.get("emergencyShutdown"), Some(&ScalarValue::Bool(false)));
    assert_eq!(mapped.text("pricePerShare"), Some("1000000"));
    assert_eq!(
        mapped.text("depositLimit"),
        Some("115792089237316195423570985008687907853269984665640564039457584007913129639935")
    );
    assert_eq!(mapped.errors, vec!["guardian", "strategies"]);
    assert_eq!(mapped.values.len() + mapped.errors.len(), batch.len());
}

// ─── Strategies helper ────────────────────────────────────────────────────────

#[test]
fn strategies_queue_from_recorded_response() {
    let addresses = ContractAddresses::default();
    let ctx = strategies_helper_calls(&[VaultRef::new(VAULT)], &addresses);
    let results = recorded().call(&[ctx]).unwrap();

    let queue =
        map_queue_indexes_from_results(VAULT, &results, &addresses.strategies_helper).unwrap();

    assert_eq!(
        queue,
        vec![
            QueueIndexEntry { queue_index: 0, address: "0x336600990ae039b4acbbe6b4ff4a7feb6b2b37c1".into() },
            QueueIndexEntry { queue_index: 1, address: "0x2f194da57aa855caa02ea3ab991fa5d38178b9e6".into() },
            QueueIndexEntry { queue_index: 2, address: "0x4d7d4485fd600c61d840ccbec328bfd76a050f87".into() },
        ]
    );
}

#[test]
fn unindexed_vault_has_empty_queue() {
    let addresses = ContractAddresses::default();
    let results = recorded().recorded().clone();
    let queue = map_queue_indexes_from_results(
        "0x0000000000000000000000000000000000000001",
        &results,
        &addresses.strategies_helper,
    )
    .unwrap();
    assert!(queue.is_empty());
}

#[test]
fn wrong_helper_reference_fails_loudly() {
    let results = recorded().recorded().clone();
    let err = map_queue_indexes_from_results(VAULT, &results, "0xdeadbeef").unwrap_err();
    assert!(matches!(err, MapError::MissingReference { .. }));
}
