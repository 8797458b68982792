//! `vaultlens flatten`, `queue` and `calls`.

use anyhow::{anyhow, Context, Result};
use std::path::Path;
use tracing::info;
use vaultlens_core::{
    flatten_to_scalars, map_queue_indexes_from_results, strategies_helper_calls,
    ContractAddresses, RecordedCaller, VaultRef,
};
use vaultlens_observability::VaultLensMetrics;

fn load(file: &Path) -> Result<RecordedCaller> {
    RecordedCaller::from_json_file(file)
        .with_context(|| format!("reading multicall response {}", file.display()))
}

fn metrics() -> VaultLensMetrics {
    VaultLensMetrics::new(&opentelemetry::global::meter("vaultlens"))
}

pub fn flatten(file: &Path, reference: Option<&str>, as_json: bool) -> Result<()> {
    let recorded = load(file)?;
    let results = recorded.recorded();
    let metrics = metrics();

    let mut references: Vec<&String> = match reference {
        Some(r) => {
            let (key, _) = results
                .results
                .get_key_value(r)
                .ok_or_else(|| anyhow!("reference '{}' not found in {}", r, file.display()))?;
            vec![key]
        }
        None => results.results.keys().collect(),
    };
    references.sort();

    let mut out = serde_json::Map::new();
    for reference in references {
        let batch = &results.results[reference];
        let mapped = flatten_to_scalars(batch);
        metrics.record_mapped(reference, &mapped);
        info!(
            reference = %reference,
            mapped = mapped.values.len(),
            errors = mapped.errors.len(),
            "flattened batch"
        );

        if as_json {
            out.insert(reference.clone(), serde_json::to_value(&mapped)?);
            continue;
        }

        println!("{reference}");
        for (method, value) in &mapped.values {
            println!("  {method:<28} {value}");
        }
        if !mapped.errors.is_empty() {
            println!("  errors: {}", mapped.errors.join(", "));
        }
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&out)?);
    }
    Ok(())
}

pub fn queue(file: &Path, vault: &str, addresses: &ContractAddresses, as_json: bool) -> Result<()> {
    let recorded = load(file)?;
    let entries =
        map_queue_indexes_from_results(vault, recorded.recorded(), &addresses.strategies_helper)?;
    metrics().record_queue(&entries);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No strategies indexed for {vault}");
        return Ok(());
    }
    for entry in &entries {
        println!("  #{:<3} {}", entry.queue_index, entry.address);
    }
    Ok(())
}

pub fn calls(vaults: &[String], addresses: &ContractAddresses) -> Result<()> {
    let vaults: Vec<VaultRef> = vaults.iter().map(VaultRef::new).collect();
    let ctx = strategies_helper_calls(&vaults, addresses);
    println!("{}", serde_json::to_string_pretty(&ctx)?);
    Ok(())
}
