//! `vaultlens display`, `abbreviate`, `stats` and `leaves`.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::str::FromStr;
use vaultlens_core::DecodedValue;
use vaultlens_format::{amount_to_string, average, display_amount, flatten_arrays, median, sum_all};

pub fn display(amount: &str, decimals: u32, precision: Option<u32>) -> Result<()> {
    println!("{}", display_amount(amount, decimals, precision)?);
    Ok(())
}

pub fn abbreviate(amount: &str) -> Result<()> {
    let amount = Decimal::from_str(amount).with_context(|| format!("invalid amount '{amount}'"))?;
    println!("{}", amount_to_string(amount));
    Ok(())
}

pub fn stats(values: &[f64]) -> Result<()> {
    // clap guarantees at least one value
    if let (Some(median), Some(average)) = (median(values), average(values)) {
        println!("count    {}", values.len());
        println!("median   {median}");
        println!("average  {average}");
        println!("sum      {}", sum_all(values));
    }
    Ok(())
}

pub fn leaves(values: &str) -> Result<()> {
    let parsed: Vec<DecodedValue> =
        serde_json::from_str(values).context("--values must be a JSON array")?;
    for leaf in flatten_arrays(&parsed) {
        println!("{leaf}");
    }
    Ok(())
}
