//! Error types for the formatting helpers.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid amount '{input}'")]
    InvalidAmount { input: String },

    #[error("Arithmetic overflow in {op}")]
    Overflow { op: &'static str },

    #[error("Too many decimals: {decimals} (max {max})")]
    TooManyDecimals { decimals: u32, max: u32 },
}
