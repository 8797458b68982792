//! # vaultlens-format
//!
//! Formatting and arithmetic helpers for presenting vault data: token
//! amounts, unit conversion, shortened addresses, and simple statistics.
//!
//! Amount math is exact: raw token amounts are handled as 256-bit integers,
//! unit conversion returns exact decimal strings, and abbreviated human
//! amounts use `rust_decimal::Decimal`.

pub mod amount;
pub mod error;
pub mod flatten;
pub mod stats;
pub mod text;
pub mod units;

pub use amount::{amount_to_mms, amount_to_string, display_amount, DEFAULT_PRECISION, INFINITY_DISPLAY};
pub use error::FormatError;
pub use flatten::flatten_arrays;
pub use stats::{average, median, sum_all};
pub use text::{extract_address, extract_text};
pub use units::{format_bps, ms_to_hours, sub, to_decimals, to_units};
