//! Human-readable token amounts.

use crate::error::FormatError;
use alloy_primitives::{U256, U512};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Default number of fractional digits for `display_amount`.
pub const DEFAULT_PRECISION: u32 = 5;

/// Rendering of an unlimited (`uint256` max) allowance or limit.
pub const INFINITY_DISPLAY: &str = " ∞";

/// Largest power of ten a raw `uint256` amount is ever divided by.
pub(crate) const MAX_DECIMALS: u32 = 77;

const MILLION: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
const HUNDRED_THOUSAND: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// Abbreviate a (non-negative) human amount for dashboards.
///
/// `>= 1,000,000` is shown in millions (`"1.50 MM"`); `>= 100,000` is divided
/// by 100,000 and suffixed `K` (`150,000` → `"1.50 K"`); anything smaller is
/// printed with two decimals.
pub fn amount_to_string(amount: Decimal) -> String {
    if amount >= MILLION {
        return format!("{} MM", fixed_2(amount / MILLION));
    }
    if amount >= HUNDRED_THOUSAND {
        return format!("{} K", fixed_2(amount / HUNDRED_THOUSAND));
    }
    fixed_2(amount)
}

fn fixed_2(d: Decimal) -> String {
    format!(
        "{:.2}",
        d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Amount expressed in millions.
pub fn amount_to_mms(amount: Decimal) -> f64 {
    (amount / MILLION).to_f64().unwrap_or(f64::NAN)
}

/// Render a raw integer token amount in whole-token units.
///
/// The amount is divided by `10^decimals` and rounded half-up to `precision`
/// fractional digits (default 5). The integer part is grouped in thousands
/// with `,`; an all-zero fractional part is dropped. `uint256::MAX` renders
/// as `" ∞"`.
pub fn display_amount(
    amount: &str,
    decimals: u32,
    precision: Option<u32>,
) -> Result<String, FormatError> {
    let precision = precision.unwrap_or(DEFAULT_PRECISION);
    let invalid = || FormatError::InvalidAmount {
        input: amount.to_string(),
    };
    let digits = amount.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let raw = U256::from_str_radix(digits, 10).map_err(|_| invalid())?;
    if raw == U256::MAX {
        return Ok(INFINITY_DISPLAY.to_string());
    }
    for n in [decimals, precision] {
        if n > MAX_DECIMALS {
            return Err(FormatError::TooManyDecimals {
                decimals: n,
                max: MAX_DECIMALS,
            });
        }
    }

    let scale = pow10(precision)?;
    let divisor = pow10(decimals)?;
    let numerator = U512::from_limbs_slice(raw.as_limbs())
        .checked_mul(scale)
        .ok_or(FormatError::Overflow { op: "display_amount" })?;
    // half-up: amounts are unsigned
    let scaled = (numerator + divisor / U512::from(2u64)) / divisor;

    let int_part = group_thousands(&(scaled / scale).to_string());
    let frac = scaled % scale;
    if precision == 0 || frac.is_zero() {
        return Ok(int_part);
    }
    Ok(format!(
        "{int_part}.{:0>width$}",
        frac.to_string(),
        width = precision as usize
    ))
}

fn pow10(exp: u32) -> Result<U512, FormatError> {
    U512::from(10u64)
        .checked_pow(U512::from(exp))
        .ok_or(FormatError::Overflow { op: "pow10" })
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
