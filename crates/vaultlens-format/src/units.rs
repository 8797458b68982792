//! Unit conversion and small numeric helpers.

use crate::amount::MAX_DECIMALS;
use crate::error::FormatError;
use alloy_primitives::{I256, U256};

/// A decimal number held as `mantissa / 10^scale`.
struct Fixed {
    negative: bool,
    mantissa: U256,
    scale: u32,
}

impl Fixed {
    /// Parse `[-]digits[.digits]`; the digits without the point must fit in 256 bits.
    fn parse(amount: &str) -> Result<Self, FormatError> {
        let invalid = || FormatError::InvalidAmount {
            input: amount.to_string(),
        };
        let trimmed = amount.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (int_digits, frac_digits) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let digits = format!("{int_digits}{frac_digits}");
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let mantissa = U256::from_str_radix(&digits, 10).map_err(|_| invalid())?;
        Ok(Self {
            negative: negative && !mantissa.is_zero(),
            mantissa,
            scale: frac_digits.len() as u32,
        })
    }

    /// Plain decimal string without trailing fractional zeros.
    fn render(&self) -> String {
        let sign = if self.negative { "-" } else { "" };
        let digits = self.mantissa.to_string();
        let scale = self.scale as usize;
        if scale == 0 {
            return format!("{sign}{digits}");
        }
        let padded = format!("{digits:0>width$}", width = scale + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);
        let frac_part = frac_part.trim_end_matches('0');
        if frac_part.is_empty() {
            format!("{sign}{int_part}")
        } else {
            format!("{sign}{int_part}.{frac_part}")
        }
    }
}

fn check_decimals(decimals: u32) -> Result<(), FormatError> {
    if decimals > MAX_DECIMALS {
        return Err(FormatError::TooManyDecimals {
            decimals,
            max: MAX_DECIMALS,
        });
    }
    Ok(())
}

/// Raw amount → whole-token units (`amount / 10^decimals`), as an exact
/// decimal string.
///
/// Accepts anything up to `uint256` magnitude, e.g. a raw `1e33` at 18
/// decimals gives `"1000000000000000"`.
pub fn to_units(amount: &str, decimals: u32) -> Result<String, FormatError> {
    check_decimals(decimals)?;
    let mut value = Fixed::parse(amount)?;
    value.scale += decimals;
    Ok(value.render())
}

/// Whole-token units → raw amount (`amount * 10^decimals`), as an exact
/// decimal string. The shifted digits must stay within `uint256`.
pub fn to_decimals(amount: &str, decimals: u32) -> Result<String, FormatError> {
    check_decimals(decimals)?;
    let mut value = Fixed::parse(amount)?;
    if decimals <= value.scale {
        value.scale -= decimals;
        return Ok(value.render());
    }
    let factor = U256::from(10u64)
        .checked_pow(U256::from(decimals - value.scale))
        .ok_or(FormatError::Overflow { op: "to_decimals" })?;
    value.mantissa = value
        .mantissa
        .checked_mul(factor)
        .ok_or(FormatError::Overflow { op: "to_decimals" })?;
    value.scale = 0;
    Ok(value.render())
}

/// Exact `a - b` on signed 256-bit integer strings.
pub fn sub(amount_a: &str, amount_b: &str) -> Result<String, FormatError> {
    let parse = |s: &str| {
        I256::from_dec_str(s.trim()).map_err(|_| FormatError::InvalidAmount {
            input: s.to_string(),
        })
    };
    parse(amount_a)?
        .checked_sub(parse(amount_b)?)
        .map(|d| d.to_string())
        .ok_or(FormatError::Overflow { op: "sub" })
}

/// Basis points → percent, e.g. `"250"` → `"2.5"`.
pub fn format_bps(val: &str) -> Result<String, FormatError> {
    let bps: i64 = val.trim().parse().map_err(|_| FormatError::InvalidAmount {
        input: val.to_string(),
    })?;
    Ok((bps as f64 / 100.0).to_string())
}

/// Milliseconds → hours, rounded to two decimals.
pub fn ms_to_hours(ms: u64) -> f64 {
    let hours = ms as f64 / (1000.0 * 60.0 * 60.0);
    (hours * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_UINT256: &str =
        "115792089237316195423570985008687907853269984665640564039457584007913129639935";

    #[test]
    fn to_units_shifts_point() {
        assert_eq!(to_units("1500000", 6).unwrap(), "1.5");
        assert_eq!(to_units("1000000000000000000", 18).unwrap(), "1");
        assert_eq!(to_units("5", 6).unwrap(), "0.000005");
        assert_eq!(to_units("-2500", 3).unwrap(), "-2.5");
        assert_eq!(to_units("0", 18).unwrap(), "0");
        assert_eq!(to_units("42", 0).unwrap(), "42");
    }

    #[test]
    fn to_units_beyond_decimal_range() {
        // 1e15 tokens at 18 decimals
        assert_eq!(
            to_units("1000000000000000000000000000000000", 18).unwrap(),
            "1000000000000000"
        );
        assert_eq!(
            to_units(MAX_UINT256, 18).unwrap(),
            "115792089237316195423570985008687907853269984665640564039457.584007913129639935"
        );
    }

    #[test]
    fn to_decimals_shifts_point() {
        assert_eq!(to_decimals("1.5", 6).unwrap(), "1500000");
        assert_eq!(to_decimals("1.2345678", 6).unwrap(), "1234567.8");
        assert_eq!(to_decimals("0.000001", 6).unwrap(), "1");
        assert_eq!(
            to_decimals("1000000000000000", 18).unwrap(),
            "1000000000000000000000000000000000"
        );
    }

    #[test]
    fn units_errors() {
        for bad in ["abc", "", "  ", "-", "1.2.3", "1e18", "+5"] {
            assert_eq!(
                to_units(bad, 6),
                Err(FormatError::InvalidAmount { input: bad.into() }),
                "{bad:?}"
            );
        }
        assert_eq!(
            to_units("1", 78),
            Err(FormatError::TooManyDecimals { decimals: 78, max: 77 })
        );
        assert_eq!(
            to_decimals(MAX_UINT256, 1),
            Err(FormatError::Overflow { op: "to_decimals" })
        );
    }

    #[test]
    fn sub_exact_and_signed() {
        assert_eq!(sub("1000000000000000000000", "1").unwrap(), "999999999999999999999");
        assert_eq!(sub("1", "3").unwrap(), "-2");
        assert!(sub("1.5", "1").is_err());
    }

    #[test]
    fn bps_to_percent() {
        assert_eq!(format_bps("250").unwrap(), "2.5");
        assert_eq!(format_bps("10000").unwrap(), "100");
        assert_eq!(format_bps("-50").unwrap(), "-0.5");
        assert!(format_bps("ten").is_err());
    }

    #[test]
    fn hours_two_decimals() {
        assert_eq!(ms_to_hours(3_600_000), 1.0);
        assert_eq!(ms_to_hours(5_400_000), 1.5);
        assert_eq!(ms_to_hours(1_000_000), 0.28);
    }
}
