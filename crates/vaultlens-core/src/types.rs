//! Decoded multicall values.
//!
//! The multicall collaborator hands back loosely-typed JSON: primitives,
//! nested arrays, and `{"type": "BigNumber", "hex": "0x..."}` objects for
//! 256-bit integers. VaultLens converts those into a single tagged union at
//! the boundary so the mapper can dispatch on the variant instead of probing
//! object shapes.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Tag value the collaborator uses for 256-bit integers.
pub const BIG_NUMBER_TAG: &str = "BigNumber";

/// A single decoded return value or call parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum DecodedValue {
    Str(String),
    Bool(bool),
    /// Native (double precision) number
    Number(f64),
    /// 256-bit integer magnitude with a sign
    BigInt(BigInteger),
    Array(Vec<DecodedValue>),
    /// Any shape the mapper does not understand (null, plain objects, ...)
    Other(Value),
}

impl DecodedValue {
    /// Returns the inner string if this is a `Str` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DecodedValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns `true` for strings, booleans and native numbers.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            DecodedValue::Str(_) | DecodedValue::Bool(_) | DecodedValue::Number(_)
        )
    }

    /// Build a `BigInt` from a (possibly negative) `0x` hex string.
    pub fn big_int_from_hex(hex: &str) -> Option<Self> {
        BigInteger::from_hex(hex).map(DecodedValue::BigInt)
    }
}

/// A big integer as the collaborator reports it: any `uint256`, or the
/// negation of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BigInteger {
    pub negative: bool,
    pub magnitude: U256,
}

impl BigInteger {
    pub fn from_hex(s: &str) -> Option<Self> {
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let digits = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X"))?;
        let magnitude = U256::from_str_radix(digits, 16).ok()?;
        Some(Self {
            negative: negative && !magnitude.is_zero(),
            magnitude,
        })
    }

    pub fn to_hex(&self) -> String {
        let sign = if self.negative { "-" } else { "" };
        format!("{sign}0x{:x}", self.magnitude)
    }
}

impl From<U256> for BigInteger {
    fn from(magnitude: U256) -> Self {
        Self {
            negative: false,
            magnitude,
        }
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}", self.magnitude)
    }
}

impl From<Value> for DecodedValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => DecodedValue::Str(s),
            Value::Bool(b) => DecodedValue::Bool(b),
            Value::Number(n) => match n.as_f64() {
                Some(f) => DecodedValue::Number(f),
                None => DecodedValue::Other(Value::Number(n)),
            },
            Value::Array(items) => {
                DecodedValue::Array(items.into_iter().map(DecodedValue::from).collect())
            }
            Value::Object(obj) => big_number_from_object(&obj)
                .unwrap_or(DecodedValue::Other(Value::Object(obj))),
            Value::Null => DecodedValue::Other(Value::Null),
        }
    }
}

fn big_number_from_object(obj: &Map<String, Value>) -> Option<DecodedValue> {
    if obj.get("type").and_then(Value::as_str) != Some(BIG_NUMBER_TAG) {
        return None;
    }
    let hex = obj.get("hex").and_then(Value::as_str)?;
    DecodedValue::big_int_from_hex(hex)
}

impl From<DecodedValue> for Value {
    fn from(value: DecodedValue) -> Self {
        match value {
            DecodedValue::Str(s) => Value::String(s),
            DecodedValue::Bool(b) => Value::Bool(b),
            DecodedValue::Number(f) => number_to_json(f),
            DecodedValue::BigInt(i) => {
                let mut obj = Map::new();
                obj.insert("type".into(), Value::String(BIG_NUMBER_TAG.into()));
                obj.insert("hex".into(), Value::String(i.to_hex()));
                Value::Object(obj)
            }
            DecodedValue::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            DecodedValue::Other(v) => v,
        }
    }
}

/// Integral floats are written as JSON integers, matching what the
/// collaborator emits for small numeric outputs.
fn number_to_json(f: f64) -> Value {
    if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        return Value::Number(Number::from(f as i64));
    }
    Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
}

impl From<&str> for DecodedValue {
    fn from(s: &str) -> Self {
        DecodedValue::Str(s.to_string())
    }
}

impl From<String> for DecodedValue {
    fn from(s: String) -> Self {
        DecodedValue::Str(s)
    }
}

impl From<bool> for DecodedValue {
    fn from(b: bool) -> Self {
        DecodedValue::Bool(b)
    }
}

impl From<f64> for DecodedValue {
    fn from(f: f64) -> Self {
        DecodedValue::Number(f)
    }
}

impl From<BigInteger> for DecodedValue {
    fn from(i: BigInteger) -> Self {
        DecodedValue::BigInt(i)
    }
}

impl From<U256> for DecodedValue {
    fn from(u: U256) -> Self {
        DecodedValue::BigInt(u.into())
    }
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedValue::Str(s) => write!(f, "{s}"),
            DecodedValue::Bool(b) => write!(f, "{b}"),
            DecodedValue::Number(n) => write!(f, "{n}"),
            DecodedValue::BigInt(i) => write!(f, "{i}"),
            DecodedValue::Array(items) => {
                let parts: Vec<_> = items.iter().map(|x| x.to_string()).collect();
                write!(f, "{}", parts.join(","))
            }
            DecodedValue::Other(v) => write!(f, "{v}"),
        }
    }
}

/// A flattened scalar call result.
///
/// Big integers are carried as `Text` holding their exact decimal form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Text(String),
    Bool(bool),
    Number(f64),
}

impl ScalarValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ScalarValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Text(s) => write!(f, "{s}"),
            ScalarValue::Bool(b) => write!(f, "{b}"),
            ScalarValue::Number(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn big_number_object_becomes_big_int() {
        let v: DecodedValue = serde_json::from_value(json!({
            "type": "BigNumber",
            "hex": "0x0de0b6b3a7640000"
        }))
        .unwrap();
        assert_eq!(v.to_string(), "1000000000000000000");
    }

    #[test]
    fn negative_big_number() {
        let v: DecodedValue =
            serde_json::from_value(json!({ "type": "BigNumber", "hex": "-0x0a" })).unwrap();
        assert_eq!(v.to_string(), "-10");
        let back = serde_json::to_value(&v).unwrap();
        assert_eq!(back, json!({ "type": "BigNumber", "hex": "-0xa" }));
    }

    #[test]
    fn max_uint256_fits() {
        let v = DecodedValue::big_int_from_hex(
            "0xffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        )
        .unwrap();
        assert_eq!(v, DecodedValue::from(U256::MAX));
    }

    #[test]
    fn malformed_hex_is_other() {
        let v: DecodedValue =
            serde_json::from_value(json!({ "type": "BigNumber", "hex": "0xzz" })).unwrap();
        assert!(matches!(v, DecodedValue::Other(_)));
    }

    #[test]
    fn untagged_object_is_other() {
        let v: DecodedValue = serde_json::from_value(json!({ "hex": "0x01" })).unwrap();
        assert!(matches!(v, DecodedValue::Other(_)));
        let null: DecodedValue = serde_json::from_value(Value::Null).unwrap();
        assert_eq!(null, DecodedValue::Other(Value::Null));
    }

    #[test]
    fn nested_arrays_decode() {
        let v: DecodedValue = serde_json::from_value(json!(["0xAA", [1, true]])).unwrap();
        assert_eq!(
            v,
            DecodedValue::Array(vec![
                DecodedValue::Str("0xAA".into()),
                DecodedValue::Array(vec![DecodedValue::Number(1.0), DecodedValue::Bool(true)]),
            ])
        );
        assert_eq!(v.to_string(), "0xAA,1,true");
    }

    #[test]
    fn integral_numbers_serialize_as_integers() {
        assert_eq!(serde_json::to_value(DecodedValue::Number(18.0)).unwrap(), json!(18));
        assert_eq!(serde_json::to_value(DecodedValue::Number(0.5)).unwrap(), json!(0.5));
    }

    #[test]
    fn scalar_value_is_untagged() {
        assert_eq!(
            serde_json::to_value(ScalarValue::Text("42".into())).unwrap(),
            json!("42")
        );
        assert_eq!(serde_json::to_value(ScalarValue::Bool(true)).unwrap(), json!(true));
    }
}
