//! Flatten nested decoded arrays into lower-cased strings.

use vaultlens_core::DecodedValue;

/// Depth-first flattening; every leaf becomes its lower-cased display form.
pub fn flatten_arrays(values: &[DecodedValue]) -> Vec<String> {
    let mut out = Vec::new();
    flatten_into(values, &mut out);
    out
}

fn flatten_into(values: &[DecodedValue], out: &mut Vec<String>) {
    for value in values {
        match value {
            DecodedValue::Array(inner) => flatten_into(inner, out),
            leaf => out.push(leaf.to_string().to_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flattens_nested_mixed_values() {
        let input = vec![
            DecodedValue::Number(1.0),
            DecodedValue::Array(vec![
                DecodedValue::Number(2.0),
                DecodedValue::Array(vec![DecodedValue::Number(3.0), DecodedValue::Number(4.0)]),
            ]),
            DecodedValue::from("A"),
        ];
        assert_eq!(flatten_arrays(&input), vec!["1", "2", "3", "4", "a"]);
    }

    #[test]
    fn flattens_wire_json() {
        let input: Vec<DecodedValue> = serde_json::from_value(json!([
            ["0xAbC", ["0xDEF"]],
            [],
            { "type": "BigNumber", "hex": "0x10" },
            true
        ]))
        .unwrap();
        assert_eq!(flatten_arrays(&input), vec!["0xabc", "0xdef", "16", "true"]);
    }
}
