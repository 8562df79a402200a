//! Validation and normalization of request parameters held as JSON.

use serde_json::{Map, Value};

/// Recursively replaces every `null` with an empty string.
pub fn null_to_empty(value: Value) -> Value {
    match value {
        Value::Null => Value::String(String::new()),
        Value::Array(items) => Value::Array(items.into_iter().map(null_to_empty).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, null_to_empty(value)))
                .collect(),
        ),
        other => other,
    }
}

/// Whether a required parameter counts as missing.
///
/// `null`, `false`, `""`, `0.0` and empty containers are blank; the integer
/// `0` and the string `"0"` are valid values.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0) && !(n.is_i64() || n.is_u64()),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Picks `required` and `optional` keys out of `data`.
///
/// Returns `None` as soon as a required key is absent or blank. Optional
/// keys are copied as `null` when absent.
pub fn require(
    data: &Map<String, Value>,
    required: &[&str],
    optional: &[&str],
) -> Option<Map<String, Value>> {
    let mut picked = Map::new();

    for key in required {
        let value = data.get(*key).filter(|v| !is_blank(v))?;
        picked.insert(key.to_string(), value.clone());
    }

    for key in optional {
        let value = data.get(*key).cloned().unwrap_or(Value::Null);
        picked.insert(key.to_string(), value);
    }

    Some(picked)
}

/// Numeric value of a JSON number or numeric string.
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Picks numeric `required` keys that are `>= 0` (or `> 0` when
/// `strictly_positive`), plus whichever `optional` keys are present.
pub fn require_non_negative(
    data: &Map<String, Value>,
    required: &[&str],
    optional: &[&str],
    strictly_positive: bool,
) -> Option<Map<String, Value>> {
    let mut picked = Map::new();

    for key in required {
        let value = data.get(*key)?;
        let number = numeric(value)?;
        if number < 0.0 || (strictly_positive && number == 0.0) {
            return None;
        }
        picked.insert(key.to_string(), value.clone());
    }

    for key in optional {
        if let Some(value) = data.get(*key) {
            picked.insert(key.to_string(), value.clone());
        }
    }

    Some(picked)
}

/// Checks for a positive integer or an all-digit string above zero.
///
/// Arrays pass when they are non-empty and every element passes.
pub fn is_positive_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_u64().is_some_and(|v| v > 0),
        Value::String(s) => {
            !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) && s.bytes().any(|b| b != b'0')
        }
        Value::Array(items) => !items.is_empty() && items.iter().all(is_positive_integer),
        _ => false,
    }
}

/// Parses a JSON document, returning `None` when it is malformed.
pub fn parse_json(json: &str) -> Option<Value> {
    serde_json::from_str(json).ok()
}
