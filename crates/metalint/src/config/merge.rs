//! Coercion rules for partial configuration overrides.
//!
//! Every override goes through these helpers so that the permissive merge
//! semantics live in one place.

use serde_json::Value;

use crate::error::{MetalintError, Result};

/// Truthiness of a JSON value.
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Integer conversion of a JSON value, accepting floats and numeric strings.
///
/// Fractions are truncated toward zero and negatives clamp to zero.
pub(crate) fn integer(key: &str, value: &Value) -> Result<usize> {
    let number = match value {
        Value::Bool(b) => Some(f64::from(u8::from(*b))),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(n) if n.is_finite() => Ok(n.trunc().max(0.0) as usize),
        _ => Err(invalid(key, value)),
    }
}

/// A list of free-form terms, replacing the previous list wholesale.
pub(crate) fn terms(key: &str, value: &Value) -> Result<Vec<String>> {
    let Value::Array(items) = value else {
        return Err(invalid(key, value));
    };
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(invalid(key, other)),
        })
        .collect()
}

/// A string value; `null` means "unset".
pub(crate) fn optional_string(key: &str, value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => Err(invalid(key, other)),
    }
}

fn invalid(key: &str, value: &Value) -> MetalintError {
    MetalintError::InvalidSetting {
        key: key.to_string(),
        value: value.to_string(),
    }
}
