//! Field decoders that turn absent or mistyped values into `None`.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

fn raw<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?.filter(|v| !v.is_null()))
}

/// Non-negative integer given as a JSON number or a numeric string.
pub(crate) fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Ok(raw(deserializer)?.and_then(|value| {
        let parsed = match &value {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        if parsed.is_none() {
            warn!(%value, "Ignoring non-count value");
        }
        parsed
    }))
}

/// Decimal given as a JSON number or a numeric string.
pub(crate) fn decimal<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Decimal>, D::Error> {
    Ok(raw(deserializer)?.and_then(|value| {
        let parsed = match &value {
            Value::Number(n) => parse_decimal(&n.to_string()),
            Value::String(s) => parse_decimal(s.trim()),
            _ => None,
        };
        if parsed.is_none() {
            warn!(%value, "Ignoring non-numeric value");
        }
        parsed
    }))
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Label given as a string; numbers are accepted and stringified.
pub(crate) fn text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(raw(deserializer)?.and_then(|value| match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        other => {
            warn!(value = %other, "Ignoring non-text label");
            None
        }
    }))
}

/// Sequence of records. A non-array becomes `None`; elements that are not
/// records are skipped.
pub(crate) fn records<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(raw(deserializer)?.and_then(|value| match value {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match serde_json::from_value::<T>(item) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        warn!(error = %e, "Skipping malformed record");
                        None
                    }
                })
                .collect(),
        ),
        other => {
            warn!(value = %other, "Ignoring non-sequence field");
            None
        }
    }))
}
