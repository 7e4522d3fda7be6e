//! Field-level decoding for untrusted records. A null or wrongly typed
//! secondary field falls back to its default instead of failing the record.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::services::schedule_utils::Minutes;

pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = JsonValue::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Criticality is assumed when the flag is absent, null or not a boolean.
pub fn flag_or_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(true))
}

pub fn minutes<'de, D>(deserializer: D) -> Result<Minutes, D::Error>
where
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;
    let minutes = value
        .as_i64()
        .or_else(|| value.as_f64().filter(|m| m.is_finite()).map(|m| m.round() as Minutes));
    Ok(minutes.unwrap_or_default())
}

/// A list of records where each malformed element is skipped on its own.
/// Anything other than an array decodes as empty.
pub fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match JsonValue::deserialize(deserializer)? {
        JsonValue::Array(values) => Ok(decode_records(values, "record")),
        JsonValue::Null => Ok(Vec::new()),
        other => {
            debug!(target: "app::command", value = %other, "expected a list of records");
            Ok(Vec::new())
        }
    }
}

pub fn decode_records<T: DeserializeOwned>(values: Vec<JsonValue>, kind: &'static str) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(err) => {
                debug!(target: "app::command", kind, index, error = %err, "skipping malformed record");
                None
            }
        })
        .collect()
}
