//! Decoding helpers for the backend's loosely-typed JSON.
//!
//! The backend is inconsistent about envelopes (`{success, data}`,
//! `{articles: [...]}`, bare arrays) and about scalar encodings (flags as
//! `true`/`1`/`"1"`, decimals as strings). Everything here collapses those
//! variants into one shape before the rest of the crate sees them.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

use super::types::ApiError;

const ENVELOPE_KEYS: [&str; 2] = ["data", "items"];

fn value_to_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|v| v != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" | "" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_flag(&value))
}

pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_f64(&value))
}

pub fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_f64(&value)
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v as u64)
        .unwrap_or(0))
}

pub fn id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .ok_or_else(|| serde::de::Error::custom(format!("invalid id: {}", value)))
}

/// Accepts a JSON array of strings or a single comma-separated string.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let items = match value {
        Value::Array(values) => values
            .into_iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        Value::String(joined) => joined.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    };
    Ok(items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

/// Accepts a JSON array of strings or a single newline-separated string.
pub fn line_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let items: Vec<String> = match value {
        Value::Array(values) => values
            .into_iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        Value::String(text) => text.lines().map(str::to_string).collect(),
        _ => Vec::new(),
    };
    Ok(items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

fn rejected_envelope(body: &Value) -> Option<ApiError> {
    let map = body.as_object()?;
    if map.get("success").and_then(value_to_flag) != Some(false) {
        return None;
    }
    let message = map
        .get("error")
        .or_else(|| map.get("message"))
        .and_then(Value::as_str)
        .unwrap_or("Request failed");
    Some(ApiError::unknown(message))
}

fn locate_list(body: Value, keys: &[&str]) -> Option<Vec<Value>> {
    match body {
        Value::Array(values) => Some(values),
        Value::Object(mut map) => keys
            .iter()
            .chain(ENVELOPE_KEYS.iter())
            .find_map(|key| map.remove(*key))
            .and_then(|inner| locate_list(inner, keys)),
        _ => None,
    }
}

fn locate_item(body: Value, keys: &[&str]) -> Value {
    if let Value::Object(map) = &body {
        let nested = keys
            .iter()
            .chain(ENVELOPE_KEYS.iter().take(1))
            .find(|key| map.get(**key).map(Value::is_object).unwrap_or(false));
        if let Some(key) = nested {
            if let Value::Object(mut map) = body {
                if let Some(inner) = map.remove(*key) {
                    return locate_item(inner, keys);
                }
            }
            return Value::Null;
        }
    }
    body
}

/// Pulls a list out of any supported envelope. Records that fail to decode
/// are skipped so one malformed row does not blank a whole page.
pub fn decode_list<T: DeserializeOwned>(body: Value, keys: &[&str]) -> Result<Vec<T>, ApiError> {
    if let Some(error) = rejected_envelope(&body) {
        return Err(error);
    }
    if body.is_null() {
        return Ok(Vec::new());
    }
    let values = locate_list(body, keys)
        .ok_or_else(|| ApiError::unknown("Unexpected response shape"))?;
    Ok(values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<T>(value) {
            Ok(item) => Some(item),
            Err(err) => {
                log::warn!("Skipping malformed record: {}", err);
                None
            }
        })
        .collect())
}

pub fn decode_item<T: DeserializeOwned>(body: Value, keys: &[&str]) -> Result<T, ApiError> {
    if let Some(error) = rejected_envelope(&body) {
        return Err(error);
    }
    serde_json::from_value(locate_item(body, keys))
        .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
}
