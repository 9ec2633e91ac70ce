//! Forgiving field readers for contact JSON.
//!
//! A field holding the wrong JSON type reads as absent and logs a warning,
//! so one bad field never rejects the whole record. Numbers are accepted
//! where text is expected and rendered in their JSON form.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::contact::DateLike;

/// Largest magnitude of a valid epoch-millisecond timestamp (±100,000,000 days).
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

/// Keys checked, in order, when a date arrives as an object.
const DATE_OBJECT_KEYS: &[&str] = &["$date", "time", "timestamp", "value"];

pub(super) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_from(Value::deserialize(deserializer)?))
}

pub(super) fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text(deserializer)?.unwrap_or_default())
}

pub(super) fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_list_from(Value::deserialize(deserializer)?))
}

pub(super) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(is_truthy(&Value::deserialize(deserializer)?))
}

pub(super) fn date<'de, D>(deserializer: D) -> Result<Option<DateLike>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(date_from(Value::deserialize(deserializer)?))
}

/// Reads a list of records, dropping entries that are not objects.
///
/// A lone object is taken as a one-entry list.
pub(super) fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        object @ Value::Object(_) => vec![object],
        other => {
            ignore(&other, "array");
            return Ok(Vec::new());
        }
    };

    Ok(items.into_iter().filter_map(record_from).collect())
}

pub(super) fn record_from<T: DeserializeOwned>(value: Value) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring malformed contact entry");
            None
        }
    }
}

fn text_from(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        other => {
            ignore(&other, "string");
            None
        }
    }
}

fn text_list_from(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.into_iter().filter_map(text_from).collect(),
        other => text_from(other).into_iter().collect(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn date_from(value: Value) -> Option<DateLike> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(DateLike::Text(s)),
        Value::Number(ref n) => {
            let millis = n.as_i64().or_else(|| n.as_f64().and_then(truncate_millis));
            if millis.is_none() {
                ignore(&value, "epoch milliseconds");
            }
            millis.map(DateLike::Millis)
        }
        Value::Object(mut fields) => {
            let inner = DATE_OBJECT_KEYS.iter().find_map(|key| fields.remove(*key));
            match inner {
                Some(inner @ (Value::String(_) | Value::Number(_))) => date_from(inner),
                _ => {
                    ignore(&Value::Object(fields), "date");
                    None
                }
            }
        }
        other => {
            ignore(&other, "date");
            None
        }
    }
}

#[expect(clippy::cast_possible_truncation)]
fn truncate_millis(millis: f64) -> Option<i64> {
    (millis.is_finite() && millis.abs() <= MAX_EPOCH_MILLIS).then(|| millis.trunc() as i64)
}

fn ignore(value: &Value, expected: &'static str) {
    tracing::warn!(%value, expected, "Ignoring contact field of unexpected type");
}
