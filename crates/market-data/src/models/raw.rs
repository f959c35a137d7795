//! Lenient field deserialization for provider records.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads any JSON value as its raw text. Strings are taken as-is, numbers
/// and booleans as written, and `null` as absent. One odd field must not
/// fail the whole record.
pub(crate) fn raw_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
