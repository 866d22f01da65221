//! Deserializers for fields the backend sends with loose types.
//!
//! Profile numbers arrive either as JSON numbers or strings depending on the
//! view that produced them, and nullable text may be `null` or missing.

use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a string, number or bool and keeps its textual form; `null` and
/// missing values become `None`.
pub fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// A JSON array of `T`; any other value (`null`, text, an object) becomes
/// `None`. Elements of an array must still parse.
pub fn list_or_none<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(array @ Value::Array(_)) => serde_json::from_value(array).map(Some).map_err(D::Error::custom),
        _ => Ok(None),
    }
}

pub fn default_true() -> bool {
    true
}
