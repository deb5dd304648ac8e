//! Field-level decoding that never fails.
//!
//! The API is loose about types: a name may arrive as a number, an id as an
//! empty string. A field whose value does not fit its type decodes as `None`
//! and the table shows the placeholder for it. Only the record list itself
//! must have the expected shape.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `deserialize_with` target for optional fields: any value that does not
/// decode as `T` becomes `None`.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(from_value(value))
}

/// Decode `value` as `T`, `None` on null or mismatch.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Option<T> {
    if value.is_null() {
        return None;
    }
    T::deserialize(value).ok()
}
