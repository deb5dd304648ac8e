//! Payload parser for classroom API responses.
//!
//! Pure decoding of one JSON document into classroom records. Three shapes
//! are accepted:
//!
//! - the GraphQL envelope `{"data": {"<selector>": [...]}}`
//! - the bare selection `{"<selector>": [...]}`
//! - a bare array of records
//!
//! A non-empty top-level `errors` array means the query failed, regardless of
//! any partial `data`.
//!
//! Inside the list nothing is rejected: a mistyped field decodes as `None` and
//! an entry that is not an object becomes an empty record.

use crate::model::{ClassroomRecord, DataSelector, ParseError};
use serde::Deserialize;
use serde_json::Value;

/// One entry of a GraphQL `errors` array.
#[derive(Debug, Deserialize)]
struct RawApiError {
    #[serde(default)]
    message: Option<String>,
}

/// Decode `text` into the records listed under `selector`.
///
/// # Errors
///
/// - [`ParseError::InvalidJson`] if the text is not JSON or the record list
///   is not an array
/// - [`ParseError::Api`] if the payload carries GraphQL errors
/// - [`ParseError::MissingSelector`] if no record list can be found
pub fn parse_payload(
    text: &str,
    selector: DataSelector,
) -> Result<Vec<ClassroomRecord>, ParseError> {
    let document: Value = serde_json::from_str(text).map_err(invalid_json)?;

    if let Some(messages) = api_errors(&document)? {
        return Err(ParseError::Api { messages });
    }

    let list = locate_list(&document, selector.key()).ok_or(ParseError::MissingSelector {
        selector: selector.key(),
    })?;

    match list {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(items
            .iter()
            .map(|item| ClassroomRecord::deserialize(item).unwrap_or_default())
            .collect()),
        list => Vec::<ClassroomRecord>::deserialize(list).map_err(invalid_json),
    }
}

/// Messages of a non-empty `errors` array, if present.
fn api_errors(document: &Value) -> Result<Option<Vec<String>>, ParseError> {
    let Some(errors) = document.get("errors") else {
        return Ok(None);
    };
    if errors.is_null() {
        return Ok(None);
    }

    let errors = Vec::<RawApiError>::deserialize(errors).map_err(invalid_json)?;
    if errors.is_empty() {
        return Ok(None);
    }
    Ok(Some(
        errors
            .into_iter()
            .map(|error| error.message.unwrap_or_else(|| "unknown error".to_string()))
            .collect(),
    ))
}

/// The record list inside `document`. A `null` list (GraphQL's way of saying
/// "nothing") is returned as-is.
fn locate_list<'a>(document: &'a Value, key: &str) -> Option<&'a Value> {
    match document {
        Value::Array(_) => Some(document),
        Value::Object(object) => object
            .get("data")
            .and_then(|data| data.get(key))
            .or_else(|| object.get(key)),
        _ => None,
    }
}

fn invalid_json(error: serde_json::Error) -> ParseError {
    ParseError::InvalidJson {
        message: error.to_string(),
    }
}
