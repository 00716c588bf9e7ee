//! List-response normalization
//!
//! The backend serves the task collection either as a bare JSON array
//! or wrapped in an object under `tasks`. Both normalize to one
//! internal shape through an explicit decode step; a genuinely
//! unrecognized payload is logged loudly and treated as an empty
//! collection rather than a hard failure.

use crate::error::ApiError;
use serde_json::Value;
use taskboard_model::WireTask;

/// The recognized shapes of a list response
#[derive(Debug)]
enum ListShape {
    /// Bare array of records
    Bare(Vec<Value>),
    /// Array wrapped under a `tasks` field
    Wrapped(Vec<Value>),
    /// Anything else
    Unrecognized(&'static str),
}

fn classify(value: Value) -> ListShape {
    match value {
        Value::Array(items) => ListShape::Bare(items),
        Value::Object(mut map) => match map.remove("tasks") {
            Some(Value::Array(items)) => ListShape::Wrapped(items),
            Some(_) => ListShape::Unrecognized("object with non-array `tasks`"),
            None => ListShape::Unrecognized("object without `tasks`"),
        },
        Value::Null => ListShape::Unrecognized("null"),
        Value::Bool(_) => ListShape::Unrecognized("boolean"),
        Value::Number(_) => ListShape::Unrecognized("number"),
        Value::String(_) => ListShape::Unrecognized("string"),
    }
}

/// Normalize a raw list response into wire records.
///
/// Shape tolerance is loose (unrecognized payloads become an empty
/// collection, with a warning), but record decoding is strict: a
/// malformed record inside a recognized array is a hard error.
pub fn decode_list(value: Value) -> Result<Vec<WireTask>, ApiError> {
    let items = match classify(value) {
        ListShape::Bare(items) | ListShape::Wrapped(items) => items,
        ListShape::Unrecognized(shape) => {
            tracing::warn!(shape, "unrecognized list response shape, treating as empty");
            return Ok(Vec::new());
        }
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(ApiError::Decode))
        .collect()
}
