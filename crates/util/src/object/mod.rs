//! Lookups in nested JSON structures.
//!
//! All functions take the structure by reference and never mutate it.

mod get_value;
mod path_by_key_value;

pub use get_value::get_value;
pub use path_by_key_value::{get_path_by_key_value, get_path_by_key_value_from};

use serde_json::Value;

/// Check if a value can hold entries (an object or an array).
pub fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Parse an array index key the way object keys are produced for array
/// entries: canonical decimal only, so `"01"` is not index 1.
pub(crate) fn index_key(key: &str) -> Option<usize> {
    let index: usize = key.parse().ok()?;
    (index.to_string() == key).then_some(index)
}

/// Name of a value's JSON type, for diagnostics.
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
