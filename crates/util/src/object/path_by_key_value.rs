use serde_json::Value;

use crate::types::Primitive;

/// Return the dot delimited path to the first entry of `root` whose key is
/// `key` and whose value equals `value`.
///
/// The search is depth-first in insertion order and descends into nested
/// objects only. An array is searched only when it is the root itself, with
/// its elements keyed by their decimal index.
///
/// # Examples
///
/// ```
/// use base_util::object::get_path_by_key_value;
/// use serde_json::json;
///
/// let obj = json!({
///     "level": "first",
///     "nested": {"level": "second"}
/// });
/// assert_eq!(
///     get_path_by_key_value(&obj, "level", &"second".into()),
///     Some("nested.level".to_string())
/// );
/// ```
pub fn get_path_by_key_value(root: &Value, key: &str, value: &Primitive) -> Option<String> {
    get_path_by_key_value_from(root, key, value, "")
}

/// Like [`get_path_by_key_value`], with every returned path prefixed by
/// `root_path` (unless it is empty).
pub fn get_path_by_key_value_from(
    root: &Value,
    key: &str,
    value: &Primitive,
    root_path: &str,
) -> Option<String> {
    let prefix = if root_path.is_empty() {
        String::new()
    } else {
        format!("{root_path}.")
    };

    match root {
        Value::Object(map) => map
            .iter()
            .find_map(|(k, v)| search_entry(k, v, key, value, &prefix)),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .find_map(|(i, v)| search_entry(&i.to_string(), v, key, value, &prefix)),
        _ => None,
    }
}

fn search_entry(k: &str, v: &Value, key: &str, value: &Primitive, prefix: &str) -> Option<String> {
    if k == key && value.matches(v) {
        return Some(format!("{prefix}{k}"));
    }
    if v.is_object() {
        return get_path_by_key_value_from(v, key, value, &format!("{prefix}{k}"));
    }
    None
}
