use serde_json::Value;

use super::{index_key, is_container, kind};

/// Return a value of `root` by a query key.
///
/// The key is used in one of two ways:
///
/// - **Single key**: the first entry named `key` found by a depth-first walk
///   in insertion order. Array entries are named by their index.
/// - **Slash separated path** (`"a/b/c"`): one step per segment, from the
///   root down. If a step cannot be resolved the walk stops and the node
///   reached so far is returned. A broken path therefore yields a partial
///   match rather than `None`.
///
/// Returns `None` if nothing matches, or if `root` is not an object or array
/// (the latter is logged as a warning).
///
/// # Examples
///
/// ```
/// use base_util::object::get_value;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": {"c": "x"}}});
/// assert_eq!(get_value("c", &doc), Some(&json!("x")));
/// assert_eq!(get_value("a/b", &doc), Some(&json!({"c": "x"})));
/// assert_eq!(get_value("a/missing", &doc), Some(&json!({"b": {"c": "x"}})));
/// assert_eq!(get_value("missing", &doc), None);
/// ```
pub fn get_value<'a>(key: &str, root: &'a Value) -> Option<&'a Value> {
    if !is_container(root) {
        log::warn!(
            "get_value: expected an object or array to search in, got {}",
            kind(root)
        );
        return None;
    }

    if key.contains('/') {
        return Some(walk_path(key, root));
    }

    find_key(key, root)
}

fn child<'a>(node: &'a Value, step: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => map.get(step),
        Value::Array(arr) => arr.get(index_key(step)?),
        _ => None,
    }
}

fn walk_path<'a>(path: &str, root: &'a Value) -> &'a Value {
    let mut current = root;
    for step in path.split('/') {
        match child(current, step) {
            Some(next) => current = next,
            None => {
                log::debug!("get_value: path {path:?} stopped at missing step {step:?}");
                break;
            }
        }
    }
    current
}

fn find_key<'a>(key: &str, node: &'a Value) -> Option<&'a Value> {
    match node {
        Value::Object(map) => map.iter().find_map(|(k, v)| visit(key, k == key, v)),
        Value::Array(arr) => {
            let wanted = index_key(key);
            arr.iter()
                .enumerate()
                .find_map(|(i, v)| visit(key, wanted == Some(i), v))
        }
        _ => None,
    }
}

fn visit<'a>(key: &str, is_match: bool, value: &'a Value) -> Option<&'a Value> {
    if is_match {
        return Some(value);
    }
    // Array elements are searched before the array's own index keys.
    if let Value::Array(items) = value {
        let found = items
            .iter()
            .filter(|item| is_container(item))
            .find_map(|item| find_key(key, item));
        if found.is_some() {
            return found;
        }
    }
    find_key(key, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_top_level_key() {
        let doc = json!({"firstLevel": true, "nested": {"firstLevel": false}});
        assert_eq!(get_value("firstLevel", &doc), Some(&json!(true)));
    }

    #[test]
    fn test_nested_key() {
        let doc = json!({"a": {"b": {"c": "x"}}});
        assert_eq!(get_value("c", &doc), Some(&json!("x")));
    }

    #[test]
    fn test_first_match_in_insertion_order() {
        let doc = json!({
            "z": {"name": "from-z"},
            "a": {"name": "from-a"}
        });
        assert_eq!(get_value("name", &doc), Some(&json!("from-z")));
    }

    #[test]
    fn test_depth_first_before_later_siblings() {
        let doc = json!({
            "first": {"deep": {"target": 1}},
            "target": 2
        });
        assert_eq!(get_value("target", &doc), Some(&json!(1)));
    }

    #[test]
    fn test_objects_inside_arrays() {
        let doc = json!({"layers": [{"id": 1}, {"id": 2, "title": "second"}]});
        assert_eq!(get_value("id", &doc), Some(&json!(1)));
        assert_eq!(get_value("title", &doc), Some(&json!("second")));
    }

    #[test]
    fn test_array_index_keys() {
        let doc = json!({"list": [{"x": 1}, "plain"]});
        assert_eq!(get_value("1", &doc), Some(&json!("plain")));
        assert_eq!(get_value("0", &doc), Some(&json!({"x": 1})));
    }

    #[test]
    fn test_array_root() {
        let doc = json!([{"a": 1}, {"b": 2}]);
        assert_eq!(get_value("b", &doc), Some(&json!(2)));
    }

    #[test]
    fn test_missing_key() {
        let doc = json!({"a": {"b": [1, 2, {"c": 3}]}});
        assert_eq!(get_value("d", &doc), None);
    }

    #[test]
    fn test_primitive_root() {
        assert_eq!(get_value("a", &json!("a")), None);
        assert_eq!(get_value("a", &json!(null)), None);
        assert_eq!(get_value("a/b", &json!(42)), None);
    }

    #[test]
    fn test_null_value_is_a_match() {
        let doc = json!({"a": null});
        assert_eq!(get_value("a", &doc), Some(&Value::Null));
    }

    #[test]
    fn test_path_mode() {
        let doc = json!({"a": {"b": "val"}});
        assert_eq!(get_value("a/b", &doc), Some(&json!("val")));
    }

    #[test]
    fn test_path_mode_partial_match() {
        let doc = json!({"a": {"b": "val"}});
        assert_eq!(get_value("a/missing", &doc), Some(&json!({"b": "val"})));
    }

    #[test]
    fn test_path_mode_missing_first_step_returns_root() {
        let doc = json!({"a": {"b": "val"}});
        assert_eq!(get_value("x/b", &doc), Some(&doc));
    }

    #[test]
    fn test_path_mode_stops_at_primitive() {
        let doc = json!({"a": {"b": "val"}});
        assert_eq!(get_value("a/b/c", &doc), Some(&json!("val")));
    }

    #[test]
    fn test_path_mode_does_not_resume_after_miss() {
        let doc = json!({"a": {"b": {"a": 1}}});
        assert_eq!(get_value("a/x/b", &doc), Some(&json!({"b": {"a": 1}})));
    }

    #[test]
    fn test_path_mode_through_arrays() {
        let doc = json!({"layers": [{"name": "one"}, {"name": "two"}]});
        assert_eq!(get_value("layers/1/name", &doc), Some(&json!("two")));
    }

    #[test]
    fn test_idempotent() {
        let doc = json!({"a": [{"b": {"c": [1, {"d": true}]}}]});
        assert_eq!(get_value("d", &doc), get_value("d", &doc));
        assert_eq!(get_value("a/0/b", &doc), get_value("a/0/b", &doc));
    }
}
