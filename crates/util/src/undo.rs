//! Undo/redo state inspection.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// History of a single undoable slice of application state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UndoState {
    #[serde(default)]
    pub present: Value,
    #[serde(default)]
    pub past: Vec<Value>,
    #[serde(default)]
    pub future: Vec<Value>,
}

/// The global state: undoable slices keyed by name.
pub type State = IndexMap<String, UndoState>;

/// Check if at least one slice of the state can be undone.
///
/// Slices stored under an empty name are ignored.
///
/// # Examples
///
/// ```
/// use base_util::undo::{at_least_one_undoable, State};
///
/// let state: State = serde_json::from_value(serde_json::json!({
///     "map": {"present": 2, "past": [1], "future": []}
/// })).unwrap();
/// assert!(at_least_one_undoable(&state));
/// ```
pub fn at_least_one_undoable(state: &State) -> bool {
    state
        .iter()
        .any(|(name, slice)| !name.is_empty() && !slice.past.is_empty())
}

/// Check if at least one slice of the state can be redone.
///
/// Slices stored under an empty name are ignored.
pub fn at_least_one_redoable(state: &State) -> bool {
    state
        .iter()
        .any(|(name, slice)| !name.is_empty() && !slice.future.is_empty())
}
