//! base-util - helpers for browser-facing applications
//!
//! Line wrapping and coercion of strings, lookups in nested JSON structures,
//! array joining, angle math and undo/redo state inspection.

pub mod array;
pub mod math;
pub mod object;
pub mod strings;
pub mod types;
pub mod undo;

// Re-exports for convenience
pub use array::join_array_with;
pub use math::{deg_to_rad, modulo_two_pi, rad_to_deg};
pub use object::{get_path_by_key_value, get_path_by_key_value_from, get_value, is_container};
pub use strings::{
    coerce, string_divider, strip_html_tags, urlify, wrap, StringError, WrapOptions,
};
pub use types::{is_array_two_or_more, ArrayTwoOrMore, Primitive};
pub use undo::{at_least_one_redoable, at_least_one_undoable, State, UndoState};
