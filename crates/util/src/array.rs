/// Like `join`, but returns a new vector with `value` inserted between all
/// elements instead of building a string.
///
/// # Examples
///
/// ```
/// use base_util::array::join_array_with;
///
/// assert_eq!(join_array_with(&["a", "b", "c"], "|"), vec!["a", "|", "b", "|", "c"]);
/// ```
pub fn join_array_with<T: Clone>(list: &[T], value: T) -> Vec<T> {
    let mut joined = Vec::with_capacity((list.len() * 2).saturating_sub(1));
    for (idx, item) in list.iter().enumerate() {
        if idx > 0 {
            joined.push(value.clone());
        }
        joined.push(item.clone());
    }
    joined
}
