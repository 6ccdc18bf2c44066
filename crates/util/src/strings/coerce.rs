use serde_json::{Map, Number, Value};

use super::StringError;

fn float_regex() -> &'static regex::Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| regex::Regex::new(r"^[-+]?[0-9]*\.?[0-9]+([eE][-+]?[0-9]+)?$").unwrap())
}

fn to_number(s: &str) -> Option<Value> {
    if let Ok(i) = s.parse::<i64>() {
        return Some(Value::Number(i.into()));
    }
    let f: f64 = s.parse().ok()?;
    Number::from_f64(f).map(Value::Number)
}

/// Cast a string to the most plausible JSON type, guessed from the text.
///
/// - `"true"` / `"false"` (any case) become booleans
/// - numeric literals become numbers (integers when they are exact integers)
/// - text starting with `[` is parsed as a JSON array, its string elements
///   are coerced in turn
/// - text starting with `{` is parsed as a JSON object, its string members
///   are coerced in turn
/// - anything else stays a string
///
/// # Errors
///
/// Returns [`StringError::Json`] when text starting with `[` or `{` is not
/// valid JSON.
///
/// # Examples
///
/// ```
/// use base_util::strings::coerce;
/// use serde_json::json;
///
/// assert_eq!(coerce("TRUE").unwrap(), json!(true));
/// assert_eq!(coerce("1337").unwrap(), json!(1337));
/// assert_eq!(coerce("73556.08").unwrap(), json!(73556.08));
/// assert_eq!(coerce(r#"["12", "x"]"#).unwrap(), json!([12, "x"]));
/// ```
pub fn coerce(s: &str) -> Result<Value, StringError> {
    if s.eq_ignore_ascii_case("true") {
        return Ok(Value::Bool(true));
    }
    if s.eq_ignore_ascii_case("false") {
        return Ok(Value::Bool(false));
    }
    if float_regex().is_match(s) {
        if let Some(number) = to_number(s) {
            return Ok(number);
        }
    }
    if s.starts_with('[') {
        let parsed: Vec<Value> = serde_json::from_str(s)?;
        let coerced = parsed
            .into_iter()
            .map(coerce_value)
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(Value::Array(coerced));
    }
    if s.starts_with('{') {
        let parsed: Map<String, Value> = serde_json::from_str(s)?;
        let mut coerced = Map::with_capacity(parsed.len());
        for (key, value) in parsed {
            coerced.insert(key, coerce_value(value)?);
        }
        return Ok(Value::Object(coerced));
    }
    Ok(Value::String(s.to_string()))
}

/// Coerce an already parsed value: strings are coerced, everything else is
/// returned untouched.
pub fn coerce_value(value: Value) -> Result<Value, StringError> {
    match value {
        Value::String(s) => coerce(&s),
        other => Ok(other),
    }
}
