use serde_json::Value;

/// A primitive JSON leaf used as a search value.
///
/// Matching follows strict equality: the JSON type must agree, numbers are
/// compared numerically, containers never match.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    String(String),
    Number(f64),
    Bool(bool),
}

impl Primitive {
    /// Check if a JSON value is strictly equal to this primitive.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Primitive::String(a), Value::String(b)) => a == b,
            (Primitive::Number(a), Value::Number(b)) => b.as_f64() == Some(*a),
            (Primitive::Bool(a), Value::Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl From<&str> for Primitive {
    fn from(s: &str) -> Self {
        Primitive::String(s.to_string())
    }
}

impl From<String> for Primitive {
    fn from(s: String) -> Self {
        Primitive::String(s)
    }
}

impl From<f64> for Primitive {
    fn from(n: f64) -> Self {
        Primitive::Number(n)
    }
}

impl From<i64> for Primitive {
    fn from(n: i64) -> Self {
        Primitive::Number(n as f64)
    }
}

impl From<bool> for Primitive {
    fn from(b: bool) -> Self {
        Primitive::Bool(b)
    }
}

/// A vector guaranteed to hold at least two elements.
///
/// # Examples
///
/// ```
/// use base_util::types::ArrayTwoOrMore;
///
/// assert!(ArrayTwoOrMore::try_from(vec![1, 2]).is_ok());
/// assert!(ArrayTwoOrMore::try_from(vec![1]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayTwoOrMore<T> {
    inner: Vec<T>,
}

impl<T> ArrayTwoOrMore<T> {
    /// The first element.
    pub fn first(&self) -> &T {
        &self.inner[0]
    }

    /// The second element.
    pub fn second(&self) -> &T {
        &self.inner[1]
    }

    /// Extract the inner vector.
    pub fn into_inner(self) -> Vec<T> {
        self.inner
    }
}

impl<T> TryFrom<Vec<T>> for ArrayTwoOrMore<T> {
    /// The rejected vector is handed back.
    type Error = Vec<T>;

    fn try_from(inner: Vec<T>) -> Result<Self, Self::Error> {
        if is_array_two_or_more(&inner) {
            Ok(Self { inner })
        } else {
            Err(inner)
        }
    }
}

impl<T> std::ops::Deref for ArrayTwoOrMore<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> AsRef<[T]> for ArrayTwoOrMore<T> {
    fn as_ref(&self) -> &[T] {
        &self.inner
    }
}

/// Check if a slice has at least two elements.
pub fn is_array_two_or_more<T>(value: &[T]) -> bool {
    value.len() > 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primitive_matches() {
        assert!(Primitive::from("a").matches(&json!("a")));
        assert!(Primitive::from(1i64).matches(&json!(1)));
        assert!(Primitive::from(1.0f64).matches(&json!(1)));
        assert!(Primitive::from(true).matches(&json!(true)));
        assert!(!Primitive::from("1").matches(&json!(1)));
        assert!(!Primitive::from(false).matches(&json!(null)));
        assert!(!Primitive::from("a").matches(&json!(["a"])));
    }

    #[test]
    fn test_array_two_or_more() {
        let arr = ArrayTwoOrMore::try_from(vec!["a", "b", "c"]).unwrap();
        assert_eq!(*arr.first(), "a");
        assert_eq!(*arr.second(), "b");
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.into_inner(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_array_two_or_more_rejects_short() {
        assert_eq!(ArrayTwoOrMore::try_from(vec![1]), Err(vec![1]));
        assert_eq!(ArrayTwoOrMore::<i32>::try_from(vec![]), Err(vec![]));
    }

    #[test]
    fn test_is_array_two_or_more() {
        assert!(is_array_two_or_more(&[1, 2]));
        assert!(!is_array_two_or_more(&[1]));
        assert!(!is_array_two_or_more::<u8>(&[]));
    }
}
