use indexmap::IndexMap;
use url::Url;

use crate::{read, UrlError};

/// Query parameters in order of first appearance.
pub type QueryParams = IndexMap<String, String>;

const COMMA: char = ',';

pub(crate) fn query_params_of(url: &Url) -> QueryParams {
    let mut params = QueryParams::new();
    for (key, value) in url.query_pairs() {
        // Repeated keys keep their first position, the last value wins.
        params.insert(key.into_owned(), value.into_owned());
    }
    params
}

/// Return the decoded query parameters of a URL.
///
/// # Example
///
/// ```
/// use base_util_url::get_query_params;
///
/// let params = get_query_params("https://example.com/wms?SERVICE=WMS&LAYERS=a%2Cb").unwrap();
/// assert_eq!(params["SERVICE"], "WMS");
/// assert_eq!(params["LAYERS"], "a,b");
/// ```
pub fn get_query_params(url: &str) -> Result<QueryParams, UrlError> {
    Ok(query_params_of(&read(url)?))
}

fn find_key_ignore_case<'a>(params: &'a QueryParams, key: &str) -> Option<&'a str> {
    params
        .keys()
        .find(|k| k.eq_ignore_ascii_case(key))
        .map(String::as_str)
}

/// Return the value of a query parameter, matching the key case-insensitively.
pub fn get_query_param(url: &str, key: &str) -> Result<Option<String>, UrlError> {
    let params = get_query_params(url)?;
    Ok(find_key_ignore_case(&params, key).and_then(|k| params.get(k).cloned()))
}

/// Check if a URL carries a query parameter, matching the key
/// case-insensitively.
pub fn has_query_param(url: &str, key: &str) -> Result<bool, UrlError> {
    let params = get_query_params(url)?;
    Ok(find_key_ignore_case(&params, key).is_some())
}

/// Join the comma separated values of selected keys of two parameter sets.
///
/// The result starts as a copy of `params1`. For every key in `keys` that has
/// a non-empty value there, the values of the same key in `params2` are
/// appended. All other entries come from `params1` only.
///
/// # Example
///
/// ```
/// use base_util_url::{join_query_params, QueryParams};
///
/// let params1: QueryParams = [("FOO", "foo,bar"), ("BAZ", "baz"), ("HUMPTY", "1")]
///     .into_iter()
///     .map(|(k, v)| (k.to_string(), v.to_string()))
///     .collect();
/// let params2: QueryParams = [("FOO", "pupe,pape"), ("BAZ", "baz"), ("DUMPTY", "42")]
///     .into_iter()
///     .map(|(k, v)| (k.to_string(), v.to_string()))
///     .collect();
///
/// let joined = join_query_params(&params1, &params2, &["FOO"]);
/// assert_eq!(joined["FOO"], "foo,bar,pupe,pape");
/// assert_eq!(joined["BAZ"], "baz");
/// assert_eq!(joined["HUMPTY"], "1");
/// assert!(!joined.contains_key("DUMPTY"));
/// ```
pub fn join_query_params<K: AsRef<str>>(
    params1: &QueryParams,
    params2: &QueryParams,
    keys: &[K],
) -> QueryParams {
    let mut joined = params1.clone();

    for key in keys {
        let key = key.as_ref();
        let Some(existing) = joined.get_mut(key) else {
            continue;
        };
        if existing.is_empty() {
            continue;
        }
        match params2.get(key) {
            Some(other) => {
                existing.push(COMMA);
                existing.push_str(other);
            }
            None => log::debug!("join_query_params: {key:?} missing in second parameter set"),
        }
    }

    joined
}

/// Encode parameters as `key=value` pairs joined by `&`, without a leading
/// question mark.
///
/// # Example
///
/// ```
/// use base_util_url::{object_to_request_string, QueryParams};
///
/// let mut params = QueryParams::new();
/// params.insert("height".to_string(), "400".to_string());
/// params.insert("width".to_string(), "200".to_string());
/// assert_eq!(object_to_request_string(&params), "height=400&width=200");
/// ```
pub fn object_to_request_string(params: &QueryParams) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_get_query_params_order_and_decoding() {
        let got = get_query_params("https://a.de/?b=2&a=1&c=hello+world&d=%C3%A4").unwrap();
        let keys: Vec<&str> = got.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a", "c", "d"]);
        assert_eq!(got["c"], "hello world");
        assert_eq!(got["d"], "ä");
    }

    #[test]
    fn test_get_query_params_repeated_key() {
        let got = get_query_params("https://a.de/?x=1&y=2&x=3").unwrap();
        assert_eq!(got.len(), 2);
        assert_eq!(got.get_index(0), Some((&"x".to_string(), &"3".to_string())));
    }

    #[test]
    fn test_get_query_params_none() {
        assert!(get_query_params("https://a.de/path").unwrap().is_empty());
    }

    #[test]
    fn test_get_query_param_case_insensitive() {
        let url = "https://a.de/wms?Service=WMS&layers=roads";
        assert_eq!(get_query_param(url, "SERVICE").unwrap().as_deref(), Some("WMS"));
        assert_eq!(get_query_param(url, "LAYERS").unwrap().as_deref(), Some("roads"));
        assert_eq!(get_query_param(url, "VERSION").unwrap(), None);
    }

    #[test]
    fn test_has_query_param() {
        let url = "https://a.de/wms?request=GetMap";
        assert!(has_query_param(url, "REQUEST").unwrap());
        assert!(!has_query_param(url, "SERVICE").unwrap());
        assert!(has_query_param("not a url", "x").is_err());
    }

    #[test]
    fn test_join_query_params() {
        let p1 = params(&[("FOO", "foo,bar"), ("BAZ", "baz"), ("HUMPTY", "1")]);
        let p2 = params(&[("FOO", "pupe,pape"), ("BAZ", "baz"), ("DUMPTY", "42")]);
        let joined = join_query_params(&p1, &p2, &["FOO"]);
        assert_eq!(
            joined,
            params(&[("FOO", "foo,bar,pupe,pape"), ("BAZ", "baz"), ("HUMPTY", "1")])
        );
    }

    #[test]
    fn test_join_query_params_skips_empty_and_missing() {
        let p1 = params(&[("A", ""), ("B", "b1"), ("C", "c1")]);
        let p2 = params(&[("A", "a2"), ("C", "c2")]);
        let joined = join_query_params(&p1, &p2, &["A", "B", "C", "D"]);
        assert_eq!(joined, params(&[("A", ""), ("B", "b1"), ("C", "c1,c2")]));
    }

    #[test]
    fn test_join_query_params_keeps_empty_values_of_second() {
        let p1 = params(&[("STYLES", "a")]);
        let p2 = params(&[("STYLES", "")]);
        let joined = join_query_params(&p1, &p2, &["STYLES"]);
        assert_eq!(joined["STYLES"], "a,");
    }

    #[test]
    fn test_object_to_request_string_encodes() {
        let p = params(&[("a b", "x&y"), ("LAYERS", "one,two")]);
        assert_eq!(object_to_request_string(&p), "a%20b=x%26y&LAYERS=one%2Ctwo");
    }

    #[test]
    fn test_object_to_request_string_empty() {
        assert_eq!(object_to_request_string(&QueryParams::new()), "");
    }
}
