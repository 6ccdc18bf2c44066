use indexmap::IndexMap;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::document::Document;
use crate::HttpError;

const CSRF_TOKEN_META: &str = "_csrf";
const CSRF_HEADER_META: &str = "_csrf_header";
const CSRF_PARAMETER_META: &str = "_csrf_parameter_name";
const CSRF_COOKIE: &str = "XSRF-TOKEN";

/// Return the content of the meta tag named `name`, or an empty string
/// (with a warning) if the page has no such tag.
pub fn get_content_from_meta_tag_by_name<D: Document + ?Sized>(doc: &D, name: &str) -> String {
    match doc.meta_content(name) {
        Some(content) => content,
        None => {
            log::warn!("Failed to find tag <meta name={name} />. Is it present in the page DOM?");
            String::new()
        }
    }
}

/// The CSRF token from the `_csrf` meta tag, e.g. `"741a3b1-221f-4d1d-..."`.
pub fn get_csrf_value<D: Document + ?Sized>(doc: &D) -> String {
    get_content_from_meta_tag_by_name(doc, CSRF_TOKEN_META)
}

/// The CSRF token from the `XSRF-TOKEN` cookie, as persisted by a
/// `CookieCsrfTokenRepository`. Empty if the cookie is not set.
///
/// # Example
///
/// ```
/// use base_util_csrf::{get_csrf_value_from_cookie, StaticDocument};
///
/// let doc = StaticDocument::new().with_cookie("JSESSIONID=1; XSRF-TOKEN=abc-123");
/// assert_eq!(get_csrf_value_from_cookie(&doc), "abc-123");
/// ```
pub fn get_csrf_value_from_cookie<D: Document + ?Sized>(doc: &D) -> String {
    cookie_value(&doc.cookie(), CSRF_COOKIE).unwrap_or_default()
}

/// Value of the last cookie called `name` in a `document.cookie` string.
fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| {
            let rest = pair.trim_start().strip_prefix(name)?;
            let value = rest.trim_start().strip_prefix('=')?;
            Some(value.trim_start().to_string())
        })
        .last()
}

/// The name of the header to send the token in (`_csrf_header` meta tag),
/// e.g. `"X-CSRF-TOKEN"`.
pub fn get_csrf_header_name<D: Document + ?Sized>(doc: &D) -> String {
    get_content_from_meta_tag_by_name(doc, CSRF_HEADER_META)
}

/// The name of the form parameter to send the token in
/// (`_csrf_parameter_name` meta tag), e.g. `"_csrf"`.
pub fn get_csrf_parameter_name<D: Document + ?Sized>(doc: &D) -> String {
    get_content_from_meta_tag_by_name(doc, CSRF_PARAMETER_META)
}

fn token_and_header<D: Document + ?Sized>(doc: &D) -> Option<(String, String)> {
    let value = get_csrf_value(doc);
    let header_name = get_csrf_header_name(doc);
    if value.is_empty() || header_name.is_empty() {
        return None;
    }
    Some((header_name, value))
}

/// Headers carrying the CSRF token, ready to be sent with a request. Empty if
/// the token or the header name cannot be found.
///
/// # Errors
///
/// [`HttpError::HeaderName`] or [`HttpError::HeaderValue`] when the meta tags
/// hold something that is not a valid HTTP header.
pub fn get_header<D: Document + ?Sized>(doc: &D) -> Result<HeaderMap, HttpError> {
    let mut headers = HeaderMap::new();
    if let Some((name, value)) = token_and_header(doc) {
        headers.append(
            HeaderName::from_bytes(name.as_bytes())?,
            HeaderValue::from_str(&value)?,
        );
    }
    Ok(headers)
}

/// Like [`get_header`], as a plain map from header name to token.
pub fn get_header_object<D: Document + ?Sized>(doc: &D) -> IndexMap<String, String> {
    token_and_header(doc).into_iter().collect()
}
