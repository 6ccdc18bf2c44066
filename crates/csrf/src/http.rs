//! Form or JSON POST requests carrying the CSRF header.
//!
//! [`prepare_post`] assembles the request, [`post`] sends it with `reqwest`.

use std::str::FromStr;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, COOKIE};
use reqwest::redirect::Policy;
use reqwest::{Client, Method, Request, Response};
use serde_json::{Map, Value};
use url::{form_urlencoded, Url};

use crate::csrf::get_header;
use crate::document::Document;
use crate::HttpError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// The credentials mode of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credentials {
    Omit,
    SameOrigin,
    Include,
}

impl FromStr for Credentials {
    type Err = HttpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "omit" => Ok(Credentials::Omit),
            "same-origin" => Ok(Credentials::SameOrigin),
            "include" => Ok(Credentials::Include),
            other => Err(HttpError::Credentials(other.to_string())),
        }
    }
}

/// Options for [`prepare_post`] and [`post`].
#[derive(Debug, Clone)]
pub struct PostOptions {
    /// Target URL.
    pub url: String,
    /// Parameters to send. Default is empty.
    pub params: Map<String, Value>,
    /// Extra headers, applied after the CSRF and content type headers.
    pub additional_headers: Vec<(String, String)>,
    /// Extra fetch options. [`post`] understands `credentials`, `headers`
    /// and `redirect`; the rest is ignored.
    pub additional_fetch_options: Map<String, Value>,
    /// Send credentials for same-origin requests. Default is true.
    pub same_origin_credentials: bool,
    /// Send the parameters form encoded instead of as JSON. Default is true.
    pub as_form: bool,
}

impl PostOptions {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            params: Map::new(),
            additional_headers: Vec::new(),
            additional_fetch_options: Map::new(),
            same_origin_credentials: true,
            as_form: true,
        }
    }
}

/// The body of a prepared request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// `application/x-www-form-urlencoded` text.
    Form(String),
    /// JSON text.
    Json(String),
}

impl Body {
    pub fn as_str(&self) -> &str {
        match self {
            Body::Form(s) | Body::Json(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Body::Form(s) | Body::Json(s) => s,
        }
    }
}

/// A POST request ready to be sent.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub credentials: Option<Credentials>,
    pub headers: HeaderMap,
    pub body: Body,
    pub options: Map<String, Value>,
}

/// Text of a parameter value in a form body.
fn form_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn form_body(params: &Map<String, Value>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key, &form_value(value));
    }
    serializer.finish()
}

fn header_pair(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), HttpError> {
    Ok((HeaderName::from_bytes(name.as_bytes())?, HeaderValue::from_str(value)?))
}

/// Build a POST request with the CSRF header of `doc`.
///
/// # Errors
///
/// Returns [`HttpError::EmptyUrl`] for an empty URL, [`HttpError::Json`] if
/// the JSON body cannot be serialized, and [`HttpError::HeaderName`] or
/// [`HttpError::HeaderValue`] for headers that cannot be sent.
///
/// # Example
///
/// ```
/// use base_util_csrf::{prepare_post, Body, PostOptions, StaticDocument};
///
/// let doc = StaticDocument::new()
///     .with_meta("_csrf", "token")
///     .with_meta("_csrf_header", "X-CSRF-TOKEN");
/// let mut options = PostOptions::new("/api/layers");
/// options.params.insert("name".into(), "roads".into());
///
/// let request = prepare_post(&doc, options).unwrap();
/// assert_eq!(request.headers["X-CSRF-TOKEN"], "token");
/// assert_eq!(request.body, Body::Form("name=roads".to_string()));
/// ```
pub fn prepare_post<D: Document + ?Sized>(
    doc: &D,
    options: PostOptions,
) -> Result<PreparedRequest, HttpError> {
    if options.url.is_empty() {
        return Err(HttpError::EmptyUrl);
    }

    let mut headers = get_header(doc)?;
    if headers.is_empty() {
        log::debug!("prepare_post: no CSRF header available for {}", options.url);
    }

    if options.as_form {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
    }
    for (name, value) in &options.additional_headers {
        let (name, value) = header_pair(name, value)?;
        headers.insert(name, value);
    }

    let body = if options.as_form {
        Body::Form(form_body(&options.params))
    } else {
        Body::Json(serde_json::to_string(&options.params)?)
    };

    Ok(PreparedRequest {
        method: Method::POST,
        url: options.url,
        credentials: options.same_origin_credentials.then_some(Credentials::SameOrigin),
        headers,
        body,
        options: options.additional_fetch_options,
    })
}

/// Absolute URL of `target`, resolved against the page location if relative.
fn resolve_url<D: Document + ?Sized>(doc: &D, target: &str) -> Result<Url, HttpError> {
    match Url::parse(target) {
        Err(url::ParseError::RelativeUrlWithoutBase) => match doc.location() {
            Some(location) => Ok(Url::parse(&location)?.join(target)?),
            None => Err(url::ParseError::RelativeUrlWithoutBase.into()),
        },
        parsed => Ok(parsed?),
    }
}

fn sends_cookies<D: Document + ?Sized>(doc: &D, credentials: Option<Credentials>, url: &Url) -> bool {
    match credentials {
        Some(Credentials::Include) => true,
        Some(Credentials::SameOrigin) => doc
            .location()
            .and_then(|location| Url::parse(&location).ok())
            .is_some_and(|page| page.origin() == url.origin()),
        Some(Credentials::Omit) | None => false,
    }
}

/// Turn a prepared request into a client and the request to execute on it.
///
/// Fetch options are applied last, so they win over everything else:
/// `credentials` replaces the credentials mode, `headers` replaces all
/// headers and `redirect` other than `"follow"` disables redirects.
fn assemble<D: Document + ?Sized>(
    doc: &D,
    prepared: PreparedRequest,
) -> Result<(Client, Request), HttpError> {
    let url = resolve_url(doc, &prepared.url)?;
    let mut credentials = prepared.credentials;
    let mut headers = prepared.headers;
    let mut redirect = Policy::default();

    for (name, value) in &prepared.options {
        match (name.as_str(), value) {
            ("credentials", Value::String(mode)) => credentials = Some(mode.parse()?),
            ("headers", Value::Object(replacement)) => {
                headers = HeaderMap::new();
                for (name, value) in replacement {
                    let (name, value) = header_pair(name, &form_value(value))?;
                    headers.insert(name, value);
                }
            }
            ("redirect", Value::String(mode)) => {
                if mode != "follow" {
                    redirect = Policy::none();
                }
            }
            _ => log::debug!("post: ignoring fetch option {name}"),
        }
    }

    if sends_cookies(doc, credentials, &url) {
        let cookie = doc.cookie();
        if !cookie.is_empty() {
            headers.insert(COOKIE, HeaderValue::from_str(&cookie)?);
        }
    }

    let client = Client::builder().redirect(redirect).build()?;
    let request = client
        .request(prepared.method, url)
        .headers(headers)
        .body(prepared.body.into_string())
        .build()?;
    Ok((client, request))
}

/// Send a POST request with the CSRF header of `doc`.
///
/// The request is built by [`prepare_post`]. Relative URLs are resolved
/// against [`Document::location`]. The page cookies go along with
/// `Credentials::Include`, and with `Credentials::SameOrigin` when the target
/// shares the page origin.
///
/// # Errors
///
/// Everything [`prepare_post`] rejects, [`HttpError::Url`] for a URL that
/// cannot be resolved, and [`HttpError::Request`] when sending fails. Send
/// failures are also logged at debug level.
pub async fn post<D: Document + ?Sized>(doc: &D, options: PostOptions) -> Result<Response, HttpError> {
    let (client, request) = assemble(doc, prepare_post(doc, options)?)?;
    client.execute(request).await.map_err(|err| {
        log::debug!("Fetch error from `post`: {err}");
        HttpError::Request(err)
    })
}
