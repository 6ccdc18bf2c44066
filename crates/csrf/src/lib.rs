//! CSRF helpers for pages served by Spring Security.
//!
//! The token, the header name and the form parameter name are read from
//! `<meta>` tags such a page carries in its head:
//!
//! ```html
//! <meta name="_csrf" content="${_csrf.token}" />
//! <meta name="_csrf_header" content="${_csrf.headerName}" />
//! <meta name="_csrf_parameter_name" content="${_csrf.parameterName}" />
//! ```
//!
//! Access to the page goes through the [`Document`] trait, so the helpers
//! work against any DOM binding or the in-memory [`StaticDocument`].
//!
//! # Example
//!
//! ```
//! use base_util_csrf::{get_header, StaticDocument};
//!
//! let doc = StaticDocument::new()
//!     .with_meta("_csrf", "741a3b1-221f")
//!     .with_meta("_csrf_header", "X-CSRF-TOKEN");
//! let headers = get_header(&doc).unwrap();
//! assert_eq!(headers["x-csrf-token"], "741a3b1-221f");
//! ```

use thiserror::Error;

pub mod csrf;
pub mod document;
pub mod http;

pub use csrf::{
    get_content_from_meta_tag_by_name, get_csrf_header_name, get_csrf_parameter_name,
    get_csrf_value, get_csrf_value_from_cookie, get_header, get_header_object,
};
pub use document::{Document, StaticDocument};
pub use http::{post, prepare_post, Body, Credentials, PostOptions, PreparedRequest};
pub use reqwest::header::HeaderMap;

/// Errors produced while preparing or sending requests.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("failed to serialize request body: {0}")]
    Json(#[from] serde_json::Error),
    #[error("request URL must not be empty")]
    EmptyUrl,
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("invalid header name: {0}")]
    HeaderName(#[from] reqwest::header::InvalidHeaderName),
    #[error("invalid header value: {0}")]
    HeaderValue(#[from] reqwest::header::InvalidHeaderValue),
    #[error("unknown credentials mode: {0}")]
    Credentials(String),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}
