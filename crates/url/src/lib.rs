//! URL and query string helpers.
//!
//! Parsing is backed by the [`url`] crate; query parameters are kept in an
//! ordered map so that rebuilt URLs list them in their original order.
//!
//! # Example
//!
//! ```
//! use base_util_url::{bundle_ogc_requests_to_urls, BundleOptions};
//!
//! let urls = [
//!     "https://maps.bvb.de/wms?SERVICE=WMS&REQUEST=GetFeatureInfo&LAYERS=Shinji",
//!     "https://maps.bvb.de/wms?SERVICE=WMS&REQUEST=GetFeatureInfo&LAYERS=Kagawa",
//! ];
//! let bundled = bundle_ogc_requests_to_urls(&urls, &BundleOptions::default()).unwrap();
//! assert_eq!(
//!     bundled,
//!     vec!["https://maps.bvb.de/wms?SERVICE=WMS&REQUEST=GetFeatureInfo&LAYERS=Shinji%2CKagawa"]
//! );
//! ```

use thiserror::Error;
use url::Url;

pub mod ogc;
pub mod query;
pub mod validate;

pub use ogc::{
    bundle_ogc_requests, bundle_ogc_requests_to_urls, create_valid_get_capabilities_request,
    BundleOptions, CapabilitiesOptions, Service,
};
pub use query::{
    get_query_param, get_query_params, has_query_param, join_query_params,
    object_to_request_string, QueryParams,
};
pub use validate::{is_valid, ValidationOptions};

/// Errors produced by the URL helpers.
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("invalid URL: {0}")]
    Parse(#[from] url::ParseError),
    #[error("unknown OGC service: {0}")]
    UnknownService(String),
}

/// Parse a URL.
///
/// # Errors
///
/// Returns [`UrlError::Parse`] if `url` is not an absolute URL.
pub fn read(url: &str) -> Result<Url, UrlError> {
    Ok(Url::parse(url)?)
}

/// Serialize a parsed URL.
pub fn write(url: &Url) -> String {
    url.to_string()
}

/// Return `scheme://host[:port]/path` of a URL, dropping query and fragment.
///
/// # Example
///
/// ```
/// use base_util_url::get_base_path;
///
/// let base = get_base_path("https://maps.bvb.de:8443/geoserver/wms?SERVICE=WMS#top").unwrap();
/// assert_eq!(base, "https://maps.bvb.de:8443/geoserver/wms");
/// ```
pub fn get_base_path(url: &str) -> Result<String, UrlError> {
    let parsed = read(url)?;
    Ok(base_path_of(&parsed))
}

pub(crate) fn base_path_of(url: &Url) -> String {
    let mut base = format!("{}://", url.scheme());
    if let Some(host) = url.host_str() {
        base.push_str(host);
    }
    if let Some(port) = url.port() {
        base.push(':');
        base.push_str(&port.to_string());
    }
    base.push_str(url.path());
    base
}
