//! Helpers for OGC web service requests (WMS, WFS, ...).

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::query::{join_query_params, object_to_request_string, query_params_of, QueryParams};
use crate::{base_path_of, read, UrlError};

/// OGC service types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Service {
    #[default]
    Wms,
    Wfs,
    Csw,
    Wcs,
    Wps,
    Wts,
    Wcts,
}

impl Service {
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Wms => "WMS",
            Service::Wfs => "WFS",
            Service::Csw => "CSW",
            Service::Wcs => "WCS",
            Service::Wps => "WPS",
            Service::Wts => "WTS",
            Service::Wcts => "WCTS",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "WMS" => Ok(Service::Wms),
            "WFS" => Ok(Service::Wfs),
            "CSW" => Ok(Service::Csw),
            "WCS" => Ok(Service::Wcs),
            "WPS" => Ok(Service::Wps),
            "WTS" => Ok(Service::Wts),
            "WCTS" => Ok(Service::Wcts),
            _ => Err(UrlError::UnknownService(s.to_string())),
        }
    }
}

/// Options for [`create_valid_get_capabilities_request`].
#[derive(Debug, Clone)]
pub struct CapabilitiesOptions {
    /// Service to request if the URL names none. Default is WMS.
    pub service: Service,
    /// Version to request if the URL names none. Default is `1.3.0`.
    pub version: String,
}

impl Default for CapabilitiesOptions {
    fn default() -> Self {
        Self {
            service: Service::Wms,
            version: "1.3.0".to_string(),
        }
    }
}

/// Options for [`bundle_ogc_requests`].
#[derive(Debug, Clone)]
pub struct BundleOptions {
    /// Parameters whose values are merged across requests.
    /// Default is `LAYERS`, `QUERY_LAYERS` and `STYLES`.
    pub bundle_params: Vec<String>,
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            bundle_params: ["LAYERS", "QUERY_LAYERS", "STYLES"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

fn has_key_ignore_case(params: &QueryParams, key: &str) -> bool {
    params.keys().any(|k| k.eq_ignore_ascii_case(key))
}

/// Turn a URL into a GetCapabilities request by adding `SERVICE`, `REQUEST`
/// and `VERSION` unless they are already present (in any case).
///
/// # Example
///
/// ```
/// use base_util_url::{create_valid_get_capabilities_request, CapabilitiesOptions};
///
/// let url = create_valid_get_capabilities_request(
///     "https://maps.example.org/wms?map=roads",
///     &CapabilitiesOptions::default(),
/// )
/// .unwrap();
/// assert_eq!(
///     url,
///     "https://maps.example.org/wms?map=roads&SERVICE=WMS&REQUEST=GetCapabilities&VERSION=1.3.0"
/// );
/// ```
pub fn create_valid_get_capabilities_request(
    url: &str,
    options: &CapabilitiesOptions,
) -> Result<String, UrlError> {
    let parsed = read(url)?;
    let base = base_path_of(&parsed);
    let mut params = query_params_of(&parsed);

    if !has_key_ignore_case(&params, "SERVICE") {
        params.insert("SERVICE".to_string(), options.service.to_string());
    }
    if !has_key_ignore_case(&params, "REQUEST") {
        params.insert("REQUEST".to_string(), "GetCapabilities".to_string());
    }
    if !has_key_ignore_case(&params, "VERSION") {
        params.insert("VERSION".to_string(), options.version.clone());
    }

    Ok(format!("{base}?{}", object_to_request_string(&params)))
}

/// Group requests by their base path and merge the bundle parameters of
/// requests sharing a base path.
///
/// For example the two GetFeatureInfo requests
///
/// ```text
/// https://maps.bvb.de?SERVICE=WMS&REQUEST=GetFeatureInfo&LAYERS=Shinji
/// https://maps.bvb.de?SERVICE=WMS&REQUEST=GetFeatureInfo&LAYERS=Kagawa
/// ```
///
/// yield one entry for `https://maps.bvb.de/` with `LAYERS=Shinji,Kagawa`.
/// All other parameters are taken from the first request of each group.
pub fn bundle_ogc_requests<S: AsRef<str>>(
    urls: &[S],
    options: &BundleOptions,
) -> Result<IndexMap<String, QueryParams>, UrlError> {
    let mut bundled: IndexMap<String, QueryParams> = IndexMap::new();

    for url in urls {
        let parsed = read(url.as_ref())?;
        let base = base_path_of(&parsed);
        let params = query_params_of(&parsed);

        match bundled.get_mut(&base) {
            Some(existing) => {
                *existing = join_query_params(existing, &params, options.bundle_params.as_slice());
            }
            None => {
                bundled.insert(base, params);
            }
        }
    }

    Ok(bundled)
}

/// Like [`bundle_ogc_requests`], but returns one URL string per base path.
pub fn bundle_ogc_requests_to_urls<S: AsRef<str>>(
    urls: &[S],
    options: &BundleOptions,
) -> Result<Vec<String>, UrlError> {
    let bundled = bundle_ogc_requests(urls, options)?;
    Ok(bundled
        .iter()
        .map(|(base, params)| {
            if params.is_empty() {
                base.clone()
            } else {
                format!("{base}?{}", object_to_request_string(params))
            }
        })
        .collect())
}
