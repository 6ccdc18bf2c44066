use url::{Host, Url};

/// Options for [`is_valid`].
#[derive(Debug, Clone)]
pub struct ValidationOptions {
    /// Reject URLs without a scheme. Default is true.
    pub require_protocol: bool,
    /// Reject host names without a top level domain. Default is false.
    pub require_tld: bool,
    /// Accepted schemes. Default is `http`, `https` and `ftp`.
    pub protocols: Vec<String>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            require_protocol: true,
            require_tld: false,
            protocols: ["http", "https", "ftp"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

fn has_tld(domain: &str) -> bool {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    match domain.rsplit_once('.') {
        Some((_, tld)) => tld.len() >= 2 && tld.chars().all(|c| c.is_alphabetic()),
        None => false,
    }
}

fn parse_lenient(url: &str, options: &ValidationOptions) -> Option<Url> {
    match Url::parse(url) {
        Ok(parsed) => Some(parsed),
        Err(url::ParseError::RelativeUrlWithoutBase) if !options.require_protocol => {
            Url::parse(&format!("http://{url}")).ok()
        }
        Err(_) => None,
    }
}

/// Check if a string is a valid URL.
///
/// # Example
///
/// ```
/// use base_util_url::{is_valid, ValidationOptions};
///
/// let opts = ValidationOptions::default();
/// assert!(is_valid("https://localhost:8080/geoserver", &opts));
/// assert!(!is_valid("localhost:8080/geoserver", &opts));
/// ```
pub fn is_valid(url: &str, options: &ValidationOptions) -> bool {
    if url.is_empty() || url.chars().any(char::is_whitespace) {
        return false;
    }
    let Some(parsed) = parse_lenient(url, options) else {
        return false;
    };
    if !options.protocols.iter().any(|p| p == parsed.scheme()) {
        return false;
    }
    match parsed.host() {
        Some(Host::Domain(domain)) => !options.require_tld || has_tld(domain),
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        None => false,
    }
}
