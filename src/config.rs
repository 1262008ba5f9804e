use std::time::Duration;

pub const INCREDIBLE_OFFERS_URL: &str =
    "https://service2.digikala.com/api/IncredibleOffer/GetIncredibleOffer";
pub const SEARCH_URL: &str = "https://search.digikala.com/api/search";
pub const PRODUCT_URL: &str = "https://service2.digikala.com/api/ProductCatalog/GetProductById";
pub const STATIC_FILES_URL: &str = "https://file.digikala.com/digikala/";

/// Value sent in the `ApplicationVersion` header unless overridden.
pub const DEFAULT_APPLICATION_VERSION: &str = "1.3.2";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Upstream addresses used to build request and static-file URLs.
///
/// [`Endpoints::default()`] points at the production service. Tests swap in
/// a local mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub incredible_offers: String,
    pub search: String,
    /// Base for product lookups; the id is appended as a path segment.
    pub product: String,
    /// Prefix for relative image paths returned by the API.
    pub static_files: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            incredible_offers: INCREDIBLE_OFFERS_URL.to_string(),
            search: SEARCH_URL.to_string(),
            product: PRODUCT_URL.to_string(),
            static_files: STATIC_FILES_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Point every endpoint at `base`, keeping the production paths.
    ///
    /// `base` is expected without a trailing slash, e.g. `http://127.0.0.1:8080`.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            incredible_offers: format!("{base}/api/IncredibleOffer/GetIncredibleOffer"),
            search: format!("{base}/api/search"),
            product: format!("{base}/api/ProductCatalog/GetProductById"),
            static_files: format!("{base}/digikala/"),
        }
    }
}

/// Custom headers attached to a request.
///
/// `application_version` is the only header the upstream service recognizes;
/// `None` sends no custom headers at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    pub application_version: Option<String>,
}

impl RequestHeaders {
    pub const APPLICATION_VERSION: &'static str = "ApplicationVersion";

    /// No custom headers.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_application_version(version: impl Into<String>) -> Self {
        Self {
            application_version: Some(version.into()),
        }
    }

    /// Header name/value pairs in the order they are sent.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        self.application_version
            .as_deref()
            .map(|v| vec![(Self::APPLICATION_VERSION, v)])
            .unwrap_or_default()
    }
}
