//! Digikala catalog SDK for Rust.
//!
//! Fetches incredible offers, keyword search results and single-product
//! lookups from the Digikala API and decodes them into typed records.
//! Offers and product lookups are decoded strictly; search hits are decoded
//! field by field so upstream index changes never fail a whole search.
//!
//! # Quick start
//!
//! ```no_run
//! use dgkala_sdk::DgkalaClient;
//!
//! let client = DgkalaClient::builder().build().unwrap();
//!
//! let offers = client.list_incredible_offers().unwrap();
//! let result = client.search("laptop").unwrap();
//! for hit in &result.hits {
//!     println!("{} {}", hit.id, hit.english_title);
//! }
//! ```

pub mod address;
#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod decode;
pub mod error;
pub mod models;
pub mod transport;

#[cfg(feature = "async")]
pub use async_client::AsyncDgkalaClient;
pub use config::{Endpoints, RequestHeaders};
pub use error::{DgkalaError, Result};
pub use models::{Color, ExistsStatus, ImagePaths, Offer, ProductDetail, SearchHit, SearchResult};
pub use transport::{HttpTransport, Transport};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// DgkalaClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`DgkalaClient`].
///
/// Use [`DgkalaClient::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](DgkalaClientBuilder::build).
pub struct DgkalaClientBuilder {
    endpoints: Endpoints,
    application_version: String,
    timeout: Duration,
    transport: Option<Box<dyn Transport>>,
}

impl Default for DgkalaClientBuilder {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            application_version: config::DEFAULT_APPLICATION_VERSION.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            transport: None,
        }
    }
}

impl DgkalaClientBuilder {
    /// Override the upstream addresses. Defaults to the production service.
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Value of the `ApplicationVersion` header sent with offer and product
    /// requests. Defaults to `1.3.2`.
    pub fn application_version(mut self, version: impl Into<String>) -> Self {
        self.application_version = version.into();
        self
    }

    /// Deadline for each HTTP request. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a custom transport instead of the default `reqwest` one.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Build the client. Fails only if the default HTTP client cannot be
    /// constructed.
    pub fn build(self) -> Result<DgkalaClient> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Box::new(HttpTransport::new()?),
        };
        Ok(DgkalaClient {
            endpoints: self.endpoints,
            application_version: self.application_version,
            timeout: self.timeout,
            transport,
        })
    }
}

// ---------------------------------------------------------------------------
// DgkalaClient
// ---------------------------------------------------------------------------

/// The main entry point of the SDK.
///
/// Every call builds its address, performs a single blocking GET and decodes
/// the body from scratch. There is no retry and no caching; the client holds
/// no mutable state and can be shared between threads.
pub struct DgkalaClient {
    endpoints: Endpoints,
    application_version: String,
    timeout: Duration,
    transport: Box<dyn Transport>,
}

impl DgkalaClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> DgkalaClientBuilder {
        DgkalaClientBuilder::default()
    }

    /// A client with default configuration.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Fetch the current incredible offers.
    pub fn list_incredible_offers(&self) -> Result<Vec<Offer>> {
        let address = self.endpoints.offers_address();
        let body = self.fetch(&address, &self.versioned_headers())?;
        decode::decode_offer_list(&body)
    }

    /// Search the catalog for `keyword`.
    ///
    /// Hits keep the upstream relevance order. Search requests carry no
    /// custom headers.
    pub fn search(&self, keyword: &str) -> Result<SearchResult> {
        let address = self.endpoints.search_address(keyword);
        let body = self.fetch(&address, &RequestHeaders::none())?;
        decode::decode_search_result_with(&body, &self.endpoints)
    }

    /// Look up a single product by its numeric id.
    pub fn get_product_by_id(&self, id: u64) -> Result<ProductDetail> {
        let address = self.endpoints.product_address(id);
        let body = self.fetch(&address, &self.versioned_headers())?;
        decode::decode_product_detail(&body)
    }

    /// The addresses this client talks to.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Deadline applied to each request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn versioned_headers(&self) -> RequestHeaders {
        RequestHeaders::with_application_version(self.application_version.as_str())
    }

    fn fetch(&self, address: &str, headers: &RequestHeaders) -> Result<Vec<u8>> {
        self.transport.get(address, headers, self.timeout)
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for DgkalaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DgkalaClient(search={}, application_version={}, timeout={:?})",
            self.endpoints.search, self.application_version, self.timeout
        )
    }
}

// ---------------------------------------------------------------------------
// One-shot helpers
// ---------------------------------------------------------------------------

/// Fetch the incredible offers with a default client.
pub fn incredible_offers() -> Result<Vec<Offer>> {
    DgkalaClient::new()?.list_incredible_offers()
}

/// Search the catalog with a default client.
pub fn search(keyword: &str) -> Result<SearchResult> {
    DgkalaClient::new()?.search(keyword)
}
