//! Async wrapper around [`DgkalaClient`] for use in async runtimes (Tokio, etc.).
//!
//! Every call runs on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking `reqwest` client waits on the network.
//!
//! # Example
//!
//! ```no_run
//! use dgkala_sdk::AsyncDgkalaClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AsyncDgkalaClient::builder().build().await.unwrap();
//!     let result = client.search("laptop").await.unwrap();
//!     println!("{} hits", result.hits.len());
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::config::Endpoints;
use crate::error::{DgkalaError, Result};
use crate::models::{Offer, ProductDetail, SearchResult};
use crate::transport::Transport;
use crate::{DgkalaClient, DgkalaClientBuilder};

// ---------------------------------------------------------------------------
// AsyncDgkalaClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncDgkalaClient`].
#[derive(Default)]
pub struct AsyncDgkalaClientBuilder {
    inner: DgkalaClientBuilder,
}

impl AsyncDgkalaClientBuilder {
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.inner = self.inner.endpoints(endpoints);
        self
    }

    pub fn application_version(mut self, version: impl Into<String>) -> Self {
        self.inner = self.inner.application_version(version);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.inner = self.inner.transport(transport);
        self
    }

    /// Build the client on the blocking pool; the default `reqwest` blocking
    /// client must not be created on an async worker thread.
    pub async fn build(self) -> Result<AsyncDgkalaClient> {
        let inner = self.inner;
        tokio::task::spawn_blocking(move || {
            let client = inner.build()?;
            Ok(AsyncDgkalaClient {
                inner: Arc::new(client),
            })
        })
        .await
        .map_err(|e| DgkalaError::Task(format!("join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncDgkalaClient
// ---------------------------------------------------------------------------

/// Async wrapper around [`DgkalaClient`].
///
/// The wrapped client holds no mutable state, so it is shared through an
/// [`Arc`] without locking. Cloning is cheap.
#[derive(Clone)]
pub struct AsyncDgkalaClient {
    inner: Arc<DgkalaClient>,
}

impl AsyncDgkalaClient {
    pub fn builder() -> AsyncDgkalaClientBuilder {
        AsyncDgkalaClientBuilder::default()
    }

    /// Run a sync client operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&DgkalaClient) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(|e| DgkalaError::Task(format!("join error: {e}")))?
    }

    pub async fn list_incredible_offers(&self) -> Result<Vec<Offer>> {
        self.run(|c| c.list_incredible_offers()).await
    }

    pub async fn search(&self, keyword: &str) -> Result<SearchResult> {
        let keyword = keyword.to_string();
        self.run(move |c| c.search(&keyword)).await
    }

    pub async fn get_product_by_id(&self, id: u64) -> Result<ProductDetail> {
        self.run(move |c| c.get_product_by_id(id)).await
    }
}
