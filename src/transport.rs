//! HTTP transport seam.
//!
//! The client only needs one capability from the network: a GET with some
//! headers and a deadline, returning the raw body. [`HttpTransport`] provides
//! it over a blocking `reqwest` client; tests and alternative HTTP stacks can
//! supply their own [`Transport`].

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::RequestHeaders;
use crate::error::{DgkalaError, Result};

/// Executes a GET request and returns the response body.
///
/// Implementations must map a non-success status to an error; the body of a
/// failed response is never handed to a decoder.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str, headers: &RequestHeaders, timeout: Duration) -> Result<Vec<u8>>;
}

/// [`Transport`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an already configured client (proxy, TLS, user agent).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, headers: &RequestHeaders, timeout: Duration) -> Result<Vec<u8>> {
        tracing::debug!(url, ?timeout, "GET");

        let mut request = self.client.get(url).timeout(timeout);
        for (name, value) in headers.pairs() {
            request = request.header(name, value);
        }

        let resp = request.send()?;
        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "non-success response");
            return Err(DgkalaError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.bytes()?;
        Ok(body.to_vec())
    }
}
