//! HTTP request envelope.
//!
//! A [`Request`] pairs a connection-level base address with a relative
//! endpoint; the two are only joined into an absolute URL by the
//! terminal transport stage. Intermediate pipeline stages may mutate
//! headers and body freely until then.

use std::collections::HashMap;

use url::Url;

use crate::{Body, Method, Result};

/// An HTTP request with method, base address, endpoint, headers, and
/// optional body.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    base_address: Url,
    endpoint: String,
    headers: HashMap<String, String>,
    body: Option<Body>,
}

impl Request {
    /// Creates a new [`RequestBuilder`].
    #[must_use]
    pub fn builder(method: Method, base_address: Url, endpoint: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(method, base_address, endpoint)
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Base address of the owning connection.
    #[must_use]
    pub fn base_address(&self) -> &Url {
        &self.base_address
    }

    /// Relative endpoint path.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Join base address and endpoint into the absolute URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be resolved against the
    /// base address.
    pub fn absolute_url(&self) -> Result<Url> {
        self.base_address.join(&self.endpoint).map_err(Into::into)
    }

    /// Request headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Mutable access to headers.
    pub fn headers_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Request body.
    #[must_use]
    pub const fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Replace the request body.
    pub fn set_body(&mut self, body: Option<Body>) {
        self.body = body;
    }
}

/// Builder for constructing [`Request`] instances.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    base_address: Url,
    endpoint: String,
    headers: HashMap<String, String>,
    body: Option<Body>,
}

impl RequestBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(method: Method, base_address: Url, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            base_address,
            endpoint: endpoint.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the [`Request`].
    #[must_use]
    pub fn build(self) -> Request {
        Request {
            method: self.method,
            base_address: self.base_address,
            endpoint: self.endpoint,
            headers: self.headers,
            body: self.body,
        }
    }
}
