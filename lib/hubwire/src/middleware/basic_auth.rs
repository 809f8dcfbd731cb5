//! Basic authentication middleware.
//!
//! Adds an `Authorization: Basic <base64(user:pass)>` header to every
//! outgoing request.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use base64::Engine;
use tower::{Layer, Service};

use crate::{Error, Request, Response, Result};

/// Layer that adds basic authentication to requests.
#[derive(Debug, Clone)]
pub struct BasicAuthLayer {
    /// Base64-encoded "username:password".
    encoded_credentials: Arc<str>,
}

impl BasicAuthLayer {
    /// Create a new basic auth layer with the given username and password.
    pub fn new(username: impl AsRef<str>, password: impl AsRef<str>) -> Self {
        let credentials = format!("{}:{}", username.as_ref(), password.as_ref());
        let encoded = base64::engine::general_purpose::STANDARD.encode(credentials);
        Self {
            encoded_credentials: Arc::from(encoded),
        }
    }
}

impl<S> Layer<S> for BasicAuthLayer {
    type Service = BasicAuth<S>;

    fn layer(&self, inner: S) -> Self::Service {
        BasicAuth {
            inner,
            encoded_credentials: Arc::clone(&self.encoded_credentials),
        }
    }
}

/// Service that adds basic authentication to requests.
#[derive(Debug, Clone)]
pub struct BasicAuth<S> {
    inner: S,
    encoded_credentials: Arc<str>,
}

impl<S> Service<Request> for BasicAuth<S>
where
    S: Service<Request, Response = Response<()>, Error = Error> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response<()>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<()>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request) -> Self::Future {
        request.headers_mut().insert(
            "Authorization".to_string(),
            format!("Basic {}", self.encoded_credentials),
        );

        let mut inner = self.inner.clone();
        Box::pin(async move { inner.call(request).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_auth_layer_clone() {
        let layer = BasicAuthLayer::new("user", "pass");
        let _cloned = layer.clone();
    }

    #[test]
    fn basic_auth_encodes_correctly() {
        // "user:pass" -> "dXNlcjpwYXNz"
        let layer = BasicAuthLayer::new("user", "pass");
        assert_eq!(&*layer.encoded_credentials, "dXNlcjpwYXNz");
    }
}
