//! OAuth token authentication middleware.
//!
//! Adds an `Authorization: token <token>` header, the form the GitHub
//! v3 API expects for OAuth tokens.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use tower::{Layer, Service};

use crate::{Error, Request, Response, Result};

/// Layer that adds OAuth token authentication to requests.
#[derive(Debug, Clone)]
pub struct TokenAuthLayer {
    token: Arc<str>,
}

impl TokenAuthLayer {
    /// Create a new token auth layer with the given OAuth token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Arc::from(token.into()),
        }
    }
}

impl<S> Layer<S> for TokenAuthLayer {
    type Service = TokenAuth<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TokenAuth {
            inner,
            token: Arc::clone(&self.token),
        }
    }
}

/// Service that adds OAuth token authentication to requests.
#[derive(Debug, Clone)]
pub struct TokenAuth<S> {
    inner: S,
    token: Arc<str>,
}

impl<S> Service<Request> for TokenAuth<S>
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
            format!("token {}", self.token),
        );

        let mut inner = self.inner.clone();
        Box::pin(async move { inner.call(request).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_auth_layer_stores_token() {
        let layer = TokenAuthLayer::new("abc123");
        assert_eq!(&*layer.token, "abc123");
    }
}
