//! The connection facade and pipeline builder.
//!
//! [`Connection`] is the single entry point resource clients use to
//! perform a remote call. Configuration happens on
//! [`ConnectionBuilder`]; [`ConnectionBuilder::build`] freezes it and
//! composes the middleware pipeline exactly once. The composed
//! pipeline (the "app") is shared across clones and concurrent calls;
//! each call owns its own [`Env`].

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::de::DeserializeOwned;
use tower::Layer;
use tower::util::BoxCloneService;
use tower_service::Service;
use url::Url;

use crate::{
    Env, Error, Method, Request, Response, Result,
    config::{TransportConfig, TransportConfigBuilder},
    middleware::{BasicAuthLayer, LoggingLayer, TokenAuthLayer},
    transport::HttpTransport,
};
use hubwire_core::{Body, codec};

/// The composed pipeline: a type-erased stage from request to
/// undecoded response.
pub type App = BoxCloneService<Request, Response<()>, Error>;

/// Future type for pipeline invocations.
pub type AppFuture = Pin<Box<dyn Future<Output = Result<Response<()>>> + Send + 'static>>;

/// Thread-safe wrapper for the composed [`App`].
///
/// Locks only to clone the service, then releases before awaiting.
#[derive(Clone)]
struct SharedApp {
    inner: Arc<Mutex<App>>,
}

impl SharedApp {
    fn new(app: App) -> Self {
        Self {
            inner: Arc::new(Mutex::new(app)),
        }
    }

    fn call(&self, request: Request) -> AppFuture {
        let mut app = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone();

        Box::pin(async move { app.call(request).await })
    }
}

/// Entry point for calls against one remote API origin.
///
/// # Example
///
/// ```ignore
/// use hubwire::Connection;
///
/// let connection = Connection::builder()
///     .base_address("https://api.github.com")
///     .basic_auth("octocat", "secret")
///     .build()?;
///
/// let response = connection.get::<User>("/user").await?;
/// ```
#[derive(Clone)]
pub struct Connection {
    base_address: Url,
    app: SharedApp,
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("base_address", &self.base_address)
            .finish_non_exhaustive()
    }
}

impl Connection {
    /// Create a connection to the given base address with the default
    /// pipeline (terminal transport only).
    ///
    /// # Errors
    ///
    /// Returns an argument error if the base address is empty or does
    /// not parse as a URL.
    pub fn new(base_address: impl AsRef<str>) -> Result<Self> {
        Self::builder().base_address(base_address).build()
    }

    /// Create a new connection builder.
    #[must_use]
    pub fn builder() -> ConnectionBuilder {
        ConnectionBuilder::default()
    }

    /// Base address all endpoints resolve against.
    #[must_use]
    pub fn base_address(&self) -> &Url {
        &self.base_address
    }

    /// Perform a GET and decode the response body as `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if any pipeline stage fails or the body does
    /// not decode as `T`.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Response<T>> {
        ensure_endpoint(endpoint)?;
        let request =
            Request::builder(Method::Get, self.base_address.clone(), endpoint).build();
        self.run(request).await
    }

    /// Perform a PATCH with a structured body and decode the response
    /// body as `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized, any
    /// pipeline stage fails, or the response does not decode as `T`.
    pub async fn patch<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<Response<T>> {
        ensure_endpoint(endpoint)?;
        let request = Request::builder(Method::Patch, self.base_address.clone(), endpoint)
            .body(Body::json(body)?)
            .build();
        self.run(request).await
    }

    /// Perform a POST with a structured body and decode the response
    /// body as `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized, any
    /// pipeline stage fails, or the response does not decode as `T`.
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<Response<T>> {
        ensure_endpoint(endpoint)?;
        let request = Request::builder(Method::Post, self.base_address.clone(), endpoint)
            .body(Body::json(body)?)
            .build();
        self.run(request).await
    }

    /// Perform a PUT with a structured body and decode the response
    /// body as `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized, any
    /// pipeline stage fails, or the response does not decode as `T`.
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<Response<T>> {
        ensure_endpoint(endpoint)?;
        let request = Request::builder(Method::Put, self.base_address.clone(), endpoint)
            .body(Body::json(body)?)
            .build();
        self.run(request).await
    }

    /// Perform a DELETE. The response carries no typed body; callers
    /// consume the status only.
    ///
    /// # Errors
    ///
    /// Returns an error if any pipeline stage fails.
    pub async fn delete(&self, endpoint: &str) -> Result<Response<()>> {
        ensure_endpoint(endpoint)?;
        let request =
            Request::builder(Method::Delete, self.base_address.clone(), endpoint).build();

        let mut env: Env<()> = Env::new(request);
        codec::serialize_request(&mut env.request)?;
        env.response = self.app.call(env.request.clone()).await?;
        Ok(env.into_response())
    }

    /// Thread one call through the pipeline: serialize, dispatch,
    /// decode.
    async fn run<T: DeserializeOwned>(&self, request: Request) -> Result<Response<T>> {
        let mut env: Env<T> = Env::new(request);
        codec::serialize_request(&mut env.request)?;

        let raw = self.app.call(env.request.clone()).await?;
        env.response = raw.into_typed();

        // Error bodies have their own shape; decoding them as `T`
        // would mask the HTTP failure with a decode failure.
        if env.response.is_success() {
            codec::deserialize_response(&mut env.response)?;
        }
        Ok(env.into_response())
    }
}

fn ensure_endpoint(endpoint: &str) -> Result<()> {
    if endpoint.is_empty() {
        return Err(Error::invalid_argument("endpoint", "must not be empty"));
    }
    Ok(())
}

/// Two-phase builder for [`Connection`].
///
/// All configuration happens here; [`build`](Self::build) freezes it
/// and composes the pipeline. Stages registered first are outermost:
/// they see the request first and the response last. The terminal
/// stage defaults to the hyper transport and can be replaced with a
/// test double via [`transport`](Self::transport).
#[derive(Default)]
pub struct ConnectionBuilder {
    base_address: Option<String>,
    config: TransportConfigBuilder,
    layers: Vec<Arc<dyn Fn(App) -> App + Send + Sync>>,
    terminal: Option<App>,
}

impl std::fmt::Debug for ConnectionBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionBuilder")
            .field("base_address", &self.base_address)
            .field("layers_count", &self.layers.len())
            .field("custom_terminal", &self.terminal.is_some())
            .finish_non_exhaustive()
    }
}

impl ConnectionBuilder {
    /// Set the base address (required).
    #[must_use]
    pub fn base_address(mut self, base_address: impl AsRef<str>) -> Self {
        self.base_address = Some(base_address.as_ref().to_string());
        self
    }

    /// Set the transport-level total request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Set the maximum idle connections per host.
    #[must_use]
    pub fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.config = self.config.pool_idle_per_host(count);
        self
    }

    /// Add a middleware stage to the pipeline.
    ///
    /// Stages run in registration order: the first added wraps all
    /// later ones and the terminal transport.
    #[must_use]
    pub fn layer<L>(mut self, layer: L) -> Self
    where
        L: Layer<App> + Send + Sync + 'static,
        L::Service: Service<Request, Response = Response<()>, Error = Error>
            + Clone
            + Send
            + 'static,
        <L::Service as Service<Request>>::Future: Send,
    {
        self.layers.push(Arc::new(move |service| {
            BoxCloneService::new(layer.layer(service))
        }));
        self
    }

    /// Add basic authentication.
    #[must_use]
    pub fn basic_auth(self, username: impl AsRef<str>, password: impl AsRef<str>) -> Self {
        self.layer(BasicAuthLayer::new(username, password))
    }

    /// Add OAuth token authentication (`Authorization: token …`).
    #[must_use]
    pub fn token_auth(self, token: impl Into<String>) -> Self {
        self.layer(TokenAuthLayer::new(token))
    }

    /// Add request/response logging.
    #[must_use]
    pub fn logging(self) -> Self {
        self.layer(LoggingLayer::new())
    }

    /// Replace the terminal transport stage.
    ///
    /// Used to swap in a test double; the default terminal is the
    /// hyper transport.
    #[must_use]
    pub fn transport<S>(mut self, terminal: S) -> Self
    where
        S: Service<Request, Response = Response<()>, Error = Error> + Clone + Send + 'static,
        S::Future: Send,
    {
        self.terminal = Some(BoxCloneService::new(terminal));
        self
    }

    /// Freeze configuration and compose the pipeline.
    ///
    /// # Errors
    ///
    /// Returns an argument error if the base address is absent or
    /// empty, or does not parse as a URL.
    pub fn build(self) -> Result<Connection> {
        let base_address = match self.base_address {
            Some(raw) if !raw.is_empty() => Url::parse(&raw)?,
            Some(_) => {
                return Err(Error::invalid_argument("base_address", "must not be empty"));
            }
            None => {
                return Err(Error::invalid_argument("base_address", "is required"));
            }
        };

        let mut app = self
            .terminal
            .unwrap_or_else(|| BoxCloneService::new(HttpTransport::new(self.config.build())));

        // Wrap inside-out so the first registered stage ends up
        // outermost and runs first.
        for layer_fn in self.layers.into_iter().rev() {
            app = layer_fn(app);
        }

        Ok(Connection {
            base_address,
            app: SharedApp::new(app),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_base_address() {
        let err = Connection::builder().build().expect_err("should fail");
        assert!(matches!(
            err,
            Error::InvalidArgument {
                name: "base_address",
                ..
            }
        ));
    }

    #[test]
    fn build_rejects_empty_base_address() {
        let err = Connection::builder()
            .base_address("")
            .build()
            .expect_err("should fail");
        assert!(matches!(
            err,
            Error::InvalidArgument {
                name: "base_address",
                ..
            }
        ));
    }

    #[test]
    fn build_rejects_unparseable_base_address() {
        let err = Connection::builder()
            .base_address("not a url")
            .build()
            .expect_err("should fail");
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn new_with_valid_base_address() {
        let connection = Connection::new("https://api.github.com").expect("connection");
        assert_eq!(
            connection.base_address().as_str(),
            "https://api.github.com/"
        );
    }

    #[test]
    fn connection_is_clone_and_debug() {
        let connection = Connection::new("https://api.github.com").expect("connection");
        let cloned = connection.clone();
        let debug = format!("{cloned:?}");
        assert!(debug.contains("Connection"));
    }

    #[tokio::test]
    async fn empty_endpoint_is_an_argument_error() {
        let connection = Connection::new("https://api.github.com").expect("connection");
        let err = connection
            .get::<serde_json::Value>("")
            .await
            .expect_err("should fail");
        assert!(matches!(
            err,
            Error::InvalidArgument { name: "endpoint", .. }
        ));
    }
}
