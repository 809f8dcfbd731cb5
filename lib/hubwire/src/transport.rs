//! Terminal pipeline stage: the hyper-backed network transport.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_rustls::HttpsConnector;
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use tower_service::Service;
use tracing::debug;

use crate::{
    Error, Request, Response, Result, config::TransportConfig, connector::https_connector,
};

/// The innermost pipeline stage.
///
/// Joins the request's base address and endpoint into an absolute
/// URL, performs the HTTP exchange, and populates the response with
/// status, headers, content type, and the raw text body. Expects the
/// body to already be wire-ready; a structured body that was never
/// serialized is a request error.
#[derive(Clone)]
pub struct HttpTransport {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    config: TransportConfig,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Create a transport with the given configuration.
    #[must_use]
    pub fn new(config: TransportConfig) -> Self {
        let connector = https_connector();

        let inner = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_idle_per_host)
            .build(connector);

        Self { inner, config }
    }

    /// Build a hyper request from a hubwire request.
    fn build_hyper_request(request: &Request) -> Result<http::Request<Full<Bytes>>> {
        let url = request.absolute_url()?;

        let mut builder = http::Request::builder()
            .method(http::Method::from(request.method()))
            .uri(url.as_str());

        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let body = match request.body() {
            None => Full::default(),
            Some(body) => match body.as_bytes() {
                Some(bytes) => Full::new(bytes),
                None => {
                    return Err(Error::invalid_request(
                        "structured body reached the transport unserialized",
                    ));
                }
            },
        };

        builder
            .body(body)
            .map_err(|e| Error::invalid_request(e.to_string()))
    }

    /// Extract response headers as a `HashMap`.
    fn extract_headers(headers: &http::HeaderMap) -> HashMap<String, String> {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    async fn execute(&self, request: Request) -> Result<Response<()>> {
        debug!(
            method = %request.method(),
            endpoint = request.endpoint(),
            "dispatching request"
        );

        let hyper_request = Self::build_hyper_request(&request)?;

        let response = tokio::time::timeout(self.config.timeout, self.inner.request(hyper_request))
            .await
            .map_err(|_| Error::Timeout)?
            .map_err(Self::map_hyper_error)?;

        let status = response.status().as_u16();
        let response_headers = Self::extract_headers(response.headers());

        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| Error::connection(e.to_string()))?
            .to_bytes();
        let body = String::from_utf8_lossy(&body).into_owned();

        Ok(Response::new(status, response_headers, body))
    }

    #[allow(clippy::needless_pass_by_value)]
    fn map_hyper_error(err: hyper_util::client::legacy::Error) -> Error {
        let msg = err.to_string();

        if err.is_connect() {
            return Error::connection(msg);
        }

        if msg.contains("ssl") || msg.contains("tls") || msg.contains("certificate") {
            return Error::tls(msg);
        }

        Error::connection(msg)
    }
}

impl Service<Request> for HttpTransport {
    type Response = Response<()>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response>> + Send + 'static>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let transport = self.clone();
        Box::pin(async move { transport.execute(request).await })
    }
}

#[cfg(test)]
mod tests {
    use hubwire_core::{Body, Method};
    use url::Url;

    use super::*;

    fn base() -> Url {
        Url::parse("https://api.github.com").expect("valid URL")
    }

    #[test]
    fn builds_hyper_request_with_absolute_url_and_headers() {
        let request = Request::builder(Method::Get, base(), "/users/octocat")
            .header("Accept", "application/json")
            .build();

        let hyper_request = HttpTransport::build_hyper_request(&request).expect("request");

        assert_eq!(hyper_request.method(), http::Method::GET);
        assert_eq!(
            hyper_request.uri().to_string(),
            "https://api.github.com/users/octocat"
        );
        assert_eq!(
            hyper_request
                .headers()
                .get("Accept")
                .and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }

    #[test]
    fn rejects_unserialized_structured_body() {
        let request = Request::builder(Method::Post, base(), "/authorizations")
            .body(serde_json::json!({"note": "test"}))
            .build();

        let err = HttpTransport::build_hyper_request(&request).expect_err("should fail");
        assert!(err.to_string().contains("unserialized"));
    }

    #[test]
    fn passes_text_body_bytes_through() {
        let request = Request::builder(Method::Post, base(), "/markdown/raw")
            .body(Body::Text("# hello".to_string()))
            .build();

        let hyper_request = HttpTransport::build_hyper_request(&request).expect("request");
        // Full<Bytes> does not expose its contents; building without
        // error is the contract under test here.
        drop(hyper_request);
    }
}
