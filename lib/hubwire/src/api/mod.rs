//! Typed resource clients over a [`Connection`].
//!
//! Each endpoint client is a thin call site: it builds a resource URL,
//! delegates to the connection's verb methods, and unwraps the decoded
//! body. Non-success statuses surface as [`Error::Http`] here; the
//! pipeline below never interprets status codes.

mod authorizations;
mod users;

pub use authorizations::AuthorizationsClient;
pub use users::UsersClient;

use crate::{Connection, Error, Response, Result};

/// Default origin for the GitHub v3 API.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Entry point for the typed GitHub API surface.
///
/// # Example
///
/// ```ignore
/// use hubwire::GitHubClient;
///
/// let github = GitHubClient::new()?;
/// let user = github.users().get("octocat").await?;
/// ```
#[derive(Debug, Clone)]
pub struct GitHubClient {
    connection: Connection,
}

impl GitHubClient {
    /// Create a client against the public GitHub API with the default
    /// pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be constructed.
    pub fn new() -> Result<Self> {
        Ok(Self {
            connection: Connection::new(GITHUB_API_URL)?,
        })
    }

    /// Create a client over an already-configured connection
    /// (custom base address, auth middleware, test transport).
    #[must_use]
    pub fn with_connection(connection: Connection) -> Self {
        Self { connection }
    }

    /// The underlying connection.
    #[must_use]
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Client for user resources.
    #[must_use]
    pub fn users(&self) -> UsersClient<'_> {
        UsersClient::new(&self.connection)
    }

    /// Client for OAuth authorization resources.
    #[must_use]
    pub fn authorizations(&self) -> AuthorizationsClient<'_> {
        AuthorizationsClient::new(&self.connection)
    }
}

/// Fail with [`Error::Http`] unless the response status is 2xx.
fn ensure_success<T>(response: Response<T>) -> Result<Response<T>> {
    if response.is_success() {
        return Ok(response);
    }
    Err(Error::http_with_body(
        response.status(),
        format!("request failed with status {}", response.status()),
        response.body(),
    ))
}

/// Unwrap the decoded body of a successful response.
fn body_or_error<T>(response: Response<T>) -> Result<T> {
    let response = ensure_success(response)?;
    response
        .into_body_object()
        .ok_or_else(|| Error::invalid_request("response carried no decodable JSON body"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn ensure_success_passes_2xx() {
        let response: Response<()> = Response::new(204, HashMap::new(), String::new());
        assert!(ensure_success(response).is_ok());
    }

    #[test]
    fn ensure_success_maps_failure_status_to_http_error() {
        let response: Response<()> =
            Response::new(404, HashMap::new(), r#"{"message":"Not Found"}"#.to_string());

        let err = ensure_success(response).expect_err("should fail");
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.body(), Some(r#"{"message":"Not Found"}"#));
    }

    #[test]
    fn body_or_error_requires_decoded_body() {
        let response: Response<String> = Response::new(200, HashMap::new(), String::new());
        let err = body_or_error(response).expect_err("should fail");
        assert!(err.to_string().contains("no decodable JSON body"));
    }

    #[test]
    fn github_client_defaults_to_public_api() {
        let github = GitHubClient::new().expect("client");
        assert_eq!(
            github.connection().base_address().as_str(),
            "https://api.github.com/"
        );
    }
}
