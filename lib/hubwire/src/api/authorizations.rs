//! OAuth authorization resources.
//!
//! These endpoints require basic authentication on the connection.

use crate::{Connection, Result};
use crate::models::{Authorization, AuthorizationUpdate};

use super::{body_or_error, ensure_success};

/// Client for the `/authorizations` resources.
#[derive(Debug, Clone, Copy)]
pub struct AuthorizationsClient<'a> {
    connection: &'a Connection,
}

impl<'a> AuthorizationsClient<'a> {
    pub(super) fn new(connection: &'a Connection) -> Self {
        Self { connection }
    }

    /// Get all authorizations for the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the response does not
    /// decode.
    pub async fn all(&self) -> Result<Vec<Authorization>> {
        body_or_error(self.connection.get("/authorizations").await?)
    }

    /// Get a single authorization by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the response does not
    /// decode.
    pub async fn get(&self, id: u64) -> Result<Authorization> {
        let endpoint = format!("/authorizations/{id}");
        body_or_error(self.connection.get(&endpoint).await?)
    }

    /// Create a new authorization.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the response does not
    /// decode.
    pub async fn create(&self, new: &AuthorizationUpdate) -> Result<Authorization> {
        body_or_error(self.connection.post("/authorizations", new).await?)
    }

    /// Update an existing authorization.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the response does not
    /// decode.
    pub async fn update(&self, id: u64, update: &AuthorizationUpdate) -> Result<Authorization> {
        let endpoint = format!("/authorizations/{id}");
        body_or_error(self.connection.patch(&endpoint, update).await?)
    }

    /// Delete an authorization.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the status is not 2xx.
    pub async fn delete(&self, id: u64) -> Result<()> {
        let endpoint = format!("/authorizations/{id}");
        let response = self.connection.delete(&endpoint).await?;
        ensure_success(response).map(|_| ())
    }
}
