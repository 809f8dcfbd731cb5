//! User resources.

use crate::{Connection, Error, Result};
use crate::models::{User, UserUpdate};

use super::body_or_error;

/// Client for the `/user` and `/users` resources.
#[derive(Debug, Clone, Copy)]
pub struct UsersClient<'a> {
    connection: &'a Connection,
}

impl<'a> UsersClient<'a> {
    pub(super) fn new(connection: &'a Connection) -> Self {
        Self { connection }
    }

    /// Get the authenticated user. Requires credentials on the
    /// connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the response is not a
    /// user.
    pub async fn current(&self) -> Result<User> {
        body_or_error(self.connection.get("/user").await?)
    }

    /// Get a user by login name.
    ///
    /// # Errors
    ///
    /// Returns an argument error for an empty login, or an error if
    /// the call fails.
    pub async fn get(&self, login: &str) -> Result<User> {
        if login.is_empty() {
            return Err(Error::invalid_argument("login", "must not be empty"));
        }
        let endpoint = format!("/users/{login}");
        body_or_error(self.connection.get(&endpoint).await?)
    }

    /// Update the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the response is not a
    /// user.
    pub async fn update(&self, update: &UserUpdate) -> Result<User> {
        body_or_error(self.connection.patch("/user", update).await?)
    }
}
