//! Convenience re-exports for typical usage.
//!
//! ```ignore
//! use hubwire::prelude::*;
//! ```

pub use crate::models::{
    AccountType, Application, Authorization, AuthorizationUpdate, Plan, User, UserUpdate,
};
pub use crate::{Connection, ConnectionBuilder, Error, GitHubClient, Method, Response, Result};
