//! Typed async client for the GitHub v3 REST API.
//!
//! Calls flow through a composable middleware pipeline: the
//! [`Connection`] facade serializes the request, threads it through
//! the configured stages down to the hyper-backed terminal transport,
//! and decodes the JSON response into the caller's type.
//!
//! # Example
//!
//! ```ignore
//! use hubwire::{Connection, GitHubClient};
//!
//! let connection = Connection::builder()
//!     .base_address("https://api.github.com")
//!     .basic_auth("octocat", "secret")
//!     .logging()
//!     .build()?;
//!
//! let github = GitHubClient::with_connection(connection);
//! let me = github.users().current().await?;
//! println!("{} has {} public repos", me.login, me.public_repos);
//! ```

mod api;
mod config;
mod connection;
mod connector;
pub mod middleware;
pub mod models;
pub mod prelude;
mod transport;

pub use api::{AuthorizationsClient, GITHUB_API_URL, GitHubClient, UsersClient};
pub use config::{TransportConfig, TransportConfigBuilder};
pub use connection::{App, AppFuture, Connection, ConnectionBuilder};
pub use transport::HttpTransport;

// Re-export tower for custom stage composition
pub use tower;

// Re-export core types
pub use hubwire_core::{
    Body, Env, Error, Method, Request, RequestBuilder, Response, Result, codec, comma_separated,
    from_json, to_json,
};
