//! Envelope types and JSON codec for the hubwire GitHub API client.
//!
//! This crate provides the foundational types the pipeline threads a
//! call through:
//! - [`Method`] - HTTP verb enum
//! - [`Body`], [`Request`] and [`RequestBuilder`] - outgoing request envelope
//! - [`Response`] - typed response envelope
//! - [`Env`] - the per-call request/response pairing
//! - [`Error`] and [`Result`] - error handling
//! - [`codec`] - GitHub-flavored JSON envelope rules
//! - [`comma_separated`] and [`github_enum!`] - field-mapping strategy helpers

mod body;
pub mod codec;
mod envelope;
mod error;
mod fields;
mod method;
mod request;
mod response;

pub use body::{Body, from_json, to_json};
pub use envelope::Env;
pub use error::{Error, Result};
pub use fields::comma_separated;
pub use method::Method;
pub use request::{Request, RequestBuilder};
pub use response::Response;

// Re-exported for the `github_enum!` macro expansion.
#[doc(hidden)]
pub use serde;
