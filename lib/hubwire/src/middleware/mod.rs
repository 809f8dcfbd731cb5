//! Tower middleware stages for the hubwire pipeline.
//!
//! Stages are composed by [`ConnectionBuilder`](crate::ConnectionBuilder)
//! in registration order: the first stage added is outermost, seeing
//! the request first and the response last. Each stage may mutate the
//! request before forwarding and observe the response afterwards;
//! errors from inner stages propagate unmodified.
//!
//! # Available layers
//!
//! - [`BasicAuthLayer`] - Adds `Authorization: Basic <base64>` header
//! - [`TokenAuthLayer`] - Adds `Authorization: token <token>` header
//! - [`LoggingLayer`] - Logs requests/responses using `tracing`

mod basic_auth;
mod logging;
mod token_auth;

pub use basic_auth::{BasicAuth, BasicAuthLayer};
pub use logging::{LogLevel, Logging, LoggingLayer};
pub use token_auth::{TokenAuth, TokenAuthLayer};

// Re-export tower types for custom stage composition.
pub use tower::{Layer, ServiceBuilder};
