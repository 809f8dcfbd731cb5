//! JSON envelope rules for outgoing requests and incoming responses.
//!
//! These are the GitHub-flavored conventions layered on top of plain
//! serde: a default `Accept` header, pass-through of wire-ready
//! bodies, a JSON-only deserialization gate, the `{}` no-content
//! sentinel, and tolerance for endpoints that collapse a one-element
//! list to a bare object.

use serde::de::DeserializeOwned;

use crate::{Body, Request, Response, Result, from_json, to_json};

/// The `Accept` header applied when the caller set none.
pub const DEFAULT_ACCEPT: &str = "application/vnd.github.v3+json; charset=utf-8";

/// The only content type that triggers response deserialization.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Prepare a request for transmission.
///
/// Sets the default `Accept` header unless one is already present (an
/// existing value is never overwritten). GET requests and absent
/// bodies are never serialized; [`Body::Text`] and [`Body::Binary`]
/// are assumed wire-ready and pass through unchanged. Only a
/// [`Body::Json`] value is serialized, exactly once: afterwards the
/// body is text and a second call is a no-op.
///
/// # Errors
///
/// Returns an error if serializing a structured body fails.
pub fn serialize_request(request: &mut Request) -> Result<()> {
    if request.header("Accept").is_none() {
        request
            .headers_mut()
            .insert("Accept".to_string(), DEFAULT_ACCEPT.to_string());
    }

    if request.method().is_safe() {
        return Ok(());
    }

    let serialized = match request.body() {
        Some(Body::Json(value)) => Some(to_json(value)?),
        Some(Body::Text(_) | Body::Binary(_)) | None => None,
    };

    if let Some(text) = serialized {
        if request.header("Content-Type").is_none() {
            request.headers_mut().insert(
                "Content-Type".to_string(),
                format!("{JSON_CONTENT_TYPE}; charset=utf-8"),
            );
        }
        request.set_body(Some(Body::Text(text)));
    }

    Ok(())
}

/// Decode the raw body of a response into its target type.
///
/// Only a content type of exactly `application/json` triggers
/// decoding; anything else leaves `body_object` absent. The literal
/// body `{}` is treated as "no content" and left undecoded. When the
/// target type expects a list but the body is a single JSON object,
/// the body is wrapped in `[` `]` and decoded as a one-element list;
/// if that also fails the original decode error is surfaced.
///
/// # Errors
///
/// Returns a decode error if the body is JSON but does not match `T`.
pub fn deserialize_response<T: DeserializeOwned>(response: &mut Response<T>) -> Result<()> {
    if response.content_type() != Some(JSON_CONTENT_TYPE) {
        return Ok(());
    }

    let body = response.body().to_string();
    if body == "{}" {
        return Ok(());
    }

    match from_json::<T>(&body) {
        Ok(object) => {
            response.set_body_object(object);
            Ok(())
        }
        Err(original) => {
            // Some endpoints collapse a one-element list to a bare object.
            if body.starts_with('{')
                && let Ok(object) = from_json::<T>(&format!("[{body}]"))
            {
                response.set_body_object(object);
                return Ok(());
            }
            Err(original)
        }
    }
}
