//! Request body representations and JSON helpers.

use bytes::Bytes;
use serde_json::Value;

use crate::Result;

/// A request body in one of the states the pipeline understands.
///
/// A [`Body::Json`] value is "structured, pending serialization": the
/// codec turns it into [`Body::Text`] exactly once before transmission.
/// [`Body::Text`] and [`Body::Binary`] are already wire-ready and pass
/// through serialization untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Raw text, assumed wire-ready.
    Text(String),
    /// Binary payload, assumed wire-ready.
    Binary(Bytes),
    /// A structured value awaiting JSON serialization.
    Json(Value),
}

impl Body {
    /// Build a structured body from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented as JSON.
    pub fn json<T: serde::Serialize>(value: &T) -> Result<Self> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    /// Returns `true` if this body still awaits serialization.
    #[must_use]
    pub const fn is_structured(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    /// The wire bytes of an already-serialized body.
    ///
    /// Returns `None` for a structured body that has not been through
    /// the codec yet.
    #[must_use]
    pub fn as_bytes(&self) -> Option<Bytes> {
        match self {
            Self::Text(text) => Some(Bytes::copy_from_slice(text.as_bytes())),
            Self::Binary(bytes) => Some(bytes.clone()),
            Self::Json(_) => None,
        }
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Bytes> for Body {
    fn from(bytes: Bytes) -> Self {
        Self::Binary(bytes)
    }
}

impl From<Value> for Body {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

/// Serialize a value to JSON text.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(Into::into)
}

/// Deserialize JSON text to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so failures name the exact field that
/// could not be decoded (e.g., "user.plan.space").
///
/// # Errors
///
/// Returns [`crate::Error::JsonDeserialization`] if decoding fails.
pub fn from_json<T: serde::de::DeserializeOwned>(json: &str) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}
