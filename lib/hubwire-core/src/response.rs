//! HTTP response envelope.

use std::collections::HashMap;

/// An HTTP response with status, headers, raw text body, and the
/// decoded body once the codec has run.
///
/// `body_object` stays `None` until
/// [`codec::deserialize_response`](crate::codec::deserialize_response)
/// runs, and stays `None` entirely when the content type is not JSON
/// or the body is the empty-object sentinel `{}`.
#[derive(Debug, Clone)]
pub struct Response<T = ()> {
    status: u16,
    headers: HashMap<String, String>,
    content_type: Option<String>,
    body: String,
    body_object: Option<T>,
}

impl<T> Response<T> {
    /// Creates a new response from the parts the transport produced.
    ///
    /// The content type is taken from the `Content-Type` header
    /// (case-insensitive lookup), lowercased, with any parameters
    /// stripped.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: String) -> Self {
        let content_type = headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map(|(_, value)| {
                value
                    .split(';')
                    .next()
                    .unwrap_or(value)
                    .trim()
                    .to_ascii_lowercase()
            });

        Self {
            status,
            headers,
            content_type,
            body,
            body_object: None,
        }
    }

    /// An empty response, before the terminal stage has run.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            status: 0,
            headers: HashMap::new(),
            content_type: None,
            body: String::new(),
            body_object: None,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Content type without parameters, if the server sent one.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Raw text body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The decoded body, if the codec produced one.
    #[must_use]
    pub const fn body_object(&self) -> Option<&T> {
        self.body_object.as_ref()
    }

    /// Consume the response and take the decoded body.
    #[must_use]
    pub fn into_body_object(self) -> Option<T> {
        self.body_object
    }

    /// Store the decoded body. Used by the codec.
    pub fn set_body_object(&mut self, object: T) {
        self.body_object = Some(object);
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Status is 4xx.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Status is 5xx.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }
}

impl Response<()> {
    /// Re-type an undecoded response so the codec can decode it as `T`.
    ///
    /// The pipeline itself is untyped; only the connection knows the
    /// target type of a call.
    #[must_use]
    pub fn into_typed<T>(self) -> Response<T> {
        Response {
            status: self.status,
            headers: self.headers,
            content_type: self.content_type,
            body: self.body,
            body_object: None,
        }
    }
}

impl<T> Default for Response<T> {
    fn default() -> Self {
        Self::empty()
    }
}
