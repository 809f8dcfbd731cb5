//! Per-call request/response pairing.

use crate::{Request, Response};

/// Pairs exactly one [`Request`] with exactly one [`Response`] for the
/// duration of a single call.
///
/// Each call constructs its own envelope; it is never shared across
/// concurrent calls. The request is mutable until the terminal
/// transport stage consumes it; the response is mutable until the
/// envelope is handed back to the caller.
#[derive(Debug)]
pub struct Env<T> {
    /// The outgoing request.
    pub request: Request,
    /// The response, empty until the terminal stage populates it.
    pub response: Response<T>,
}

impl<T> Env<T> {
    /// Creates an envelope around a freshly built request.
    #[must_use]
    pub fn new(request: Request) -> Self {
        Self {
            request,
            response: Response::empty(),
        }
    }

    /// Consume the envelope, yielding the response.
    #[must_use]
    pub fn into_response(self) -> Response<T> {
        self.response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Method;

    #[test]
    fn env_starts_with_empty_response() {
        let base = url::Url::parse("https://api.github.com").expect("valid URL");
        let request = Request::builder(Method::Get, base, "/user").build();

        let env: Env<String> = Env::new(request);

        assert_eq!(env.request.endpoint(), "/user");
        assert_eq!(env.response.status(), 0);
        assert!(env.response.body_object().is_none());
    }
}
