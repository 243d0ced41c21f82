//! Response sink the extractors and issuers write into.

use axum::response::{IntoResponse, Response};
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};

use wicket_core::error::{ErrorCode, OAuthError};

/// The two response operations credential handling needs.
pub trait ResponseSink {
    /// Append a header, keeping any existing values for `name`.
    fn append_header(&mut self, name: HeaderName, value: HeaderValue);

    /// Record a structured error. An empty `message` renders the code's default
    /// description; `internal` is a diagnostic kept out of the response body.
    fn set_error(&mut self, code: ErrorCode, message: &str, internal: Option<anyhow::Error>);
}

/// In-memory OAuth response: status, headers, and at most one error.
#[derive(Debug, Default)]
pub struct OAuthResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub error: Option<OAuthError>,
}

impl OAuthResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn error_code(&self) -> Option<ErrorCode> {
        self.error.as_ref().map(|e| e.code)
    }

    /// All `Set-Cookie` values in insertion order.
    pub fn set_cookies(&self) -> Vec<&str> {
        self.headers
            .get_all(http::header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect()
    }
}

impl ResponseSink for OAuthResponse {
    fn append_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.append(name, value);
    }

    fn set_error(&mut self, code: ErrorCode, message: &str, internal: Option<anyhow::Error>) {
        let mut error = OAuthError::new(code, message);
        error.internal = internal;
        self.error = Some(error);
    }
}

impl IntoResponse for OAuthResponse {
    fn into_response(self) -> Response {
        let mut response = match self.error {
            Some(error) => error.into_response(),
            None => self.status.into_response(),
        };
        for (name, value) in &self.headers {
            response.headers_mut().append(name, value.clone());
        }
        response
    }
}
