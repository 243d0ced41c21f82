use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// OAuth 2.0 error codes (RFC 6749 §4.1.2.1 and §5.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidRequest,
    UnauthorizedClient,
    AccessDenied,
    UnsupportedResponseType,
    InvalidScope,
    ServerError,
    TemporarilyUnavailable,
    UnsupportedGrantType,
    InvalidGrant,
    InvalidClient,
}

impl ErrorCode {
    /// Wire value rendered in the `error` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::UnauthorizedClient => "unauthorized_client",
            Self::AccessDenied => "access_denied",
            Self::UnsupportedResponseType => "unsupported_response_type",
            Self::InvalidScope => "invalid_scope",
            Self::ServerError => "server_error",
            Self::TemporarilyUnavailable => "temporarily_unavailable",
            Self::UnsupportedGrantType => "unsupported_grant_type",
            Self::InvalidGrant => "invalid_grant",
            Self::InvalidClient => "invalid_client",
        }
    }

    /// Description used when an error is recorded with an empty message.
    pub fn default_description(&self) -> &'static str {
        match self {
            Self::InvalidRequest => {
                "The request is missing a required parameter, includes an invalid parameter value, includes a parameter more than once, or is otherwise malformed."
            }
            Self::UnauthorizedClient => {
                "The client is not authorized to request a token using this method."
            }
            Self::AccessDenied => "The resource owner or authorization server denied the request.",
            Self::UnsupportedResponseType => {
                "The authorization server does not support obtaining a token using this method."
            }
            Self::InvalidScope => "The requested scope is invalid, unknown, or malformed.",
            Self::ServerError => {
                "The authorization server encountered an unexpected condition that prevented it from fulfilling the request."
            }
            Self::TemporarilyUnavailable => {
                "The authorization server is currently unable to handle the request due to a temporary overloading or maintenance of the server."
            }
            Self::UnsupportedGrantType => {
                "The authorization grant type is not supported by the authorization server."
            }
            Self::InvalidGrant => {
                "The provided authorization grant or refresh token is invalid, expired, revoked, does not match the redirection URI used in the authorization request, or was issued to another client."
            }
            Self::InvalidClient => {
                "Client authentication failed (e.g., unknown client, no client authentication included, or unsupported authentication method)."
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidClient => StatusCode::UNAUTHORIZED,
            Self::AccessDenied => StatusCode::FORBIDDEN,
            Self::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::TemporarilyUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured OAuth error recorded on a response.
///
/// `description` is what the caller sees. `internal` is the diagnostic root
/// cause; it is logged when the error is rendered and never sent over the wire.
#[derive(Debug)]
pub struct OAuthError {
    pub code: ErrorCode,
    pub message: String,
    pub internal: Option<anyhow::Error>,
}

impl OAuthError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            internal: None,
        }
    }

    pub fn with_internal(mut self, internal: anyhow::Error) -> Self {
        self.internal = Some(internal);
        self
    }

    /// The recorded message, or the code's default description when empty.
    pub fn description(&self) -> &str {
        if self.message.is_empty() {
            self.code.default_description()
        } else {
            &self.message
        }
    }

    /// JSON body rendered to the caller.
    pub fn body(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.code.as_str(),
            "error_description": self.description(),
        })
    }
}

impl fmt::Display for OAuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.description())
    }
}

impl std::error::Error for OAuthError {}

impl IntoResponse for OAuthError {
    fn into_response(self) -> Response {
        // 5xx at error level; client rejections keep their diagnostic at debug.
        match (&self.code, &self.internal) {
            (ErrorCode::ServerError, Some(e)) => {
                tracing::error!(error = %e, code = self.code.as_str(), "oauth server error");
            }
            (ErrorCode::ServerError, None) => {
                tracing::error!(code = self.code.as_str(), "oauth server error");
            }
            (code, Some(e)) => {
                tracing::debug!(error = %e, code = code.as_str(), "oauth error");
            }
            (_, None) => {}
        }
        (self.code.status(), axum::Json(self.body())).into_response()
    }
}
