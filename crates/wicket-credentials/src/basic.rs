//! `Authorization: Basic` credential extraction.

use std::borrow::Cow;
use std::fmt;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use http::HeaderMap;
use http::header::AUTHORIZATION;

/// Standard alphabet with canonical padding. Non-zero trailing bits are
/// accepted, matching lenient base64 decoders used by HTTP clients.
pub(crate) const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Username/password pair from a Basic header or from client query params.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Render as an `Authorization` header value (`Basic <base64>`).
    pub fn to_header_value(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD_LENIENT.encode(raw))
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Malformed Basic credentials. These reject the request outright; a missing
/// header is not an error (see [`check_basic_auth`]).
#[derive(Debug, thiserror::Error)]
pub enum BasicAuthError {
    #[error("invalid authorization header")]
    InvalidHeader,
    #[error("invalid authorization encoding: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),
    #[error("invalid authorization message")]
    InvalidMessage,
}

/// The first `Authorization` header, or `None` when absent or empty.
///
/// Non-ASCII bytes are decoded lossily so presence never depends on encoding.
pub(crate) fn authorization(headers: &HeaderMap) -> Option<Cow<'_, str>> {
    headers
        .get(AUTHORIZATION)
        .map(|v| String::from_utf8_lossy(v.as_bytes()))
        .filter(|v| !v.is_empty())
}

/// Parse `Authorization: Basic <base64(username:password)>`.
///
/// Returns `Ok(None)` when no header is set. The scheme is case-sensitive and
/// the username must be non-empty; the password may be empty.
pub fn check_basic_auth(headers: &HeaderMap) -> Result<Option<BasicAuth>, BasicAuthError> {
    let Some(header) = authorization(headers) else {
        return Ok(None);
    };

    let (scheme, encoded) = header
        .split_once(' ')
        .ok_or(BasicAuthError::InvalidHeader)?;
    if scheme != "Basic" {
        return Err(BasicAuthError::InvalidHeader);
    }

    let decoded = STANDARD_LENIENT.decode(encoded)?;
    let decoded = String::from_utf8_lossy(&decoded);
    let (username, password) = decoded
        .split_once(':')
        .ok_or(BasicAuthError::InvalidMessage)?;
    if username.is_empty() {
        return Err(BasicAuthError::InvalidMessage);
    }

    Ok(Some(BasicAuth::new(username, password)))
}
