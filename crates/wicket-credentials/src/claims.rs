//! Unverified timing claims of a compact (JWT-style) token.
//!
//! The signature segment is never inspected. Use these values for cookie
//! bookkeeping only, never to authorize a request.

use base64::Engine;
use serde::Deserialize;
use time::OffsetDateTime;

use crate::basic::STANDARD_LENIENT;

/// Expiration and issue time in unix seconds. Zero means unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenClaims {
    pub expiration: i64,
    pub issued_at: i64,
}

/// Why a token's claims could not be read. Never fatal: [`TokenClaims::decode`]
/// logs these and returns unknown claims.
#[derive(Debug, thiserror::Error)]
pub enum ClaimsError {
    #[error("token part is invalid: expected 3 segments, got {0}")]
    Segments(usize),
    #[error("unable to decode token payload: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("unable to unmarshal token payload: {0}")]
    Payload(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct Payload {
    #[serde(default)]
    exp: i64,
    #[serde(default)]
    iat: i64,
}

impl TokenClaims {
    /// Decode the payload segment of `token`.
    ///
    /// The payload is read with the standard base64 alphabet after right-padding
    /// it with `=` to a multiple of four.
    pub fn try_decode(token: &str) -> Result<Self, ClaimsError> {
        let segments: Vec<&str> = token.split('.').collect();
        let [_, payload, _] = segments.as_slice() else {
            return Err(ClaimsError::Segments(segments.len()));
        };

        let mut payload = (*payload).to_owned();
        if let rem @ 1..=3 = payload.len() % 4 {
            payload.push_str(&"=".repeat(4 - rem));
        }

        let bytes = STANDARD_LENIENT.decode(payload)?;
        let payload: Payload = serde_json::from_slice(&bytes)?;
        Ok(Self {
            expiration: payload.exp,
            issued_at: payload.iat,
        })
    }

    /// Like [`TokenClaims::try_decode`], degrading to unknown (zero) claims
    /// with a warning.
    pub fn decode(token: &str) -> Self {
        Self::try_decode(token).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "unable to read token claims");
            Self::default()
        })
    }

    pub fn is_known(&self) -> bool {
        self.expiration != 0
    }

    /// Expiration as a timestamp, `None` when unknown or out of range.
    pub fn expires_at(&self) -> Option<OffsetDateTime> {
        if !self.is_known() {
            return None;
        }
        OffsetDateTime::from_unix_timestamp(self.expiration).ok()
    }

    pub fn issued_at_time(&self) -> Option<OffsetDateTime> {
        if self.issued_at == 0 {
            return None;
        }
        OffsetDateTime::from_unix_timestamp(self.issued_at).ok()
    }
}
