//! Sample token fixtures.
//!
//! Tokens live in `fixtures/tokens.json` next to this crate's manifest, keyed by
//! name, together with the `exp`/`iat` claims their payloads carry.

use base64::Engine;
use base64::engine::general_purpose::STANDARD_NO_PAD;
use serde::Deserialize;

const TOKENS: &str = include_str!("../fixtures/tokens.json");

/// A compact token and the claims embedded in its payload.
#[derive(Debug, Clone, Deserialize)]
pub struct SampleToken {
    pub token: String,
    pub exp: i64,
    pub iat: i64,
}

/// Fixture loader.
///
/// # Example
/// ```
/// use wicket_testing::fixture::Fixture;
/// let access = Fixture::token("access_token");
/// assert_eq!(access.token.split('.').count(), 3);
/// ```
pub struct Fixture;

impl Fixture {
    /// Load the named sample token.
    ///
    /// Panics if the name is unknown or the fixture file is invalid JSON.
    pub fn token(name: &str) -> SampleToken {
        let all: serde_json::Map<String, serde_json::Value> = serde_json::from_str(TOKENS)
            .unwrap_or_else(|e| panic!("invalid JSON in fixtures/tokens.json: {e}"));
        let value = all
            .get(name)
            .unwrap_or_else(|| panic!("no token fixture named {name}"))
            .clone();
        serde_json::from_value(value)
            .unwrap_or_else(|e| panic!("invalid token fixture {name}: {e}"))
    }

    /// RS256 access token issued at 1617779638, expiring 1617783238.
    pub fn access_token() -> SampleToken {
        Self::token("access_token")
    }

    /// Refresh token issued at 1617779638, expiring 1617866038.
    pub fn refresh_token() -> SampleToken {
        Self::token("refresh_token")
    }

    /// Unsigned three-segment token whose payload is `payload` encoded the way
    /// token issuers do (standard alphabet, padding stripped).
    pub fn compact_token(payload: &serde_json::Value) -> String {
        let header = STANDARD_NO_PAD.encode(r#"{"alg":"none"}"#);
        let body = STANDARD_NO_PAD.encode(payload.to_string());
        format!("{header}.{body}.")
    }
}
