use http::HeaderMap;
use serde::Deserialize;
use time::{Duration, OffsetDateTime};

use wicket_core::config::Config;

use crate::basic::BasicAuth;
use crate::claims::TokenClaims;
use crate::client_auth::get_client_auth;
use crate::cookie::add_token_in_cookie;
use crate::form::FormValues;
use crate::response::ResponseSink;

const DEFAULT_FALLBACK_TOKEN_TTL_SECS: u64 = 3600;

/// Credential handling settings, loaded from `WICKET_*` environment variables.
///
/// | Variable | Default |
/// |----------|---------|
/// | `WICKET_COOKIE_DOMAIN` | unset (no `Domain` attribute) |
/// | `WICKET_ALLOW_CLIENT_QUERY_PARAMS` | `false` |
/// | `WICKET_FALLBACK_TOKEN_TTL_SECS` | `3600` |
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CredentialsConfig {
    /// URL whose host becomes the cookie `Domain` (e.g. `https://example.com`).
    #[serde(default)]
    pub cookie_domain: Option<String>,
    /// Accept `client_id`/`client_secret` form fields in place of a Basic header.
    #[serde(default)]
    pub allow_client_query_params: bool,
    /// Cookie lifetime used when a token's own expiration cannot be read.
    #[serde(default = "default_fallback_token_ttl_secs")]
    pub fallback_token_ttl_secs: u64,
}

fn default_fallback_token_ttl_secs() -> u64 {
    DEFAULT_FALLBACK_TOKEN_TTL_SECS
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            cookie_domain: None,
            allow_client_query_params: false,
            fallback_token_ttl_secs: DEFAULT_FALLBACK_TOKEN_TTL_SECS,
        }
    }
}

impl Config for CredentialsConfig {
    const PREFIX: &'static str = "WICKET_";
}

impl CredentialsConfig {
    /// [`get_client_auth`] with the configured query-param policy.
    pub fn client_auth(
        &self,
        response: &mut dyn ResponseSink,
        headers: &HeaderMap,
        form: &FormValues,
    ) -> Option<BasicAuth> {
        get_client_auth(response, headers, form, self.allow_client_query_params)
    }

    /// [`add_token_in_cookie`] with the configured cookie domain.
    pub fn issue_cookie(
        &self,
        response: &mut dyn ResponseSink,
        token: &str,
        token_type: &str,
        expires: OffsetDateTime,
    ) {
        add_token_in_cookie(
            response,
            token,
            token_type,
            expires,
            self.cookie_domain.as_deref(),
        );
    }

    /// Cookie expiration for `token`: its `exp` claim when readable, otherwise
    /// `now` plus the fallback lifetime.
    pub fn cookie_expiry(&self, token: &str, now: OffsetDateTime) -> OffsetDateTime {
        TokenClaims::decode(token).expires_at().unwrap_or_else(|| {
            let ttl = i64::try_from(self.fallback_token_ttl_secs).unwrap_or(i64::MAX);
            now.saturating_add(Duration::seconds(ttl))
        })
    }
}
