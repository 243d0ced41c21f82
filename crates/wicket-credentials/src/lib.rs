//! Credential extraction and token-cookie issuance for an OAuth authorization server.
//!
//! Provides Basic/Bearer extraction, client secret and identifier matching,
//! client authentication against a [`response::ResponseSink`], unverified
//! token-claims reading, and `Set-Cookie` issuance for issued tokens.

pub mod basic;
pub mod bearer;
pub mod claims;
pub mod client;
pub mod client_auth;
pub mod config;
pub mod cookie;
pub mod form;
pub mod response;

pub use basic::{BasicAuth, BasicAuthError, check_basic_auth};
pub use bearer::{BearerAuth, check_bearer_auth};
pub use claims::{ClaimsError, TokenClaims};
pub use client::{
    Client, DefaultClient, IdMatcher, SecretMatcher, check_client_id, check_client_secret,
};
pub use client_auth::get_client_auth;
pub use config::CredentialsConfig;
pub use cookie::{add_token_in_cookie, build_token_cookie, clear_token_cookie};
pub use form::FormValues;
pub use response::{OAuthResponse, ResponseSink};
