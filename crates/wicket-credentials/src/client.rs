//! Client records and secret/identifier matching.

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

/// A registered OAuth client as handed over by client storage.
///
/// Implementors that can compare secrets or identifiers themselves (e.g. against
/// a stored hash) expose that by returning `Some` from [`Client::secret_matcher`]
/// or [`Client::id_matcher`]; matching then never reads the plaintext value.
pub trait Client {
    fn id(&self) -> &str;

    /// Plaintext secret. Empty for public clients.
    fn secret(&self) -> &str;

    fn secret_matcher(&self) -> Option<&dyn SecretMatcher> {
        None
    }

    fn id_matcher(&self) -> Option<&dyn IdMatcher> {
        None
    }
}

/// Delegated secret comparison.
pub trait SecretMatcher {
    fn secret_matches(&self, secret: &str) -> bool;
}

/// Delegated identifier comparison.
pub trait IdMatcher {
    fn id_matches(&self, id: &str) -> bool;
}

/// Whether `secret` matches the client's secret.
///
/// Public clients (empty stored secret) match only `""`.
pub fn check_client_secret(client: &dyn Client, secret: &str) -> bool {
    match client.secret_matcher() {
        Some(matcher) => matcher.secret_matches(secret),
        None => constant_time_eq(client.secret(), secret),
    }
}

/// Whether `id` matches the client's identifier.
pub fn check_client_id(client: &dyn Client, id: &str) -> bool {
    match client.id_matcher() {
        Some(matcher) => matcher.id_matches(id),
        None => constant_time_eq(client.id(), id),
    }
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    a.len() == b.len() && a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Client record holding its values in plaintext.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultClient {
    pub id: String,
    #[serde(default)]
    pub secret: String,
    #[serde(default)]
    pub redirect_uri: String,
    #[serde(default)]
    pub user_data: serde_json::Value,
}

impl DefaultClient {
    pub fn new(id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            secret: secret.into(),
            ..Self::default()
        }
    }

    pub fn is_public(&self) -> bool {
        self.secret.is_empty()
    }
}

impl Client for DefaultClient {
    fn id(&self) -> &str {
        &self.id
    }

    fn secret(&self) -> &str {
        &self.secret
    }
}
