//! Mock clients.
//!
//! [`DefaultClient`](wicket_credentials::client::DefaultClient) covers the
//! plaintext path; these cover delegated matching.

use std::cell::Cell;

use wicket_credentials::client::{Client, IdMatcher, SecretMatcher};

/// Client that delegates both comparisons and never exposes its values.
///
/// `secret()` and `id()` return decoys so a test fails if the plaintext path is
/// taken instead of the matcher.
pub struct MatchingClient {
    expected_id: String,
    expected_secret: String,
    secret_calls: Cell<u32>,
    id_calls: Cell<u32>,
}

impl MatchingClient {
    pub fn new(id: &str, secret: &str) -> Self {
        Self {
            expected_id: id.to_owned(),
            expected_secret: secret.to_owned(),
            secret_calls: Cell::new(0),
            id_calls: Cell::new(0),
        }
    }

    pub fn secret_calls(&self) -> u32 {
        self.secret_calls.get()
    }

    pub fn id_calls(&self) -> u32 {
        self.id_calls.get()
    }
}

impl Client for MatchingClient {
    fn id(&self) -> &str {
        "decoy-id"
    }

    fn secret(&self) -> &str {
        "decoy-secret"
    }

    fn secret_matcher(&self) -> Option<&dyn SecretMatcher> {
        Some(self)
    }

    fn id_matcher(&self) -> Option<&dyn IdMatcher> {
        Some(self)
    }
}

impl SecretMatcher for MatchingClient {
    fn secret_matches(&self, secret: &str) -> bool {
        self.secret_calls.set(self.secret_calls.get() + 1);
        secret == self.expected_secret
    }
}

impl IdMatcher for MatchingClient {
    fn id_matches(&self, id: &str) -> bool {
        self.id_calls.set(self.id_calls.get() + 1);
        id == self.expected_id
    }
}

/// Client exposing only a delegated secret matcher; identifiers use the
/// plaintext path.
pub struct SecretOnlyClient {
    pub id: String,
    expected_secret: String,
}

impl SecretOnlyClient {
    pub fn new(id: &str, secret: &str) -> Self {
        Self {
            id: id.to_owned(),
            expected_secret: secret.to_owned(),
        }
    }
}

impl Client for SecretOnlyClient {
    fn id(&self) -> &str {
        &self.id
    }

    fn secret(&self) -> &str {
        "decoy-secret"
    }

    fn secret_matcher(&self) -> Option<&dyn SecretMatcher> {
        Some(self)
    }
}

impl SecretMatcher for SecretOnlyClient {
    fn secret_matches(&self, secret: &str) -> bool {
        secret == self.expected_secret
    }
}
