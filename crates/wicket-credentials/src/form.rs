//! Form and query-string values.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use http::request::Parts;

/// Ordered multimap of `application/x-www-form-urlencoded` fields.
///
/// A key sent with an empty value (`client_secret=`) is present; a key never
/// sent is absent. [`FormValues::get`] returns `""` for both, so use
/// [`FormValues::contains_key`] where the distinction matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pairs: Vec<(String, String)>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse urlencoded text such as a query string or a form body.
    pub fn parse(input: &[u8]) -> Self {
        url::form_urlencoded::parse(input).into_owned().collect()
    }

    /// Builder-style [`FormValues::append`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(key, value);
        self
    }

    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Append `other` after the existing values. Merge the body first and the
    /// query second so body values win in [`FormValues::get`].
    pub fn merge(mut self, other: FormValues) -> Self {
        self.pairs.extend(other.pairs);
        self
    }

    /// First value for `key`, or `""` when absent.
    pub fn get(&self, key: &str) -> &str {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Extracts the request's query string. Never rejects: a missing query yields
/// empty values.
impl<S> FromRequestParts<S> for FormValues
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    // Parse synchronously and return a 'static future so the borrow of `parts`
    // does not leak into the returned type.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let values = parts
            .uri
            .query()
            .map(|q| Self::parse(q.as_bytes()))
            .unwrap_or_default();

        async move { Ok(values) }
    }
}
