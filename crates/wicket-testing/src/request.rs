//! Request helpers for credential tests.

use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, HeaderValue};

use wicket_credentials::basic::BasicAuth;
use wicket_credentials::form::FormValues;

/// `Basic` header for `test:test`.
pub const GOOD_BASIC_AUTH: &str = "Basic dGVzdDp0ZXN0";

/// `Basic` header decoding to `:` (blank username).
pub const BLANK_BASIC_AUTH: &str = "Basic Og==";

/// Header with a scheme neither extractor accepts.
pub const BAD_AUTH: &str = "Digest XHHHHHHH";

pub const GOOD_BEARER_AUTH: &str = "Bearer BGFVTDUJDp0ZXN0";

/// Header map with a single `Authorization` value.
pub fn authorization(value: &str) -> HeaderMap {
    let mut map = HeaderMap::new();
    map.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    map
}

/// Header map carrying `Basic` credentials for `username:password`.
pub fn basic(username: &str, password: &str) -> HeaderMap {
    authorization(&BasicAuth::new(username, password).to_header_value())
}

/// Form values parsed from the query part of `url`.
pub fn query(url: &str) -> FormValues {
    let query = url.split_once('?').map(|(_, q)| q).unwrap_or("");
    FormValues::parse(query.as_bytes())
}
