//! Token cookies.
//!
//! Issued cookies are `Secure`, `HttpOnly`, `SameSite=None` and scoped to `/`.

use axum_extra::extract::cookie::{Cookie, SameSite};
use http::HeaderValue;
use http::header::SET_COOKIE;
use time::{Duration, OffsetDateTime};
use url::{Host, Url};

use crate::response::ResponseSink;

/// Cookie name for access tokens.
pub const ACCESS_TOKEN: &str = "access_token";

/// Cookie name for refresh tokens.
pub const REFRESH_TOKEN: &str = "refresh_token";

/// Append a `Set-Cookie` header carrying `token` under the name `token_type`.
///
/// `cookie_domain` is parsed as a URL and its host becomes the `Domain`
/// attribute; an empty or unparsable value sets no domain. Nothing is emitted
/// when `token_type` is not a valid cookie name.
///
/// ```
/// use time::macros::datetime;
/// use wicket_credentials::cookie::{add_token_in_cookie, ACCESS_TOKEN};
/// use wicket_credentials::response::OAuthResponse;
///
/// let mut response = OAuthResponse::new();
/// add_token_in_cookie(
///     &mut response,
///     "abc",
///     ACCESS_TOKEN,
///     datetime!(2021-04-07 08:13:58 UTC),
///     Some("https://example.com"),
/// );
/// let cookie = response.set_cookies()[0];
/// assert!(cookie.starts_with("access_token=abc"));
/// assert!(cookie.contains("Domain=example.com"));
/// assert!(cookie.contains("Expires=Wed, 07 Apr 2021 08:13:58 GMT"));
/// ```
pub fn add_token_in_cookie(
    response: &mut dyn ResponseSink,
    token: &str,
    token_type: &str,
    expires: OffsetDateTime,
    cookie_domain: Option<&str>,
) {
    let serialized = build_token_cookie(token, token_type, expires, cookie_domain)
        .map(|cookie| cookie.to_string())
        .unwrap_or_default();
    append_set_cookie(response, token_type, &serialized);
}

/// The cookie [`add_token_in_cookie`] would serialize, for callers working
/// with a cookie jar. `None` when `token_type` is not a valid cookie name.
pub fn build_token_cookie(
    token: &str,
    token_type: &str,
    expires: OffsetDateTime,
    cookie_domain: Option<&str>,
) -> Option<Cookie<'static>> {
    let mut cookie = base_cookie(token_type, sanitize_cookie_value(token), cookie_domain)?;
    if valid_cookie_expires(expires) {
        cookie.set_expires(expires);
    }
    Some(cookie)
}

/// Append a `Set-Cookie` header that removes the `token_type` cookie (`Max-Age=0`).
///
/// ```
/// use wicket_credentials::cookie::{clear_token_cookie, REFRESH_TOKEN};
/// use wicket_credentials::response::OAuthResponse;
///
/// let mut response = OAuthResponse::new();
/// clear_token_cookie(&mut response, REFRESH_TOKEN, None);
/// let cookie = response.set_cookies()[0];
/// assert!(cookie.starts_with("refresh_token=;"));
/// assert!(cookie.contains("Max-Age=0"));
/// ```
pub fn clear_token_cookie(
    response: &mut dyn ResponseSink,
    token_type: &str,
    cookie_domain: Option<&str>,
) {
    let serialized = base_cookie(token_type, String::new(), cookie_domain)
        .map(|mut cookie| {
            cookie.set_max_age(Duration::ZERO);
            cookie.to_string()
        })
        .unwrap_or_default();
    append_set_cookie(response, token_type, &serialized);
}

fn base_cookie(name: &str, value: String, cookie_domain: Option<&str>) -> Option<Cookie<'static>> {
    if !is_cookie_name_valid(name) {
        return None;
    }
    let mut cookie = Cookie::build((name.to_owned(), value))
        .path("/")
        .secure(true)
        .http_only(true)
        .same_site(SameSite::None)
        .build();
    if let Some(host) = cookie_domain.and_then(domain_host) {
        cookie.set_domain(host);
    }
    Some(cookie)
}

fn append_set_cookie(response: &mut dyn ResponseSink, token_type: &str, serialized: &str) {
    if serialized.is_empty() {
        tracing::debug!(token_type, "invalid cookie name, no cookie set");
        return;
    }
    match HeaderValue::from_str(serialized) {
        Ok(value) => response.append_header(SET_COOKIE, value),
        Err(e) => tracing::warn!(error = %e, token_type, "unable to encode cookie header"),
    }
}

/// Host of a configured cookie domain such as `https://example.com`.
///
/// IPv6 hosts are skipped: they cannot appear in a `Domain` attribute.
fn domain_host(cookie_domain: &str) -> Option<String> {
    if cookie_domain.is_empty() {
        return None;
    }
    let url = Url::parse(cookie_domain).ok()?;
    match url.host()? {
        Host::Domain(domain) if !domain.is_empty() => Some(domain.to_owned()),
        Host::Ipv4(addr) => Some(addr.to_string()),
        _ => None,
    }
}

/// RFC 6265 cookie-name: a non-empty RFC 7230 token.
fn is_cookie_name_valid(name: &str) -> bool {
    !name.is_empty()
        && name.bytes().all(|b| {
            b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
        })
}

/// Drop bytes not allowed in a cookie value and quote values containing a space
/// or comma.
fn sanitize_cookie_value(value: &str) -> String {
    let clean: String = value
        .chars()
        .filter(|&c| matches!(c, ' '..='~') && !matches!(c, '"' | ';' | '\\'))
        .collect();
    if clean.contains([' ', ',']) {
        format!("\"{clean}\"")
    } else {
        clean
    }
}

/// Expirations before 1601 cannot be represented in a cookie date.
fn valid_cookie_expires(expires: OffsetDateTime) -> bool {
    expires.year() >= 1601
}
