//! Bearer token extraction from the `Authorization` header or the `code` form field.

use http::HeaderMap;

use crate::basic::authorization;
use crate::form::FormValues;

/// Form field carrying a bearer code when no header is sent.
pub const CODE_FIELD: &str = "code";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerAuth {
    pub code: String,
}

/// Return the bearer token for a request.
///
/// Precedence:
/// - `Authorization: Bearer <token>` (scheme case-insensitive) overrides the form.
/// - Any other header falls back to the `code` form field when it is set.
/// - A non-bearer header with no form code yields `None`, as does a request with
///   neither source.
pub fn check_bearer_auth(headers: &HeaderMap, form: &FormValues) -> Option<BearerAuth> {
    let header = authorization(headers);
    let form_code = form.get(CODE_FIELD);
    if header.is_none() && form_code.is_empty() {
        return None;
    }

    let mut token = form_code;
    if let Some(header) = header.as_deref() {
        match header.split_once(' ') {
            Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => token = rest,
            _ if token.is_empty() => return None,
            _ => {}
        }
    }

    Some(BearerAuth {
        code: token.to_owned(),
    })
}
