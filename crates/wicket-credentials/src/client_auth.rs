//! Client authentication for token endpoints.

use http::HeaderMap;

use wicket_core::error::ErrorCode;

use crate::basic::{BasicAuth, check_basic_auth};
use crate::form::FormValues;
use crate::response::ResponseSink;

pub const CLIENT_ID_FIELD: &str = "client_id";
pub const CLIENT_SECRET_FIELD: &str = "client_secret";

/// Resolve the client credentials of a request.
///
/// With `allow_query_params`, a `client_secret` field (even empty) together with
/// a non-empty `client_id` is used as-is and the header is never read.
/// Otherwise the Basic header is required: a malformed header or a missing one
/// records [`ErrorCode::InvalidClient`] on `response` and returns `None`.
pub fn get_client_auth(
    response: &mut dyn ResponseSink,
    headers: &HeaderMap,
    form: &FormValues,
    allow_query_params: bool,
) -> Option<BasicAuth> {
    if allow_query_params && form.contains_key(CLIENT_SECRET_FIELD) {
        let auth = BasicAuth::new(form.get(CLIENT_ID_FIELD), form.get(CLIENT_SECRET_FIELD));
        if !auth.username.is_empty() {
            return Some(auth);
        }
    }

    match check_basic_auth(headers) {
        Ok(Some(auth)) => Some(auth),
        Ok(None) => {
            tracing::debug!("client authentication not set");
            response.set_error(
                ErrorCode::InvalidClient,
                "",
                Some(anyhow::anyhow!("client authentication not set")),
            );
            None
        }
        Err(e) => {
            tracing::debug!(error = %e, "failed to check basic oauth client");
            response.set_error(
                ErrorCode::InvalidClient,
                "failed to check basic oauth client",
                Some(e.into()),
            );
            None
        }
    }
}
