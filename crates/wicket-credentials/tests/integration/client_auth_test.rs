use axum::http::HeaderMap;

use wicket_core::error::ErrorCode;
use wicket_credentials::basic::{BasicAuth, check_basic_auth};
use wicket_credentials::client_auth::get_client_auth;
use wicket_credentials::response::OAuthResponse;
use wicket_testing::request::{BAD_AUTH, BLANK_BASIC_AUTH, GOOD_BASIC_AUTH, authorization, query};

const URL_WITH_SECRET: &str = "http://host.tld/path?client_id=xxx&client_secret=yyy";
const URL_WITH_EMPTY_SECRET: &str = "http://host.tld/path?client_id=xxx&client_secret=";
const URL_NO_SECRET: &str = "http://host.tld/path?client_id=xxx";

// ── check_basic_auth ─────────────────────────────────────────────────────────

#[test]
fn should_extract_basic_auth_from_header_sequence() {
    assert!(check_basic_auth(&HeaderMap::new()).unwrap().is_none());
    assert!(check_basic_auth(&authorization(BAD_AUTH)).is_err());
    assert!(check_basic_auth(&authorization(BLANK_BASIC_AUTH)).is_err());

    let auth = check_basic_auth(&authorization(GOOD_BASIC_AUTH)).unwrap().unwrap();
    assert_eq!(auth, BasicAuth::new("test", "test"));
}

// ── get_client_auth ──────────────────────────────────────────────────────────

#[test]
fn should_resolve_client_auth_for_every_header_and_query_combination() {
    let no_auth = HeaderMap::new();
    let bad_auth = authorization(BAD_AUTH);
    let blank_auth = authorization(BLANK_BASIC_AUTH);
    let ok_auth = authorization(GOOD_BASIC_AUTH);

    let cases: &[(&HeaderMap, &str, bool, bool)] = &[
        (&no_auth, URL_WITH_SECRET, true, true),
        (&no_auth, URL_WITH_SECRET, false, false),
        (&no_auth, URL_WITH_EMPTY_SECRET, true, true),
        (&no_auth, URL_WITH_EMPTY_SECRET, false, false),
        (&no_auth, URL_NO_SECRET, true, false),
        (&no_auth, URL_NO_SECRET, false, false),
        (&bad_auth, URL_WITH_SECRET, true, true),
        (&bad_auth, URL_WITH_SECRET, false, false),
        (&bad_auth, URL_WITH_EMPTY_SECRET, true, true),
        (&bad_auth, URL_WITH_EMPTY_SECRET, false, false),
        (&bad_auth, URL_NO_SECRET, true, false),
        (&bad_auth, URL_NO_SECRET, false, false),
        (&blank_auth, URL_WITH_SECRET, true, true),
        (&blank_auth, URL_WITH_SECRET, false, false),
        (&blank_auth, URL_WITH_EMPTY_SECRET, true, true),
        (&blank_auth, URL_WITH_EMPTY_SECRET, false, false),
        (&blank_auth, URL_NO_SECRET, true, false),
        (&blank_auth, URL_NO_SECRET, false, false),
        (&ok_auth, URL_WITH_SECRET, true, true),
        (&ok_auth, URL_WITH_SECRET, false, true),
        (&ok_auth, URL_WITH_EMPTY_SECRET, true, true),
        (&ok_auth, URL_WITH_EMPTY_SECRET, false, true),
        (&ok_auth, URL_NO_SECRET, true, true),
        (&ok_auth, URL_NO_SECRET, false, true),
    ];

    for (i, (headers, url, allow_query_params, expect_auth)) in cases.iter().enumerate() {
        let mut response = OAuthResponse::new();
        let auth = get_client_auth(&mut response, headers, &query(url), *allow_query_params);
        assert_eq!(
            auth.is_some(),
            *expect_auth,
            "case {i}: url={url} allow_query_params={allow_query_params}"
        );
        assert_eq!(
            response.is_error(),
            !*expect_auth,
            "case {i}: error must be recorded exactly when auth is absent"
        );
        if !*expect_auth {
            assert_eq!(response.error_code(), Some(ErrorCode::InvalidClient));
        }
    }
}

#[test]
fn query_credentials_win_over_valid_header() {
    let mut response = OAuthResponse::new();
    let auth = get_client_auth(
        &mut response,
        &authorization(GOOD_BASIC_AUTH),
        &query(URL_WITH_EMPTY_SECRET),
        true,
    )
    .unwrap();
    assert_eq!(auth, BasicAuth::new("xxx", ""));
}

#[test]
fn header_failures_are_distinguished_by_message() {
    let mut malformed = OAuthResponse::new();
    get_client_auth(&mut malformed, &authorization(BAD_AUTH), &query(URL_NO_SECRET), false);
    assert_eq!(
        malformed.error.as_ref().unwrap().message,
        "failed to check basic oauth client"
    );

    let mut missing = OAuthResponse::new();
    get_client_auth(&mut missing, &HeaderMap::new(), &query(URL_NO_SECRET), false);
    let error = missing.error.as_ref().unwrap();
    assert_eq!(error.message, "");
    assert_eq!(error.description(), ErrorCode::InvalidClient.default_description());
}
