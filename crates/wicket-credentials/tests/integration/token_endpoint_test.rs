//! End-to-end: an axum token endpoint authenticating the client and issuing a
//! token cookie through `OAuthResponse`.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::header::{AUTHORIZATION, SET_COOKIE};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::routing::post;
use axum_extra::extract::cookie::Cookie;
use time::OffsetDateTime;
use tower::ServiceExt;

use wicket_core::error::ErrorCode;
use wicket_credentials::client::{DefaultClient, check_client_id, check_client_secret};
use wicket_credentials::config::CredentialsConfig;
use wicket_credentials::cookie::ACCESS_TOKEN;
use wicket_credentials::form::FormValues;
use wicket_credentials::response::{OAuthResponse, ResponseSink};
use wicket_testing::fixture::Fixture;
use wicket_testing::request::{BAD_AUTH, GOOD_BASIC_AUTH};

fn config() -> CredentialsConfig {
    CredentialsConfig {
        cookie_domain: Some("https://example.com".to_owned()),
        allow_client_query_params: true,
        ..CredentialsConfig::default()
    }
}

async fn issue_token(headers: HeaderMap, form: FormValues) -> OAuthResponse {
    let config = config();
    let mut response = OAuthResponse::new();

    let Some(auth) = config.client_auth(&mut response, &headers, &form) else {
        return response;
    };
    let client = DefaultClient::new("test", "test");
    if !check_client_id(&client, &auth.username) || !check_client_secret(&client, &auth.password)
    {
        response.set_error(ErrorCode::InvalidClient, "", None);
        return response;
    }

    let token = Fixture::access_token().token;
    let expires = config.cookie_expiry(&token, OffsetDateTime::now_utc());
    config.issue_cookie(&mut response, &token, ACCESS_TOKEN, expires);
    response
}

fn app() -> Router {
    Router::new().route("/oauth/token", post(issue_token))
}

fn request(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn should_issue_cookie_for_authenticated_client() {
    let resp = app()
        .oneshot(request("/oauth/token", Some(GOOD_BASIC_AUTH)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let set_cookie = resp.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    let cookie = Cookie::parse(set_cookie.to_owned()).unwrap();
    assert_eq!(cookie.name(), ACCESS_TOKEN);
    assert_eq!(cookie.value(), Fixture::access_token().token);
    assert_eq!(cookie.domain(), Some("example.com"));
    assert_eq!(
        cookie.expires_datetime().map(|t| t.unix_timestamp()),
        Some(1617783238)
    );
}

#[tokio::test]
async fn should_accept_query_credentials() {
    let resp = app()
        .oneshot(request("/oauth/token?client_id=test&client_secret=test", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key(SET_COOKIE));
}

#[tokio::test]
async fn should_reject_malformed_header_as_invalid_client() {
    let resp = app()
        .oneshot(request("/oauth/token", Some(BAD_AUTH)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(!resp.headers().contains_key(SET_COOKIE));

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["error"], "invalid_client");
    assert_eq!(json["error_description"], "failed to check basic oauth client");
}

#[tokio::test]
async fn should_reject_missing_credentials_with_default_description() {
    let resp = app().oneshot(request("/oauth/token", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["error"], "invalid_client");
    assert_eq!(
        json["error_description"],
        ErrorCode::InvalidClient.default_description()
    );
}

#[tokio::test]
async fn should_reject_wrong_secret() {
    let resp = app()
        .oneshot(request("/oauth/token?client_id=test&client_secret=nope", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
