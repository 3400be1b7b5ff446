// =====================================================
// 세션 흐름 통합 테스트
// =====================================================
// 목적: 회원가입 → 로그인 → 토큰 갱신 → 로그아웃 전체 흐름을 HTTP 레벨에서 검증
// =====================================================

mod common;

use axum::http::{Method, StatusCode};
use chrono::{Duration, Utc};
use serde_json::json;
use uuid::Uuid;

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use chirpy_server::domains::auth::models::jwt::Claims;
use chirpy_server::domains::auth::models::refresh_token::RefreshTokenCreate;
use chirpy_server::shared::database::RefreshTokenRepository;
use common::*;

#[tokio::test]
async fn test_signup_returns_user_without_password() {
    let app = TestApp::new("dev");

    let (status, body) = app
        .post_json("/api/users", None, json!({ "email": "saul@bettercall.com", "password": TEST_PASSWORD }))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(str_field(&body, "email"), "saul@bettercall.com");
    assert!(Uuid::parse_str(str_field(&body, "id")).is_ok());
    assert!(body.get("hashed_password").is_none());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_duplicate_signup_rejected() {
    let app = TestApp::new("dev");
    let credentials = json!({ "email": "walt@breakingbad.com", "password": TEST_PASSWORD });

    let (first, _) = app.post_json("/api/users", None, credentials.clone()).await;
    let (second, body) = app.post_json("/api/users", None, credentials).await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert_eq!(app.store.user_count(), 1);
}

#[tokio::test]
async fn test_login_issues_both_tokens() {
    let app = TestApp::new("dev");
    let body = app.signup_and_login("walt@breakingbad.com").await;

    assert_eq!(str_field(&body, "email"), "walt@breakingbad.com");
    assert_eq!(str_field(&body, "token").split('.').count(), 3);
    assert_eq!(str_field(&body, "refresh_token").len(), 64);
    assert_eq!(app.store.refresh_token_count(), 1);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new("dev");
    app.signup_and_login("walt@breakingbad.com").await;

    let (wrong_password, wrong_password_body) = app
        .post_json("/api/login", None, json!({ "email": "walt@breakingbad.com", "password": "wrong" }))
        .await;
    let (unknown_email, unknown_email_body) = app
        .post_json("/api/login", None, json!({ "email": "jesse@breakingbad.com", "password": TEST_PASSWORD }))
        .await;

    assert_eq!(wrong_password, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password_body, unknown_email_body);
    // failed logins never create sessions
    assert_eq!(app.store.refresh_token_count(), 1);
}

#[tokio::test]
async fn test_refresh_reuses_refresh_token_until_revoked() {
    let app = TestApp::new("dev");
    let login = app.signup_and_login("walt@breakingbad.com").await;
    let refresh_token = str_field(&login, "refresh_token");

    let (status, first) = app.post("/api/refresh", Some(refresh_token)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, second) = app.post("/api/refresh", Some(refresh_token)).await;
    assert_eq!(status, StatusCode::OK);

    // no rotation: only the access token is in the body
    assert!(first.get("refresh_token").is_none());
    assert!(str_field(&second, "token").split('.').count() == 3);

    let (status, body) = app.post("/api/revoke", Some(refresh_token)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, body) = app.post("/api/refresh", Some(refresh_token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(str_field(&body, "error"), "Invalid token");
}

#[tokio::test]
async fn test_revoke_is_idempotent() {
    let app = TestApp::new("dev");
    let login = app.signup_and_login("walt@breakingbad.com").await;
    let refresh_token = str_field(&login, "refresh_token");

    let (first, _) = app.post("/api/revoke", Some(refresh_token)).await;
    let (second, _) = app.post("/api/revoke", Some(refresh_token)).await;
    let (unknown, _) = app.post("/api/revoke", Some("never-issued")).await;

    assert_eq!(first, StatusCode::NO_CONTENT);
    assert_eq!(second, StatusCode::NO_CONTENT);
    assert_eq!(unknown, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_revoke_without_bearer_is_unauthorized() {
    let app = TestApp::new("dev");

    let (status, _) = app.post("/api/revoke", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_rejects_expired_and_unknown_tokens_alike() {
    let app = TestApp::new("dev");
    let login = app.signup_and_login("walt@breakingbad.com").await;
    let user_id = Uuid::parse_str(str_field(&login, "id")).unwrap();

    RefreshTokenRepository::create(
        &app.store,
        RefreshTokenCreate {
            token: "expired-token".to_string(),
            user_id,
            expires_at: Utc::now() - Duration::minutes(1),
        },
    )
    .await
    .unwrap();

    let (expired, expired_body) = app.post("/api/refresh", Some("expired-token")).await;
    let (unknown, unknown_body) = app.post("/api/refresh", Some("never-issued")).await;

    assert_eq!(expired, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown, StatusCode::UNAUTHORIZED);
    assert_eq!(expired_body, unknown_body);
}

#[tokio::test]
async fn test_access_token_is_not_a_refresh_token() {
    let app = TestApp::new("dev");
    let login = app.signup_and_login("walt@breakingbad.com").await;

    let (status, _) = app.post("/api/refresh", Some(str_field(&login, "token"))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_credentials_changes_login() {
    let app = TestApp::new("dev");
    let login = app.signup_and_login("walt@breakingbad.com").await;
    let access_token = str_field(&login, "token");

    let (status, body) = app
        .send(
            Method::PUT,
            "/api/users",
            Some(access_token),
            Some(json!({ "email": "heisenberg@breakingbad.com", "password": "losPollosHermanos" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(str_field(&body, "email"), "heisenberg@breakingbad.com");
    assert_eq!(str_field(&body, "id"), str_field(&login, "id"));

    let (old_login, _) = app
        .post_json("/api/login", None, json!({ "email": "walt@breakingbad.com", "password": TEST_PASSWORD }))
        .await;
    let (new_login, _) = app
        .post_json(
            "/api/login",
            None,
            json!({ "email": "heisenberg@breakingbad.com", "password": "losPollosHermanos" }),
        )
        .await;

    assert_eq!(old_login, StatusCode::UNAUTHORIZED);
    assert_eq!(new_login, StatusCode::OK);
}

#[tokio::test]
async fn test_update_credentials_requires_access_token() {
    let app = TestApp::new("dev");
    let login = app.signup_and_login("walt@breakingbad.com").await;
    let update = json!({ "email": "heisenberg@breakingbad.com", "password": "losPollosHermanos" });

    let (missing, _) = app.send(Method::PUT, "/api/users", None, Some(update.clone())).await;
    let (with_refresh, _) = app
        .send(Method::PUT, "/api/users", Some(str_field(&login, "refresh_token")), Some(update))
        .await;

    assert_eq!(missing, StatusCode::UNAUTHORIZED);
    assert_eq!(with_refresh, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_access_token_expires_in_one_hour() {
    let app = TestApp::new("dev");
    let login = app.signup_and_login("walt@breakingbad.com").await;

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&["chirpy"]);
    let claims = decode::<Claims>(
        str_field(&login, "token"),
        &DecodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
        &validation,
    )
    .unwrap()
    .claims;

    assert_eq!(claims.exp - claims.iat, 3600);
    assert_eq!(claims.sub, str_field(&login, "id"));
}

#[tokio::test]
async fn test_malformed_json_gets_json_error() {
    let app = TestApp::new("dev");

    for uri in ["/api/login", "/api/users"] {
        let (status, body) = app.post_raw(uri, Some("application/json"), "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(str_field(&body, "error").starts_with("Malformed input"), "{}", body);
    }

    // 필드 누락, Content-Type 누락도 같은 형태
    let (missing_field, body) = app
        .post_raw("/api/login", Some("application/json"), r#"{"email":"walt@breakingbad.com"}"#)
        .await;
    assert_eq!(missing_field, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (no_content_type, body) = app.post_raw("/api/login", None, "{}").await;
    assert_eq!(no_content_type, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
