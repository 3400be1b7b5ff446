// =====================================================
// 통합 테스트 공통 헬퍼
// =====================================================
// 목적: 모든 통합 테스트에서 공통으로 사용하는 셋업 함수 제공
//
// 사용법:
// ```rust
// mod common;
// use common::*;
//
// #[tokio::test]
// async fn test_something() {
//     let app = TestApp::new("dev");
//     let (status, body) = app.post_json("/api/users", None, json!({...})).await;
//     // 테스트 코드...
// }
// ```
// =====================================================
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use chirpy_server::routes::create_router;
use chirpy_server::shared::config::Config;
use chirpy_server::shared::database::InMemoryStore;
use chirpy_server::shared::services::AppState;

// 테스트용 상수
pub const TEST_JWT_SECRET: &str = "integration-test-secret";
pub const TEST_PASSWORD: &str = "04234";

/// 테스트 설정 (DB 연결은 하지 않음)
pub fn test_config(platform: &str) -> Config {
    Config::from_lookup(|key| match key {
        "DB_URL" => Some("postgres://unused/chirpy_test".to_string()),
        "JWT_SECRET" => Some(TEST_JWT_SECRET.to_string()),
        "PLATFORM" => Some(platform.to_string()),
        _ => None,
    })
    .expect("test config is valid")
}

/// 메모리 저장소 위에 올린 전체 라우터
pub struct TestApp {
    pub router: Router,
    pub store: InMemoryStore,
}

impl TestApp {
    pub fn new(platform: &str) -> Self {
        let store = InMemoryStore::new();
        let state = AppState::with_repositories(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            &test_config(platform),
        )
        .expect("Failed to build app state");

        Self {
            router: create_router().with_state(state),
            store,
        }
    }

    /// 요청 한 건 실행 후 (상태 코드, JSON 본문) 반환. 본문이 비어 있으면 Null.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        bearer: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("valid request");

        self.call(request).await
    }

    async fn call(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON body")
        };

        (status, json)
    }

    /// 임의의 본문을 그대로 전송 (잘못된 JSON 테스트용)
    pub async fn post_raw(&self, uri: &str, content_type: Option<&str>, body: &str) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(Method::POST).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder.body(Body::from(body.to_string())).expect("valid request");
        self.call(request).await
    }

    pub async fn post_json(&self, uri: &str, bearer: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, bearer, Some(body)).await
    }

    pub async fn post(&self, uri: &str, bearer: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::POST, uri, bearer, None).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None, None).await
    }

    /// 회원가입 + 로그인, 로그인 응답 본문 반환
    pub async fn signup_and_login(&self, email: &str) -> Value {
        let credentials = serde_json::json!({ "email": email, "password": TEST_PASSWORD });

        let (status, _) = self.post_json("/api/users", None, credentials.clone()).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = self.post_json("/api/login", None, credentials).await;
        assert_eq!(status, StatusCode::OK);
        body
    }
}

pub fn str_field<'a>(body: &'a Value, field: &str) -> &'a str {
    body[field]
        .as_str()
        .unwrap_or_else(|| panic!("missing string field {:?} in {}", field, body))
}
