use crate::domains::auth::models::{
    CreateUserRequest, LoginRequest, LoginResponse, RefreshResponse, UpdateUserRequest,
    UserResponse,
};
use crate::shared::services::AppState;
use crate::shared::errors::AuthError;
use crate::shared::middleware::{get_bearer_token, JsonBody};
use axum::{extract::State, http::{HeaderMap, StatusCode}, Json};

type ErrorResponse = (StatusCode, Json<serde_json::Value>);

// 회원가입 핸들러
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Bad request (email missing or already exists)"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    JsonBody(request): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ErrorResponse> {
    // Service 호출 (비즈니스 로직)
    let user = app_state
        .auth_state
        .auth_service
        .signup(request)
        .await
        .map_err(|e: AuthError| -> ErrorResponse { e.into() })?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

// 로그인 핸들러
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Incorrect email or password"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(app_state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, ErrorResponse> {
    // Service 호출 (비밀번호 검증 + Access/Refresh Token 발급)
    let session = app_state
        .auth_state
        .auth_service
        .login(request)
        .await
        .map_err(|e: AuthError| -> ErrorResponse { e.into() })?;

    Ok(Json(session.into()))
}

/// 토큰 갱신 핸들러
/// Refresh token handler (refresh token in the Authorization header)
#[utoipa::path(
    post,
    path = "/api/refresh",
    responses(
        (status = 200, description = "Access token issued", body = RefreshResponse),
        (status = 401, description = "Invalid token"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Auth"
)]
pub async fn refresh(
    State(app_state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<RefreshResponse>, ErrorResponse> {
    let refresh_token = get_bearer_token(&headers).map_err(|e| -> ErrorResponse { e.into() })?;

    let token = app_state
        .auth_state
        .auth_service
        .refresh(&refresh_token)
        .await
        .map_err(|e: AuthError| -> ErrorResponse { e.into() })?;

    Ok(Json(RefreshResponse { token }))
}

/// 로그아웃 핸들러
/// Revoke handler. Succeeds for unknown and already-revoked tokens.
#[utoipa::path(
    post,
    path = "/api/revoke",
    responses(
        (status = 204, description = "Refresh token revoked"),
        (status = 401, description = "Missing bearer token"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Auth"
)]
pub async fn revoke(
    State(app_state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ErrorResponse> {
    let refresh_token = get_bearer_token(&headers).map_err(|e| -> ErrorResponse { e.into() })?;

    app_state
        .auth_state
        .auth_service
        .revoke(&refresh_token)
        .await
        .map_err(|e: AuthError| -> ErrorResponse { e.into() })?;

    Ok(StatusCode::NO_CONTENT)
}

/// 이메일/비밀번호 변경 핸들러
/// Update email and password (access token in the Authorization header)
#[utoipa::path(
    put,
    path = "/api/users",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 401, description = "Invalid token"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Auth"
)]
pub async fn update_user(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    JsonBody(request): JsonBody<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ErrorResponse> {
    let access_token = get_bearer_token(&headers).map_err(|e| -> ErrorResponse { e.into() })?;

    let user = app_state
        .auth_state
        .auth_service
        .update_credentials(&access_token, request)
        .await
        .map_err(|e: AuthError| -> ErrorResponse { e.into() })?;

    Ok(Json(user.into()))
}
