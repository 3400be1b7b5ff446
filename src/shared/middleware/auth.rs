use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap, StatusCode},
    Json,
};
use uuid::Uuid;
use crate::shared::services::AppState;
use crate::shared::errors::AuthError;

/// Authorization 헤더에서 Bearer 토큰 추출
/// Extract the raw token from `Authorization: Bearer <token>`
pub fn get_bearer_token(headers: &HeaderMap) -> Result<String, AuthError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::MissingToken)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .ok_or(AuthError::MissingToken)?;

    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }

    Ok(token.to_string())
}

/// 인증된 사용자 정보 (JWT 토큰에서 추출)
/// Authenticated user information (extracted from a valid access token)
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// AuthenticatedUser를 Axum Extractor로 구현
///
/// 사용법:
/// ```rust,ignore
/// pub async fn create_chirp(
///     State(app_state): State<AppState>,
///     authenticated_user: AuthenticatedUser,  // <- 이렇게 사용!
/// ) -> Result<...> {
///     let user_id = authenticated_user.user_id;
///     // ...
/// }
/// ```
#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // 1. Authorization 헤더에서 토큰 추출
        let token = get_bearer_token(&parts.headers).map_err(|e| -> Self::Rejection { e.into() })?;

        // 2. JWT Service로 토큰 검증 (AppState에서 가져옴)
        let user_id = state
            .auth_state
            .jwt_service
            .validate(&token)
            .map_err(|e| -> Self::Rejection { e.into() })?;

        Ok(AuthenticatedUser { user_id })
    }
}
