use crate::shared::errors::AuthError;
use crate::shared::services::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;

type ErrorResponse = (StatusCode, Json<serde_json::Value>);

/// 개발 환경 초기화 (모든 사용자 삭제)
/// Delete every user and, by cascade, their chirps and refresh tokens.
/// Only available when `PLATFORM=dev`.
#[utoipa::path(
    post,
    path = "/admin/reset",
    responses(
        (status = 200, description = "All users deleted"),
        (status = 403, description = "Not a dev platform"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Admin"
)]
pub async fn reset(
    State(app_state): State<AppState>,
) -> Result<Json<serde_json::Value>, ErrorResponse> {
    if !app_state.is_dev {
        return Err((StatusCode::FORBIDDEN, Json(json!({ "error": "Not dev" }))));
    }

    let deleted = app_state
        .auth_state
        .auth_service
        .reset()
        .await
        .map_err(|e: AuthError| -> ErrorResponse { e.into() })?;

    tracing::warn!(deleted, "all users deleted by admin reset");
    Ok(Json(json!({ "deleted_users": deleted })))
}
