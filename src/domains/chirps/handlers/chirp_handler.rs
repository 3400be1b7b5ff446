use crate::domains::chirps::models::{Chirp, CreateChirpRequest, ListChirpsQuery, SortOrder};
use crate::shared::errors::ChirpError;
use crate::shared::middleware::{AuthenticatedUser, JsonBody};
use crate::shared::services::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

type ErrorResponse = (StatusCode, Json<serde_json::Value>);

fn parse_id(raw: &str, field: &'static str) -> Result<Uuid, ErrorResponse> {
    Uuid::parse_str(raw).map_err(|_| ChirpError::InvalidId { field }.into())
}

#[utoipa::path(
    post,
    path = "/api/chirps",
    request_body = CreateChirpRequest,
    responses(
        (status = 201, description = "Chirp created", body = Chirp),
        (status = 400, description = "Chirp is too long"),
        (status = 401, description = "Invalid token"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Chirps"
)]
pub async fn create_chirp(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    JsonBody(request): JsonBody<CreateChirpRequest>,
) -> Result<(StatusCode, Json<Chirp>), ErrorResponse> {
    let chirp = app_state
        .chirp_state
        .chirp_service
        .create(authenticated_user.user_id, &request.body)
        .await
        .map_err(|e: ChirpError| -> ErrorResponse { e.into() })?;

    Ok((StatusCode::CREATED, Json(chirp)))
}

#[utoipa::path(
    get,
    path = "/api/chirps",
    params(
        ("author_id" = Option<String>, Query, description = "Only chirps by this user"),
        ("sort" = Option<String>, Query, description = "asc (default) or desc by created_at")
    ),
    responses(
        (status = 200, description = "Chirps", body = [Chirp]),
        (status = 400, description = "Invalid author_id"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Chirps"
)]
pub async fn list_chirps(
    State(app_state): State<AppState>,
    Query(query): Query<ListChirpsQuery>,
) -> Result<Json<Vec<Chirp>>, ErrorResponse> {
    let author_id = match query.author_id.as_deref() {
        Some(raw) if !raw.is_empty() => Some(parse_id(raw, "author_id")?),
        _ => None,
    };
    let sort = SortOrder::parse(query.sort.as_deref());

    let chirps = app_state
        .chirp_state
        .chirp_service
        .list(author_id, sort)
        .await
        .map_err(|e: ChirpError| -> ErrorResponse { e.into() })?;

    Ok(Json(chirps))
}

#[utoipa::path(
    get,
    path = "/api/chirps/{chirp_id}",
    params(
        ("chirp_id" = String, Path, description = "Chirp ID")
    ),
    responses(
        (status = 200, description = "Chirp", body = Chirp),
        (status = 400, description = "Invalid chirp ID"),
        (status = 404, description = "Chirp not found")
    ),
    tag = "Chirps"
)]
pub async fn get_chirp(
    State(app_state): State<AppState>,
    Path(chirp_id): Path<String>,
) -> Result<Json<Chirp>, ErrorResponse> {
    let chirp_id = parse_id(&chirp_id, "chirp ID")?;

    let chirp = app_state
        .chirp_state
        .chirp_service
        .get(chirp_id)
        .await
        .map_err(|e: ChirpError| -> ErrorResponse { e.into() })?;

    Ok(Json(chirp))
}

#[utoipa::path(
    delete,
    path = "/api/chirps/{chirp_id}",
    params(
        ("chirp_id" = String, Path, description = "Chirp ID")
    ),
    responses(
        (status = 204, description = "Chirp deleted"),
        (status = 401, description = "Invalid token"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "Chirp not found")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Chirps"
)]
pub async fn delete_chirp(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Path(chirp_id): Path<String>,
) -> Result<StatusCode, ErrorResponse> {
    let chirp_id = parse_id(&chirp_id, "chirp ID")?;

    app_state
        .chirp_state
        .chirp_service
        .delete(authenticated_user.user_id, chirp_id)
        .await
        .map_err(|e: ChirpError| -> ErrorResponse { e.into() })?;

    Ok(StatusCode::NO_CONTENT)
}
