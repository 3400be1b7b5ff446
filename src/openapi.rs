// OpenAPI 스키마 정의: Swagger 문서 자동 생성
use utoipa::OpenApi;

use crate::domains::auth::models::*;
use crate::domains::chirps::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::domains::auth::handlers::auth_handler::create_user,
        crate::domains::auth::handlers::auth_handler::update_user,
        crate::domains::auth::handlers::auth_handler::login,
        crate::domains::auth::handlers::auth_handler::refresh,
        crate::domains::auth::handlers::auth_handler::revoke,
        crate::domains::chirps::handlers::chirp_handler::create_chirp,
        crate::domains::chirps::handlers::chirp_handler::list_chirps,
        crate::domains::chirps::handlers::chirp_handler::get_chirp,
        crate::domains::chirps::handlers::chirp_handler::delete_chirp,
        crate::domains::admin::handlers::admin_handler::reset
    ),
    components(schemas(
        CreateUserRequest,
        LoginRequest,
        LoginResponse,
        RefreshResponse,
        UpdateUserRequest,
        UserResponse,
        Chirp,
        CreateChirpRequest
    )),
    modifiers(
        &SecurityAddon
    ),
    tags(
        (name = "Auth", description = "Users, login and session tokens"),
        (name = "Chirps", description = "Short text posts"),
        (name = "Admin", description = "Development-only maintenance")
    ),
    info(
        title = "Chirpy API Server",
        description = "Users, chirps and session management",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

// Security scheme 정의: Swagger UI에서 "Authorize" 버튼 추가
pub struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
