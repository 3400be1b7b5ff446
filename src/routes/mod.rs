// Routes module: 라우팅 설정
// 역할: 모든 도메인의 라우터를 조합
// Routes module: combines all domain routers

use axum::Router;
use crate::shared::services::AppState;

// 각 도메인의 routes import
use crate::domains::admin::routes::create_admin_router;
use crate::domains::auth::routes::create_auth_router;
use crate::domains::chirps::routes::create_chirps_router;

/// Create main router (combines all domain routers)
/// 메인 라우터 생성 (모든 도메인 라우터 조합)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api", create_auth_router().merge(create_chirps_router()))
        .nest("/admin", create_admin_router())
}
