// Admin domain routes
use axum::{routing::post, Router};
use crate::domains::admin::handlers::admin_handler;
use crate::shared::services::AppState;

/// Create admin router (mounted under `/admin`)
pub fn create_admin_router() -> Router<AppState> {
    Router::new().route("/reset", post(admin_handler::reset))
}
