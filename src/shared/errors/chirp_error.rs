use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;
use uuid::Uuid;

/// Chirp 관련 에러
/// Chirp-related errors
#[derive(Error, Debug)]
pub enum ChirpError {
    /// 본문이 너무 김
    /// Body longer than the allowed maximum
    #[error("Chirp is too long")]
    TooLong,

    /// 잘못된 ID
    /// Unparsable chirp or author ID
    #[error("Invalid {field}")]
    InvalidId { field: &'static str },

    #[error("Chirp not found: id={id}")]
    NotFound { id: Uuid },

    /// 작성자가 아님
    /// Caller does not own the chirp
    #[error("You don't own this chirp")]
    Forbidden,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// ChirpError를 HTTP 응답으로 변환
impl From<ChirpError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: ChirpError) -> Self {
        let (status, message) = match &err {
            ChirpError::TooLong | ChirpError::InvalidId { .. } => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            ChirpError::NotFound { .. } => (StatusCode::NOT_FOUND, "Chirp not found".to_string()),
            ChirpError::Forbidden => (StatusCode::FORBIDDEN, err.to_string()),
            ChirpError::DatabaseError(_) => {
                tracing::error!(error = %err, "chirp request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Couldn't access the database".to_string())
            }
        };

        (status, Json(json!({ "error": message })))
    }
}
