use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// 최대 본문 길이 (문자 수)
/// Maximum chirp body length, in characters
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Chirp 모델
/// Chirp model (database row and API response share the same shape)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = Chirp)]
pub struct Chirp {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[schema(example = "Hello, chirpy!")]
    pub body: String,
    pub user_id: Uuid,
}

// Chirp 생성 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = CreateChirpRequest)]
pub struct CreateChirpRequest {
    #[schema(example = "Hello, chirpy!")]
    pub body: String,
}

/// Chirp 목록 조회 쿼리
/// Query string for listing chirps
#[derive(Debug, Default, Deserialize)]
pub struct ListChirpsQuery {
    pub author_id: Option<String>,
    pub sort: Option<String>,
}

/// 정렬 순서 (생성 시간 기준)
/// Sort order by `created_at`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Anything other than `desc` sorts ascending.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}
