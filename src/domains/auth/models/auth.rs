use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domains::auth::models::user::User;
use crate::domains::auth::models::refresh_token::RefreshToken;

// 회원가입 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = CreateUserRequest)]
pub struct CreateUserRequest {
    /// Email address
    /// 이메일 주소
    #[schema(example = "user@example.com")]
    pub email: String,

    /// Password (will be hashed)
    /// 비밀번호 (해싱됨)
    #[schema(example = "password123")]
    pub password: String,
}

// 로그인 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = LoginRequest)]
pub struct LoginRequest {
    /// Email address
    /// 이메일 주소
    #[schema(example = "user@example.com")]
    pub email: String,

    /// Password
    /// 비밀번호
    #[schema(example = "password123")]
    pub password: String,
}

// 로그인 응답 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = LoginResponse)]
pub struct LoginResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[schema(example = "user@example.com")]
    pub email: String,

    /// JWT Access Token (짧은 수명)
    /// JWT Access Token (short lifetime)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,

    /// Refresh Token (긴 수명, DB에 저장)
    /// Refresh Token (long lifetime, stored in database)
    #[schema(example = "abc123def456...")]
    pub refresh_token: String,
}

impl From<Session> for LoginResponse {
    fn from(session: Session) -> Self {
        Self {
            id: session.user.id,
            created_at: session.user.created_at,
            updated_at: session.user.updated_at,
            email: session.user.email,
            token: session.access_token,
            refresh_token: session.refresh_token.token,
        }
    }
}

// 토큰 갱신 응답 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = RefreshResponse)]
pub struct RefreshResponse {
    /// 새 Access Token
    /// New Access Token
    pub token: String,
}

// 사용자 정보 수정 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = UpdateUserRequest)]
pub struct UpdateUserRequest {
    #[schema(example = "new@example.com")]
    pub email: String,

    #[schema(example = "new-password")]
    pub password: String,
}

/// 로그인 결과 (Access Token + Refresh Token)
/// Login result: one access token paired with one freshly minted refresh token
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub access_token: String,
    pub refresh_token: RefreshToken,
}
