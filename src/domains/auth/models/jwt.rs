use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access token issuer.
pub const TOKEN_ISSUER: &str = "chirpy";

/// JWT Claims (토큰에 포함될 데이터)
/// JWT Claims (data carried by an access token)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 사용자 ID (UUID 문자열)
    /// Subject: user ID as a UUID string
    pub sub: String,

    /// 발급자
    /// Issuer, always `chirpy`
    pub iss: String,

    /// 발급 시간 (Unix timestamp)
    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// 만료 시간 (Unix timestamp)
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// 새 Claims 생성 (만료 시간 = 지금 + ttl)
    /// Create new Claims expiring `ttl` from now. A zero or negative `ttl`
    /// yields an already-expired token; `None` when the expiry overflows.
    pub fn new(user_id: Uuid, ttl: Duration) -> Option<Self> {
        let now = Utc::now();
        let expires_at = now.checked_add_signed(ttl)?;

        Some(Self {
            sub: user_id.to_string(),
            iss: TOKEN_ISSUER.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        })
    }
}
