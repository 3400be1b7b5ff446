use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Refresh Token 모델 (DB 저장용)
/// Refresh Token model (for database storage)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshToken {
    pub token: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshToken {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    /// 사용 가능 여부: 만료 전이고 무효화되지 않았을 때만
    /// Usable iff `now < expires_at` and the token was never revoked
    pub fn is_usable_at(&self, now: DateTime<Utc>) -> bool {
        !self.is_expired_at(now) && !self.is_revoked()
    }
}

/// Refresh Token 생성 요청 (새 토큰 발급 시)
/// Refresh Token creation request (when issuing new token)
#[derive(Debug, Clone)]
pub struct RefreshTokenCreate {
    pub token: String,
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn token_expiring_in(ttl: Duration) -> RefreshToken {
        let now = Utc::now();
        RefreshToken {
            token: "abc".to_string(),
            user_id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            expires_at: now + ttl,
            revoked_at: None,
        }
    }

    #[test]
    fn test_fresh_token_is_usable() {
        let token = token_expiring_in(Duration::days(60));
        assert!(token.is_usable_at(Utc::now()));
    }

    #[test]
    fn test_token_unusable_at_exact_expiry() {
        let token = token_expiring_in(Duration::days(1));
        assert!(token.is_expired_at(token.expires_at));
        assert!(!token.is_usable_at(token.expires_at));
    }

    #[test]
    fn test_revoked_token_is_unusable() {
        let mut token = token_expiring_in(Duration::days(60));
        token.revoked_at = Some(Utc::now());
        assert!(token.is_revoked());
        assert!(!token.is_usable_at(Utc::now()));
    }
}
