// src/domains/auth/services/refresh_token_service.rs
use std::sync::Arc;

use chrono::{Duration, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use uuid::Uuid;

use crate::domains::auth::models::refresh_token::{RefreshToken, RefreshTokenCreate};
use crate::shared::database::RefreshTokenRepository;
use crate::shared::errors::AuthError;

/// Refresh Token 길이 (영숫자 64자, 약 380비트)
/// Refresh token length: 64 alphanumeric characters (~380 bits)
pub const REFRESH_TOKEN_LENGTH: usize = 64;

/// Refresh Token 서비스
/// Issues, looks up and revokes opaque refresh tokens
#[derive(Clone)]
pub struct RefreshTokenService {
    repository: Arc<dyn RefreshTokenRepository>,
    ttl: Duration,
}

impl RefreshTokenService {
    pub fn new(repository: Arc<dyn RefreshTokenRepository>, ttl: Duration) -> Self {
        Self { repository, ttl }
    }

    /// Refresh Token 생성 (랜덤 문자열)
    /// Generate an opaque token value from the thread-local CSPRNG
    pub fn generate_token() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(REFRESH_TOKEN_LENGTH)
            .map(char::from)
            .collect()
    }

    /// Refresh Token 발급 및 DB 저장
    /// Create and store a refresh token for `user_id`
    pub async fn issue(&self, user_id: Uuid) -> Result<RefreshToken, AuthError> {
        let expires_at = Utc::now()
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AuthError::Internal("Refresh token expiry out of range".to_string()))?;

        self.repository
            .create(RefreshTokenCreate {
                token: Self::generate_token(),
                user_id,
                expires_at,
            })
            .await
            .map_err(|e| AuthError::StorageError(format!("Failed to create refresh token: {:#}", e)))
    }

    /// Refresh Token 조회
    /// Look up a token by exact value. Expiry and revocation are the caller's
    /// concern so it can tell them apart.
    pub async fn lookup(&self, token: &str) -> Result<RefreshToken, AuthError> {
        self.repository
            .find_by_token(token)
            .await
            .map_err(|e| AuthError::StorageError(format!("Failed to find refresh token: {:#}", e)))?
            .ok_or_else(|| AuthError::NotFound("refresh token".to_string()))
    }

    /// Refresh Token 무효화
    /// Revoke a token; `NotFound` when nothing was revoked (unknown or already revoked)
    pub async fn revoke(&self, token: &str) -> Result<(), AuthError> {
        let revoked = self
            .repository
            .revoke(token)
            .await
            .map_err(|e| AuthError::StorageError(format!("Failed to revoke refresh token: {:#}", e)))?;

        if revoked {
            Ok(())
        } else {
            Err(AuthError::NotFound("refresh token".to_string()))
        }
    }
}
