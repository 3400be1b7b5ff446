// Auth domain state
// 인증 도메인 상태
use std::sync::Arc;

use chrono::Duration;

use crate::domains::auth::services::{AuthService, JwtService, PasswordService, RefreshTokenService};
use crate::shared::database::{RefreshTokenRepository, UserRepository};
use crate::shared::errors::AuthError;

/// Auth domain state
/// 인증 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct AuthState {
    pub auth_service: AuthService,
    pub jwt_service: JwtService,
}

impl AuthState {
    /// Create AuthState from repositories and token settings
    pub fn new(
        users: Arc<dyn UserRepository>,
        refresh_tokens: Arc<dyn RefreshTokenRepository>,
        jwt_service: JwtService,
        access_token_ttl: Duration,
        refresh_token_ttl: Duration,
    ) -> Result<Self, AuthError> {
        let auth_service = AuthService::new(
            users,
            PasswordService::new()?,
            jwt_service.clone(),
            RefreshTokenService::new(refresh_tokens, refresh_token_ttl),
            access_token_ttl,
        );

        Ok(Self {
            auth_service,
            jwt_service,
        })
    }
}
