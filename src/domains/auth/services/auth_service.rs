use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::shared::database::UserRepository;
use crate::domains::auth::models::{
    CreateUserRequest, LoginRequest, Session, UpdateUserRequest, User,
};
use crate::domains::auth::services::{JwtService, PasswordService, RefreshTokenService};
use crate::shared::errors::{AuthError, RefreshRejection, TokenRejection};

// 인증 서비스
// AuthService: orchestrates password checks, access tokens and refresh tokens
// for signup, login, refresh, revoke and credential updates
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    passwords: PasswordService,
    jwt_service: JwtService,
    refresh_tokens: RefreshTokenService,
    access_token_ttl: Duration,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        passwords: PasswordService,
        jwt_service: JwtService,
        refresh_tokens: RefreshTokenService,
        access_token_ttl: Duration,
    ) -> Self {
        Self {
            users,
            passwords,
            jwt_service,
            refresh_tokens,
            access_token_ttl,
        }
    }

    // 회원가입 (비즈니스 로직)
    pub async fn signup(&self, request: CreateUserRequest) -> Result<User, AuthError> {
        let email = request.email.trim();
        if email.is_empty() {
            return Err(AuthError::MalformedInput("email is required".to_string()));
        }

        // 1. 이메일 중복 확인
        let existing_user = self
            .users
            .get_user_by_email(email)
            .await
            .map_err(|e| AuthError::StorageError(format!("Failed to check email existence: {:#}", e)))?;

        if existing_user.is_some() {
            return Err(AuthError::EmailAlreadyExists { email: email.to_string() });
        }

        // 2. 비밀번호 해싱
        let hashed_password = self.hash_password(request.password).await?;

        // 3. 사용자 생성
        let user = self
            .users
            .create_user(email, &hashed_password)
            .await
            .map_err(|e| AuthError::StorageError(format!("Failed to create user: {:#}", e)))?;

        tracing::info!(user_id = %user.id, "user created");
        Ok(user)
    }

    // 로그인
    // Unknown email, malformed stored hash and wrong password all end in the
    // same InvalidCredentials value.
    pub async fn login(&self, request: LoginRequest) -> Result<Session, AuthError> {
        // 1. 이메일로 사용자 조회 (회원가입과 같은 정규화)
        let user = self
            .users
            .get_user_by_email(request.email.trim())
            .await
            .map_err(|e| AuthError::StorageError(format!("Failed to fetch user: {:#}", e)))?
            .ok_or(AuthError::InvalidCredentials)?;

        // 2. 비밀번호 검증
        let matched = match self
            .verify_password(request.password, user.hashed_password.clone())
            .await
        {
            Ok(matched) => matched,
            Err(e @ AuthError::Internal(_)) => return Err(e),
            Err(e) => {
                tracing::warn!(user_id = %user.id, error = %e, "stored password hash is unusable");
                false
            }
        };
        if !matched {
            return Err(AuthError::InvalidCredentials);
        }

        // 3. Access Token + Refresh Token 발급
        let access_token = self.jwt_service.issue(user.id, self.access_token_ttl)?;
        let refresh_token = self.refresh_tokens.issue(user.id).await?;

        tracing::info!(user_id = %user.id, "login succeeded");
        Ok(Session {
            user,
            access_token,
            refresh_token,
        })
    }

    /// Refresh Token 검증 및 새 Access Token 발급
    /// Verify refresh token and issue a new access token. The refresh token
    /// itself is left as is.
    pub async fn refresh(&self, refresh_token: &str) -> Result<String, AuthError> {
        // 1. DB에서 조회
        let stored_token = match self.refresh_tokens.lookup(refresh_token).await {
            Ok(token) => token,
            Err(AuthError::NotFound(_)) => {
                return Err(AuthError::RefreshTokenRejected(RefreshRejection::Unknown))
            }
            Err(e) => return Err(e),
        };

        // 2. 만료 확인, 3. 무효화 확인
        if stored_token.is_expired_at(Utc::now()) {
            return Err(AuthError::RefreshTokenRejected(RefreshRejection::Expired));
        }
        if stored_token.is_revoked() {
            return Err(AuthError::RefreshTokenRejected(RefreshRejection::Revoked));
        }

        // 4. 새 Access Token 생성
        self.jwt_service.issue(stored_token.user_id, self.access_token_ttl)
    }

    /// 로그아웃 - Refresh Token 무효화
    /// Revoke a refresh token. Unknown and already-revoked tokens succeed too.
    pub async fn revoke(&self, refresh_token: &str) -> Result<(), AuthError> {
        match self.refresh_tokens.revoke(refresh_token).await {
            Ok(()) | Err(AuthError::NotFound(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// 이메일/비밀번호 변경 (유효한 Access Token 필요)
    /// Change email and password; requires a currently valid access token
    pub async fn update_credentials(
        &self,
        access_token: &str,
        request: UpdateUserRequest,
    ) -> Result<User, AuthError> {
        let user_id = self.jwt_service.validate(access_token)?;

        let email = request.email.trim();
        if email.is_empty() {
            return Err(AuthError::MalformedInput("email is required".to_string()));
        }

        let hashed_password = self.hash_password(request.password).await?;

        let user = self
            .users
            .update_credentials(user_id, email, &hashed_password)
            .await
            .map_err(|e| AuthError::StorageError(format!("Failed to update user: {:#}", e)))?
            .ok_or(AuthError::InvalidToken(TokenRejection::UnknownSubject))?;

        tracing::info!(user_id = %user.id, "credentials updated");
        Ok(user)
    }

    // Argon2 (64 MiB) 는 blocking 스레드 풀에서 실행
    async fn hash_password(&self, password: String) -> Result<String, AuthError> {
        let passwords = self.passwords.clone();

        tokio::task::spawn_blocking(move || passwords.hash(&password))
            .await
            .map_err(|e| AuthError::Internal(format!("Password hashing task failed: {}", e)))?
    }

    async fn verify_password(&self, password: String, hashed_password: String) -> Result<bool, AuthError> {
        let passwords = self.passwords.clone();

        tokio::task::spawn_blocking(move || passwords.verify(&password, &hashed_password))
            .await
            .map_err(|e| AuthError::Internal(format!("Password verification task failed: {}", e)))?
    }

    /// 모든 사용자 삭제 (개발 환경 전용)
    /// Delete every user; the handler gates this to the dev platform
    pub async fn reset(&self) -> Result<u64, AuthError> {
        self.users
            .delete_all()
            .await
            .map_err(|e| AuthError::StorageError(format!("Failed to delete users: {:#}", e)))
    }
}
