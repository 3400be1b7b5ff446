use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;

/// Access Token 거부 사유
/// Why an access token was rejected. Kept for logs and tests; callers only
/// ever see [`AuthError::InvalidToken`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRejection {
    BadSignature,
    WrongAlgorithm,
    WrongIssuer,
    Expired,
    InvalidSubject,
    /// Subject parsed, but no such user exists anymore
    UnknownSubject,
    Malformed,
}

impl std::fmt::Display for TokenRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Self::BadSignature => "bad signature",
            Self::WrongAlgorithm => "unexpected signing algorithm",
            Self::WrongIssuer => "unexpected issuer",
            Self::Expired => "expired",
            Self::InvalidSubject => "unparsable subject",
            Self::UnknownSubject => "unknown subject",
            Self::Malformed => "malformed token",
        };
        f.write_str(reason)
    }
}

/// Refresh Token 거부 사유
/// Why a refresh token could not be used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshRejection {
    Unknown,
    Expired,
    Revoked,
}

impl std::fmt::Display for RefreshRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Self::Unknown => "unknown token",
            Self::Expired => "token has expired",
            Self::Revoked => "token has been revoked",
        };
        f.write_str(reason)
    }
}

/// 에러 분류 (HTTP 상태 코드 매핑용)
/// Error classification handed to the transport layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthorized,
    MalformedInput,
    StorageError,
    NotFound,
    Conflict,
    Internal,
}

/// 인증 관련 에러
/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// 이메일이 이미 존재함
    /// Email already exists
    #[error("Email already exists: {email}")]
    EmailAlreadyExists { email: String },

    /// 잘못된 이메일 또는 비밀번호 (둘을 구분하지 않음)
    /// Invalid email or password; unknown email and wrong password are the same error
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// 잘못된 또는 만료된 Access Token
    /// Invalid or expired access token
    #[error("Invalid token: {0}")]
    InvalidToken(TokenRejection),

    /// Refresh Token 사용 불가
    /// Refresh token unknown, expired or revoked
    #[error("Refresh token rejected: {0}")]
    RefreshTokenRejected(RefreshRejection),

    /// 토큰이 제공되지 않음
    /// Token not provided (missing or malformed Authorization header)
    #[error("Token not provided")]
    MissingToken,

    /// 잘못된 입력
    /// Malformed input
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// 엔티티 없음
    /// Entity not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// 비밀번호 해싱 실패
    /// Failed to hash password
    #[error("Failed to hash password: {0}")]
    PasswordHashingFailed(String),

    /// 저장된 해시 형식 오류
    /// Stored password hash is structurally malformed
    #[error("Failed to verify password: {0}")]
    PasswordVerificationFailed(String),

    /// 데이터베이스 에러
    /// Storage (database) error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 내부 서버 에러
    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials
            | AuthError::InvalidToken(_)
            | AuthError::RefreshTokenRejected(_)
            | AuthError::MissingToken => ErrorKind::Unauthorized,
            AuthError::MalformedInput(_) => ErrorKind::MalformedInput,
            AuthError::EmailAlreadyExists { .. } => ErrorKind::Conflict,
            AuthError::NotFound(_) => ErrorKind::NotFound,
            AuthError::StorageError(_) => ErrorKind::StorageError,
            AuthError::PasswordHashingFailed(_)
            | AuthError::PasswordVerificationFailed(_)
            | AuthError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// 클라이언트에게 보여줄 메시지
    /// Message safe to show to clients. Unauthorized errors never reveal
    /// which check failed.
    pub fn public_message(&self) -> String {
        match self {
            AuthError::InvalidCredentials => "Incorrect email or password".to_string(),
            AuthError::InvalidToken(_)
            | AuthError::RefreshTokenRejected(_)
            | AuthError::MissingToken => "Invalid token".to_string(),
            AuthError::EmailAlreadyExists { .. } | AuthError::MalformedInput(_) => self.to_string(),
            AuthError::NotFound(_) => "Not found".to_string(),
            AuthError::StorageError(_) => "Couldn't access the database".to_string(),
            AuthError::PasswordHashingFailed(_)
            | AuthError::PasswordVerificationFailed(_)
            | AuthError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

/// AuthError를 HTTP 응답으로 변환
impl From<AuthError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: AuthError) -> Self {
        let status = match err.kind() {
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::MalformedInput | ErrorKind::Conflict => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::StorageError | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %err, "request failed");
        } else {
            tracing::debug!(error = %err, "request rejected");
        }

        (status, Json(json!({ "error": err.public_message() })))
    }
}
