// src/domains/auth/services/jwt_service.rs
use crate::shared::errors::{AuthError, TokenRejection};
use crate::domains::auth::models::jwt::{Claims, TOKEN_ISSUER};
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

/// JWT 서비스
/// JWT Service for access token issuance and validation (HS256 only)
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    /// JWT Service 생성
    /// Create JWT Service from the shared signing secret
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_ref());
        let decoding_key = DecodingKey::from_secret(secret.as_ref());

        // HS256 외의 알고리즘은 거부 (algorithm confusion 방지)
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[TOKEN_ISSUER]);
        validation.set_required_spec_claims(&["exp", "sub", "iss"]);
        validation.leeway = 0;

        Self {
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Access Token 발급
    /// Issue an access token for `user_id` valid for `ttl`
    pub fn issue(&self, user_id: Uuid, ttl: Duration) -> Result<String, AuthError> {
        let claims = Claims::new(user_id, ttl)
            .ok_or_else(|| AuthError::Internal("Access token expiry out of range".to_string()))?;

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to sign access token: {}", e)))
    }

    /// Access Token 검증
    /// Validate an access token and return its subject
    pub fn validate(&self, token: &str) -> Result<Uuid, AuthError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                let reason = match e.kind() {
                    ErrorKind::InvalidSignature => TokenRejection::BadSignature,
                    ErrorKind::InvalidAlgorithm => TokenRejection::WrongAlgorithm,
                    ErrorKind::ExpiredSignature => TokenRejection::Expired,
                    ErrorKind::InvalidIssuer => TokenRejection::WrongIssuer,
                    _ => TokenRejection::Malformed,
                };
                AuthError::InvalidToken(reason)
            })?;

        let claims = token_data.claims;

        // jsonwebtoken accepts exp == now; an access token is dead at its expiry instant
        if claims.exp <= Utc::now().timestamp() {
            return Err(AuthError::InvalidToken(TokenRejection::Expired));
        }

        Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidToken(TokenRejection::InvalidSubject))
    }
}
