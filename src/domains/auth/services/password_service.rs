// src/domains/auth/services/password_service.rs
use crate::shared::errors::AuthError;
use argon2::password_hash::{self, rand_core::OsRng, SaltString};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

/// Argon2id 비용 파라미터
/// Argon2id cost parameters: 64 MiB memory, 1 pass, 2 lanes, 32-byte output
pub const MEMORY_COST_KIB: u32 = 64 * 1024;
pub const TIME_COST: u32 = 1;
pub const PARALLELISM: u32 = 2;
pub const OUTPUT_LEN: usize = 32;

/// 비밀번호 서비스
/// Password hashing and verification
#[derive(Clone)]
pub struct PasswordService {
    params: Params,
}

impl PasswordService {
    pub fn new() -> Result<Self, AuthError> {
        let params = Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, Some(OUTPUT_LEN))
            .map_err(|e| AuthError::Internal(format!("Invalid Argon2 parameters: {}", e)))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// 비밀번호 해싱
    /// Hash a password into a PHC string that embeds salt and parameters.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::PasswordHashingFailed(e.to_string()))?
            .to_string();

        Ok(password_hash)
    }

    /// 비밀번호 검증
    /// Verify a password against a stored PHC string using the parameters the
    /// string carries. A mismatch is `Ok(false)`; only an unparsable digest is
    /// an error.
    pub fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AuthError> {
        let parsed_hash = PasswordHash::new(password_hash)
            .map_err(|e| AuthError::PasswordVerificationFailed(format!("Invalid password hash: {}", e)))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::PasswordVerificationFailed(e.to_string())),
        }
    }
}
