use std::sync::Arc;
use crate::shared::config::Config;
use crate::shared::database::{
    ChirpRepository, Database, PgChirpRepository, PgRefreshTokenRepository, PgUserRepository,
    RefreshTokenRepository, UserRepository,
};
use crate::domains::auth::services::state::AuthState;
use crate::domains::auth::services::JwtService;
use crate::domains::chirps::services::state::ChirpState;
use anyhow::Result;

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
#[derive(Clone)]
pub struct AppState {
    pub auth_state: AuthState,
    pub chirp_state: ChirpState,
    /// `PLATFORM=dev` 일 때만 초기화 허용
    /// Whether the admin reset endpoint is enabled
    pub is_dev: bool,
}

impl AppState {
    /// Create AppState with database
    /// 모든 도메인 State를 PostgreSQL 저장소로 초기화
    pub fn new(db: &Database, config: &Config) -> Result<Self> {
        let pool = db.pool().clone();

        Self::with_repositories(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgRefreshTokenRepository::new(pool.clone())),
            Arc::new(PgChirpRepository::new(pool)),
            config,
        )
    }

    /// Create AppState from arbitrary repositories (tests use the in-memory store)
    pub fn with_repositories(
        users: Arc<dyn UserRepository>,
        refresh_tokens: Arc<dyn RefreshTokenRepository>,
        chirps: Arc<dyn ChirpRepository>,
        config: &Config,
    ) -> Result<Self> {
        // 1. 공유 서비스 생성 (JWT)
        let jwt_service = JwtService::new(&config.jwt_secret);

        // 2. 각 도메인 State 생성
        let auth_state = AuthState::new(
            users,
            refresh_tokens,
            jwt_service,
            config.access_token_ttl,
            config.refresh_token_ttl,
        )?;
        let chirp_state = ChirpState::new(chirps);

        // 3. AppState 조합
        Ok(Self {
            auth_state,
            chirp_state,
            is_dev: config.is_dev(),
        })
    }
}
