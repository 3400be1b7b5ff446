// In-memory repositories
// 테스트 및 로컬 실행용 메모리 저장소
// Backs all three repository traits with one lock so that deleting users
// cascades the way the PostgreSQL foreign keys do.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::domains::auth::models::refresh_token::{RefreshToken, RefreshTokenCreate};
use crate::domains::auth::models::user::User;
use crate::domains::chirps::models::Chirp;
use super::auth::{RefreshTokenRepository, UserRepository};
use super::chirps::ChirpRepository;

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    refresh_tokens: HashMap<String, RefreshToken>,
    // insertion order doubles as creation order
    chirps: Vec<Chirp>,
}

/// 메모리 저장소
/// In-memory store implementing every repository trait
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.tables.read().users.len()
    }

    pub fn refresh_token_count(&self) -> usize {
        self.tables.read().refresh_tokens.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create_user(&self, email: &str, hashed_password: &str) -> Result<User> {
        let mut tables = self.tables.write();
        if tables.users.values().any(|u| u.email == email) {
            bail!("duplicate key value violates unique constraint \"users_email_key\"");
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            hashed_password: hashed_password.to_string(),
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let tables = self.tables.read();
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self.tables.read().users.get(&id).cloned())
    }

    async fn update_credentials(
        &self,
        id: Uuid,
        email: &str,
        hashed_password: &str,
    ) -> Result<Option<User>> {
        let mut tables = self.tables.write();
        if tables.users.values().any(|u| u.email == email && u.id != id) {
            bail!("duplicate key value violates unique constraint \"users_email_key\"");
        }

        Ok(tables.users.get_mut(&id).map(|user| {
            user.email = email.to_string();
            user.hashed_password = hashed_password.to_string();
            user.updated_at = Utc::now();
            user.clone()
        }))
    }

    async fn delete_all(&self) -> Result<u64> {
        let mut tables = self.tables.write();
        let deleted = tables.users.len() as u64;
        tables.users.clear();
        tables.refresh_tokens.clear();
        tables.chirps.clear();
        Ok(deleted)
    }
}

#[async_trait]
impl RefreshTokenRepository for InMemoryStore {
    async fn create(&self, data: RefreshTokenCreate) -> Result<RefreshToken> {
        let mut tables = self.tables.write();
        if !tables.users.contains_key(&data.user_id) {
            bail!("insert violates foreign key constraint \"refresh_tokens_user_id_fkey\"");
        }
        if tables.refresh_tokens.contains_key(&data.token) {
            bail!("duplicate key value violates unique constraint \"refresh_tokens_pkey\"");
        }

        let now = Utc::now();
        let token = RefreshToken {
            token: data.token,
            user_id: data.user_id,
            created_at: now,
            updated_at: now,
            expires_at: data.expires_at,
            revoked_at: None,
        };
        tables.refresh_tokens.insert(token.token.clone(), token.clone());
        Ok(token)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>> {
        Ok(self.tables.read().refresh_tokens.get(token).cloned())
    }

    async fn revoke(&self, token: &str) -> Result<bool> {
        let mut tables = self.tables.write();
        match tables.refresh_tokens.get_mut(token) {
            Some(row) if row.revoked_at.is_none() => {
                let now = Utc::now();
                row.revoked_at = Some(now);
                row.updated_at = now;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[async_trait]
impl ChirpRepository for InMemoryStore {
    async fn create(&self, body: &str, user_id: Uuid) -> Result<Chirp> {
        let mut tables = self.tables.write();
        if !tables.users.contains_key(&user_id) {
            bail!("insert violates foreign key constraint \"chirps_user_id_fkey\"");
        }

        let now = Utc::now();
        let chirp = Chirp {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            body: body.to_string(),
            user_id,
        };
        tables.chirps.push(chirp.clone());
        Ok(chirp)
    }

    async fn list(&self, author_id: Option<Uuid>) -> Result<Vec<Chirp>> {
        let tables = self.tables.read();
        Ok(tables
            .chirps
            .iter()
            .filter(|c| author_id.map_or(true, |id| c.user_id == id))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Chirp>> {
        Ok(self.tables.read().chirps.iter().find(|c| c.id == id).cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut tables = self.tables.write();
        let before = tables.chirps.len();
        tables.chirps.retain(|c| c.id != id);
        Ok(tables.chirps.len() < before)
    }
}
