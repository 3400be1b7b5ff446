use sqlx::{postgres::PgRow, PgPool, Row};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;
use crate::domains::chirps::models::Chirp;

/// Chirp 저장소
/// Chirp repository
#[async_trait]
pub trait ChirpRepository: Send + Sync {
    async fn create(&self, body: &str, user_id: Uuid) -> Result<Chirp>;

    /// Chirp 목록 (created_at 오름차순)
    /// List chirps oldest first, optionally restricted to one author
    async fn list(&self, author_id: Option<Uuid>) -> Result<Vec<Chirp>>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Chirp>>;

    /// Returns whether a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

pub struct PgChirpRepository {
    pool: PgPool,
}

impl PgChirpRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn chirp_from_row(row: &PgRow) -> Chirp {
    Chirp {
        id: row.get("id"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        body: row.get("body"),
        user_id: row.get("user_id"),
    }
}

#[async_trait]
impl ChirpRepository for PgChirpRepository {
    async fn create(&self, body: &str, user_id: Uuid) -> Result<Chirp> {
        let now = Utc::now();
        let row = sqlx::query(
            r#"
            INSERT INTO chirps (id, body, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, body, user_id, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(body)
        .bind(user_id)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create chirp")?;

        Ok(chirp_from_row(&row))
    }

    async fn list(&self, author_id: Option<Uuid>) -> Result<Vec<Chirp>> {
        let rows = sqlx::query(
            r#"
            SELECT id, body, user_id, created_at, updated_at
            FROM chirps
            WHERE $1::uuid IS NULL OR user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list chirps")?;

        Ok(rows.iter().map(chirp_from_row).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Chirp>> {
        let row = sqlx::query(
            r#"
            SELECT id, body, user_id, created_at, updated_at
            FROM chirps
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch chirp by id")?;

        Ok(row.as_ref().map(chirp_from_row))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM chirps WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete chirp")?;

        Ok(result.rows_affected() > 0)
    }
}
