use std::collections::HashSet;
use std::sync::Arc;

use uuid::Uuid;

use crate::domains::chirps::models::{Chirp, SortOrder, MAX_CHIRP_LENGTH};
use crate::shared::database::ChirpRepository;
use crate::shared::errors::ChirpError;

/// 금지어 목록 (대소문자 무시)
const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// 금지어 치환
/// Replace profane words with `****`. Words are split on single spaces, so a
/// word with trailing punctuation ("Sharbert!") is left alone.
pub fn clean_body(body: &str) -> String {
    let banned: HashSet<&str> = PROFANE_WORDS.into_iter().collect();

    body.split(' ')
        .map(|word| {
            if banned.contains(word.to_lowercase().as_str()) {
                "****"
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// Chirp 서비스
#[derive(Clone)]
pub struct ChirpService {
    chirps: Arc<dyn ChirpRepository>,
}

impl ChirpService {
    pub fn new(chirps: Arc<dyn ChirpRepository>) -> Self {
        Self { chirps }
    }

    pub async fn create(&self, user_id: Uuid, body: &str) -> Result<Chirp, ChirpError> {
        if body.chars().count() > MAX_CHIRP_LENGTH {
            return Err(ChirpError::TooLong);
        }

        let chirp = self
            .chirps
            .create(&clean_body(body), user_id)
            .await
            .map_err(|e| ChirpError::DatabaseError(format!("Failed to create chirp: {:#}", e)))?;

        tracing::info!(chirp_id = %chirp.id, user_id = %user_id, "chirp created");
        Ok(chirp)
    }

    pub async fn list(&self, author_id: Option<Uuid>, sort: SortOrder) -> Result<Vec<Chirp>, ChirpError> {
        let mut chirps = self
            .chirps
            .list(author_id)
            .await
            .map_err(|e| ChirpError::DatabaseError(format!("Failed to list chirps: {:#}", e)))?;

        // 저장소는 오름차순으로 반환
        if sort == SortOrder::Desc {
            chirps.reverse();
        }
        Ok(chirps)
    }

    pub async fn get(&self, id: Uuid) -> Result<Chirp, ChirpError> {
        self.chirps
            .get_by_id(id)
            .await
            .map_err(|e| ChirpError::DatabaseError(format!("Failed to fetch chirp: {:#}", e)))?
            .ok_or(ChirpError::NotFound { id })
    }

    /// 작성자만 삭제 가능
    /// Delete a chirp owned by `user_id`
    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), ChirpError> {
        let chirp = self.get(id).await?;
        if chirp.user_id != user_id {
            return Err(ChirpError::Forbidden);
        }

        let deleted = self
            .chirps
            .delete(id)
            .await
            .map_err(|e| ChirpError::DatabaseError(format!("Failed to delete chirp: {:#}", e)))?;

        if !deleted {
            return Err(ChirpError::NotFound { id });
        }

        tracing::info!(chirp_id = %id, user_id = %user_id, "chirp deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::database::{InMemoryStore, UserRepository};

    #[test]
    fn test_clean_body() {
        assert_eq!(clean_body("I had a kerfuffle today"), "I had a **** today");
        assert_eq!(clean_body("Fornax and SHARBERT"), "**** and ****");
        assert_eq!(clean_body("Sharbert! stays"), "Sharbert! stays");
        assert_eq!(clean_body("nothing to see"), "nothing to see");
    }

    async fn setup() -> (ChirpService, Uuid, Uuid) {
        let store = InMemoryStore::new();
        let alice = store.create_user("alice@example.com", "hash").await.unwrap();
        let bob = store.create_user("bob@example.com", "hash").await.unwrap();
        (ChirpService::new(Arc::new(store)), alice.id, bob.id)
    }

    #[tokio::test]
    async fn test_too_long_rejected() {
        let (service, alice, _) = setup().await;

        let at_limit = "a".repeat(MAX_CHIRP_LENGTH);
        assert!(service.create(alice, &at_limit).await.is_ok());

        let over_limit = "a".repeat(MAX_CHIRP_LENGTH + 1);
        assert!(matches!(service.create(alice, &over_limit).await, Err(ChirpError::TooLong)));
    }

    #[tokio::test]
    async fn test_list_filters_and_sorts() {
        let (service, alice, bob) = setup().await;
        let first = service.create(alice, "first").await.unwrap();
        service.create(bob, "bob's").await.unwrap();
        let third = service.create(alice, "third").await.unwrap();

        let all = service.list(None, SortOrder::Asc).await.unwrap();
        assert_eq!(all.len(), 3);

        let alice_desc = service.list(Some(alice), SortOrder::Desc).await.unwrap();
        let ids: Vec<Uuid> = alice_desc.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![third.id, first.id]);
    }

    #[tokio::test]
    async fn test_only_owner_can_delete() {
        let (service, alice, bob) = setup().await;
        let chirp = service.create(alice, "mine").await.unwrap();

        assert!(matches!(service.delete(bob, chirp.id).await, Err(ChirpError::Forbidden)));
        service.delete(alice, chirp.id).await.unwrap();
        assert!(matches!(service.get(chirp.id).await, Err(ChirpError::NotFound { .. })));
    }
}
