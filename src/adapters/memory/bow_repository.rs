//! In-memory bow repository.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::bow::Bow;
use crate::domain::foundation::{BowId, DomainError, ErrorCode, Repository};
use crate::ports::{BowFilter, BowRepository};

#[derive(Debug, Clone, Default)]
pub struct InMemoryBowRepository {
    bows: Arc<RwLock<HashMap<BowId, Bow>>>,
}

impl InMemoryBowRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(id: &BowId) -> DomainError {
    DomainError::new(ErrorCode::BowNotFound, format!("Bow {} not found", id))
}

#[async_trait]
impl Repository<Bow, BowId> for InMemoryBowRepository {
    async fn find_by_id(&self, id: BowId) -> Result<Option<Bow>, DomainError> {
        Ok(self.bows.read().await.get(&id).cloned())
    }

    async fn save(&self, bow: &Bow) -> Result<(), DomainError> {
        let mut bows = self.bows.write().await;
        if bows.contains_key(bow.id()) {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                format!("Bow {} already exists", bow.id()),
            ));
        }
        bows.insert(*bow.id(), bow.clone());
        Ok(())
    }

    async fn update(&self, bow: &Bow) -> Result<(), DomainError> {
        let mut bows = self.bows.write().await;
        let stored = bows.get(bow.id()).ok_or_else(|| not_found(bow.id()))?;
        let expected = bow.version() - 1;
        if stored.version() != expected {
            return Err(DomainError::version_conflict("Bow", expected, stored.version()));
        }
        bows.insert(*bow.id(), bow.clone());
        Ok(())
    }

    async fn delete(&self, id: BowId) -> Result<(), DomainError> {
        self.bows
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(&id))
    }
}

#[async_trait]
impl BowRepository for InMemoryBowRepository {
    async fn list(&self, filter: &BowFilter) -> Result<Vec<Bow>, DomainError> {
        let mut found: Vec<Bow> = self
            .bows
            .read()
            .await
            .values()
            .filter(|b| filter.matches(b))
            .cloned()
            .collect();
        found.sort_by_key(|b| Reverse(*b.created_at()));
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bow::{BowChanges, BowDraft};
    use crate::domain::foundation::Difficulty;

    fn bow(name: &str) -> Bow {
        Bow::new(
            BowId::new(),
            BowDraft {
                name: name.to_string(),
                description: String::new(),
                category: "Boutique".to_string(),
                difficulty: Difficulty::Easy,
                time_to_make: "10 minutes".to_string(),
                tags: vec![],
                layers: 1,
                materials: vec![],
                recipe_id: None,
                total_cost: "2".parse().unwrap(),
                target_price: "5".parse().unwrap(),
            },
        )
        .unwrap()
    }

    fn renamed(bow: &Bow, name: &str) -> Bow {
        let mut next = bow.clone();
        next.apply(BowChanges {
            name: Some(name.to_string()),
            ..Default::default()
        })
        .unwrap();
        next
    }

    #[tokio::test]
    async fn saved_bow_is_found_and_exists() {
        let repo = InMemoryBowRepository::new();
        let bow = bow("Classic");
        repo.save(&bow).await.unwrap();

        assert_eq!(repo.find_by_id(*bow.id()).await.unwrap(), Some(bow.clone()));
        assert!(repo.exists(*bow.id()).await.unwrap());
        assert!(!repo.exists(BowId::new()).await.unwrap());
    }

    #[tokio::test]
    async fn saving_twice_is_rejected() {
        let repo = InMemoryBowRepository::new();
        let bow = bow("Classic");
        repo.save(&bow).await.unwrap();
        assert!(repo.save(&bow).await.is_err());
    }

    #[tokio::test]
    async fn update_accepts_the_next_version_only() {
        let repo = InMemoryBowRepository::new();
        let original = bow("Classic");
        repo.save(&original).await.unwrap();

        let first = renamed(&original, "First");
        repo.update(&first).await.unwrap();

        // Built from version 1 while the store already holds version 2.
        let stale = renamed(&original, "Second");
        let err = repo.update(&stale).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::VersionConflict);

        let stored = repo.find_by_id(*original.id()).await.unwrap().unwrap();
        assert_eq!(stored.name(), "First");
        assert_eq!(stored.version(), 2);
    }

    #[tokio::test]
    async fn update_of_missing_bow_is_not_found() {
        let repo = InMemoryBowRepository::new();
        let err = repo.update(&renamed(&bow("Ghost"), "Still ghost")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BowNotFound);
    }

    #[tokio::test]
    async fn delete_removes_and_then_reports_not_found() {
        let repo = InMemoryBowRepository::new();
        let bow = bow("Classic");
        repo.save(&bow).await.unwrap();

        repo.delete(*bow.id()).await.unwrap();
        assert_eq!(repo.find_by_id(*bow.id()).await.unwrap(), None);
        let err = repo.delete(*bow.id()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BowNotFound);
    }
}
