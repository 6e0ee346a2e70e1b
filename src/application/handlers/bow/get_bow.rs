//! Bow queries.

use std::sync::Arc;

use crate::domain::bow::Bow;
use crate::domain::foundation::{BowId, DomainError, ErrorCode};
use crate::ports::{BowFilter, BowRepository};

#[derive(Debug, Clone, Copy)]
pub struct GetBowQuery {
    pub bow_id: BowId,
}

pub struct GetBowHandler {
    repository: Arc<dyn BowRepository>,
}

impl GetBowHandler {
    pub fn new(repository: Arc<dyn BowRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetBowQuery) -> Result<Bow, DomainError> {
        self.repository
            .find_by_id(query.bow_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::BowNotFound,
                    format!("Bow {} not found", query.bow_id),
                )
            })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListBowsQuery {
    pub filter: BowFilter,
}

pub struct ListBowsHandler {
    repository: Arc<dyn BowRepository>,
}

impl ListBowsHandler {
    pub fn new(repository: Arc<dyn BowRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListBowsQuery) -> Result<Vec<Bow>, DomainError> {
        self.repository.list(&query.filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryBowRepository;
    use crate::domain::foundation::Repository;
    use async_trait::async_trait;

    // Repository whose every call fails, to check error propagation.
    struct FailingBowRepository;

    #[async_trait]
    impl Repository<Bow, BowId> for FailingBowRepository {
        async fn find_by_id(&self, _id: BowId) -> Result<Option<Bow>, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "Simulated failure"))
        }

        async fn save(&self, _bow: &Bow) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "Simulated failure"))
        }

        async fn update(&self, _bow: &Bow) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "Simulated failure"))
        }

        async fn delete(&self, _id: BowId) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "Simulated failure"))
        }
    }

    #[async_trait]
    impl BowRepository for FailingBowRepository {
        async fn list(&self, _filter: &BowFilter) -> Result<Vec<Bow>, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "Simulated failure"))
        }
    }

    #[tokio::test]
    async fn get_unknown_bow_is_not_found() {
        let handler = GetBowHandler::new(Arc::new(InMemoryBowRepository::new()));
        let err = handler
            .handle(GetBowQuery { bow_id: BowId::new() })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BowNotFound);
    }

    #[tokio::test]
    async fn storage_failures_propagate() {
        let get = GetBowHandler::new(Arc::new(FailingBowRepository));
        let list = ListBowsHandler::new(Arc::new(FailingBowRepository));

        let err = get.handle(GetBowQuery { bow_id: BowId::new() }).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);

        let err = list.handle(ListBowsQuery::default()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
