//! Ribbon queries.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, RibbonId};
use crate::domain::ribbon::Ribbon;
use crate::ports::{RibbonFilter, RibbonRepository};

#[derive(Debug, Clone, Copy)]
pub struct GetRibbonQuery {
    pub ribbon_id: RibbonId,
}

pub struct GetRibbonHandler {
    repository: Arc<dyn RibbonRepository>,
}

impl GetRibbonHandler {
    pub fn new(repository: Arc<dyn RibbonRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetRibbonQuery) -> Result<Ribbon, DomainError> {
        self.repository
            .find_by_id(query.ribbon_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::RibbonNotFound,
                    format!("Ribbon {} not found", query.ribbon_id),
                )
            })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListRibbonsQuery {
    pub filter: RibbonFilter,
}

pub struct ListRibbonsHandler {
    repository: Arc<dyn RibbonRepository>,
}

impl ListRibbonsHandler {
    pub fn new(repository: Arc<dyn RibbonRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListRibbonsQuery) -> Result<Vec<Ribbon>, DomainError> {
        self.repository.list(&query.filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRibbonRepository;
    use crate::application::handlers::test_support::ribbon_draft;
    use crate::domain::foundation::Repository;

    #[tokio::test]
    async fn low_stock_listing_includes_ribbons_at_minimum() {
        let repo = Arc::new(InMemoryRibbonRepository::new());
        for (name, in_stock) in [("At minimum", 2), ("Below", 1), ("Plenty", 10)] {
            let mut draft = ribbon_draft(name);
            draft.in_stock = in_stock;
            draft.min_stock = 2;
            repo.save(&Ribbon::new(RibbonId::new(), draft).unwrap())
                .await
                .unwrap();
        }
        let handler = ListRibbonsHandler::new(repo);

        let low = handler
            .handle(ListRibbonsQuery {
                filter: RibbonFilter {
                    low_stock: true,
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        let names: Vec<&str> = low.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["At minimum", "Below"]);
    }

    #[tokio::test]
    async fn get_unknown_ribbon_is_not_found() {
        let handler = GetRibbonHandler::new(Arc::new(InMemoryRibbonRepository::new()));
        let err = handler
            .handle(GetRibbonQuery {
                ribbon_id: RibbonId::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RibbonNotFound);
    }
}
