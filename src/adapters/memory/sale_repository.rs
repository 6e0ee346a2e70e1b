//! In-memory sales ledger.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, SaleId};
use crate::domain::sale::Sale;
use crate::ports::{SaleFilter, SaleRepository};

/// Sales kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemorySaleRepository {
    sales: Arc<RwLock<Vec<Sale>>>,
}

impl InMemorySaleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SaleRepository for InMemorySaleRepository {
    async fn save(&self, sale: &Sale) -> Result<(), DomainError> {
        self.sales.write().await.push(sale.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: SaleId) -> Result<Option<Sale>, DomainError> {
        Ok(self
            .sales
            .read()
            .await
            .iter()
            .find(|s| *s.id() == id)
            .cloned())
    }

    async fn list(&self, filter: &SaleFilter) -> Result<Vec<Sale>, DomainError> {
        let sales = self.sales.read().await;
        // Later insertions win ties so equal timestamps still list newest first.
        let mut found: Vec<(usize, Sale)> = sales
            .iter()
            .enumerate()
            .filter(|(_, s)| filter.matches(s))
            .map(|(i, s)| (i, s.clone()))
            .collect();
        found.sort_by_key(|(i, s)| Reverse((*s.sold_at(), *i)));
        Ok(found.into_iter().map(|(_, s)| s).collect())
    }
}
