//! Sales queries: listing and totals.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::sale::{Sale, SalesSummary};
use crate::ports::{SaleFilter, SaleRepository};

#[derive(Debug, Clone, Copy, Default)]
pub struct ListSalesQuery {
    pub filter: SaleFilter,
}

pub struct ListSalesHandler {
    repository: Arc<dyn SaleRepository>,
}

impl ListSalesHandler {
    pub fn new(repository: Arc<dyn SaleRepository>) -> Self {
        Self { repository }
    }

    /// Newest first.
    pub async fn handle(&self, query: ListSalesQuery) -> Result<Vec<Sale>, DomainError> {
        self.repository.list(&query.filter).await
    }
}

pub struct SalesSummaryHandler {
    repository: Arc<dyn SaleRepository>,
}

impl SalesSummaryHandler {
    pub fn new(repository: Arc<dyn SaleRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListSalesQuery) -> Result<SalesSummary, DomainError> {
        let sales = self.repository.list(&query.filter).await?;
        Ok(SalesSummary::of(&sales)?)
    }
}
