//! Sale repository port.
//!
//! Sales are append-only, so this port does not extend `Repository`:
//! there is no update or delete.

use async_trait::async_trait;

use crate::domain::foundation::{BowId, DomainError, SaleId};
use crate::domain::sale::Sale;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaleFilter {
    pub bow_id: Option<BowId>,
}

impl SaleFilter {
    pub fn matches(&self, sale: &Sale) -> bool {
        self.bow_id.map_or(true, |id| *sale.bow_id() == id)
    }
}

#[async_trait]
pub trait SaleRepository: Send + Sync {
    /// Append a sale.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, sale: &Sale) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: SaleId) -> Result<Option<Sale>, DomainError>;

    /// List sales matching the filter, newest first.
    async fn list(&self, filter: &SaleFilter) -> Result<Vec<Sale>, DomainError>;
}
