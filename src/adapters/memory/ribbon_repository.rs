//! In-memory ribbon repository.
//!
//! Used by tests and for running the server without a database.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, Repository, RibbonId};
use crate::domain::ribbon::Ribbon;
use crate::ports::{RibbonFilter, RibbonRepository};

#[derive(Debug, Clone, Default)]
pub struct InMemoryRibbonRepository {
    ribbons: Arc<RwLock<HashMap<RibbonId, Ribbon>>>,
}

impl InMemoryRibbonRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored ribbons
    pub async fn len(&self) -> usize {
        self.ribbons.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.ribbons.read().await.is_empty()
    }
}

#[async_trait]
impl Repository<Ribbon, RibbonId> for InMemoryRibbonRepository {
    async fn find_by_id(&self, id: RibbonId) -> Result<Option<Ribbon>, DomainError> {
        Ok(self.ribbons.read().await.get(&id).cloned())
    }

    async fn save(&self, ribbon: &Ribbon) -> Result<(), DomainError> {
        let mut ribbons = self.ribbons.write().await;
        if ribbons.contains_key(ribbon.id()) {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                format!("Ribbon {} already exists", ribbon.id()),
            ));
        }
        ribbons.insert(*ribbon.id(), ribbon.clone());
        Ok(())
    }

    async fn update(&self, ribbon: &Ribbon) -> Result<(), DomainError> {
        let mut ribbons = self.ribbons.write().await;
        let stored = ribbons.get(ribbon.id()).ok_or_else(|| {
            DomainError::new(ErrorCode::RibbonNotFound, format!("Ribbon {} not found", ribbon.id()))
        })?;
        let expected = ribbon.version() - 1;
        if stored.version() != expected {
            return Err(DomainError::version_conflict("Ribbon", expected, stored.version()));
        }
        ribbons.insert(*ribbon.id(), ribbon.clone());
        Ok(())
    }

    async fn delete(&self, id: RibbonId) -> Result<(), DomainError> {
        match self.ribbons.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::new(
                ErrorCode::RibbonNotFound,
                format!("Ribbon {} not found", id),
            )),
        }
    }
}

#[async_trait]
impl RibbonRepository for InMemoryRibbonRepository {
    async fn list(&self, filter: &RibbonFilter) -> Result<Vec<Ribbon>, DomainError> {
        let mut found: Vec<Ribbon> = self
            .ribbons
            .read()
            .await
            .values()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        found.sort_by_key(|r| r.name().to_lowercase());
        Ok(found)
    }
}
