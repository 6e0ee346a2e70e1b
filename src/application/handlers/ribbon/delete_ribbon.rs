//! DeleteRibbonHandler - removes a ribbon from inventory.
//!
//! Bows and recipes keep their copies of the ribbon's name and cost.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, RibbonId};
use crate::ports::RibbonRepository;

#[derive(Debug, Clone, Copy)]
pub struct DeleteRibbonCommand {
    pub ribbon_id: RibbonId,
}

pub struct DeleteRibbonHandler {
    repository: Arc<dyn RibbonRepository>,
}

impl DeleteRibbonHandler {
    pub fn new(repository: Arc<dyn RibbonRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteRibbonCommand) -> Result<(), DomainError> {
        self.repository.delete(cmd.ribbon_id).await?;
        tracing::info!(ribbon_id = %cmd.ribbon_id, "ribbon deleted");
        Ok(())
    }
}
