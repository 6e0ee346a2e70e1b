//! DeleteBowHandler - removes a bow and its materials.
//!
//! Recorded sales keep their bow reference.

use std::sync::Arc;

use crate::domain::foundation::{BowId, DomainError};
use crate::ports::BowRepository;

#[derive(Debug, Clone, Copy)]
pub struct DeleteBowCommand {
    pub bow_id: BowId,
}

pub struct DeleteBowHandler {
    repository: Arc<dyn BowRepository>,
}

impl DeleteBowHandler {
    pub fn new(repository: Arc<dyn BowRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteBowCommand) -> Result<(), DomainError> {
        self.repository.delete(cmd.bow_id).await?;
        tracing::info!(bow_id = %cmd.bow_id, "bow deleted");
        Ok(())
    }
}
