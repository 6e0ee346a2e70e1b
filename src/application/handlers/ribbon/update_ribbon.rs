//! UpdateRibbonHandler - applies field changes with an optional version check.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, RibbonId};
use crate::domain::ribbon::{Ribbon, RibbonChanges};
use crate::ports::RibbonRepository;

#[derive(Debug, Clone)]
pub struct UpdateRibbonCommand {
    pub ribbon_id: RibbonId,
    /// When set, must equal the stored version.
    pub expected_version: Option<i64>,
    pub changes: RibbonChanges,
}

pub struct UpdateRibbonHandler {
    repository: Arc<dyn RibbonRepository>,
}

impl UpdateRibbonHandler {
    pub fn new(repository: Arc<dyn RibbonRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `RibbonNotFound` if the ribbon does not exist
    /// - `VersionConflict` if `expected_version` is stale, or a concurrent
    ///   write lands between load and store
    /// - `ValidationFailed` if the changes break an invariant
    pub async fn handle(&self, cmd: UpdateRibbonCommand) -> Result<Ribbon, DomainError> {
        let mut ribbon = self
            .repository
            .find_by_id(cmd.ribbon_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::RibbonNotFound,
                    format!("Ribbon {} not found", cmd.ribbon_id),
                )
            })?;

        if let Some(expected) = cmd.expected_version {
            if expected != ribbon.version() {
                return Err(DomainError::version_conflict("Ribbon", expected, ribbon.version()));
            }
        }

        ribbon.apply(cmd.changes)?;
        self.repository.update(&ribbon).await?;

        tracing::info!(ribbon_id = %ribbon.id(), version = ribbon.version(), "ribbon updated");
        Ok(ribbon)
    }
}
