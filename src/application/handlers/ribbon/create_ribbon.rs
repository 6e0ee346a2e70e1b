//! CreateRibbonHandler - adds a ribbon to inventory.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, RibbonId};
use crate::domain::ribbon::{Ribbon, RibbonDraft};
use crate::ports::RibbonRepository;

#[derive(Debug, Clone)]
pub struct CreateRibbonCommand {
    pub draft: RibbonDraft,
}

pub struct CreateRibbonHandler {
    repository: Arc<dyn RibbonRepository>,
}

impl CreateRibbonHandler {
    pub fn new(repository: Arc<dyn RibbonRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateRibbonCommand) -> Result<Ribbon, DomainError> {
        let ribbon = Ribbon::new(RibbonId::new(), cmd.draft)?;
        self.repository.save(&ribbon).await?;
        tracing::info!(ribbon_id = %ribbon.id(), name = ribbon.name(), "ribbon created");
        Ok(ribbon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRibbonRepository;
    use crate::application::handlers::test_support::ribbon_draft;
    use crate::domain::foundation::{ErrorCode, Repository};
    use crate::domain::ribbon::Availability;

    #[tokio::test]
    async fn creates_and_persists_ribbon() {
        let repo = Arc::new(InMemoryRibbonRepository::new());
        let handler = CreateRibbonHandler::new(repo.clone());

        let ribbon = handler
            .handle(CreateRibbonCommand {
                draft: ribbon_draft("Pink grosgrain"),
            })
            .await
            .unwrap();

        assert_eq!(ribbon.version(), 1);
        assert_eq!(ribbon.availability(), Availability::InStock);
        assert_eq!(repo.find_by_id(*ribbon.id()).await.unwrap(), Some(ribbon));
    }

    #[tokio::test]
    async fn invalid_draft_is_not_persisted() {
        let repo = Arc::new(InMemoryRibbonRepository::new());
        let handler = CreateRibbonHandler::new(repo.clone());
        let mut draft = ribbon_draft("Pink grosgrain");
        draft.name = "   ".to_string();

        let err = handler
            .handle(CreateRibbonCommand { draft })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(repo.is_empty().await);
    }
}
