//! UpdateBowHandler - PUT/PATCH on a bow, re-pricing as needed.

use std::sync::Arc;

use super::create_bow::ensure_recipe_exists;
use crate::domain::bow::{Bow, BowChanges};
use crate::domain::foundation::{BowId, DomainError, ErrorCode};
use crate::ports::{BowRepository, RecipeRepository};

#[derive(Debug, Clone)]
pub struct UpdateBowCommand {
    pub bow_id: BowId,
    /// When set, must equal the stored version.
    pub expected_version: Option<i64>,
    pub changes: BowChanges,
}

pub struct UpdateBowHandler {
    bows: Arc<dyn BowRepository>,
    recipes: Arc<dyn RecipeRepository>,
}

impl UpdateBowHandler {
    pub fn new(bows: Arc<dyn BowRepository>, recipes: Arc<dyn RecipeRepository>) -> Self {
        Self { bows, recipes }
    }

    /// # Errors
    ///
    /// - `BowNotFound` if the bow does not exist
    /// - `RecipeNotFound` if the changes link an unknown recipe
    /// - `VersionConflict` on a stale `expected_version` or a lost race
    /// - `ValidationFailed` if the changes break an invariant
    pub async fn handle(&self, cmd: UpdateBowCommand) -> Result<Bow, DomainError> {
        let mut bow = self.bows.find_by_id(cmd.bow_id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::BowNotFound, format!("Bow {} not found", cmd.bow_id))
        })?;

        if let Some(expected) = cmd.expected_version {
            if expected != bow.version() {
                return Err(DomainError::version_conflict("Bow", expected, bow.version()));
            }
        }

        if let Some(Some(recipe_id)) = cmd.changes.recipe_id {
            ensure_recipe_exists(self.recipes.as_ref(), recipe_id).await?;
        }

        bow.apply(cmd.changes)?;
        self.bows.update(&bow).await?;

        tracing::info!(
            bow_id = %bow.id(),
            version = bow.version(),
            target_price = %bow.target_price(),
            status = %bow.status(),
            "bow updated"
        );
        Ok(bow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryBowRepository, InMemoryRecipeRepository};
    use crate::application::handlers::test_support::{capture_logs, money};
    use crate::domain::bow::BowDraft;
    use crate::domain::foundation::{Difficulty, RecipeId, Repository};
    use crate::domain::pricing::ProfitStatus;
    use rust_decimal::Decimal;

    async fn setup() -> (UpdateBowHandler, BowId) {
        let bows = InMemoryBowRepository::new();
        let bow = Bow::new(
            BowId::new(),
            BowDraft {
                name: "Classic".to_string(),
                description: String::new(),
                category: "Boutique".to_string(),
                difficulty: Difficulty::Easy,
                time_to_make: "10 minutes".to_string(),
                tags: vec![],
                layers: 1,
                materials: vec![],
                recipe_id: None,
                total_cost: money("2"),
                target_price: money("5"),
            },
        )
        .unwrap();
        bows.save(&bow).await.unwrap();
        (
            UpdateBowHandler::new(Arc::new(bows), Arc::new(InMemoryRecipeRepository::new())),
            *bow.id(),
        )
    }

    #[tokio::test]
    async fn patching_price_reprices() {
        let (handler, id) = setup().await;

        let bow = handler
            .handle(UpdateBowCommand {
                bow_id: id,
                expected_version: Some(1),
                changes: BowChanges {
                    target_price: Some(money("2.5")),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(bow.profit(), money("0.5"));
        assert_eq!(bow.profit_margin(), Decimal::from(20));
        assert_eq!(bow.status(), ProfitStatus::Low);
        assert_eq!(bow.version(), 2);
    }

    #[tokio::test]
    async fn successful_update_is_logged() {
        let (handler, id) = setup().await;
        let (_guard, logs) = capture_logs();

        handler
            .handle(UpdateBowCommand {
                bow_id: id,
                expected_version: None,
                changes: BowChanges {
                    name: Some("Renamed".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        let output = logs.contents();
        assert!(output.contains("bow updated"), "{}", output);
        assert!(output.contains(&id.to_string()));
    }

    #[tokio::test]
    async fn stale_version_is_a_conflict() {
        let (handler, id) = setup().await;
        let patch = || UpdateBowCommand {
            bow_id: id,
            expected_version: Some(1),
            changes: BowChanges {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        };

        handler.handle(patch()).await.unwrap();
        let err = handler.handle(patch()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::VersionConflict);
    }

    #[tokio::test]
    async fn linking_unknown_recipe_is_not_found() {
        let (handler, id) = setup().await;

        let err = handler
            .handle(UpdateBowCommand {
                bow_id: id,
                expected_version: None,
                changes: BowChanges {
                    recipe_id: Some(Some(RecipeId::new())),
                    ..Default::default()
                },
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::RecipeNotFound);
    }

    #[tokio::test]
    async fn unknown_bow_is_not_found() {
        let (handler, _) = setup().await;

        let err = handler
            .handle(UpdateBowCommand {
                bow_id: BowId::new(),
                expected_version: None,
                changes: BowChanges::default(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::BowNotFound);
    }
}
