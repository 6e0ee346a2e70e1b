//! CreateBowHandler - the cost wizard's save step.
//!
//! Resolve usages -> aggregate materials -> price -> assemble -> persist.

use std::sync::Arc;

use crate::application::handlers::estimate::{LaborInput, UsageInput, UsageResolver};
use crate::domain::bow::{Bow, BowRecordAssembler, BowSubmission};
use crate::domain::foundation::{BowId, DomainError, ErrorCode, Money, RecipeId};
use crate::domain::pricing::{MaterialAggregator, PriceTarget, PricingEngine, PricingInput};
use crate::ports::{BowRepository, RecipeRepository, RibbonRepository};

#[derive(Debug, Clone)]
pub struct CreateBowCommand {
    pub submission: BowSubmission,
    pub usages: Vec<UsageInput>,
    pub target: PriceTarget,
    pub labor: Option<LaborInput>,
}

pub struct CreateBowHandler {
    bows: Arc<dyn BowRepository>,
    recipes: Arc<dyn RecipeRepository>,
    resolver: UsageResolver,
    default_hourly_rate: Money,
}

impl CreateBowHandler {
    pub fn new(
        bows: Arc<dyn BowRepository>,
        recipes: Arc<dyn RecipeRepository>,
        ribbons: Arc<dyn RibbonRepository>,
        default_hourly_rate: Money,
    ) -> Self {
        Self {
            bows,
            recipes,
            resolver: UsageResolver::new(ribbons),
            default_hourly_rate,
        }
    }

    /// # Errors
    ///
    /// - `RibbonNotFound` if a usage without a cost names an unknown ribbon
    /// - `RecipeNotFound` if the submission links an unknown recipe
    /// - `ValidationFailed` for negative lengths, costs or an invalid margin
    pub async fn handle(&self, cmd: CreateBowCommand) -> Result<Bow, DomainError> {
        if let Some(recipe_id) = cmd.submission.recipe_id {
            ensure_recipe_exists(self.recipes.as_ref(), recipe_id).await?;
        }

        let usages = self.resolver.resolve(cmd.usages).await?;
        let materials = MaterialAggregator::aggregate(&usages)?;
        let pricing = PricingEngine::price(&PricingInput {
            material_cost: materials.total_cost,
            labor: cmd
                .labor
                .map(|l| l.with_default_rate(self.default_hourly_rate)),
            target: cmd.target,
        })?;

        let draft = BowRecordAssembler::assemble(cmd.submission, &materials, &pricing)?;
        let bow = Bow::new(BowId::new(), draft)?;
        self.bows.save(&bow).await?;

        tracing::info!(
            bow_id = %bow.id(),
            total_cost = %bow.total_cost(),
            target_price = %bow.target_price(),
            status = %bow.status(),
            "bow created"
        );
        Ok(bow)
    }
}

pub(super) async fn ensure_recipe_exists(
    recipes: &dyn RecipeRepository,
    recipe_id: RecipeId,
) -> Result<(), DomainError> {
    if recipes.exists(recipe_id).await? {
        Ok(())
    } else {
        Err(DomainError::new(
            ErrorCode::RecipeNotFound,
            format!("Recipe {} not found", recipe_id),
        ))
    }
}
