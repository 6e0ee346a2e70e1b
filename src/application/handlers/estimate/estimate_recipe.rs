//! EstimateRecipeHandler - prices a stored recipe from current inventory.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, RecipeId};
use crate::domain::pricing::{
    MaterialAggregator, MaterialSummary, PriceTarget, PricingEngine, PricingInput, PricingResult,
};
use crate::ports::{RecipeRepository, RibbonRepository};

use super::{UsageInput, UsageResolver};

#[derive(Debug, Clone)]
pub struct EstimateRecipeQuery {
    pub recipe_id: RecipeId,
    /// Pricing is only computed when a target is given.
    pub target: Option<PriceTarget>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeEstimate {
    pub recipe_id: RecipeId,
    pub materials: MaterialSummary,
    pub pricing: Option<PricingResult>,
}

pub struct EstimateRecipeHandler {
    recipes: Arc<dyn RecipeRepository>,
    resolver: UsageResolver,
}

impl EstimateRecipeHandler {
    pub fn new(recipes: Arc<dyn RecipeRepository>, ribbons: Arc<dyn RibbonRepository>) -> Self {
        Self {
            recipes,
            resolver: UsageResolver::new(ribbons),
        }
    }

    /// # Errors
    ///
    /// - `RecipeNotFound` if the recipe does not exist
    /// - `RibbonNotFound` if a layer references a ribbon no longer in inventory
    pub async fn handle(&self, query: EstimateRecipeQuery) -> Result<RecipeEstimate, DomainError> {
        let recipe = self
            .recipes
            .find_by_id(query.recipe_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::RecipeNotFound,
                    format!("Recipe {} not found", query.recipe_id),
                )
            })?;

        // Layer names are kept; prices always come from inventory.
        let inputs = recipe
            .layers()
            .iter()
            .map(|layer| UsageInput {
                ribbon_id: layer.ribbon_id,
                name: Some(layer.name.clone()),
                cost_per_inch: None,
                segments: layer.segments.clone(),
            })
            .collect();
        let usages = self.resolver.resolve(inputs).await?;
        let materials = MaterialAggregator::aggregate(&usages)?;

        let pricing = query
            .target
            .map(|target| {
                PricingEngine::price(&PricingInput {
                    material_cost: materials.total_cost,
                    labor: None,
                    target,
                })
            })
            .transpose()?;

        Ok(RecipeEstimate {
            recipe_id: query.recipe_id,
            materials,
            pricing,
        })
    }
}
