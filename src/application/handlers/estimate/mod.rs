//! Cost estimation handlers.

mod estimate_cost;
mod estimate_recipe;
mod usage_resolver;

pub use estimate_cost::{CostEstimate, EstimateCostCommand, EstimateCostHandler};
pub use estimate_recipe::{EstimateRecipeHandler, EstimateRecipeQuery, RecipeEstimate};
pub use usage_resolver::{LaborInput, UsageInput, UsageResolver};
