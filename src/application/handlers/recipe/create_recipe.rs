//! CreateRecipeHandler - stores a new bow design.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, RecipeId};
use crate::domain::recipe::{Recipe, RecipeDraft};
use crate::ports::RecipeRepository;

#[derive(Debug, Clone)]
pub struct CreateRecipeCommand {
    pub draft: RecipeDraft,
}

pub struct CreateRecipeHandler {
    repository: Arc<dyn RecipeRepository>,
}

impl CreateRecipeHandler {
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateRecipeCommand) -> Result<Recipe, DomainError> {
        let recipe = Recipe::new(RecipeId::new(), cmd.draft)?;
        self.repository.save(&recipe).await?;
        tracing::info!(recipe_id = %recipe.id(), layers = recipe.layers().len(), "recipe created");
        Ok(recipe)
    }
}
