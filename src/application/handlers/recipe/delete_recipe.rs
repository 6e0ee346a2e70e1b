//! DeleteRecipeHandler - removes a recipe. Linked bows lose the link.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, RecipeId};
use crate::ports::RecipeRepository;

#[derive(Debug, Clone, Copy)]
pub struct DeleteRecipeCommand {
    pub recipe_id: RecipeId,
}

pub struct DeleteRecipeHandler {
    repository: Arc<dyn RecipeRepository>,
}

impl DeleteRecipeHandler {
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteRecipeCommand) -> Result<(), DomainError> {
        self.repository.delete(cmd.recipe_id).await?;
        tracing::info!(recipe_id = %cmd.recipe_id, "recipe deleted");
        Ok(())
    }
}
