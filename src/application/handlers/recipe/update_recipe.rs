//! UpdateRecipeHandler - replaces a recipe's content.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, RecipeId};
use crate::domain::recipe::{Recipe, RecipeDraft};
use crate::ports::RecipeRepository;

#[derive(Debug, Clone)]
pub struct UpdateRecipeCommand {
    pub recipe_id: RecipeId,
    pub draft: RecipeDraft,
}

pub struct UpdateRecipeHandler {
    repository: Arc<dyn RecipeRepository>,
}

impl UpdateRecipeHandler {
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateRecipeCommand) -> Result<Recipe, DomainError> {
        let mut recipe = self
            .repository
            .find_by_id(cmd.recipe_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::RecipeNotFound,
                    format!("Recipe {} not found", cmd.recipe_id),
                )
            })?;

        recipe.replace(cmd.draft)?;
        self.repository.update(&recipe).await?;

        tracing::info!(recipe_id = %recipe.id(), layers = recipe.layers().len(), "recipe updated");
        Ok(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRecipeRepository;
    use crate::application::handlers::test_support::{capture_logs, recipe_draft};
    use crate::domain::foundation::{Difficulty, Repository};

    #[tokio::test]
    async fn replaces_content_in_storage() {
        let repo = Arc::new(InMemoryRecipeRepository::new());
        let recipe = Recipe::new(RecipeId::new(), recipe_draft(vec![])).unwrap();
        repo.save(&recipe).await.unwrap();
        let handler = UpdateRecipeHandler::new(repo.clone());

        let mut draft = recipe_draft(vec![]);
        draft.difficulty = Difficulty::Hard;
        handler
            .handle(UpdateRecipeCommand {
                recipe_id: *recipe.id(),
                draft,
            })
            .await
            .unwrap();

        let stored = repo.find_by_id(*recipe.id()).await.unwrap().unwrap();
        assert_eq!(stored.difficulty(), Difficulty::Hard);
    }

    #[tokio::test]
    async fn successful_update_is_logged() {
        let repo = Arc::new(InMemoryRecipeRepository::new());
        let recipe = Recipe::new(RecipeId::new(), recipe_draft(vec![])).unwrap();
        repo.save(&recipe).await.unwrap();
        let handler = UpdateRecipeHandler::new(repo);
        let (_guard, logs) = capture_logs();

        handler
            .handle(UpdateRecipeCommand {
                recipe_id: *recipe.id(),
                draft: recipe_draft(vec![]),
            })
            .await
            .unwrap();

        assert!(logs.contents().contains("recipe updated"));
    }

    #[tokio::test]
    async fn unknown_recipe_is_not_found() {
        let handler = UpdateRecipeHandler::new(Arc::new(InMemoryRecipeRepository::new()));
        let err = handler
            .handle(UpdateRecipeCommand {
                recipe_id: RecipeId::new(),
                draft: recipe_draft(vec![]),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RecipeNotFound);
    }
}
