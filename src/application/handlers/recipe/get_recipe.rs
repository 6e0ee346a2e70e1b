//! Recipe queries.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, RecipeId};
use crate::domain::recipe::Recipe;
use crate::ports::{RecipeFilter, RecipeRepository};

#[derive(Debug, Clone, Copy)]
pub struct GetRecipeQuery {
    pub recipe_id: RecipeId,
}

pub struct GetRecipeHandler {
    repository: Arc<dyn RecipeRepository>,
}

impl GetRecipeHandler {
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetRecipeQuery) -> Result<Recipe, DomainError> {
        self.repository
            .find_by_id(query.recipe_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::RecipeNotFound,
                    format!("Recipe {} not found", query.recipe_id),
                )
            })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListRecipesQuery {
    pub filter: RecipeFilter,
}

pub struct ListRecipesHandler {
    repository: Arc<dyn RecipeRepository>,
}

impl ListRecipesHandler {
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListRecipesQuery) -> Result<Vec<Recipe>, DomainError> {
        self.repository.list(&query.filter).await
    }
}
