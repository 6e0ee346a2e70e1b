//! In-memory recipe repository.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, RecipeId, Repository};
use crate::domain::recipe::Recipe;
use crate::ports::{RecipeFilter, RecipeRepository};

#[derive(Debug, Clone, Default)]
pub struct InMemoryRecipeRepository {
    recipes: Arc<RwLock<HashMap<RecipeId, Recipe>>>,
}

impl InMemoryRecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(id: &RecipeId) -> DomainError {
    DomainError::new(ErrorCode::RecipeNotFound, format!("Recipe {} not found", id))
}

#[async_trait]
impl Repository<Recipe, RecipeId> for InMemoryRecipeRepository {
    async fn find_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, DomainError> {
        Ok(self.recipes.read().await.get(&id).cloned())
    }

    async fn save(&self, recipe: &Recipe) -> Result<(), DomainError> {
        self.recipes
            .write()
            .await
            .insert(*recipe.id(), recipe.clone());
        Ok(())
    }

    async fn update(&self, recipe: &Recipe) -> Result<(), DomainError> {
        let mut recipes = self.recipes.write().await;
        if !recipes.contains_key(recipe.id()) {
            return Err(not_found(recipe.id()));
        }
        recipes.insert(*recipe.id(), recipe.clone());
        Ok(())
    }

    async fn delete(&self, id: RecipeId) -> Result<(), DomainError> {
        self.recipes
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(&id))
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn list(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>, DomainError> {
        let mut found: Vec<Recipe> = self
            .recipes
            .read()
            .await
            .values()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        found.sort_by_key(|r| Reverse(*r.created_at()));
        Ok(found)
    }
}
