//! Recipe repository port.

use async_trait::async_trait;

use crate::domain::foundation::{Difficulty, DomainError, RecipeId, Repository};
use crate::domain::recipe::Recipe;

/// Listing filter for recipes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    pub q: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
}

impl RecipeFilter {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(q) = self.q.as_deref().filter(|q| !q.is_empty()) {
            if !recipe.matches_text(q) {
                return false;
            }
        }
        if let Some(category) = self.category.as_deref() {
            if !recipe.category().eq_ignore_ascii_case(category) {
                return false;
            }
        }
        self.difficulty.map_or(true, |d| recipe.difficulty() == d)
    }
}

/// Repository port for recipes. Layers keep their list order.
#[async_trait]
pub trait RecipeRepository: Repository<Recipe, RecipeId> {
    /// List recipes matching the filter, newest first.
    async fn list(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>, DomainError>;
}
