//! HTTP DTOs for recipe endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Difficulty;
use crate::domain::recipe::{Recipe, RecipeDraft, RecipeLayer};
use crate::ports::RecipeFilter;

/// Recipe payload for both POST and PUT. PUT replaces the whole recipe.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub time_to_make: Option<String>,
    #[serde(default)]
    pub layers: Vec<RecipeLayer>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<RecipeRequest> for RecipeDraft {
    fn from(req: RecipeRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            category: req.category,
            difficulty: req.difficulty,
            time_to_make: req.time_to_make,
            layers: req.layers,
            instructions: req.instructions,
            notes: req.notes,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListRecipesParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

impl From<ListRecipesParams> for RecipeFilter {
    fn from(params: ListRecipesParams) -> Self {
        Self {
            q: params.q.filter(|q| !q.trim().is_empty()),
            category: params.category.filter(|c| !c.trim().is_empty()),
            difficulty: params.difficulty,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub time_to_make: Option<String>,
    pub layers: Vec<RecipeLayer>,
    pub instructions: Vec<String>,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Recipe> for RecipeResponse {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id().to_string(),
            name: recipe.name().to_string(),
            description: recipe.description().to_string(),
            category: recipe.category().to_string(),
            difficulty: recipe.difficulty(),
            time_to_make: recipe.time_to_make().map(str::to_string),
            layers: recipe.layers().to_vec(),
            instructions: recipe.instructions().to_vec(),
            notes: recipe.notes().map(str::to_string),
            created_at: recipe.created_at().as_datetime().to_rfc3339(),
            updated_at: recipe.updated_at().as_datetime().to_rfc3339(),
        }
    }
}
