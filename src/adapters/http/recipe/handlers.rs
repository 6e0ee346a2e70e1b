//! HTTP handlers for recipe endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::common::{parse_id, SuccessResponse};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::estimate::{price_target, RecipeEstimateParams, RecipeEstimateResponse};
use crate::application::handlers::estimate::{EstimateRecipeHandler, EstimateRecipeQuery};
use crate::application::handlers::recipe::{
    CreateRecipeCommand, CreateRecipeHandler, DeleteRecipeCommand, DeleteRecipeHandler,
    GetRecipeHandler, GetRecipeQuery, ListRecipesHandler, ListRecipesQuery, UpdateRecipeCommand,
    UpdateRecipeHandler,
};
use crate::domain::foundation::RecipeId;
use crate::ports::{RecipeRepository, RibbonRepository};

use super::dto::{ListRecipesParams, RecipeRequest, RecipeResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler State
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct RecipeHandlers {
    pub create_recipe: Arc<CreateRecipeHandler>,
    pub update_recipe: Arc<UpdateRecipeHandler>,
    pub delete_recipe: Arc<DeleteRecipeHandler>,
    pub get_recipe: Arc<GetRecipeHandler>,
    pub list_recipes: Arc<ListRecipesHandler>,
    pub estimate_recipe: Arc<EstimateRecipeHandler>,
}

impl RecipeHandlers {
    pub fn new(recipes: Arc<dyn RecipeRepository>, ribbons: Arc<dyn RibbonRepository>) -> Self {
        Self {
            create_recipe: Arc::new(CreateRecipeHandler::new(recipes.clone())),
            update_recipe: Arc::new(UpdateRecipeHandler::new(recipes.clone())),
            delete_recipe: Arc::new(DeleteRecipeHandler::new(recipes.clone())),
            get_recipe: Arc::new(GetRecipeHandler::new(recipes.clone())),
            list_recipes: Arc::new(ListRecipesHandler::new(recipes.clone())),
            estimate_recipe: Arc::new(EstimateRecipeHandler::new(recipes, ribbons)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Query Handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/recipes
pub async fn list_recipes(
    State(handlers): State<RecipeHandlers>,
    Query(params): Query<ListRecipesParams>,
) -> Result<impl IntoResponse, ApiError> {
    let recipes = handlers
        .list_recipes
        .handle(ListRecipesQuery {
            filter: params.into(),
        })
        .await?;
    let body: Vec<RecipeResponse> = recipes.iter().map(RecipeResponse::from).collect();
    Ok(Json(body))
}

/// GET /api/recipes/:id
pub async fn get_recipe(
    State(handlers): State<RecipeHandlers>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let recipe_id: RecipeId = parse_id(&id, "recipe")?;
    let recipe = handlers.get_recipe.handle(GetRecipeQuery { recipe_id }).await?;
    Ok(Json(RecipeResponse::from(&recipe)))
}

/// GET /api/recipes/:id/estimate
///
/// Prices every layer from current inventory. `targetPrice` or
/// `desiredMargin` in the query adds a pricing section.
pub async fn estimate_recipe(
    State(handlers): State<RecipeHandlers>,
    Path(id): Path<String>,
    Query(params): Query<RecipeEstimateParams>,
) -> Result<impl IntoResponse, ApiError> {
    let recipe_id: RecipeId = parse_id(&id, "recipe")?;
    let target = price_target(params.target_price, params.desired_margin)?;
    let estimate = handlers
        .estimate_recipe
        .handle(EstimateRecipeQuery { recipe_id, target })
        .await?;
    Ok(Json(RecipeEstimateResponse::from(estimate)))
}

// ════════════════════════════════════════════════════════════════════════════
// Command Handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/recipes
pub async fn create_recipe(
    State(handlers): State<RecipeHandlers>,
    Json(req): Json<RecipeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let recipe = handlers
        .create_recipe
        .handle(CreateRecipeCommand { draft: req.into() })
        .await?;
    Ok((StatusCode::CREATED, Json(RecipeResponse::from(&recipe))))
}

/// PUT /api/recipes/:id
pub async fn update_recipe(
    State(handlers): State<RecipeHandlers>,
    Path(id): Path<String>,
    Json(req): Json<RecipeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let recipe_id: RecipeId = parse_id(&id, "recipe")?;
    let recipe = handlers
        .update_recipe
        .handle(UpdateRecipeCommand {
            recipe_id,
            draft: req.into(),
        })
        .await?;
    Ok(Json(RecipeResponse::from(&recipe)))
}

/// DELETE /api/recipes/:id
pub async fn delete_recipe(
    State(handlers): State<RecipeHandlers>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let recipe_id: RecipeId = parse_id(&id, "recipe")?;
    handlers
        .delete_recipe
        .handle(DeleteRecipeCommand { recipe_id })
        .await?;
    Ok(Json(SuccessResponse::ok()))
}
