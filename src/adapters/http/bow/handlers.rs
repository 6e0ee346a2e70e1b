//! HTTP handlers for bow endpoints.
//!
//! POST runs the full cost wizard pipeline; PUT and PATCH share the same
//! partial-update semantics and both re-price the bow.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::common::{parse_id, SuccessResponse};
use crate::adapters::http::error::ApiError;
use crate::application::handlers::bow::{
    CreateBowHandler, DeleteBowCommand, DeleteBowHandler, GetBowHandler, GetBowQuery,
    ListBowsHandler, ListBowsQuery, UpdateBowCommand, UpdateBowHandler,
};
use crate::domain::foundation::{BowId, Money};
use crate::ports::{BowRepository, RecipeRepository, RibbonRepository};

use super::dto::{BowResponse, CreateBowRequest, ListBowsParams, UpdateBowRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler State
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct BowHandlers {
    pub create_bow: Arc<CreateBowHandler>,
    pub update_bow: Arc<UpdateBowHandler>,
    pub delete_bow: Arc<DeleteBowHandler>,
    pub get_bow: Arc<GetBowHandler>,
    pub list_bows: Arc<ListBowsHandler>,
}

impl BowHandlers {
    pub fn new(
        bows: Arc<dyn BowRepository>,
        recipes: Arc<dyn RecipeRepository>,
        ribbons: Arc<dyn RibbonRepository>,
        default_hourly_rate: Money,
    ) -> Self {
        Self {
            create_bow: Arc::new(CreateBowHandler::new(
                bows.clone(),
                recipes.clone(),
                ribbons,
                default_hourly_rate,
            )),
            update_bow: Arc::new(UpdateBowHandler::new(bows.clone(), recipes)),
            delete_bow: Arc::new(DeleteBowHandler::new(bows.clone())),
            get_bow: Arc::new(GetBowHandler::new(bows.clone())),
            list_bows: Arc::new(ListBowsHandler::new(bows)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Query Handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/bows
pub async fn list_bows(
    State(handlers): State<BowHandlers>,
    Query(params): Query<ListBowsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let bows = handlers
        .list_bows
        .handle(ListBowsQuery {
            filter: params.into(),
        })
        .await?;
    let body: Vec<BowResponse> = bows.iter().map(BowResponse::from).collect();
    Ok(Json(body))
}

/// GET /api/bows/:id
pub async fn get_bow(
    State(handlers): State<BowHandlers>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let bow_id: BowId = parse_id(&id, "bow")?;
    let bow = handlers.get_bow.handle(GetBowQuery { bow_id }).await?;
    Ok(Json(BowResponse::from(&bow)))
}

// ════════════════════════════════════════════════════════════════════════════
// Command Handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/bows
pub async fn create_bow(
    State(handlers): State<BowHandlers>,
    Json(req): Json<CreateBowRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = req.into_command()?;
    let bow = handlers.create_bow.handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(BowResponse::from(&bow))))
}

/// PUT /api/bows/:id and PATCH /api/bows/:id
pub async fn update_bow(
    State(handlers): State<BowHandlers>,
    Path(id): Path<String>,
    Json(req): Json<UpdateBowRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let bow_id: BowId = parse_id(&id, "bow")?;
    let (expected_version, changes) = req.into_parts();
    let bow = handlers
        .update_bow
        .handle(UpdateBowCommand {
            bow_id,
            expected_version,
            changes,
        })
        .await?;
    Ok(Json(BowResponse::from(&bow)))
}

/// DELETE /api/bows/:id
pub async fn delete_bow(
    State(handlers): State<BowHandlers>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let bow_id: BowId = parse_id(&id, "bow")?;
    handlers.delete_bow.handle(DeleteBowCommand { bow_id }).await?;
    Ok(Json(SuccessResponse::ok()))
}
