//! HTTP handlers for ribbon inventory endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::common::{parse_id, SuccessResponse};
use crate::adapters::http::error::ApiError;
use crate::application::handlers::ribbon::{
    CreateRibbonCommand, CreateRibbonHandler, DeleteRibbonCommand, DeleteRibbonHandler,
    GetRibbonHandler, GetRibbonQuery, ListRibbonsHandler, ListRibbonsQuery, UpdateRibbonCommand,
    UpdateRibbonHandler,
};
use crate::domain::foundation::RibbonId;
use crate::ports::RibbonRepository;

use super::dto::{CreateRibbonRequest, ListRibbonsParams, RibbonResponse, UpdateRibbonRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler State
// ════════════════════════════════════════════════════════════════════════════

/// Application handlers needed by the ribbon routes.
#[derive(Clone)]
pub struct RibbonHandlers {
    pub create_ribbon: Arc<CreateRibbonHandler>,
    pub update_ribbon: Arc<UpdateRibbonHandler>,
    pub delete_ribbon: Arc<DeleteRibbonHandler>,
    pub get_ribbon: Arc<GetRibbonHandler>,
    pub list_ribbons: Arc<ListRibbonsHandler>,
}

impl RibbonHandlers {
    pub fn new(repository: Arc<dyn RibbonRepository>) -> Self {
        Self {
            create_ribbon: Arc::new(CreateRibbonHandler::new(repository.clone())),
            update_ribbon: Arc::new(UpdateRibbonHandler::new(repository.clone())),
            delete_ribbon: Arc::new(DeleteRibbonHandler::new(repository.clone())),
            get_ribbon: Arc::new(GetRibbonHandler::new(repository.clone())),
            list_ribbons: Arc::new(ListRibbonsHandler::new(repository)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Query Handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/ribbons
pub async fn list_ribbons(
    State(handlers): State<RibbonHandlers>,
    Query(params): Query<ListRibbonsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListRibbonsQuery {
        filter: params.into(),
    };
    let ribbons = handlers.list_ribbons.handle(query).await?;
    let body: Vec<RibbonResponse> = ribbons.iter().map(RibbonResponse::from).collect();
    Ok(Json(body))
}

/// GET /api/ribbons/:id
pub async fn get_ribbon(
    State(handlers): State<RibbonHandlers>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let ribbon_id: RibbonId = parse_id(&id, "ribbon")?;
    let ribbon = handlers.get_ribbon.handle(GetRibbonQuery { ribbon_id }).await?;
    Ok(Json(RibbonResponse::from(&ribbon)))
}

// ════════════════════════════════════════════════════════════════════════════
// Command Handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/ribbons
pub async fn create_ribbon(
    State(handlers): State<RibbonHandlers>,
    Json(req): Json<CreateRibbonRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CreateRibbonCommand { draft: req.into() };
    let ribbon = handlers.create_ribbon.handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(RibbonResponse::from(&ribbon))))
}

/// PUT /api/ribbons/:id
pub async fn update_ribbon(
    State(handlers): State<RibbonHandlers>,
    Path(id): Path<String>,
    Json(req): Json<UpdateRibbonRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let ribbon_id: RibbonId = parse_id(&id, "ribbon")?;
    let (expected_version, changes) = req.into_parts();
    let cmd = UpdateRibbonCommand {
        ribbon_id,
        expected_version,
        changes,
    };
    let ribbon = handlers.update_ribbon.handle(cmd).await?;
    Ok(Json(RibbonResponse::from(&ribbon)))
}

/// DELETE /api/ribbons/:id
pub async fn delete_ribbon(
    State(handlers): State<RibbonHandlers>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let ribbon_id: RibbonId = parse_id(&id, "ribbon")?;
    handlers
        .delete_ribbon
        .handle(DeleteRibbonCommand { ribbon_id })
        .await?;
    Ok(Json(SuccessResponse::ok()))
}
