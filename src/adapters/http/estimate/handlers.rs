//! HTTP handlers for cost estimation.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::estimate::EstimateCostHandler;
use crate::domain::foundation::Money;
use crate::ports::RibbonRepository;

use super::dto::{EstimateCostRequest, EstimateResponse};

#[derive(Clone)]
pub struct EstimateHandlers {
    pub estimate_cost: Arc<EstimateCostHandler>,
}

impl EstimateHandlers {
    pub fn new(ribbons: Arc<dyn RibbonRepository>, default_hourly_rate: Money) -> Self {
        Self {
            estimate_cost: Arc::new(EstimateCostHandler::new(ribbons, default_hourly_rate)),
        }
    }
}

/// POST /api/estimates
pub async fn estimate_cost(
    State(handlers): State<EstimateHandlers>,
    Json(req): Json<EstimateCostRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = req.into_command()?;
    let estimate = handlers.estimate_cost.handle(cmd).await?;
    Ok(Json(EstimateResponse::from(estimate)))
}
