//! HTTP handlers for sales endpoints.

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::common::parse_id;
use crate::adapters::http::error::ApiError;
use crate::application::handlers::sale::{
    ListSalesHandler, ListSalesQuery, RecordSaleHandler, SalesSummaryHandler,
};
use crate::domain::foundation::BowId;
use crate::ports::{BowRepository, SaleFilter, SaleRepository};

use super::dto::{ListSalesParams, RecordSaleRequest, SaleResponse};

#[derive(Clone)]
pub struct SaleHandlers {
    pub record_sale: Arc<RecordSaleHandler>,
    pub list_sales: Arc<ListSalesHandler>,
    pub sales_summary: Arc<SalesSummaryHandler>,
}

impl SaleHandlers {
    pub fn new(sales: Arc<dyn SaleRepository>, bows: Arc<dyn BowRepository>) -> Self {
        Self {
            record_sale: Arc::new(RecordSaleHandler::new(sales.clone(), bows)),
            list_sales: Arc::new(ListSalesHandler::new(sales.clone())),
            sales_summary: Arc::new(SalesSummaryHandler::new(sales)),
        }
    }
}

fn sales_query(params: ListSalesParams) -> Result<ListSalesQuery, ApiError> {
    let bow_id: Option<BowId> = params
        .bow_id
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| parse_id(&raw, "bow"))
        .transpose()?;
    Ok(ListSalesQuery {
        filter: SaleFilter { bow_id },
    })
}

/// GET /api/sales
pub async fn list_sales(
    State(handlers): State<SaleHandlers>,
    Query(params): Query<ListSalesParams>,
) -> Result<impl IntoResponse, ApiError> {
    let sales = handlers.list_sales.handle(sales_query(params)?).await?;
    let body: Vec<SaleResponse> = sales.iter().map(SaleResponse::from).collect();
    Ok(Json(body))
}

/// GET /api/sales/summary
pub async fn sales_summary(
    State(handlers): State<SaleHandlers>,
    Query(params): Query<ListSalesParams>,
) -> Result<impl IntoResponse, ApiError> {
    let summary = handlers.sales_summary.handle(sales_query(params)?).await?;
    Ok(Json(summary))
}

/// POST /api/sales
pub async fn record_sale(
    State(handlers): State<SaleHandlers>,
    Json(req): Json<RecordSaleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let sale = handlers.record_sale.handle(req.into()).await?;
    Ok((StatusCode::CREATED, Json(SaleResponse::from(&sale))))
}
