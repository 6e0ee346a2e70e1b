//! Route configuration for sales endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{list_sales, record_sale, sales_summary, SaleHandlers};

/// Creates the sales router.
///
/// Routes:
/// - `GET /api/sales` - List newest first, optionally for one `bowId`
/// - `POST /api/sales` - Record a sale
/// - `GET /api/sales/summary` - Count, units and revenue
pub fn sale_routes(handlers: SaleHandlers) -> Router {
    Router::new()
        .route("/api/sales", get(list_sales).post(record_sale))
        .route("/api/sales/summary", get(sales_summary))
        .with_state(handlers)
}
