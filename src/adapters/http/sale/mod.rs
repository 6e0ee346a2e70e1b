//! HTTP adapter for sales endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ListSalesParams, RecordSaleRequest, SaleResponse};
pub use handlers::SaleHandlers;
pub use routes::sale_routes;
