//! HTTP adapter for cost estimation.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    price_target, EstimateCostRequest, EstimateResponse, LaborRequest, RecipeEstimateParams,
    RecipeEstimateResponse, UsageRequest,
};
pub use handlers::EstimateHandlers;
pub use routes::estimate_routes;
