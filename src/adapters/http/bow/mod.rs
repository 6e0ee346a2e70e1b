//! HTTP adapter for bow endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{BowResponse, CreateBowRequest, ListBowsParams, UpdateBowRequest, VendorInfo};
pub use handlers::BowHandlers;
pub use routes::bow_routes;
