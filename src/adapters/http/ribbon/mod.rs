//! HTTP adapter for ribbon inventory.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateRibbonRequest, ListRibbonsParams, RibbonResponse, UpdateRibbonRequest};
pub use handlers::RibbonHandlers;
pub use routes::ribbon_routes;
