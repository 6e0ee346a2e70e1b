//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own `dto`/`handlers`/`routes` triple. `router`
//! merges them and adds the cross-cutting layers.

pub mod bow;
pub mod common;
pub mod error;
pub mod estimate;
pub mod nullable;
pub mod recipe;
pub mod ribbon;
pub mod router;
pub mod sale;

pub use common::SuccessResponse;
pub use error::{ApiError, ErrorResponse};
pub use router::{api_router, build_router, Repositories};
