//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - sqlx repositories and embedded migrations
//! - `memory` - in-process repositories for tests and local runs
//! - `http` - axum routers exposing the application handlers

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::{
    InMemoryBowRepository, InMemoryRecipeRepository, InMemoryRibbonRepository,
    InMemorySaleRepository,
};
pub use postgres::{
    PostgresBowRepository, PostgresRecipeRepository, PostgresRibbonRepository,
    PostgresSaleRepository, MIGRATOR,
};
