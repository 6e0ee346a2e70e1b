//! In-memory adapters.
//!
//! `tokio::sync::RwLock`-guarded maps implementing every repository port.
//! They back the application and router tests.

mod bow_repository;
mod recipe_repository;
mod ribbon_repository;
mod sale_repository;

pub use bow_repository::InMemoryBowRepository;
pub use recipe_repository::InMemoryRecipeRepository;
pub use ribbon_repository::InMemoryRibbonRepository;
pub use sale_repository::InMemorySaleRepository;
