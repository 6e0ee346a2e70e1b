//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Repository Ports
//!
//! - `RibbonRepository` - Ribbon inventory with stock filters
//! - `BowRepository` - Priced bow products
//! - `RecipeRepository` - Reusable bow designs
//! - `SaleRepository` - Append-only sales ledger

mod bow_repository;
mod recipe_repository;
mod ribbon_repository;
mod sale_repository;

pub use bow_repository::{BowFilter, BowRepository};
pub use recipe_repository::{RecipeFilter, RecipeRepository};
pub use ribbon_repository::{RibbonFilter, RibbonRepository};
pub use sale_repository::{SaleFilter, SaleRepository};
