//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the bow studio domain.

mod difficulty;
mod errors;
mod ids;
mod money;
mod repository;
mod timestamp;

pub use difficulty::Difficulty;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{BowId, RecipeId, RibbonId, SaleId};
pub use money::{Money, MAX_AMOUNT};
pub use repository::Repository;
pub use timestamp::Timestamp;
