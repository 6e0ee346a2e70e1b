//! Recipe domain module.

mod aggregate;
mod layer;

pub use aggregate::{Recipe, RecipeDraft, MAX_NAME_LENGTH};
pub use layer::RecipeLayer;
