//! HTTP adapter for recipe endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ListRecipesParams, RecipeRequest, RecipeResponse};
pub use handlers::RecipeHandlers;
pub use routes::recipe_routes;
