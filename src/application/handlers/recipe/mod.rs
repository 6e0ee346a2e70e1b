//! Recipe command and query handlers.

mod create_recipe;
mod delete_recipe;
mod get_recipe;
mod update_recipe;

pub use create_recipe::{CreateRecipeCommand, CreateRecipeHandler};
pub use delete_recipe::{DeleteRecipeCommand, DeleteRecipeHandler};
pub use get_recipe::{GetRecipeHandler, GetRecipeQuery, ListRecipesHandler, ListRecipesQuery};
pub use update_recipe::{UpdateRecipeCommand, UpdateRecipeHandler};
