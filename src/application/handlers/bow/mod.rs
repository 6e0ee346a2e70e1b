//! Bow command and query handlers.

mod create_bow;
mod delete_bow;
mod get_bow;
mod update_bow;

pub use create_bow::{CreateBowCommand, CreateBowHandler};
pub use delete_bow::{DeleteBowCommand, DeleteBowHandler};
pub use get_bow::{GetBowHandler, GetBowQuery, ListBowsHandler, ListBowsQuery};
pub use update_bow::{UpdateBowCommand, UpdateBowHandler};
