//! Ribbon inventory command and query handlers.

mod create_ribbon;
mod delete_ribbon;
mod get_ribbon;
mod update_ribbon;

pub use create_ribbon::{CreateRibbonCommand, CreateRibbonHandler};
pub use delete_ribbon::{DeleteRibbonCommand, DeleteRibbonHandler};
pub use get_ribbon::{GetRibbonHandler, GetRibbonQuery, ListRibbonsHandler, ListRibbonsQuery};
pub use update_ribbon::{UpdateRibbonCommand, UpdateRibbonHandler};
