//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers validate, mutate and persist; query handlers read.

pub mod handlers;

pub use handlers::bow::{
    CreateBowCommand, CreateBowHandler, DeleteBowCommand, DeleteBowHandler, GetBowHandler,
    GetBowQuery, ListBowsHandler, ListBowsQuery, UpdateBowCommand, UpdateBowHandler,
};
pub use handlers::estimate::{
    CostEstimate, EstimateCostCommand, EstimateCostHandler, EstimateRecipeHandler,
    EstimateRecipeQuery, LaborInput, RecipeEstimate, UsageInput, UsageResolver,
};
pub use handlers::recipe::{
    CreateRecipeCommand, CreateRecipeHandler, DeleteRecipeCommand, DeleteRecipeHandler,
    GetRecipeHandler, GetRecipeQuery, ListRecipesHandler, ListRecipesQuery, UpdateRecipeCommand,
    UpdateRecipeHandler,
};
pub use handlers::ribbon::{
    CreateRibbonCommand, CreateRibbonHandler, DeleteRibbonCommand, DeleteRibbonHandler,
    GetRibbonHandler, GetRibbonQuery, ListRibbonsHandler, ListRibbonsQuery, UpdateRibbonCommand,
    UpdateRibbonHandler,
};
pub use handlers::sale::{
    ListSalesHandler, ListSalesQuery, RecordSaleCommand, RecordSaleHandler, SalesSummaryHandler,
};
