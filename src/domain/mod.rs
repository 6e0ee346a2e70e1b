//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `pricing` - Pure cost and price computation (segment cost, aggregation, margins)
//! - `ribbon` - Ribbon inventory aggregate
//! - `bow` - Priced bow products and the wizard record assembler
//! - `recipe` - Reusable bow designs
//! - `sale` - Append-only sales ledger

pub mod bow;
pub mod foundation;
pub mod pricing;
pub mod recipe;
pub mod ribbon;
pub mod sale;
