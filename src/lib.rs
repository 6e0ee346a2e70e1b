//! Bow Studio - inventory, recipe, pricing and sales backend for a
//! handmade bow business.
//!
//! Layered hexagonally: `domain` holds the aggregates and pricing rules,
//! `ports` the repository traits, `application` the command and query
//! handlers, and `adapters` the PostgreSQL, in-memory and HTTP
//! implementations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
