//! Base repository trait for persistence operations.
//!
//! This module provides the generic `Repository<T, ID>` trait that defines
//! the standard CRUD interface for all aggregate repositories.
//!
//! Each aggregate repository (ribbons, bows, recipes, sales) extends this
//! trait with its own filtered listing query.
//!
//! ```ignore
//! #[async_trait]
//! pub trait BowRepository: Repository<Bow, BowId> {
//!     async fn list(&self, filter: &BowFilter) -> Result<Vec<Bow>, DomainError>;
//! }
//! ```

use async_trait::async_trait;
use std::fmt::Debug;

use super::DomainError;

/// CRUD shared by the ribbon, bow, recipe and sale stores.
///
/// `T` is the aggregate, `ID` its identifier (`BowId`, `RibbonId`, ...).
/// Storage failures surface as `DatabaseError`; a missing row on
/// `update`/`delete` is the aggregate's `*NotFound` code.
#[async_trait]
pub trait Repository<T, ID>: Send + Sync
where
    T: Send + Sync,
    ID: Send + Sync + Debug + 'static,
{
    /// Finds an aggregate by its unique identifier.
    ///
    /// Returns `Ok(None)` if the aggregate doesn't exist.
    /// Returns `Err` only for infrastructure failures.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, DomainError>;

    /// Persists a new aggregate.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The aggregate already exists (duplicate ID)
    /// - Infrastructure failure (database unavailable)
    async fn save(&self, entity: &T) -> Result<(), DomainError>;

    /// Updates an existing aggregate.
    ///
    /// Versioned aggregates are written only when the stored version is
    /// exactly one behind the entity's version.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The aggregate doesn't exist
    /// - Optimistic locking conflict (`VersionConflict`)
    /// - Infrastructure failure
    async fn update(&self, entity: &T) -> Result<(), DomainError>;

    /// Deletes an aggregate by its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The aggregate doesn't exist
    /// - Referential integrity violation
    /// - Infrastructure failure
    async fn delete(&self, id: ID) -> Result<(), DomainError>;

    /// Checks if an aggregate with the given ID exists.
    ///
    /// Default implementation uses `find_by_id`. Override if a more
    /// efficient existence check is available (e.g., COUNT query).
    async fn exists(&self, id: ID) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
