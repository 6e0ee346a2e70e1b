//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresRibbonRepository` - Ribbon inventory
//! - `PostgresBowRepository` - Bows, materials as JSONB
//! - `PostgresRecipeRepository` - Recipes, layers as JSONB
//! - `PostgresSaleRepository` - Append-only sales
//!
//! Queries are built at runtime; filters bind `NULL` for absent criteria.

mod bow_repository;
mod recipe_repository;
mod ribbon_repository;
mod sale_repository;

pub use bow_repository::PostgresBowRepository;
pub use recipe_repository::PostgresRecipeRepository;
pub use ribbon_repository::PostgresRibbonRepository;
pub use sale_repository::PostgresSaleRepository;

use sqlx::postgres::PgRow;
use sqlx::{Decode, PgPool, Postgres, Row, Type};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Embedded migrations from `migrations/`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Reads one column, mapping decode failures to `DatabaseError`.
pub(crate) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: Decode<'r, Postgres> + Type<Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", name), e))
}

/// Converts a stored BIGINT count back to `u32`.
pub(crate) fn count_column(row: &PgRow, name: &str) -> Result<u32, DomainError> {
    let raw: i64 = column(row, name)?;
    u32::try_from(raw).map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Column {} out of range: {}", name, raw),
        )
    })
}

/// `%needle%` for ILIKE, with LIKE metacharacters escaped.
pub(crate) fn like_pattern(q: Option<&str>) -> Option<String> {
    q.map(str::trim).filter(|q| !q.is_empty()).map(|q| {
        let escaped = q
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        format!("%{}%", escaped)
    })
}

/// Tells a missing row from a stale version after a conditional UPDATE
/// touched nothing.
pub(crate) async fn version_failure(
    pool: &PgPool,
    table: &str,
    resource: &str,
    not_found: ErrorCode,
    id: Uuid,
    expected: i64,
) -> DomainError {
    let query = format!("SELECT version FROM {} WHERE id = $1", table);
    match sqlx::query_scalar::<_, i64>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
    {
        Ok(Some(actual)) => DomainError::version_conflict(resource, expected, actual),
        Ok(None) => DomainError::new(not_found, format!("{} {} not found", resource, id)),
        Err(e) => DomainError::database(&format!("Failed to read {} version", resource), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_wraps_and_escapes() {
        assert_eq!(like_pattern(Some("pink")), Some("%pink%".to_string()));
        assert_eq!(like_pattern(Some("50%_off")), Some("%50\\%\\_off%".to_string()));
    }

    #[test]
    fn like_pattern_skips_blank_search() {
        assert_eq!(like_pattern(None), None);
        assert_eq!(like_pattern(Some("   ")), None);
    }
}
