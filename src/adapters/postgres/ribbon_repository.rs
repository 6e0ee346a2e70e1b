//! PostgreSQL implementation of RibbonRepository.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use uuid::Uuid;

use super::{column, count_column, like_pattern, version_failure};
use crate::domain::foundation::{DomainError, ErrorCode, Money, Repository, RibbonId, Timestamp};
use crate::domain::ribbon::{Availability, Ribbon, RibbonDraft};
use crate::ports::{RibbonFilter, RibbonRepository};

const SELECT_RIBBON: &str = r#"
    SELECT id, name, ribbon_type, material, width, roll_length, colors, pattern,
           vendor, availability, cost_per_yard, in_stock, min_stock, notes,
           version, created_at, updated_at
    FROM ribbons
"#;

/// PostgreSQL implementation of RibbonRepository.
#[derive(Clone)]
pub struct PostgresRibbonRepository {
    pool: PgPool,
}

impl PostgresRibbonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Ribbon, RibbonId> for PostgresRibbonRepository {
    async fn find_by_id(&self, id: RibbonId) -> Result<Option<Ribbon>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_RIBBON))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch ribbon", e))?;

        row.as_ref().map(row_to_ribbon).transpose()
    }

    async fn save(&self, ribbon: &Ribbon) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO ribbons (
                id, name, ribbon_type, material, width, roll_length, colors, pattern,
                vendor, availability, cost_per_yard, in_stock, min_stock, notes,
                version, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            "#,
        )
        .bind(ribbon.id().as_uuid())
        .bind(ribbon.name())
        .bind(ribbon.ribbon_type())
        .bind(ribbon.material())
        .bind(ribbon.width())
        .bind(ribbon.roll_length())
        .bind(ribbon.colors())
        .bind(ribbon.pattern())
        .bind(ribbon.vendor())
        .bind(ribbon.availability().as_str())
        .bind(ribbon.cost_per_yard().amount())
        .bind(i64::from(ribbon.in_stock()))
        .bind(i64::from(ribbon.min_stock()))
        .bind(ribbon.notes())
        .bind(ribbon.version())
        .bind(ribbon.created_at().as_datetime())
        .bind(ribbon.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert ribbon", e))?;

        Ok(())
    }

    async fn update(&self, ribbon: &Ribbon) -> Result<(), DomainError> {
        let expected = ribbon.version() - 1;
        let result = sqlx::query(
            r#"
            UPDATE ribbons SET
                name = $3, ribbon_type = $4, material = $5, width = $6,
                roll_length = $7, colors = $8, pattern = $9, vendor = $10,
                availability = $11, cost_per_yard = $12, in_stock = $13,
                min_stock = $14, notes = $15, version = $16, updated_at = $17
            WHERE id = $1 AND version = $2
            "#,
        )
        .bind(ribbon.id().as_uuid())
        .bind(expected)
        .bind(ribbon.name())
        .bind(ribbon.ribbon_type())
        .bind(ribbon.material())
        .bind(ribbon.width())
        .bind(ribbon.roll_length())
        .bind(ribbon.colors())
        .bind(ribbon.pattern())
        .bind(ribbon.vendor())
        .bind(ribbon.availability().as_str())
        .bind(ribbon.cost_per_yard().amount())
        .bind(i64::from(ribbon.in_stock()))
        .bind(i64::from(ribbon.min_stock()))
        .bind(ribbon.notes())
        .bind(ribbon.version())
        .bind(ribbon.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update ribbon", e))?;

        if result.rows_affected() == 0 {
            return Err(version_failure(
                &self.pool,
                "ribbons",
                "Ribbon",
                ErrorCode::RibbonNotFound,
                *ribbon.id().as_uuid(),
                expected,
            )
            .await);
        }
        Ok(())
    }

    async fn delete(&self, id: RibbonId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM ribbons WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete ribbon", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::RibbonNotFound,
                format!("Ribbon {} not found", id),
            ));
        }
        Ok(())
    }

    async fn exists(&self, id: RibbonId) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM ribbons WHERE id = $1)")
            .bind(id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to check ribbon existence", e))
    }
}

#[async_trait]
impl RibbonRepository for PostgresRibbonRepository {
    async fn list(&self, filter: &RibbonFilter) -> Result<Vec<Ribbon>, DomainError> {
        let query = format!(
            r#"{}
            WHERE ($1::text IS NULL
                   OR name ILIKE $1 OR ribbon_type ILIKE $1 OR material ILIKE $1
                   OR vendor ILIKE $1 OR array_to_string(colors, ' ') ILIKE $1)
              AND ($2::text IS NULL OR availability = $2)
              AND (NOT $3 OR in_stock <= min_stock)
            ORDER BY LOWER(name)
            "#,
            SELECT_RIBBON
        );
        let rows = sqlx::query(&query)
            .bind(like_pattern(filter.q.as_deref()))
            .bind(filter.availability.map(|a| a.as_str()))
            .bind(filter.low_stock)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list ribbons", e))?;

        rows.iter().map(row_to_ribbon).collect()
    }
}

fn row_to_ribbon(row: &PgRow) -> Result<Ribbon, DomainError> {
    let id: Uuid = column(row, "id")?;
    let availability: String = column(row, "availability")?;
    let availability: Availability = availability
        .parse()
        .map_err(|e| DomainError::database("Invalid stored availability", e))?;
    let cost_per_yard: Decimal = column(row, "cost_per_yard")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(row, "updated_at")?;

    let draft = RibbonDraft {
        name: column(row, "name")?,
        ribbon_type: column(row, "ribbon_type")?,
        material: column(row, "material")?,
        width: column(row, "width")?,
        roll_length: column(row, "roll_length")?,
        colors: column(row, "colors")?,
        pattern: column(row, "pattern")?,
        vendor: column(row, "vendor")?,
        availability: Some(availability),
        cost_per_yard: Money::new(cost_per_yard),
        in_stock: count_column(row, "in_stock")?,
        min_stock: count_column(row, "min_stock")?,
        notes: column(row, "notes")?,
    };

    Ok(Ribbon::reconstitute(
        RibbonId::from_uuid(id),
        draft,
        column(row, "version")?,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
