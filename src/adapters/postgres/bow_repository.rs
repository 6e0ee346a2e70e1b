//! PostgreSQL implementation of BowRepository.
//!
//! Materials are stored as JSONB on the bow row. Derived pricing columns
//! are written for filtering but recomputed on read.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::{column, count_column, like_pattern, version_failure};
use crate::domain::bow::{Bow, BowDraft, BowMaterial};
use crate::domain::foundation::{
    BowId, Difficulty, DomainError, ErrorCode, Money, RecipeId, Repository, Timestamp,
};
use crate::ports::{BowFilter, BowRepository};

const SELECT_BOW: &str = r#"
    SELECT id, name, description, category, difficulty, time_to_make, tags, layers,
           materials, recipe_id, total_cost, target_price, version, created_at, updated_at
    FROM bows
"#;

#[derive(Clone)]
pub struct PostgresBowRepository {
    pool: PgPool,
}

impl PostgresBowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Bow, BowId> for PostgresBowRepository {
    async fn find_by_id(&self, id: BowId) -> Result<Option<Bow>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_BOW))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch bow", e))?;

        row.as_ref().map(row_to_bow).transpose()
    }

    async fn save(&self, bow: &Bow) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO bows (
                id, name, description, category, difficulty, time_to_make, tags, layers,
                materials, recipe_id, total_cost, target_price, profit, profit_margin,
                status, version, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            "#,
        )
        .bind(bow.id().as_uuid())
        .bind(bow.name())
        .bind(bow.description())
        .bind(bow.category())
        .bind(bow.difficulty().as_str())
        .bind(bow.time_to_make())
        .bind(bow.tags())
        .bind(i64::from(bow.layers()))
        .bind(Json(bow.materials()))
        .bind(bow.recipe_id().map(|id| *id.as_uuid()))
        .bind(bow.total_cost().amount())
        .bind(bow.target_price().amount())
        .bind(bow.profit().amount())
        .bind(bow.profit_margin())
        .bind(bow.status().as_str())
        .bind(bow.version())
        .bind(bow.created_at().as_datetime())
        .bind(bow.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert bow", e))?;

        Ok(())
    }

    async fn update(&self, bow: &Bow) -> Result<(), DomainError> {
        let expected = bow.version() - 1;
        let result = sqlx::query(
            r#"
            UPDATE bows SET
                name = $3, description = $4, category = $5, difficulty = $6,
                time_to_make = $7, tags = $8, layers = $9, materials = $10,
                recipe_id = $11, total_cost = $12, target_price = $13, profit = $14,
                profit_margin = $15, status = $16, version = $17, updated_at = $18
            WHERE id = $1 AND version = $2
            "#,
        )
        .bind(bow.id().as_uuid())
        .bind(expected)
        .bind(bow.name())
        .bind(bow.description())
        .bind(bow.category())
        .bind(bow.difficulty().as_str())
        .bind(bow.time_to_make())
        .bind(bow.tags())
        .bind(i64::from(bow.layers()))
        .bind(Json(bow.materials()))
        .bind(bow.recipe_id().map(|id| *id.as_uuid()))
        .bind(bow.total_cost().amount())
        .bind(bow.target_price().amount())
        .bind(bow.profit().amount())
        .bind(bow.profit_margin())
        .bind(bow.status().as_str())
        .bind(bow.version())
        .bind(bow.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update bow", e))?;

        if result.rows_affected() == 0 {
            return Err(version_failure(
                &self.pool,
                "bows",
                "Bow",
                ErrorCode::BowNotFound,
                *bow.id().as_uuid(),
                expected,
            )
            .await);
        }
        Ok(())
    }

    async fn delete(&self, id: BowId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM bows WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete bow", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::BowNotFound,
                format!("Bow {} not found", id),
            ));
        }
        Ok(())
    }

    async fn exists(&self, id: BowId) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM bows WHERE id = $1)")
            .bind(id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to check bow existence", e))
    }
}

#[async_trait]
impl BowRepository for PostgresBowRepository {
    async fn list(&self, filter: &BowFilter) -> Result<Vec<Bow>, DomainError> {
        let query = format!(
            r#"{}
            WHERE ($1::text IS NULL
                   OR name ILIKE $1 OR description ILIKE $1 OR category ILIKE $1
                   OR array_to_string(tags, ' ') ILIKE $1)
              AND ($2::text IS NULL OR LOWER(category) = LOWER($2))
              AND ($3::text IS NULL OR status = $3)
            ORDER BY created_at DESC
            "#,
            SELECT_BOW
        );
        let rows = sqlx::query(&query)
            .bind(like_pattern(filter.q.as_deref()))
            .bind(filter.category.as_deref())
            .bind(filter.status.map(|s| s.as_str()))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list bows", e))?;

        rows.iter().map(row_to_bow).collect()
    }
}

fn row_to_bow(row: &PgRow) -> Result<Bow, DomainError> {
    let id: Uuid = column(row, "id")?;
    let difficulty: String = column(row, "difficulty")?;
    let difficulty: Difficulty = difficulty
        .parse()
        .map_err(|e| DomainError::database("Invalid stored difficulty", e))?;
    let Json(materials): Json<Vec<BowMaterial>> = column(row, "materials")?;
    let recipe_id: Option<Uuid> = column(row, "recipe_id")?;
    let total_cost: Decimal = column(row, "total_cost")?;
    let target_price: Decimal = column(row, "target_price")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(row, "updated_at")?;

    let draft = BowDraft {
        name: column(row, "name")?,
        description: column(row, "description")?,
        category: column(row, "category")?,
        difficulty,
        time_to_make: column(row, "time_to_make")?,
        tags: column(row, "tags")?,
        layers: count_column(row, "layers")?,
        materials,
        recipe_id: recipe_id.map(RecipeId::from_uuid),
        total_cost: Money::new(total_cost),
        target_price: Money::new(target_price),
    };

    Bow::reconstitute(
        BowId::from_uuid(id),
        draft,
        column(row, "version")?,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    )
}
