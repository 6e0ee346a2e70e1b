//! PostgreSQL implementation of RecipeRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::{column, like_pattern};
use crate::domain::foundation::{Difficulty, DomainError, ErrorCode, RecipeId, Repository, Timestamp};
use crate::domain::recipe::{Recipe, RecipeDraft, RecipeLayer};
use crate::ports::{RecipeFilter, RecipeRepository};

const SELECT_RECIPE: &str = r#"
    SELECT id, name, description, category, difficulty, time_to_make, layers,
           instructions, notes, created_at, updated_at
    FROM recipes
"#;

#[derive(Clone)]
pub struct PostgresRecipeRepository {
    pool: PgPool,
}

impl PostgresRecipeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Recipe, RecipeId> for PostgresRecipeRepository {
    async fn find_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_RECIPE))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch recipe", e))?;

        row.as_ref().map(row_to_recipe).transpose()
    }

    async fn save(&self, recipe: &Recipe) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO recipes (
                id, name, description, category, difficulty, time_to_make, layers,
                instructions, notes, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(recipe.id().as_uuid())
        .bind(recipe.name())
        .bind(recipe.description())
        .bind(recipe.category())
        .bind(recipe.difficulty().as_str())
        .bind(recipe.time_to_make())
        .bind(Json(recipe.layers()))
        .bind(recipe.instructions())
        .bind(recipe.notes())
        .bind(recipe.created_at().as_datetime())
        .bind(recipe.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert recipe", e))?;

        Ok(())
    }

    async fn update(&self, recipe: &Recipe) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE recipes SET
                name = $2, description = $3, category = $4, difficulty = $5,
                time_to_make = $6, layers = $7, instructions = $8, notes = $9,
                updated_at = $10
            WHERE id = $1
            "#,
        )
        .bind(recipe.id().as_uuid())
        .bind(recipe.name())
        .bind(recipe.description())
        .bind(recipe.category())
        .bind(recipe.difficulty().as_str())
        .bind(recipe.time_to_make())
        .bind(Json(recipe.layers()))
        .bind(recipe.instructions())
        .bind(recipe.notes())
        .bind(recipe.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update recipe", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::RecipeNotFound,
                format!("Recipe {} not found", recipe.id()),
            ));
        }
        Ok(())
    }

    async fn delete(&self, id: RecipeId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete recipe", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::RecipeNotFound,
                format!("Recipe {} not found", id),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl RecipeRepository for PostgresRecipeRepository {
    async fn list(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>, DomainError> {
        let query = format!(
            r#"{}
            WHERE ($1::text IS NULL
                   OR name ILIKE $1 OR description ILIKE $1 OR category ILIKE $1)
              AND ($2::text IS NULL OR LOWER(category) = LOWER($2))
              AND ($3::text IS NULL OR difficulty = $3)
            ORDER BY created_at DESC
            "#,
            SELECT_RECIPE
        );
        let rows = sqlx::query(&query)
            .bind(like_pattern(filter.q.as_deref()))
            .bind(filter.category.as_deref())
            .bind(filter.difficulty.map(|d| d.as_str()))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list recipes", e))?;

        rows.iter().map(row_to_recipe).collect()
    }
}

fn row_to_recipe(row: &PgRow) -> Result<Recipe, DomainError> {
    let id: Uuid = column(row, "id")?;
    let difficulty: String = column(row, "difficulty")?;
    let difficulty: Difficulty = difficulty
        .parse()
        .map_err(|e| DomainError::database("Invalid stored difficulty", e))?;
    let Json(layers): Json<Vec<RecipeLayer>> = column(row, "layers")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(row, "updated_at")?;

    let draft = RecipeDraft {
        name: column(row, "name")?,
        description: column(row, "description")?,
        category: column(row, "category")?,
        difficulty,
        time_to_make: column(row, "time_to_make")?,
        layers,
        instructions: column(row, "instructions")?,
        notes: column(row, "notes")?,
    };

    Ok(Recipe::reconstitute(
        RecipeId::from_uuid(id),
        draft,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
