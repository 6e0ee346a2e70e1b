//! PostgreSQL implementation of SaleRepository.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use uuid::Uuid;

use super::{column, count_column};
use crate::domain::foundation::{BowId, DomainError, Money, SaleId, Timestamp};
use crate::domain::sale::{Sale, SaleDraft};
use crate::ports::{SaleFilter, SaleRepository};

const SELECT_SALE: &str =
    "SELECT id, bow_id, quantity, price, customer, notes, sold_at FROM sales";

#[derive(Clone)]
pub struct PostgresSaleRepository {
    pool: PgPool,
}

impl PostgresSaleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SaleRepository for PostgresSaleRepository {
    async fn save(&self, sale: &Sale) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO sales (id, bow_id, quantity, price, customer, notes, sold_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(sale.id().as_uuid())
        .bind(sale.bow_id().as_uuid())
        .bind(i64::from(sale.quantity()))
        .bind(sale.price().amount())
        .bind(sale.customer())
        .bind(sale.notes())
        .bind(sale.sold_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert sale", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: SaleId) -> Result<Option<Sale>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_SALE))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch sale", e))?;

        row.as_ref().map(row_to_sale).transpose()
    }

    async fn list(&self, filter: &SaleFilter) -> Result<Vec<Sale>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE ($1::uuid IS NULL OR bow_id = $1) ORDER BY sold_at DESC",
            SELECT_SALE
        ))
        .bind(filter.bow_id.map(|id| *id.as_uuid()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list sales", e))?;

        rows.iter().map(row_to_sale).collect()
    }
}

fn row_to_sale(row: &PgRow) -> Result<Sale, DomainError> {
    let id: Uuid = column(row, "id")?;
    let bow_id: Uuid = column(row, "bow_id")?;
    let price: Decimal = column(row, "price")?;
    let sold_at: chrono::DateTime<chrono::Utc> = column(row, "sold_at")?;

    Sale::reconstitute(
        SaleId::from_uuid(id),
        SaleDraft {
            bow_id: BowId::from_uuid(bow_id),
            quantity: count_column(row, "quantity")?,
            price: Money::new(price),
            customer: column(row, "customer")?,
            notes: column(row, "notes")?,
        },
        Timestamp::from_datetime(sold_at),
    )
}
