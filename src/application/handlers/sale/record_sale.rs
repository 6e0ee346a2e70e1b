//! RecordSaleHandler - appends a sale for an existing bow.
//!
//! Stock is not decremented.

use std::sync::Arc;

use crate::domain::foundation::{BowId, DomainError, ErrorCode, Money, SaleId};
use crate::domain::sale::{Sale, SaleDraft};
use crate::ports::{BowRepository, SaleRepository};

#[derive(Debug, Clone)]
pub struct RecordSaleCommand {
    pub bow_id: BowId,
    pub quantity: u32,
    /// Unit price; defaults to the bow's target price.
    pub price: Option<Money>,
    pub customer: Option<String>,
    pub notes: Option<String>,
}

pub struct RecordSaleHandler {
    sales: Arc<dyn SaleRepository>,
    bows: Arc<dyn BowRepository>,
}

impl RecordSaleHandler {
    pub fn new(sales: Arc<dyn SaleRepository>, bows: Arc<dyn BowRepository>) -> Self {
        Self { sales, bows }
    }

    /// # Errors
    ///
    /// - `BowNotFound` if the bow does not exist
    /// - `ValidationFailed` for a zero quantity or negative price
    pub async fn handle(&self, cmd: RecordSaleCommand) -> Result<Sale, DomainError> {
        let bow = self.bows.find_by_id(cmd.bow_id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::BowNotFound, format!("Bow {} not found", cmd.bow_id))
        })?;

        let sale = Sale::record(
            SaleId::new(),
            SaleDraft {
                bow_id: cmd.bow_id,
                quantity: cmd.quantity,
                price: cmd.price.unwrap_or_else(|| bow.target_price()),
                customer: cmd.customer,
                notes: cmd.notes,
            },
        )?;
        self.sales.save(&sale).await?;

        tracing::info!(
            sale_id = %sale.id(),
            bow_id = %sale.bow_id(),
            quantity = sale.quantity(),
            total = %sale.total(),
            "sale recorded"
        );
        Ok(sale)
    }
}
