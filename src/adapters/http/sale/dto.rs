//! HTTP DTOs for sales endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::sale::RecordSaleCommand;
use crate::domain::foundation::{BowId, Money};
use crate::domain::sale::Sale;

fn one() -> u32 {
    1
}

/// Request to record a sale. `price` defaults to the bow's target price.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSaleRequest {
    pub bow_id: BowId,
    #[serde(default = "one")]
    pub quantity: u32,
    #[serde(default)]
    pub price: Option<Money>,
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<RecordSaleRequest> for RecordSaleCommand {
    fn from(req: RecordSaleRequest) -> Self {
        Self {
            bow_id: req.bow_id,
            quantity: req.quantity,
            price: req.price,
            customer: req.customer,
            notes: req.notes,
        }
    }
}

/// `bowId` is kept raw so a malformed id becomes a 400 naming the bow.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSalesParams {
    #[serde(default)]
    pub bow_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleResponse {
    pub id: String,
    pub bow_id: String,
    pub quantity: u32,
    pub price: Money,
    pub total: Money,
    pub customer: Option<String>,
    pub notes: Option<String>,
    pub sold_at: String,
}

impl From<&Sale> for SaleResponse {
    fn from(sale: &Sale) -> Self {
        Self {
            id: sale.id().to_string(),
            bow_id: sale.bow_id().to_string(),
            quantity: sale.quantity(),
            price: sale.price(),
            total: sale.total(),
            customer: sale.customer().map(str::to_string),
            notes: sale.notes().map(str::to_string),
            sold_at: sale.sold_at().as_datetime().to_rfc3339(),
        }
    }
}
