//! HTTP DTOs for ribbon inventory endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::adapters::http::nullable;
use crate::domain::foundation::Money;
use crate::domain::ribbon::{Availability, Ribbon, RibbonChanges, RibbonDraft};
use crate::ports::RibbonFilter;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to add a ribbon to inventory.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRibbonRequest {
    pub name: String,
    pub ribbon_type: String,
    pub material: String,
    pub width: Decimal,
    pub roll_length: Decimal,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub availability: Option<Availability>,
    pub cost_per_yard: Money,
    #[serde(default)]
    pub in_stock: u32,
    #[serde(default)]
    pub min_stock: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<CreateRibbonRequest> for RibbonDraft {
    fn from(req: CreateRibbonRequest) -> Self {
        Self {
            name: req.name,
            ribbon_type: req.ribbon_type,
            material: req.material,
            width: req.width,
            roll_length: req.roll_length,
            colors: req.colors,
            pattern: req.pattern,
            vendor: req.vendor,
            availability: req.availability,
            cost_per_yard: req.cost_per_yard,
            in_stock: req.in_stock,
            min_stock: req.min_stock,
            notes: req.notes,
        }
    }
}

/// Partial update. `null` clears an optional text field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRibbonRequest {
    pub name: Option<String>,
    pub ribbon_type: Option<String>,
    pub material: Option<String>,
    pub width: Option<Decimal>,
    pub roll_length: Option<Decimal>,
    pub colors: Option<Vec<String>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub pattern: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub vendor: Option<Option<String>>,
    pub availability: Option<Availability>,
    pub cost_per_yard: Option<Money>,
    pub in_stock: Option<u32>,
    pub min_stock: Option<u32>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub notes: Option<Option<String>>,
    /// Version the client last read; a mismatch is rejected.
    pub version: Option<i64>,
}

impl UpdateRibbonRequest {
    pub fn into_parts(self) -> (Option<i64>, RibbonChanges) {
        let changes = RibbonChanges {
            name: self.name,
            ribbon_type: self.ribbon_type,
            material: self.material,
            width: self.width,
            roll_length: self.roll_length,
            colors: self.colors,
            pattern: self.pattern,
            vendor: self.vendor,
            availability: self.availability,
            cost_per_yard: self.cost_per_yard,
            in_stock: self.in_stock,
            min_stock: self.min_stock,
            notes: self.notes,
        };
        (self.version, changes)
    }
}

/// Query parameters for listing ribbons.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRibbonsParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub availability: Option<Availability>,
    #[serde(default)]
    pub low_stock: Option<bool>,
}

impl From<ListRibbonsParams> for RibbonFilter {
    fn from(params: ListRibbonsParams) -> Self {
        Self {
            q: params.q.filter(|q| !q.trim().is_empty()),
            availability: params.availability,
            low_stock: params.low_stock.unwrap_or(false),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RibbonResponse {
    pub id: String,
    pub name: String,
    pub ribbon_type: String,
    pub material: String,
    pub width: Decimal,
    pub roll_length: Decimal,
    pub colors: Vec<String>,
    pub pattern: Option<String>,
    pub vendor: Option<String>,
    pub availability: Availability,
    pub cost_per_yard: Money,
    pub cost_per_inch: Money,
    pub in_stock: u32,
    pub min_stock: u32,
    pub low_stock: bool,
    pub notes: Option<String>,
    pub version: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Ribbon> for RibbonResponse {
    fn from(ribbon: &Ribbon) -> Self {
        Self {
            id: ribbon.id().to_string(),
            name: ribbon.name().to_string(),
            ribbon_type: ribbon.ribbon_type().to_string(),
            material: ribbon.material().to_string(),
            width: ribbon.width(),
            roll_length: ribbon.roll_length(),
            colors: ribbon.colors().to_vec(),
            pattern: ribbon.pattern().map(str::to_string),
            vendor: ribbon.vendor().map(str::to_string),
            availability: ribbon.availability(),
            cost_per_yard: ribbon.cost_per_yard(),
            cost_per_inch: ribbon.cost_per_inch(),
            in_stock: ribbon.in_stock(),
            min_stock: ribbon.min_stock(),
            low_stock: ribbon.is_low_stock(),
            notes: ribbon.notes().map(str::to_string),
            version: ribbon.version(),
            created_at: ribbon.created_at().as_datetime().to_rfc3339(),
            updated_at: ribbon.updated_at().as_datetime().to_rfc3339(),
        }
    }
}
