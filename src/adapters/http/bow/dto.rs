//! HTTP DTOs for bow endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::adapters::http::estimate::{price_target, LaborRequest, UsageRequest};
use crate::adapters::http::nullable;
use crate::application::handlers::bow::CreateBowCommand;
use crate::domain::bow::{Bow, BowChanges, BowMaterial, BowSubmission};
use crate::domain::foundation::{Difficulty, DomainError, Money, RecipeId};
use crate::domain::pricing::ProfitStatus;
use crate::ports::BowFilter;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VendorInfo {
    #[serde(default)]
    pub name: Option<String>,
}

/// Cost wizard payload: the bow's descriptive fields plus the ribbon
/// selections and pricing choice it was computed from.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBowRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub vendor_info: Option<VendorInfo>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub recipe_id: Option<RecipeId>,
    #[serde(default, alias = "materials")]
    pub usages: Vec<UsageRequest>,
    #[serde(default)]
    pub target_price: Option<Money>,
    #[serde(default)]
    pub desired_margin: Option<Decimal>,
    #[serde(default)]
    pub labor: Option<LaborRequest>,
}

impl CreateBowRequest {
    pub fn into_command(self) -> Result<CreateBowCommand, DomainError> {
        let target = price_target(self.target_price, self.desired_margin)?.ok_or_else(|| {
            DomainError::validation("targetPrice", "Either targetPrice or desiredMargin is required")
        })?;
        Ok(CreateBowCommand {
            submission: BowSubmission {
                name: self.name,
                description: self.description,
                vendor_name: self.vendor_info.and_then(|v| v.name),
                primary_color: self.primary_color,
                category: self.category,
                recipe_id: self.recipe_id,
            },
            usages: self.usages.into_iter().map(Into::into).collect(),
            target,
            labor: self.labor.map(Into::into),
        })
    }
}

/// Partial update for PUT and PATCH. Profit fields are always recomputed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBowRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub time_to_make: Option<String>,
    pub tags: Option<Vec<String>>,
    pub layers: Option<u32>,
    pub materials: Option<Vec<BowMaterial>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub recipe_id: Option<Option<RecipeId>>,
    pub total_cost: Option<Money>,
    pub target_price: Option<Money>,
    pub version: Option<i64>,
}

impl UpdateBowRequest {
    pub fn into_parts(self) -> (Option<i64>, BowChanges) {
        let changes = BowChanges {
            name: self.name,
            description: self.description,
            category: self.category,
            difficulty: self.difficulty,
            time_to_make: self.time_to_make,
            tags: self.tags,
            layers: self.layers,
            materials: self.materials,
            recipe_id: self.recipe_id,
            total_cost: self.total_cost,
            target_price: self.target_price,
        };
        (self.version, changes)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBowsParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<ProfitStatus>,
}

impl From<ListBowsParams> for BowFilter {
    fn from(params: ListBowsParams) -> Self {
        Self {
            q: params.q.filter(|q| !q.trim().is_empty()),
            category: params.category.filter(|c| !c.trim().is_empty()),
            status: params.status,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BowResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub total_cost: Money,
    pub target_price: Money,
    pub profit: Money,
    pub profit_margin: Decimal,
    pub status: ProfitStatus,
    pub time_to_make: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub tags: Vec<String>,
    pub layers: u32,
    pub materials: Vec<BowMaterial>,
    pub recipe_id: Option<String>,
    pub version: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Bow> for BowResponse {
    fn from(bow: &Bow) -> Self {
        Self {
            id: bow.id().to_string(),
            name: bow.name().to_string(),
            description: bow.description().to_string(),
            total_cost: bow.total_cost(),
            target_price: bow.target_price(),
            profit: bow.profit(),
            profit_margin: bow.profit_margin(),
            status: bow.status(),
            time_to_make: bow.time_to_make().to_string(),
            difficulty: bow.difficulty(),
            category: bow.category().to_string(),
            tags: bow.tags().to_vec(),
            layers: bow.layers(),
            materials: bow.materials().to_vec(),
            recipe_id: bow.recipe_id().map(|id| id.to_string()),
            version: bow.version(),
            created_at: bow.created_at().as_datetime().to_rfc3339(),
            updated_at: bow.updated_at().as_datetime().to_rfc3339(),
        }
    }
}
