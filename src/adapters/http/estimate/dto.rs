//! HTTP DTOs for cost estimation.
//!
//! `UsageRequest`, `LaborRequest` and `price_target` are shared with the
//! bow creation endpoint, which accepts the same wizard fields.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::handlers::estimate::{
    CostEstimate, EstimateCostCommand, LaborInput, RecipeEstimate, UsageInput,
};
use crate::domain::foundation::{DomainError, Money, RibbonId};
use crate::domain::pricing::{MaterialSummary, PriceTarget, PricingResult, Segments};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One ribbon selection. `name` and `costPerInch` fall back to inventory.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRequest {
    pub ribbon_id: RibbonId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cost_per_inch: Option<Money>,
    #[serde(flatten)]
    pub segments: Segments,
}

impl From<UsageRequest> for UsageInput {
    fn from(req: UsageRequest) -> Self {
        Self {
            ribbon_id: req.ribbon_id,
            name: req.name,
            cost_per_inch: req.cost_per_inch,
            segments: req.segments,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaborRequest {
    pub minutes: Decimal,
    #[serde(default)]
    pub hourly_rate: Option<Money>,
}

impl From<LaborRequest> for LaborInput {
    fn from(req: LaborRequest) -> Self {
        Self {
            minutes: req.minutes,
            hourly_rate: req.hourly_rate,
        }
    }
}

/// Request to price a prospective bow.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateCostRequest {
    #[serde(default)]
    pub usages: Vec<UsageRequest>,
    #[serde(default)]
    pub target_price: Option<Money>,
    #[serde(default)]
    pub desired_margin: Option<Decimal>,
    #[serde(default)]
    pub labor: Option<LaborRequest>,
}

impl EstimateCostRequest {
    pub fn into_command(self) -> Result<EstimateCostCommand, DomainError> {
        let target = price_target(self.target_price, self.desired_margin)?.ok_or_else(|| {
            DomainError::validation("targetPrice", "Either targetPrice or desiredMargin is required")
        })?;
        Ok(EstimateCostCommand {
            usages: self.usages.into_iter().map(Into::into).collect(),
            target,
            labor: self.labor.map(Into::into),
        })
    }
}

/// Query parameters for pricing a stored recipe.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeEstimateParams {
    #[serde(default)]
    pub target_price: Option<Money>,
    #[serde(default)]
    pub desired_margin: Option<Decimal>,
}

/// Picks the pricing mode from the two mutually exclusive inputs.
///
/// Returns `Ok(None)` when neither is given.
pub fn price_target(
    target_price: Option<Money>,
    desired_margin: Option<Decimal>,
) -> Result<Option<PriceTarget>, DomainError> {
    match (target_price, desired_margin) {
        (Some(_), Some(_)) => Err(DomainError::validation(
            "targetPrice",
            "Provide targetPrice or desiredMargin, not both",
        )),
        (Some(price), None) => Ok(Some(PriceTarget::Fixed(price))),
        (None, Some(margin)) => Ok(Some(PriceTarget::Margin(margin))),
        (None, None) => Ok(None),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    pub materials: MaterialSummary,
    pub pricing: PricingResult,
}

impl From<CostEstimate> for EstimateResponse {
    fn from(estimate: CostEstimate) -> Self {
        Self {
            materials: estimate.materials,
            pricing: estimate.pricing,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeEstimateResponse {
    pub recipe_id: String,
    pub materials: MaterialSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PricingResult>,
}

impl From<RecipeEstimate> for RecipeEstimateResponse {
    fn from(estimate: RecipeEstimate) -> Self {
        Self {
            recipe_id: estimate.recipe_id.to_string(),
            materials: estimate.materials,
            pricing: estimate.pricing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn usage_request_reads_flattened_segments() {
        let json = format!(
            r#"{{
                "ribbonId": "{}",
                "costPerInch": 0.05,
                "loops": [{{"quantity": 2, "length": 12}}],
                "tails": [{{"quantity": 2, "length": 6}}]
            }}"#,
            RibbonId::new()
        );
        let req: UsageRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(req.segments.loops.len(), 1);
        assert_eq!(req.segments.tails.len(), 1);
        assert!(req.segments.streamers.is_empty());
        assert_eq!(req.segments.total_inches().unwrap(), Decimal::from(36));
    }

    #[test]
    fn margin_mode_is_selected_from_desired_margin() {
        let target = price_target(None, Some(Decimal::from(40))).unwrap();
        assert_eq!(target, Some(PriceTarget::Margin(Decimal::from(40))));
    }

    #[test]
    fn both_targets_is_a_validation_error() {
        let err = price_target(Some(Money::ZERO), Some(Decimal::from(40))).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn estimate_without_target_is_rejected() {
        let req: EstimateCostRequest = serde_json::from_str(r#"{"usages": []}"#).unwrap();
        assert_eq!(
            req.into_command().unwrap_err().code,
            ErrorCode::ValidationFailed
        );
    }

    #[test]
    fn labor_rate_is_optional() {
        let req: EstimateCostRequest =
            serde_json::from_str(r#"{"targetPrice": 10, "labor": {"minutes": 30}}"#).unwrap();
        let cmd = req.into_command().unwrap();
        let labor = cmd.labor.unwrap();

        assert_eq!(labor.minutes, Decimal::from(30));
        assert!(labor.hourly_rate.is_none());
    }
}
