//! MaterialAggregator - totals ribbon costs across a bow design.

use serde::{Deserialize, Serialize};

use super::segment_cost::RibbonSegmentCost;
use super::usage::RibbonUsage;
use crate::domain::foundation::{Money, RibbonId, ValidationError};

/// Cost of one ribbon selection within a design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialCost {
    pub ribbon_id: RibbonId,
    pub name: String,
    /// Display string such as `2 loops, 2 tails (36 in)`.
    pub quantity: String,
    pub cost: Money,
}

/// Totals for a full set of ribbon selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialSummary {
    pub total_cost: Money,
    /// One entry per input usage, in input order.
    pub breakdown: Vec<MaterialCost>,
}

impl MaterialSummary {
    pub fn layer_count(&self) -> usize {
        self.breakdown.len()
    }
}

/// Sums segment costs across ribbon selections.
pub struct MaterialAggregator;

impl MaterialAggregator {
    /// Aggregates usages into a total and an input-ordered breakdown.
    ///
    /// # Edge Cases
    /// - Empty input: zero total, empty breakdown
    /// - Breakdown order follows input order, never cost order
    /// - A total above `MAX_AMOUNT` is rejected
    pub fn aggregate(usages: &[RibbonUsage]) -> Result<MaterialSummary, ValidationError> {
        let breakdown = usages
            .iter()
            .map(|usage| -> Result<MaterialCost, ValidationError> {
                let cost = RibbonSegmentCost::compute(usage)?;
                Ok(MaterialCost {
                    ribbon_id: usage.ribbon_id,
                    name: usage.name.clone(),
                    quantity: usage.segments.quantity_label()?,
                    cost,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let total_cost = breakdown
            .iter()
            .try_fold(Money::ZERO, |total, m| total.checked_add(m.cost))
            .ok_or_else(|| ValidationError::overflow("totalCost"))?;
        let total_cost = Money::bounded("totalCost", total_cost.amount())?;

        Ok(MaterialSummary {
            total_cost,
            breakdown,
        })
    }
}
