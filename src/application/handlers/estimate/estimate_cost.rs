//! EstimateCostHandler - prices a prospective bow without storing it.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Money};
use crate::domain::pricing::{
    MaterialAggregator, MaterialSummary, PriceTarget, PricingEngine, PricingInput, PricingResult,
};
use crate::ports::RibbonRepository;

use super::{LaborInput, UsageInput, UsageResolver};

#[derive(Debug, Clone)]
pub struct EstimateCostCommand {
    pub usages: Vec<UsageInput>,
    pub target: PriceTarget,
    pub labor: Option<LaborInput>,
}

/// Material breakdown plus the pricing derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostEstimate {
    pub materials: MaterialSummary,
    pub pricing: PricingResult,
}

pub struct EstimateCostHandler {
    resolver: UsageResolver,
    default_hourly_rate: Money,
}

impl EstimateCostHandler {
    pub fn new(ribbons: Arc<dyn RibbonRepository>, default_hourly_rate: Money) -> Self {
        Self {
            resolver: UsageResolver::new(ribbons),
            default_hourly_rate,
        }
    }

    pub async fn handle(&self, cmd: EstimateCostCommand) -> Result<CostEstimate, DomainError> {
        let usages = self.resolver.resolve(cmd.usages).await?;
        let materials = MaterialAggregator::aggregate(&usages)?;
        let pricing = PricingEngine::price(&PricingInput {
            material_cost: materials.total_cost,
            labor: cmd
                .labor
                .map(|l| l.with_default_rate(self.default_hourly_rate)),
            target: cmd.target,
        })?;

        Ok(CostEstimate { materials, pricing })
    }
}
