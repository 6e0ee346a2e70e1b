//! UsageResolver - turns request-level ribbon selections into priced usages.
//!
//! A selection may carry its own `cost_per_inch`. When it does not, the
//! referenced inventory ribbon supplies `cost_per_yard / 36`.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::foundation::{DomainError, ErrorCode, Money, RibbonId};
use crate::domain::pricing::{LaborAssumption, RibbonUsage, Segments};
use crate::ports::RibbonRepository;

/// One ribbon selection as submitted by a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageInput {
    pub ribbon_id: RibbonId,
    /// Display name; taken from inventory when absent.
    pub name: Option<String>,
    /// Per-inch price; taken from inventory when absent.
    pub cost_per_inch: Option<Money>,
    pub segments: Segments,
}

/// Labor as submitted; a missing rate falls back to the configured default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaborInput {
    pub minutes: Decimal,
    pub hourly_rate: Option<Money>,
}

impl LaborInput {
    pub fn with_default_rate(self, default_hourly_rate: Money) -> LaborAssumption {
        LaborAssumption {
            minutes: self.minutes,
            hourly_rate: self.hourly_rate.unwrap_or(default_hourly_rate),
        }
    }
}

pub struct UsageResolver {
    ribbons: Arc<dyn RibbonRepository>,
}

impl UsageResolver {
    pub fn new(ribbons: Arc<dyn RibbonRepository>) -> Self {
        Self { ribbons }
    }

    /// Resolves every selection, preserving order.
    ///
    /// # Errors
    ///
    /// - `RibbonNotFound` if a lookup is needed and the ribbon is missing
    /// - `DatabaseError` on repository failure
    pub async fn resolve(&self, inputs: Vec<UsageInput>) -> Result<Vec<RibbonUsage>, DomainError> {
        let mut usages = Vec::with_capacity(inputs.len());
        for input in inputs {
            let usage = match (input.name, input.cost_per_inch) {
                (Some(name), Some(cost_per_inch)) => {
                    RibbonUsage::new(input.ribbon_id, name, cost_per_inch, input.segments)
                }
                (name, cost_per_inch) => {
                    let ribbon = self
                        .ribbons
                        .find_by_id(input.ribbon_id)
                        .await?
                        .ok_or_else(|| {
                            DomainError::new(
                                ErrorCode::RibbonNotFound,
                                format!("Ribbon {} not found", input.ribbon_id),
                            )
                        })?;
                    RibbonUsage::new(
                        input.ribbon_id,
                        name.unwrap_or_else(|| ribbon.name().to_string()),
                        cost_per_inch.unwrap_or_else(|| ribbon.cost_per_inch()),
                        input.segments,
                    )
                }
            };
            usages.push(usage);
        }
        Ok(usages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRibbonRepository;
    use crate::application::handlers::test_support::{loops_and_tails, money, ribbon_draft};
    use crate::domain::foundation::Repository;
    use crate::domain::ribbon::Ribbon;

    async fn resolver_with(ribbon: &Ribbon) -> UsageResolver {
        let repo = InMemoryRibbonRepository::new();
        repo.save(ribbon).await.unwrap();
        UsageResolver::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn missing_cost_comes_from_inventory() {
        let ribbon = Ribbon::new(RibbonId::new(), ribbon_draft("Pink grosgrain")).unwrap();
        let resolver = resolver_with(&ribbon).await;

        let usages = resolver
            .resolve(vec![UsageInput {
                ribbon_id: *ribbon.id(),
                name: None,
                cost_per_inch: None,
                segments: loops_and_tails(),
            }])
            .await
            .unwrap();

        assert_eq!(usages[0].name, "Pink grosgrain");
        assert_eq!(usages[0].cost_per_inch, money("0.05"));
    }

    #[tokio::test]
    async fn explicit_values_skip_lookup() {
        let resolver = UsageResolver::new(Arc::new(InMemoryRibbonRepository::new()));

        let usages = resolver
            .resolve(vec![UsageInput {
                ribbon_id: RibbonId::new(),
                name: Some("Loose satin".to_string()),
                cost_per_inch: Some(money("0.02")),
                segments: loops_and_tails(),
            }])
            .await
            .unwrap();

        assert_eq!(usages[0].cost_per_inch, money("0.02"));
    }

    #[tokio::test]
    async fn unknown_ribbon_is_not_found() {
        let resolver = UsageResolver::new(Arc::new(InMemoryRibbonRepository::new()));

        let err = resolver
            .resolve(vec![UsageInput {
                ribbon_id: RibbonId::new(),
                name: Some("Ghost".to_string()),
                cost_per_inch: None,
                segments: loops_and_tails(),
            }])
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::RibbonNotFound);
    }

    #[test]
    fn labor_falls_back_to_default_rate() {
        let labor = LaborInput {
            minutes: Decimal::from(30),
            hourly_rate: None,
        };
        assert_eq!(labor.with_default_rate(money("12")).cost().unwrap(), money("6"));
    }
}
