//! PricingEngine - price, profit, margin and status tier for a bow.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Money, ValidationError};

/// Margin (percent) at or above which a bow is `excellent`.
pub const EXCELLENT_MARGIN: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Margin (percent) at or above which a bow is `good`.
pub const GOOD_MARGIN: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Profitability tier of a bow. Wire values are lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfitStatus {
    Excellent,
    Good,
    Low,
}

impl ProfitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfitStatus::Excellent => "excellent",
            ProfitStatus::Good => "good",
            ProfitStatus::Low => "low",
        }
    }
}

impl fmt::Display for ProfitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfitStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "excellent" => Ok(ProfitStatus::Excellent),
            "good" => Ok(ProfitStatus::Good),
            "low" => Ok(ProfitStatus::Low),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown status '{}'", other),
            )),
        }
    }
}

/// Time spent making a bow, billed at an hourly rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaborAssumption {
    pub minutes: Decimal,
    pub hourly_rate: Money,
}

impl LaborAssumption {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.minutes.is_sign_negative() && !self.minutes.is_zero() {
            return Err(ValidationError::negative("laborMinutes", self.minutes));
        }
        if self.hourly_rate.is_negative() {
            return Err(ValidationError::negative(
                "hourlyRate",
                self.hourly_rate.amount(),
            ));
        }
        Ok(())
    }

    /// Labor cost rounded to the cent.
    pub fn cost(&self) -> Result<Money, ValidationError> {
        self.hourly_rate
            .checked_mul(self.minutes / MINUTES_PER_HOUR)
            .map(|cost| cost.rounded())
            .ok_or_else(|| ValidationError::overflow("laborMinutes"))
    }
}

/// How the selling price is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTarget {
    /// The maker names the price.
    Fixed(Money),
    /// The engine suggests a price that reaches this margin (percent).
    Margin(Decimal),
}

/// Inputs to a pricing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingInput {
    pub material_cost: Money,
    pub labor: Option<LaborAssumption>,
    pub target: PriceTarget,
}

/// Output of a pricing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub material_cost: Money,
    pub labor_cost: Money,
    pub total_cost: Money,
    pub target_price: Money,
    pub profit: Money,
    /// Percent of the selling price kept as profit.
    pub profit_margin: Decimal,
    pub status: ProfitStatus,
}

/// Deterministic pricing rules.
pub struct PricingEngine;

impl PricingEngine {
    /// `profit / target_price * 100`, or zero when the price is not positive.
    ///
    /// # Errors
    /// `Overflow` when the ratio leaves the decimal range.
    pub fn margin(total_cost: Money, target_price: Money) -> Result<Decimal, ValidationError> {
        if target_price.amount() <= Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }
        let profit = Self::profit(total_cost, target_price)?;
        profit
            .amount()
            .checked_div(target_price.amount())
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .ok_or_else(|| ValidationError::overflow("profitMargin"))
    }

    fn profit(total_cost: Money, target_price: Money) -> Result<Money, ValidationError> {
        target_price
            .checked_sub(total_cost)
            .ok_or_else(|| ValidationError::overflow("profit"))
    }

    /// Tier with inclusive lower bounds: 50 is excellent, 30 is good.
    pub fn classify(profit_margin: Decimal) -> ProfitStatus {
        if profit_margin >= EXCELLENT_MARGIN {
            ProfitStatus::Excellent
        } else if profit_margin >= GOOD_MARGIN {
            ProfitStatus::Good
        } else {
            ProfitStatus::Low
        }
    }

    /// Profit, margin and status for a known cost and price.
    pub fn evaluate(
        total_cost: Money,
        target_price: Money,
    ) -> Result<(Money, Decimal, ProfitStatus), ValidationError> {
        let profit = Self::profit(total_cost, target_price)?;
        let margin = Self::margin(total_cost, target_price)?;
        Ok((profit, margin, Self::classify(margin)))
    }

    /// Smallest whole-cent price whose margin is at least `desired_margin`.
    ///
    /// # Errors
    /// `desired_margin` must lie in `[0, 100)` and the price must not
    /// exceed `MAX_AMOUNT`.
    pub fn suggest_price(total_cost: Money, desired_margin: Decimal) -> Result<Money, ValidationError> {
        if desired_margin < Decimal::ZERO || desired_margin >= Decimal::ONE_HUNDRED {
            return Err(ValidationError::out_of_range(
                "desiredMargin",
                0,
                "100 (exclusive)",
                desired_margin,
            ));
        }
        let keep = Decimal::ONE - desired_margin / Decimal::ONE_HUNDRED;
        let exact = total_cost
            .amount()
            .checked_div(keep)
            .ok_or_else(|| ValidationError::overflow("targetPrice"))?;
        Money::bounded(
            "targetPrice",
            exact.round_dp_with_strategy(2, RoundingStrategy::AwayFromZero),
        )
    }

    /// Runs the full pricing computation.
    pub fn price(input: &PricingInput) -> Result<PricingResult, ValidationError> {
        if input.material_cost.is_negative() {
            return Err(ValidationError::negative(
                "materialCost",
                input.material_cost.amount(),
            ));
        }

        let labor_cost = match &input.labor {
            Some(labor) => {
                labor.validate()?;
                labor.cost()?
            }
            None => Money::ZERO,
        };
        let total_cost = input
            .material_cost
            .checked_add(labor_cost)
            .ok_or_else(|| ValidationError::overflow("totalCost"))?;
        let total_cost = Money::bounded("totalCost", total_cost.amount())?;

        let target_price = match input.target {
            PriceTarget::Fixed(price) => Money::price("targetPrice", price.amount())?,
            PriceTarget::Margin(margin) => Self::suggest_price(total_cost, margin)?,
        };

        let (profit, profit_margin, status) = Self::evaluate(total_cost, target_price)?;

        Ok(PricingResult {
            material_cost: input.material_cost,
            labor_cost,
            total_cost,
            target_price,
            profit,
            profit_margin,
            status,
        })
    }
}
