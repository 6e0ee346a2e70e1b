//! RibbonSegmentCost - material cost of one ribbon usage.

use rust_decimal::Decimal;

use super::usage::RibbonUsage;
use crate::domain::foundation::{Money, ValidationError};

/// Calculator for the cost of a single ribbon usage.
pub struct RibbonSegmentCost;

impl RibbonSegmentCost {
    /// Computes Σ(quantity × length × costPerInch) over loops, tails and
    /// streamers.
    ///
    /// # Errors
    /// Negative lengths or a negative per-inch cost are rejected, as is a
    /// cost too large to represent.
    pub fn compute(usage: &RibbonUsage) -> Result<Money, ValidationError> {
        usage.validate()?;
        let inches: Decimal = usage.segments.total_inches()?;
        usage
            .cost_per_inch
            .checked_mul(inches)
            .ok_or_else(|| ValidationError::overflow("costPerInch"))
    }
}
