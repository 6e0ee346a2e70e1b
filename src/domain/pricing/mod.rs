//! Pricing - cost and price computation for bow designs.
//!
//! Pure, synchronous services used by the bow creation flow and the cost
//! estimator:
//!
//! - `RibbonSegmentCost` - cost of one ribbon usage
//! - `MaterialAggregator` - totals across all ribbon selections
//! - `PricingEngine` - price, profit, margin and status tier

mod aggregator;
mod engine;
mod segment_cost;
mod usage;

pub use aggregator::{MaterialAggregator, MaterialCost, MaterialSummary};
pub use engine::{
    LaborAssumption, PriceTarget, PricingEngine, PricingInput, PricingResult, ProfitStatus,
    EXCELLENT_MARGIN, GOOD_MARGIN,
};
pub use segment_cost::RibbonSegmentCost;
pub use usage::{RibbonUsage, Segment, Segments};
