use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, RibbonId, ValidationError};
use crate::domain::pricing::{RibbonUsage, Segments};

/// One ribbon layer of a recipe. Layer order is the list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeLayer {
    pub ribbon_id: RibbonId,
    pub name: String,
    #[serde(flatten)]
    pub segments: Segments,
}

impl RecipeLayer {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.segments.validate()
    }

    /// Prices this layer at the given per-inch cost.
    pub fn to_usage(&self, cost_per_inch: Money) -> RibbonUsage {
        RibbonUsage::new(
            self.ribbon_id,
            self.name.clone(),
            cost_per_inch,
            self.segments.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::{RibbonSegmentCost, Segment};
    use rust_decimal::Decimal;

    #[test]
    fn layer_deserializes_flat_segments() {
        let json = r#"{
            "ribbonId": "0b6f4a6e-2c1d-4e8a-9f3b-1a2b3c4d5e6f",
            "name": "Red satin",
            "loops": [{"quantity": 4, "length": 5}],
            "tails": [{"quantity": 2, "length": 8}]
        }"#;
        let layer: RecipeLayer = serde_json::from_str(json).unwrap();
        assert_eq!(layer.segments.loops.len(), 1);
        assert!(layer.segments.streamers.is_empty());
    }

    #[test]
    fn to_usage_carries_segments() {
        let layer = RecipeLayer {
            ribbon_id: RibbonId::new(),
            name: "Red satin".to_string(),
            segments: Segments {
                loops: vec![Segment::new(4, Decimal::from(5))],
                ..Default::default()
            },
        };
        let usage = layer.to_usage("0.1".parse().unwrap());
        assert_eq!(
            RibbonSegmentCost::compute(&usage).unwrap(),
            "2".parse::<Money>().unwrap()
        );
    }
}
