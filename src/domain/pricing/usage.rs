//! Ribbon usage - how much of one ribbon a bow consumes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, RibbonId, ValidationError};

/// A run of identical cuts: `quantity` pieces of `length` inches each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub quantity: u32,
    /// Length of one piece in inches.
    pub length: Decimal,
}

impl Segment {
    pub fn new(quantity: u32, length: Decimal) -> Self {
        Self { quantity, length }
    }

    /// Total inches consumed by this run, `None` on overflow.
    pub fn inches(&self) -> Option<Decimal> {
        Decimal::from(self.quantity).checked_mul(self.length)
    }
}

/// Loops, tails and streamers cut from one ribbon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segments {
    #[serde(default)]
    pub loops: Vec<Segment>,
    #[serde(default)]
    pub tails: Vec<Segment>,
    #[serde(default)]
    pub streamers: Vec<Segment>,
}

impl Segments {
    fn all(&self) -> impl Iterator<Item = (&'static str, &Segment)> {
        self.loops
            .iter()
            .map(|s| ("loops", s))
            .chain(self.tails.iter().map(|s| ("tails", s)))
            .chain(self.streamers.iter().map(|s| ("streamers", s)))
    }

    /// Rejects negative lengths. Zero quantities and lengths are allowed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (kind, segment) in self.all() {
            if segment.length.is_sign_negative() && !segment.length.is_zero() {
                return Err(ValidationError::negative(
                    format!("{}.length", kind),
                    segment.length,
                ));
            }
        }
        Ok(())
    }

    pub fn total_inches(&self) -> Result<Decimal, ValidationError> {
        self.all().try_fold(Decimal::ZERO, |total, (kind, segment)| {
            segment
                .inches()
                .and_then(|inches| total.checked_add(inches))
                .ok_or_else(|| ValidationError::overflow(format!("{}.length", kind)))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.loops.is_empty() && self.tails.is_empty() && self.streamers.is_empty()
    }

    /// Human-readable amount, e.g. `2 loops, 2 tails (36 in)`.
    pub fn quantity_label(&self) -> Result<String, ValidationError> {
        let count = |segments: &[Segment]| {
            segments
                .iter()
                .map(|s| u64::from(s.quantity))
                .sum::<u64>()
        };

        let parts: Vec<String> = [
            (count(&self.loops), "loop", "loops"),
            (count(&self.tails), "tail", "tails"),
            (count(&self.streamers), "streamer", "streamers"),
        ]
        .into_iter()
        .filter(|(n, _, _)| *n > 0)
        .map(|(n, one, many)| format!("{} {}", n, if n == 1 { one } else { many }))
        .collect();

        let inches = self.total_inches()?.normalize();
        Ok(if parts.is_empty() {
            format!("{} in", inches)
        } else {
            format!("{} ({} in)", parts.join(", "), inches)
        })
    }
}

/// One ribbon as consumed by one bow design, priced per inch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RibbonUsage {
    pub ribbon_id: RibbonId,
    pub name: String,
    pub cost_per_inch: Money,
    #[serde(flatten)]
    pub segments: Segments,
}

impl RibbonUsage {
    pub fn new(
        ribbon_id: RibbonId,
        name: impl Into<String>,
        cost_per_inch: Money,
        segments: Segments,
    ) -> Self {
        Self {
            ribbon_id,
            name: name.into(),
            cost_per_inch,
            segments,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.cost_per_inch.is_negative() {
            return Err(ValidationError::negative(
                "costPerInch",
                self.cost_per_inch.amount(),
            ));
        }
        self.segments.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn label_lists_non_zero_kinds() {
        let segments = Segments {
            loops: vec![Segment::new(2, d("6"))],
            tails: vec![Segment::new(2, d("12"))],
            streamers: vec![],
        };
        assert_eq!(segments.quantity_label().unwrap(), "2 loops, 2 tails (36 in)");
    }

    #[test]
    fn label_uses_singular_for_one() {
        let segments = Segments {
            loops: vec![],
            tails: vec![],
            streamers: vec![Segment::new(1, d("8.5"))],
        };
        assert_eq!(segments.quantity_label().unwrap(), "1 streamer (8.5 in)");
    }

    #[test]
    fn label_for_empty_usage() {
        assert_eq!(Segments::default().quantity_label().unwrap(), "0 in");
    }

    #[test]
    fn label_counts_past_u32() {
        let segments = Segments {
            loops: vec![Segment::new(u32::MAX, d("0")), Segment::new(1, d("0"))],
            tails: vec![],
            streamers: vec![],
        };
        assert_eq!(segments.quantity_label().unwrap(), "4294967296 loops (0 in)");
    }

    #[test]
    fn overflowing_length_is_an_error() {
        let segments = Segments {
            loops: vec![Segment::new(u32::MAX, Decimal::MAX)],
            tails: vec![],
            streamers: vec![],
        };
        let err = segments.total_inches().unwrap_err();
        assert_eq!(err.field(), "loops.length");
    }

    #[test]
    fn negative_length_is_rejected() {
        let segments = Segments {
            loops: vec![],
            tails: vec![Segment::new(2, d("-1"))],
            streamers: vec![],
        };
        let err = segments.validate().unwrap_err();
        assert_eq!(err.field(), "tails.length");
    }

    #[test]
    fn negative_cost_per_inch_is_rejected() {
        let usage = RibbonUsage::new(
            RibbonId::new(),
            "Pink grosgrain",
            "-0.01".parse().unwrap(),
            Segments::default(),
        );
        assert!(usage.validate().is_err());
    }

    #[test]
    fn usage_wire_shape_is_flat() {
        let json = serde_json::json!({
            "ribbonId": "0b6f4a6e-2c1d-4e8a-9f3b-1a2b3c4d5e6f",
            "name": "Pink grosgrain",
            "costPerInch": 0.05,
            "loops": [{"quantity": 2, "length": 6}],
        });
        let usage: RibbonUsage = serde_json::from_value(json).unwrap();
        assert_eq!(usage.segments.loops.len(), 1);
        assert!(usage.segments.tails.is_empty());
    }
}
