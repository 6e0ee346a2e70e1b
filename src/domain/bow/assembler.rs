//! BowRecordAssembler - turns cost-wizard output into a storable bow.
//!
//! The wizard collects vendor name and primary color as separate inputs,
//! but the bow record has no columns for them: they are folded into the
//! free-text description. Reading a bow back returns that text unchanged.

use crate::domain::foundation::{Difficulty, RecipeId, ValidationError};
use crate::domain::pricing::{MaterialSummary, PricingResult};

use super::{BowDraft, BowMaterial};

/// Time-to-make recorded for every wizard-created bow.
pub const DEFAULT_TIME_TO_MAKE: &str = "15 minutes";

/// Difficulty recorded for every wizard-created bow.
pub const DEFAULT_DIFFICULTY: Difficulty = Difficulty::Medium;

/// Category used when the wizard does not name one.
pub const DEFAULT_CATEGORY: &str = "Custom";

/// Tags attached to every wizard-created bow.
pub const CALCULATED_TAGS: [&str; 2] = ["custom", "calculated"];

const UNKNOWN: &str = "Unknown";

/// Raw wizard data that is not pricing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BowSubmission {
    pub name: String,
    pub description: String,
    pub vendor_name: Option<String>,
    pub primary_color: Option<String>,
    pub category: Option<String>,
    pub recipe_id: Option<RecipeId>,
}

/// Maps wizard output into the persisted bow shape.
pub struct BowRecordAssembler;

impl BowRecordAssembler {
    /// # Errors
    /// More ribbon selections than a `u32` layer count can hold.
    pub fn assemble(
        submission: BowSubmission,
        materials: &MaterialSummary,
        pricing: &PricingResult,
    ) -> Result<BowDraft, ValidationError> {
        let layers = layer_count(materials.layer_count())?;

        let description = Self::describe(
            &submission.description,
            submission.vendor_name.as_deref(),
            submission.primary_color.as_deref(),
        );

        let category = submission
            .category
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        Ok(BowDraft {
            name: submission.name,
            description,
            category,
            difficulty: DEFAULT_DIFFICULTY,
            time_to_make: DEFAULT_TIME_TO_MAKE.to_string(),
            tags: CALCULATED_TAGS.iter().map(|t| t.to_string()).collect(),
            layers,
            materials: materials
                .breakdown
                .iter()
                .map(|m| BowMaterial {
                    ribbon_id: Some(m.ribbon_id),
                    name: m.name.clone(),
                    quantity: m.quantity.clone(),
                    cost: m.cost,
                })
                .collect(),
            recipe_id: submission.recipe_id,
            total_cost: pricing.total_cost,
            target_price: pricing.target_price,
        })
    }

    /// `"{original}\n\nVendor: {vendor}\nPrimary Color: {color}"`, with
    /// `Unknown` standing in for missing or blank values.
    pub fn describe(original: &str, vendor_name: Option<&str>, primary_color: Option<&str>) -> String {
        let or_unknown = |v: Option<&str>| {
            v.map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(UNKNOWN)
                .to_string()
        };
        format!(
            "{}\n\nVendor: {}\nPrimary Color: {}",
            original,
            or_unknown(vendor_name),
            or_unknown(primary_color)
        )
    }
}

fn layer_count(selections: usize) -> Result<u32, ValidationError> {
    u32::try_from(selections)
        .map_err(|_| ValidationError::out_of_range("layers", 0, u32::MAX, selections))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Money, RibbonId};
    use crate::domain::pricing::{
        MaterialAggregator, PriceTarget, PricingEngine, PricingInput, RibbonUsage, Segment,
        Segments,
    };
    use rust_decimal::Decimal;

    fn wizard_output() -> (MaterialSummary, PricingResult) {
        let usages = vec![
            RibbonUsage::new(
                RibbonId::new(),
                "Pink grosgrain",
                "0.05".parse().unwrap(),
                Segments {
                    loops: vec![Segment::new(2, Decimal::from(6))],
                    tails: vec![Segment::new(2, Decimal::from(12))],
                    streamers: vec![],
                },
            ),
            RibbonUsage::new(
                RibbonId::new(),
                "White satin",
                "0.02".parse().unwrap(),
                Segments {
                    loops: vec![Segment::new(1, Decimal::from(5))],
                    tails: vec![],
                    streamers: vec![],
                },
            ),
        ];
        let materials = MaterialAggregator::aggregate(&usages).unwrap();
        let pricing = PricingEngine::price(&PricingInput {
            material_cost: materials.total_cost,
            labor: None,
            target: PriceTarget::Fixed("6".parse().unwrap()),
        })
        .unwrap();
        (materials, pricing)
    }

    #[test]
    fn description_embeds_vendor_and_color() {
        let text = BowRecordAssembler::describe("Handmade", Some("Acme"), Some("Pink"));
        assert_eq!(text, "Handmade\n\nVendor: Acme\nPrimary Color: Pink");
    }

    #[test]
    fn missing_vendor_and_color_read_unknown() {
        let text = BowRecordAssembler::describe("Handmade", None, Some("  "));
        assert_eq!(text, "Handmade\n\nVendor: Unknown\nPrimary Color: Unknown");
    }

    #[test]
    fn assembled_record_uses_fixed_defaults() {
        let (materials, pricing) = wizard_output();
        let draft = BowRecordAssembler::assemble(
            BowSubmission {
                name: "Spring Bow".to_string(),
                description: "Handmade".to_string(),
                vendor_name: Some("Acme".to_string()),
                primary_color: Some("Pink".to_string()),
                ..Default::default()
            },
            &materials,
            &pricing,
        )
        .unwrap();

        assert_eq!(draft.description, "Handmade\n\nVendor: Acme\nPrimary Color: Pink");
        assert_eq!(draft.time_to_make, DEFAULT_TIME_TO_MAKE);
        assert_eq!(draft.difficulty, Difficulty::Medium);
        assert_eq!(draft.tags, vec!["custom".to_string(), "calculated".to_string()]);
        assert_eq!(draft.category, "Custom");
        assert_eq!(draft.layers, 2);
    }

    #[test]
    fn materials_follow_breakdown_order_and_costs() {
        let (materials, pricing) = wizard_output();
        let draft = BowRecordAssembler::assemble(BowSubmission::default(), &materials, &pricing).unwrap();

        assert_eq!(draft.materials.len(), 2);
        assert_eq!(draft.materials[0].name, "Pink grosgrain");
        assert_eq!(draft.materials[0].cost, "1.8".parse::<Money>().unwrap());
        assert_eq!(draft.materials[0].quantity, "2 loops, 2 tails (36 in)");
        assert_eq!(draft.materials[1].cost, "0.1".parse::<Money>().unwrap());
        assert_eq!(draft.total_cost, "1.9".parse::<Money>().unwrap());
        assert_eq!(draft.target_price, "6".parse::<Money>().unwrap());
    }

    #[test]
    fn layer_count_converts_without_truncation() {
        assert_eq!(layer_count(3).unwrap(), 3);
        #[cfg(target_pointer_width = "64")]
        assert_eq!(layer_count(usize::MAX).unwrap_err().field(), "layers");
    }
}
