//! Bow aggregate - an assembled, priced bow product.
//!
//! Pricing fields (`profit`, `profit_margin`, `status`) are always derived
//! from `total_cost` and `target_price` through the `PricingEngine`; they
//! cannot be set directly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    BowId, Difficulty, DomainError, Money, RecipeId, RibbonId, Timestamp, ValidationError,
};
use crate::domain::pricing::{PricingEngine, ProfitStatus};

/// Maximum length for a bow name.
pub const MAX_NAME_LENGTH: usize = 200;

/// One ribbon consumed by a bow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BowMaterial {
    /// Referenced inventory ribbon, if it came from inventory.
    pub ribbon_id: Option<RibbonId>,
    pub name: String,
    /// Display string, e.g. `2 loops, 2 tails (36 in)`.
    pub quantity: String,
    pub cost: Money,
}

/// Input for creating or reconstituting a bow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BowDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub time_to_make: String,
    pub tags: Vec<String>,
    pub layers: u32,
    pub materials: Vec<BowMaterial>,
    pub recipe_id: Option<RecipeId>,
    pub total_cost: Money,
    pub target_price: Money,
}

/// Field-by-field changes for PUT/PATCH. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BowChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub time_to_make: Option<String>,
    pub tags: Option<Vec<String>>,
    pub layers: Option<u32>,
    pub materials: Option<Vec<BowMaterial>>,
    pub recipe_id: Option<Option<RecipeId>>,
    pub total_cost: Option<Money>,
    pub target_price: Option<Money>,
}

impl BowChanges {
    pub fn is_empty(&self) -> bool {
        *self == BowChanges::default()
    }
}

/// Bow aggregate.
///
/// # Invariants
///
/// - `profit = target_price - total_cost`
/// - `profit_margin = profit / target_price * 100`, or 0 when the price is 0
/// - `status` is the tier of `profit_margin`
/// - `tags` has no duplicates or blanks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bow {
    id: BowId,
    details: BowDraft,
    profit: Money,
    profit_margin: Decimal,
    status: ProfitStatus,
    version: i64,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Bow {
    /// Creates a new bow at version 1.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the name is blank, a cost or price is
    ///   negative or too large, or the price is not in whole cents
    pub fn new(id: BowId, draft: BowDraft) -> Result<Self, DomainError> {
        Self::validate(&draft)?;
        let now = Timestamp::now();
        Ok(Self::priced(id, normalize(draft), 1, now, now)?)
    }

    /// Reconstitute a bow from persistence.
    ///
    /// Pricing fields are recomputed rather than trusted.
    pub fn reconstitute(
        id: BowId,
        draft: BowDraft,
        version: i64,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Result<Self, DomainError> {
        Ok(Self::priced(id, draft, version, created_at, updated_at)?)
    }

    fn priced(
        id: BowId,
        details: BowDraft,
        version: i64,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let (profit, profit_margin, status) =
            PricingEngine::evaluate(details.total_cost, details.target_price)?;
        Ok(Self {
            id,
            details,
            profit,
            profit_margin,
            status,
            version,
            created_at,
            updated_at,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &BowId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }

    pub fn description(&self) -> &str {
        &self.details.description
    }

    pub fn category(&self) -> &str {
        &self.details.category
    }

    pub fn difficulty(&self) -> Difficulty {
        self.details.difficulty
    }

    pub fn time_to_make(&self) -> &str {
        &self.details.time_to_make
    }

    pub fn tags(&self) -> &[String] {
        &self.details.tags
    }

    pub fn layers(&self) -> u32 {
        self.details.layers
    }

    pub fn materials(&self) -> &[BowMaterial] {
        &self.details.materials
    }

    pub fn recipe_id(&self) -> Option<&RecipeId> {
        self.details.recipe_id.as_ref()
    }

    pub fn total_cost(&self) -> Money {
        self.details.total_cost
    }

    pub fn target_price(&self) -> Money {
        self.details.target_price
    }

    pub fn profit(&self) -> Money {
        self.profit
    }

    pub fn profit_margin(&self) -> Decimal {
        self.profit_margin
    }

    pub fn status(&self) -> ProfitStatus {
        self.status
    }

    pub fn version(&self) -> i64 {
        self.version
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Case-insensitive match against name, description, category and tags.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        let contains = |s: &str| s.to_lowercase().contains(&needle);
        contains(&self.details.name)
            || contains(&self.details.description)
            || contains(&self.details.category)
            || self.details.tags.iter().any(|t| contains(t))
    }

    /// Snapshot of the stored fields, for persistence adapters.
    pub fn to_draft(&self) -> BowDraft {
        self.details.clone()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies changes, re-prices and bumps the version.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the result violates an invariant; the bow
    ///   is left untouched
    pub fn apply(&mut self, changes: BowChanges) -> Result<(), DomainError> {
        let mut next = self.details.clone();
        if let Some(v) = changes.name {
            next.name = v;
        }
        if let Some(v) = changes.description {
            next.description = v;
        }
        if let Some(v) = changes.category {
            next.category = v;
        }
        if let Some(v) = changes.difficulty {
            next.difficulty = v;
        }
        if let Some(v) = changes.time_to_make {
            next.time_to_make = v;
        }
        if let Some(v) = changes.tags {
            next.tags = v;
        }
        if let Some(v) = changes.layers {
            next.layers = v;
        }
        if let Some(v) = changes.materials {
            next.materials = v;
        }
        if let Some(v) = changes.recipe_id {
            next.recipe_id = v;
        }
        if let Some(v) = changes.total_cost {
            next.total_cost = v;
        }
        if let Some(v) = changes.target_price {
            next.target_price = v;
        }

        Self::validate(&next)?;

        *self = Self::priced(
            self.id,
            normalize(next),
            self.version + 1,
            self.created_at,
            Timestamp::now(),
        )?;
        Ok(())
    }

    fn validate(draft: &BowDraft) -> Result<(), ValidationError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::out_of_range(
                "name",
                1,
                MAX_NAME_LENGTH,
                name.chars().count(),
            ));
        }
        Money::bounded("totalCost", draft.total_cost.amount())?;
        Money::price("targetPrice", draft.target_price.amount())?;
        for material in &draft.materials {
            Money::bounded("materials.cost", material.cost.amount())?;
        }
        Ok(())
    }
}

/// Trims the name and reduces tags to a set, keeping first-seen order.
fn normalize(mut draft: BowDraft) -> BowDraft {
    draft.name = draft.name.trim().to_string();
    let mut tags: Vec<String> = Vec::with_capacity(draft.tags.len());
    for tag in draft.tags {
        let tag = tag.trim().to_string();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    draft.tags = tags;
    draft
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(s: &str) -> Money {
        s.parse().unwrap()
    }

    fn draft() -> BowDraft {
        BowDraft {
            name: "Classic Pink".to_string(),
            description: "Two-loop boutique bow".to_string(),
            category: "Boutique".to_string(),
            difficulty: Difficulty::Easy,
            time_to_make: "10 minutes".to_string(),
            tags: vec!["pink".to_string(), "pink".to_string(), " ".to_string()],
            layers: 1,
            materials: vec![],
            recipe_id: None,
            total_cost: m("2"),
            target_price: m("5"),
        }
    }

    #[test]
    fn new_bow_derives_pricing() {
        let bow = Bow::new(BowId::new(), draft()).unwrap();
        assert_eq!(bow.profit(), m("3"));
        assert_eq!(bow.profit_margin(), "60".parse::<Decimal>().unwrap());
        assert_eq!(bow.status(), ProfitStatus::Excellent);
        assert_eq!(bow.version(), 1);
    }

    #[test]
    fn tags_become_a_set() {
        let bow = Bow::new(BowId::new(), draft()).unwrap();
        assert_eq!(bow.tags(), &["pink".to_string()]);
    }

    #[test]
    fn zero_price_bow_is_low_with_zero_margin() {
        let mut d = draft();
        d.target_price = Money::ZERO;
        let bow = Bow::new(BowId::new(), d).unwrap();
        assert_eq!(bow.profit_margin(), Decimal::ZERO);
        assert_eq!(bow.status(), ProfitStatus::Low);
        assert_eq!(bow.profit(), m("-2"));
    }

    #[test]
    fn changing_price_reprices() {
        let mut bow = Bow::new(BowId::new(), draft()).unwrap();
        bow.apply(BowChanges {
            target_price: Some(m("2.5")),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(bow.profit(), m("0.5"));
        assert_eq!(bow.status(), ProfitStatus::Low);
        assert_eq!(bow.version(), 2);
    }

    #[test]
    fn changing_cost_reprices() {
        let mut bow = Bow::new(BowId::new(), draft()).unwrap();
        bow.apply(BowChanges {
            total_cost: Some(m("3.5")),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(bow.profit_margin(), "30".parse::<Decimal>().unwrap());
        assert_eq!(bow.status(), ProfitStatus::Good);
    }

    #[test]
    fn recipe_link_can_be_cleared() {
        let mut d = draft();
        d.recipe_id = Some(RecipeId::new());
        let mut bow = Bow::new(BowId::new(), d).unwrap();
        bow.apply(BowChanges {
            recipe_id: Some(None),
            ..Default::default()
        })
        .unwrap();
        assert!(bow.recipe_id().is_none());
    }

    #[test]
    fn invalid_change_leaves_bow_untouched() {
        let mut bow = Bow::new(BowId::new(), draft()).unwrap();
        let before = bow.clone();
        assert!(bow
            .apply(BowChanges {
                target_price: Some(m("-1")),
                ..Default::default()
            })
            .is_err());
        assert_eq!(bow, before);
    }

    #[test]
    fn sub_cent_price_is_rejected_on_change() {
        let mut bow = Bow::new(BowId::new(), draft()).unwrap();
        let err = bow
            .apply(BowChanges {
                target_price: Some(m("0.00000000000000000001")),
                total_cost: Some(m("10000000")),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err.details.get("field"), Some(&"targetPrice".to_string()));
        assert_eq!(bow.version(), 1);
    }

    #[test]
    fn cost_above_ceiling_is_rejected() {
        let mut d = draft();
        d.total_cost = m("1000000000.01");
        let err = Bow::new(BowId::new(), d).unwrap_err();
        assert_eq!(err.details.get("field"), Some(&"totalCost".to_string()));
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut d = draft();
        d.name = "  ".to_string();
        assert!(Bow::new(BowId::new(), d).is_err());
    }

    #[test]
    fn text_search_matches_tags() {
        let bow = Bow::new(BowId::new(), draft()).unwrap();
        assert!(bow.matches_text("PINK"));
        assert!(bow.matches_text("boutique"));
        assert!(!bow.matches_text("christmas"));
    }
}
