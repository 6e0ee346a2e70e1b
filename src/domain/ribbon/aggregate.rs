//! Ribbon aggregate - one stocked ribbon line.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Availability;
use crate::domain::foundation::{DomainError, Money, RibbonId, Timestamp, ValidationError};

/// Maximum length for a ribbon name.
pub const MAX_NAME_LENGTH: usize = 200;

const INCHES_PER_YARD: Decimal = Decimal::from_parts(36, 0, 0, false, 0);

/// Input for creating or reconstituting a ribbon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RibbonDraft {
    pub name: String,
    pub ribbon_type: String,
    pub material: String,
    /// Width in inches.
    pub width: Decimal,
    /// Roll length in yards.
    pub roll_length: Decimal,
    pub colors: Vec<String>,
    pub pattern: Option<String>,
    pub vendor: Option<String>,
    /// Derived from `in_stock` when absent.
    pub availability: Option<Availability>,
    pub cost_per_yard: Money,
    pub in_stock: u32,
    pub min_stock: u32,
    pub notes: Option<String>,
}

/// Field-by-field changes for an update. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RibbonChanges {
    pub name: Option<String>,
    pub ribbon_type: Option<String>,
    pub material: Option<String>,
    pub width: Option<Decimal>,
    pub roll_length: Option<Decimal>,
    pub colors: Option<Vec<String>>,
    pub pattern: Option<Option<String>>,
    pub vendor: Option<Option<String>>,
    pub availability: Option<Availability>,
    pub cost_per_yard: Option<Money>,
    pub in_stock: Option<u32>,
    pub min_stock: Option<u32>,
    pub notes: Option<Option<String>>,
}

/// Ribbon aggregate.
///
/// # Invariants
///
/// - `name` is 1-200 characters
/// - `width`, `roll_length` and `cost_per_yard` are non-negative
/// - `cost_per_yard` is at most `MAX_AMOUNT`
/// - `version` increases by one on every persisted change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ribbon {
    id: RibbonId,
    details: RibbonDraft,
    availability: Availability,
    version: i64,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Ribbon {
    /// Creates a new ribbon at version 1.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if a field violates an invariant
    pub fn new(id: RibbonId, draft: RibbonDraft) -> Result<Self, DomainError> {
        Self::validate(&draft)?;
        let availability = draft
            .availability
            .unwrap_or_else(|| Availability::from_stock(draft.in_stock));
        let now = Timestamp::now();
        Ok(Self {
            id,
            details: normalize(draft),
            availability,
            version: 1,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a ribbon from persistence (no validation).
    pub fn reconstitute(
        id: RibbonId,
        draft: RibbonDraft,
        version: i64,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        let availability = draft
            .availability
            .unwrap_or_else(|| Availability::from_stock(draft.in_stock));
        Self {
            id,
            details: draft,
            availability,
            version,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &RibbonId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }

    pub fn ribbon_type(&self) -> &str {
        &self.details.ribbon_type
    }

    pub fn material(&self) -> &str {
        &self.details.material
    }

    pub fn width(&self) -> Decimal {
        self.details.width
    }

    pub fn roll_length(&self) -> Decimal {
        self.details.roll_length
    }

    pub fn colors(&self) -> &[String] {
        &self.details.colors
    }

    pub fn pattern(&self) -> Option<&str> {
        self.details.pattern.as_deref()
    }

    pub fn vendor(&self) -> Option<&str> {
        self.details.vendor.as_deref()
    }

    pub fn availability(&self) -> Availability {
        self.availability
    }

    pub fn cost_per_yard(&self) -> Money {
        self.details.cost_per_yard
    }

    /// Per-inch price used by the pricing services.
    pub fn cost_per_inch(&self) -> Money {
        Money::new(self.details.cost_per_yard.amount() / INCHES_PER_YARD)
    }

    pub fn in_stock(&self) -> u32 {
        self.details.in_stock
    }

    pub fn min_stock(&self) -> u32 {
        self.details.min_stock
    }

    pub fn notes(&self) -> Option<&str> {
        self.details.notes.as_deref()
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

    /// At or below the reorder threshold.
    pub fn is_low_stock(&self) -> bool {
        self.details.in_stock <= self.details.min_stock
    }

    /// Case-insensitive match against name, type, material, vendor and colors.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        let contains = |s: &str| s.to_lowercase().contains(&needle);
        contains(&self.details.name)
            || contains(&self.details.ribbon_type)
            || contains(&self.details.material)
            || self.details.vendor.as_deref().is_some_and(contains)
            || self.details.colors.iter().any(|c| contains(c))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies changes and bumps the version.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the result violates an invariant; the ribbon
    ///   is left untouched
    pub fn apply(&mut self, changes: RibbonChanges) -> Result<(), DomainError> {
        let mut next = self.details.clone();
        if let Some(v) = changes.name {
            next.name = v;
        }
        if let Some(v) = changes.ribbon_type {
            next.ribbon_type = v;
        }
        if let Some(v) = changes.material {
            next.material = v;
        }
        if let Some(v) = changes.width {
            next.width = v;
        }
        if let Some(v) = changes.roll_length {
            next.roll_length = v;
        }
        if let Some(v) = changes.colors {
            next.colors = v;
        }
        if let Some(v) = changes.pattern {
            next.pattern = v;
        }
        if let Some(v) = changes.vendor {
            next.vendor = v;
        }
        if let Some(v) = changes.cost_per_yard {
            next.cost_per_yard = v;
        }
        if let Some(v) = changes.in_stock {
            next.in_stock = v;
        }
        if let Some(v) = changes.min_stock {
            next.min_stock = v;
        }
        if let Some(v) = changes.notes {
            next.notes = v;
        }

        Self::validate(&next)?;

        // An explicit availability wins; otherwise a stock change re-derives it.
        if let Some(availability) = changes.availability {
            self.availability = availability;
        } else if changes.in_stock.is_some() {
            self.availability = Availability::from_stock(next.in_stock);
        }
        next.availability = Some(self.availability);

        self.details = normalize(next);
        self.version += 1;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Snapshot of the stored fields, for persistence adapters.
    pub fn to_draft(&self) -> RibbonDraft {
        let mut draft = self.details.clone();
        draft.availability = Some(self.availability);
        draft
    }

    fn validate(draft: &RibbonDraft) -> Result<(), ValidationError> {
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
        if draft.width < Decimal::ZERO {
            return Err(ValidationError::negative("width", draft.width));
        }
        if draft.roll_length < Decimal::ZERO {
            return Err(ValidationError::negative("rollLength", draft.roll_length));
        }
        Money::bounded("costPerYard", draft.cost_per_yard.amount())?;
        Ok(())
    }
}

fn normalize(mut draft: RibbonDraft) -> RibbonDraft {
    draft.name = draft.name.trim().to_string();
    draft.colors = draft
        .colors
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();
    draft
}
