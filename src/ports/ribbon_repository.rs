//! Ribbon repository port.
//!
//! Inventory listing supports free-text search, availability and a
//! low-stock flag. Results are ordered by name.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Repository, RibbonId};
use crate::domain::ribbon::{Availability, Ribbon};

/// Listing filter for ribbons. Empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RibbonFilter {
    /// Case-insensitive text search.
    pub q: Option<String>,
    pub availability: Option<Availability>,
    /// Only ribbons with `in_stock <= min_stock`.
    pub low_stock: bool,
}

impl RibbonFilter {
    pub fn matches(&self, ribbon: &Ribbon) -> bool {
        if let Some(q) = self.q.as_deref().filter(|q| !q.is_empty()) {
            if !ribbon.matches_text(q) {
                return false;
            }
        }
        if let Some(availability) = self.availability {
            if ribbon.availability() != availability {
                return false;
            }
        }
        !self.low_stock || ribbon.is_low_stock()
    }
}

/// Repository port for ribbon inventory.
///
/// `update` is conditional on the stored version; see `Repository`.
#[async_trait]
pub trait RibbonRepository: Repository<Ribbon, RibbonId> {
    /// List ribbons matching the filter, ordered by name.
    async fn list(&self, filter: &RibbonFilter) -> Result<Vec<Ribbon>, DomainError>;
}
