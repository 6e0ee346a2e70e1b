//! Bow repository port.

use async_trait::async_trait;

use crate::domain::bow::Bow;
use crate::domain::foundation::{BowId, DomainError, Repository};
use crate::domain::pricing::ProfitStatus;

/// Listing filter for bows. Empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BowFilter {
    pub q: Option<String>,
    /// Case-insensitive category equality.
    pub category: Option<String>,
    pub status: Option<ProfitStatus>,
}

impl BowFilter {
    pub fn matches(&self, bow: &Bow) -> bool {
        if let Some(q) = self.q.as_deref().filter(|q| !q.is_empty()) {
            if !bow.matches_text(q) {
                return false;
            }
        }
        if let Some(category) = self.category.as_deref() {
            if !bow.category().eq_ignore_ascii_case(category) {
                return false;
            }
        }
        self.status.map_or(true, |s| bow.status() == s)
    }
}

/// Repository port for bows. Materials are stored with their bow.
#[async_trait]
pub trait BowRepository: Repository<Bow, BowId> {
    /// List bows matching the filter, newest first.
    async fn list(&self, filter: &BowFilter) -> Result<Vec<Bow>, DomainError>;
}
