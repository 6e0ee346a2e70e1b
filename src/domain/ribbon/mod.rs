//! Ribbon domain module.
//!
//! Ribbons are the stocked raw material. Bows and recipes reference them
//! by id but never own them.

mod aggregate;
mod availability;

pub use aggregate::{Ribbon, RibbonChanges, RibbonDraft, MAX_NAME_LENGTH};
pub use availability::Availability;
