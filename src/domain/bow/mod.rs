//! Bow domain module.
//!
//! A bow is a priced, sellable product. Wizard-created bows go through the
//! `BowRecordAssembler`, which fixes defaults and folds vendor/color into
//! the description.

mod aggregate;
mod assembler;

pub use aggregate::{Bow, BowChanges, BowDraft, BowMaterial, MAX_NAME_LENGTH};
pub use assembler::{
    BowRecordAssembler, BowSubmission, CALCULATED_TAGS, DEFAULT_CATEGORY, DEFAULT_DIFFICULTY,
    DEFAULT_TIME_TO_MAKE,
};
