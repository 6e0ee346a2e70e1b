//! Command and query handlers, grouped by aggregate.

pub mod bow;
pub mod estimate;
pub mod recipe;
pub mod ribbon;
pub mod sale;

#[cfg(test)]
pub(crate) mod test_support;
