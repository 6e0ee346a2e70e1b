//! Recipe aggregate - a reusable bow design.

use crate::domain::foundation::{Difficulty, DomainError, RecipeId, Timestamp, ValidationError};

use super::RecipeLayer;

/// Maximum length for a recipe name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Full recipe content, used for both create and replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub time_to_make: Option<String>,
    pub layers: Vec<RecipeLayer>,
    pub instructions: Vec<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    id: RecipeId,
    details: RecipeDraft,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Recipe {
    /// # Errors
    ///
    /// - `ValidationFailed` for a blank name or a negative segment length
    pub fn new(id: RecipeId, draft: RecipeDraft) -> Result<Self, DomainError> {
        Self::validate(&draft)?;
        let now = Timestamp::now();
        Ok(Self {
            id,
            details: normalize(draft),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn reconstitute(
        id: RecipeId,
        draft: RecipeDraft,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            details: draft,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &RecipeId {
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

    pub fn time_to_make(&self) -> Option<&str> {
        self.details.time_to_make.as_deref()
    }

    pub fn layers(&self) -> &[RecipeLayer] {
        &self.details.layers
    }

    pub fn instructions(&self) -> &[String] {
        &self.details.instructions
    }

    pub fn notes(&self) -> Option<&str> {
        self.details.notes.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn to_draft(&self) -> RecipeDraft {
        self.details.clone()
    }

    /// Case-insensitive match against name, description and category.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [
            &self.details.name,
            &self.details.description,
            &self.details.category,
        ]
        .iter()
        .any(|s| s.to_lowercase().contains(&needle))
    }

    /// Replaces the whole recipe content (PUT semantics).
    pub fn replace(&mut self, draft: RecipeDraft) -> Result<(), DomainError> {
        Self::validate(&draft)?;
        self.details = normalize(draft);
        self.updated_at = Timestamp::now();
        Ok(())
    }

    fn validate(draft: &RecipeDraft) -> Result<(), ValidationError> {
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
        for layer in &draft.layers {
            layer.validate()?;
        }
        Ok(())
    }
}

fn normalize(mut draft: RecipeDraft) -> RecipeDraft {
    draft.name = draft.name.trim().to_string();
    draft.instructions.retain(|step| !step.trim().is_empty());
    draft
}
