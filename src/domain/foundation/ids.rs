//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

uuid_id!(
    /// Unique identifier for a ribbon in inventory.
    RibbonId
);

uuid_id!(
    /// Unique identifier for an assembled bow product.
    BowId
);

uuid_id!(
    /// Unique identifier for a reusable bow recipe.
    RecipeId
);

uuid_id!(
    /// Unique identifier for a recorded sale.
    SaleId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(BowId::new(), BowId::new());
    }

    #[test]
    fn id_parses_from_display() {
        let id = RibbonId::new();
        let parsed: RibbonId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn id_rejects_garbage() {
        assert!("not-a-uuid".parse::<RecipeId>().is_err());
    }

    #[test]
    fn id_serializes_as_bare_string() {
        let uuid = Uuid::parse_str("0b6f4a6e-2c1d-4e8a-9f3b-1a2b3c4d5e6f").unwrap();
        let json = serde_json::to_string(&SaleId::from_uuid(uuid)).unwrap();
        assert_eq!(json, "\"0b6f4a6e-2c1d-4e8a-9f3b-1a2b3c4d5e6f\"");
    }
}
