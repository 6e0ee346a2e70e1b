//! Availability of a ribbon in inventory.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "In stock")]
    InStock,
    #[serde(rename = "Out of stock")]
    OutOfStock,
}

impl Availability {
    /// Availability implied by a roll count.
    pub fn from_stock(in_stock: u32) -> Self {
        if in_stock > 0 {
            Availability::InStock
        } else {
            Availability::OutOfStock
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::InStock => "In stock",
            Availability::OutOfStock => "Out of stock",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Availability {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "In stock" => Ok(Availability::InStock),
            "Out of stock" => Ok(Availability::OutOfStock),
            other => Err(ValidationError::invalid_format(
                "availability",
                format!("unknown availability '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_have_spaces() {
        assert_eq!(
            serde_json::to_string(&Availability::OutOfStock).unwrap(),
            "\"Out of stock\""
        );
        let parsed: Availability = serde_json::from_str("\"In stock\"").unwrap();
        assert_eq!(parsed, Availability::InStock);
    }

    #[test]
    fn derives_from_stock_count() {
        assert_eq!(Availability::from_stock(0), Availability::OutOfStock);
        assert_eq!(Availability::from_stock(3), Availability::InStock);
    }

    #[test]
    fn round_trips_through_str() {
        for a in [Availability::InStock, Availability::OutOfStock] {
            assert_eq!(a.as_str().parse::<Availability>().unwrap(), a);
        }
    }
}
