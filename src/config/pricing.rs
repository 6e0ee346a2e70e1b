//! Pricing defaults

use rust_decimal::Decimal;
use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::Money;

/// Defaults applied by the estimate and bow-creation handlers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PricingConfig {
    /// Hourly labor rate used when a request gives minutes but no rate.
    #[serde(default)]
    pub default_hourly_rate: Decimal,
}

impl PricingConfig {
    pub fn default_hourly_rate(&self) -> Money {
        Money::new(self.default_hourly_rate)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_hourly_rate.is_sign_negative() && !self.default_hourly_rate.is_zero() {
            return Err(ValidationError::NegativeHourlyRate);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rate_is_zero() {
        assert!(PricingConfig::default().default_hourly_rate().is_zero());
    }

    #[test]
    fn negative_rate_is_rejected() {
        let config = PricingConfig {
            default_hourly_rate: Decimal::from(-5),
        };
        assert_eq!(config.validate(), Err(ValidationError::NegativeHourlyRate));
    }
}
