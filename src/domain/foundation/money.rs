//! Money value object backed by an exact decimal.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use super::ValidationError;

/// A monetary amount in the shop's single currency.
///
/// Signed: profit can go below zero. Costs and prices are checked for
/// non-negativity where they enter the domain, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

/// Largest cost or price the shop accepts.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount.normalize())
    }

    /// Creates a non-negative amount, naming `field` in the error.
    pub fn non_negative(field: &str, amount: Decimal) -> Result<Self, ValidationError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(ValidationError::negative(field, amount));
        }
        Ok(Self::new(amount))
    }

    /// Creates a non-negative amount no larger than [`MAX_AMOUNT`].
    pub fn bounded(field: &str, amount: Decimal) -> Result<Self, ValidationError> {
        let money = Self::non_negative(field, amount)?;
        if money.0 > MAX_AMOUNT {
            return Err(ValidationError::out_of_range(field, 0, MAX_AMOUNT, amount));
        }
        Ok(money)
    }

    /// Creates a selling price: bounded and in whole cents.
    pub fn price(field: &str, amount: Decimal) -> Result<Self, ValidationError> {
        let money = Self::bounded(field, amount)?;
        if money.0.scale() > 2 {
            return Err(ValidationError::invalid_format(
                field,
                format!("{} is not a whole number of cents", amount),
            ));
        }
        Ok(money)
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money::new)
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money::new)
    }

    pub fn checked_mul(self, rhs: Decimal) -> Option<Money> {
        self.0.checked_mul(rhs).map(Money::new)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Rounded to cents, banker's rounding off.
    pub fn rounded(&self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .map(Self::new)
            .map_err(|e| ValidationError::invalid_format("money", e.to_string()))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::new(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money::new(self.0 - rhs.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, rhs: Decimal) -> Money {
        Money::new(self.0 * rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.rounded().0;
        if rounded < Decimal::ZERO {
            write!(f, "-${:.2}", rounded.abs())
        } else {
            write!(f, "${:.2}", rounded)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(s: &str) -> Money {
        s.parse().unwrap()
    }

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn arithmetic_is_exact() {
        let cost = m("0.05") * Decimal::from(36);
        assert_eq!(cost, m("1.8"));
        assert_eq!(m("0.1") + m("0.2"), m("0.3"));
    }

    #[test]
    fn equality_ignores_trailing_zeros() {
        assert_eq!(m("1.80"), m("1.8"));
    }

    #[test]
    fn sum_of_empty_is_zero() {
        let total: Money = Vec::<Money>::new().into_iter().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn non_negative_rejects_negative() {
        assert!(Money::non_negative("price", Decimal::from(-1)).is_err());
        assert!(Money::non_negative("price", Decimal::ZERO).is_ok());
    }

    #[test]
    fn bounded_rejects_amounts_above_the_ceiling() {
        assert!(Money::bounded("totalCost", MAX_AMOUNT).is_ok());
        let err = Money::bounded("totalCost", MAX_AMOUNT + Decimal::ONE).unwrap_err();
        assert_eq!(err.field(), "totalCost");
    }

    #[test]
    fn price_must_be_whole_cents() {
        assert_eq!(Money::price("price", d("4.50")).unwrap(), m("4.5"));
        assert!(Money::price("price", d("0.00000000000000000001")).is_err());
        assert!(Money::price("price", d("1.005")).is_err());
    }

    #[test]
    fn checked_ops_report_overflow() {
        let huge = Money::new(Decimal::MAX);
        assert_eq!(huge.checked_add(m("1")), None);
        assert_eq!(huge.checked_mul(Decimal::from(2)), None);
        assert_eq!(Money::new(Decimal::MIN).checked_sub(m("1")), None);
        assert_eq!(m("2").checked_mul(Decimal::from(3)), Some(m("6")));
    }

    #[test]
    fn displays_as_dollars() {
        assert_eq!(m("1.8").to_string(), "$1.80");
        assert_eq!(m("-2.005").to_string(), "-$2.01");
    }

    #[test]
    fn serializes_as_json_number() {
        let json = serde_json::to_string(&m("12.5")).unwrap();
        assert_eq!(json, "12.5");
        let back: Money = serde_json::from_str("3.25").unwrap();
        assert_eq!(back, m("3.25"));
    }
}
