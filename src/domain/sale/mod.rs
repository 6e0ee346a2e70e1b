//! Sale domain module.
//!
//! Sales are append-only: once recorded they are never updated or deleted.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::foundation::{BowId, DomainError, Money, SaleId, Timestamp, ValidationError};

/// Input for recording a sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleDraft {
    pub bow_id: BowId,
    pub quantity: u32,
    /// Unit price.
    pub price: Money,
    pub customer: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sale {
    id: SaleId,
    details: SaleDraft,
    total: Money,
    sold_at: Timestamp,
}

impl Sale {
    /// Records a sale at the current time.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if quantity is zero, the price is negative,
    ///   above `MAX_AMOUNT` or not in whole cents, or the total overflows
    pub fn record(id: SaleId, draft: SaleDraft) -> Result<Self, DomainError> {
        if draft.quantity == 0 {
            return Err(ValidationError::out_of_range("quantity", 1, u32::MAX, 0).into());
        }
        Money::price("price", draft.price.amount())?;
        let total = line_total(&draft)?;
        Ok(Self {
            id,
            details: SaleDraft {
                customer: blank_to_none(draft.customer),
                notes: blank_to_none(draft.notes),
                ..draft
            },
            total,
            sold_at: Timestamp::now(),
        })
    }

    /// # Errors
    ///
    /// - `ValidationFailed` if the stored price and quantity overflow
    pub fn reconstitute(
        id: SaleId,
        draft: SaleDraft,
        sold_at: Timestamp,
    ) -> Result<Self, DomainError> {
        let total = line_total(&draft)?;
        Ok(Self {
            id,
            details: draft,
            total,
            sold_at,
        })
    }

    pub fn id(&self) -> &SaleId {
        &self.id
    }

    pub fn bow_id(&self) -> &BowId {
        &self.details.bow_id
    }

    pub fn quantity(&self) -> u32 {
        self.details.quantity
    }

    pub fn price(&self) -> Money {
        self.details.price
    }

    pub fn customer(&self) -> Option<&str> {
        self.details.customer.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.details.notes.as_deref()
    }

    pub fn sold_at(&self) -> &Timestamp {
        &self.sold_at
    }

    /// quantity x unit price
    pub fn total(&self) -> Money {
        self.total
    }
}

fn line_total(draft: &SaleDraft) -> Result<Money, ValidationError> {
    draft
        .price
        .checked_mul(Decimal::from(draft.quantity))
        .ok_or_else(|| ValidationError::overflow("price"))
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Totals over a set of sales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub count: u64,
    pub units: u64,
    pub revenue: Money,
}

impl SalesSummary {
    /// # Errors
    ///
    /// `Overflow` if revenue leaves the decimal range.
    pub fn of<'a>(sales: impl IntoIterator<Item = &'a Sale>) -> Result<Self, ValidationError> {
        sales.into_iter().try_fold(Self::default(), |acc, sale| {
            Ok(Self {
                count: acc.count.saturating_add(1),
                units: acc.units.saturating_add(u64::from(sale.quantity())),
                revenue: acc
                    .revenue
                    .checked_add(sale.total())
                    .ok_or_else(|| ValidationError::overflow("revenue"))?,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn draft(quantity: u32, price: &str) -> SaleDraft {
        SaleDraft {
            bow_id: BowId::new(),
            quantity,
            price: price.parse().unwrap(),
            customer: Some("  ".to_string()),
            notes: None,
        }
    }

    #[test]
    fn total_is_quantity_times_price() {
        let sale = Sale::record(SaleId::new(), draft(3, "4.50")).unwrap();
        assert_eq!(sale.total(), "13.5".parse::<Money>().unwrap());
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let err = Sale::record(SaleId::new(), draft(0, "4")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field"), Some(&"quantity".to_string()));
    }

    #[test]
    fn negative_price_is_rejected() {
        assert!(Sale::record(SaleId::new(), draft(1, "-1")).is_err());
    }

    #[test]
    fn price_beyond_ceiling_is_rejected_before_any_total() {
        let err =
            Sale::record(SaleId::new(), draft(10, "9000000000000000000000000000")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field"), Some(&"price".to_string()));
    }

    #[test]
    fn sub_cent_price_is_rejected() {
        assert!(Sale::record(SaleId::new(), draft(1, "0.001")).is_err());
    }

    #[test]
    fn largest_sale_still_totals() {
        let sale = Sale::record(SaleId::new(), draft(u32::MAX, "1000000000")).unwrap();
        assert_eq!(sale.total(), "4294967295000000000".parse::<Money>().unwrap());
    }

    #[test]
    fn stored_overflowing_sale_is_an_error_on_load() {
        let err = Sale::reconstitute(
            SaleId::new(),
            draft(10, "9000000000000000000000000000"),
            Timestamp::now(),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn summary_revenue_overflow_is_an_error() {
        let big = Sale::reconstitute(
            SaleId::new(),
            draft(1, "70000000000000000000000000000"),
            Timestamp::now(),
        )
        .unwrap();
        assert!(SalesSummary::of([&big, &big]).is_err());
    }

    #[test]
    fn blank_customer_is_dropped() {
        let sale = Sale::record(SaleId::new(), draft(1, "4")).unwrap();
        assert!(sale.customer().is_none());
    }

    #[test]
    fn summary_totals_sales() {
        let sales = vec![
            Sale::record(SaleId::new(), draft(2, "5")).unwrap(),
            Sale::record(SaleId::new(), draft(1, "7.25")).unwrap(),
        ];
        let summary = SalesSummary::of(&sales).unwrap();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.units, 3);
        assert_eq!(summary.revenue, "17.25".parse::<Money>().unwrap());
    }

    #[test]
    fn summary_of_nothing_is_zero() {
        assert_eq!(SalesSummary::of(&Vec::<Sale>::new()).unwrap(), SalesSummary::default());
    }
}
