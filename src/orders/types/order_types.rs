//! # Order Types - Line Items, Transactions, Discounts
//!
//! Wire-facing types for order line items, payment transactions and
//! store discount windows. Currency amounts travel as decimal strings and
//! are parsed on demand; nothing in this module touches the network.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::basic_types::{DeliveryBoyId, OrderId, PaymentMode, StoreId, TransactionId};
use crate::errors::{DiscountValidationError, OpsError};

/// Parses a wire decimal string into an exact amount.
pub(crate) fn parse_amount(field: &str, value: &str) -> Result<Decimal, OpsError> {
    value.trim().parse::<Decimal>().map_err(|_| OpsError::InvalidAmount {
        field: field.to_string(),
        value: value.to_string(),
    })
}

// ============================================================================
// ORDER LINE ITEM
// ============================================================================

/// Line item in an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product ID.
    pub product_id: i64,
    /// Quantity ordered.
    pub quantity: u32,
    /// Unit price (decimal string).
    pub price: String,
    /// GST percentage applied to this line (decimal string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gst_percentage: Option<String>,
    /// GST amount for this line (decimal string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gst_amount: Option<String>,
}

impl OrderItem {
    /// Unit price parsed on demand.
    pub fn unit_price(&self) -> Result<Decimal, OpsError> {
        parse_amount("price", &self.price)
    }

    /// Line total before GST.
    pub fn line_total(&self) -> Result<Decimal, OpsError> {
        Ok(self.unit_price()? * Decimal::from(self.quantity))
    }
}

// ============================================================================
// TRANSACTIONS
// ============================================================================

/// Recorded payment transaction.
///
/// Belongs to exactly one order or one store (store-level payments are the
/// parallel concept not tied to a single order); never both. The parent is
/// fixed at creation and never changes on edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Parent order, for order-level payments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    /// Parent store, for store-level payments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<StoreId>,
    /// Amount collected (decimal string, positive).
    pub amount: String,
    /// Discount granted at collection time (decimal string, non-negative).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_discount: Option<String>,
    /// Collection mode.
    pub payment_mode: PaymentMode,
    /// Staff or delivery person who collected the payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collected_by: Option<DeliveryBoyId>,
    /// Collection date.
    pub transaction_date: NaiveDate,
    /// Voided transactions are excluded from reconciliation sums.
    #[serde(default)]
    pub is_voided: bool,
}

impl Transaction {
    /// Amount parsed on demand.
    pub fn amount(&self) -> Result<Decimal, OpsError> {
        parse_amount("amount", &self.amount)
    }

    /// Discount parsed on demand; absent means zero.
    pub fn discount(&self) -> Result<Decimal, OpsError> {
        match &self.payment_discount {
            Some(raw) => parse_amount("payment_discount", raw),
            None => Ok(Decimal::ZERO),
        }
    }

    /// Whether this transaction is counted against the given order.
    #[must_use]
    pub fn counts_for_order(&self, order_id: OrderId) -> bool {
        !self.is_voided && self.order_id == Some(order_id)
    }
}

/// Client-side payment proposal, validated before dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDraft {
    /// Parent order, for order-level payments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    /// Parent store, for store-level payments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<StoreId>,
    /// Proposed amount.
    pub amount: Decimal,
    /// Proposed discount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_discount: Option<Decimal>,
    /// Collection mode.
    pub payment_mode: PaymentMode,
    /// Staff or delivery person collecting the payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collected_by: Option<DeliveryBoyId>,
    /// Collection date.
    pub transaction_date: NaiveDate,
}

impl TransactionDraft {
    /// Creates an order-level payment draft.
    #[must_use]
    pub fn for_order(
        order_id: OrderId, amount: Decimal, payment_mode: PaymentMode, transaction_date: NaiveDate,
    ) -> Self {
        Self {
            order_id: Some(order_id),
            store_id: None,
            amount,
            payment_discount: None,
            payment_mode,
            collected_by: None,
            transaction_date,
        }
    }

    /// Creates a store-level payment draft.
    #[must_use]
    pub fn for_store(
        store_id: StoreId, amount: Decimal, payment_mode: PaymentMode, transaction_date: NaiveDate,
    ) -> Self {
        Self {
            order_id: None,
            store_id: Some(store_id),
            amount,
            payment_discount: None,
            payment_mode,
            collected_by: None,
            transaction_date,
        }
    }

    /// Sets the discount.
    #[must_use]
    pub fn with_discount(mut self, discount: Decimal) -> Self {
        self.payment_discount = Some(discount);
        self
    }

    /// Sets the collector.
    #[must_use]
    pub fn collected_by(mut self, collector: DeliveryBoyId) -> Self {
        self.collected_by = Some(collector);
        self
    }
}

// ============================================================================
// STORE DISCOUNTS
// ============================================================================

/// Store-level percentage discount over a date window.
///
/// At most one discount record exists per store; it is mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDiscount {
    /// Percentage, 0-100.
    pub percentage: Decimal,
    /// Window start.
    pub start_date: NaiveDate,
    /// Window end.
    pub end_date: NaiveDate,
    /// Whether the discount is switched on.
    pub is_active: bool,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl StoreDiscount {
    /// Whether the discount is live: active and the date falls in the window.
    #[must_use]
    pub fn is_live(&self, today: NaiveDate) -> bool {
        self.is_active && self.start_date <= today && today <= self.end_date
    }
}

/// Proposed discount window, validated before dispatch.
///
/// Submitting through the set-discount path always marks the discount active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountParams {
    /// Percentage, 0-100.
    pub percentage: Decimal,
    /// Window start.
    pub start_date: NaiveDate,
    /// Window end.
    pub end_date: NaiveDate,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DiscountParams {
    /// Validates the percentage bounds and the window ordering.
    pub fn validate(&self) -> Result<(), DiscountValidationError> {
        if self.percentage < Decimal::ZERO || self.percentage > Decimal::from(100) {
            return Err(DiscountValidationError::PercentageOutOfRange(self.percentage));
        }
        if self.start_date > self.end_date {
            return Err(DiscountValidationError::InvalidWindow {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }
}

impl From<&StoreDiscount> for DiscountParams {
    /// Re-submission parameters for reactivating an existing discount.
    fn from(discount: &StoreDiscount) -> Self {
        Self {
            percentage: discount.percentage,
            start_date: discount.start_date,
            end_date: discount.end_date,
            description: discount.description.clone(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("total_amount", "120.50").expect("parse"), dec!(120.50));
        assert_eq!(parse_amount("total_amount", " 99 ").expect("parse"), dec!(99));

        let err = parse_amount("total_amount", "12,50").expect_err("reject");
        assert_eq!(
            err,
            OpsError::InvalidAmount { field: "total_amount".to_string(), value: "12,50".to_string() }
        );
    }

    #[test]
    fn test_line_total() {
        let item = OrderItem {
            product_id: 7,
            quantity: 3,
            price: "40.25".to_string(),
            gst_percentage: None,
            gst_amount: None,
        };
        assert_eq!(item.line_total().expect("total"), dec!(120.75));
    }

    #[test]
    fn test_transaction_counts_for_order() {
        let txn = Transaction {
            id: TransactionId::new(1),
            order_id: Some(OrderId::new(10)),
            store_id: None,
            amount: "50".to_string(),
            payment_discount: None,
            payment_mode: PaymentMode::Cash,
            collected_by: None,
            transaction_date: date(2024, 6, 1),
            is_voided: false,
        };
        assert!(txn.counts_for_order(OrderId::new(10)));
        assert!(!txn.counts_for_order(OrderId::new(11)));

        let voided = Transaction { is_voided: true, ..txn };
        assert!(!voided.counts_for_order(OrderId::new(10)));
    }

    #[test]
    fn test_discount_params_bounds() {
        let mut params = DiscountParams {
            percentage: dec!(150),
            start_date: date(2024, 6, 1),
            end_date: date(2024, 6, 30),
            description: None,
        };
        assert_eq!(
            params.validate(),
            Err(DiscountValidationError::PercentageOutOfRange(dec!(150)))
        );

        params.percentage = dec!(0);
        assert_eq!(params.validate(), Ok(()));
        params.percentage = dec!(100);
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn test_discount_params_window_order() {
        let params = DiscountParams {
            percentage: dec!(10),
            start_date: date(2024, 7, 1),
            end_date: date(2024, 6, 1),
            description: None,
        };
        assert_eq!(
            params.validate(),
            Err(DiscountValidationError::InvalidWindow {
                start: date(2024, 7, 1),
                end: date(2024, 6, 1),
            })
        );
    }

    #[test]
    fn test_discount_is_live() {
        let discount = StoreDiscount {
            percentage: dec!(15),
            start_date: date(2024, 6, 1),
            end_date: date(2024, 6, 30),
            is_active: true,
            description: Some("Monsoon sale".to_string()),
        };
        assert!(discount.is_live(date(2024, 6, 1)));
        assert!(discount.is_live(date(2024, 6, 30)));
        assert!(!discount.is_live(date(2024, 7, 1)));

        let inactive = StoreDiscount { is_active: false, ..discount };
        assert!(!inactive.is_live(date(2024, 6, 15)));
    }
}
