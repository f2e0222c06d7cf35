//! Payment validation engine.
//!
//! Pure reconciliation rules keeping recorded transactions consistent with an
//! order's total. Everything here runs before any network call; the remote
//! service remains the final authority and may still reject for reasons this
//! engine cannot see (concurrent payments from another session, for one).

use rust_decimal::Decimal;

use super::types::basic_types::{OrderId, PaymentStatus};
use super::types::main_order_types::Order;
use super::types::order_types::Transaction;
use crate::errors::{OpsError, PaymentValidationError};

/// Validates a proposed payment `(amount, discount)` against an order total.
///
/// The same check applies to creating a transaction and to editing one: the
/// server recomputes the aggregate, so the client only guards the single
/// proposed value and never needs the replaced transaction's amount.
pub fn validate_payment(
    total: Decimal, amount: Decimal, discount: Option<Decimal>,
) -> Result<(), PaymentValidationError> {
    let discount = discount.unwrap_or(Decimal::ZERO);

    if amount <= Decimal::ZERO {
        return Err(PaymentValidationError::NonPositiveAmount);
    }
    if discount < Decimal::ZERO {
        return Err(PaymentValidationError::NegativeDiscount);
    }
    if amount > total {
        return Err(PaymentValidationError::AmountExceedsTotal { amount, total });
    }
    if discount > total {
        return Err(PaymentValidationError::DiscountExceedsTotal { discount, total });
    }
    if amount + discount > total {
        return Err(PaymentValidationError::CombinedExceedsTotal { amount, discount, total });
    }
    Ok(())
}

/// Derives the payment bucket from a paid total.
///
/// The server owns the stored value; the console computes it for display and
/// for reconciliation checks, treating the three buckets as exhaustive.
#[must_use]
pub fn derive_payment_status(paid: Decimal, total: Decimal) -> PaymentStatus {
    if paid <= Decimal::ZERO {
        PaymentStatus::Unpaid
    } else if paid < total {
        PaymentStatus::PartiallyPaid
    } else {
        PaymentStatus::FullyPaid
    }
}

/// Sum of amounts over the order's non-voided transactions.
pub fn paid_total(order_id: OrderId, transactions: &[Transaction]) -> Result<Decimal, OpsError> {
    let mut sum = Decimal::ZERO;
    for txn in transactions.iter().filter(|t| t.counts_for_order(order_id)) {
        sum += txn.amount()?;
    }
    Ok(sum)
}

/// Sum of amounts plus discounts over the order's non-voided transactions.
///
/// This is the quantity that must never exceed the order total.
pub fn committed_total(
    order_id: OrderId, transactions: &[Transaction],
) -> Result<Decimal, OpsError> {
    let mut sum = Decimal::ZERO;
    for txn in transactions.iter().filter(|t| t.counts_for_order(order_id)) {
        sum += txn.amount()? + txn.discount()?;
    }
    Ok(sum)
}

/// Checks the ledger invariant: committed total never exceeds the order total.
pub fn validate_order_ledger(order: &Order, transactions: &[Transaction]) -> Result<(), OpsError> {
    let total = order.total()?;
    let committed = committed_total(order.id, transactions)?;
    if committed > total {
        return Err(PaymentValidationError::CombinedExceedsTotal {
            amount: paid_total(order.id, transactions)?,
            discount: committed - paid_total(order.id, transactions)?,
            total,
        }
        .into());
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::orders::types::basic_types::{OrderStatus, PaymentMode, TransactionId};

    fn txn(id: i64, order_id: i64, amount: &str, discount: Option<&str>) -> Transaction {
        Transaction {
            id: TransactionId::new(id),
            order_id: Some(OrderId::new(order_id)),
            store_id: None,
            amount: amount.to_string(),
            payment_discount: discount.map(str::to_string),
            payment_mode: PaymentMode::Cash,
            collected_by: None,
            transaction_date: NaiveDate::from_ymd_opt(2024, 6, 1).expect("date"),
            is_voided: false,
        }
    }

    #[test]
    fn test_validate_payment_accepts_within_total() {
        assert_eq!(validate_payment(dec!(100), dec!(50), None), Ok(()));
        // Boundary: exact total.
        assert_eq!(validate_payment(dec!(100), dec!(100), Some(dec!(0))), Ok(()));
        assert_eq!(validate_payment(dec!(100), dec!(60), Some(dec!(40))), Ok(()));
    }

    #[test]
    fn test_validate_payment_rejects_non_positive_amount() {
        assert_eq!(
            validate_payment(dec!(100), dec!(0), None),
            Err(PaymentValidationError::NonPositiveAmount)
        );
        assert_eq!(
            validate_payment(dec!(100), dec!(-5), None),
            Err(PaymentValidationError::NonPositiveAmount)
        );
    }

    #[test]
    fn test_validate_payment_rejects_amount_over_total() {
        assert_eq!(
            validate_payment(dec!(100), dec!(101), None),
            Err(PaymentValidationError::AmountExceedsTotal { amount: dec!(101), total: dec!(100) })
        );
    }

    #[test]
    fn test_validate_payment_rejects_discount_over_total() {
        assert_eq!(
            validate_payment(dec!(100), dec!(10), Some(dec!(120))),
            Err(PaymentValidationError::DiscountExceedsTotal {
                discount: dec!(120),
                total: dec!(100),
            })
        );
    }

    #[test]
    fn test_validate_payment_rejects_combined_over_total() {
        assert_eq!(
            validate_payment(dec!(100), dec!(60), Some(dec!(50))),
            Err(PaymentValidationError::CombinedExceedsTotal {
                amount: dec!(60),
                discount: dec!(50),
                total: dec!(100),
            })
        );
    }

    #[test]
    fn test_validate_payment_rejects_negative_discount() {
        assert_eq!(
            validate_payment(dec!(100), dec!(10), Some(dec!(-1))),
            Err(PaymentValidationError::NegativeDiscount)
        );
    }

    #[test]
    fn test_derive_payment_status_buckets() {
        assert_eq!(derive_payment_status(dec!(0), dec!(100)), PaymentStatus::Unpaid);
        assert_eq!(derive_payment_status(dec!(1), dec!(100)), PaymentStatus::PartiallyPaid);
        assert_eq!(derive_payment_status(dec!(99.99), dec!(100)), PaymentStatus::PartiallyPaid);
        assert_eq!(derive_payment_status(dec!(100), dec!(100)), PaymentStatus::FullyPaid);
        assert_eq!(derive_payment_status(dec!(120), dec!(100)), PaymentStatus::FullyPaid);
    }

    #[test]
    fn test_paid_and_committed_totals() {
        let order_id = OrderId::new(3);
        let transactions = vec![
            txn(1, 3, "40", Some("10")),
            txn(2, 3, "30", None),
            txn(3, 8, "99", None), // other order
        ];
        assert_eq!(paid_total(order_id, &transactions).expect("paid"), dec!(70));
        assert_eq!(committed_total(order_id, &transactions).expect("committed"), dec!(80));
    }

    #[test]
    fn test_validate_order_ledger() {
        let order = Order {
            id: OrderId::new(3),
            order_number: "ORD-0003".to_string(),
            status: OrderStatus::Delivered,
            total_amount: "100".to_string(),
            subtotal_amount: "100".to_string(),
            total_gst_amount: "0".to_string(),
            total_paid_amount: "70".to_string(),
            payment_status: PaymentStatus::PartiallyPaid,
            delivery_boy_id: None,
            order_items: Vec::new(),
        };

        let within = vec![txn(1, 3, "40", Some("10")), txn(2, 3, "30", None)];
        assert!(validate_order_ledger(&order, &within).is_ok());

        let over = vec![txn(1, 3, "80", Some("30"))];
        assert!(matches!(
            validate_order_ledger(&order, &over),
            Err(OpsError::PaymentValidation(PaymentValidationError::CombinedExceedsTotal { .. }))
        ));
    }
}
