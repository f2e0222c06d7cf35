//! Main order type for the lifecycle core.
//!
//! The `Order` mirrors what the remote console API returns: currency amounts
//! are decimal strings parsed on demand, `payment_status` is the
//! server-derived bucket, and the line items are fixed except through the
//! explicit items-edit operation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::basic_types::{DeliveryBoyId, OrderId, OrderStatus, PaymentStatus};
use super::order_types::{parse_amount, OrderItem, Transaction};
use crate::orders::payments;

/// Complete order as known to the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order ID.
    pub id: OrderId,
    /// Order number (display).
    pub order_number: String,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Grand total (decimal string).
    pub total_amount: String,
    /// Subtotal before GST (decimal string).
    pub subtotal_amount: String,
    /// Total GST (decimal string).
    pub total_gst_amount: String,
    /// Paid-so-far total as reported by the server (decimal string).
    pub total_paid_amount: String,
    /// Server-derived payment bucket.
    pub payment_status: PaymentStatus,
    /// Assigned delivery person, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_boy_id: Option<DeliveryBoyId>,
    /// Line items.
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
}

impl Order {
    /// Grand total parsed on demand.
    pub fn total(&self) -> Result<Decimal, crate::errors::OpsError> {
        parse_amount("total_amount", &self.total_amount)
    }

    /// Subtotal parsed on demand.
    pub fn subtotal(&self) -> Result<Decimal, crate::errors::OpsError> {
        parse_amount("subtotal_amount", &self.subtotal_amount)
    }

    /// GST total parsed on demand.
    pub fn gst_total(&self) -> Result<Decimal, crate::errors::OpsError> {
        parse_amount("total_gst_amount", &self.total_gst_amount)
    }

    /// Paid total as last reported by the server.
    pub fn recorded_paid_total(&self) -> Result<Decimal, crate::errors::OpsError> {
        parse_amount("total_paid_amount", &self.total_paid_amount)
    }

    /// Amount still outstanding against the recorded paid total.
    pub fn outstanding(&self) -> Result<Decimal, crate::errors::OpsError> {
        Ok((self.total()? - self.recorded_paid_total()?).max(Decimal::ZERO))
    }

    /// Whether the console may record a new payment against this order.
    ///
    /// Payments are collected after fulfillment, so only delivered orders
    /// qualify.
    #[must_use]
    pub fn accepts_new_payment(&self) -> bool {
        self.status == OrderStatus::Delivered
    }

    /// Re-derives the payment bucket from the non-voided transactions that
    /// belong to this order. The server owns the stored value; this is the
    /// reconciliation check the console runs against a fresh transaction list.
    pub fn recompute_payment_status(
        &self, transactions: &[Transaction],
    ) -> Result<PaymentStatus, crate::errors::OpsError> {
        let paid = payments::paid_total(self.id, transactions)?;
        Ok(payments::derive_payment_status(paid, self.total()?))
    }
}
