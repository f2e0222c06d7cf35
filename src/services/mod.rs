//! External collaborator interfaces.
//!
//! The console core does not own transport, auth or routing; it consumes the
//! remote order/transaction/store services through these traits and is
//! exercised in tests through in-memory implementations. All calls are
//! request/response, none are streaming.

use async_trait::async_trait;

use crate::errors::OpsError;
use crate::orders::types::basic_types::{DeliveryBoyId, OrderId, OrderStatus, StoreId, TransactionId};
use crate::orders::types::main_order_types::Order;
use crate::orders::types::order_types::{DiscountParams, OrderItem, Transaction, TransactionDraft};

/// Remote order service.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Fetches an order by id.
    async fn fetch(&self, id: OrderId) -> Result<Order, OpsError>;

    /// Requests a status change, carrying an audit note.
    async fn update_status(
        &self, id: OrderId, status: OrderStatus, notes: &str,
    ) -> Result<(), OpsError>;

    /// Assigns a delivery person to an order.
    async fn assign_delivery(
        &self, id: OrderId, delivery_boy_id: DeliveryBoyId, auto_update_status: bool,
        notes: Option<&str>,
    ) -> Result<(), OpsError>;

    /// Replaces the order's line items (the explicit items-edit operation).
    async fn update_items(&self, id: OrderId, items: &[OrderItem]) -> Result<(), OpsError>;
}

/// Remote transaction service.
#[async_trait]
pub trait TransactionService: Send + Sync {
    /// Creates a transaction from a validated draft.
    async fn create(&self, draft: &TransactionDraft) -> Result<Transaction, OpsError>;

    /// Updates an existing transaction. The parent order/store never changes.
    async fn update(
        &self, id: TransactionId, draft: &TransactionDraft,
    ) -> Result<Transaction, OpsError>;

    /// Deletes a transaction.
    async fn delete(&self, id: TransactionId) -> Result<(), OpsError>;

    /// Lists the transactions recorded against an order.
    async fn list_by_order(&self, order_id: OrderId) -> Result<Vec<Transaction>, OpsError>;
}

/// Remote store service.
#[async_trait]
pub trait StoreService: Send + Sync {
    /// Sets the store's discount; the set path always marks it active.
    async fn set_discount(
        &self, store_id: StoreId, params: &DiscountParams,
    ) -> Result<(), OpsError>;

    /// Clears the active flag, keeping percentage/dates/description on record.
    async fn deactivate_discount(&self, store_id: StoreId) -> Result<(), OpsError>;
}

/// In-memory cache of order/overview data.
///
/// The workflows only ever invalidate, never mutate, so concurrent readers
/// see either the pre-batch view or a post-call-refreshed one.
pub trait OverviewCache: Send + Sync {
    /// Drops the cached record for one order.
    fn invalidate_order(&self, id: OrderId);

    /// Drops the cached overview/list data.
    fn invalidate_overview(&self);
}

/// Fallback used when a remote error payload carries no usable message.
pub const GENERIC_REMOTE_ERROR: &str = "The server rejected the request";

/// Extracts the user-visible message from a remote error payload.
///
/// The console API reports errors as `{"message": "..."}`; anything else
/// falls back to a generic message rather than leaking raw payloads.
#[must_use]
pub fn remote_error_message(payload: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorPayload {
        message: String,
    }

    match serde_json::from_str::<ErrorPayload>(payload) {
        Ok(parsed) if !parsed.message.trim().is_empty() => parsed.message,
        _ => GENERIC_REMOTE_ERROR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_message_from_payload() {
        let message = remote_error_message(r#"{"message": "Order was updated by another user"}"#);
        assert_eq!(message, "Order was updated by another user");
    }

    #[test]
    fn test_remote_error_message_fallback() {
        assert_eq!(remote_error_message("<html>502</html>"), GENERIC_REMOTE_ERROR);
        assert_eq!(remote_error_message(r#"{"message": ""}"#), GENERIC_REMOTE_ERROR);
        assert_eq!(remote_error_message(r#"{"error": "nope"}"#), GENERIC_REMOTE_ERROR);
    }
}
