//! Transaction recording workflow.
//!
//! Runs the payment validation engine before any network call, then folds
//! the result back into cache invalidation. Edits re-validate the updated
//! values against the order total; the server recomputes the aggregate, so
//! the replaced transaction's amount is never needed here.

use std::sync::Arc;

use tracing::info;

use crate::errors::OpsError;
use crate::orders::payments;
use crate::orders::types::basic_types::{OrderId, PaymentStatus, TransactionId};
use crate::orders::types::main_order_types::Order;
use crate::orders::types::order_types::{Transaction, TransactionDraft};
use crate::services::{OverviewCache, TransactionService};

/// Workflow over the transaction service.
pub struct TransactionWorkflow {
    transactions: Arc<dyn TransactionService>,
    cache: Arc<dyn OverviewCache>,
}

impl TransactionWorkflow {
    /// Creates the workflow over its collaborators.
    #[must_use]
    pub fn new(transactions: Arc<dyn TransactionService>, cache: Arc<dyn OverviewCache>) -> Self {
        Self { transactions, cache }
    }

    /// Records a new payment against a delivered order.
    pub async fn record(
        &self, order: &Order, draft: TransactionDraft,
    ) -> Result<Transaction, OpsError> {
        if !order.accepts_new_payment() {
            return Err(OpsError::PaymentNotAllowed(order.status.as_str().to_string()));
        }
        payments::validate_payment(order.total()?, draft.amount, draft.payment_discount)?;

        let created = self.transactions.create(&draft).await?;
        self.cache.invalidate_order(order.id);
        info!(order_id = order.id.0, transaction_id = created.id.0, "payment recorded");
        Ok(created)
    }

    /// Edits an existing transaction, re-validating the updated values.
    pub async fn amend(
        &self, order: &Order, id: TransactionId, draft: TransactionDraft,
    ) -> Result<Transaction, OpsError> {
        payments::validate_payment(order.total()?, draft.amount, draft.payment_discount)?;

        let updated = self.transactions.update(id, &draft).await?;
        self.cache.invalidate_order(order.id);
        info!(order_id = order.id.0, transaction_id = id.0, "payment amended");
        Ok(updated)
    }

    /// Deletes a transaction.
    pub async fn remove(&self, order_id: OrderId, id: TransactionId) -> Result<(), OpsError> {
        self.transactions.delete(id).await?;
        self.cache.invalidate_order(order_id);
        info!(order_id = order_id.0, transaction_id = id.0, "payment deleted");
        Ok(())
    }

    /// Re-derives the payment bucket from a fresh transaction list.
    pub async fn reconciled_status(&self, order: &Order) -> Result<PaymentStatus, OpsError> {
        let transactions = self.transactions.list_by_order(order.id).await?;
        order.recompute_payment_status(&transactions)
    }
}
