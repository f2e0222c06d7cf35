//! Bulk transition runner.
//!
//! Applies one status change to many orders, sequentially and without
//! atomicity: the orders are independent remote resources with independent
//! failure causes, so one failure never aborts, skips or rolls back the
//! rest. The loop awaits each call before the next, which bounds load on
//! the service and keeps the audit trail in call order.
//!
//! Cancellation mid-batch is not supported; callers disable the triggering
//! controls for the duration instead.

use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::OpsError;
use crate::orders::status_policy;
use crate::orders::types::basic_types::{OrderId, OrderStatus};
use crate::orders::types::main_order_types::Order;
use crate::services::{OrderService, OverviewCache};
use crate::types::ConsoleConfig;

/// One order's failure inside a bulk run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkFailure {
    /// Order that failed.
    pub order_id: OrderId,
    /// User-visible reason.
    pub reason: String,
}

/// Aggregate outcome of a bulk run.
///
/// Callers must present both counts, not just the first error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BulkOutcome {
    /// Orders updated successfully.
    pub succeeded: usize,
    /// Per-order failures, in call order.
    pub failed: Vec<BulkFailure>,
}

impl BulkOutcome {
    /// Orders attempted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.succeeded + self.failed.len()
    }

    /// Whether every order updated.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Which orders a bulk action operates on.
#[derive(Debug, Clone)]
pub enum BulkScope {
    /// Only the explicitly checked orders.
    Selected(Vec<OrderId>),
    /// Every order in the current filtered view, ignoring selection.
    All,
}

impl BulkScope {
    /// Resolves the scope against the filtered view, keeping only orders
    /// whose current status allows a forward transition.
    #[must_use]
    pub fn resolve(&self, filtered: &[Order]) -> Vec<OrderId> {
        let eligible =
            filtered.iter().filter(|order| status_policy::bulk_eligible(&order.status));
        match self {
            Self::Selected(checked) => eligible
                .filter(|order| checked.contains(&order.id))
                .map(|order| order.id)
                .collect(),
            Self::All => eligible.map(|order| order.id).collect(),
        }
    }
}

/// Orchestrates the status policy across a collection of orders.
pub struct BulkTransitionRunner {
    orders: Arc<dyn OrderService>,
    cache: Arc<dyn OverviewCache>,
    config: ConsoleConfig,
}

impl BulkTransitionRunner {
    /// Creates the runner over its collaborators.
    #[must_use]
    pub fn new(
        orders: Arc<dyn OrderService>, cache: Arc<dyn OverviewCache>, config: ConsoleConfig,
    ) -> Self {
        Self { orders, cache, config }
    }

    /// Applies `target` to each order in turn, isolating per-order failures.
    pub async fn run(&self, target: &OrderStatus, order_ids: &[OrderId]) -> BulkOutcome {
        let mut outcome = BulkOutcome::default();

        for &order_id in order_ids {
            match self.transition_one(order_id, target).await {
                Ok(()) => outcome.succeeded += 1,
                Err(err) => {
                    warn!(order_id = order_id.0, error = %err, "bulk item failed");
                    outcome.failed.push(BulkFailure { order_id, reason: err.to_string() });
                }
            }
        }

        info!(
            to_status = target.as_str(),
            succeeded = outcome.succeeded,
            failed = outcome.failed.len(),
            "bulk transition finished"
        );
        outcome
    }

    /// One unit of work: fetch, policy-check, update, invalidate.
    ///
    /// The audit note names the status pair as it stands when this call is
    /// made, not a status captured before the batch started.
    async fn transition_one(&self, order_id: OrderId, target: &OrderStatus) -> Result<(), OpsError> {
        let order = self.orders.fetch(order_id).await?;
        status_policy::ensure_allowed(&order.status, target)?;

        let note = format!(
            "Bulk status change by {}: {} -> {}",
            self.config.audit_actor,
            order.status.label(),
            target.label()
        );
        self.orders.update_status(order_id, target.clone(), &note).await?;
        // Cache is only refreshed after a successful call, so a failed update
        // leaves the order's last-known status untouched.
        self.cache.invalidate_order(order_id);
        Ok(())
    }
}
