//! Delivery assignment workflow.
//!
//! Assigning a delivery person can auto-advance the order one forward step.
//! The advance is anchored at the order's status at assignment time; terminal
//! orders skip the step silently. A failed assignment aborts before any
//! status update, and a failed auto-update never rolls the assignment back.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::errors::OpsError;
use crate::orders::status_policy;
use crate::orders::types::basic_types::{DeliveryBoyId, OrderId, OrderStatus};
use crate::services::{OrderService, OverviewCache};
use crate::types::ConsoleConfig;

/// Delivery assignment request.
#[derive(Debug, Clone)]
pub struct AssignmentRequest {
    /// Order to assign.
    pub order_id: OrderId,
    /// Delivery person. Existence/activity is enforced by the directory
    /// service, not here.
    pub delivery_boy_id: DeliveryBoyId,
    /// Advance the order one forward step after a successful assignment.
    pub auto_update_status: bool,
    /// Optional note attached to the assignment call.
    pub notes: Option<String>,
}

/// Outcome of an assignment.
///
/// The assignment itself succeeded whenever this value exists at all; the
/// fields describe what happened to the optional auto-advance step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentOutcome {
    /// Status the order was advanced to, when the auto-update ran and stuck.
    pub status_advanced_to: Option<OrderStatus>,
    /// Message from a failed auto-update. The assignment stands; the status
    /// change is retried manually.
    pub status_update_error: Option<String>,
}

impl AssignmentOutcome {
    fn assignment_only() -> Self {
        Self { status_advanced_to: None, status_update_error: None }
    }
}

/// Workflow composing the assignment call with the status policy.
pub struct DeliveryAssignmentWorkflow {
    orders: Arc<dyn OrderService>,
    cache: Arc<dyn OverviewCache>,
    config: ConsoleConfig,
}

impl DeliveryAssignmentWorkflow {
    /// Creates the workflow over its collaborators.
    #[must_use]
    pub fn new(
        orders: Arc<dyn OrderService>, cache: Arc<dyn OverviewCache>, config: ConsoleConfig,
    ) -> Self {
        Self { orders, cache, config }
    }

    /// Builds a request with the console's default auto-update behavior.
    #[must_use]
    pub fn request(&self, order_id: OrderId, delivery_boy_id: DeliveryBoyId) -> AssignmentRequest {
        AssignmentRequest {
            order_id,
            delivery_boy_id,
            auto_update_status: self.config.auto_update_status,
            notes: None,
        }
    }

    /// Assigns a delivery person, optionally advancing the order status.
    pub async fn assign(&self, request: AssignmentRequest) -> Result<AssignmentOutcome, OpsError> {
        let order = self.orders.fetch(request.order_id).await?;

        self.orders
            .assign_delivery(
                request.order_id,
                request.delivery_boy_id,
                request.auto_update_status,
                request.notes.as_deref(),
            )
            .await?;
        self.cache.invalidate_order(request.order_id);
        info!(
            order_id = request.order_id.0,
            delivery_boy_id = request.delivery_boy_id.0,
            "delivery person assigned"
        );

        if !request.auto_update_status {
            return Ok(AssignmentOutcome::assignment_only());
        }

        let Some(next) = status_policy::next_forward_status(&order.status) else {
            debug!(
                order_id = request.order_id.0,
                status = order.status.as_str(),
                "no forward transition, auto-update skipped"
            );
            return Ok(AssignmentOutcome::assignment_only());
        };

        let note = format!(
            "Status auto-updated on delivery assignment by {}",
            self.config.audit_actor
        );
        match self.orders.update_status(request.order_id, next.clone(), &note).await {
            Ok(()) => {
                self.cache.invalidate_order(request.order_id);
                info!(
                    order_id = request.order_id.0,
                    status = next.as_str(),
                    "status auto-advanced after assignment"
                );
                Ok(AssignmentOutcome {
                    status_advanced_to: Some(next),
                    status_update_error: None,
                })
            }
            Err(err) => {
                // Assignment stands; the status change is retried manually.
                warn!(
                    order_id = request.order_id.0,
                    error = %err,
                    "auto status update failed after assignment"
                );
                Ok(AssignmentOutcome {
                    status_advanced_to: None,
                    status_update_error: Some(err.to_string()),
                })
            }
        }
    }
}
