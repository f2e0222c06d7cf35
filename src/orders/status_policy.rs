//! Order status transition policy.
//!
//! Pure functions over the lifecycle state machine:
//!
//! ```text
//! order_placed -> ready_to_dispatch -> out_of_delivery -> delivered
//!       \________________\__________________\--> cancelled
//! ```
//!
//! `delivered` and `cancelled` are terminal. Unknown server tokens yield an
//! empty transition set: the console never offers a transition from a status
//! it does not understand.

use super::types::basic_types::OrderStatus;
use crate::errors::TransitionError;

/// One legal transition offered by the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTransition {
    /// Status the order would move to.
    pub target: OrderStatus,
    /// Display label for the target.
    pub label: String,
}

impl StatusTransition {
    fn to(target: OrderStatus) -> Self {
        let label = target.label();
        Self { target, label }
    }
}

/// Legal next statuses, ordered forward-first with `cancelled` last.
#[must_use]
pub fn allowed_transitions(status: &OrderStatus) -> Vec<StatusTransition> {
    match status {
        OrderStatus::OrderPlaced => vec![
            StatusTransition::to(OrderStatus::ReadyToDispatch),
            StatusTransition::to(OrderStatus::Cancelled),
        ],
        OrderStatus::ReadyToDispatch => vec![
            StatusTransition::to(OrderStatus::OutOfDelivery),
            StatusTransition::to(OrderStatus::Cancelled),
        ],
        OrderStatus::OutOfDelivery => vec![
            StatusTransition::to(OrderStatus::Delivered),
            StatusTransition::to(OrderStatus::Cancelled),
        ],
        OrderStatus::Delivered | OrderStatus::Cancelled | OrderStatus::Unknown(_) => Vec::new(),
    }
}

/// First allowed transition that is not a cancellation.
///
/// Drives the "advance" actions; `None` for terminal or unknown statuses.
#[must_use]
pub fn next_forward_status(status: &OrderStatus) -> Option<OrderStatus> {
    allowed_transitions(status)
        .into_iter()
        .map(|t| t.target)
        .find(|target| *target != OrderStatus::Cancelled)
}

/// Whether the given target is reachable from the current status.
#[must_use]
pub fn is_transition_allowed(from: &OrderStatus, to: &OrderStatus) -> bool {
    allowed_transitions(from).iter().any(|t| t.target == *to)
}

/// Policy check as a value-returning guard, run before any network call.
pub fn ensure_allowed(from: &OrderStatus, to: &OrderStatus) -> Result<(), TransitionError> {
    if is_transition_allowed(from, to) {
        Ok(())
    } else {
        Err(TransitionError::NotAllowed {
            from: from.as_str().to_string(),
            to: to.as_str().to_string(),
        })
    }
}

/// Whether a result set filtered to this status may expose bulk controls.
///
/// Only statuses with a forward transition qualify; `delivered` and
/// `cancelled` views never do.
#[must_use]
pub fn bulk_eligible(status: &OrderStatus) -> bool {
    next_forward_status(status).is_some()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_statuses_can_cancel() {
        for status in [
            OrderStatus::OrderPlaced,
            OrderStatus::ReadyToDispatch,
            OrderStatus::OutOfDelivery,
        ] {
            let transitions = allowed_transitions(&status);
            assert!(!transitions.is_empty(), "{status:?} should have transitions");
            assert!(
                transitions.iter().any(|t| t.target == OrderStatus::Cancelled),
                "{status:?} should allow cancellation"
            );
        }
    }

    #[test]
    fn test_terminal_statuses_have_no_transitions() {
        assert!(allowed_transitions(&OrderStatus::Delivered).is_empty());
        assert!(allowed_transitions(&OrderStatus::Cancelled).is_empty());
    }

    #[test]
    fn test_unknown_status_fails_closed() {
        let status = OrderStatus::parse("awaiting_review");
        assert!(allowed_transitions(&status).is_empty());
        assert_eq!(next_forward_status(&status), None);
        assert!(!bulk_eligible(&status));
    }

    #[test]
    fn test_next_forward_status_chain() {
        assert_eq!(
            next_forward_status(&OrderStatus::OrderPlaced),
            Some(OrderStatus::ReadyToDispatch)
        );
        assert_eq!(
            next_forward_status(&OrderStatus::ReadyToDispatch),
            Some(OrderStatus::OutOfDelivery)
        );
        assert_eq!(
            next_forward_status(&OrderStatus::OutOfDelivery),
            Some(OrderStatus::Delivered)
        );
        assert_eq!(next_forward_status(&OrderStatus::Delivered), None);
        assert_eq!(next_forward_status(&OrderStatus::Cancelled), None);
    }

    #[test]
    fn test_transition_labels() {
        let transitions = allowed_transitions(&OrderStatus::ReadyToDispatch);
        assert_eq!(transitions[0].label, "Out Of Delivery");
        assert_eq!(transitions[1].label, "Cancelled");
    }

    #[test]
    fn test_ensure_allowed() {
        assert!(ensure_allowed(&OrderStatus::OrderPlaced, &OrderStatus::ReadyToDispatch).is_ok());

        let err = ensure_allowed(&OrderStatus::OrderPlaced, &OrderStatus::Delivered)
            .expect_err("skipping states is not allowed");
        assert_eq!(
            err,
            TransitionError::NotAllowed {
                from: "order_placed".to_string(),
                to: "delivered".to_string(),
            }
        );
    }

    #[test]
    fn test_bulk_eligibility() {
        assert!(bulk_eligible(&OrderStatus::OrderPlaced));
        assert!(bulk_eligible(&OrderStatus::OutOfDelivery));
        assert!(!bulk_eligible(&OrderStatus::Delivered));
        assert!(!bulk_eligible(&OrderStatus::Cancelled));
    }
}
