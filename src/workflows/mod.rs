//! Async orchestration over the pure engines.
//!
//! Each workflow owns its remote collaborators behind [`crate::services`]
//! traits, validates locally before dispatching, and invalidates the
//! overview cache only after a successful call.

pub mod assignment;
pub mod bulk;
pub mod discounts;
pub mod transactions;


pub use assignment::{AssignmentOutcome, AssignmentRequest, DeliveryAssignmentWorkflow};
pub use bulk::{BulkFailure, BulkOutcome, BulkScope, BulkTransitionRunner};
pub use discounts::DiscountWindowManager;
pub use transactions::TransactionWorkflow;
