//! # Bakery Ops Core
//!
//! Order lifecycle and payment reconciliation core for the bakery operations
//! console: the status state machine, the delivery-assignment workflow, the
//! payment validation rules, the store discount window manager, and the bulk
//! transition runner. Transport, auth and rendering live outside this crate
//! and are consumed through the [`services`] traits.

#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod errors;
pub mod orders;
pub mod services;
pub mod types;
pub mod workflows;

// Re-exports for public API
pub use errors::{OpsError, OpsResult};
pub use orders::types::basic_types::{OrderStatus, PaymentStatus};
pub use types::ConsoleConfig;
pub use workflows::{BulkOutcome, BulkTransitionRunner, DeliveryAssignmentWorkflow};
