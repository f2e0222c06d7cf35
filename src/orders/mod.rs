//! Order lifecycle core.
//!
//! Data model plus the two pure engines: the status transition policy and
//! the payment validation engine. Nothing in this module performs I/O; the
//! async orchestration over these rules lives in [`crate::workflows`].

pub mod payments;
pub mod status_policy;
pub mod types;

// Re-export main types for convenience
pub use types::*;
