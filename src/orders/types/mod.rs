//! Type definitions for the order lifecycle core.

pub mod basic_types;
pub mod main_order_types;
pub mod order_types;

// Re-export commonly used types
pub use basic_types::*;
pub use main_order_types::*;
pub use order_types::*;
