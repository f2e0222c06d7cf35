//! Type definitions for the operations console core.

/// Console configuration.
///
/// Carried by the workflows so generated audit notes and assignment defaults
/// stay consistent across the console.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Advance order status automatically when a delivery person is assigned.
    pub auto_update_status: bool,
    /// Actor name stamped on audit notes generated by the console.
    pub audit_actor: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { auto_update_status: true, audit_actor: "console".to_string() }
    }
}
