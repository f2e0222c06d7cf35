//! # Order Types - Basic Types
//!
//! Identifiers and status enums shared across the order lifecycle core.

use serde::{Deserialize, Serialize};

// ============================================================================
// BASIC IDENTIFIERS
// ============================================================================

/// Unique order identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub i64);

impl OrderId {
    /// Creates a new order ID.
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

/// Unique store identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreId(pub i64);

impl StoreId {
    /// Creates a new store ID.
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

/// Unique delivery person identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeliveryBoyId(pub i64);

impl DeliveryBoyId {
    /// Creates a new delivery person ID.
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

/// Unique transaction identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub i64);

impl TransactionId {
    /// Creates a new transaction ID.
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

// ============================================================================
// STATUS ENUMS
// ============================================================================

/// Order status.
///
/// The remote service speaks loosely-typed snake_case tokens; anything this
/// console does not recognize lands in [`OrderStatus::Unknown`] and yields no
/// transitions (fail closed).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    /// Initial state after checkout or manual creation.
    #[default]
    OrderPlaced,
    /// Packed and waiting for a delivery run.
    ReadyToDispatch,
    /// Handed to a delivery person.
    OutOfDelivery,
    /// Delivered to the customer. Terminal.
    Delivered,
    /// Cancelled at any pre-terminal point. Terminal.
    Cancelled,
    /// Unrecognized server token, preserved verbatim.
    Unknown(String),
}

impl OrderStatus {
    /// Parses a wire token. Never fails; unrecognized tokens become `Unknown`.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token {
            "order_placed" => Self::OrderPlaced,
            "ready_to_dispatch" => Self::ReadyToDispatch,
            "out_of_delivery" => Self::OutOfDelivery,
            "delivered" => Self::Delivered,
            "cancelled" => Self::Cancelled,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Wire token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::OrderPlaced => "order_placed",
            Self::ReadyToDispatch => "ready_to_dispatch",
            Self::OutOfDelivery => "out_of_delivery",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Unknown(raw) => raw,
        }
    }

    /// Human-readable label: underscores to spaces, title-cased.
    #[must_use]
    pub fn label(&self) -> String {
        title_case(self.as_str())
    }

    /// Whether the lifecycle offers no further transitions from here.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

impl From<String> for OrderStatus {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Payment status bucket, derived server-side from recorded transactions.
///
/// The three known buckets are exhaustive for rendering and branching; an
/// unrecognized token is preserved rather than trusted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    /// Nothing collected yet.
    #[default]
    Unpaid,
    /// Something collected, less than the order total.
    PartiallyPaid,
    /// Collected total covers the order total.
    FullyPaid,
    /// Unrecognized server token, preserved verbatim.
    Unknown(String),
}

impl PaymentStatus {
    /// Parses a wire token. Never fails.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token {
            "unpaid" => Self::Unpaid,
            "partially_paid" => Self::PartiallyPaid,
            "fully_paid" => Self::FullyPaid,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Wire token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unpaid => "unpaid",
            Self::PartiallyPaid => "partially_paid",
            Self::FullyPaid => "fully_paid",
            Self::Unknown(raw) => raw,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> String {
        title_case(self.as_str())
    }

    /// Display tone for status badges. Pure formatting, no rendering here.
    #[must_use]
    pub fn tone(&self) -> &'static str {
        match self {
            Self::Unpaid => "danger",
            Self::PartiallyPaid => "warning",
            Self::FullyPaid => "success",
            Self::Unknown(_) => "muted",
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Payment collection mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMode {
    /// Cash on collection.
    #[default]
    Cash,
    /// Card terminal.
    Card,
    /// UPI transfer.
    Upi,
    /// Cheque.
    Cheque,
    /// Direct bank transfer.
    BankTransfer,
    /// Anything else the server reports.
    Other(String),
}

impl PaymentMode {
    /// Parses a wire token. Never fails.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token {
            "cash" => Self::Cash,
            "card" => Self::Card,
            "upi" => Self::Upi,
            "cheque" => Self::Cheque,
            "bank_transfer" => Self::BankTransfer,
            other => Self::Other(other.to_string()),
        }
    }

    /// Wire token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cash => "cash",
            Self::Card => "card",
            Self::Upi => "upi",
            Self::Cheque => "cheque",
            Self::BankTransfer => "bank_transfer",
            Self::Other(raw) => raw,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> String {
        title_case(self.as_str())
    }
}

impl From<String> for PaymentMode {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<PaymentMode> for String {
    fn from(mode: PaymentMode) -> Self {
        mode.as_str().to_string()
    }
}

/// Replaces underscores with spaces and title-cases each word.
#[must_use]
pub fn title_case(token: &str) -> String {
    token
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for token in ["order_placed", "ready_to_dispatch", "out_of_delivery", "delivered", "cancelled"] {
            assert_eq!(OrderStatus::parse(token).as_str(), token);
        }
    }

    #[test]
    fn test_unknown_status_preserved() {
        let status = OrderStatus::parse("on_hold");
        assert_eq!(status, OrderStatus::Unknown("on_hold".to_string()));
        assert_eq!(status.as_str(), "on_hold");
        assert!(!status.is_terminal());
    }

    #[test]
    fn test_labels() {
        assert_eq!(OrderStatus::OutOfDelivery.label(), "Out Of Delivery");
        assert_eq!(OrderStatus::OrderPlaced.label(), "Order Placed");
        assert_eq!(PaymentStatus::PartiallyPaid.label(), "Partially Paid");
        assert_eq!(PaymentMode::BankTransfer.label(), "Bank Transfer");
    }

    #[test]
    fn test_terminal_states() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::OrderPlaced.is_terminal());
        assert!(!OrderStatus::ReadyToDispatch.is_terminal());
        assert!(!OrderStatus::OutOfDelivery.is_terminal());
    }

    #[test]
    fn test_payment_status_tone() {
        assert_eq!(PaymentStatus::Unpaid.tone(), "danger");
        assert_eq!(PaymentStatus::FullyPaid.tone(), "success");
        assert_eq!(PaymentStatus::parse("refunded").tone(), "muted");
    }

    #[test]
    fn test_status_serde_wire_tokens() {
        let json = serde_json::to_string(&OrderStatus::ReadyToDispatch).expect("serialize");
        assert_eq!(json, "\"ready_to_dispatch\"");

        let status: OrderStatus = serde_json::from_str("\"out_of_delivery\"").expect("deserialize");
        assert_eq!(status, OrderStatus::OutOfDelivery);
    }
}
