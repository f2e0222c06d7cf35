//! Error types for the operations console core.
//!
//! Business-rule violations are values: each engine has its own validation
//! enum, and all of them convert into [`OpsError`] at the workflow boundary.
//! Only remote rejections and transport problems originate outside this
//! crate; nothing here is retried automatically.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Console-core errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpsError {
    /// Order not found on the remote service.
    #[error("Order not found: {0}")]
    OrderNotFound(i64),
    /// Transaction not found on the remote service.
    #[error("Transaction not found: {0}")]
    TransactionNotFound(i64),
    /// A currency field could not be parsed as a decimal amount.
    #[error("Invalid amount in {field}: {value:?}")]
    InvalidAmount {
        /// Field name as it appears on the wire.
        field: String,
        /// Raw value that failed to parse.
        value: String,
    },
    /// Payments may only be recorded against delivered orders.
    #[error("Payments are not accepted for orders in status '{0}'")]
    PaymentNotAllowed(String),
    /// A status transition the lifecycle policy does not allow.
    #[error(transparent)]
    Transition(#[from] TransitionError),
    /// A proposed payment violating the reconciliation rules.
    #[error(transparent)]
    PaymentValidation(#[from] PaymentValidationError),
    /// A proposed discount window violating its bounds.
    #[error(transparent)]
    DiscountValidation(#[from] DiscountValidationError),
    /// The remote service refused a well-formed request.
    #[error("{message}")]
    Remote {
        /// Message from the service's error payload, or a generic fallback.
        message: String,
    },
    /// Unexpected transport failure (timeout, connection loss).
    #[error("Transport failure: {0}")]
    Transport(String),
}

/// Illegal status transition, per the order lifecycle policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The target status is not reachable from the current one.
    #[error("Status change from '{from}' to '{to}' is not allowed")]
    NotAllowed {
        /// Wire token of the current status.
        from: String,
        /// Wire token of the requested status.
        to: String,
    },
}

/// Rejections from the payment validation engine.
///
/// All checks run against the order's `total_amount`; they are the
/// client-side guard only, the remote service remains the final authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaymentValidationError {
    /// Amount must be strictly positive.
    #[error("Payment amount must be greater than zero")]
    NonPositiveAmount,
    /// Discount must be non-negative.
    #[error("Payment discount cannot be negative")]
    NegativeDiscount,
    /// Amount alone exceeds the order total.
    #[error("Payment amount {amount} exceeds order total {total}")]
    AmountExceedsTotal {
        /// Proposed amount.
        amount: Decimal,
        /// Order total.
        total: Decimal,
    },
    /// Discount alone exceeds the order total.
    #[error("Payment discount {discount} exceeds order total {total}")]
    DiscountExceedsTotal {
        /// Proposed discount.
        discount: Decimal,
        /// Order total.
        total: Decimal,
    },
    /// Amount plus discount exceeds the order total.
    #[error("Payment amount {amount} plus discount {discount} exceeds order total {total}")]
    CombinedExceedsTotal {
        /// Proposed amount.
        amount: Decimal,
        /// Proposed discount.
        discount: Decimal,
        /// Order total.
        total: Decimal,
    },
}

/// Rejections from the discount window manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiscountValidationError {
    /// Percentage must lie in `[0, 100]`.
    #[error("Discount percentage {0} is out of range (0-100)")]
    PercentageOutOfRange(Decimal),
    /// Window must not end before it starts.
    #[error("Discount window is invalid: {start} is after {end}")]
    InvalidWindow {
        /// Window start.
        start: NaiveDate,
        /// Window end.
        end: NaiveDate,
    },
}

/// Result type for console-core operations.
pub type OpsResult<T> = Result<T, OpsError>;
