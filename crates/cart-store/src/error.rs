//! Cart error types.

use thiserror::Error;

/// Errors that can occur in cart operations.
///
/// Mutations that reference an item not in the cart are not errors; they
/// report "nothing changed" instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Item name is empty or whitespace.
    #[error("Item name must not be empty")]
    EmptyName,

    /// Cost string could not be parsed into an amount.
    #[error("Invalid cost format: {0:?}")]
    InvalidCostFormat(String),

    /// Quantity is not a positive integer.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<serde_json::Error> for CartError {
    fn from(e: serde_json::Error) -> Self {
        CartError::SerializationError(e.to_string())
    }
}
