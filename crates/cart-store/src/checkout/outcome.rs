//! Checkout outcome.

use serde::{Deserialize, Serialize};

/// Result of asking the cart to check out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckoutOutcome {
    /// Checkout is a placeholder. The caller decides how to surface it.
    NotImplemented {
        /// Message for the user.
        message: String,
    },
}

impl CheckoutOutcome {
    /// Placeholder outcome with the given message.
    pub fn not_implemented(message: impl Into<String>) -> Self {
        CheckoutOutcome::NotImplemented {
            message: message.into(),
        }
    }

    pub fn is_implemented(&self) -> bool {
        !matches!(self, CheckoutOutcome::NotImplemented { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            CheckoutOutcome::NotImplemented { message } => message,
        }
    }
}
