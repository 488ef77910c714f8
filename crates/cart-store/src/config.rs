//! Cart store configuration.

use serde::{Deserialize, Serialize};

use crate::error::CartError;

/// Default maximum quantity allowed per line item.
pub const DEFAULT_MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// Highest value `max_quantity_per_item` may be configured to.
pub const MAX_QUANTITY_LIMIT: i64 = 1_000_000;

/// Default message carried by the checkout placeholder.
pub const DEFAULT_CHECKOUT_MESSAGE: &str = "Functionality to be added for future reference";

/// Tunables for a [`CartStore`](crate::CartStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Upper bound on any single line item's quantity.
    pub max_quantity_per_item: i64,

    /// Message returned when checkout is requested.
    pub checkout_message: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            max_quantity_per_item: DEFAULT_MAX_QUANTITY_PER_ITEM,
            checkout_message: DEFAULT_CHECKOUT_MESSAGE.to_string(),
        }
    }
}

impl CartConfig {
    /// Check the configuration for values the store cannot honor.
    pub fn validate(&self) -> Result<(), CartError> {
        if self.max_quantity_per_item < 1 {
            return Err(CartError::ValidationError(format!(
                "max_quantity_per_item must be at least 1, got {}",
                self.max_quantity_per_item
            )));
        }
        if self.max_quantity_per_item > MAX_QUANTITY_LIMIT {
            return Err(CartError::ValidationError(format!(
                "max_quantity_per_item must be at most {}, got {}",
                MAX_QUANTITY_LIMIT, self.max_quantity_per_item
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CartConfig::default();
        assert_eq!(config.max_quantity_per_item, 9999);
        assert_eq!(config.checkout_message, DEFAULT_CHECKOUT_MESSAGE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: CartConfig = serde_json::from_str(r#"{"max_quantity_per_item": 10}"#).unwrap();
        assert_eq!(config.max_quantity_per_item, 10);
        assert_eq!(config.checkout_message, DEFAULT_CHECKOUT_MESSAGE);
    }

    #[test]
    fn test_rejects_zero_limit() {
        let config = CartConfig {
            max_quantity_per_item: 0,
            ..CartConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CartError::ValidationError(_))
        ));
    }

    #[test]
    fn test_rejects_limit_above_cap() {
        let at_cap = CartConfig {
            max_quantity_per_item: MAX_QUANTITY_LIMIT,
            ..CartConfig::default()
        };
        assert!(at_cap.validate().is_ok());

        let config = CartConfig {
            max_quantity_per_item: i64::MAX,
            ..CartConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CartError::ValidationError(_))
        ));
    }
}
