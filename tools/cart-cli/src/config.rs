//! CLI configuration.

use anyhow::{Context, Result};
use cart_store::CartConfig;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Cart store settings.
    #[serde(default)]
    pub cart: CartConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    /// Parse config text, as JSON when `path` ends in `.json` and TOML otherwise.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        let config: CliConfig = if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))?
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))?
        };
        config
            .cart
            .validate()
            .with_context(|| format!("Invalid config: {}", path))?;
        Ok(config)
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default log filter when `RUST_LOG` is unset (default: warn).
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_toml() {
        let config = CliConfig::parse(
            "cart.toml",
            r#"
[cart]
max_quantity_per_item = 25
"#,
        )
        .unwrap();
        assert_eq!(config.cart.max_quantity_per_item, 25);
        assert_eq!(config.log.level, "warn");
        assert_eq!(
            config.cart.checkout_message,
            cart_store::config::DEFAULT_CHECKOUT_MESSAGE
        );
    }

    #[test]
    fn test_parse_json() {
        let config = CliConfig::parse("cart.json", r#"{"log": {"level": "debug"}}"#).unwrap();
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.cart.max_quantity_per_item, 9999);
    }

    #[test]
    fn test_rejects_invalid_limit() {
        let result = CliConfig::parse("cart.toml", "[cart]\nmax_quantity_per_item = 0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let text = toml::to_string_pretty(&CliConfig::default()).unwrap();
        let config = CliConfig::parse("cart.toml", &text).unwrap();
        assert_eq!(config.cart, CartConfig::default());
    }
}
