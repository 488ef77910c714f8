//! Scripted shopping sessions.
//!
//! A session file lists the catalog the shopper browses and the actions
//! they take, in order. Actions name products; `add` looks the product up
//! in the catalog.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use cart_store::cart::CartCommand;
use cart_store::catalog::ProductListing;
use serde::{Deserialize, Serialize};

/// A catalog plus a sequence of shopper actions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub catalog: Vec<ProductListing>,
    #[serde(default)]
    pub actions: Vec<SessionAction>,
}

/// One shopper action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SessionAction {
    Add {
        name: String,
        #[serde(default = "default_quantity")]
        quantity: i64,
    },
    Increment { name: String },
    Decrement { name: String },
    SetQuantity { name: String, quantity: i64 },
    Remove { name: String },
    ContinueShopping,
    Checkout,
}

fn default_quantity() -> i64 {
    1
}

impl SessionAction {
    /// Short human-readable description.
    pub fn label(&self) -> String {
        match self {
            SessionAction::Add { name, quantity } => format!("add {} x{}", name, quantity),
            SessionAction::Increment { name } => format!("increment {}", name),
            SessionAction::Decrement { name } => format!("decrement {}", name),
            SessionAction::SetQuantity { name, quantity } => format!("set {} to {}", name, quantity),
            SessionAction::Remove { name } => format!("remove {}", name),
            SessionAction::ContinueShopping => "continue shopping".to_string(),
            SessionAction::Checkout => "checkout".to_string(),
        }
    }
}

impl Session {
    /// Load a session from a TOML or JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file: {}", path.display()))?;
        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON session: {}", path.display()))
        } else {
            Self::from_toml(&content)
                .with_context(|| format!("Failed to parse TOML session: {}", path.display()))
        }
    }

    /// Parse a session from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Look up a catalog listing by name.
    pub fn listing(&self, name: &str) -> Option<&ProductListing> {
        self.catalog.iter().find(|l| l.name == name)
    }

    /// Turn an action into a cart command.
    pub fn resolve(&self, action: &SessionAction) -> Result<CartCommand> {
        let command = match action {
            SessionAction::Add { name, quantity } => CartCommand::Add {
                listing: self
                    .listing(name)
                    .cloned()
                    .ok_or_else(|| anyhow!("'{}' is not in the catalog", name))?,
                quantity: *quantity,
            },
            SessionAction::Increment { name } => CartCommand::Increment { name: name.clone() },
            SessionAction::Decrement { name } => CartCommand::Decrement { name: name.clone() },
            SessionAction::SetQuantity { name, quantity } => CartCommand::SetQuantity {
                name: name.clone(),
                quantity: *quantity,
            },
            SessionAction::Remove { name } => CartCommand::Remove { name: name.clone() },
            SessionAction::ContinueShopping => CartCommand::ContinueShopping,
            SessionAction::Checkout => CartCommand::Checkout,
        };
        Ok(command)
    }
}
