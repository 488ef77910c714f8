//! Commands issued by the cart view.
//!
//! A view layer maps each user action to a [`CartCommand`] and feeds it to
//! [`CartStore::dispatch`]. Navigation and checkout requests are passed back
//! as outcomes for the caller to act on.

use serde::{Deserialize, Serialize};

use crate::cart::CartStore;
use crate::catalog::ProductListing;
use crate::checkout::CheckoutOutcome;
use crate::error::CartError;

/// A user action against the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CartCommand {
    /// Add units of a catalog listing.
    Add {
        listing: ProductListing,
        #[serde(default = "default_quantity")]
        quantity: i64,
    },
    /// The "+" button.
    Increment { name: String },
    /// The "-" button.
    Decrement { name: String },
    /// Set an exact quantity.
    SetQuantity { name: String, quantity: i64 },
    /// The "Delete" button.
    Remove { name: String },
    /// Return to the product listing.
    ContinueShopping,
    /// Proceed to checkout.
    Checkout,
}

fn default_quantity() -> i64 {
    1
}

/// What happened after a command was dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CommandOutcome {
    /// The cart changed; re-render.
    Updated,
    /// The command was accepted but nothing changed.
    Unchanged,
    /// The caller should navigate back to shopping.
    ContinueShopping,
    /// Checkout was requested.
    Checkout { checkout: CheckoutOutcome },
}

impl CommandOutcome {
    fn from_changed(changed: bool) -> Self {
        if changed {
            CommandOutcome::Updated
        } else {
            CommandOutcome::Unchanged
        }
    }

    /// Check whether the cart changed.
    pub fn is_updated(&self) -> bool {
        matches!(self, CommandOutcome::Updated)
    }
}

impl CartStore {
    /// Apply a view command.
    pub fn dispatch(&mut self, command: CartCommand) -> Result<CommandOutcome, CartError> {
        tracing::trace!(?command, "dispatch");
        let outcome = match command {
            CartCommand::Add { listing, quantity } => {
                self.add_listing(&listing, quantity)?;
                CommandOutcome::Updated
            }
            CartCommand::Increment { name } => {
                CommandOutcome::from_changed(self.increment_quantity(&name)?)
            }
            CartCommand::Decrement { name } => {
                CommandOutcome::from_changed(self.decrement_quantity(&name)?)
            }
            CartCommand::SetQuantity { name, quantity } => {
                CommandOutcome::from_changed(self.set_quantity(&name, quantity)?)
            }
            CartCommand::Remove { name } => CommandOutcome::from_changed(self.remove_item(&name)),
            CartCommand::ContinueShopping => CommandOutcome::ContinueShopping,
            CartCommand::Checkout => CommandOutcome::Checkout {
                checkout: self.checkout(),
            },
        };
        Ok(outcome)
    }
}
