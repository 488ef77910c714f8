//! Shopping cart state.
//!
//! This crate holds the state of a single shopping cart and derives its
//! totals:
//!
//! - **Cart**: line items keyed by name, quantity changes with
//!   removal-on-zero, per-item subtotals and a cart total
//! - **Money**: exact unit costs parsed from display strings, rounded to
//!   cents once and rendered as `$10.00`
//! - **Catalog**: the listing type an external catalog hands to the cart
//! - **Checkout**: a placeholder outcome for the unimplemented checkout
//!
//! # Example
//!
//! ```
//! use cart_store::prelude::*;
//!
//! let mut cart = CartStore::new();
//! cart.add_listing(&ProductListing::new("Fern", "fern.jpg", "$5.00"), 2).unwrap();
//! cart.add_listing(&ProductListing::new("Cactus", "cactus.jpg", "$3.50"), 1).unwrap();
//! assert_eq!(cart.cart_total().unwrap().display_amount(), "13.50");
//!
//! cart.decrement_quantity("Cactus").unwrap();
//! assert!(!cart.contains("Cactus"));
//! assert_eq!(cart.cart_total().unwrap().display(), "$10.00");
//! ```

pub mod config;
pub mod error;
pub mod money;
pub mod shared;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use cart::CartStore;
pub use config::CartConfig;
pub use error::CartError;
pub use money::{Amount, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::CartConfig;
    pub use crate::error::CartError;
    pub use crate::money::{Amount, Money};
    pub use crate::shared::SharedCartStore;

    // Cart
    pub use crate::cart::{
        CartCommand, CartLineView, CartPricing, CartStore, CartView, CommandOutcome, LineItem,
        LineItemPricing, Quantity,
    };

    // Catalog
    pub use crate::catalog::ProductListing;

    // Checkout
    pub use crate::checkout::CheckoutOutcome;
}
