//! Shopping cart module.
//!
//! Contains the cart store, line items, pricing, view commands and the
//! rendered snapshot.

mod command;
mod line_item;
mod pricing;
mod store;
mod view;

pub use command::{CartCommand, CommandOutcome};
pub use line_item::{LineItem, Quantity};
pub use pricing::{CartPricing, LineItemPricing};
pub use store::CartStore;
pub use view::{CartLineView, CartView};
