//! The cart store.

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::cart::{CartPricing, LineItem, Quantity};
use crate::catalog::ProductListing;
use crate::checkout::CheckoutOutcome;
use crate::config::CartConfig;
use crate::error::CartError;
use crate::money::{Amount, Money};

/// An in-memory shopping cart.
///
/// Holds line items in insertion order, keyed by name. Every retained item
/// has a quantity of at least 1; quantity changes that would go below 1
/// remove the item instead. Totals are derived on every call and never
/// stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartStore {
    items: Vec<LineItem>,
    #[serde(skip)]
    config: CartConfig,
}

impl CartStore {
    /// Create an empty cart with default configuration.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            config: CartConfig::default(),
        }
    }

    /// Create an empty cart with the given configuration.
    pub fn with_config(config: CartConfig) -> Result<Self, CartError> {
        config.validate()?;
        Ok(Self {
            items: Vec::new(),
            config,
        })
    }

    /// Current line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get an item by name.
    pub fn get(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.name == name)
    }

    /// Check whether an item with this name is in the cart.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Current quantity of an item, if present.
    pub fn quantity_of(&self, name: &str) -> Option<i64> {
        self.get(name).map(|i| i.quantity.get())
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all items.
    ///
    /// Mutations that would push this past `i64::MAX` are rejected, so the
    /// sum always fits.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity.get()).sum()
    }

    /// Add an item to the cart.
    ///
    /// If an item with the same name is already present, the incoming
    /// quantity is added to it; its image and cost are left as they were.
    ///
    /// Returns an error if:
    /// - The name is blank
    /// - The resulting quantity exceeds the configured maximum
    /// - Arithmetic overflow would occur, in the line subtotal or in the
    ///   cart's totals
    pub fn add_item(&mut self, item: LineItem) -> Result<(), CartError> {
        if item.name.trim().is_empty() {
            return Err(CartError::EmptyName);
        }
        let max = self.config.max_quantity_per_item;
        let index = self.position(&item.name);

        let (unit_cost, new_quantity) = match index {
            Some(i) => {
                let existing = &self.items[i];
                let merged = existing
                    .quantity
                    .get()
                    .checked_add(item.quantity.get())
                    .ok_or(CartError::Overflow)?;
                (existing.unit_cost(), merged)
            }
            None => (item.unit_cost(), item.quantity.get()),
        };
        if new_quantity > max {
            return Err(CartError::QuantityExceedsLimit(new_quantity, max));
        }
        let subtotal = unit_cost
            .checked_mul(new_quantity)
            .ok_or(CartError::Overflow)?;
        self.check_totals(index, subtotal, new_quantity)?;

        match index {
            Some(i) => {
                let existing = &mut self.items[i];
                debug!(
                    item = %existing.name,
                    from = existing.quantity.get(),
                    to = new_quantity,
                    "merged re-added item"
                );
                existing.quantity = Quantity::try_from(new_quantity)?;
            }
            None => {
                debug!(item = %item.name, quantity = new_quantity, "added item");
                self.items.push(item);
            }
        }
        Ok(())
    }

    /// Add `quantity` units of a catalog listing.
    pub fn add_listing(&mut self, listing: &ProductListing, quantity: i64) -> Result<(), CartError> {
        self.add_item(listing.to_line_item(quantity)?)
    }

    /// Remove an item by name.
    ///
    /// Returns false, leaving the cart untouched, if no such item exists.
    pub fn remove_item(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.items.remove(index);
                debug!(item = %name, "removed item");
                true
            }
            None => {
                trace!(item = %name, "remove ignored, item not in cart");
                false
            }
        }
    }

    /// Set an item's quantity.
    ///
    /// A quantity below 1 removes the item. Unknown names are ignored.
    /// Returns whether the cart changed.
    pub fn set_quantity(&mut self, name: &str, quantity: i64) -> Result<bool, CartError> {
        let Some(index) = self.position(name) else {
            trace!(item = %name, quantity, "set quantity ignored, item not in cart");
            return Ok(false);
        };
        match Quantity::new(quantity) {
            Some(quantity) => self.apply_quantity(index, quantity),
            None => Ok(self.remove_item(name)),
        }
    }

    /// Increase an item's quantity by one. Unknown names are ignored.
    pub fn increment_quantity(&mut self, name: &str) -> Result<bool, CartError> {
        let Some(current) = self.quantity_of(name) else {
            trace!(item = %name, "increment ignored, item not in cart");
            return Ok(false);
        };
        let next = current.checked_add(1).ok_or(CartError::Overflow)?;
        self.set_quantity(name, next)
    }

    /// Decrease an item's quantity by one, removing it when it is at 1.
    /// Unknown names are ignored.
    pub fn decrement_quantity(&mut self, name: &str) -> Result<bool, CartError> {
        match self.quantity_of(name) {
            Some(current) if current > 1 => self.set_quantity(name, current - 1),
            Some(_) => Ok(self.remove_item(name)),
            None => {
                trace!(item = %name, "decrement ignored, item not in cart");
                Ok(false)
            }
        }
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        debug!(items = self.items.len(), "cleared cart");
        self.items.clear();
    }

    /// Subtotal for one line item, rounded to cents.
    pub fn item_subtotal(&self, item: &LineItem) -> Result<Money, CartError> {
        item.subtotal()
    }

    /// Cart total, rounded to cents once after summing unrounded subtotals.
    pub fn cart_total(&self) -> Result<Money, CartError> {
        let subtotals = self
            .items
            .iter()
            .map(LineItem::exact_subtotal)
            .collect::<Result<Vec<_>, _>>()?;
        Amount::try_sum(subtotals)
            .map(|exact| exact.round_to_cents())
            .ok_or(CartError::Overflow)
    }

    /// Full pricing breakdown.
    pub fn pricing(&self) -> Result<CartPricing, CartError> {
        CartPricing::from_items(&self.items)
    }

    /// Request checkout. Always the not-implemented placeholder; the cart is
    /// left as it is.
    pub fn checkout(&self) -> CheckoutOutcome {
        info!(items = self.items.len(), "checkout requested");
        CheckoutOutcome::not_implemented(self.config.checkout_message.clone())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|i| i.name == name)
    }

    /// Fails with [`CartError::Overflow`] unless the cart total and total
    /// quantity still fit once the line at `index` (a new line when `None`)
    /// holds `quantity` units costing `subtotal`.
    fn check_totals(
        &self,
        index: Option<usize>,
        subtotal: Amount,
        quantity: i64,
    ) -> Result<(), CartError> {
        let mut subtotals = Vec::with_capacity(self.items.len() + 1);
        let mut total_quantity = quantity;
        for (i, item) in self.items.iter().enumerate() {
            if Some(i) == index {
                continue;
            }
            subtotals.push(item.exact_subtotal()?);
            total_quantity = total_quantity
                .checked_add(item.quantity.get())
                .ok_or(CartError::Overflow)?;
        }
        subtotals.push(subtotal);
        Amount::try_sum(subtotals).ok_or(CartError::Overflow)?;
        Ok(())
    }

    fn apply_quantity(&mut self, index: usize, quantity: Quantity) -> Result<bool, CartError> {
        let max = self.config.max_quantity_per_item;
        if quantity.get() > max {
            return Err(CartError::QuantityExceedsLimit(quantity.get(), max));
        }
        if self.items[index].quantity == quantity {
            return Ok(false);
        }
        let subtotal = self.items[index]
            .unit_cost()
            .checked_mul(quantity.get())
            .ok_or(CartError::Overflow)?;
        self.check_totals(Some(index), subtotal, quantity.get())?;

        let item = &mut self.items[index];
        debug!(
            item = %item.name,
            from = item.quantity.get(),
            to = quantity.get(),
            "quantity updated"
        );
        item.quantity = quantity;
        Ok(true)
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
