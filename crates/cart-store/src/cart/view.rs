//! Rendered cart snapshot for the view layer.

use serde::Serialize;

use crate::cart::CartStore;
use crate::error::CartError;
use crate::money::Money;

/// Everything a cart page needs to render, with amounts pre-formatted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartView {
    /// One entry per line item, in cart order.
    pub items: Vec<CartLineView>,
    /// Cart total.
    pub total: Money,
    /// Cart total as a fixed two-decimal numeral (e.g., "13.50").
    pub total_amount: String,
    /// Sum of quantities.
    pub item_count: i64,
}

impl CartView {
    /// Header line, e.g. `Total Cart Amount: $13.50`.
    pub fn heading(&self) -> String {
        format!("Total Cart Amount: {}", self.total.display())
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, CartError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One rendered line item.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartLineView {
    /// Item name.
    pub name: String,
    /// Image reference.
    pub image: String,
    /// Cost string exactly as the catalog supplied it.
    pub cost: String,
    /// Quantity.
    pub quantity: i64,
    /// Subtotal rounded to cents.
    pub subtotal: Money,
    /// Subtotal as a fixed two-decimal numeral (e.g., "10.00").
    pub subtotal_amount: String,
}

impl CartLineView {
    /// Subtotal line, e.g. `Subtotal: $10.00`.
    pub fn subtotal_label(&self) -> String {
        format!("Subtotal: {}", self.subtotal.display())
    }
}

impl CartStore {
    /// Render the current state.
    pub fn view(&self) -> Result<CartView, CartError> {
        let pricing = self.pricing()?;
        let items = self
            .items()
            .iter()
            .zip(pricing.line_items.iter())
            .map(|(item, line)| CartLineView {
                name: item.name.clone(),
                image: item.image.clone(),
                cost: item.cost().to_string(),
                quantity: item.quantity.get(),
                subtotal: line.subtotal,
                subtotal_amount: line.subtotal.display_amount(),
            })
            .collect();

        Ok(CartView {
            items,
            total: pricing.total,
            total_amount: pricing.total.display_amount(),
            item_count: pricing.item_count,
        })
    }
}
