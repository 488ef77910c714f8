//! Cart pricing calculations.

use serde::Serialize;

use crate::cart::{LineItem, Quantity};
use crate::error::CartError;
use crate::money::{Amount, Money};

/// Pricing breakdown for a cart, derived from its current items.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartPricing {
    /// Per-line-item pricing, in cart order.
    pub line_items: Vec<LineItemPricing>,
    /// Unrounded sum of all line subtotals.
    pub exact_total: Amount,
    /// Cart total, rounded once from `exact_total`.
    pub total: Money,
    /// Sum of all quantities.
    pub item_count: i64,
}

impl CartPricing {
    /// Price a sequence of line items.
    ///
    /// Line subtotals are accumulated unrounded; only the total is rounded.
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a LineItem>) -> Result<Self, CartError> {
        let mut line_items = Vec::new();
        let mut exact_total = Amount::zero();
        let mut item_count: i64 = 0;

        for item in items {
            let exact_subtotal = item.exact_subtotal()?;
            exact_total = exact_total
                .checked_add(&exact_subtotal)
                .ok_or(CartError::Overflow)?;
            item_count = item_count
                .checked_add(item.quantity.get())
                .ok_or(CartError::Overflow)?;
            line_items.push(LineItemPricing {
                name: item.name.clone(),
                unit_cost: item.unit_cost(),
                quantity: item.quantity,
                exact_subtotal,
                subtotal: exact_subtotal.round_to_cents(),
            });
        }

        Ok(Self {
            line_items,
            exact_total,
            total: exact_total.round_to_cents(),
            item_count,
        })
    }
}

/// Pricing for a single line item.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineItemPricing {
    /// Item name.
    pub name: String,
    /// Unit cost.
    pub unit_cost: Amount,
    /// Quantity.
    pub quantity: Quantity,
    /// Unrounded `unit_cost * quantity`.
    pub exact_subtotal: Amount,
    /// Subtotal rounded to cents.
    pub subtotal: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, cost: &str, qty: i64) -> LineItem {
        LineItem::new(name, "", cost, Quantity::new(qty).unwrap()).unwrap()
    }

    #[test]
    fn test_empty_pricing() {
        let items: Vec<LineItem> = Vec::new();
        let pricing = CartPricing::from_items(&items).unwrap();
        assert!(pricing.line_items.is_empty());
        assert_eq!(pricing.total.display_amount(), "0.00");
        assert_eq!(pricing.item_count, 0);
    }

    #[test]
    fn test_pricing_totals() {
        let items = vec![item("Fern", "$5.00", 2), item("Cactus", "$3.50", 1)];
        let pricing = CartPricing::from_items(&items).unwrap();
        assert_eq!(pricing.line_items.len(), 2);
        assert_eq!(pricing.line_items[0].subtotal.display_amount(), "10.00");
        assert_eq!(pricing.line_items[1].subtotal.display_amount(), "3.50");
        assert_eq!(pricing.total.display_amount(), "13.50");
        assert_eq!(pricing.item_count, 3);
    }

    #[test]
    fn test_total_is_not_sum_of_rounded_subtotals() {
        // Each line rounds to 0.01 on its own; the exact sum is 0.015 -> 0.02.
        let items = vec![item("A", "$0.005", 1), item("B", "$0.005", 1), item("C", "$0.005", 1)];
        let pricing = CartPricing::from_items(&items).unwrap();
        let rounded_sum: i64 = pricing.line_items.iter().map(|l| l.subtotal.amount_cents).sum();
        assert_eq!(rounded_sum, 3);
        assert_eq!(pricing.total.display_amount(), "0.02");
    }
}
