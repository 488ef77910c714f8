//! Line item and quantity types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CartError;
use crate::money::{Amount, Money};

/// A line item quantity. Always at least 1.
///
/// A line item whose quantity would drop to zero is removed from the cart
/// instead, so zero is not representable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Quantity(i64);

impl Quantity {
    /// A quantity of one.
    pub const ONE: Quantity = Quantity(1);

    /// Create a quantity, returning None unless `value >= 1`.
    pub fn new(value: i64) -> Option<Self> {
        (value >= 1).then_some(Self(value))
    }

    /// Get the raw value.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Quantity {
    type Error = CartError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Quantity::new(value).ok_or(CartError::InvalidQuantity(value))
    }
}

impl From<Quantity> for i64 {
    fn from(q: Quantity) -> Self {
        q.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product currently in the cart.
///
/// The cost string and the unit cost parsed from it are only set together,
/// by [`LineItem::new`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineItem {
    /// Item name, unique within a cart.
    pub name: String,
    /// Image reference for display.
    pub image: String,
    cost: String,
    unit_cost: Amount,
    /// Quantity.
    pub quantity: Quantity,
}

impl LineItem {
    /// Create a line item, parsing `cost` into a unit cost.
    ///
    /// Fails with [`CartError::EmptyName`] for a blank name and
    /// [`CartError::InvalidCostFormat`] when the cost cannot be parsed.
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        cost: impl Into<String>,
        quantity: Quantity,
    ) -> Result<Self, CartError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CartError::EmptyName);
        }
        let cost = cost.into();
        let unit_cost = Amount::parse(&cost).inspect_err(|_| {
            tracing::warn!(item = %name, cost = %cost, "rejected unparseable cost");
        })?;
        Ok(Self {
            name,
            image: image.into(),
            cost,
            unit_cost,
            quantity,
        })
    }

    /// Cost as supplied by the catalog (e.g., "$5.00").
    pub fn cost(&self) -> &str {
        &self.cost
    }

    /// Unit cost parsed from [`cost`](Self::cost).
    pub fn unit_cost(&self) -> Amount {
        self.unit_cost
    }

    /// Exact `unit_cost * quantity`, without rounding.
    pub fn exact_subtotal(&self) -> Result<Amount, CartError> {
        self.unit_cost
            .checked_mul(self.quantity.get())
            .ok_or(CartError::Overflow)
    }

    /// `unit_cost * quantity`, rounded to cents.
    pub fn subtotal(&self) -> Result<Money, CartError> {
        self.exact_subtotal().map(|a| a.round_to_cents())
    }
}
