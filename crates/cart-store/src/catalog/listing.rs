//! Product listings as supplied by the catalog.

use serde::{Deserialize, Serialize};

use crate::cart::{LineItem, Quantity};
use crate::error::CartError;

/// A purchasable product as the catalog describes it.
///
/// `cost` is kept as the catalog's display string; it is parsed once, when
/// the listing becomes a [`LineItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductListing {
    /// Product name. Becomes the line item key.
    pub name: String,
    /// Image reference.
    #[serde(default)]
    pub image: String,
    /// Display cost (e.g., "$15.00").
    pub cost: String,
}

impl ProductListing {
    /// Create a listing.
    pub fn new(name: impl Into<String>, image: impl Into<String>, cost: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            cost: cost.into(),
        }
    }

    /// Build a line item for `quantity` units of this listing.
    pub fn to_line_item(&self, quantity: i64) -> Result<LineItem, CartError> {
        let quantity = Quantity::try_from(quantity)?;
        LineItem::new(self.name.clone(), self.image.clone(), self.cost.clone(), quantity)
    }
}
