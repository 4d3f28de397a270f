use serde::{Deserialize, Serialize};

use shopfront_catalog::Product;

/// One cart line: a denormalized product record plus a quantity.
///
/// Invariant: `quantity >= 1`. An entry that would drop to zero or below is
/// removed from the cart instead of being kept at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub product: Product,
    pub quantity: u32,
}

impl CartEntry {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Line total in cents: unit price times quantity.
    pub fn line_total(&self) -> u64 {
        self.product.price * u64::from(self.quantity)
    }
}

/// Immutable snapshot of the cart handed to subscribers and the display layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub entries: Vec<CartEntry>,
    pub total_items: u64,
    pub total_price: u64,
    pub is_open: bool,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
