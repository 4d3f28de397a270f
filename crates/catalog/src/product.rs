use serde::{Deserialize, Serialize};

use shopfront_core::{CategoryId, Entity, ProductId, ValueObject};

/// Product rating in tenths of a star (`0..=50`).
///
/// Held as an integer so product records stay `Eq`/`Hash`-able; the display
/// layer converts to stars when rendering.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MAX_TENTHS: u8 = 50;

    /// Build a rating from tenths of a star, clamping to the valid range.
    pub const fn from_tenths(tenths: u8) -> Self {
        if tenths > Self::MAX_TENTHS {
            Self(Self::MAX_TENTHS)
        } else {
            Self(tenths)
        }
    }

    pub const fn as_tenths(self) -> u8 {
        self.0
    }

    pub fn stars(self) -> f32 {
        f32::from(self.0) / 10.0
    }
}

impl ValueObject for Rating {}

impl core::fmt::Display for Rating {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

/// Catalog product record.
///
/// Externally owned and read-only from the cart's perspective: the cart never
/// mutates a product, it only carries denormalized copies in its entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in the smallest currency unit (cents).
    pub price: u64,
    pub image: String,
    pub category: String,
    pub rating: Rating,
    pub description: String,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Catalog category record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub image: String,
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
