//! Product filtering: a linear predicate chain over the catalog.

use crate::product::{Product, Rating};

/// Browse-page filter state.
///
/// Unset fields do not constrain the result; the price window is inclusive on
/// both ends and open-ended when `max_price` is `None`. Filtering preserves
/// catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Case-insensitive category label match.
    pub category: Option<String>,
    /// Lower price bound in cents (inclusive).
    pub min_price: u64,
    /// Upper price bound in cents (inclusive); `None` means unbounded.
    pub max_price: Option<u64>,
    /// Keep products rated at or above this threshold.
    pub min_rating: Option<Rating>,
    /// Case-insensitive substring search over name, description, and category.
    pub search: Option<String>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if !product.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }

        if product.price < self.min_price {
            return false;
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }

        if let Some(min_rating) = self.min_rating {
            if product.rating < min_rating {
                return false;
            }
        }

        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let haystack = |s: &str| s.to_lowercase().contains(&term);
            if !haystack(&product.name)
                && !haystack(&product.description)
                && !haystack(&product.category)
            {
                return false;
            }
        }

        true
    }

    /// Apply the filter to a product list, preserving order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}
