//! Catalog domain module.
//!
//! This crate contains the static product catalog and the read-side rules
//! that operate on it (lookups, filtering, display formatting), implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod catalog;
pub mod filter;
pub mod format;
pub mod product;

pub use catalog::Catalog;
pub use filter::ProductFilter;
pub use format::{format_price, star_rating, truncate};
pub use product::{Category, Product, Rating};
