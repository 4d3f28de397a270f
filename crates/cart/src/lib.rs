//! Cart domain module.
//!
//! The cart store owns the list of (product, quantity) entries and the cart
//! panel's visibility flag. It is an explicitly constructed object with an
//! injected snapshot store (no ambient global): mutations run synchronously
//! to completion, re-serialize the entry list to the snapshot slot
//! (best-effort), and publish a fresh view to every live subscriber.

pub mod entry;
pub mod snapshot;
pub mod store;
pub mod subscription;

pub use entry::{CartEntry, CartView};
pub use snapshot::{FileSnapshotStore, InMemorySnapshotStore, SnapshotStore};
pub use store::CartStore;
pub use subscription::Subscription;
