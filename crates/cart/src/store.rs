//! The cart store: state transitions, derived totals, persistence, fan-out.

use std::sync::mpsc;

use shopfront_catalog::Product;
use shopfront_core::ProductId;

use crate::entry::{CartEntry, CartView};
use crate::snapshot::SnapshotStore;
use crate::subscription::Subscription;

/// Single shared cart instance for the storefront.
///
/// Entries are an ordered sequence keyed uniquely by product id; insertion
/// order is display order. Every mutation runs to completion on the calling
/// thread, re-serializes the entry list to the snapshot slot (best-effort),
/// and publishes a fresh [`CartView`] to all live subscribers. No operation
/// ever returns an error to the caller: missing entries are no-ops, storage
/// failures are logged and swallowed.
pub struct CartStore {
    entries: Vec<CartEntry>,
    is_open: bool,
    snapshots: Box<dyn SnapshotStore>,
    subscribers: Vec<mpsc::Sender<CartView>>,
}

impl CartStore {
    /// Construct the store, hydrating entries from the snapshot slot.
    ///
    /// An absent or unparseable snapshot degrades silently to an empty cart;
    /// hydration is never a startup failure. Visibility always starts closed.
    pub fn new(snapshots: Box<dyn SnapshotStore>) -> Self {
        let entries = match snapshots.load() {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartEntry>>(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::warn!("discarding unparseable cart snapshot: {err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!("failed to load cart snapshot, starting empty: {err:?}");
                Vec::new()
            }
        };

        Self {
            entries,
            is_open: false,
            snapshots,
            subscribers: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Total item count: sum of quantities over all entries.
    pub fn total_items(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Total price in cents: sum of unit price times quantity over all entries.
    pub fn total_price(&self) -> u64 {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Current snapshot of the exposed state.
    pub fn view(&self) -> CartView {
        CartView {
            entries: self.entries.clone(),
            total_items: self.total_items(),
            total_price: self.total_price(),
            is_open: self.is_open,
        }
    }

    /// Register an observer: returns the current view plus a subscription
    /// that receives a fresh view after every committed mutation.
    pub fn subscribe(&mut self) -> (CartView, Subscription<CartView>) {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        (self.view(), Subscription::new(rx))
    }

    /// Add one unit of `product`.
    ///
    /// An existing entry for the same product id has its quantity bumped;
    /// otherwise a new entry is appended at the end with quantity 1. Any
    /// product record is accepted as-is.
    pub fn add_to_cart(&mut self, product: Product) {
        if let Some(idx) = self.entries.iter().position(|e| e.product.id == product.id) {
            let entry = &mut self.entries[idx];
            entry.quantity = entry.quantity.saturating_add(1);
        } else {
            tracing::debug!(product_id = %product.id, "new cart entry");
            self.entries.push(CartEntry::new(product));
        }
        self.commit();
    }

    /// Remove the entry for `product_id`; absent id is a no-op, not an error.
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        let before = self.entries.len();
        self.entries.retain(|e| e.product.id != product_id);
        if self.entries.len() == before {
            tracing::debug!(%product_id, "remove_from_cart on absent entry");
        }
        self.commit();
    }

    /// Set the quantity of an existing entry.
    ///
    /// A target of zero or below behaves exactly like
    /// [`remove_from_cart`](Self::remove_from_cart); an absent id is a no-op,
    /// never an insertion.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(product_id);
            return;
        }

        if let Some(entry) = self.entries.iter_mut().find(|e| e.product.id == product_id) {
            entry.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
        self.commit();
    }

    /// Reset entries to empty; the visibility flag is untouched.
    pub fn clear_cart(&mut self) {
        self.entries.clear();
        self.commit();
    }

    /// Flip the cart panel's visibility flag.
    ///
    /// Visibility is ephemeral: subscribers are notified, but the snapshot
    /// slot is not written, so the panel always reopens closed after a
    /// restart.
    pub fn toggle_visibility(&mut self) {
        self.is_open = !self.is_open;
        self.notify();
    }

    /// Persist the entry list and fan the new view out to subscribers.
    fn commit(&mut self) {
        match serde_json::to_string(&self.entries) {
            Ok(snapshot) => {
                if let Err(err) = self.snapshots.save(&snapshot) {
                    // Best-effort: in-memory state stays correct, the next
                    // startup just will not see this write.
                    tracing::warn!("failed to persist cart snapshot: {err:?}");
                }
            }
            Err(err) => {
                tracing::warn!("failed to serialize cart snapshot: {err}");
            }
        }
        self.notify();
    }

    fn notify(&mut self) {
        let view = self.view();
        // Drop any dead subscribers while publishing.
        self.subscribers.retain(|tx| tx.send(view.clone()).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::InMemorySnapshotStore;
    use shopfront_catalog::{Product, Rating};
    use std::sync::Arc;

    fn test_product(id: u32, price: u64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price,
            image: String::new(),
            category: "Test".to_string(),
            rating: Rating::from_tenths(40),
            description: String::new(),
        }
    }

    fn empty_store() -> CartStore {
        CartStore::new(Box::new(InMemorySnapshotStore::new()))
    }

    #[test]
    fn repeated_adds_accumulate_into_one_entry() {
        let mut store = empty_store();
        for _ in 0..5 {
            store.add_to_cart(test_product(1, 100));
        }

        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.entries()[0].quantity, 5);
        assert_eq!(store.total_items(), 5);
    }

    #[test]
    fn add_appends_new_products_in_insertion_order() {
        let mut store = empty_store();
        store.add_to_cart(test_product(1, 12999));
        store.add_to_cart(test_product(1, 12999));
        store.add_to_cart(test_product(2, 79999));

        let quantities: Vec<(u32, u32)> = store
            .entries()
            .iter()
            .map(|e| (e.product.id.value(), e.quantity))
            .collect();
        assert_eq!(quantities, vec![(1, 2), (2, 1)]);
        assert_eq!(store.total_items(), 3);
        assert_eq!(store.total_price(), 2 * 12999 + 79999);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut store = empty_store();
        store.add_to_cart(test_product(1, 100));
        store.add_to_cart(test_product(2, 200));

        store.remove_from_cart(ProductId::new(1));
        let after_first = store.view();

        store.remove_from_cart(ProductId::new(1));
        assert_eq!(store.view(), after_first);
        assert_eq!(store.entries().len(), 1);
    }

    #[test]
    fn update_to_zero_equals_remove() {
        let mut removed = empty_store();
        removed.add_to_cart(test_product(1, 100));
        removed.add_to_cart(test_product(2, 200));
        removed.remove_from_cart(ProductId::new(1));

        let mut updated = empty_store();
        updated.add_to_cart(test_product(1, 100));
        updated.add_to_cart(test_product(2, 200));
        updated.update_quantity(ProductId::new(1), 0);

        assert_eq!(updated.entries(), removed.entries());
    }

    #[test]
    fn negative_quantity_removes_the_entry() {
        let mut store = empty_store();
        store.add_to_cart(test_product(1, 100));
        store.update_quantity(ProductId::new(1), 3);
        assert_eq!(store.entries()[0].quantity, 3);

        store.update_quantity(ProductId::new(1), -1);
        assert!(store.entries().is_empty());
    }

    #[test]
    fn update_on_absent_entry_is_a_no_op_not_an_insert() {
        let mut store = empty_store();
        store.add_to_cart(test_product(1, 100));

        store.update_quantity(ProductId::new(99), 5);
        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.entries()[0].product.id, ProductId::new(1));
    }

    #[test]
    fn clear_cart_leaves_visibility_alone() {
        let mut store = empty_store();
        store.add_to_cart(test_product(1, 100));
        store.toggle_visibility();
        assert!(store.is_open());

        store.clear_cart();
        assert!(store.entries().is_empty());
        assert_eq!(store.total_items(), 0);
        assert_eq!(store.total_price(), 0);
        assert!(store.is_open());
    }

    #[test]
    fn toggle_flips_without_touching_entries() {
        let mut store = empty_store();
        store.add_to_cart(test_product(1, 100));

        assert!(!store.is_open());
        store.toggle_visibility();
        assert!(store.is_open());
        store.toggle_visibility();
        assert!(!store.is_open());
        assert_eq!(store.entries().len(), 1);
    }

    #[test]
    fn hydration_round_trips_entries_in_order() {
        let slot = Arc::new(InMemorySnapshotStore::new());

        let mut store = CartStore::new(Box::new(Arc::clone(&slot)));
        store.add_to_cart(test_product(3, 300));
        store.add_to_cart(test_product(1, 100));
        store.add_to_cart(test_product(1, 100));
        let before = store.entries().to_vec();

        let rehydrated = CartStore::new(Box::new(Arc::clone(&slot)));
        assert_eq!(rehydrated.entries(), before.as_slice());
    }

    #[test]
    fn corrupt_snapshot_degrades_to_empty_cart() {
        let slot = InMemorySnapshotStore::with_contents("{not json at all");
        let store = CartStore::new(Box::new(slot));
        assert!(store.entries().is_empty());
    }

    #[test]
    fn snapshot_does_not_carry_visibility() {
        let slot = Arc::new(InMemorySnapshotStore::new());

        let mut store = CartStore::new(Box::new(Arc::clone(&slot)));
        store.add_to_cart(test_product(1, 100));
        store.toggle_visibility();
        assert!(store.is_open());

        let rehydrated = CartStore::new(Box::new(Arc::clone(&slot)));
        assert!(!rehydrated.is_open());
        assert_eq!(rehydrated.entries().len(), 1);
    }

    #[test]
    fn visibility_toggle_does_not_write_the_slot() {
        let slot = Arc::new(InMemorySnapshotStore::new());
        let mut store = CartStore::new(Box::new(Arc::clone(&slot)));

        store.toggle_visibility();
        assert!(slot.contents().is_none());

        store.add_to_cart(test_product(1, 100));
        assert!(slot.contents().is_some());
    }

    #[test]
    fn subscribers_see_every_committed_mutation() {
        let mut store = empty_store();
        let (initial, sub) = store.subscribe();
        assert!(initial.is_empty());
        assert!(!initial.is_open);

        store.add_to_cart(test_product(1, 100));
        let after_add = sub.try_recv().unwrap();
        assert_eq!(after_add.total_items, 1);
        assert_eq!(after_add.total_price, 100);

        store.toggle_visibility();
        let after_toggle = sub.try_recv().unwrap();
        assert!(after_toggle.is_open);
        assert_eq!(after_toggle.entries, after_add.entries);
    }

    #[test]
    fn dropped_subscriber_does_not_wedge_publishing() {
        let mut store = empty_store();
        let (_, sub) = store.subscribe();
        drop(sub);

        store.add_to_cart(test_product(1, 100));
        assert_eq!(store.total_items(), 1);

        let (_, live) = store.subscribe();
        store.add_to_cart(test_product(1, 100));
        assert_eq!(live.try_recv().unwrap().total_items, 2);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add(u32),
            Remove(u32),
            Update(u32, i64),
            Clear,
            Toggle,
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                (1u32..6).prop_map(Op::Add),
                (1u32..6).prop_map(Op::Remove),
                ((1u32..6), -2i64..10).prop_map(|(id, q)| Op::Update(id, q)),
                Just(Op::Clear),
                Just(Op::Toggle),
            ]
        }

        fn apply(store: &mut CartStore, op: &Op) {
            match op {
                Op::Add(id) => store.add_to_cart(test_product(*id, u64::from(*id) * 100)),
                Op::Remove(id) => store.remove_from_cart(ProductId::new(*id)),
                Op::Update(id, q) => store.update_quantity(ProductId::new(*id), *q),
                Op::Clear => store.clear_cart(),
                Op::Toggle => store.toggle_visibility(),
            }
        }

        proptest! {
            /// Property: totals always equal the sums recomputed from entries.
            #[test]
            fn totals_match_entry_sums(ops in proptest::collection::vec(op_strategy(), 0..40)) {
                let mut store = empty_store();
                for op in &ops {
                    apply(&mut store, op);

                    let expected_price: u64 = store
                        .entries()
                        .iter()
                        .map(|e| e.product.price * u64::from(e.quantity))
                        .sum();
                    let expected_items: u64 =
                        store.entries().iter().map(|e| u64::from(e.quantity)).sum();

                    prop_assert_eq!(store.total_price(), expected_price);
                    prop_assert_eq!(store.total_items(), expected_items);
                }
            }

            /// Property: no duplicate product ids, no zero quantities, ever.
            #[test]
            fn entries_stay_unique_and_positive(ops in proptest::collection::vec(op_strategy(), 0..40)) {
                let mut store = empty_store();
                for op in &ops {
                    apply(&mut store, op);

                    let mut ids: Vec<_> =
                        store.entries().iter().map(|e| e.product.id).collect();
                    ids.sort();
                    let len_before = ids.len();
                    ids.dedup();
                    prop_assert_eq!(ids.len(), len_before);

                    prop_assert!(store.entries().iter().all(|e| e.quantity >= 1));
                }
            }

            /// Property: hydrating from the persisted slot reproduces the entry list.
            #[test]
            fn snapshot_round_trips_after_any_sequence(ops in proptest::collection::vec(op_strategy(), 1..30)) {
                let slot = Arc::new(InMemorySnapshotStore::new());
                let mut store = CartStore::new(Box::new(Arc::clone(&slot)));
                for op in &ops {
                    apply(&mut store, op);
                }

                let rehydrated = CartStore::new(Box::new(Arc::clone(&slot)));
                prop_assert_eq!(rehydrated.entries(), store.entries());
                prop_assert!(!rehydrated.is_open());
            }
        }
    }
}
