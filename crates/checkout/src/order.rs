//! Order placement: gate, simulated processing, receipt.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopfront_cart::CartStore;
use shopfront_core::{DomainError, DomainResult, OrderId};

use crate::form::CheckoutForm;

/// How long the fake payment processor "works" before confirming.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_secs(2);

/// Confirmation returned for a successfully placed order.
///
/// Totals are captured before the cart is cleared; the order id is a
/// time-ordered UUID, the closest thing this demo has to an order number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: OrderId,
    pub total_items: u64,
    pub total_price: u64,
    pub placed_at: DateTime<Utc>,
}

/// Simulated checkout processor.
#[derive(Debug, Clone)]
pub struct Checkout {
    processing_delay: Duration,
}

impl Checkout {
    pub fn new() -> Self {
        Self {
            processing_delay: DEFAULT_PROCESSING_DELAY,
        }
    }

    /// Override the processing delay (tests pass `Duration::ZERO`).
    pub fn with_delay(processing_delay: Duration) -> Self {
        Self { processing_delay }
    }

    /// Place an order for the cart's current contents.
    ///
    /// An empty cart cannot be checked out, and the form must pass its
    /// required-fields check. On success the processing delay elapses in
    /// full (fixed-duration, non-cancelable), a receipt is issued, and the
    /// cart is cleared.
    pub fn place_order(
        &self,
        store: &mut CartStore,
        form: &CheckoutForm,
    ) -> DomainResult<OrderReceipt> {
        if store.entries().is_empty() {
            return Err(DomainError::invariant("cannot check out an empty cart"));
        }
        form.validate()?;

        std::thread::sleep(self.processing_delay);

        let receipt = OrderReceipt {
            order_id: OrderId::new(),
            total_items: store.total_items(),
            total_price: store.total_price(),
            placed_at: Utc::now(),
        };

        tracing::info!(
            order_id = %receipt.order_id,
            total_price = receipt.total_price,
            "order placed"
        );
        store.clear_cart();

        Ok(receipt)
    }
}

impl Default for Checkout {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_cart::InMemorySnapshotStore;

    fn instant_checkout() -> Checkout {
        Checkout::with_delay(Duration::ZERO)
    }

    #[test]
    fn empty_cart_cannot_be_checked_out() {
        let mut store = CartStore::new(Box::new(InMemorySnapshotStore::new()));
        let err = instant_checkout()
            .place_order(&mut store, &CheckoutForm::default())
            .unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) => assert!(msg.contains("empty cart")),
            _ => panic!("Expected InvariantViolation for empty cart"),
        }
    }

    #[test]
    fn default_checkout_uses_the_fixed_delay() {
        assert_eq!(Checkout::new().processing_delay, DEFAULT_PROCESSING_DELAY);
    }
}
