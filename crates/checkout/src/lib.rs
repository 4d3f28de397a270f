//! Simulated checkout flow.
//!
//! There is no payment processor behind this crate: the form is decorative,
//! validation is "required fields are present", and placing an order is a
//! fixed-duration delay followed by a receipt and an emptied cart. The only
//! real rule is the gate: an empty cart cannot be checked out.

pub mod form;
pub mod order;

pub use form::CheckoutForm;
pub use order::{Checkout, OrderReceipt};
