use serde::{Deserialize, Serialize};

use shopfront_core::{DomainError, DomainResult};

/// Shipping and payment details collected at checkout.
///
/// Every field is decorative: nothing is verified against a real address or
/// card network. Validation mirrors the form's `required` semantics and
/// nothing more.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub card_name: String,
    pub card_number: String,
    pub exp_date: String,
    pub cvv: String,
}

impl CheckoutForm {
    /// Check that every required field is non-blank.
    pub fn validate(&self) -> DomainResult<()> {
        let required = [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("zip_code", &self.zip_code),
            ("card_name", &self.card_name),
            ("card_number", &self.card_number),
            ("exp_date", &self.exp_date),
            ("cvv", &self.cvv),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DomainError::validation(format!("{field} is required")));
            }
        }

        Ok(())
    }
}
