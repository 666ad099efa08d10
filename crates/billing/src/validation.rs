//! Subscriber validation
//!
//! Validation never fails fatally: it reports a pass/fail flag plus a
//! human-readable reason so batch callers can skip a bad record and carry on.

use serde::Serialize;

use crate::subscriber::Subscriber;

pub const NO_SUBSCRIBER: &str = "No subscriber";
pub const ID_MISSING: &str = "Id missing";
pub const NEGATIVE_PRICE: &str = "Price < 0";

/// Outcome of validating one subscriber
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub ok: bool,
    /// Empty when `ok` is true
    pub error: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            ok: true,
            error: String::new(),
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    pub fn into_parts(self) -> (bool, String) {
        (self.ok, self.error)
    }
}

/// Check a possibly-absent subscriber: presence, then id, then price.
///
/// The price check repeats a construction invariant and cannot fail for a
/// subscriber built through [`Subscriber::new`].
pub fn validate(subscriber: Option<&Subscriber>) -> ValidationResult {
    let Some(subscriber) = subscriber else {
        return ValidationResult::invalid(NO_SUBSCRIBER);
    };

    if subscriber.id().trim().is_empty() {
        return ValidationResult::invalid(ID_MISSING);
    }

    if subscriber.base_price() < 0.0 {
        return ValidationResult::invalid(NEGATIVE_PRICE);
    }

    ValidationResult::valid()
}
