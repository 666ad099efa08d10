// Test code patterns (expected in test files):
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Subcalc Billing Module
//!
//! Computes a subscriber's billing total from their subscription tier,
//! tenure, device count, base price and region.
//!
//! ## Features
//!
//! - **Subscribers**: Immutable, validated subscriber records
//! - **Status Discounts**: Trial, Student and tenure-tiered Pro pricing
//! - **Device Surcharge**: Flat fee above the included device allowance
//! - **Regional Tax**: EU and US tax multipliers
//! - **Batch Billing**: Bill many records, skipping bad ones

pub mod batch;
pub mod error;
pub mod pricing;
pub mod subscriber;
pub mod tax;
pub mod validation;


// Batch
pub use batch::{BatchSummary, BillingOutcome};

// Error
pub use error::{BillingError, BillingResult, ErrorKind};

// Pricing
pub use pricing::{
    add_device_surcharge, apply_status_discount, round_to_cents, PriceBreakdown,
    DEVICE_SURCHARGE, INCLUDED_DEVICES,
};

// Subscriber
pub use subscriber::{Subscriber, SubscriberRecord, SubscriptionStatus};

// Tax
pub use tax::{apply_tax, TaxRegion};

// Validation
pub use validation::ValidationResult;

/// Stateless billing service
///
/// Holds no state, so one instance can be shared freely or created per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BillingService;

impl BillingService {
    pub fn new() -> Self {
        Self
    }

    /// Validate a possibly-absent subscriber. Never fails; the outcome is data.
    pub fn validate(&self, subscriber: Option<&Subscriber>) -> ValidationResult {
        validation::validate(subscriber)
    }

    /// Compute the total charge at full precision.
    ///
    /// Callers are expected to [`validate`](Self::validate) first; this does
    /// not re-validate and only rejects an absent subscriber.
    pub fn calc_total(&self, subscriber: Option<&Subscriber>) -> BillingResult<f64> {
        let subscriber = subscriber.ok_or(BillingError::NoSubscriber)?;
        Ok(self.total(subscriber))
    }

    pub fn total(&self, subscriber: &Subscriber) -> f64 {
        pricing::calculate_total(subscriber)
    }

    /// Per-stage breakdown of the total
    pub fn quote(&self, subscriber: &Subscriber) -> PriceBreakdown {
        PriceBreakdown::for_subscriber(subscriber)
    }

    /// Build, validate and bill each record in order
    pub fn bill_batch<I>(&self, records: I) -> BatchSummary
    where
        I: IntoIterator<Item = SubscriberRecord>,
    {
        batch::bill_records(records)
    }
}
