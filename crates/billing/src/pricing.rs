//! Pricing Pipeline
//!
//! A subscriber's total is produced by three stages, each consuming the
//! previous stage's output:
//!
//! 1. **Status discount** on the base price
//! 2. **Device surcharge** when more than [`INCLUDED_DEVICES`] are registered
//! 3. **Regional tax** (see [`crate::tax`])
//!
//! All stages work at full `f64` precision. Rounding to cents is a
//! presentation concern handled by [`round_to_cents`].

use serde::Serialize;

use crate::subscriber::{Subscriber, SubscriptionStatus};
use crate::tax::TaxRegion;

/// Student plans pay half price
pub const STUDENT_DISCOUNT_MULTIPLIER: f64 = 0.5;

/// Pro plans at or beyond [`PRO_LOYALTY_MONTHS`] of tenure
pub const PRO_LOYALTY_MULTIPLIER: f64 = 0.85;

/// Pro plans at or beyond [`PRO_TENURE_MONTHS`] of tenure
pub const PRO_TENURE_MULTIPLIER: f64 = 0.90;

pub const PRO_LOYALTY_MONTHS: i32 = 24;
pub const PRO_TENURE_MONTHS: i32 = 12;

/// Flat fee added for each billing period once devices exceed the allowance
pub const DEVICE_SURCHARGE: f64 = 4.99;

/// Devices included in every plan before the surcharge applies
pub const INCLUDED_DEVICES: i32 = 3;

/// Stage 1: discount the base price by subscription status
pub fn apply_status_discount(
    status: SubscriptionStatus,
    tenure_months: i32,
    base_price: f64,
) -> f64 {
    // Guards are ordered highest threshold first
    match status {
        SubscriptionStatus::Trial => 0.0,
        SubscriptionStatus::Student => base_price * STUDENT_DISCOUNT_MULTIPLIER,
        SubscriptionStatus::Pro if tenure_months >= PRO_LOYALTY_MONTHS => {
            base_price * PRO_LOYALTY_MULTIPLIER
        }
        SubscriptionStatus::Pro if tenure_months >= PRO_TENURE_MONTHS => {
            base_price * PRO_TENURE_MULTIPLIER
        }
        SubscriptionStatus::Pro | SubscriptionStatus::Basic => base_price,
    }
}

/// Stage 2: add the flat device surcharge when over the allowance
pub fn add_device_surcharge(price: f64, devices: i32) -> f64 {
    price + device_surcharge(devices)
}

fn device_surcharge(devices: i32) -> f64 {
    if devices > INCLUDED_DEVICES {
        DEVICE_SURCHARGE
    } else {
        0.0
    }
}

/// Run the full pipeline for one subscriber
pub fn calculate_total(subscriber: &Subscriber) -> f64 {
    PriceBreakdown::for_subscriber(subscriber).total
}

/// Stage-by-stage view of one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub base_price: f64,
    /// Price after the status discount
    pub after_discount: f64,
    /// Device surcharge added (0 when within the allowance)
    pub surcharge: f64,
    /// Running price entering the tax stage
    pub pre_tax: f64,
    pub tax_region: TaxRegion,
    pub tax_multiplier: f64,
    /// `total - pre_tax`
    pub tax_amount: f64,
    pub total: f64,
}

impl PriceBreakdown {
    pub fn for_subscriber(subscriber: &Subscriber) -> Self {
        let base_price = subscriber.base_price();
        let after_discount =
            apply_status_discount(subscriber.status(), subscriber.tenure_months(), base_price);
        let surcharge = device_surcharge(subscriber.devices());
        let pre_tax = after_discount + surcharge;

        let tax_region = TaxRegion::from_region(subscriber.region());
        let tax_multiplier = tax_region.multiplier();
        let total = pre_tax * tax_multiplier;

        Self {
            base_price,
            after_discount,
            surcharge,
            pre_tax,
            tax_region,
            tax_multiplier,
            tax_amount: total - pre_tax,
            total,
        }
    }
}

/// Round to two decimal places, half away from zero
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
