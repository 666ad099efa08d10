//! Subscriber entity
//!
//! A `Subscriber` is the validated, immutable record the pricing pipeline
//! works on. Raw input from a data source arrives as a [`SubscriberRecord`]
//! whose fields may be missing, and is promoted through `TryFrom`.

use serde::{Deserialize, Serialize};

use crate::error::{BillingError, BillingResult};

/// Subscription tier, which decides discount eligibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Free trial, billed nothing before surcharges
    Trial,
    /// Standard plan, full price
    Basic,
    /// Pro plan, discounted by tenure
    Pro,
    /// Student plan, half price
    Student,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Trial => "trial",
            SubscriptionStatus::Basic => "basic",
            SubscriptionStatus::Pro => "pro",
            SubscriptionStatus::Student => "student",
        }
    }
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Billing-relevant attributes of one subscriber
///
/// Fields are private: once built, a subscriber cannot be changed, and
/// `base_price` is never negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subscriber {
    id: String,
    region: String,
    status: SubscriptionStatus,
    tenure_months: i32,
    devices: i32,
    base_price: f64,
}

impl Subscriber {
    /// Build a subscriber, rejecting a blank id or a negative base price.
    ///
    /// The region may be any string, including the empty string, which
    /// simply falls into the untaxed branch.
    pub fn new(
        id: impl Into<String>,
        region: impl Into<String>,
        status: SubscriptionStatus,
        tenure_months: i32,
        devices: i32,
        base_price: f64,
    ) -> BillingResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(BillingError::MissingId);
        }

        if base_price.is_nan() || base_price < 0.0 {
            return Err(BillingError::NegativeBasePrice(base_price));
        }

        Ok(Self {
            id,
            region: region.into(),
            status,
            tenure_months,
            devices,
            base_price,
        })
    }

    /// Bypasses construction checks so tests can reach defensive branches
    #[cfg(test)]
    pub(crate) fn unchecked(
        id: &str,
        region: &str,
        status: SubscriptionStatus,
        tenure_months: i32,
        devices: i32,
        base_price: f64,
    ) -> Self {
        Self {
            id: id.to_string(),
            region: region.to_string(),
            status,
            tenure_months,
            devices,
            base_price,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn status(&self) -> SubscriptionStatus {
        self.status
    }

    pub fn tenure_months(&self) -> i32 {
        self.tenure_months
    }

    pub fn devices(&self) -> i32 {
        self.devices
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }
}

/// Unvalidated subscriber as supplied by a data source (file, API, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriberRecord {
    pub id: Option<String>,
    pub region: Option<String>,
    pub status: SubscriptionStatus,
    #[serde(default)]
    pub tenure_months: i32,
    #[serde(default)]
    pub devices: i32,
    pub base_price: f64,
}

impl SubscriberRecord {
    pub fn new(
        id: &str,
        region: &str,
        status: SubscriptionStatus,
        tenure_months: i32,
        devices: i32,
        base_price: f64,
    ) -> Self {
        Self {
            id: Some(id.to_string()),
            region: Some(region.to_string()),
            status,
            tenure_months,
            devices,
            base_price,
        }
    }
}

impl TryFrom<SubscriberRecord> for Subscriber {
    type Error = BillingError;

    fn try_from(record: SubscriberRecord) -> Result<Self, Self::Error> {
        let id = record.id.ok_or(BillingError::MissingId)?;
        if id.trim().is_empty() {
            return Err(BillingError::MissingId);
        }
        let region = record.region.ok_or(BillingError::MissingRegion)?;

        Subscriber::new(
            id,
            region,
            record.status,
            record.tenure_months,
            record.devices,
            record.base_price,
        )
    }
}
