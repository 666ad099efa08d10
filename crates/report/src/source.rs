//! Subscriber data sources

use std::path::Path;

use anyhow::Context;
use subcalc_billing::{SubscriberRecord, SubscriptionStatus};

/// Built-in demonstration subscribers
pub fn sample_records() -> Vec<SubscriberRecord> {
    vec![
        SubscriberRecord::new("A-1", "EU", SubscriptionStatus::Trial, 0, 1, 9.99),
        SubscriberRecord::new("B-2", "US", SubscriptionStatus::Pro, 18, 4, 14.99),
        SubscriberRecord::new("C-3", "EU", SubscriptionStatus::Student, 6, 2, 12.99),
    ]
}

pub fn parse_records(json: &str) -> anyhow::Result<Vec<SubscriberRecord>> {
    serde_json::from_str(json).context("Subscriber input is not a JSON array of records")
}

pub fn load_records(path: &Path) -> anyhow::Result<Vec<SubscriberRecord>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read subscriber input {}", path.display()))?;
    let records = parse_records(&json)?;

    tracing::info!(
        path = %path.display(),
        count = records.len(),
        "Loaded subscriber records"
    );

    Ok(records)
}
