//! Batch billing
//!
//! Bills a list of raw subscriber records in order. A record that cannot be
//! built or fails validation is reported and skipped; it never stops the
//! remainder of the batch.

use serde::Serialize;

use crate::pricing::calculate_total;
use crate::subscriber::{Subscriber, SubscriberRecord};
use crate::validation::validate;

/// Result of billing one record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BillingOutcome {
    /// Total computed at full precision
    Billed { id: String, total: f64 },
    /// Subscriber was built but did not pass validation
    ValidationFailed { id: String, error: String },
    /// Record could not be turned into a subscriber
    Rejected {
        index: usize,
        id: Option<String>,
        error: String,
    },
}

impl BillingOutcome {
    pub fn total(&self) -> Option<f64> {
        match self {
            BillingOutcome::Billed { total, .. } => Some(*total),
            _ => None,
        }
    }
}

/// Summary of a batch run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    /// One entry per input record, in input order
    pub outcomes: Vec<BillingOutcome>,
    pub billed: usize,
    pub failed: usize,
    pub rejected: usize,
    /// Sum of billed totals at full precision
    pub grand_total: f64,
}

pub(crate) fn bill_records<I>(records: I) -> BatchSummary
where
    I: IntoIterator<Item = SubscriberRecord>,
{
    let outcomes: Vec<BillingOutcome> = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| bill_record(index, record))
        .collect();

    let billed = outcomes
        .iter()
        .filter(|o| matches!(o, BillingOutcome::Billed { .. }))
        .count();
    let failed = outcomes
        .iter()
        .filter(|o| matches!(o, BillingOutcome::ValidationFailed { .. }))
        .count();
    let rejected = outcomes
        .iter()
        .filter(|o| matches!(o, BillingOutcome::Rejected { .. }))
        .count();
    let grand_total: f64 = outcomes.iter().filter_map(BillingOutcome::total).sum();

    tracing::info!(
        billed = billed,
        failed = failed,
        rejected = rejected,
        grand_total = grand_total,
        "Billing batch complete"
    );

    BatchSummary {
        outcomes,
        billed,
        failed,
        rejected,
        grand_total,
    }
}

fn bill_record(index: usize, record: SubscriberRecord) -> BillingOutcome {
    let record_id = record.id.clone();

    let subscriber = match Subscriber::try_from(record) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(
                index = index,
                subscriber_id = ?record_id,
                error = %e,
                "Rejected subscriber record"
            );
            return BillingOutcome::Rejected {
                index,
                id: record_id,
                error: e.to_string(),
            };
        }
    };

    let validation = validate(Some(&subscriber));
    if !validation.is_ok() {
        tracing::warn!(
            subscriber_id = %subscriber.id(),
            error = %validation.error,
            "Subscriber failed validation"
        );
        return BillingOutcome::ValidationFailed {
            id: subscriber.id().to_string(),
            error: validation.error,
        };
    }

    let total = calculate_total(&subscriber);
    tracing::debug!(
        subscriber_id = %subscriber.id(),
        status = %subscriber.status(),
        total = total,
        "Billed subscriber"
    );

    BillingOutcome::Billed {
        id: subscriber.id().to_string(),
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscriber::SubscriptionStatus;

    // `ValidationFailed` cannot come out of `bill_records`: every record that
    // builds a `Subscriber` already satisfies `validate`. The variant keeps
    // batch results in step with the validate contract; its rendering is
    // covered in the report crate.

    #[test]
    fn test_empty_batch() {
        let summary = bill_records(Vec::<SubscriberRecord>::new());
        assert!(summary.outcomes.is_empty());
        assert_eq!(summary.grand_total, 0.0);
    }

    #[test]
    fn test_bad_record_does_not_halt_batch() {
        let records = vec![
            SubscriberRecord::new("A-1", "EU", SubscriptionStatus::Basic, 0, 1, 10.0),
            SubscriberRecord::new(" ", "EU", SubscriptionStatus::Basic, 0, 1, 10.0),
            SubscriberRecord::new("C-3", "US", SubscriptionStatus::Basic, 0, 1, -4.0),
            SubscriberRecord::new("D-4", "", SubscriptionStatus::Basic, 0, 1, 10.0),
        ];

        let summary = bill_records(records);

        assert_eq!(summary.outcomes.len(), 4);
        assert_eq!(summary.billed, 2);
        assert_eq!(summary.rejected, 2);
        assert_eq!(summary.failed, 0);
        assert!((summary.grand_total - (12.1 + 10.0)).abs() < 1e-9);

        match &summary.outcomes[1] {
            BillingOutcome::Rejected { index, id, error } => {
                assert_eq!(*index, 1);
                assert_eq!(id.as_deref(), Some(" "));
                assert_eq!(error, "Subscriber id is required");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert!(matches!(
            &summary.outcomes[2],
            BillingOutcome::Rejected { index: 2, .. }
        ));
    }

    #[test]
    fn test_outcome_serializes_with_tag() {
        let outcome = BillingOutcome::Billed {
            id: "A-1".to_string(),
            total: 0.0,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "billed");
        assert_eq!(json["id"], "A-1");
    }

    #[test]
    fn test_constructed_records_always_pass_validation() {
        let records = vec![
            SubscriberRecord::new("V-1", "EU", SubscriptionStatus::Pro, 30, 5, 0.0),
            SubscriberRecord::new("V-2", "", SubscriptionStatus::Trial, -3, -1, 1e9),
            SubscriberRecord::new("  ", "US", SubscriptionStatus::Basic, 0, 0, 1.0),
        ];

        let summary = bill_records(records);

        assert_eq!(summary.failed, 0);
        assert_eq!(summary.billed + summary.rejected, summary.outcomes.len());
        assert!(!summary
            .outcomes
            .iter()
            .any(|o| matches!(o, BillingOutcome::ValidationFailed { .. })));
    }
}
