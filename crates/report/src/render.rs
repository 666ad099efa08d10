//! Report rendering
//!
//! Totals are rounded to cents here and nowhere else. Both text and JSON
//! output go through `round_to_cents`, so half-cent ties round away from zero.

use serde::Serialize;
use subcalc_billing::{round_to_cents, BatchSummary, BillingOutcome};

pub fn render_line(outcome: &BillingOutcome) -> String {
    match outcome {
        BillingOutcome::Billed { id, total } => {
            format!("Subscriber {}: ${:.2}", id, round_to_cents(*total))
        }
        BillingOutcome::ValidationFailed { id, error } => {
            format!("Validation failed for {}: {}", id, error)
        }
        BillingOutcome::Rejected { index, error, .. } => {
            format!("Rejected record #{}: {}", index, error)
        }
    }
}

pub fn render_text(summary: &BatchSummary) -> String {
    summary
        .outcomes
        .iter()
        .map(render_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// JSON view of a batch with every amount rounded to cents
#[derive(Debug, Serialize)]
struct RoundedSummary {
    outcomes: Vec<BillingOutcome>,
    billed: usize,
    failed: usize,
    rejected: usize,
    grand_total: f64,
}

pub fn render_json(summary: &BatchSummary) -> anyhow::Result<String> {
    let outcomes: Vec<BillingOutcome> = summary
        .outcomes
        .iter()
        .cloned()
        .map(|outcome| match outcome {
            BillingOutcome::Billed { id, total } => BillingOutcome::Billed {
                id,
                total: round_to_cents(total),
            },
            other => other,
        })
        .collect();

    let rounded = RoundedSummary {
        outcomes,
        billed: summary.billed,
        failed: summary.failed,
        rejected: summary.rejected,
        grand_total: round_to_cents(summary.grand_total),
    };

    Ok(serde_json::to_string_pretty(&rounded)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::sample_records;
    use subcalc_billing::{BillingService, SubscriberRecord, SubscriptionStatus};

    #[test]
    fn test_render_sample_batch() {
        let summary = BillingService::new().bill_batch(sample_records());

        assert_eq!(
            render_text(&summary),
            "Subscriber A-1: $0.00\nSubscriber B-2: $19.77\nSubscriber C-3: $7.86"
        );
    }

    #[test]
    fn test_half_cent_totals_round_up_in_both_formats() {
        let records = vec![
            SubscriberRecord::new("T-1", "", SubscriptionStatus::Basic, 0, 1, 0.125),
            SubscriberRecord::new("T-2", "", SubscriptionStatus::Student, 0, 1, 4.25),
        ];
        let summary = BillingService::new().bill_batch(records);

        assert_eq!(
            render_text(&summary),
            "Subscriber T-1: $0.13\nSubscriber T-2: $2.13"
        );

        let json: serde_json::Value = serde_json::from_str(&render_json(&summary).unwrap()).unwrap();
        assert_eq!(json["outcomes"][0]["total"], 0.13);
        assert_eq!(json["outcomes"][1]["total"], 2.13);
    }

    #[test]
    fn test_render_failures() {
        let failed = BillingOutcome::ValidationFailed {
            id: "P-1".to_string(),
            error: "Price < 0".to_string(),
        };
        assert_eq!(render_line(&failed), "Validation failed for P-1: Price < 0");

        let rejected = BillingOutcome::Rejected {
            index: 4,
            id: None,
            error: "Subscriber id is required".to_string(),
        };
        assert_eq!(
            render_line(&rejected),
            "Rejected record #4: Subscriber id is required"
        );
    }

    #[test]
    fn test_render_json_rounds_totals() {
        let summary = BillingService::new().bill_batch(sample_records());
        let json: serde_json::Value = serde_json::from_str(&render_json(&summary).unwrap()).unwrap();

        assert_eq!(json["billed"], 3);
        assert_eq!(json["outcomes"][1]["total"], 19.77);
        assert_eq!(json["outcomes"][2]["total"], 7.86);
        assert_eq!(json["grand_total"], 27.63);
    }
}
