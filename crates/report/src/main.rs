// Test code patterns:
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Subcalc Billing Report
//!
//! Bills a batch of subscribers and prints one line per subscriber:
//! - Records come from `SUBCALC_INPUT` (JSON) or the built-in samples
//! - Output is text or JSON depending on `SUBCALC_OUTPUT`
//! - Logs go to stderr, filtered by `RUST_LOG`

mod config;
mod render;
mod source;

use subcalc_billing::BillingService;
use tracing::info;

use crate::config::{OutputFormat, ReportConfig};

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Subcalc report v{}", env!("CARGO_PKG_VERSION"));

    let config = ReportConfig::from_env()?;
    info!(input = ?config.input, output = ?config.output, "Configuration loaded");

    let records = match &config.input {
        Some(path) => source::load_records(path)?,
        None => source::sample_records(),
    };

    let billing = BillingService::new();
    let summary = billing.bill_batch(records);

    let report = match config.output {
        OutputFormat::Text => render::render_text(&summary),
        OutputFormat::Json => render::render_json(&summary)?,
    };
    println!("{}", report);

    Ok(())
}
