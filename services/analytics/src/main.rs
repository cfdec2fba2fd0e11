//! Analytics scenario runner
//!
//! Loads a finished-simulation scenario from a JSON file, runs one
//! batch computation, and prints the metrics report to stdout.

use analytics::{AnalyticsConfig, BacktestRecord, MetricsAggregator};
use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
struct Scenario {
    #[serde(default)]
    config: AnalyticsConfig,
    record: BacktestRecord,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: analytics <scenario.json>")?;
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read scenario file {path}"))?;
    let scenario: Scenario =
        serde_json::from_str(&raw).with_context(|| format!("Invalid scenario file {path}"))?;

    info!(
        "Loaded scenario: {} fills over {} trading dates",
        scenario.record.fills.len(),
        scenario.record.trading_dates.len()
    );

    let aggregator = MetricsAggregator::new(scenario.config);
    let report = aggregator
        .compute(&scenario.record)
        .context("Metrics computation failed")?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
