//! Backtest analytics engine
//!
//! Reconstructs a daily net-asset-value series from a finished
//! simulation's fills and closing prices, then derives return, risk,
//! benchmark attribution, and realized-trade statistics in one
//! synchronous batch pass over the in-memory inputs.
//!
//! Order matching, result persistence, and transport belong to the
//! surrounding system; this crate only consumes their outputs.

pub mod nav;
pub mod regression;
pub mod report;
pub mod returns;
pub mod risk;
pub mod trades;
pub mod types;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use nav::{NavPoint, NavReconstructor, normalize_benchmark};
pub use report::MetricsReport;
pub use returns::{ReturnPoint, simple_returns};
pub use trades::{PairingMode, Trade, TradePairingEngine};
pub use types::{BacktestRecord, Fill, OrderSide, PortfolioSnapshot, PriceTable, ScenarioError};

/// Engine configuration. Every knob is explicit; nothing is read
/// from ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Starting cash balance for NAV replay
    pub initial_capital: f64,
    /// Annual risk-free rate used by Sharpe and alpha
    pub risk_free_rate: f64,
    /// Buy/sell pairing semantics
    pub pairing_mode: PairingMode,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            initial_capital: 1_000_000.0,
            risk_free_rate: risk::DEFAULT_RISK_FREE_RATE,
            pairing_mode: PairingMode::OpenMatch,
        }
    }
}

/// Orchestrates NAV reconstruction, return derivation, risk and
/// attribution statistics, and trade pairing into one report.
#[derive(Debug, Clone)]
pub struct MetricsAggregator {
    config: AnalyticsConfig,
}

impl MetricsAggregator {
    /// Create an aggregator with the given configuration
    #[must_use]
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Run the single-pass batch computation over one finished
    /// simulation.
    ///
    /// The only failure mode is an input contract violation in the
    /// trading calendar; every degenerate numeric case inside the
    /// computation resolves to the report's neutral defaults.
    pub fn compute(&self, record: &BacktestRecord) -> Result<MetricsReport> {
        record.validate()?;
        info!(
            "Computing metrics over {} calendar dates and {} fills",
            record.trading_dates.len(),
            record.fills.len()
        );

        let reconstructor = NavReconstructor::new(self.config.initial_capital);
        let nav = reconstructor.reconstruct(
            &record.trading_dates,
            &record.fills,
            &record.portfolio.positions,
            &record.price_data,
        );
        let strategy_returns = simple_returns(&nav);

        let total_return = risk::total_return(&nav);
        let annual_return = risk::annualized_return(&strategy_returns);
        let volatility = risk::volatility(&strategy_returns);
        let max_drawdown = risk::max_drawdown(&nav);
        let sharpe_ratio =
            risk::sharpe_ratio(annual_return, volatility, self.config.risk_free_rate);

        let (benchmark_total_return, benchmark_annual_return, alpha, beta) =
            match record.benchmark_data.as_ref() {
                Some(levels) => {
                    let benchmark_nav = normalize_benchmark(levels);
                    let benchmark_returns = simple_returns(&benchmark_nav);
                    let (alpha, beta) = regression::alpha_beta(
                        &strategy_returns,
                        &benchmark_returns,
                        self.config.risk_free_rate,
                    );
                    (
                        Some(risk::total_return(&benchmark_nav)),
                        Some(risk::annualized_return(&benchmark_returns)),
                        Some(alpha),
                        Some(beta),
                    )
                }
                None => (None, None, None, None),
            };

        let pairing = TradePairingEngine::new(self.config.pairing_mode);
        let paired = pairing.pair(&record.fills);
        debug!(
            "Paired {} trades from {} fills",
            paired.len(),
            record.fills.len()
        );

        Ok(MetricsReport {
            total_return,
            annual_return,
            benchmark_total_return,
            benchmark_annual_return,
            max_drawdown,
            volatility,
            sharpe_ratio,
            alpha,
            beta,
            win_rate: trades::win_rate(&paired),
            profit_loss_ratio: trades::profit_loss_ratio(&paired),
            total_trades: paired.len() as u64,
        })
    }
}
