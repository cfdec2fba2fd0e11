//! Final fixed-shape metrics report

use serde::{Deserialize, Serialize};

/// Complete analytics output for one simulation
///
/// Created fresh per invocation. The benchmark-relative fields are
/// `None` (JSON null) when no benchmark was supplied; every other
/// field falls back to 0.0 on insufficient data rather than being
/// omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Total return over the full window, percent
    pub total_return: f64,
    /// Annualized return, percent
    pub annual_return: f64,
    /// Benchmark total return, percent
    pub benchmark_total_return: Option<f64>,
    /// Benchmark annualized return, percent
    pub benchmark_annual_return: Option<f64>,
    /// Maximum peak-to-trough decline, percent
    pub max_drawdown: f64,
    /// Annualized volatility, percent
    pub volatility: f64,
    /// Annualized excess return per unit of volatility
    pub sharpe_ratio: f64,
    /// Annualized excess return over the beta-implied benchmark
    /// return, percent
    pub alpha: Option<f64>,
    /// Sensitivity of strategy returns to benchmark returns
    pub beta: Option<f64>,
    /// Percentage of realized trades with positive profit
    pub win_rate: f64,
    /// Mean winning profit over mean absolute losing profit
    pub profit_loss_ratio: f64,
    /// Number of realized buy/sell pairs
    pub total_trades: u64,
}
