//! Input data model for the analytics engine
//!
//! Everything here is produced by the external execution engine and
//! is read-only for the duration of one computation: filled orders,
//! the trading calendar, the current portfolio snapshot, and the
//! per-symbol closing price table.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Side of a filled order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderSide {
    /// Buy side (opens or adds to a long position)
    Buy,
    /// Sell side (reduces or closes a long position)
    Sell,
}

/// A completed order execution record
///
/// Immutable once created. Fills without a `fill_date` are excluded
/// from NAV replay and trade pairing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    /// Instrument identifier
    pub symbol: String,
    /// Buy or sell
    pub side: OrderSide,
    /// Filled quantity (positive)
    pub quantity: f64,
    /// Filled price (positive)
    pub price: f64,
    /// Commission charged on the fill
    #[serde(default)]
    pub commission: f64,
    /// Transaction tax charged on the fill
    #[serde(default)]
    pub tax: f64,
    /// Slippage cost attributed to the fill
    #[serde(default)]
    pub slippage: f64,
    /// All-in cash outlay, populated by the execution engine on buys
    #[serde(default)]
    pub total_cost: Option<f64>,
    /// Calendar date the order was filled
    #[serde(default)]
    pub fill_date: Option<NaiveDate>,
}

impl Fill {
    /// Cash debited by a buy fill. Falls back to notional plus fees
    /// when the execution engine did not populate `total_cost`.
    #[must_use]
    pub fn buy_cost(&self) -> f64 {
        self.total_cost.unwrap_or_else(|| {
            self.quantity * self.price + self.commission + self.tax + self.slippage
        })
    }

    /// Cash credited by a sell fill, net of fees.
    #[must_use]
    pub fn sell_proceeds(&self) -> f64 {
        self.quantity * self.price - self.commission - self.tax - self.slippage
    }
}

/// Current portfolio state, read at valuation time
///
/// Owned by the external engine. The replay applies this one
/// snapshot uniformly across all historical dates; it does not
/// rebuild per-date position history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    /// Current cash balance
    pub cash: f64,
    /// Held quantity per symbol
    #[serde(default)]
    pub positions: FxHashMap<String, f64>,
}

/// Daily closing bar. Only the close participates in valuation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosingBar {
    /// Closing price for the day
    pub close: f64,
}

/// Sparse symbol/date close table
///
/// A missing (symbol, date) entry means "no mark available", never
/// zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    bars: FxHashMap<String, BTreeMap<NaiveDate, ClosingBar>>,
}

impl PriceTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a closing price for one symbol and date
    pub fn insert(&mut self, symbol: &str, date: NaiveDate, close: f64) {
        self.bars
            .entry(symbol.to_string())
            .or_default()
            .insert(date, ClosingBar { close });
    }

    /// Closing price for a symbol on a date, if one was recorded
    #[must_use]
    pub fn close(&self, symbol: &str, date: NaiveDate) -> Option<f64> {
        self.bars
            .get(symbol)
            .and_then(|series| series.get(&date))
            .map(|bar| bar.close)
    }
}

/// One finished simulation, fully materialized in memory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BacktestRecord {
    /// Chronological record of filled orders
    #[serde(default, alias = "filled_orders")]
    pub fills: Vec<Fill>,
    /// Ordered, duplicate-free valuation calendar
    #[serde(default)]
    pub trading_dates: Vec<NaiveDate>,
    /// Current portfolio snapshot
    #[serde(default)]
    pub portfolio: PortfolioSnapshot,
    /// Per-symbol closing prices
    #[serde(default)]
    pub price_data: PriceTable,
    /// Raw benchmark index levels by date, if a benchmark was run
    #[serde(default)]
    pub benchmark_data: Option<BTreeMap<NaiveDate, f64>>,
}

/// Input contract violations surfaced at the aggregator seam
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    /// Calendar dates must be strictly ascending
    #[error("trading calendar is not in ascending order at index {0}")]
    UnorderedCalendar(usize),
    /// Calendar dates must be unique
    #[error("trading calendar contains duplicate date {0}")]
    DuplicateDate(NaiveDate),
}

impl BacktestRecord {
    /// Check the trading calendar contract. The NAV series is keyed
    /// by calendar order and must be strictly date-ordered.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        for (i, pair) in self.trading_dates.windows(2).enumerate() {
            if pair[1] == pair[0] {
                return Err(ScenarioError::DuplicateDate(pair[1]));
            }
            if pair[1] < pair[0] {
                return Err(ScenarioError::UnorderedCalendar(i + 1));
            }
        }
        Ok(())
    }
}
