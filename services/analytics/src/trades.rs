//! FIFO buy/sell pairing and realized trade statistics

use crate::types::{Fill, OrderSide};
use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Whether a buy fill stays in the candidate pool after a match.
///
/// Open-match reproduces the source engine's behavior: a matched buy
/// is never removed, so one buy may satisfy any number of later
/// sells. Unique-match consumes each buy on first use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairingMode {
    /// Matched buys remain eligible for later sells
    #[default]
    OpenMatch,
    /// Each buy satisfies at most one sell
    UniqueMatch,
}

/// A realized buy/sell pair. Exists only as pairing output, never
/// persisted independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Instrument the pair was realized in
    pub symbol: String,
    /// Date of the matched buy fill
    pub buy_date: NaiveDate,
    /// Date of the sell fill
    pub sell_date: NaiveDate,
    /// `(sell_price - buy_price) * min(sell_qty, buy_qty)`
    pub profit: f64,
}

/// Pairs sell fills with prior buy fills per symbol
#[derive(Debug, Clone, Copy)]
pub struct TradePairingEngine {
    mode: PairingMode,
}

impl TradePairingEngine {
    /// Create a pairing engine with the given match mode
    #[must_use]
    pub fn new(mode: PairingMode) -> Self {
        Self { mode }
    }

    /// Pair each sell with the first recorded buy of the same symbol
    /// whose fill date is on or before the sell's date.
    ///
    /// Buy and sell fills keep their recorded order (not re-sorted
    /// by date). Fills without a date do not participate; sells with
    /// no eligible buy produce no trade. The scan is deterministic:
    /// the same fill list always yields the same trades.
    #[must_use]
    pub fn pair(&self, fills: &[Fill]) -> Vec<Trade> {
        struct BuyLot<'a> {
            fill: &'a Fill,
            date: NaiveDate,
            consumed: bool,
        }

        let mut buys: FxHashMap<&str, Vec<BuyLot<'_>>> = FxHashMap::default();
        for fill in fills {
            if fill.side == OrderSide::Buy {
                if let Some(date) = fill.fill_date {
                    buys.entry(fill.symbol.as_str()).or_default().push(BuyLot {
                        fill,
                        date,
                        consumed: false,
                    });
                }
            }
        }

        let mut trades = Vec::new();
        for sell in fills {
            if sell.side != OrderSide::Sell {
                continue;
            }
            let Some(sell_date) = sell.fill_date else {
                continue;
            };
            let Some(lots) = buys.get_mut(sell.symbol.as_str()) else {
                continue;
            };

            for lot in lots.iter_mut() {
                if lot.consumed || lot.date > sell_date {
                    continue;
                }
                let matched_qty = sell.quantity.min(lot.fill.quantity);
                trades.push(Trade {
                    symbol: sell.symbol.clone(),
                    buy_date: lot.date,
                    sell_date,
                    profit: (sell.price - lot.fill.price) * matched_qty,
                });
                if self.mode == PairingMode::UniqueMatch {
                    lot.consumed = true;
                }
                break;
            }
        }
        trades
    }
}

/// Percentage of paired trades with positive profit. Zero when no
/// trades were realized.
#[must_use]
pub fn win_rate(trades: &[Trade]) -> f64 {
    if trades.is_empty() {
        return 0.0;
    }
    let wins = trades.iter().filter(|t| t.profit > 0.0).count();
    wins as f64 / trades.len() as f64 * 100.0
}

/// Mean winning profit over mean absolute losing profit. Zero when
/// either side is empty.
#[must_use]
pub fn profit_loss_ratio(trades: &[Trade]) -> f64 {
    let wins: Vec<f64> = trades
        .iter()
        .map(|t| t.profit)
        .filter(|p| *p > 0.0)
        .collect();
    let losses: Vec<f64> = trades
        .iter()
        .map(|t| t.profit)
        .filter(|p| *p < 0.0)
        .collect();

    if wins.is_empty() || losses.is_empty() {
        return 0.0;
    }

    let avg_win = wins.iter().sum::<f64>() / wins.len() as f64;
    let avg_loss = losses.iter().map(|p| p.abs()).sum::<f64>() / losses.len() as f64;
    avg_win / avg_loss
}
