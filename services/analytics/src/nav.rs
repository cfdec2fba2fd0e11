//! Daily NAV reconstruction from fills and closing prices

use crate::types::{Fill, OrderSide, PriceTable};
use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// One point of the net-asset-value series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavPoint {
    /// Valuation date
    pub date: NaiveDate,
    /// Mark-to-market portfolio value (cash + positions)
    pub value: f64,
}

/// Replays fills against an initial cash balance to produce one NAV
/// point per calendar date.
///
/// The held quantities come from the single current portfolio
/// snapshot and are applied uniformly across every date, so the
/// reconstruction is approximate for multi-day windows with position
/// changes. Symbols without a close on a given date contribute zero
/// to that day's mark.
#[derive(Debug, Clone)]
pub struct NavReconstructor {
    initial_capital: f64,
}

impl NavReconstructor {
    /// Create a reconstructor with an explicit starting cash balance
    #[must_use]
    pub fn new(initial_capital: f64) -> Self {
        Self { initial_capital }
    }

    /// Walk the calendar in ascending order, applying same-day fills
    /// in recorded order before marking positions to market.
    ///
    /// Never fails: absent price data degrades to zero contribution.
    #[must_use]
    pub fn reconstruct(
        &self,
        calendar: &[NaiveDate],
        fills: &[Fill],
        positions: &FxHashMap<String, f64>,
        prices: &PriceTable,
    ) -> Vec<NavPoint> {
        // Bucket fills by date, preserving recorded order within a day.
        let mut fills_by_date: FxHashMap<NaiveDate, Vec<&Fill>> = FxHashMap::default();
        for fill in fills {
            if let Some(date) = fill.fill_date {
                fills_by_date.entry(date).or_default().push(fill);
            }
        }

        let mut cash = self.initial_capital;
        let mut series = Vec::with_capacity(calendar.len());

        for &date in calendar {
            if let Some(day_fills) = fills_by_date.get(&date) {
                for fill in day_fills {
                    match fill.side {
                        OrderSide::Buy => cash -= fill.buy_cost(),
                        OrderSide::Sell => cash += fill.sell_proceeds(),
                    }
                }
            }

            let mark: f64 = positions
                .iter()
                .filter_map(|(symbol, qty)| prices.close(symbol, date).map(|close| qty * close))
                .sum();

            series.push(NavPoint {
                date,
                value: cash + mark,
            });
        }

        debug!(
            "Reconstructed {} NAV points, final cash {:.2}",
            series.len(),
            cash
        );
        series
    }
}

/// Rescale raw benchmark index levels so the first value is exactly
/// 1.0. A first level of zero (or non-finite) cannot anchor the
/// rescale and yields an empty series.
#[must_use]
pub fn normalize_benchmark(levels: &BTreeMap<NaiveDate, f64>) -> Vec<NavPoint> {
    let Some((_, &first)) = levels.iter().next() else {
        return Vec::new();
    };
    if first == 0.0 || !first.is_finite() {
        return Vec::new();
    }

    levels
        .iter()
        .map(|(&date, &level)| NavPoint {
            date,
            value: level / first,
        })
        .collect()
}
