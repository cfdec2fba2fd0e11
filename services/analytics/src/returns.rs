//! Period-over-period simple returns

use crate::nav::NavPoint;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One point of a return series. The date is the later of the two
/// compared valuation dates, kept so benchmark alignment can join by
/// date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnPoint {
    /// Date the return was realized
    pub date: NaiveDate,
    /// Simple return over the prior period
    pub value: f64,
}

/// Derive `value[i]/value[i-1] - 1` for i >= 1.
///
/// Rows with a zero predecessor or a non-finite result are dropped;
/// fewer than two inputs yield an empty series, so the output always
/// has at most one fewer element than the input.
#[must_use]
pub fn simple_returns(series: &[NavPoint]) -> Vec<ReturnPoint> {
    if series.len() < 2 {
        return Vec::new();
    }

    series
        .windows(2)
        .filter_map(|w| {
            if w[0].value == 0.0 {
                return None;
            }
            let value = w[1].value / w[0].value - 1.0;
            value.is_finite().then_some(ReturnPoint {
                date: w[1].date,
                value,
            })
        })
        .collect()
}
