//! Return and risk statistics over NAV and return series
//!
//! Every function resolves degenerate input (fewer than two points,
//! zero variance) to a neutral 0.0 instead of failing, so the final
//! report is always complete and well-typed.

use crate::nav::NavPoint;
use crate::returns::ReturnPoint;
use statrs::statistics::Statistics;

/// Annualization base for daily return series
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Default annual risk-free rate used by Sharpe and alpha
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.03;

/// Total return in percent. Requires at least two NAV points and a
/// non-zero starting value.
#[must_use]
pub fn total_return(nav: &[NavPoint]) -> f64 {
    if nav.len() < 2 {
        return 0.0;
    }
    let first = nav[0].value;
    if first == 0.0 {
        return 0.0;
    }
    (nav[nav.len() - 1].value / first - 1.0) * 100.0
}

fn compound_growth(returns: &[ReturnPoint]) -> f64 {
    returns.iter().map(|r| 1.0 + r.value).product()
}

/// Annualized return as a fraction of initial value.
///
/// A compounded growth factor of zero or below is a total loss:
/// raising it to the fractional `1/years` exponent is undefined over
/// the reals, so the result is pinned to -1.0 instead of letting NaN
/// reach the report.
pub(crate) fn annualized_return_fraction(returns: &[ReturnPoint]) -> f64 {
    if returns.is_empty() {
        return 0.0;
    }
    let years = returns.len() as f64 / TRADING_DAYS_PER_YEAR;
    let growth = compound_growth(returns);
    if growth <= 0.0 {
        return -1.0;
    }
    growth.powf(1.0 / years) - 1.0
}

/// Annualized return in percent
#[must_use]
pub fn annualized_return(returns: &[ReturnPoint]) -> f64 {
    annualized_return_fraction(returns) * 100.0
}

/// Annualized volatility in percent: sample standard deviation of
/// the return series scaled by sqrt(252).
#[must_use]
pub fn volatility(returns: &[ReturnPoint]) -> f64 {
    if returns.len() < 2 {
        return 0.0;
    }
    let values: Vec<f64> = returns.iter().map(|r| r.value).collect();
    (&values[..]).std_dev() * TRADING_DAYS_PER_YEAR.sqrt() * 100.0
}

/// Maximum peak-to-trough decline in percent, measured against the
/// running maximum of the NAV series.
#[must_use]
pub fn max_drawdown(nav: &[NavPoint]) -> f64 {
    if nav.len() < 2 {
        return 0.0;
    }

    let mut peak = f64::NEG_INFINITY;
    let mut worst = 0.0_f64;
    for point in nav {
        if point.value > peak {
            peak = point.value;
        }
        // A non-positive running peak cannot anchor a percentage decline.
        if peak > 0.0 {
            let drawdown = (point.value - peak) / peak;
            if drawdown < worst {
                worst = drawdown;
            }
        }
    }
    worst.abs() * 100.0
}

/// Annualized excess return per unit of volatility. Zero when the
/// volatility is zero (which also covers the empty return series).
#[must_use]
pub fn sharpe_ratio(annual_return_pct: f64, volatility_pct: f64, risk_free_rate: f64) -> f64 {
    if volatility_pct == 0.0 {
        return 0.0;
    }
    (annual_return_pct / 100.0 - risk_free_rate) / (volatility_pct / 100.0)
}
