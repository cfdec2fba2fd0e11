//! Benchmark regression attribution
//!
//! Beta measures co-movement with the benchmark (covariance over
//! benchmark variance); alpha is the annualized excess return left
//! over after the beta-implied benchmark return.

use crate::returns::ReturnPoint;
use crate::risk;
use chrono::NaiveDate;
use rustc_hash::FxHashMap;

/// Compute (alpha, beta) for a strategy return series against a
/// benchmark return series.
///
/// The two series are inner-joined by date; rows carrying a
/// non-finite value on either side are discarded. Fewer than two
/// aligned rows resolve to (0.0, 0.0).
#[must_use]
pub fn alpha_beta(
    strategy: &[ReturnPoint],
    benchmark: &[ReturnPoint],
    risk_free_rate: f64,
) -> (f64, f64) {
    let benchmark_by_date: FxHashMap<NaiveDate, f64> = benchmark
        .iter()
        .filter(|r| r.value.is_finite())
        .map(|r| (r.date, r.value))
        .collect();

    let mut strategy_aligned = Vec::new();
    let mut benchmark_aligned = Vec::new();
    for point in strategy {
        if !point.value.is_finite() {
            continue;
        }
        if let Some(&value) = benchmark_by_date.get(&point.date) {
            strategy_aligned.push(*point);
            benchmark_aligned.push(ReturnPoint {
                date: point.date,
                value,
            });
        }
    }

    if strategy_aligned.len() < 2 {
        return (0.0, 0.0);
    }

    let beta = beta_of(&strategy_aligned, &benchmark_aligned);
    let strategy_annual = risk::annualized_return_fraction(&strategy_aligned);
    let benchmark_annual = risk::annualized_return_fraction(&benchmark_aligned);
    let alpha =
        (strategy_annual - (risk_free_rate + beta * (benchmark_annual - risk_free_rate))) * 100.0;

    (alpha, beta)
}

/// Cov(strategy, benchmark) / Var(benchmark) over aligned rows,
/// zero when the benchmark shows no variance.
fn beta_of(strategy: &[ReturnPoint], benchmark: &[ReturnPoint]) -> f64 {
    let n = strategy.len() as f64;
    let strategy_mean = strategy.iter().map(|r| r.value).sum::<f64>() / n;
    let benchmark_mean = benchmark.iter().map(|r| r.value).sum::<f64>() / n;

    let covariance = strategy
        .iter()
        .zip(benchmark)
        .map(|(s, b)| (s.value - strategy_mean) * (b.value - benchmark_mean))
        .sum::<f64>()
        / n;

    let variance = benchmark
        .iter()
        .map(|b| (b.value - benchmark_mean).powi(2))
        .sum::<f64>()
        / n;

    if variance > 0.0 {
        covariance / variance
    } else {
        0.0
    }
}
