//! Unit tests for return and risk statistics

use crate::test_utils::*;
use analytics::risk;
use rstest::*;

#[rstest]
#[case(&[])]
#[case(&[1_000_000.0])]
fn test_short_series_defaults_to_zero(#[case] values: &[f64]) {
    let nav = nav_series(values);

    assert_eq!(risk::total_return(&nav), 0.0);
    assert_eq!(risk::max_drawdown(&nav), 0.0);
    assert_eq!(risk::annualized_return(&[]), 0.0);
    assert_eq!(risk::volatility(&[]), 0.0);
}

#[rstest]
fn test_total_return_exact() {
    let nav = nav_series(&[100.0, 104.0, 110.0]);
    TestAssertions::assert_approx_eq(risk::total_return(&nav), 10.0, 1e-12);
}

#[rstest]
fn test_total_return_zero_start_guard() {
    let nav = nav_series(&[0.0, 110.0]);
    assert_eq!(risk::total_return(&nav), 0.0);
}

#[rstest]
fn test_max_drawdown_known_peak_to_trough() {
    // Peak 110k, trough 88k afterwards: 22k / 110k = 20%.
    let nav = nav_series(&[
        100_000.0, 105_000.0, 110_000.0, 95_000.0, 88_000.0, 95_000.0, 108_000.0,
    ]);
    TestAssertions::assert_approx_eq(risk::max_drawdown(&nav), 20.0, 1e-9);
}

#[rstest]
fn test_max_drawdown_monotonic_series_is_zero() {
    let nav = nav_series(&[100.0, 101.0, 105.0, 110.0]);
    assert_eq!(risk::max_drawdown(&nav), 0.0);
}

#[rstest]
fn test_max_drawdown_ignores_non_positive_peaks() {
    // The running peak only anchors a percentage decline once the
    // series turns positive: peak 100, trough 80.
    let nav = nav_series(&[-50.0, -20.0, 100.0, 80.0, 90.0]);
    TestAssertions::assert_approx_eq(risk::max_drawdown(&nav), 20.0, 1e-12);
}

#[rstest]
fn test_max_drawdown_all_non_positive_is_zero() {
    let nav = nav_series(&[-10.0, -50.0, -30.0, 0.0]);
    assert_eq!(risk::max_drawdown(&nav), 0.0);
}

#[rstest]
#[case(&[100.0, 90.0, 95.0, 80.0, 120.0])]
#[case(&[50.0, 200.0, 10.0, 300.0])]
#[case(&[1.0, 1.0, 1.0])]
fn test_max_drawdown_bounds_for_positive_series(#[case] values: &[f64]) {
    let drawdown = risk::max_drawdown(&nav_series(values));
    TestAssertions::assert_metric_reasonable(drawdown, "max_drawdown", 0.0, 100.0);
}

#[rstest]
fn test_annualized_return_compounds_over_years() {
    // 252 daily returns of 0.1% compound to one full year.
    let returns = return_series(&vec![0.001; 252]);
    let expected = (1.001_f64.powi(252) - 1.0) * 100.0;
    TestAssertions::assert_approx_eq(risk::annualized_return(&returns), expected, 1e-6);
}

#[rstest]
fn test_annualized_return_total_loss_is_pinned() {
    let returns = return_series(&[0.2, -1.0, 0.1]);
    assert_eq!(risk::annualized_return(&returns), -100.0);
}

#[rstest]
fn test_volatility_zero_for_constant_returns() {
    let returns = return_series(&[0.01, 0.01, 0.01, 0.01]);
    assert_eq!(risk::volatility(&returns), 0.0);
}

#[rstest]
fn test_volatility_annualization_scale() {
    let returns = return_series(&[0.01, -0.01, 0.01, -0.01]);
    let vol = risk::volatility(&returns);
    assert!(vol > 0.0);

    // Sample stdev of the raw values times sqrt(252) * 100.
    let mean = 0.0;
    let sample_var: f64 = returns
        .iter()
        .map(|r| (r.value - mean).powi(2))
        .sum::<f64>()
        / (returns.len() - 1) as f64;
    let expected = sample_var.sqrt() * 252.0_f64.sqrt() * 100.0;
    TestAssertions::assert_approx_eq(vol, expected, 1e-9);
}

#[rstest]
fn test_sharpe_ratio_zero_volatility_and_exact_value() {
    assert_eq!(risk::sharpe_ratio(8.0, 0.0, 0.03), 0.0);

    // (0.10 - 0.03) / 0.20 = 0.35
    TestAssertions::assert_approx_eq(risk::sharpe_ratio(10.0, 20.0, 0.03), 0.35, 1e-12);
}
