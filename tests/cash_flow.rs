//! NPV/IRR/회수기간 회귀 테스트.
use approx::{assert_abs_diff_eq, assert_relative_eq};
use steam_price_toolbox::finance::{
    build_series, evaluate, irr, npv, payback_period, CashFlowError, CashFlowSeries,
};

#[test]
fn build_series_has_outlay_then_flat_flows() {
    let series = build_series(1_000.0, 250.0, 6);
    assert_eq!(series.len(), 7);
    let entries = series.entries();
    assert_eq!(entries[0].flow, -1_000.0);
    for (i, e) in entries.iter().enumerate() {
        assert_eq!(e.period as usize, i);
        if i > 0 {
            assert_eq!(e.flow, 250.0);
        }
    }
}

#[test]
fn zero_period_series_is_outlay_only() {
    let series = build_series(500.0, 100.0, 0);
    assert_eq!(series.len(), 1);
    assert_eq!(series.entries()[0].flow, -500.0);
    assert_eq!(irr(&series), Err(CashFlowError::IrrNotFound));
    assert_eq!(payback_period(&series), None);
}

#[test]
fn npv_at_zero_rate_is_sum_of_flows() {
    let series = CashFlowSeries::from_flows([-1_000.0, 300.0, 450.0, -20.0, 600.0]);
    assert_eq!(npv(&series, 0.0), series.total());
    assert_abs_diff_eq!(npv(&series, 0.0), 330.0, epsilon = 1e-9);
}

#[test]
fn npv_discounts_each_period() {
    let series = build_series(1_000.0, 500.0, 3);
    let expected = -1_000.0 + 500.0 / 1.1 + 500.0 / 1.21 + 500.0 / 1.331;
    assert_relative_eq!(npv(&series, 0.1), expected, max_relative = 1e-12);
}

#[test]
fn single_period_irr_is_ten_percent() {
    let series = CashFlowSeries::from_flows([-100.0, 110.0]);
    let rate = irr(&series).expect("irr");
    assert_abs_diff_eq!(rate, 0.10, epsilon = 1e-4);
}

#[test]
fn annuity_irr_matches_reference() {
    // -1,000,000 투자, 10년간 150,000 → IRR 약 8.144%
    let series = build_series(1_000_000.0, 150_000.0, 10);
    let rate = irr(&series).expect("irr");
    assert_abs_diff_eq!(rate, 0.081_441_66, epsilon = 1e-6);
    assert_abs_diff_eq!(npv(&series, rate), 0.0, epsilon = 1e-4);
}

#[test]
fn no_sign_change_has_no_irr() {
    let all_negative = CashFlowSeries::from_flows([-100.0, -10.0, -5.0]);
    let all_positive = CashFlowSeries::from_flows([100.0, 10.0]);
    let no_return = build_series(1_000.0, 0.0, 10);
    assert_eq!(irr(&all_negative), Err(CashFlowError::IrrNotFound));
    assert_eq!(irr(&all_positive), Err(CashFlowError::IrrNotFound));
    assert_eq!(irr(&no_return), Err(CashFlowError::IrrNotFound));
}

#[test]
fn payback_hits_zero_exactly_at_period_two() {
    let series = CashFlowSeries::from_flows([-100.0, 50.0, 50.0, 50.0]);
    assert_eq!(payback_period(&series), Some(2.0));
}

#[test]
fn payback_interpolates_within_period() {
    let series = build_series(100.0, 40.0, 5);
    // 누적: -100, -60, -20, 20 → 2 + 20/40
    assert_eq!(payback_period(&series), Some(2.5));
}

#[test]
fn payback_is_zero_when_nothing_invested() {
    let series = CashFlowSeries::from_flows([0.0, 10.0]);
    assert_eq!(payback_period(&series), Some(0.0));
}

#[test]
fn payback_is_none_when_never_recovered() {
    let series = build_series(1_000.0, 50.0, 10);
    assert_eq!(payback_period(&series), None);
}

#[test]
fn evaluate_bundles_metrics() {
    let series = build_series(1_000.0, 400.0, 5);
    let m = evaluate(&series, 0.08).expect("metrics");
    assert_eq!(m.npv, npv(&series, 0.08));
    assert_eq!(m.irr, irr(&series).ok());
    assert_eq!(m.payback_period, Some(2.5));

    let dead = build_series(1_000.0, 0.0, 5);
    let m = evaluate(&dead, 0.08).expect("metrics");
    assert_eq!(m.irr, None);
    assert_eq!(m.payback_period, None);
}
