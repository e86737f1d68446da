//! 비용 절감 기반 수익 배분 회귀 테스트.
use approx::assert_abs_diff_eq;
use steam_price_toolbox::finance::revenue_sharing::{
    calculate_revenue_sharing, RevenueSharingInput,
};
use steam_price_toolbox::finance::{build_series, npv, CashFlowError};

#[test]
fn default_case_splits_savings_and_credits() {
    let input = RevenueSharingInput::default();
    let r = calculate_revenue_sharing(&input).expect("sharing");
    // (7.5 - 5.0) * 100,000 = 250,000 절감, 크레딧 50,000
    assert_eq!(r.annual_cost_savings, 250_000.0);
    assert_eq!(r.total_annual_benefit, 300_000.0);
    assert_eq!(r.offtaker_annual_share, 125_000.0);
    assert_eq!(r.producer_annual_share, 175_000.0);

    let expected_npv = npv(&build_series(1_000_000.0, 175_000.0, 10), 0.08);
    assert_eq!(r.producer_npv, expected_npv);
    assert!(r.producer_irr.expect("irr") > 0.08);
    assert_abs_diff_eq!(
        r.payback_period.expect("payback"),
        5.0 + 125_000.0 / 175_000.0,
        epsilon = 1e-9
    );
}

#[test]
fn yearly_table_discounts_each_year() {
    let input = RevenueSharingInput {
        project_lifetime: 3,
        ..RevenueSharingInput::default()
    };
    let r = calculate_revenue_sharing(&input).expect("sharing");
    assert_eq!(r.years.len(), 3);
    assert_eq!(r.years[0].year, 1);
    assert_abs_diff_eq!(r.years[1].producer_pv, 175_000.0 / 1.08_f64.powi(2), epsilon = 1e-9);
    let pv_sum: f64 = r.years.iter().map(|y| y.offtaker_pv).sum();
    assert_abs_diff_eq!(pv_sum, r.offtaker_npv, epsilon = 1e-6);
}

#[test]
fn losing_project_has_no_payback() {
    let input = RevenueSharingInput {
        steam_price: 9.0,
        credit_value_per_year: 0.0,
        ..RevenueSharingInput::default()
    };
    let r = calculate_revenue_sharing(&input).expect("sharing");
    assert!(r.annual_cost_savings < 0.0);
    assert_eq!(r.payback_period, None);
    assert_eq!(r.producer_irr, None);
}

#[test]
fn invalid_discount_rate_is_rejected() {
    let input = RevenueSharingInput {
        discount_rate: -1.5,
        ..RevenueSharingInput::default()
    };
    assert_eq!(
        calculate_revenue_sharing(&input),
        Err(CashFlowError::InvalidDiscountRate(-1.5))
    );
}
