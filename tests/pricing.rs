//! 증기 단가 공식과 민감도 분석 회귀 테스트.
use approx::assert_relative_eq;
use steam_price_toolbox::pricing::{
    compute_price, default_range, sweep, PriceField, PriceInputs, PricingError,
};

#[test]
fn unit_efficiency_fuel_cost_equals_gas_price() {
    for ng in [0.0, 1.37, 4.0, 19.99] {
        let input = PriceInputs {
            ng_price_per_mmbtu: ng,
            boiler_efficiency: 1.0,
            ..PriceInputs::default()
        };
        let res = compute_price(&input).expect("price");
        assert_eq!(res.fuel_cost, ng);
        assert_eq!(res.fuel_required_per_unit_output, 1.0);
    }
}

#[test]
fn net_price_is_fuel_minus_credit_plus_o_and_m() {
    let cases = [
        PriceInputs::default(),
        PriceInputs {
            ng_price_per_mmbtu: 7.2,
            boiler_efficiency: 0.62,
            carbon_price_per_ton: 250.0,
            baseline_emissions_factor: 0.06,
            project_emissions_factor: 0.0,
            o_and_m_cost: 1.1,
        },
        PriceInputs {
            baseline_emissions_factor: 0.01,
            project_emissions_factor: 0.04,
            ..PriceInputs::default()
        },
    ];
    for input in cases {
        let res = compute_price(&input).expect("price");
        assert_eq!(
            res.net_price,
            res.fuel_cost - res.credit_value + input.o_and_m_cost
        );
        assert_relative_eq!(
            res.credit_value,
            res.emissions_avoided * input.carbon_price_per_ton
        );
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let input = PriceInputs {
        ng_price_per_mmbtu: 3.3,
        boiler_efficiency: 0.77,
        ..PriceInputs::default()
    };
    let a = compute_price(&input).expect("price");
    let b = compute_price(&input).expect("price");
    assert_eq!(a.net_price.to_bits(), b.net_price.to_bits());
    assert_eq!(a, b);
}

#[test]
fn zero_efficiency_reports_division_by_zero() {
    let input = PriceInputs {
        boiler_efficiency: 0.0,
        ..PriceInputs::default()
    };
    assert_eq!(compute_price(&input), Err(PricingError::DivisionByZero));
}

#[test]
fn sweep_preserves_length_and_order() {
    let values = [6.0, 2.0, 4.0, 4.0, 0.5];
    let points = sweep(&PriceInputs::default(), PriceField::NgPrice, &values).expect("sweep");
    assert_eq!(points.len(), values.len());
    for (p, v) in points.iter().zip(values) {
        assert_eq!(p.value, v);
    }
    // 가스 단가가 오르면 증기 단가도 오른다
    assert!(points[0].net_price > points[1].net_price);
    assert_eq!(points[2].net_price, points[3].net_price);
}

#[test]
fn sweep_matches_direct_evaluation() {
    let baseline = PriceInputs::default();
    let values = default_range(&baseline, PriceField::CarbonPrice);
    assert_eq!(values.len(), 11);
    let points = sweep(&baseline, PriceField::CarbonPrice, &values).expect("sweep");
    for p in &points {
        let direct = compute_price(&baseline.with_carbon_price(p.value)).expect("price");
        assert_eq!(p.net_price, direct.net_price);
    }
}

#[test]
fn sweep_does_not_touch_baseline() {
    let baseline = PriceInputs::default();
    let before = baseline;
    let _ = sweep(&baseline, PriceField::OAndM, &[0.0, 10.0]).expect("sweep");
    assert_eq!(baseline, before);
}

#[test]
fn sweep_through_zero_efficiency_fails() {
    let res = sweep(
        &PriceInputs::default(),
        PriceField::BoilerEfficiency,
        &[0.9, 0.0],
    );
    assert_eq!(res, Err(PricingError::DivisionByZero));
}

#[test]
fn empty_sweep_is_empty() {
    let points = sweep(&PriceInputs::default(), PriceField::OAndM, &[]).expect("sweep");
    assert!(points.is_empty());
}
