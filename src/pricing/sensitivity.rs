use serde::{Deserialize, Serialize};

use super::steam_price::{compute_price, PriceInputs, PricingError};

/// 민감도 분석에서 변화시킬 수 있는 입력 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceField {
    NgPrice,
    BoilerEfficiency,
    CarbonPrice,
    BaselineEmissions,
    ProjectEmissions,
    OAndM,
}

impl PriceField {
    pub const ALL: [PriceField; 6] = [
        PriceField::NgPrice,
        PriceField::BoilerEfficiency,
        PriceField::CarbonPrice,
        PriceField::BaselineEmissions,
        PriceField::ProjectEmissions,
        PriceField::OAndM,
    ];

    /// 입력 구조체에서 해당 항목 값을 읽는다.
    pub fn get(self, input: &PriceInputs) -> f64 {
        match self {
            PriceField::NgPrice => input.ng_price_per_mmbtu,
            PriceField::BoilerEfficiency => input.boiler_efficiency,
            PriceField::CarbonPrice => input.carbon_price_per_ton,
            PriceField::BaselineEmissions => input.baseline_emissions_factor,
            PriceField::ProjectEmissions => input.project_emissions_factor,
            PriceField::OAndM => input.o_and_m_cost,
        }
    }

    /// 입력 구조체의 해당 항목을 덮어쓴다.
    pub fn set(self, input: &mut PriceInputs, value: f64) {
        let slot = match self {
            PriceField::NgPrice => &mut input.ng_price_per_mmbtu,
            PriceField::BoilerEfficiency => &mut input.boiler_efficiency,
            PriceField::CarbonPrice => &mut input.carbon_price_per_ton,
            PriceField::BaselineEmissions => &mut input.baseline_emissions_factor,
            PriceField::ProjectEmissions => &mut input.project_emissions_factor,
            PriceField::OAndM => &mut input.o_and_m_cost,
        };
        *slot = value;
    }
}

/// 민감도 곡선의 한 점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub value: f64,
    pub net_price: f64,
}

/// 나머지 입력은 고정하고 `field`만 `values` 순서대로 바꿔가며 증기 단가를 계산한다.
///
/// 결과 길이와 순서는 `values`와 같다. 효율 0이 섞여 있으면 해당 지점에서
/// [`PricingError::DivisionByZero`]를 돌려준다.
pub fn sweep(
    baseline: &PriceInputs,
    field: PriceField,
    values: &[f64],
) -> Result<Vec<SweepPoint>, PricingError> {
    values
        .iter()
        .map(|&value| {
            let mut input = *baseline;
            field.set(&mut input, value);
            let res = compute_price(&input)?;
            Ok(SweepPoint {
                value,
                net_price: res.net_price,
            })
        })
        .collect()
}

/// `start`부터 `end`까지 양 끝을 포함해 `count`개 점을 등간격으로 만든다.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// 현재 값 주변의 기본 분석 범위(11점)를 만든다.
///
/// 가격/비용 항목은 현재 값의 50~150%(음수 하한 없음), 보일러 효율은
/// 80~120%를 0.5~0.99로 제한한다.
pub fn default_range(baseline: &PriceInputs, field: PriceField) -> Vec<f64> {
    const POINTS: usize = 11;
    let current = field.get(baseline);
    match field {
        PriceField::BoilerEfficiency => {
            linspace((current * 0.8).max(0.5), (current * 1.2).min(0.99), POINTS)
        }
        _ => linspace((current * 0.5).max(0.0), current * 1.5, POINTS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_ends() {
        let v = linspace(2.0, 6.0, 11);
        assert_eq!(v.len(), 11);
        assert_eq!(v[0], 2.0);
        assert_eq!(v[10], 6.0);
        assert!((v[5] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn efficiency_range_is_clamped() {
        let input = PriceInputs {
            boiler_efficiency: 0.9,
            ..PriceInputs::default()
        };
        let range = default_range(&input, PriceField::BoilerEfficiency);
        assert!((range[0] - 0.72).abs() < 1e-12);
        assert_eq!(*range.last().unwrap(), 0.99);
    }

    #[test]
    fn set_then_get_roundtrips_every_field() {
        for field in PriceField::ALL {
            let mut input = PriceInputs::default();
            field.set(&mut input, 0.123);
            assert_eq!(field.get(&input), 0.123);
        }
    }
}
