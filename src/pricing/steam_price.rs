use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 증기 단가 계산 오류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PricingError {
    /// 보일러 효율이 0이면 필요 연료량을 구할 수 없다.
    #[error("보일러 효율은 0이 될 수 없습니다.")]
    DivisionByZero,
}

/// 증기 단가 계산 입력. 모든 단가는 MMBtu 기준이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceInputs {
    /// 천연가스 단가 [$/MMBtu 연료]
    pub ng_price_per_mmbtu: f64,
    /// 보일러 효율(0~1]
    pub boiler_efficiency: f64,
    /// 탄소크레딧(LCFS) 가격 [$/ton CO2e]
    pub carbon_price_per_ton: f64,
    /// 기존(BAU) 배출계수 [ton CO2e/MMBtu]
    pub baseline_emissions_factor: f64,
    /// 프로젝트 배출계수 [ton CO2e/MMBtu]
    pub project_emissions_factor: f64,
    /// 운전/유지비 [$/MMBtu 증기]
    pub o_and_m_cost: f64,
}

impl Default for PriceInputs {
    fn default() -> Self {
        Self {
            ng_price_per_mmbtu: 4.0,
            boiler_efficiency: 0.85,
            carbon_price_per_ton: 100.0,
            baseline_emissions_factor: 0.053,
            project_emissions_factor: 0.0053,
            o_and_m_cost: 0.5,
        }
    }
}

impl PriceInputs {
    /// 탄소크레딧 가격만 바꾼 복사본을 돌려준다.
    pub fn with_carbon_price(self, carbon_price_per_ton: f64) -> Self {
        Self {
            carbon_price_per_ton,
            ..self
        }
    }

    /// 단위 열량당 회피 배출량 [ton CO2e/MMBtu]. 음수면 프로젝트가 더 많이 배출한다.
    pub fn emissions_avoided(&self) -> f64 {
        self.baseline_emissions_factor - self.project_emissions_factor
    }
}

/// 증기 단가 계산 결과. 반올림은 표시 단계에서 한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceResult {
    /// 순 증기 단가 [$/MMBtu]
    pub net_price: f64,
    /// 연료비 [$/MMBtu 증기]
    pub fuel_cost: f64,
    /// 탄소크레딧 가치 [$/MMBtu 증기]
    pub credit_value: f64,
    /// 회피 배출량 [ton CO2e/MMBtu]
    pub emissions_avoided: f64,
    /// 증기 1 MMBtu당 필요 연료 [MMBtu]
    pub fuel_required_per_unit_output: f64,
}

/// 연료비, 탄소크레딧, O&M으로 증기 단가를 계산한다.
pub fn compute_price(input: &PriceInputs) -> Result<PriceResult, PricingError> {
    if input.boiler_efficiency == 0.0 {
        return Err(PricingError::DivisionByZero);
    }
    let fuel_required_per_unit_output = 1.0 / input.boiler_efficiency;
    let fuel_cost = input.ng_price_per_mmbtu * fuel_required_per_unit_output;

    // 회피 배출량이 음수면 크레딧이 비용으로 작용한다
    let emissions_avoided = input.emissions_avoided();
    let credit_value = emissions_avoided * input.carbon_price_per_ton;

    let net_price = fuel_cost - credit_value + input.o_and_m_cost;
    Ok(PriceResult {
        net_price,
        fuel_cost,
        credit_value,
        emissions_avoided,
        fuel_required_per_unit_output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inputs_match_reference_price() {
        let res = compute_price(&PriceInputs::default()).expect("price");
        // 4.0 / 0.85 - 0.0477 * 100 + 0.5
        assert!((res.fuel_cost - 4.705_882_352_941_177).abs() < 1e-12);
        assert!((res.credit_value - 4.77).abs() < 1e-12);
        assert!((res.net_price - 0.435_882_352_941_177).abs() < 1e-9);
    }

    #[test]
    fn dirtier_project_turns_credit_into_cost() {
        let input = PriceInputs {
            baseline_emissions_factor: 0.02,
            project_emissions_factor: 0.05,
            ..PriceInputs::default()
        };
        let res = compute_price(&input).expect("price");
        assert!(res.emissions_avoided < 0.0);
        assert!(res.credit_value < 0.0);
        assert!(res.net_price > res.fuel_cost + input.o_and_m_cost);
    }

    #[test]
    fn zero_efficiency_is_rejected() {
        let input = PriceInputs {
            boiler_efficiency: 0.0,
            ..PriceInputs::default()
        };
        assert_eq!(compute_price(&input), Err(PricingError::DivisionByZero));
    }
}
