use serde::{Deserialize, Serialize};

use super::cash_flow::{self, build_series, CashFlowError};

/// 비용 절감액 기반 수익 배분 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueSharingInput {
    /// 프로젝트 증기 단가 [$/MMBtu]
    pub steam_price: f64,
    /// 기존(BAU) 증기 단가 [$/MMBtu]
    pub baseline_steam_price: f64,
    /// 연간 증기 사용량 [MMBtu/yr]
    pub annual_steam_usage: f64,
    /// 연간 크레딧 수익 [$/yr]
    pub credit_value_per_year: f64,
    /// 초기 투자비 [$]
    pub capital_investment: f64,
    /// 사업 기간 [년]
    pub project_lifetime: u32,
    /// 할인율(소수)
    pub discount_rate: f64,
    /// 절감액 중 오프테이커 몫(소수)
    pub offtaker_share: f64,
}

impl Default for RevenueSharingInput {
    fn default() -> Self {
        Self {
            steam_price: 5.0,
            baseline_steam_price: 7.5,
            annual_steam_usage: 100_000.0,
            credit_value_per_year: 50_000.0,
            capital_investment: 1_000_000.0,
            project_lifetime: 10,
            discount_rate: 0.08,
            offtaker_share: 0.5,
        }
    }
}

/// 연도별 현금흐름 표의 한 행.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SharingYear {
    pub year: u32,
    pub producer_flow: f64,
    pub offtaker_flow: f64,
    pub producer_pv: f64,
    pub offtaker_pv: f64,
}

/// 비용 절감액 기반 수익 배분 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueSharingResult {
    /// 연간 비용 절감액 [$/yr]
    pub annual_cost_savings: f64,
    /// 절감액 + 크레딧 수익 [$/yr]
    pub total_annual_benefit: f64,
    pub offtaker_annual_share: f64,
    pub producer_annual_share: f64,
    pub producer_npv: f64,
    pub offtaker_npv: f64,
    pub producer_irr: Option<f64>,
    pub payback_period: Option<f64>,
    pub years: Vec<SharingYear>,
}

/// 기존 대비 증기 비용 절감액과 크레딧 수익을 생산자/오프테이커에게 나누고
/// 양측 경제성을 계산한다.
///
/// 오프테이커는 절감액의 `offtaker_share`만 받고, 크레딧 수익은 전부 생산자 몫이다.
pub fn calculate_revenue_sharing(
    input: &RevenueSharingInput,
) -> Result<RevenueSharingResult, CashFlowError> {
    let annual_cost_savings =
        (input.baseline_steam_price - input.steam_price) * input.annual_steam_usage;
    let total_annual_benefit = annual_cost_savings + input.credit_value_per_year;
    let offtaker_annual_share = annual_cost_savings * input.offtaker_share;
    let producer_annual_share = total_annual_benefit - offtaker_annual_share;

    let producer = build_series(
        input.capital_investment,
        producer_annual_share,
        input.project_lifetime,
    );
    let offtaker = build_series(0.0, offtaker_annual_share, input.project_lifetime);

    let producer_metrics = cash_flow::evaluate(&producer, input.discount_rate)?;
    let offtaker_npv = cash_flow::npv(&offtaker, input.discount_rate);

    let years = (1..=input.project_lifetime)
        .map(|year| {
            let pv_factor = 1.0 / (1.0 + input.discount_rate).powi(year as i32);
            SharingYear {
                year,
                producer_flow: producer_annual_share,
                offtaker_flow: offtaker_annual_share,
                producer_pv: producer_annual_share * pv_factor,
                offtaker_pv: offtaker_annual_share * pv_factor,
            }
        })
        .collect();

    Ok(RevenueSharingResult {
        annual_cost_savings,
        total_annual_benefit,
        offtaker_annual_share,
        producer_annual_share,
        producer_npv: producer_metrics.npv,
        offtaker_npv,
        producer_irr: producer_metrics.irr,
        payback_period: producer_metrics.payback_period,
        years,
    })
}
