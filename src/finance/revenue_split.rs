use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::cash_flow::{self, build_series, CashFlowError, FinancialMetrics};
use crate::pricing::{compute_price, PriceInputs, PricingError};

/// 배분 비율 탐색 간격 수 (0%, 5%, ... 100% → 21점)
pub const SHARE_STEPS: u32 = 20;
/// 화면 기본값으로 제시할 때의 오프테이커 배분 상한
pub const MAX_DEFAULT_SHARE: f64 = 0.9;
/// 목표 IRR을 만족하는 비율이 없을 때의 기본 배분
pub const FALLBACK_SHARE: f64 = 0.5;

/// 크레딧 가격/배분 비율 역산 시 발생 가능한 결과 오류.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SplitError {
    /// 회피 배출량이 0 이하라 크레딧만으로는 목표 단가에 도달할 수 없다.
    #[error("회피 배출량({emissions_avoided})이 0 이하여서 필요한 크레딧 가격이 없습니다.")]
    NoFeasiblePrice { emissions_avoided: f64 },
    /// 어떤 배분 비율에서도 목표 IRR을 만족하지 못한다.
    #[error("목표 IRR {target_irr}을(를) 만족하는 배분 비율이 없습니다.")]
    TargetUnreachable { target_irr: f64 },
    /// 증기 단가 계산 오류
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// 목표 증기 단가를 맞추기 위한 크레딧 요구량.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RequiredCreditPrice {
    /// 크레딧이 없을 때의 증기 단가 [$/MMBtu]
    pub price_without_credit: f64,
    /// 목표 단가와의 차이(음수 가능) [$/MMBtu]
    pub raw_price_gap: f64,
    /// 크레딧으로 메워야 할 차이, 0 이상 [$/MMBtu]
    pub price_gap: f64,
    /// 회피 배출량 [ton CO2e/MMBtu]
    pub emissions_avoided: f64,
    /// 필요한 크레딧 가격 [$/ton CO2e]. 회피 배출량이 0 이하면 None.
    pub required_carbon_price: Option<f64>,
    /// 연간 크레딧 수익 [$/yr]
    pub annual_credit_revenue: f64,
}

impl RequiredCreditPrice {
    /// 필요한 크레딧 가격을 돌려준다. 없으면 [`SplitError::NoFeasiblePrice`].
    pub fn carbon_price(&self) -> Result<f64, SplitError> {
        self.required_carbon_price
            .ok_or(SplitError::NoFeasiblePrice {
                emissions_avoided: self.emissions_avoided,
            })
    }
}

/// 목표 증기 단가에 도달하는 데 필요한 크레딧 가격과 연간 크레딧 수익을 계산한다.
///
/// 입력의 `carbon_price_per_ton`은 무시한다(0으로 두고 기준 단가를 구한다).
pub fn solve_required_credit_price(
    inputs: &PriceInputs,
    target_price: f64,
    annual_volume: f64,
) -> Result<RequiredCreditPrice, SplitError> {
    let no_credit = compute_price(&inputs.with_carbon_price(0.0))?;
    let price_without_credit = no_credit.net_price;
    let raw_price_gap = price_without_credit - target_price;
    let price_gap = raw_price_gap.max(0.0);
    let emissions_avoided = no_credit.emissions_avoided;

    let required_carbon_price = if emissions_avoided > 0.0 {
        Some(price_gap / emissions_avoided)
    } else {
        debug!(emissions_avoided, "회피 배출량이 없어 크레딧 가격 역산 불가");
        None
    };

    Ok(RequiredCreditPrice {
        price_without_credit,
        raw_price_gap,
        price_gap,
        emissions_avoided,
        required_carbon_price,
        annual_credit_revenue: price_gap * annual_volume,
    })
}

/// 배분 비율별 기술사업자 IRR 곡선의 한 점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SharePoint {
    /// 오프테이커 배분 비율(0~1)
    pub share: f64,
    /// 기술사업자 IRR. 해가 없으면 None.
    pub irr: Option<f64>,
    /// 기술사업자 NPV. 할인율을 주었을 때만 채운다.
    pub npv: Option<f64>,
}

/// 최대 배분 비율 탐색 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitSearchResult {
    pub target_irr: f64,
    /// 목표 IRR을 만족하는 첫 번째(가장 작은) 표본 비율. 상한을 두지 않은 원값이다.
    pub recommended_share: Option<f64>,
    pub irr_curve: Vec<SharePoint>,
}

impl SplitSearchResult {
    /// 추천 비율을 돌려준다. 없으면 [`SplitError::TargetUnreachable`].
    pub fn recommendation(&self) -> Result<f64, SplitError> {
        self.recommended_share
            .ok_or(SplitError::TargetUnreachable {
                target_irr: self.target_irr,
            })
    }
}

/// 0부터 1까지 5% 간격의 배분 비율 표본.
pub fn share_grid() -> impl Iterator<Item = f64> {
    (0..=SHARE_STEPS).map(|i| f64::from(i) / f64::from(SHARE_STEPS))
}

/// 오름차순 배분 비율마다 `evaluate_share`로 (IRR, NPV)를 구해 곡선을 만들고,
/// IRR이 처음으로 `target_irr` 이상이 되는 비율을 추천값으로 고른다.
///
/// 추천값은 첫 만족 지점에서 확정되며 이후 지점은 곡선 표시용으로만 계산한다.
pub fn scan_shares<F>(target_irr: f64, mut evaluate_share: F) -> SplitSearchResult
where
    F: FnMut(f64) -> (Option<f64>, Option<f64>),
{
    let mut recommended_share = None;
    let mut irr_curve = Vec::with_capacity(SHARE_STEPS as usize + 1);
    for share in share_grid() {
        let (irr, npv) = evaluate_share(share);
        if recommended_share.is_none() && irr.is_some_and(|r| r >= target_irr) {
            recommended_share = Some(share);
        }
        irr_curve.push(SharePoint { share, irr, npv });
    }
    debug!(target_irr, ?recommended_share, "배분 비율 탐색 완료");
    SplitSearchResult {
        target_irr,
        recommended_share,
        irr_curve,
    }
}

/// 기술사업자가 `target_irr`을 달성하는 범위에서 오프테이커에게 줄 수 있는
/// 최대 크레딧 수익 배분 비율을 찾는다.
pub fn solve_max_share_for_irr(
    annual_credit_revenue: f64,
    capital_investment: f64,
    project_lifetime: u32,
    target_irr: f64,
) -> SplitSearchResult {
    search(
        annual_credit_revenue,
        capital_investment,
        project_lifetime,
        target_irr,
        None,
    )
}

/// [`solve_max_share_for_irr`]과 같되 곡선의 각 점에 `discount_rate` 기준 NPV를 채운다.
///
/// 할인율이 -1 이하이거나 유한하지 않으면 [`CashFlowError::InvalidDiscountRate`].
pub fn solve_max_share_for_irr_with_npv(
    annual_credit_revenue: f64,
    capital_investment: f64,
    project_lifetime: u32,
    target_irr: f64,
    discount_rate: f64,
) -> Result<SplitSearchResult, CashFlowError> {
    cash_flow::check_discount_rate(discount_rate)?;
    Ok(search(
        annual_credit_revenue,
        capital_investment,
        project_lifetime,
        target_irr,
        Some(discount_rate),
    ))
}

fn search(
    annual_credit_revenue: f64,
    capital_investment: f64,
    project_lifetime: u32,
    target_irr: f64,
    discount_rate: Option<f64>,
) -> SplitSearchResult {
    scan_shares(target_irr, |share| {
        let provider_flow = annual_credit_revenue * (1.0 - share);
        let series = build_series(capital_investment, provider_flow, project_lifetime);
        let irr = cash_flow::irr(&series).ok();
        let npv = discount_rate.map(|rate| cash_flow::npv(&series, rate));
        (irr, npv)
    })
}

/// 화면에 기본값으로 보여줄 배분 비율. 추천값을 90%로 제한하고, 없으면 50%.
pub fn default_share(result: &SplitSearchResult) -> f64 {
    result
        .recommended_share
        .map_or(FALLBACK_SHARE, |s| s.min(MAX_DEFAULT_SHARE))
}

/// 프로젝트 재무 조건.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectFinancials {
    /// 초기 투자비 [$]
    pub capital_investment: f64,
    /// 사업 기간 [년]
    pub project_lifetime: u32,
    /// NPV 할인율(소수)
    pub discount_rate: f64,
    /// 기술사업자 목표 IRR(소수)
    pub target_irr: f64,
}

impl Default for ProjectFinancials {
    fn default() -> Self {
        Self {
            capital_investment: 1_000_000.0,
            project_lifetime: 10,
            discount_rate: 0.08,
            target_irr: 0.15,
        }
    }
}

/// 연간 크레딧 수익의 양측 배분액.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevenueSplit {
    /// 오프테이커 연간 배분액 [$/yr]
    pub offtaker_annual: f64,
    /// 기술사업자 연간 배분액 [$/yr]
    pub provider_annual: f64,
}

/// 오프테이커 비율에 따라 연간 크레딧 수익을 나눈다.
pub fn split_revenue(annual_credit_revenue: f64, offtaker_share: f64) -> RevenueSplit {
    RevenueSplit {
        offtaker_annual: annual_credit_revenue * offtaker_share,
        provider_annual: annual_credit_revenue * (1.0 - offtaker_share),
    }
}

/// 선택한 배분 비율에서 기술사업자의 경제성 지표.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProviderMetrics {
    pub split: RevenueSplit,
    pub metrics: FinancialMetrics,
    /// IRR - 목표 IRR (소수). IRR이 없으면 None.
    pub irr_gap: Option<f64>,
    pub target_met: bool,
    /// 사업 기간 전체 크레딧 수익 [$]
    pub lifetime_credit_revenue: f64,
    /// 사업 기간 전체 기술사업자 수익 [$]
    pub lifetime_provider_revenue: f64,
    /// 단순 투자수익률(소수). 투자비가 0 이하면 None.
    pub roi: Option<f64>,
}

/// 선택한 배분 비율에서 기술사업자의 NPV/IRR/회수기간/ROI를 계산한다.
pub fn provider_metrics(
    project: &ProjectFinancials,
    annual_credit_revenue: f64,
    offtaker_share: f64,
) -> Result<ProviderMetrics, CashFlowError> {
    let split = split_revenue(annual_credit_revenue, offtaker_share);
    let series = build_series(
        project.capital_investment,
        split.provider_annual,
        project.project_lifetime,
    );
    let metrics = cash_flow::evaluate(&series, project.discount_rate)?;
    let irr_gap = metrics.irr.map(|r| r - project.target_irr);
    let years = f64::from(project.project_lifetime);
    let lifetime_provider_revenue = split.provider_annual * years;
    let roi = (project.capital_investment > 0.0)
        .then(|| lifetime_provider_revenue / project.capital_investment - 1.0);

    Ok(ProviderMetrics {
        split,
        metrics,
        irr_gap,
        target_met: irr_gap.is_some_and(|gap| gap >= 0.0),
        lifetime_credit_revenue: annual_credit_revenue * years,
        lifetime_provider_revenue,
        roi,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_21_points_from_zero_to_one() {
        let grid: Vec<f64> = share_grid().collect();
        assert_eq!(grid.len(), 21);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[20], 1.0);
        assert!((grid[1] - 0.05).abs() < 1e-15);
    }

    #[test]
    fn default_share_caps_and_falls_back() {
        let mut result = scan_shares(0.1, |_| (Some(0.0), None));
        assert_eq!(default_share(&result), FALLBACK_SHARE);
        result.recommended_share = Some(0.95);
        assert_eq!(default_share(&result), MAX_DEFAULT_SHARE);
        result.recommended_share = Some(0.3);
        assert_eq!(default_share(&result), 0.3);
    }

    #[test]
    fn full_share_to_offtaker_has_no_irr() {
        let result = solve_max_share_for_irr(200_000.0, 1_000_000.0, 10, 0.05);
        let last = result.irr_curve.last().expect("curve");
        assert_eq!(last.share, 1.0);
        assert_eq!(last.irr, None);
    }

    #[test]
    fn npv_curve_rejects_rate_at_minus_one() {
        let res = solve_max_share_for_irr_with_npv(300_000.0, 1_000_000.0, 10, 0.15, -1.0);
        assert_eq!(res, Err(CashFlowError::InvalidDiscountRate(-1.0)));
    }

    #[test]
    fn roi_is_none_without_capital() {
        let project = ProjectFinancials {
            capital_investment: 0.0,
            ..ProjectFinancials::default()
        };
        let m = provider_metrics(&project, 100_000.0, 0.5).expect("metrics");
        assert_eq!(m.roi, None);
        assert_eq!(m.metrics.payback_period, Some(0.0));
    }
}
