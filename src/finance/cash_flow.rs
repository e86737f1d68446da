use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Newton-Raphson 최대 반복 횟수
const NEWTON_MAX_ITER: u32 = 100;
/// 이분법 최대 반복 횟수
const BISECTION_MAX_ITER: u32 = 200;
/// 할인율 수렴 허용오차(절대값). 1e-6 상대 정밀도보다 충분히 작게 잡는다.
const RATE_TOLERANCE: f64 = 1e-10;
/// Newton 해 검증용 NPV 잔차 허용오차(최대 |현금흐름| 대비)
const RESIDUAL_TOLERANCE: f64 = 1e-6;
/// 할인율 하한. -100%에 가까워지면 할인계수가 발산한다.
const MIN_RATE: f64 = -0.9999;
/// 이분법 구간 탐색에 쓰는 후보 할인율
const BRACKET_RATES: [f64; 13] = [
    MIN_RATE, -0.9, -0.5, -0.2, 0.0, 0.1, 0.3, 1.0, 3.0, 10.0, 100.0, 1.0e3, 1.0e6,
];

/// 현금흐름 계산 오류.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CashFlowError {
    /// 부호 변화가 없거나 수치해가 수렴하지 않아 IRR이 존재하지 않는다.
    #[error("IRR 해를 찾을 수 없습니다.")]
    IrrNotFound,
    /// 할인율은 -100%보다 커야 한다.
    #[error("할인율은 -1보다 커야 합니다: {0}")]
    InvalidDiscountRate(f64),
}

/// 기간별 현금흐름 한 항목.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CashFlowEntry {
    /// 기간 번호 (0 = 초기 투자 시점)
    pub period: u32,
    /// 명목 현금흐름 [$]
    pub flow: f64,
}

/// 0기부터 빈틈없이 이어지는 현금흐름 계열.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashFlowSeries {
    entries: Vec<CashFlowEntry>,
}

impl CashFlowSeries {
    /// 현금흐름 값 목록에 0부터 기간 번호를 붙인다.
    pub fn from_flows<I: IntoIterator<Item = f64>>(flows: I) -> Self {
        let entries = flows
            .into_iter()
            .zip(0u32..)
            .map(|(flow, period)| CashFlowEntry { period, flow })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[CashFlowEntry] {
        &self.entries
    }

    pub fn flows(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|e| e.flow)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 명목 현금흐름의 단순 합계.
    pub fn total(&self) -> f64 {
        self.flows().sum()
    }
}

/// 한 현금흐름 계열에 대한 경제성 지표.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinancialMetrics {
    /// 순현재가치 [$]
    pub npv: f64,
    /// 내부수익률(소수). 해가 없으면 None.
    pub irr: Option<f64>,
    /// 회수기간 [기간]. 누적이 끝까지 음수면 None.
    pub payback_period: Option<f64>,
}

/// 초기 투자비와 매기 일정한 현금흐름으로 계열을 만든다.
///
/// 0기는 `-initial_outlay`, 1..=`periods`기는 `periodic_flow`이다. 성장률은 없다.
pub fn build_series(initial_outlay: f64, periodic_flow: f64, periods: u32) -> CashFlowSeries {
    let flows = std::iter::once(-initial_outlay)
        .chain(std::iter::repeat(periodic_flow).take(periods as usize));
    CashFlowSeries::from_flows(flows)
}

/// 할인현금흐름 합계 `Σ flow_t / (1+rate)^t`. 할인율은 -1보다 커야 한다.
pub fn npv(series: &CashFlowSeries, discount_rate: f64) -> f64 {
    discounted_sum(series, discount_rate)
}

fn discounted_sum(series: &CashFlowSeries, rate: f64) -> f64 {
    let one_plus_r = 1.0 + rate;
    let mut discount = 1.0;
    let mut total = 0.0;
    for (t, flow) in series.flows().enumerate() {
        if t > 0 {
            discount *= one_plus_r;
        }
        total += flow / discount;
    }
    total
}

/// NPV와 할인율에 대한 NPV 미분값을 함께 계산한다.
fn npv_and_derivative(series: &CashFlowSeries, rate: f64) -> (f64, f64) {
    let one_plus_r = 1.0 + rate;
    let mut discount = 1.0;
    let mut value = 0.0;
    let mut derivative = 0.0;
    for (t, flow) in series.flows().enumerate() {
        if t > 0 {
            discount *= one_plus_r;
            derivative -= t as f64 * flow / (discount * one_plus_r);
        }
        value += flow / discount;
    }
    (value, derivative)
}

/// NPV를 0으로 만드는 할인율(IRR)을 구한다.
///
/// 0.10에서 시작하는 Newton-Raphson을 먼저 시도하고, 실패하면 후보 할인율
/// 사이에서 부호가 바뀌는 구간을 찾아 이분법으로 푼다. 수렴 기준은 할인율
/// 변화량 1e-10 이하이다.
pub fn irr(series: &CashFlowSeries) -> Result<f64, CashFlowError> {
    let has_positive = series.flows().any(|f| f > 0.0);
    let has_negative = series.flows().any(|f| f < 0.0);
    if !(has_positive && has_negative) {
        debug!(periods = series.len(), "현금흐름 부호 변화 없음, IRR 없음");
        return Err(CashFlowError::IrrNotFound);
    }

    if let Some(rate) = newton_irr(series) {
        return Ok(rate);
    }
    match bisection_irr(series) {
        Some(rate) => Ok(rate),
        None => {
            debug!(periods = series.len(), "IRR 수렴 실패");
            Err(CashFlowError::IrrNotFound)
        }
    }
}

fn newton_irr(series: &CashFlowSeries) -> Option<f64> {
    let mut rate = 0.10;
    for _ in 0..NEWTON_MAX_ITER {
        let (value, derivative) = npv_and_derivative(series, rate);
        if !value.is_finite() || !derivative.is_finite() || derivative == 0.0 {
            return None;
        }
        let next = (rate - value / derivative).max(MIN_RATE);
        if (next - rate).abs() <= RATE_TOLERANCE {
            // 하한에 걸려 멈춘 경우는 해가 아니다
            let scale = series.flows().map(f64::abs).fold(1.0, f64::max);
            let residual = discounted_sum(series, next);
            return (residual.abs() <= RESIDUAL_TOLERANCE * scale).then_some(next);
        }
        rate = next;
    }
    None
}

fn bisection_irr(series: &CashFlowSeries) -> Option<f64> {
    let samples: Vec<(f64, f64)> = BRACKET_RATES
        .iter()
        .map(|&r| (r, discounted_sum(series, r)))
        .filter(|(_, v)| v.is_finite())
        .collect();

    for pair in samples.windows(2) {
        let (mut lo, mut f_lo) = pair[0];
        let (mut hi, f_hi) = pair[1];
        if f_lo == 0.0 {
            return Some(lo);
        }
        if f_lo.signum() == f_hi.signum() {
            continue;
        }
        for _ in 0..BISECTION_MAX_ITER {
            let mid = 0.5 * (lo + hi);
            let f_mid = discounted_sum(series, mid);
            if f_mid == 0.0 || (hi - lo) <= RATE_TOLERANCE {
                return Some(mid);
            }
            if f_mid.signum() == f_lo.signum() {
                lo = mid;
                f_lo = f_mid;
            } else {
                hi = mid;
            }
        }
        return Some(0.5 * (lo + hi));
    }
    None
}

/// 누적 현금흐름이 처음 0 이상이 되는 시점(기간 내 선형 보간).
///
/// 0기가 이미 0 이상이면 0, 끝까지 음수면 None.
pub fn payback_period(series: &CashFlowSeries) -> Option<f64> {
    let mut cumulative = 0.0;
    let mut prev = 0.0;
    for (i, flow) in series.flows().enumerate() {
        cumulative += flow;
        if cumulative >= 0.0 {
            if i == 0 {
                return Some(0.0);
            }
            let fraction = -prev / (cumulative - prev);
            return Some((i - 1) as f64 + fraction);
        }
        prev = cumulative;
    }
    None
}

/// 할인율이 -1보다 크고 유한한지 확인한다.
pub fn check_discount_rate(discount_rate: f64) -> Result<(), CashFlowError> {
    if discount_rate <= -1.0 || !discount_rate.is_finite() {
        return Err(CashFlowError::InvalidDiscountRate(discount_rate));
    }
    Ok(())
}

/// NPV, IRR, 회수기간을 한 번에 계산한다. IRR이 없으면 None으로 남긴다.
pub fn evaluate(
    series: &CashFlowSeries,
    discount_rate: f64,
) -> Result<FinancialMetrics, CashFlowError> {
    check_discount_rate(discount_rate)?;
    Ok(FinancialMetrics {
        npv: npv(series, discount_rate),
        irr: irr(series).ok(),
        payback_period: payback_period(series),
    })
}
