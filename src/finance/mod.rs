//! 현금흐름(NPV/IRR/회수기간)과 탄소크레딧 수익 배분 계산 모듈 모음.

pub mod cash_flow;
pub mod revenue_sharing;
pub mod revenue_split;

pub use cash_flow::{
    build_series, check_discount_rate, evaluate, irr, npv, payback_period, CashFlowEntry,
    CashFlowError, CashFlowSeries, FinancialMetrics,
};
pub use revenue_split::{
    solve_max_share_for_irr, solve_required_credit_price, RequiredCreditPrice, SplitError,
    SplitSearchResult,
};
