//! 증기 단가 계산 및 민감도 분석 모듈 모음.

pub mod sensitivity;
pub mod steam_price;

pub use sensitivity::{default_range, linspace, sweep, PriceField, SweepPoint};
pub use steam_price::{compute_price, PriceInputs, PriceResult, PricingError};
