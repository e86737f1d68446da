//! 핵심 계산 로직(증기 단가, 현금흐름, 크레딧 배분)을 라이브러리로 분리해 CLI와 분리한다.

pub mod app;
pub mod cli;
pub mod config;
pub mod finance;
pub mod i18n;
pub mod logging;
pub mod pricing;
pub mod ui_cli;
pub mod units;
