//! 연료/증기 단가의 에너지 기준 단위 변환.

pub mod energy;

pub use energy::{
    convert_energy, convert_price_per_energy, parse_energy_unit, EnergyUnit, UnitError,
};
