use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 열량 단위. 내부 기준은 MMBtu이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyUnit {
    MMBtu,
    GigaJoule,
    Therm,
    MegaWattHour,
}

/// 단위 문자열 해석 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
}

const GJ_PER_MMBTU: f64 = 1.055_055_85;
const MMBTU_PER_THERM: f64 = 0.1;
const MMBTU_PER_MWH: f64 = 3.412_141_633;

fn to_mmbtu(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::MMBtu => value,
        EnergyUnit::GigaJoule => value / GJ_PER_MMBTU,
        EnergyUnit::Therm => value * MMBTU_PER_THERM,
        EnergyUnit::MegaWattHour => value * MMBTU_PER_MWH,
    }
}

fn from_mmbtu(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::MMBtu => value,
        EnergyUnit::GigaJoule => value * GJ_PER_MMBTU,
        EnergyUnit::Therm => value / MMBTU_PER_THERM,
        EnergyUnit::MegaWattHour => value / MMBTU_PER_MWH,
    }
}

/// 열량을 변환한다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    from_mmbtu(to_mmbtu(value, from), to)
}

/// 열량당 단가를 변환한다. 예: $/GJ → $/MMBtu.
pub fn convert_price_per_energy(price: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    price * convert_energy(1.0, to, from)
}

/// 단위 문자열(mmbtu, gj, therm, mwh)을 해석한다. 대소문자는 구분하지 않는다.
pub fn parse_energy_unit(s: &str) -> Result<EnergyUnit, UnitError> {
    match s.trim().to_lowercase().as_str() {
        "mmbtu" => Ok(EnergyUnit::MMBtu),
        "gj" | "gigajoule" => Ok(EnergyUnit::GigaJoule),
        "therm" | "thm" => Ok(EnergyUnit::Therm),
        "mwh" => Ok(EnergyUnit::MegaWattHour),
        other => Err(UnitError::UnknownUnit(other.to_string())),
    }
}

impl EnergyUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            EnergyUnit::MMBtu => "MMBtu",
            EnergyUnit::GigaJoule => "GJ",
            EnergyUnit::Therm => "therm",
            EnergyUnit::MegaWattHour => "MWh",
        }
    }
}
