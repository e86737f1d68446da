use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::finance::revenue_split::ProjectFinancials;
use crate::pricing::PriceInputs;
use crate::units::EnergyUnit;

/// 기본 설정 파일 경로
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 오프테이커 조건(목표 단가, 사용량).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfftakeSettings {
    /// 경쟁력 있는 목표 증기 단가 [$/MMBtu]
    pub target_steam_price: f64,
    /// 연간 증기 사용량 [MMBtu/yr]
    pub annual_steam_usage: f64,
}

impl Default for OfftakeSettings {
    fn default() -> Self {
        Self {
            target_steam_price: 4.5,
            annual_steam_usage: 100_000.0,
        }
    }
}

/// 애플리케이션 설정과 기본 시나리오를 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI 언어 코드(auto/ko/en)
    pub language: String,
    /// 천연가스 단가 입력 단위
    pub gas_price_unit: EnergyUnit,
    pub price: PriceInputs,
    pub offtake: OfftakeSettings,
    pub project: ProjectFinancials,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            gas_price_unit: EnergyUnit::MMBtu,
            price: PriceInputs::default(),
            offtake: OfftakeSettings::default(),
            project: ProjectFinancials::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일과 그 경로.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: PathBuf,
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        let cfg = Config::default();
        save_config(&cfg, &path)?;
        info!(path = %path.display(), "기본 설정 파일 생성");
        cfg
    };
    Ok(LoadedConfig { config, path })
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl LoadedConfig {
    /// 설정을 로드한 경로에 다시 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(&self.config, &self.path)
    }
}
