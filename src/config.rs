use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::units::{HeatFluxUnit, HeatTransferUnit, LengthUnit, TemperatureUnit};

/// 기본 설정 파일 경로
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 입출력 시 쓰는 표시 단위. 계산은 항상 SI로 한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayUnits {
    /// 배관 외경/두께
    pub pipe_dimension: LengthUnit,
    /// 배관 간격
    pub pipe_spacing: LengthUnit,
    /// 피복층/열확산판 두께
    pub layer_thickness: LengthUnit,
    pub temperature: TemperatureUnit,
    pub heat_transfer: HeatTransferUnit,
    pub heat_flux: HeatFluxUnit,
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self {
            pipe_dimension: LengthUnit::Millimeter,
            pipe_spacing: LengthUnit::Centimeter,
            layer_thickness: LengthUnit::Millimeter,
            temperature: TemperatureUnit::Celsius,
            heat_transfer: HeatTransferUnit::WPerSquareMeterK,
            heat_flux: HeatFluxUnit::WPerSquareMeter,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display_units: DisplayUnits,
    /// 결과 출력 소수 자릿수
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_units: DisplayUnits::default(),
            precision: 2,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
