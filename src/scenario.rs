//! 시나리오 파일(TOML) 정의와 모델 입력으로의 변환.
//!
//! ```toml
//! [[system]]
//! name = "System A"
//! system_type = "A"
//! W = 0.10
//! ```
//!
//! 값은 SI 단위(m, W/m·K, m²K/W, °C)이며 생략한 키는 표준 기준값을 쓴다.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::iso11855::{
    CaseOfApplication, Covering, DesignTemperatures, EmbeddedPipe, FixingInserts,
    HeatDiffusionDevice, Iso11855Error, LowerConstruction, RadiantSystemInput, Sheathing,
    SystemFamily, SystemLayout, SystemType,
};

/// 시나리오 로드 오류.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("시나리오 파일을 읽을 수 없음: {0}")]
    Io(#[from] std::io::Error),
    #[error("시나리오 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("시나리오 '{name}' 구성 오류: {source}")]
    Invalid {
        name: String,
        #[source]
        source: Iso11855Error,
    },
    #[error("시나리오에 [[system]] 항목이 없음")]
    Empty,
}

/// 시스템 하나의 평면(flat) 구성. 필드 이름은 표준 기호를 따른다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[allow(non_snake_case)]
pub struct SystemSpec {
    pub name: String,
    pub system_type: String,
    pub case_of_application: String,
    /// 배관 간격 [m]. 시스템 D는 무시한다.
    pub W: f64,

    pub pipe_name: String,
    pub external_diameter: f64,
    pub wall_thickness: f64,
    pub pipe_conductivity: f64,

    /// 피복 외경 [m]
    pub d_M: f64,
    /// 피복 열전도율 [W/m·K]
    pub k_M: f64,

    pub s_WL: f64,
    pub k_WL: f64,
    pub L_WL: f64,

    pub s_u: f64,
    pub R_k_B: f64,
    pub k_E: f64,

    pub psi: f64,
    pub k_W: f64,

    pub t_i: f64,
    pub t_V: f64,
    pub t_R: f64,

    /// 한계곡선 계산용 최대 표면온도 [°C]
    pub t_F_max: Option<f64>,
    /// 하향 열손실 계산용 단열재 열저항 [m²K/W]
    pub R_ins: Option<f64>,
    /// 아래 공간 온도 [°C]. 생략하면 t_i
    pub t_u: Option<f64>,
}

impl Default for SystemSpec {
    fn default() -> Self {
        let pipe = EmbeddedPipe::default();
        let sheathing = Sheathing::default();
        let device = HeatDiffusionDevice::default();
        let covering = Covering::default();
        let inserts = FixingInserts::default();
        let t = DesignTemperatures::default();
        Self {
            name: "Default".into(),
            system_type: "A".into(),
            case_of_application: "floor heating".into(),
            W: 0.10,
            pipe_name: pipe.name,
            external_diameter: pipe.external_diameter,
            wall_thickness: pipe.wall_thickness,
            pipe_conductivity: pipe.conductivity,
            d_M: sheathing.external_diameter,
            k_M: sheathing.conductivity,
            s_WL: device.thickness,
            k_WL: device.conductivity,
            L_WL: device.width,
            s_u: covering.thickness,
            R_k_B: covering.resistance,
            k_E: covering.screed_conductivity,
            psi: inserts.volume_ratio,
            k_W: inserts.conductivity,
            t_i: t.indoor,
            t_V: t.supply,
            t_R: t.ret,
            t_F_max: None,
            R_ins: None,
            t_u: None,
        }
    }
}

impl SystemSpec {
    /// 하향 열손실 계산 대상이면 아래 구조체를 돌려준다.
    pub fn lower_construction(&self) -> Option<LowerConstruction> {
        self.R_ins.map(|insulation_resistance| LowerConstruction {
            insulation_resistance,
            temperature_below: self.t_u.unwrap_or(self.t_i),
            ..LowerConstruction::default()
        })
    }
}

impl TryFrom<&SystemSpec> for RadiantSystemInput {
    type Error = Iso11855Error;

    fn try_from(spec: &SystemSpec) -> Result<Self, Self::Error> {
        let system_type: SystemType = spec.system_type.parse()?;
        let case_of_application: CaseOfApplication = spec.case_of_application.parse()?;
        let pipe = EmbeddedPipe::new(
            spec.pipe_name.clone(),
            spec.external_diameter,
            spec.wall_thickness,
            spec.pipe_conductivity,
        )?;
        let layout = SystemLayout::for_type(
            system_type,
            spec.W,
            Some(FixingInserts {
                volume_ratio: spec.psi,
                conductivity: spec.k_W,
            }),
            HeatDiffusionDevice {
                thickness: spec.s_WL,
                conductivity: spec.k_WL,
                width: spec.L_WL,
            },
        );
        Ok(RadiantSystemInput {
            name: spec.name.clone(),
            case_of_application,
            pipe,
            sheathing: Some(Sheathing {
                external_diameter: spec.d_M,
                conductivity: spec.k_M,
            }),
            covering: Covering {
                thickness: spec.s_u,
                resistance: spec.R_k_B,
                screed_conductivity: spec.k_E,
            },
            temperatures: DesignTemperatures {
                indoor: spec.t_i,
                supply: spec.t_V,
                ret: spec.t_R,
            },
            layout,
        })
    }
}

/// `[[system]]` 목록.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub system: Vec<SystemSpec>,
}

impl Scenario {
    pub fn from_toml_str(content: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = toml::from_str(content)?;
        if scenario.system.is_empty() {
            return Err(ScenarioError::Empty);
        }
        Ok(scenario)
    }

    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 각 항목을 모델 입력으로 변환한다. 첫 오류에서 멈춘다.
    pub fn inputs(&self) -> Result<Vec<RadiantSystemInput>, ScenarioError> {
        self.system
            .iter()
            .map(|spec| {
                RadiantSystemInput::try_from(spec).map_err(|source| ScenarioError::Invalid {
                    name: spec.name.clone(),
                    source,
                })
            })
            .collect()
    }

    /// 한계곡선 표가 있는 시스템(D 제외)에 최대 표면온도를 지정한다.
    pub fn with_limit_curves(mut self, max_surface_temperature: f64) -> Result<Self, ScenarioError> {
        for spec in &mut self.system {
            let system_type: SystemType =
                spec.system_type.parse().map_err(|source| ScenarioError::Invalid {
                    name: spec.name.clone(),
                    source,
                })?;
            if system_type.family() != SystemFamily::D {
                spec.t_F_max = Some(max_surface_temperature);
            }
        }
        Ok(self)
    }

    /// W = 0.10 m 의 시스템 A, B, D 예제.
    pub fn sample() -> Self {
        let system = [("System A", "A"), ("System B", "B"), ("System D", "D")]
            .into_iter()
            .map(|(name, system_type)| SystemSpec {
                name: name.into(),
                system_type: system_type.into(),
                W: 0.10,
                ..SystemSpec::default()
            })
            .collect();
        Self { system }
    }
}
