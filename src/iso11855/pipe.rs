use serde::{Deserialize, Serialize};

use super::error::{Iso11855Error, Iso11855Result};

/// 기준 배관(표준 표 작성 기준): λ_R,0 = 0.35 W/m·K, s_R,0 = 0.002 m
pub const REFERENCE_PIPE_CONDUCTIVITY: f64 = 0.35;
pub const REFERENCE_PIPE_WALL_THICKNESS: f64 = 0.002;

/// 매립 배관. 생성 후 변경하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedPipe {
    pub name: String,
    /// 배관 외경 d_a [m]
    pub external_diameter: f64,
    /// 배관 두께 s_R [m]
    pub wall_thickness: f64,
    /// 배관 재질 열전도율 λ_R [W/m·K]
    pub conductivity: f64,
}

impl Default for EmbeddedPipe {
    fn default() -> Self {
        Self {
            name: "Default".into(),
            external_diameter: 0.016,
            wall_thickness: REFERENCE_PIPE_WALL_THICKNESS,
            conductivity: REFERENCE_PIPE_CONDUCTIVITY,
        }
    }
}

impl EmbeddedPipe {
    /// 검증된 배관을 생성한다. d_a > 2·s_R > 0, λ_R > 0 이어야 한다.
    pub fn new(
        name: impl Into<String>,
        external_diameter: f64,
        wall_thickness: f64,
        conductivity: f64,
    ) -> Iso11855Result<Self> {
        let pipe = Self {
            name: name.into(),
            external_diameter,
            wall_thickness,
            conductivity,
        };
        pipe.validate()?;
        Ok(pipe)
    }

    pub fn validate(&self) -> Iso11855Result<()> {
        if ![self.external_diameter, self.wall_thickness, self.conductivity]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(Iso11855Error::NonPhysical {
                what: "pipe dimensions and conductivity must be finite",
            });
        }
        if !(self.wall_thickness > 0.0) {
            return Err(Iso11855Error::NonPhysical {
                what: "pipe wall thickness must be positive",
            });
        }
        if !(self.external_diameter > 2.0 * self.wall_thickness) {
            return Err(Iso11855Error::NonPhysical {
                what: "pipe external diameter must exceed twice the wall thickness",
            });
        }
        if !(self.conductivity > 0.0) {
            return Err(Iso11855Error::NonPhysical {
                what: "pipe conductivity must be positive",
            });
        }
        Ok(())
    }

    /// 배관 내경 [m]
    pub fn inner_diameter(&self) -> f64 {
        self.external_diameter - 2.0 * self.wall_thickness
    }
}

/// 배관 피복(sheathing).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sheathing {
    /// 피복 외경 d_M [m]
    pub external_diameter: f64,
    /// 피복 열전도율 λ_M [W/m·K]
    pub conductivity: f64,
}

impl Default for Sheathing {
    fn default() -> Self {
        Self {
            external_diameter: 0.016,
            conductivity: 1.0,
        }
    }
}
