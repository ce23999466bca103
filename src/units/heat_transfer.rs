use serde::{Deserialize, Serialize};

/// 1 Btu/h·ft²·°F = 5.678263 W/m²K
const BTU_PER_HOUR_SQUARE_FOOT_F: f64 = 5.678263;
/// 1 Btu/h·ft² = 3.154591 W/m²
const BTU_PER_HOUR_SQUARE_FOOT: f64 = 3.154591;

/// 열관류율(K_H, α) 표시 단위. 내부 기준은 W/m²K.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatTransferUnit {
    WPerSquareMeterK,
    BtuPerHourSquareFootF,
}

/// 열유속 표시 단위. 내부 기준은 W/m².
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatFluxUnit {
    WPerSquareMeter,
    BtuPerHourSquareFoot,
}

impl HeatTransferUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            HeatTransferUnit::WPerSquareMeterK => "W/m²K",
            HeatTransferUnit::BtuPerHourSquareFootF => "Btu/h·ft²·°F",
        }
    }

    pub fn from_base(self, value: f64) -> f64 {
        match self {
            HeatTransferUnit::WPerSquareMeterK => value,
            HeatTransferUnit::BtuPerHourSquareFootF => value / BTU_PER_HOUR_SQUARE_FOOT_F,
        }
    }
}

impl HeatFluxUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            HeatFluxUnit::WPerSquareMeter => "W/m²",
            HeatFluxUnit::BtuPerHourSquareFoot => "Btu/h·ft²",
        }
    }

    pub fn from_base(self, value: f64) -> f64 {
        match self {
            HeatFluxUnit::WPerSquareMeter => value,
            HeatFluxUnit::BtuPerHourSquareFoot => value / BTU_PER_HOUR_SQUARE_FOOT,
        }
    }
}
