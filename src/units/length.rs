use serde::{Deserialize, Serialize};

/// 길이 표시 단위. 계산은 항상 미터로 한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Centimeter,
    Millimeter,
    Inch,
}

impl LengthUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Inch => "in",
        }
    }

    /// 1 단위가 몇 미터인지
    fn meters(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Inch => 0.0254,
        }
    }

    /// 표시 단위 값을 미터로 바꾼다.
    pub fn to_meter(self, value: f64) -> f64 {
        value * self.meters()
    }

    /// 미터 값을 표시 단위로 바꾼다.
    pub fn from_meter(self, value_m: f64) -> f64 {
        value_m / self.meters()
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    to.from_meter(from.to_meter(value))
}
