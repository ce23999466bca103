use serde::{Deserialize, Serialize};

/// 온도 표시 단위. 계산은 섭씨로 한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Kelvin,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    /// 표시 단위 온도를 섭씨로 바꾼다.
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Kelvin => value - 273.15,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        }
    }

    pub fn from_celsius(self, value_c: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value_c,
            TemperatureUnit::Kelvin => value_c + 273.15,
            TemperatureUnit::Fahrenheit => value_c * 9.0 / 5.0 + 32.0,
        }
    }

    /// 온도차 [K]를 표시 단위로 바꾼다. 기준점 없이 배율만 적용한다.
    pub fn difference_from_kelvin(self, delta_k: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius | TemperatureUnit::Kelvin => delta_k,
            TemperatureUnit::Fahrenheit => delta_k * 9.0 / 5.0,
        }
    }

    /// 온도차 단위 기호
    pub fn difference_symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius | TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    to.from_celsius(from.to_celsius(value))
}
