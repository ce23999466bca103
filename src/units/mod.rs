//! 표시 단위 정의 및 변환. 계산 모듈은 SI(m, °C, W)만 쓰고 변환은 입출력에서만 한다.

pub mod heat_transfer;
pub mod length;
pub mod temperature;

pub use heat_transfer::{HeatFluxUnit, HeatTransferUnit};
pub use length::{convert_length, LengthUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
