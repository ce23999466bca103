use thiserror::Error;

/// ISO 11855 계산 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Iso11855Error {
    /// 알 수 없는 시스템 형식/적용 조건 등 구성 오류
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// 물리적으로 불가능한 입력(음의 두께, 배관 내경 ≤ 0 등)
    #[error("non-physical input: {what}")]
    NonPhysical { what: &'static str },

    /// 표 범위를 벗어난 보간 입력. 표 밖으로 외삽하지 않는다.
    #[error("input outside tabulated domain: {table} requires {variable} in [{min}, {max}], got {value}")]
    OutOfDomain {
        table: &'static str,
        variable: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// 로그 평균 온도차 등에서 온도차가 0이 되어 계산 불가
    #[error("degenerate temperature difference in {formula}: {reason}")]
    DegenerateTemperatureDifference {
        formula: &'static str,
        reason: &'static str,
    },
}

pub type Iso11855Result<T> = Result<T, Iso11855Error>;
