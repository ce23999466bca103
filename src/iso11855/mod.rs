//! ISO 11855 매립형 복사 냉난방 시스템의 열유속 계산.
//!
//! - [`functions`]: 본문 식과 부속서 A의 계수 함수
//! - [`annex_b`]: 부속서 B 저항법 함수
//! - [`tables`], [`interpolation`]: 부속서 표와 보간
//! - [`system`]: 시스템 형식별 계산 체인
//! - [`limits`]: 한계곡선, 하향 열손실

pub mod annex_b;
pub mod error;
pub mod functions;
pub mod interpolation;
pub mod limits;
pub mod pipe;
pub mod system;
pub mod tables;

pub use error::{Iso11855Error, Iso11855Result};
pub use limits::{DownwardHeatLoss, LimitCurve, LowerConstruction, DEFAULT_MAX_SURFACE_TEMPERATURE};
pub use pipe::{EmbeddedPipe, Sheathing};
pub use system::{
    CaseOfApplication, Covering, DesignTemperatures, FamilyDetails, FixingInserts,
    HeatDiffusionDevice, Mode, RadiantSystem, RadiantSystemInput, Surface, SystemFamily,
    SystemLayout, SystemType,
};
