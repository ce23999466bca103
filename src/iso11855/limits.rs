//! 한계곡선(최대 표면온도 기준 한계 열유속)과 하향 열손실.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{Iso11855Error, Iso11855Result};
use super::functions::{self as f, REFERENCE_SPACING};
use super::system::{FamilyDetails, Mode, RadiantSystem, SystemLayout};

/// 표 A.5/A.7 과 A.6/A.8 을 가르는 s_u/λ_E 경계
const THIN_COVER_LIMIT: f64 = 0.0792;

/// 바닥 난방 거주 구역의 최대 표면온도 θ_F,max [°C]
pub const DEFAULT_MAX_SURFACE_TEMPERATURE: f64 = 29.0;

/// 한계곡선과 특성곡선의 교점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LimitCurve {
    /// 최대 표면온도 θ_F,max [°C]
    pub max_surface_temperature: f64,
    /// 환산 계수 φ
    pub phi: f64,
    /// 한계곡선 계수 B_G [W/m²K]
    pub b_g: f64,
    /// 한계곡선 지수 n_G
    pub n_g: f64,
    /// 한계 온도차 Δθ_H,G [K]
    pub limit_temperature_difference: f64,
    /// 한계 열유속 q_G [W/m²]
    pub limit_heat_flux: f64,
}

/// 복사면 아래 구조체와 아래 공간의 온도.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LowerConstruction {
    /// 단열재 열저항 R_λ,ins [m²K/W]
    pub insulation_resistance: f64,
    /// 구조체 열저항 R_λ,construction [m²K/W]
    pub construction_resistance: f64,
    /// 천장 마감(플라스터) 열저항 R_λ,plaster [m²K/W]
    pub plaster_resistance: f64,
    /// 아래 공간 천장 표면 열전달 저항 R_α,ceiling [m²K/W]
    pub surface_resistance: f64,
    /// 아래 공간 온도 θ_u [°C]
    pub temperature_below: f64,
}

impl Default for LowerConstruction {
    fn default() -> Self {
        Self {
            insulation_resistance: 0.75,
            construction_resistance: 0.0,
            plaster_resistance: 0.0,
            surface_resistance: 0.17,
            temperature_below: 20.0,
        }
    }
}

/// 하향 열손실 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DownwardHeatLoss {
    /// R_o [m²K/W]
    pub upward_resistance: f64,
    /// R_u [m²K/W]
    pub downward_resistance: f64,
    /// q_u [W/m²]
    pub heat_flux: f64,
}

impl RadiantSystem {
    /// 주어진 최대 표면온도에서의 한계곡선 교점을 구한다. 난방 모드에서만 정의된다.
    pub fn limit_curve(&self, max_surface_temperature: f64) -> Iso11855Result<LimitCurve> {
        let case = self.case_of_application();
        if case.mode != Mode::Heating {
            return Err(Iso11855Error::InvalidConfiguration(format!(
                "limit curve is defined for heating only, got {case}"
            )));
        }
        let t_i = self.input().temperatures.indoor;
        if !(max_surface_temperature > t_i && max_surface_temperature.is_finite()) {
            return Err(Iso11855Error::NonPhysical {
                what: "maximum surface temperature must be finite and exceed the indoor temperature",
            });
        }
        let phi = f::conversion_factor(max_surface_temperature, t_i);
        let s_u = self.input().covering.thickness;

        let curve = match (self.details(), &self.input().layout) {
            (
                FamilyDetails::Achij {
                    evaluated_spacing,
                    reference_transmission,
                    ..
                },
                SystemLayout::Achij { spacing, .. },
            ) => {
                let lambda_e = self.screed_conductivity();
                let (b_g, n_g) = if s_u / lambda_e <= THIN_COVER_LIMIT {
                    (
                        f::limit_coefficient_thin_cover(s_u, lambda_e, *evaluated_spacing)?,
                        f::limit_exponent_thin_cover(s_u, lambda_e, *evaluated_spacing)?,
                    )
                } else {
                    (
                        f::limit_coefficient_thick_cover(s_u, *evaluated_spacing)?,
                        f::limit_exponent_thick_cover(s_u, *evaluated_spacing)?,
                    )
                };
                check_exponent(n_g)?;
                let deltat = f::limit_temperature_difference(phi, b_g, *reference_transmission, n_g);
                let q_g = f::limit_heat_flux(phi, b_g, deltat, n_g);
                let (deltat, q_g) = if *spacing > REFERENCE_SPACING {
                    let q_g_max = case.surface_heat_flux(max_surface_temperature, t_i);
                    let f_g = f::wide_spacing_limit_factor(s_u, *spacing, q_g_max, q_g);
                    debug!(f_g, "wide spacing limit correction");
                    (
                        f::limit_temperature_difference_wide_spacing(deltat, f_g),
                        f::limit_heat_flux_wide_spacing(q_g, *spacing, f_g),
                    )
                } else {
                    (deltat, q_g)
                };
                (b_g, n_g, deltat, q_g)
            }
            (
                FamilyDetails::B {
                    factors,
                    device_characteristic,
                    full_width_device_factor,
                },
                SystemLayout::B { spacing, device },
            ) => {
                let b_g = f::limit_coefficient_b(*device_characteristic, *spacing)?;
                let n_g = f::limit_exponent_b(*device_characteristic, *spacing)?;
                check_exponent(n_g)?;
                let deltat = f::limit_temperature_difference(phi, b_g, self.k_h(), n_g);
                let q_g = f::limit_heat_flux(phi, b_g, deltat, n_g);
                if device.width < *spacing {
                    // 좁은 열확산판: 한계 열유속을 a_WL 비로 줄이고 특성곡선 위의 점으로 되돌린다.
                    let q_g = f::limit_heat_flux_device_correction(
                        factors.a_wl,
                        *full_width_device_factor,
                        q_g,
                    );
                    (b_g, n_g, q_g / self.k_h(), q_g)
                } else {
                    (b_g, n_g, deltat, q_g)
                }
            }
            _ => {
                return Err(Iso11855Error::InvalidConfiguration(format!(
                    "no limit curve tables for system type {}",
                    self.system_type()
                )))
            }
        };

        let (b_g, n_g, limit_temperature_difference, limit_heat_flux) = curve;
        Ok(LimitCurve {
            max_surface_temperature,
            phi,
            b_g,
            n_g,
            limit_temperature_difference,
            limit_heat_flux,
        })
    }

    /// 식 (A.29) ~ (A.32) - 아래 공간으로의 열손실.
    pub fn downward_heat_loss(&self, lower: &LowerConstruction) -> Iso11855Result<DownwardHeatLoss> {
        let covering = &self.input().covering;
        let r_o = f::upward_resistance(
            covering.resistance,
            covering.thickness,
            self.screed_conductivity(),
            self.surface_heat_transfer_coefficient(),
        );
        let r_u = f::downward_resistance(
            lower.insulation_resistance,
            lower.construction_resistance,
            lower.plaster_resistance,
            lower.surface_resistance,
        );
        if !(r_u > 0.0 && r_u.is_finite()) {
            return Err(Iso11855Error::NonPhysical {
                what: "downward thermal resistance must be positive",
            });
        }
        if !lower.temperature_below.is_finite() {
            return Err(Iso11855Error::NonPhysical {
                what: "temperature of the space below must be finite",
            });
        }
        let t_i = self.input().temperatures.indoor;
        let heat_flux = if lower.temperature_below == t_i {
            f::downward_heat_loss_equal_temperatures(self.heat_flux(), r_o, r_u)
        } else {
            f::downward_heat_loss(r_u, r_o, self.heat_flux(), t_i, lower.temperature_below)
        };
        Ok(DownwardHeatLoss {
            upward_resistance: r_o,
            downward_resistance: r_u,
            heat_flux,
        })
    }
}

fn check_exponent(n_g: f64) -> Iso11855Result<()> {
    if n_g >= 1.0 {
        return Err(Iso11855Error::NonPhysical {
            what: "limit curve exponent n_G must be below 1",
        });
    }
    Ok(())
}
