//! ISO 11855-2 본문 식 (1)~(6)과 부속서 A의 계수/인자 함수.
//!
//! 각 함수는 부수효과가 없는 순수 함수이며 식 번호를 문서에 적어둔다.
//! 표 기반 인자는 범위 밖 입력에 대해 [`Iso11855Error::OutOfDomain`]을 돌려준다.

use std::f64::consts::PI;

use super::error::{Iso11855Error, Iso11855Result};
use super::pipe::{
    EmbeddedPipe, Sheathing, REFERENCE_PIPE_CONDUCTIVITY, REFERENCE_PIPE_WALL_THICKNESS,
};
use super::tables;

/// 표 작성 기준 피복 두께 s_u,0 [m]와 열전도율 λ_u,0 [W/m·K]
const REFERENCE_COVER_THICKNESS: f64 = 0.045;
const REFERENCE_COVER_CONDUCTIVITY: f64 = 1.0;

/// 표 A.20의 바닥 난방 표면 열전달계수 [W/m²K]
pub const FLOOR_HEATING_ALPHA: f64 = 10.8;

/// 배관 간격 상한. 이보다 넓으면 식 (A.10)으로 환산한다.
pub const REFERENCE_SPACING: f64 = 0.375;

/// 식 (A.20)의 기준 온도차 Δθ_0 [K]
pub const LIMIT_REFERENCE_DIFFERENCE: f64 = 9.0;

/// 식 (A.33)의 기준 저항 R_λ,B* [m²K/W]
pub const REFERENCE_COVERING_RESISTANCE: f64 = 0.15;

// ---------------------------------------------------------------------------
// 본문 식 (1) ~ (6)
// ---------------------------------------------------------------------------

/// 식 (1) - 바닥 난방/천장 냉방: q = 8.92 |θ_S,m − θ_i|^1.1
pub fn heat_flux_floor_heating(t_s_m: f64, t_i: f64) -> f64 {
    8.92 * (t_s_m - t_i).abs().powf(1.1)
}

/// 식 (2) - 벽 난방/냉방
pub fn heat_flux_wall(t_s_m: f64, t_i: f64) -> f64 {
    8.0 * (t_s_m - t_i).abs()
}

/// 식 (3) - 천장 난방
pub fn heat_flux_ceiling_heating(t_s_m: f64, t_i: f64) -> f64 {
    6.0 * (t_s_m - t_i).abs()
}

/// 식 (4) - 바닥 냉방
pub fn heat_flux_floor_cooling(t_s_m: f64, t_i: f64) -> f64 {
    7.0 * (t_s_m - t_i).abs()
}

/// ∏ aᵢ^mᵢ. 두 슬라이스 중 짧은 쪽 길이까지만 곱한다.
pub fn power_product(a: &[f64], m: &[f64]) -> f64 {
    a.iter().zip(m).map(|(a, m)| a.powf(*m)).product()
}

/// 식 (5) - 단일 거듭제곱 범용식 q = B ∏ aᵢ^mᵢ Δθ_H
pub fn single_power_heat_flux(b: f64, a: &[f64], m: &[f64], deltat_h: f64) -> f64 {
    b * power_product(a, m) * deltat_h
}

/// 식 (6) - 총괄 열전달계수 기반 설계 열유속
pub fn design_heat_flux(h_t: f64, t_s_m: f64, t_i: f64) -> f64 {
    h_t * (t_s_m - t_i).abs()
}

// ---------------------------------------------------------------------------
// 부속서 A - 대수식
// ---------------------------------------------------------------------------

/// 식 (A.1) - 열매와 실내 사이의 로그 평균 온도차 Δθ_H [K].
///
/// 공급/환수 온도가 같거나, 어느 한쪽이 실내 온도와 같거나, 두 온도가 실내
/// 온도의 서로 반대편에 있으면 정의되지 않으므로 오류를 돌려준다.
pub fn log_mean_temperature_difference(t_v: f64, t_r: f64, t_i: f64) -> Iso11855Result<f64> {
    const FORMULA: &str = "A.1 (deltat_H)";
    let supply = t_v - t_i;
    let ret = t_r - t_i;
    if !(supply.is_finite() && ret.is_finite()) {
        return Err(Iso11855Error::DegenerateTemperatureDifference {
            formula: FORMULA,
            reason: "temperatures must be finite",
        });
    }
    if t_v == t_r {
        return Err(Iso11855Error::DegenerateTemperatureDifference {
            formula: FORMULA,
            reason: "supply and return temperature must differ",
        });
    }
    if supply == 0.0 || ret == 0.0 {
        return Err(Iso11855Error::DegenerateTemperatureDifference {
            formula: FORMULA,
            reason: "supply and return temperature must differ from the indoor temperature",
        });
    }
    if supply.signum() != ret.signum() {
        return Err(Iso11855Error::DegenerateTemperatureDifference {
            formula: FORMULA,
            reason: "supply and return temperature must lie on the same side of the indoor temperature",
        });
    }
    let deltat_h = (t_v - t_r) / (supply / ret).ln();
    if !deltat_h.is_finite() {
        return Err(Iso11855Error::DegenerateTemperatureDifference {
            formula: FORMULA,
            reason: "supply and return temperature are too close to evaluate the logarithm",
        });
    }
    Ok(deltat_h)
}

/// 식 (A.4) - 시스템 A, C, H, I, J의 표면 피복 계수 a_B
pub fn surface_covering_factor_achij(alpha: f64, lambda_e: f64, r_k_b: f64) -> f64 {
    (1.0 / alpha + REFERENCE_COVER_THICKNESS / REFERENCE_COVER_CONDUCTIVITY)
        / (1.0 / alpha + REFERENCE_COVER_THICKNESS / lambda_e + r_k_b)
}

/// 식 (A.5), (A.14) - 지수 m_W
pub fn exponent_m_w(w: f64) -> f64 {
    1.0 - w / 0.075
}

/// 식 (A.6) - 지수 m_U
pub fn exponent_m_u(s_u: f64) -> f64 {
    100.0 * (0.045 - s_u)
}

/// 식 (A.7) - 지수 m_D
pub fn exponent_m_d(d: f64) -> f64 {
    250.0 * (d - 0.02)
}

/// 식 (A.8) - 두꺼운 피복층(s_u > s_u*)의 등가 열관류율.
/// `product`는 B ∏ aᵢ^mᵢ (s_u* 기준으로 계산한 값).
pub fn transmission_coefficient_thick_cover(
    product: f64,
    s_u: f64,
    s_u_star: f64,
    lambda_e: f64,
) -> f64 {
    1.0 / (1.0 / product + (s_u - s_u_star) / lambda_e)
}

/// 식 (A.9), (A.34) - q = K_H Δθ_H
pub fn heat_flux(k_h: f64, deltat_h: f64) -> f64 {
    k_h * deltat_h
}

/// 식 (A.10) - W > 0.375 m 일 때 시스템 A, C, H, I, J의 열유속
pub fn heat_flux_wide_spacing(q_0375: f64, w: f64) -> f64 {
    q_0375 * REFERENCE_SPACING / w
}

/// 식 (A.12) - 시스템 B의 표면 피복 계수 a_B
pub fn surface_covering_factor_b(factors: &BFactors, r_k_b: f64, w: f64) -> f64 {
    const B: f64 = 6.5;
    1.0 / (1.0
        + B * factors.a_u
            * factors.a_w.powf(factors.m_w)
            * factors.a_wl
            * factors.a_k
            * r_k_b
            * (1.0 + 0.44 * w.sqrt()))
}

/// 식 (A.13) - 시스템 B, D의 피복 계수 a_U
pub fn covering_factor_bd(alpha: f64, s_u: f64, lambda_e: f64) -> f64 {
    (1.0 / alpha + REFERENCE_COVER_THICKNESS / REFERENCE_COVER_CONDUCTIVITY)
        / (1.0 / alpha + s_u / lambda_e)
}

/// 식 (A.15) - 열확산판 특성값 K_WL
pub fn device_characteristic(s_wl: f64, lambda_wl: f64, b_u: f64, s_u: f64, lambda_e: f64) -> f64 {
    8.0 * (s_wl * lambda_wl + b_u * s_u * lambda_e)
}

/// 식 (A.16) - 열확산판 폭 L_WL이 배관 간격보다 좁을 때의 보정 a_WL
pub fn device_width_correction(a_wl: f64, a_wl_0: f64, l_wl: f64, w: f64) -> f64 {
    let x = l_wl / w;
    a_wl - (a_wl - a_wl_0) * (1.0 - 3.2 * x + 3.4 * x * x - 1.2 * x * x * x)
}

/// 식 (A.18) - 시스템 D의 표면 피복 계수 a_B
pub fn surface_covering_factor_d(a_u: f64, r_k_b: f64) -> f64 {
    const B: f64 = 6.5;
    1.0 / (1.0 + B * a_u * 1.06 * r_k_b)
}

/// 식 (A.19) - 한계곡선 q_G = φ B_G (Δθ_H / φ)^n_G
pub fn limit_heat_flux(phi: f64, b_g: f64, deltat_h: f64, n_g: f64) -> f64 {
    phi * b_g * (deltat_h / phi).powf(n_g)
}

/// 식 (A.20) - 임의의 최대 표면온도로 환산하는 계수 φ
pub fn conversion_factor(t_f_max: f64, t_i: f64) -> f64 {
    ((t_f_max - t_i) / LIMIT_REFERENCE_DIFFERENCE).powf(1.1)
}

/// 식 (A.21) - 특성곡선과 한계곡선의 교점 Δθ_H,G.
/// `characteristic`은 B ∏ aᵢ^mᵢ, 즉 K_H.
pub fn limit_temperature_difference(phi: f64, b_g: f64, characteristic: f64, n_g: f64) -> f64 {
    phi * (b_g / characteristic).powf(1.0 / (1.0 - n_g))
}

/// 식 (A.22) - W > 0.375 m 시스템 A, C의 한계 열유속
pub fn limit_heat_flux_wide_spacing(q_g_0375: f64, w: f64, f_g: f64) -> f64 {
    q_g_0375 * REFERENCE_SPACING / w * f_g
}

/// 식 (A.23) - W > 0.375 m 의 한계 온도차 Δθ_H,G
pub fn limit_temperature_difference_wide_spacing(deltat_h_g_0375: f64, f_g: f64) -> f64 {
    deltat_h_g_0375 * f_g
}

/// 식 (A.24) - 넓은 배관 간격 보정 f_G. s_u/W ≤ 0.173 이면 1.
pub fn wide_spacing_limit_factor(s_u: f64, w: f64, q_g_max: f64, q_g_0375: f64) -> f64 {
    let ratio = s_u / w;
    if ratio > 0.173 {
        let scaled = q_g_0375 * REFERENCE_SPACING / w;
        (q_g_max - (q_g_max - scaled) * (-20.0 * (ratio - 0.173).powi(2)).exp()) / scaled
    } else {
        1.0
    }
}

/// 식 (A.25) - 시스템 B의 한계 열유속 보정
pub fn limit_heat_flux_device_correction(a_wl: f64, a_wl_w: f64, q_g_w: f64) -> f64 {
    a_wl / a_wl_w * q_g_w
}

/// 식 (A.26) - 피복 없는 배관의 재질/두께 영향 계수 B
pub fn pipe_material_factor(b_0: f64, product: f64, w: f64, pipe: &EmbeddedPipe) -> f64 {
    let d_a = pipe.external_diameter;
    let x = 1.0 / b_0
        + 1.1 / PI
            * product
            * w
            * (1.0 / (2.0 * pipe.conductivity) * (d_a / pipe.inner_diameter()).ln()
                - 1.0 / (2.0 * REFERENCE_PIPE_CONDUCTIVITY)
                    * (d_a / (d_a - 2.0 * REFERENCE_PIPE_WALL_THICKNESS)).ln());
    1.0 / x
}

/// 식 (A.27) - 피복 배관의 재질/두께 영향 계수 B
pub fn pipe_material_factor_sheathed(
    b_0: f64,
    product: f64,
    w: f64,
    pipe: &EmbeddedPipe,
    sheathing: &Sheathing,
) -> f64 {
    let d_a = pipe.external_diameter;
    let d_m = sheathing.external_diameter;
    let x = 1.0 / b_0
        + 1.1 / PI
            * product
            * w
            * (1.0 / (2.0 * sheathing.conductivity) * (d_m / d_a).ln()
                + 1.0 / (2.0 * pipe.conductivity)
                    * (d_a / (d_a - 2.0 * pipe.wall_thickness)).ln()
                - 1.0 / (2.0 * REFERENCE_PIPE_CONDUCTIVITY)
                    * (d_m / (d_m - 2.0 * REFERENCE_PIPE_WALL_THICKNESS)).ln());
    1.0 / x
}

/// 식 (A.28) - 고정구가 섞인 모르타르의 열전도율 λ_E'
pub fn screed_conductivity_with_inserts(psi: f64, lambda_e: f64, lambda_w: f64) -> f64 {
    (1.0 - psi) * lambda_e + psi * lambda_w
}

/// 식 (A.29) - 하향 열손실 q_U
pub fn downward_heat_loss(r_u: f64, r_o: f64, q: f64, t_i: f64, t_u: f64) -> f64 {
    (r_o * q + t_i - t_u) / r_u
}

/// 식 (A.30) - 상향 부분 열저항 R_o
pub fn upward_resistance(r_k_b: f64, s_u: f64, lambda_u: f64, alpha: f64) -> f64 {
    1.0 / alpha + r_k_b + s_u / lambda_u
}

/// 식 (A.31) - 하향 부분 열저항 R_u
pub fn downward_resistance(r_insulation: f64, r_construction: f64, r_plaster: f64, r_alpha: f64) -> f64 {
    r_insulation + r_construction + r_plaster + r_alpha
}

/// 식 (A.32) - θ_u = θ_i 일 때의 하향 열손실
pub fn downward_heat_loss_equal_temperatures(q: f64, r_o: f64, r_u: f64) -> f64 {
    q * r_o / r_u
}

/// 식 (A.33) - 추가 표면 저항이 있는 경우의 등가 열관류율
pub fn transmission_coefficient_extra_resistance(
    k_h_floor: f64,
    delta_r_alpha: f64,
    r_k_b: f64,
    k_h_floor_star: f64,
) -> f64 {
    k_h_floor
        / (1.0
            + ((delta_r_alpha + r_k_b) / REFERENCE_COVERING_RESISTANCE)
                * (k_h_floor / k_h_floor_star - 1.0))
}

/// 식 (A.35) - 바닥 난방 대비 추가 표면 열전달 저항 ΔR_α
pub fn additional_surface_resistance(alpha: f64) -> f64 {
    1.0 / alpha - 1.0 / FLOOR_HEATING_ALPHA
}

// ---------------------------------------------------------------------------
// 계수 묶음 - 식 (A.3), (A.11), (A.17)
// ---------------------------------------------------------------------------

/// 시스템 A, C, H, I, J의 인자와 지수.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AchijFactors {
    pub a_b: f64,
    pub a_w: f64,
    pub a_u: f64,
    pub a_d: f64,
    pub m_w: f64,
    pub m_u: f64,
    pub m_d: f64,
}

impl AchijFactors {
    pub fn product(&self) -> f64 {
        power_product(
            &[self.a_b, self.a_w, self.a_u, self.a_d],
            &[1.0, self.m_w, self.m_u, self.m_d],
        )
    }

    /// 식 (A.3)
    pub fn heat_flux(&self, b: f64, deltat_h: f64) -> f64 {
        b * self.product() * deltat_h
    }
}

/// 시스템 B의 인자와 지수.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BFactors {
    pub a_b: f64,
    pub a_w: f64,
    pub a_u: f64,
    pub a_wl: f64,
    pub a_k: f64,
    pub m_w: f64,
}

impl BFactors {
    pub fn product(&self) -> f64 {
        power_product(
            &[self.a_b, self.a_w, self.a_u, self.a_wl, self.a_k],
            &[1.0, self.m_w, 1.0, 1.0, 1.0],
        )
    }

    /// 식 (A.11)
    pub fn heat_flux(&self, b: f64, deltat_h: f64) -> f64 {
        b * self.product() * deltat_h
    }
}

/// 시스템 D의 인자. 배관 간격 인자는 상수 1.06으로 고정된다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DFactors {
    pub a_b: f64,
    pub a_u: f64,
}

impl DFactors {
    pub const SPACING_FACTOR: f64 = 1.06;

    pub fn product(&self) -> f64 {
        power_product(&[self.a_b, Self::SPACING_FACTOR, self.a_u], &[1.0, 1.0, 1.0])
    }

    /// 식 (A.17)
    pub fn heat_flux(&self, b: f64, deltat_h: f64) -> f64 {
        b * self.product() * deltat_h
    }
}

// ---------------------------------------------------------------------------
// 부속서 A - 표 기반 인자
// ---------------------------------------------------------------------------

/// 표 A.2 - a_W(R_λ,B)
pub fn pipe_spacing_factor_achij(r_k_b: f64) -> Iso11855Result<f64> {
    tables::PIPE_SPACING_FACTOR_ACHIJ.eval(r_k_b)
}

/// 표 A.3 - a_U(R_λ,B, W)
pub fn covering_factor_achij(r_k_b: f64, w: f64) -> Iso11855Result<f64> {
    tables::COVERING_FACTOR_ACHIJ.eval(r_k_b, w)
}

/// 표 A.4 - a_D(R_λ,B, W)
pub fn pipe_diameter_factor_achij(r_k_b: f64, w: f64) -> Iso11855Result<f64> {
    tables::PIPE_DIAMETER_FACTOR_ACHIJ.eval(r_k_b, w)
}

/// 표 A.5 - B_G(s_u/λ_E, W), s_u/λ_E ≤ 0.0792
pub fn limit_coefficient_thin_cover(s_u: f64, lambda_e: f64, w: f64) -> Iso11855Result<f64> {
    tables::LIMIT_COEFFICIENT_THIN_ACHIJ.eval(s_u / lambda_e, w)
}

/// 표 A.6 - B_G(s_u/W), s_u/λ_E > 0.0792. s_u/W > 0.7 이면 100.
pub fn limit_coefficient_thick_cover(s_u: f64, w: f64) -> Iso11855Result<f64> {
    let ratio = s_u / w;
    if ratio <= 0.7 {
        tables::LIMIT_COEFFICIENT_THICK_ACHIJ.eval(ratio)
    } else {
        Ok(100.0)
    }
}

/// 표 A.7 - n_G(s_u/λ_E, W), s_u/λ_E ≤ 0.0792
pub fn limit_exponent_thin_cover(s_u: f64, lambda_e: f64, w: f64) -> Iso11855Result<f64> {
    tables::LIMIT_EXPONENT_THIN_ACHIJ.eval(s_u / lambda_e, w)
}

/// 표 A.8 - n_G(s_u/W), s_u/λ_E > 0.0792. s_u/W > 0.7 이면 0.
pub fn limit_exponent_thick_cover(s_u: f64, w: f64) -> Iso11855Result<f64> {
    let ratio = s_u / w;
    if ratio <= 0.7 {
        tables::LIMIT_EXPONENT_THICK_ACHIJ.eval(ratio)
    } else {
        Ok(0.0)
    }
}

/// 표 A.9 - 시스템 B의 a_W(s_u/λ_E)
pub fn pipe_spacing_factor_b(s_u: f64, lambda_e: f64) -> Iso11855Result<f64> {
    tables::PIPE_SPACING_FACTOR_B.eval(s_u / lambda_e)
}

/// 표 A.10 - b_u(W). W ≤ 0.1 이면 1, W ≥ 0.45 이면 0.
pub fn spacing_correction_b(w: f64) -> Iso11855Result<f64> {
    if w <= 0.1 {
        Ok(1.0)
    } else if w < 0.45 {
        tables::SPACING_CORRECTION_B.eval(w)
    } else {
        Ok(0.0)
    }
}

/// 표 A.11 ~ A.16 - K_WL < 0.5 구간의 a_WL(K_WL, W, D), 삼선형 보간
pub fn device_factor_low(k_wl: f64, w: f64, d: f64) -> Iso11855Result<f64> {
    tables::HEAT_CONDUCTION_DEVICE_FACTOR.eval(k_wl, w, d)
}

/// 표 A.16 - K_WL = ∞ 열의 a_WL(W)
pub fn device_factor_infinite(w: f64) -> Iso11855Result<f64> {
    tables::HEAT_CONDUCTION_DEVICE_FACTOR_INFINITE.eval(w)
}

/// 표 A.16 - K_WL ≥ 0.5 구간의 a_WL.
/// K_WL > 1 이면 K_WL = 0 값과 K_WL = ∞ 값 사이를 지수식으로 잇는다.
pub fn device_factor_high(k_wl: f64, w: f64, d: f64) -> Iso11855Result<f64> {
    if k_wl > 1.0 {
        let a_inf = device_factor_infinite(w)?;
        let a_0 = device_factor_low(0.0, w, d)?;
        Ok(a_inf - (a_inf - a_0) * ((a_inf - 1.0) / (a_inf - a_0)).powf(k_wl))
    } else {
        tables::HEAT_CONDUCTION_DEVICE_FACTOR_HIGH.eval(k_wl, w)
    }
}

/// K_WL 값에 따라 표 A.11 ~ A.16 중 알맞은 것을 고른다.
pub fn device_factor(k_wl: f64, w: f64, d: f64) -> Iso11855Result<f64> {
    if k_wl < 0.5 {
        device_factor_low(k_wl, w, d)
    } else {
        device_factor_high(k_wl, w, d)
    }
}

/// 표 A.17 - 시스템 B의 접촉 보정 a_K(W)
pub fn contact_factor_b(w: f64) -> Iso11855Result<f64> {
    tables::CONTACT_FACTOR_B.eval(w)
}

/// 표 A.18 - 시스템 B의 B_G(K_WL, W)
pub fn limit_coefficient_b(k_wl: f64, w: f64) -> Iso11855Result<f64> {
    tables::LIMIT_COEFFICIENT_B.eval(w, k_wl)
}

/// 표 A.19 - 시스템 B의 n_G(K_WL, W)
pub fn limit_exponent_b(k_wl: f64, w: f64) -> Iso11855Result<f64> {
    tables::LIMIT_EXPONENT_B.eval(w, k_wl)
}
