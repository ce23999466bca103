//! 부속서 B - 저항법(시스템 E, F)의 열저항 및 열전달 함수.
//!
//! 시스템 모델은 이 함수들을 호출하지 않는다. 독립적으로 쓰는 공학 함수다.

use std::f64::consts::PI;

/// 식 (B.1) - 공급 온도와 전도층 평균 온도 사이 총 열저항 R_t
pub fn total_resistance(r_z: f64, r_w: f64, r_r: f64, r_x: f64) -> f64 {
    r_z + r_w + r_r + r_x
}

/// 식 (B.2) - 양면 전달(시스템 F)의 총 열저항 R_t.
/// `mass_flow`는 단위 면적당 열매 유량 m_H,sp [kg/m²s], `specific_heat`는 c [J/kg·K].
pub fn total_resistance_two_sided(
    r_w: f64,
    r_r: f64,
    r_x: f64,
    u_1: f64,
    u_2: f64,
    mass_flow: f64,
    specific_heat: f64,
) -> f64 {
    let u = 1.0 / (u_1 + u_2);
    let mc = mass_flow * specific_heat;
    1.0 / mc * (1.0 - (-1.0 / ((r_w + r_r + r_x + u) * mc)).exp()) - u
}

/// 식 (B.3) - 공간 1로의 정상상태 열유속 q_1
pub fn heat_flux_to_first_space(r_1: f64, r_2: f64, r_t: f64, t_1: f64, t_2: f64, t_v: f64) -> f64 {
    (r_t * (t_2 - t_1) + r_2 * (t_v - t_1)) / (r_1 * r_2 + r_1 * r_t + r_2 * r_t)
}

/// 식 (B.4) - 공간 2로의 정상상태 열유속 q_2
pub fn heat_flux_to_second_space(r_1: f64, r_2: f64, r_t: f64, t_1: f64, t_2: f64, t_v: f64) -> f64 {
    (r_t * (t_1 - t_2) + r_1 * (t_v - t_2)) / (r_1 * r_2 + r_1 * r_t + r_2 * r_t)
}

/// 식 (B.5) - 시스템 E, F의 등가 열관류율 K_H
pub fn transmission_coefficient(r_w: f64, r_r: f64, r_x: f64, r_i: f64) -> f64 {
    1.0 / (r_w + r_r + r_x + r_i)
}

/// 식 (B.6) - 시스템 E의 열매측 저항 R_w.
/// `pipe_length`는 단위 면적당 배관 길이 l [m/m²].
pub fn water_side_resistance_e(
    w: f64,
    d_a: f64,
    s_r: f64,
    mass_flow: f64,
    pipe_length: f64,
) -> f64 {
    w.powf(0.13) / (8.0 * PI) * ((d_a - 2.0 * s_r) / (mass_flow * pipe_length)).powf(0.87)
}

/// 식 (B.7), (B.12) - 배관 벽 저항 R_r
pub fn pipe_wall_resistance(w: f64, d_a: f64, s_r: f64, lambda_r: f64) -> f64 {
    w * (d_a / (d_a - 2.0 * s_r)).ln() / (2.0 * PI * lambda_r)
}

/// 식 (B.8) - 시스템 E의 배관 외벽-전도층 저항 R_x
pub fn conduction_resistance_e(w: f64, d_a: f64, lambda_b: f64) -> f64 {
    w * (w / (PI * d_a)).ln() / (2.0 * PI * lambda_b)
}

/// 식 (B.9) - 표면 열전달계수와 층 저항을 합친 열전달계수 U_i
pub fn layer_heat_transfer_coefficient(h_i: f64, s_i: f64, lambda_b: f64) -> f64 {
    1.0 / (1.0 / h_i + s_i / lambda_b)
}

/// 식 (B.10), (B.16) - R_i = 1 / U_i
pub fn resistance_from_coefficient(u_i: f64) -> f64 {
    1.0 / u_i
}

/// 식 (B.11) - 시스템 F의 열매측 저항 R_w
pub fn water_side_resistance_f(w: f64, lambda_w: f64, mass_flow: f64, specific_heat: f64) -> f64 {
    w / (PI * lambda_w)
        * (49.03 + 16.68 / PI * mass_flow * specific_heat * w / lambda_w).powf(-1.0 / 3.0)
}

/// 식 (B.13) - 시스템 F의 배관 외벽-전도층 저항 R_x
pub fn conduction_resistance_f(w: f64, d_a: f64, lambda_l: f64) -> f64 {
    w / 3.0 * (w / (PI * d_a)) / (2.0 * PI * lambda_l)
}

/// 식 (B.14) - 시스템 F 공간 1측 열전달계수 U_1
pub fn first_side_coefficient(h_1: f64, s_1: f64, lambda_b: f64, s_l: f64, lambda_l: f64) -> f64 {
    1.0 / (1.0 / h_1 + s_1 / lambda_b + s_l / (2.0 * lambda_l))
}

/// 식 (B.15) - 시스템 F 공간 2측 열전달계수 U_2
pub fn second_side_coefficient(h_2: f64, s_l: f64, lambda_l: f64) -> f64 {
    1.0 / (1.0 / h_2 + s_l / (2.0 * lambda_l))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steady_state_fluxes_balance_supply_heat() {
        // q_1 + q_2 는 공급 온도에서 R_t를 통해 들어오는 열과 같아야 한다.
        let (r_1, r_2, r_t) = (0.15, 0.9, 0.05);
        let (t_1, t_2, t_v) = (20.0, 15.0, 35.0);
        let q_1 = heat_flux_to_first_space(r_1, r_2, r_t, t_1, t_2, t_v);
        let q_2 = heat_flux_to_second_space(r_1, r_2, r_t, t_1, t_2, t_v);
        let t_c = t_1 + q_1 * r_1;
        assert!((t_c - (t_2 + q_2 * r_2)).abs() < 1e-9);
        assert!(((t_v - t_c) / r_t - (q_1 + q_2)).abs() < 1e-9);
    }

    #[test]
    fn coefficient_and_resistance_are_reciprocal() {
        let u = layer_heat_transfer_coefficient(10.8, 0.045, 1.2);
        assert!((resistance_from_coefficient(u) - (1.0 / 10.8 + 0.045 / 1.2)).abs() < 1e-12);
    }
}
