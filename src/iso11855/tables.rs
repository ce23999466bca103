//! ISO 11855-2 부속서 A의 참조표.
//!
//! 값은 표준 표를 그대로 옮긴 것이며, 보간은 [`super::interpolation`]에서 한다.
//! 2차원 표는 행 = 두 번째 변수(대부분 배관 간격 W), 열 = 첫 번째 변수.

use super::interpolation::{Table1, Table2, Table3};

const R_K_B_NODES: [f64; 4] = [0.0, 0.05, 0.1, 0.15];
const W_NODES_8: [f64; 8] = [0.05, 0.075, 0.1, 0.15, 0.2, 0.225, 0.3, 0.375];
const W_NODES_9: [f64; 9] = [0.05, 0.075, 0.1, 0.15, 0.2, 0.225, 0.3, 0.375, 0.45];
const S_U_LAMBDA_NODES: [f64; 9] = [
    0.01, 0.0208, 0.0292, 0.0375, 0.0458, 0.0542, 0.0625, 0.0708, 0.0792,
];
const S_U_W_NODES: [f64; 12] = [
    0.173, 0.2, 0.25, 0.3, 0.35, 0.4, 0.45, 0.5, 0.55, 0.6, 0.65, 0.7,
];
const K_WL_LIMIT_NODES: [f64; 15] = [
    0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.1, 1.2, 1.3, 1.4, 1.5,
];

/// 표 A.2 - 시스템 A, C, H, I, J의 배관 간격 계수 a_W(R_λ,B)
pub static PIPE_SPACING_FACTOR_ACHIJ: Table1 = Table1 {
    name: "Table A.2 (a_W)",
    variable: "R_k_B",
    x: &R_K_B_NODES,
    y: &[1.23, 1.188, 1.156, 1.134],
};

/// 표 A.3 - 시스템 A, C, H, I, J의 피복 계수 a_U(R_λ,B, W)
pub static COVERING_FACTOR_ACHIJ: Table2 = Table2 {
    name: "Table A.3 (a_U)",
    x_variable: "R_k_B",
    y_variable: "W",
    x: &R_K_B_NODES,
    y: &W_NODES_8,
    z: &[
        1.069, 1.056, 1.043, 1.037, //
        1.066, 1.053, 1.041, 1.035, //
        1.063, 1.050, 1.039, 1.0335, //
        1.057, 1.046, 1.035, 1.0305, //
        1.051, 1.041, 1.0315, 1.0275, //
        1.048, 1.038, 1.0295, 1.026, //
        1.0395, 1.031, 1.024, 1.021, //
        1.03, 1.0221, 1.0181, 1.015, //
    ],
};

/// 표 A.4 - 시스템 A, C, H, I, J의 배관 외경 계수 a_D(R_λ,B, W)
pub static PIPE_DIAMETER_FACTOR_ACHIJ: Table2 = Table2 {
    name: "Table A.4 (a_D)",
    x_variable: "R_k_B",
    y_variable: "W",
    x: &R_K_B_NODES,
    y: &W_NODES_8,
    z: &[
        1.013, 1.013, 1.012, 1.011, //
        1.021, 1.019, 1.016, 1.014, //
        1.029, 1.025, 1.022, 1.018, //
        1.040, 1.034, 1.029, 1.024, //
        1.046, 1.040, 1.035, 1.030, //
        1.049, 1.043, 1.038, 1.033, //
        1.053, 1.049, 1.044, 1.039, //
        1.056, 1.051, 1.046, 1.042, //
    ],
};

/// 표 A.5 - s_u/λ_E ≤ 0.0792 일 때 한계곡선 계수 B_G(s_u/λ_E, W)
pub static LIMIT_COEFFICIENT_THIN_ACHIJ: Table2 = Table2 {
    name: "Table A.5 (B_G)",
    x_variable: "s_u/k_E",
    y_variable: "W",
    x: &S_U_LAMBDA_NODES,
    y: &W_NODES_8,
    z: &[
        85.0, 91.5, 96.8, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, //
        75.3, 83.5, 89.9, 96.3, 99.5, 100.0, 100.0, 100.0, 100.0, //
        66.0, 75.4, 82.9, 89.3, 95.5, 98.8, 100.0, 100.0, 100.0, //
        51.0, 61.1, 69.2, 76.3, 82.7, 87.5, 91.8, 95.1, 97.8, //
        38.5, 48.2, 56.2, 63.1, 69.1, 74.5, 81.3, 86.4, 90.0, //
        33.0, 42.5, 49.5, 56.5, 62.0, 67.5, 75.3, 81.6, 86.1, //
        20.5, 26.8, 31.6, 36.4, 51.5, 47.5, 57.5, 65.3, 72.4, //
        11.5, 13.7, 15.5, 18.2, 21.5, 27.5, 40.0, 49.1, 58.3, //
    ],
};

/// 표 A.6 - s_u/λ_E > 0.0792 일 때 한계곡선 계수 B_G(s_u/W)
pub static LIMIT_COEFFICIENT_THICK_ACHIJ: Table1 = Table1 {
    name: "Table A.6 (B_G)",
    variable: "s_u/W",
    x: &S_U_W_NODES,
    y: &[
        27.5, 40.0, 57.5, 69.5, 78.2, 84.5, 88.3, 91.6, 94.0, 96.3, 98.6, 99.8,
    ],
};

/// 표 A.7 - s_u/λ_E ≤ 0.0792 일 때 한계곡선 지수 n_G(s_u/λ_E, W)
pub static LIMIT_EXPONENT_THIN_ACHIJ: Table2 = Table2 {
    name: "Table A.7 (n_G)",
    x_variable: "s_u/k_E",
    y_variable: "W",
    x: &S_U_LAMBDA_NODES,
    y: &[0.05, 0.075, 0.1, 0.15, 0.2, 0.225, 0.2625, 0.3, 0.3375, 0.375],
    z: &[
        0.008, 0.005, 0.002, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, //
        0.024, 0.021, 0.018, 0.011, 0.002, 0.0, 0.0, 0.0, 0.0, //
        0.046, 0.043, 0.041, 0.033, 0.014, 0.005, 0.0, 0.0, 0.0, //
        0.088, 0.085, 0.082, 0.076, 0.055, 0.038, 0.024, 0.014, 0.006, //
        0.131, 0.130, 0.129, 0.123, 0.105, 0.083, 0.057, 0.040, 0.028, //
        0.155, 0.154, 0.153, 0.146, 0.130, 0.110, 0.077, 0.056, 0.041, //
        0.197, 0.196, 0.196, 0.190, 0.173, 0.150, 0.110, 0.083, 0.062, //
        0.254, 0.253, 0.253, 0.245, 0.228, 0.195, 0.145, 0.114, 0.086, //
        0.322, 0.321, 0.321, 0.310, 0.293, 0.260, 0.187, 0.148, 0.115, //
        0.422, 0.421, 0.421, 0.405, 0.385, 0.325, 0.230, 0.183, 0.142, //
    ],
};

/// 표 A.8 - s_u/λ_E > 0.0792 일 때 한계곡선 지수 n_G(s_u/W)
pub static LIMIT_EXPONENT_THICK_ACHIJ: Table1 = Table1 {
    name: "Table A.8 (n_G)",
    variable: "s_u/W",
    x: &S_U_W_NODES,
    y: &[
        0.32, 0.23, 0.145, 0.097, 0.067, 0.048, 0.033, 0.023, 0.015, 0.009, 0.005, 0.002,
    ],
};

/// 표 A.9 - 시스템 B의 배관 간격 계수 a_W(s_u/λ_E)
pub static PIPE_SPACING_FACTOR_B: Table1 = Table1 {
    name: "Table A.9 (a_W)",
    variable: "s_u/k_E",
    x: &[0.01, 0.02, 0.03, 0.04, 0.05, 0.06, 0.08, 0.1, 0.15, 0.18],
    y: &[
        1.103, 1.1, 1.097, 1.094, 1.091, 1.088, 1.082, 1.075, 1.064, 1.059,
    ],
};

/// 표 A.10 - 시스템 B의 배관 간격 보정 b_u(W), 0.1 ≤ W ≤ 0.45 구간
pub static SPACING_CORRECTION_B: Table1 = Table1 {
    name: "Table A.10 (b_u)",
    variable: "W",
    x: &[0.1, 0.15, 0.2, 0.225, 0.3, 0.375, 0.45],
    y: &[1.0, 0.7, 0.5, 0.43, 0.25, 0.1, 0.0],
};

/// 표 A.11 ~ A.16 - 열확산판 계수 a_WL(K_WL, W, D), K_WL = 0 ~ 0.5
pub static HEAT_CONDUCTION_DEVICE_FACTOR: Table3 = Table3 {
    name: "Tables A.11-A.16 (a_WL)",
    variables: ["K_WL", "W", "D"],
    x: &[0.0, 0.1, 0.2, 0.3, 0.4, 0.5],
    y: &W_NODES_9,
    z: &[0.014, 0.016, 0.018, 0.020, 0.022],
    v: &[
        // 표 A.11, K_WL = 0.0
        0.82, 0.86, 0.9, 0.93, 0.96, //
        0.59, 0.644, 0.7, 0.754, 0.8, //
        0.488, 0.533, 0.576, 0.617, 0.658, //
        0.387, 0.415, 0.444, 0.47, 0.505, //
        0.337, 0.357, 0.379, 0.4, 0.422, //
        0.32, 0.34, 0.357, 0.376, 0.396, //
        0.288, 0.3, 0.315, 0.33, 0.344, //
        0.266, 0.278, 0.29, 0.3, 0.312, //
        0.25, 0.264, 0.28, 0.29, 0.3, //
        // 표 A.12, K_WL = 0.1
        0.88, 0.905, 0.93, 0.955, 0.975, //
        0.74, 0.776, 0.812, 0.836, 0.859, //
        0.66, 0.693, 0.726, 0.76, 0.77, //
        0.561, 0.58, 0.6, 0.621, 0.642, //
        0.49, 0.51, 0.53, 0.55, 0.57, //
        0.467, 0.485, 0.504, 0.522, 0.54, //
        0.435, 0.444, 0.453, 0.462, 0.472, //
        0.411, 0.421, 0.434, 0.446, 0.46, //
        0.41, 0.42, 0.43, 0.44, 0.45, //
        // 표 A.13, K_WL = 0.2
        0.92, 0.937, 0.955, 0.97, 0.985, //
        0.845, 0.865, 0.885, 0.893, 0.902, //
        0.81, 0.821, 0.832, 0.843, 0.855, //
        0.735, 0.745, 0.755, 0.765, 0.775, //
        0.68, 0.688, 0.695, 0.703, 0.71, //
        0.655, 0.663, 0.67, 0.678, 0.685, //
        0.585, 0.592, 0.6, 0.608, 0.615, //
        0.55, 0.558, 0.565, 0.573, 0.58, //
        0.55, 0.555, 0.56, 0.565, 0.57, //
        // 표 A.14, K_WL = 0.3
        0.95, 0.96, 0.97, 0.98, 0.99, //
        0.92, 0.925, 0.93, 0.935, 0.94, //
        0.9, 0.905, 0.91, 0.915, 0.92, //
        0.855, 0.855, 0.855, 0.855, 0.855, //
        0.8, 0.8, 0.8, 0.8, 0.8, //
        0.79, 0.79, 0.79, 0.79, 0.79, //
        0.72, 0.72, 0.72, 0.72, 0.72, //
        0.69, 0.69, 0.69, 0.69, 0.69, //
        0.68, 0.68, 0.68, 0.68, 0.68, //
        // 표 A.15, K_WL = 0.4
        0.97, 0.978, 0.985, 0.99, 0.995, //
        0.965, 0.964, 0.963, 0.962, 0.96, //
        0.94, 0.94, 0.94, 0.94, 0.94, //
        0.895, 0.895, 0.895, 0.895, 0.895, //
        0.86, 0.86, 0.86, 0.86, 0.86, //
        0.84, 0.84, 0.84, 0.84, 0.84, //
        0.78, 0.78, 0.78, 0.78, 0.78, //
        0.76, 0.76, 0.76, 0.76, 0.76, //
        0.75, 0.75, 0.75, 0.75, 0.75, //
        // 표 A.16 첫 열, K_WL = 0.5
        0.995, 0.995, 0.995, 0.995, 0.995, //
        0.979, 0.979, 0.979, 0.979, 0.979, //
        0.963, 0.963, 0.963, 0.963, 0.963, //
        0.924, 0.924, 0.924, 0.924, 0.924, //
        0.894, 0.894, 0.894, 0.894, 0.894, //
        0.88, 0.88, 0.88, 0.88, 0.88, //
        0.83, 0.83, 0.83, 0.83, 0.83, //
        0.815, 0.815, 0.815, 0.815, 0.815, //
        0.81, 0.81, 0.81, 0.81, 0.81, //
    ],
};

/// 표 A.16 - 0.5 ≤ K_WL ≤ 1 구간의 열확산판 계수 a_WL(K_WL, W)
pub static HEAT_CONDUCTION_DEVICE_FACTOR_HIGH: Table2 = Table2 {
    name: "Table A.16 (a_WL)",
    x_variable: "K_WL",
    y_variable: "W",
    x: &[0.5, 0.6, 0.7, 0.8, 0.9, 1.0],
    y: &W_NODES_9,
    z: &[
        0.995, 0.998, 1.0, 1.0, 1.0, 1.0, //
        0.979, 0.984, 0.99, 0.995, 0.998, 1.0, //
        0.963, 0.972, 0.98, 0.988, 0.995, 1.0, //
        0.924, 0.945, 0.96, 0.974, 0.99, 1.0, //
        0.894, 0.921, 0.943, 0.961, 0.98, 1.0, //
        0.88, 0.908, 0.934, 0.955, 0.975, 1.0, //
        0.83, 0.87, 0.91, 0.94, 0.97, 1.0, //
        0.815, 0.86, 0.9, 0.93, 0.97, 1.0, //
        0.81, 0.86, 0.9, 0.93, 0.97, 1.0, //
    ],
};

/// 표 A.16 - K_WL = ∞ 열
pub static HEAT_CONDUCTION_DEVICE_FACTOR_INFINITE: Table1 = Table1 {
    name: "Table A.16 (a_WL, K_WL = inf)",
    variable: "W",
    x: &W_NODES_9,
    y: &[1.0, 1.01, 1.02, 1.04, 1.06, 1.07, 1.09, 1.1, 1.1],
};

/// 표 A.17 - 시스템 B의 접촉 보정 계수 a_K(W)
pub static CONTACT_FACTOR_B: Table1 = Table1 {
    name: "Table A.17 (a_K)",
    variable: "W",
    x: &W_NODES_9,
    y: &[1.0, 0.99, 0.98, 0.95, 0.92, 0.9, 0.82, 0.72, 0.60],
};

/// 표 A.18 - 시스템 B의 한계곡선 계수 B_G(W, K_WL)
pub static LIMIT_COEFFICIENT_B: Table2 = Table2 {
    name: "Table A.18 (B_G)",
    x_variable: "W",
    y_variable: "K_WL",
    x: &W_NODES_9,
    y: &K_WL_LIMIT_NODES,
    z: &[
        92.0, 86.7, 79.4, 64.8, 50.8, 45.8, 27.5, 9.9, 0.0, //
        93.1, 88.0, 81.3, 67.5, 54.2, 49.0, 31.8, 15.8, 2.4, //
        94.2, 89.5, 83.3, 70.2, 57.6, 52.5, 36.0, 21.3, 7.0, //
        95.4, 90.7, 85.2, 72.9, 60.8, 56.0, 40.2, 25.7, 11.9, //
        96.6, 92.1, 87.2, 75.6, 64.1, 59.3, 44.4, 30.0, 16.6, //
        97.8, 93.7, 89.2, 78.3, 67.3, 62.6, 48.6, 34.1, 21.1, //
        98.7, 95.0, 91.0, 81.0, 70.6, 66.3, 52.8, 38.5, 25.5, //
        99.3, 96.3, 93.0, 83.7, 74.0, 69.7, 57.0, 42.8, 29.6, //
        99.8, 97.7, 95.0, 86.3, 77.2, 73.0, 61.2, 47.0, 33.6, //
        100.0, 98.5, 96.5, 89.0, 80.7, 76.6, 65.4, 51.4, 37.3, //
        100.0, 99.3, 97.8, 91.5, 84.0, 80.0, 69.4, 55.6, 40.9, //
        100.0, 99.6, 98.5, 93.8, 87.2, 83.3, 73.2, 59.8, 44.3, //
        100.0, 99.8, 99.3, 95.8, 90.0, 86.3, 76.6, 63.8, 47.5, //
        100.0, 100.0, 99.8, 97.5, 92.5, 89.0, 80.0, 67.3, 50.5, //
        100.0, 100.0, 100.0, 98.6, 94.8, 91.7, 83.0, 71.0, 53.4, //
    ],
};

/// 표 A.19 - 시스템 B의 한계곡선 지수 n_G(W, K_WL)
pub static LIMIT_EXPONENT_B: Table2 = Table2 {
    name: "Table A.19 (n_G)",
    x_variable: "W",
    y_variable: "K_WL",
    x: &W_NODES_9,
    y: &K_WL_LIMIT_NODES,
    z: &[
        0.0029, 0.017, 0.032, 0.067, 0.122, 0.151, 0.235, 0.333, 1.0, //
        0.0024, 0.015, 0.027, 0.055, 0.097, 0.12, 0.184, 0.288, 0.725, //
        0.0021, 0.013, 0.024, 0.048, 0.086, 0.104, 0.169, 0.256, 0.482, //
        0.0018, 0.012, 0.022, 0.044, 0.08, 0.095, 0.156, 0.228, 0.38, //
        0.0015, 0.011, 0.02, 0.04, 0.074, 0.088, 0.143, 0.204, 0.31, //
        0.0012, 0.0099, 0.018, 0.037, 0.067, 0.082, 0.131, 0.183, 0.25, //
        0.0009, 0.0087, 0.016, 0.033, 0.061, 0.074, 0.118, 0.162, 0.21, //
        0.0006, 0.0074, 0.014, 0.03, 0.055, 0.067, 0.106, 0.144, 0.187, //
        0.0003, 0.0062, 0.012, 0.027, 0.049, 0.06, 0.095, 0.126, 0.165, //
        0.0, 0.005, 0.01, 0.024, 0.044, 0.053, 0.083, 0.11, 0.143, //
        0.0, 0.0038, 0.008, 0.021, 0.038, 0.046, 0.072, 0.096, 0.121, //
        0.0, 0.0025, 0.006, 0.018, 0.032, 0.038, 0.063, 0.084, 0.107, //
        0.0, 0.0012, 0.004, 0.015, 0.027, 0.034, 0.054, 0.073, 0.093, //
        0.0, 0.0, 0.002, 0.012, 0.022, 0.029, 0.047, 0.063, 0.080, //
        0.0, 0.0, 0.0, 0.009, 0.02, 0.025, 0.04, 0.055, 0.07, //
    ],
};
