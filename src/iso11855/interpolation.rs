//! 표준 부속서 표를 위한 보간 루틴.
//!
//! - 1차원: not-a-knot 3차 스플라인
//! - 2차원: 축별 not-a-knot 스플라인의 텐서곱(바이큐빅)
//! - 3차원: 삼선형 보간
//!
//! 모든 보간은 격자점에서 표 값을 그대로 돌려주며, 표 범위 밖 입력은
//! [`Iso11855Error::OutOfDomain`]으로 거부한다.

use nalgebra::{DMatrix, DVector};

use super::error::{Iso11855Error, Iso11855Result};

/// 1차원 참조표. `y[i]`는 `x[i]`에서의 값.
#[derive(Debug, Clone, Copy)]
pub struct Table1 {
    pub name: &'static str,
    pub variable: &'static str,
    pub x: &'static [f64],
    pub y: &'static [f64],
}

/// 2차원 참조표. `z`는 행 우선이며 `z[j * x.len() + i]`가 `(x[i], y[j])` 값이다.
#[derive(Debug, Clone, Copy)]
pub struct Table2 {
    pub name: &'static str,
    pub x_variable: &'static str,
    pub y_variable: &'static str,
    pub x: &'static [f64],
    pub y: &'static [f64],
    pub z: &'static [f64],
}

/// 3차원 참조표. `v[(i * y.len() + j) * z.len() + k]`가 `(x[i], y[j], z[k])` 값이다.
#[derive(Debug, Clone, Copy)]
pub struct Table3 {
    pub name: &'static str,
    pub variables: [&'static str; 3],
    pub x: &'static [f64],
    pub y: &'static [f64],
    pub z: &'static [f64],
    pub v: &'static [f64],
}

impl Table1 {
    /// 3차 스플라인으로 값을 구한다.
    pub fn eval(&self, x: f64) -> Iso11855Result<f64> {
        check_domain(self.name, self.variable, self.x, x)?;
        spline_eval(self.name, self.x, self.y, x)
    }
}

impl Table2 {
    /// 바이큐빅 보간. x 방향으로 각 행을 먼저 보간한 뒤 y 방향으로 보간한다.
    pub fn eval(&self, x: f64, y: f64) -> Iso11855Result<f64> {
        check_domain(self.name, self.x_variable, self.x, x)?;
        check_domain(self.name, self.y_variable, self.y, y)?;
        let nx = self.x.len();
        let column = self
            .z
            .chunks_exact(nx)
            .map(|row| spline_eval(self.name, self.x, row, x))
            .collect::<Iso11855Result<Vec<f64>>>()?;
        spline_eval(self.name, self.y, &column, y)
    }
}

impl Table3 {
    /// 삼선형 보간.
    pub fn eval(&self, x: f64, y: f64, z: f64) -> Iso11855Result<f64> {
        check_domain(self.name, self.variables[0], self.x, x)?;
        check_domain(self.name, self.variables[1], self.y, y)?;
        check_domain(self.name, self.variables[2], self.z, z)?;
        let (i, tx) = bracket(self.x, x);
        let (j, ty) = bracket(self.y, y);
        let (k, tz) = bracket(self.z, z);
        let (ny, nz) = (self.y.len(), self.z.len());
        let at = |a: usize, b: usize, c: usize| self.v[(a * ny + b) * nz + c];

        // 격자점(t = 0 또는 1)에서 표 값이 그대로 나오도록 가중합 형태로 쓴다.
        let lerp = |p: f64, q: f64, t: f64| p * (1.0 - t) + q * t;
        let c00 = lerp(at(i, j, k), at(i + 1, j, k), tx);
        let c01 = lerp(at(i, j, k + 1), at(i + 1, j, k + 1), tx);
        let c10 = lerp(at(i, j + 1, k), at(i + 1, j + 1, k), tx);
        let c11 = lerp(at(i, j + 1, k + 1), at(i + 1, j + 1, k + 1), tx);
        let c0 = lerp(c00, c10, ty);
        let c1 = lerp(c01, c11, ty);
        Ok(lerp(c0, c1, tz))
    }
}

fn check_domain(
    table: &'static str,
    variable: &'static str,
    nodes: &[f64],
    value: f64,
) -> Iso11855Result<()> {
    let (min, max) = (nodes[0], nodes[nodes.len() - 1]);
    if value.is_nan() || value < min || value > max {
        return Err(Iso11855Error::OutOfDomain {
            table,
            variable,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// `x`를 감싸는 구간 시작 인덱스와 구간 내 상대 위치(0~1)를 돌려준다.
fn bracket(nodes: &[f64], x: f64) -> (usize, f64) {
    let last = nodes.len() - 2;
    let i = nodes
        .windows(2)
        .position(|pair| x <= pair[1])
        .unwrap_or(last)
        .min(last);
    let t = (x - nodes[i]) / (nodes[i + 1] - nodes[i]);
    (i, t)
}

/// not-a-knot 경계조건의 3차 스플라인 값을 계산한다.
///
/// 점이 2개면 선형, 3개면 2차 다항식으로 퇴화한다(not-a-knot의 정의와 동일).
pub fn spline_eval(table: &'static str, xs: &[f64], ys: &[f64], x: f64) -> Iso11855Result<f64> {
    if let Some(idx) = xs.iter().position(|&node| node == x) {
        return Ok(ys[idx]);
    }
    match xs.len() {
        0 => Err(Iso11855Error::InvalidConfiguration(format!(
            "table {table} has no nodes"
        ))),
        1 => Ok(ys[0]),
        2 => {
            let t = (x - xs[0]) / (xs[1] - xs[0]);
            Ok(ys[0] + t * (ys[1] - ys[0]))
        }
        3 => Ok(lagrange(xs, ys, x)),
        _ => {
            let m = not_a_knot_second_derivatives(table, xs, ys)?;
            let (i, _) = bracket(xs, x);
            let h = xs[i + 1] - xs[i];
            let slope = (ys[i + 1] - ys[i]) / h;
            let t = x - xs[i];
            Ok(ys[i]
                + t * (slope - h * (2.0 * m[i] + m[i + 1]) / 6.0)
                + t * t * m[i] / 2.0
                + t * t * t * (m[i + 1] - m[i]) / (6.0 * h))
        }
    }
}

fn lagrange(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    (0..xs.len())
        .map(|i| {
            (0..xs.len())
                .filter(|&j| j != i)
                .fold(ys[i], |acc, j| acc * (x - xs[j]) / (xs[i] - xs[j]))
        })
        .sum()
}

/// 절점에서의 2차 도함수 M을 구한다. 양 끝 두 구간에서 3차 도함수가 연속이라는
/// 조건(not-a-knot)으로 닫힌 n×n 선형계를 LU 분해로 푼다.
fn not_a_knot_second_derivatives(
    table: &'static str,
    xs: &[f64],
    ys: &[f64],
) -> Iso11855Result<DVector<f64>> {
    let n = xs.len();
    let h: Vec<f64> = xs.windows(2).map(|p| p[1] - p[0]).collect();
    let d: Vec<f64> = (0..n - 1).map(|i| (ys[i + 1] - ys[i]) / h[i]).collect();

    let mut matrix_a = DMatrix::<f64>::zeros(n, n);
    let mut vector_b = DVector::<f64>::zeros(n);
    matrix_a[(0, 0)] = h[1];
    matrix_a[(0, 1)] = -(h[0] + h[1]);
    matrix_a[(0, 2)] = h[0];
    for i in 1..n - 1 {
        matrix_a[(i, i - 1)] = h[i - 1];
        matrix_a[(i, i)] = 2.0 * (h[i - 1] + h[i]);
        matrix_a[(i, i + 1)] = h[i];
        vector_b[i] = 6.0 * (d[i] - d[i - 1]);
    }
    matrix_a[(n - 1, n - 3)] = h[n - 2];
    matrix_a[(n - 1, n - 2)] = -(h[n - 3] + h[n - 2]);
    matrix_a[(n - 1, n - 1)] = h[n - 3];

    let singular = || {
        Iso11855Error::InvalidConfiguration(format!(
            "table {table}: spline system is singular, nodes must be strictly increasing"
        ))
    };
    let m = matrix_a.lu().solve(&vector_b).ok_or_else(singular)?;
    if m.iter().any(|v| !v.is_finite()) {
        return Err(singular());
    }
    Ok(m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spline_reproduces_cubic() {
        let xs = [0.0, 0.5, 1.5, 2.0, 3.0];
        let ys: Vec<f64> = xs.iter().map(|x: &f64| x.powi(3) - 2.0 * x + 1.0).collect();
        let x: f64 = 2.4;
        let expected = x.powi(3) - 2.0 * x + 1.0;
        let value = spline_eval("cubic", &xs, &ys, x).expect("spline");
        assert!((value - expected).abs() < 1e-10);
    }

    #[test]
    fn repeated_nodes_are_rejected_instead_of_producing_nan() {
        let xs = [0.0, 1.0, 1.0, 2.0, 3.0];
        let ys = [0.0, 1.0, 2.0, 3.0, 4.0];
        let err = spline_eval("repeated", &xs, &ys, 2.5).expect_err("singular system");
        assert!(matches!(err, Iso11855Error::InvalidConfiguration(_)), "{err:?}");
    }

    #[test]
    fn empty_table_is_rejected() {
        assert!(spline_eval("empty", &[], &[], 0.5).is_err());
    }

    #[test]
    fn bracket_last_node_uses_last_interval() {
        let nodes = [0.0, 1.0, 2.0];
        assert_eq!(bracket(&nodes, 2.0), (1, 1.0));
        assert_eq!(bracket(&nodes, 0.0), (0, 0.0));
    }
}
