use std::io::{self, Write};

use crate::app::{AppError, SystemReport};
use crate::config::Config;
use crate::iso11855::{FamilyDetails, SystemType};
use crate::scenario::SystemSpec;
use crate::units::{LengthUnit, TemperatureUnit};

/// 대화형 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Evaluate,
    Sample,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== ISO 11855 Radiant System Toolbox ===");
    println!("1) 시스템 열유속 계산");
    println!("2) 예제 시스템(A, B, D)");
    println!("3) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Evaluate),
            "2" => return Ok(MenuChoice::Sample),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 시스템 구성을 입력받는다. 길이/온도는 설정의 표시 단위로 받는다.
/// 엔터만 입력하면 기본값을 쓴다.
pub fn prompt_system(cfg: &Config) -> Result<SystemSpec, AppError> {
    let units = &cfg.display_units;
    let defaults = SystemSpec::default();
    println!("\n-- 시스템 입력 (엔터 = 기본값) --");

    let system_type = loop {
        let s = read_line("시스템 형식 (A, B, C, D, H, I, J) [A]: ")?;
        let s = s.trim();
        if s.is_empty() {
            break defaults.system_type.clone();
        }
        match s.parse::<SystemType>() {
            Ok(t) => break t.to_string(),
            Err(e) => println!("{e}"),
        }
    };
    let case_of_application = {
        let s = read_line("적용 조건 (예: floor heating) [floor heating]: ")?;
        let s = s.trim();
        if s.is_empty() {
            defaults.case_of_application.clone()
        } else {
            s.to_string()
        }
    };

    let mut spec = SystemSpec {
        name: format!("System {system_type}"),
        system_type,
        case_of_application,
        ..defaults
    };
    if spec.system_type != "D" {
        spec.W = read_length("배관 간격 W", units.pipe_spacing, spec.W)?;
    }
    spec.external_diameter = read_length("배관 외경 d_a", units.pipe_dimension, spec.external_diameter)?;
    spec.wall_thickness = read_length("배관 두께 s_R", units.pipe_dimension, spec.wall_thickness)?;
    spec.pipe_conductivity = read_f64_or("배관 열전도율 λ_R [W/m·K]", spec.pipe_conductivity)?;
    spec.s_u = read_length("배관 위 피복 두께 s_u", units.layer_thickness, spec.s_u)?;
    spec.R_k_B = read_f64_or("마감재 열저항 R_λ,B [m²K/W]", spec.R_k_B)?;
    spec.k_E = read_f64_or("모르타르 열전도율 λ_E [W/m·K]", spec.k_E)?;
    spec.t_i = read_temperature("실내 온도 θ_i", units.temperature, spec.t_i)?;
    spec.t_V = read_temperature("공급 온도 θ_V", units.temperature, spec.t_V)?;
    spec.t_R = read_temperature("환수 온도 θ_R", units.temperature, spec.t_R)?;
    Ok(spec)
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!(
        "현재 온도 단위: {}, 출력 소수 자릿수: {}",
        cfg.display_units.temperature.symbol(),
        cfg.precision
    );
    println!("1) 온도 단위  2) 소수 자릿수");
    let sel = read_line("변경할 번호(취소하려면 엔터): ")?;
    match sel.trim() {
        "" => {}
        "1" => {
            println!("온도 단위: 1=°C 2=K 3=°F");
            cfg.display_units.temperature = match read_line("선택: ")?.trim() {
                "2" => TemperatureUnit::Kelvin,
                "3" => TemperatureUnit::Fahrenheit,
                _ => TemperatureUnit::Celsius,
            };
        }
        "2" => {
            let p = read_f64("소수 자릿수 (0~6): ")?;
            cfg.precision = p.clamp(0.0, 6.0) as usize;
        }
        _ => println!("잘못된 입력이므로 변경하지 않습니다."),
    }
    Ok(())
}

/// 계산 결과를 표시 단위로 출력한다.
pub fn print_report(report: &SystemReport, cfg: &Config) {
    let units = &cfg.display_units;
    let p = cfg.precision;
    let system = &report.system;
    let input = system.input();
    let t_unit = units.temperature;

    println!("\n[{}] 시스템 {} / {}", system.name(), system.system_type(), system.case_of_application());
    if let Some(w) = input.layout.spacing() {
        println!(
            "  배관 간격 W: {:.p$} {}",
            units.pipe_spacing.from_meter(w),
            units.pipe_spacing.symbol()
        );
    }
    println!(
        "  배관: {} (d_a {:.p$} {}, s_R {:.p$} {})",
        input.pipe.name,
        units.pipe_dimension.from_meter(input.pipe.external_diameter),
        units.pipe_dimension.symbol(),
        units.pipe_dimension.from_meter(input.pipe.wall_thickness),
        units.pipe_dimension.symbol(),
    );
    println!(
        "  설계 온도: θ_i {:.p$} / θ_V {:.p$} / θ_R {:.p$} {}",
        t_unit.from_celsius(input.temperatures.indoor),
        t_unit.from_celsius(input.temperatures.supply),
        t_unit.from_celsius(input.temperatures.ret),
        t_unit.symbol()
    );
    println!(
        "  α = {:.p$} {}, B₀ = {:.p$}, B = {:.p$}",
        units.heat_transfer.from_base(system.surface_heat_transfer_coefficient()),
        units.heat_transfer.symbol(),
        system.base_coefficient(),
        system.coefficient_b(),
    );
    print_factors(system.details(), p);
    println!(
        "  Δθ_H = {:.p$} {}",
        t_unit.difference_from_kelvin(system.deltat_h()),
        t_unit.difference_symbol()
    );
    println!(
        "  K_H = {:.p$} {}",
        units.heat_transfer.from_base(system.k_h()),
        units.heat_transfer.symbol()
    );
    println!(
        "  q = {:.p$} {}",
        units.heat_flux.from_base(system.heat_flux()),
        units.heat_flux.symbol()
    );

    if let Some(limit) = &report.limit_curve {
        println!(
            "  한계곡선(θ_F,max {:.p$} {}): B_G = {:.p$}, n_G = {:.4}, Δθ_H,G = {:.p$} {}, q_G = {:.p$} {}",
            t_unit.from_celsius(limit.max_surface_temperature),
            t_unit.symbol(),
            limit.b_g,
            limit.n_g,
            t_unit.difference_from_kelvin(limit.limit_temperature_difference),
            t_unit.difference_symbol(),
            units.heat_flux.from_base(limit.limit_heat_flux),
            units.heat_flux.symbol()
        );
        if system.deltat_h() > limit.limit_temperature_difference {
            println!("  경고: 설계 온도차가 한계 온도차를 넘습니다.");
        }
    }
    if let Some(loss) = &report.downward_heat_loss {
        println!(
            "  하향 열손실: R_o = {:.4}, R_u = {:.4} m²K/W, q_u = {:.p$} {}",
            loss.upward_resistance,
            loss.downward_resistance,
            units.heat_flux.from_base(loss.heat_flux),
            units.heat_flux.symbol()
        );
    }
}

fn print_factors(details: &FamilyDetails, p: usize) {
    let p = p.max(3);
    match details {
        FamilyDetails::Achij {
            factors,
            evaluated_spacing,
            ..
        } => {
            println!(
                "  a_B {:.p$}, a_W {:.p$}, a_U {:.p$}, a_D {:.p$} (W {evaluated_spacing} m 기준)",
                factors.a_b, factors.a_w, factors.a_u, factors.a_d
            );
            println!(
                "  m_W {:.p$}, m_U {:.p$}, m_D {:.p$}",
                factors.m_w, factors.m_u, factors.m_d
            );
        }
        FamilyDetails::B {
            factors,
            device_characteristic,
            ..
        } => {
            println!(
                "  a_B {:.p$}, a_W {:.p$}, a_U {:.p$}, a_WL {:.p$}, a_K {:.p$}, m_W {:.p$}, K_WL {:.p$}",
                factors.a_b,
                factors.a_w,
                factors.a_u,
                factors.a_wl,
                factors.a_k,
                factors.m_w,
                device_characteristic
            );
        }
        FamilyDetails::D { factors } => {
            println!("  a_B {:.p$}, a_U {:.p$}", factors.a_b, factors.a_u);
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

/// 빈 입력이면 기본값을 돌려준다.
fn read_f64_or(label: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} [{default}]: "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

fn read_length(label: &str, unit: LengthUnit, default_m: f64) -> Result<f64, AppError> {
    let shown = unit.from_meter(default_m);
    let v = read_f64_or(&format!("{label} [{}]", unit.symbol()), shown)?;
    Ok(unit.to_meter(v))
}

fn read_temperature(label: &str, unit: TemperatureUnit, default_c: f64) -> Result<f64, AppError> {
    let shown = unit.from_celsius(default_c);
    let v = read_f64_or(&format!("{label} [{}]", unit.symbol()), shown)?;
    Ok(unit.to_celsius(v))
}
