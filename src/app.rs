use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::iso11855::{
    DownwardHeatLoss, Iso11855Error, LimitCurve, RadiantSystem, RadiantSystemInput,
    DEFAULT_MAX_SURFACE_TEMPERATURE,
};
use crate::scenario::{Scenario, ScenarioError, SystemSpec};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 표준 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 시나리오 파일 오류
    #[error("{0}")]
    Scenario(#[from] ScenarioError),
    /// 열유속 계산 오류
    #[error("계산 오류: {0}")]
    Methodology(#[from] Iso11855Error),
}

/// 시스템 하나의 계산 결과와 선택적 부가 계산.
#[derive(Debug, Clone)]
pub struct SystemReport {
    pub system: RadiantSystem,
    pub limit_curve: Option<LimitCurve>,
    pub downward_heat_loss: Option<DownwardHeatLoss>,
}

/// 시나리오 항목 하나를 계산한다.
/// 한계곡선은 `t_F_max`, 하향 열손실은 `R_ins`가 있을 때만 계산한다.
pub fn evaluate_spec(spec: &SystemSpec) -> Result<SystemReport, AppError> {
    let input = RadiantSystemInput::try_from(spec).map_err(|source| ScenarioError::Invalid {
        name: spec.name.clone(),
        source,
    })?;
    let system = RadiantSystem::build(input)?;
    let limit_curve = spec
        .t_F_max
        .map(|t_f_max| system.limit_curve(t_f_max))
        .transpose()?;
    let downward_heat_loss = spec
        .lower_construction()
        .map(|lower| system.downward_heat_loss(&lower))
        .transpose()?;
    Ok(SystemReport {
        system,
        limit_curve,
        downward_heat_loss,
    })
}

/// 시나리오의 모든 시스템을 계산한다. 하나라도 실패하면 전체가 실패한다.
pub fn evaluate_scenario(scenario: &Scenario) -> Result<Vec<SystemReport>, AppError> {
    scenario.system.iter().map(evaluate_spec).collect()
}

/// `evaluate` 하위 명령: 시나리오 파일을 계산해 출력한다.
pub fn run_evaluate(path: &Path, config: &Config) -> Result<(), AppError> {
    let scenario = Scenario::load(path)?;
    info!(path = %path.display(), systems = scenario.system.len(), "evaluating scenario");
    for report in evaluate_scenario(&scenario)? {
        ui_cli::print_report(&report, config);
    }
    Ok(())
}

/// `sample` 하위 명령: 예제 시스템 A, B, D를 계산해 출력한다.
pub fn run_sample(config: &Config) -> Result<(), AppError> {
    let scenario = Scenario::sample().with_limit_curves(DEFAULT_MAX_SURFACE_TEMPERATURE)?;
    for report in evaluate_scenario(&scenario)? {
        ui_cli::print_report(&report, config);
    }
    Ok(())
}

/// 대화형 메인 루프를 실행한다. 종료 시 설정을 저장한다.
pub fn run_interactive(config: &mut Config, config_path: &Path) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::Evaluate => {
                let spec = ui_cli::prompt_system(config)?;
                // 입력 오류는 메뉴로 돌아가 다시 입력받는다.
                match evaluate_spec(&spec) {
                    Ok(report) => ui_cli::print_report(&report, config),
                    Err(err) => println!("오류: {err}"),
                }
            }
            MenuChoice::Sample => run_sample(config)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save(config_path)?;
            }
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("프로그램을 종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
