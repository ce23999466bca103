use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use iso11855_toolbox::{app, config};

#[derive(Parser)]
#[command(name = "iso11855")]
#[command(about = "ISO 11855 embedded radiant system heat flux calculator", long_about = None)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate every [[system]] in a scenario TOML file
    Evaluate {
        /// Path to the scenario file
        scenario: PathBuf,
    },
    /// Enter a system interactively
    Interactive,
    /// Evaluate the reference systems A, B and D at W = 0.10 m
    Sample,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령을 실행한다.
fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    match cli.command {
        Commands::Evaluate { scenario } => app::run_evaluate(&scenario, &cfg),
        Commands::Interactive => app::run_interactive(&mut cfg, &cli.config),
        Commands::Sample => app::run_sample(&cfg),
    }
}
