//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 외의 프로그램에서도 쓸 수 있게 한다.

pub mod app;
pub mod config;
pub mod iso11855;
pub mod scenario;
pub mod ui_cli;
pub mod units;
