//! 계산 코어를 라이브러리로 분리하여 CLI와 GUI가 같은 검증·계산·보고서 경로를 쓴다.

pub mod app;
pub mod config;
pub mod error;
pub mod fuel;
pub mod i18n;
pub mod input;
pub mod logging;
pub mod report;
pub mod ui_cli;
