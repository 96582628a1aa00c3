//! 계산 로직을 라이브러리로 분리하여 GUI 와 CLI 가 같은 코드를 쓰도록 한다.

pub mod app;
pub mod circuit;
pub mod config;
pub mod conversion;
pub mod i18n;
pub mod input;
pub mod logging;
pub mod plot_grid;
pub mod quantity;
pub mod ui_cli;
pub mod units;
