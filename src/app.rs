use crate::circuit::CircuitError;
use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::i18n::{self, Translator};
use crate::input::InputError;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 단위 변환 오류
    Conversion(ConversionError),
    /// 입력값 해석 오류
    Input(InputError),
    /// 회로 계산 오류
    Circuit(CircuitError),
    /// 저항 입력 개수 초과
    TooManyResistors { count: usize, max: usize },
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "config error: {e}"),
            AppError::Conversion(e) => write!(f, "unit conversion error: {e}"),
            AppError::Input(e) => write!(f, "input error: {e}"),
            AppError::Circuit(e) => write!(f, "calculation error: {e}"),
            AppError::TooManyResistors { count, max } => {
                write!(f, "{count} resistors given, at most {max} are supported")
            }
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// 표준 입력이 닫혀 더 읽을 수 없는 경우.
    pub fn is_eof(&self) -> bool {
        matches!(self, AppError::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ConversionError> for AppError {
    fn from(value: ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<InputError> for AppError {
    fn from(value: InputError) -> Self {
        AppError::Input(value)
    }
}

impl From<CircuitError> for AppError {
    fn from(value: CircuitError) -> Self {
        AppError::Circuit(value)
    }
}

/// 대화형 CLI 메인 루프를 실행한다. 계산 오류는 로그만 남기고 메뉴로 돌아간다.
pub fn run(config: &Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        let choice = match ui_cli::main_menu(tr) {
            Ok(choice) => choice,
            Err(e) if e.is_eof() => {
                log::info!("input closed, exiting");
                break;
            }
            Err(e) => return Err(e),
        };
        let outcome = match choice {
            MenuChoice::ResistorLines => ui_cli::handle_resistor_lines(tr, config),
            MenuChoice::SourceLoad => ui_cli::handle_source_load(tr, config),
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr),
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        };
        match outcome {
            Err(e) if e.is_eof() => {
                log::info!("input closed, exiting");
                break;
            }
            Err(AppError::Io(e)) => return Err(AppError::Io(e)),
            Err(e) => log::error!("{}: {e}", tr.t(i18n::keys::ERROR_PREFIX)),
            Ok(()) => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unexpected_eof_ends_the_session() {
        let eof = AppError::Io(std::io::ErrorKind::UnexpectedEof.into());
        assert!(eof.is_eof());
        let denied = AppError::Io(std::io::ErrorKind::PermissionDenied.into());
        assert!(!denied.is_eof());
        assert!(!AppError::TooManyResistors { count: 4, max: 3 }.is_eof());
    }
}
