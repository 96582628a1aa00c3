use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::circuit::SourceSweep;
use crate::units::*;

/// 기본 설정 파일 경로 (작업 디렉터리 기준).
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 허용되는 UI 배율 범위 (설정 창 슬라이더와 같다).
pub const UI_SCALE_RANGE: std::ops::RangeInclusive<f32> = 0.8..=1.6;

/// 새 세션 입력 폼의 기본 단위.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub voltage: VoltageUnit,
    pub current: CurrentUnit,
    pub resistance: ResistanceUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            voltage: VoltageUnit::Volt,
            current: CurrentUnit::MilliAmpere,
            resistance: ResistanceUnit::Ohm,
        }
    }
}

/// 특성선 샘플링 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepSettings {
    /// 저항 특성선 한 개당 샘플 수
    pub resistor_samples: usize,
    pub source: SourceSweep,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            resistor_samples: 101,
            source: SourceSweep::default(),
        }
    }
}

/// 애플리케이션 설정을 표현한다. 회로 입력값은 저장하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `auto`, `en-us`, `de-de`, `ko-kr`
    pub language: String,
    pub language_pack_dir: Option<String>,
    pub ui_scale: f32,
    /// `off`/`error`/`warn`/`info`/`debug`/`trace`
    pub log_level: String,
    /// 한글 등 기본 폰트에 없는 글꼴용 TTF 경로
    pub font_path: Option<String>,
    pub default_units: DefaultUnits,
    pub sweep: SweepSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            ui_scale: 1.0,
            log_level: "info".into(),
            font_path: None,
            default_units: DefaultUnits::default(),
            sweep: SweepSettings::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {e}"),
            ConfigError::Serde(e) => write!(f, "config parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_at(Path::new(DEFAULT_CONFIG_PATH))
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값을 저장한 뒤 반환한다.
pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 화면에 적용할 UI 배율. 범위 밖이면 잘라내고, 숫자가 아니면 1.0.
    pub fn effective_ui_scale(&self) -> f32 {
        if self.ui_scale.is_finite() {
            self.ui_scale
                .clamp(*UI_SCALE_RANGE.start(), *UI_SCALE_RANGE.end())
        } else {
            1.0
        }
    }

    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self, Path::new(DEFAULT_CONFIG_PATH))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }
}
