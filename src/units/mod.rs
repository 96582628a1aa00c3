//! 단위 정의 및 변환 모듈 모음.

pub mod current;
pub mod resistance;
pub mod voltage;

pub use current::{convert_current, from_ampere, CurrentUnit};
pub use resistance::{convert_resistance, to_ohm, ResistanceUnit};
pub use voltage::{convert_voltage, from_volt, to_volt, VoltageUnit};
