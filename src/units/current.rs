use serde::{Deserialize, Serialize};

/// 전류 단위. 내부 기준은 암페어(A)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrentUnit {
    Ampere,
    MilliAmpere,
    MicroAmpere,
    KiloAmpere,
}

impl CurrentUnit {
    pub const ALL: [CurrentUnit; 4] = [
        CurrentUnit::Ampere,
        CurrentUnit::MilliAmpere,
        CurrentUnit::MicroAmpere,
        CurrentUnit::KiloAmpere,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            CurrentUnit::Ampere => "A",
            CurrentUnit::MilliAmpere => "mA",
            CurrentUnit::MicroAmpere => "µA",
            CurrentUnit::KiloAmpere => "kA",
        }
    }

    pub fn factor(self) -> f64 {
        match self {
            CurrentUnit::Ampere => 1.0,
            CurrentUnit::MilliAmpere => 1e-3,
            CurrentUnit::MicroAmpere => 1e-6,
            CurrentUnit::KiloAmpere => 1e3,
        }
    }
}

fn to_ampere(value: f64, unit: CurrentUnit) -> f64 {
    value * unit.factor()
}

/// A 값을 원하는 단위로 변환한다. 그래프 y축 표시용.
pub fn from_ampere(value_a: f64, unit: CurrentUnit) -> f64 {
    value_a / unit.factor()
}

/// 전류를 다른 단위로 변환한다.
pub fn convert_current(value: f64, from: CurrentUnit, to: CurrentUnit) -> f64 {
    from_ampere(to_ampere(value, from), to)
}
