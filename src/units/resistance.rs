use serde::{Deserialize, Serialize};

/// 저항 단위. 내부 기준은 옴(Ω)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResistanceUnit {
    Ohm,
    MilliOhm,
    MicroOhm,
    KiloOhm,
    MegaOhm,
    GigaOhm,
}

impl ResistanceUnit {
    pub const ALL: [ResistanceUnit; 6] = [
        ResistanceUnit::Ohm,
        ResistanceUnit::MilliOhm,
        ResistanceUnit::MicroOhm,
        ResistanceUnit::KiloOhm,
        ResistanceUnit::MegaOhm,
        ResistanceUnit::GigaOhm,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            ResistanceUnit::Ohm => "Ω",
            ResistanceUnit::MilliOhm => "mΩ",
            ResistanceUnit::MicroOhm => "µΩ",
            ResistanceUnit::KiloOhm => "kΩ",
            ResistanceUnit::MegaOhm => "MΩ",
            ResistanceUnit::GigaOhm => "GΩ",
        }
    }

    pub fn factor(self) -> f64 {
        match self {
            ResistanceUnit::Ohm => 1.0,
            ResistanceUnit::MilliOhm => 1e-3,
            ResistanceUnit::MicroOhm => 1e-6,
            ResistanceUnit::KiloOhm => 1e3,
            ResistanceUnit::MegaOhm => 1e6,
            ResistanceUnit::GigaOhm => 1e9,
        }
    }
}

/// 주어진 저항을 Ω 로 변환한다.
pub fn to_ohm(value: f64, unit: ResistanceUnit) -> f64 {
    value * unit.factor()
}

fn from_ohm(value_ohm: f64, unit: ResistanceUnit) -> f64 {
    value_ohm / unit.factor()
}

/// 저항을 다른 단위로 변환한다.
pub fn convert_resistance(value: f64, from: ResistanceUnit, to: ResistanceUnit) -> f64 {
    from_ohm(to_ohm(value, from), to)
}
