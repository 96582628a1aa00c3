/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Voltage,
    Current,
    Resistance,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 3] = [
        QuantityKind::Voltage,
        QuantityKind::Current,
        QuantityKind::Resistance,
    ];

    /// 내부 기준 단위 기호.
    pub fn base_symbol(self) -> &'static str {
        match self {
            QuantityKind::Voltage => "V",
            QuantityKind::Current => "A",
            QuantityKind::Resistance => "Ω",
        }
    }

    /// 해당 물리량에서 선택 가능한 단위 기호 목록.
    pub fn unit_symbols(self) -> Vec<&'static str> {
        use crate::units::{CurrentUnit, ResistanceUnit, VoltageUnit};
        match self {
            QuantityKind::Voltage => VoltageUnit::ALL.iter().map(|u| u.symbol()).collect(),
            QuantityKind::Current => CurrentUnit::ALL.iter().map(|u| u.symbol()).collect(),
            QuantityKind::Resistance => ResistanceUnit::ALL.iter().map(|u| u.symbol()).collect(),
        }
    }
}

/// 내부 기준 단위로 환산된 값을 담는 컨테이너.
///
/// `value_base`는 전압=V, 전류=A, 저항=Ω 기준이다.
#[derive(Debug, Clone, Copy)]
pub struct QuantityValue {
    pub kind: QuantityKind,
    pub value_base: f64,
}

impl std::fmt::Display for QuantityValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value_base, self.kind.base_symbol())
    }
}
