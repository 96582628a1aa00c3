use serde::{Deserialize, Serialize};

/// 전압 단위. 내부 기준은 볼트(V)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoltageUnit {
    Volt,
    MilliVolt,
    MicroVolt,
    KiloVolt,
}

impl VoltageUnit {
    /// 콤보박스 표시 순서.
    pub const ALL: [VoltageUnit; 4] = [
        VoltageUnit::Volt,
        VoltageUnit::MilliVolt,
        VoltageUnit::MicroVolt,
        VoltageUnit::KiloVolt,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            VoltageUnit::Volt => "V",
            VoltageUnit::MilliVolt => "mV",
            VoltageUnit::MicroVolt => "µV",
            VoltageUnit::KiloVolt => "kV",
        }
    }

    /// 1 단위당 볼트 값.
    pub fn factor(self) -> f64 {
        match self {
            VoltageUnit::Volt => 1.0,
            VoltageUnit::MilliVolt => 1e-3,
            VoltageUnit::MicroVolt => 1e-6,
            VoltageUnit::KiloVolt => 1e3,
        }
    }
}

/// 주어진 전압을 V 로 변환한다.
pub fn to_volt(value: f64, unit: VoltageUnit) -> f64 {
    value * unit.factor()
}

/// V 값을 원하는 단위로 변환한다.
pub fn from_volt(value_v: f64, unit: VoltageUnit) -> f64 {
    value_v / unit.factor()
}

/// 전압을 다른 단위로 변환한다.
pub fn convert_voltage(value: f64, from: VoltageUnit, to: VoltageUnit) -> f64 {
    from_volt(to_volt(value, from), to)
}
