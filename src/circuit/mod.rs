//! 저항 특성선과 전압원/부하선 계산 모듈 모음.

pub mod resistor_lines;
pub mod source_load;

pub use resistor_lines::*;
pub use source_load::*;

use crate::input::InputError;

/// 그래프 한 점. `[x, y]` = `[전압, 전류]`.
pub type PlotPoint = [f64; 2];

/// 회로 계산 오류를 표현한다.
#[derive(Debug, Clone, PartialEq)]
pub enum CircuitError {
    /// 입력 칸을 숫자로 읽지 못함
    Input(InputError),
    /// 0 Ω 저항으로 나눗셈
    ZeroResistance { label: String },
}

impl std::fmt::Display for CircuitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CircuitError::Input(e) => write!(f, "{e}"),
            CircuitError::ZeroResistance { label } => {
                write!(f, "{label}: resistance must not be zero")
            }
        }
    }
}

impl std::error::Error for CircuitError {}

impl From<InputError> for CircuitError {
    fn from(value: InputError) -> Self {
        CircuitError::Input(value)
    }
}

/// 축 범위 (min, max).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(a: f64, b: f64) -> Self {
        Self { min: a, max: b }
    }

    /// 뒤집힌 범위도 작은 값이 앞에 오도록 정렬해 반환한다.
    pub fn ordered(&self) -> (f64, f64) {
        if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        }
    }
}

/// `min`..=`max` 구간을 `count`개로 균등 샘플링한다.
/// 양 끝을 포함하며, `count`가 2 미만이거나 구간 폭이 0이면 `min` 한 점만 반환한다.
pub fn sample_range(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count < 2 || min == max {
        return vec![min];
    }
    let step = (max - min) / (count - 1) as f64;
    (0..count)
        .map(|i| if i == count - 1 { max } else { min + step * i as f64 })
        .collect()
}
