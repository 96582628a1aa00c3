use super::{sample_range, AxisRange, CircuitError, PlotPoint};
use crate::input::{parse_field, InputError};
use crate::units::{from_ampere, from_volt, to_ohm, to_volt, CurrentUnit, ResistanceUnit, VoltageUnit};

/// 화면에 입력 가능한 저항 개수.
pub const RESISTOR_SLOTS: usize = 3;

/// 저항 하나의 입력값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistorSpec {
    pub value: f64,
    pub unit: ResistanceUnit,
}

/// 저항 특성선(I-U) 계산 입력값. 범위 값은 각 표시 단위 기준이다.
#[derive(Debug, Clone)]
pub struct ResistorDiagramInput {
    pub u_min: f64,
    pub u_max: f64,
    pub u_unit: VoltageUnit,
    pub i_min: f64,
    pub i_max: f64,
    pub i_unit: CurrentUnit,
    /// 비어 있는 칸은 `None`
    pub resistors: Vec<Option<ResistorSpec>>,
}

/// 저항 한 개의 특성선.
#[derive(Debug, Clone)]
pub struct ResistorLine {
    /// 범례 문자열, 예: `R1 = 100 Ω`
    pub label: String,
    pub resistance_ohm: f64,
    /// 표시 단위 기준 `[U, I]` 점들
    pub points: Vec<PlotPoint>,
}

/// 저항 특성선 그래프 전체.
#[derive(Debug, Clone)]
pub struct ResistorDiagram {
    pub lines: Vec<ResistorLine>,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub x_label: String,
    pub y_label: String,
}

/// 옴의 법칙 I = U / R.
pub fn ohm_current(voltage_v: f64, resistance_ohm: f64) -> Option<f64> {
    if resistance_ohm == 0.0 {
        None
    } else {
        Some(voltage_v / resistance_ohm)
    }
}

/// 전압 범위를 샘플링해 각 저항의 I-U 직선을 만든다.
///
/// 계산은 기준 단위(V, A, Ω)로 하고, 결과 점은 선택한 표시 단위로 되돌린다.
pub fn resistor_lines(
    input: &ResistorDiagramInput,
    samples: usize,
) -> Result<ResistorDiagram, CircuitError> {
    let voltages_v = sample_range(
        to_volt(input.u_min, input.u_unit),
        to_volt(input.u_max, input.u_unit),
        samples,
    );

    let mut lines = Vec::with_capacity(input.resistors.len());
    for (idx, spec) in input.resistors.iter().enumerate() {
        let Some(spec) = spec else { continue };
        let name = format!("R{}", idx + 1);
        let r_ohm = to_ohm(spec.value, spec.unit);
        let points = voltages_v
            .iter()
            .map(|&u| {
                let i = ohm_current(u, r_ohm).ok_or_else(|| CircuitError::ZeroResistance {
                    label: name.clone(),
                })?;
                Ok([from_volt(u, input.u_unit), from_ampere(i, input.i_unit)])
            })
            .collect::<Result<Vec<_>, CircuitError>>()?;
        lines.push(ResistorLine {
            label: format!("{name} = {} {}", spec.value, spec.unit.symbol()),
            resistance_ohm: r_ohm,
            points,
        });
    }

    Ok(ResistorDiagram {
        lines,
        x_range: AxisRange::new(input.u_min, input.u_max),
        y_range: AxisRange::new(input.i_min, input.i_max),
        x_label: format!("U / {}", input.u_unit.symbol()),
        y_label: format!("I / {}", input.i_unit.symbol()),
    })
}

/// 저항 특성 탭의 입력 칸 상태. 입력 중인 텍스트를 그대로 보관한다.
#[derive(Debug, Clone)]
pub struct ResistorForm {
    pub u_min: String,
    pub u_max: String,
    pub u_unit: VoltageUnit,
    pub i_min: String,
    pub i_max: String,
    pub i_unit: CurrentUnit,
    pub resistors: [(String, ResistanceUnit); RESISTOR_SLOTS],
    pub show_secondary_grid: bool,
}

impl Default for ResistorForm {
    fn default() -> Self {
        Self {
            u_min: "0".into(),
            u_max: "10".into(),
            u_unit: VoltageUnit::Volt,
            i_min: "0".into(),
            i_max: "100".into(),
            i_unit: CurrentUnit::MilliAmpere,
            resistors: [
                ("100".into(), ResistanceUnit::Ohm),
                ("200".into(), ResistanceUnit::Ohm),
                ("500".into(), ResistanceUnit::Ohm),
            ],
            show_secondary_grid: false,
        }
    }
}

impl ResistorForm {
    /// 기본 단위 설정을 반영한 빈 폼.
    pub fn with_units(u_unit: VoltageUnit, i_unit: CurrentUnit, r_unit: ResistanceUnit) -> Self {
        let mut form = Self {
            u_unit,
            i_unit,
            ..Self::default()
        };
        for slot in form.resistors.iter_mut() {
            slot.1 = r_unit;
        }
        form
    }

    /// 텍스트 입력을 숫자 입력값으로 해석한다. 저항 칸이 비어 있으면 해당 선은 생략한다.
    pub fn parse(&self) -> Result<ResistorDiagramInput, InputError> {
        let resistors = self
            .resistors
            .iter()
            .enumerate()
            .map(|(idx, (text, unit))| {
                if text.trim().is_empty() {
                    Ok(None)
                } else {
                    let value = parse_field(&format!("R{}", idx + 1), text)?;
                    Ok(Some(ResistorSpec { value, unit: *unit }))
                }
            })
            .collect::<Result<Vec<_>, InputError>>()?;
        Ok(ResistorDiagramInput {
            u_min: parse_field("U min", &self.u_min)?,
            u_max: parse_field("U max", &self.u_max)?,
            u_unit: self.u_unit,
            i_min: parse_field("I min", &self.i_min)?,
            i_max: parse_field("I max", &self.i_max)?,
            i_unit: self.i_unit,
            resistors,
        })
    }

    /// 입력 해석부터 특성선 계산까지 한 번에 수행한다.
    pub fn compute(&self, samples: usize) -> Result<ResistorDiagram, CircuitError> {
        let input = self.parse()?;
        resistor_lines(&input, samples)
    }
}
