use serde::{Deserialize, Serialize};

use super::{AxisRange, CircuitError, PlotPoint};
use crate::input::{parse_field, InputError};
use crate::units::{to_ohm, to_volt, ResistanceUnit, VoltageUnit};

/// 전압원 특성 계산에 쓰는 전류 스윕 설정.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSweep {
    /// 전류 샘플 간격 [A]
    pub current_step_a: f64,
    /// 샘플 개수 (0 A 부터)
    pub sample_count: usize,
    /// 동작점 판정 허용 오차 [V]
    pub tolerance_v: f64,
}

impl Default for SourceSweep {
    fn default() -> Self {
        // 0 ~ 10.9 A, 0.1 A 간격
        Self {
            current_step_a: 0.1,
            sample_count: 110,
            tolerance_v: 0.1,
        }
    }
}

/// 전압원/부하 계산 입력값 (기준 단위).
#[derive(Debug, Clone, Copy)]
pub struct SourceDiagramInput {
    pub uq_v: f64,
    pub ri_ohm: f64,
    pub rl_ohm: f64,
    pub show_load: bool,
}

/// 동작점 (전압원 직선과 부하 직선의 교점).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    pub voltage_v: f64,
    pub current_a: f64,
}

impl OperatingPoint {
    pub fn voltage_text(&self) -> String {
        format!("{:.2} V", self.voltage_v)
    }

    pub fn current_text(&self) -> String {
        format!("{:.2} A", self.current_a)
    }
}

/// 표시용 문자열. 동작점이 없으면 `N/A`.
pub fn operating_point_texts(op: Option<&OperatingPoint>) -> (String, String) {
    match op {
        Some(op) => (op.voltage_text(), op.current_text()),
        None => ("N/A".to_string(), "N/A".to_string()),
    }
}

/// 전압원 특성 그래프 전체.
#[derive(Debug, Clone)]
pub struct SourceDiagram {
    /// 전압원 직선 `[U, I]`
    pub source_line: Vec<PlotPoint>,
    /// 부하 직선 `[U, I]` (부하 표시가 꺼져 있으면 `None`)
    pub load_line: Option<Vec<PlotPoint>>,
    /// 샘플 스캔으로 찾은 동작점
    pub operating_point: Option<OperatingPoint>,
    /// 해석해 동작점
    pub exact_operating_point: Option<OperatingPoint>,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
}

/// 0 A 부터 `step` 간격으로 `count`개의 전류 샘플.
///
/// 1 A 를 정수 개로 나누는 간격(0.1, 0.5 …)이면 `i / n` 으로 계산해
/// `i * step` 의 누적 반올림 오차(3 × 0.1 = 0.30000000000000004)를 피한다.
pub fn source_currents(step: f64, count: usize) -> Vec<f64> {
    let per_amp = 1.0 / step;
    let per_amp_int = per_amp.round();
    if per_amp_int >= 1.0 && (per_amp - per_amp_int).abs() < 1e-9 {
        (0..count).map(|i| i as f64 / per_amp_int).collect()
    } else {
        (0..count).map(|i| i as f64 * step).collect()
    }
}

/// 전압원 단자 전압 U = Uq - I·Ri.
pub fn source_voltage(uq_v: f64, ri_ohm: f64, current_a: f64) -> f64 {
    uq_v - current_a * ri_ohm
}

/// 부하 전압 U = I·RL.
pub fn load_voltage(rl_ohm: f64, current_a: f64) -> f64 {
    current_a * rl_ohm
}

/// 샘플을 순서대로 훑어 두 전압 차가 `tolerance_v` 미만인 첫 점을 동작점으로 반환한다.
pub fn find_operating_point(
    currents: &[f64],
    source_v: &[f64],
    load_v: &[f64],
    tolerance_v: f64,
) -> Option<OperatingPoint> {
    currents
        .iter()
        .zip(source_v.iter().zip(load_v.iter()))
        .find(|(_, (vq, vl))| (*vq - *vl).abs() < tolerance_v)
        .map(|(&i, (&vq, _))| OperatingPoint {
            voltage_v: vq,
            current_a: i,
        })
}

/// 해석해: I = Uq / (Ri + RL), U = I·RL. Ri + RL = 0 이면 `None`.
pub fn exact_operating_point(uq_v: f64, ri_ohm: f64, rl_ohm: f64) -> Option<OperatingPoint> {
    let total = ri_ohm + rl_ohm;
    if total == 0.0 {
        return None;
    }
    let current_a = uq_v / total;
    Some(OperatingPoint {
        voltage_v: current_a * rl_ohm,
        current_a,
    })
}

/// 전압원 직선과 (선택 시) 부하 직선, 동작점을 계산한다.
pub fn source_diagram(input: &SourceDiagramInput, sweep: &SourceSweep) -> SourceDiagram {
    let currents = source_currents(sweep.current_step_a, sweep.sample_count);
    let source_v: Vec<f64> = currents
        .iter()
        .map(|&i| source_voltage(input.uq_v, input.ri_ohm, i))
        .collect();
    let source_line = source_v
        .iter()
        .zip(currents.iter())
        .map(|(&u, &i)| [u, i])
        .collect();

    let (load_line, operating_point, exact_operating_point) = if input.show_load {
        let load_v: Vec<f64> = currents
            .iter()
            .map(|&i| load_voltage(input.rl_ohm, i))
            .collect();
        let op = find_operating_point(&currents, &source_v, &load_v, sweep.tolerance_v);
        if op.is_none() {
            log::warn!("Operating point not found. Check the input values!");
        }
        let line = load_v
            .iter()
            .zip(currents.iter())
            .map(|(&u, &i)| [u, i])
            .collect();
        (
            Some(line),
            op,
            exact_operating_point(input.uq_v, input.ri_ohm, input.rl_ohm),
        )
    } else {
        (None, None, None)
    };

    let i_max = currents.iter().copied().fold(0.0, f64::max);
    SourceDiagram {
        source_line,
        load_line,
        operating_point,
        exact_operating_point,
        x_range: AxisRange::new(0.0, input.uq_v),
        y_range: AxisRange::new(0.0, i_max),
    }
}

/// 전압원 특성 탭의 입력 칸 상태.
#[derive(Debug, Clone)]
pub struct SourceForm {
    pub uq: String,
    pub uq_unit: VoltageUnit,
    pub ri: String,
    pub ri_unit: ResistanceUnit,
    pub rl: String,
    pub rl_unit: ResistanceUnit,
    pub show_load: bool,
    pub show_secondary_grid: bool,
}

impl Default for SourceForm {
    fn default() -> Self {
        Self {
            uq: "10".into(),
            uq_unit: VoltageUnit::Volt,
            ri: "1".into(),
            ri_unit: ResistanceUnit::Ohm,
            rl: "10".into(),
            rl_unit: ResistanceUnit::Ohm,
            show_load: false,
            show_secondary_grid: false,
        }
    }
}

impl SourceForm {
    pub fn parse(&self) -> Result<SourceDiagramInput, InputError> {
        Ok(SourceDiagramInput {
            uq_v: to_volt(parse_field("Uq", &self.uq)?, self.uq_unit),
            ri_ohm: to_ohm(parse_field("Ri", &self.ri)?, self.ri_unit),
            rl_ohm: to_ohm(parse_field("RL", &self.rl)?, self.rl_unit),
            show_load: self.show_load,
        })
    }

    pub fn compute(&self, sweep: &SourceSweep) -> Result<SourceDiagram, CircuitError> {
        let input = self.parse()?;
        Ok(source_diagram(&input, sweep))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sweep_spans_zero_to_ten_point_nine_amps() {
        let currents = source_currents(0.1, 110);
        assert_eq!(currents.len(), 110);
        assert_eq!(currents[0], 0.0);
        assert!((currents[109] - 10.9).abs() < 1e-9);
    }

    #[test]
    fn operating_point_texts_fallback() {
        assert_eq!(
            operating_point_texts(None),
            ("N/A".to_string(), "N/A".to_string())
        );
        let op = OperatingPoint {
            voltage_v: 8.0,
            current_a: 2.0,
        };
        assert_eq!(
            operating_point_texts(Some(&op)),
            ("8.00 V".to_string(), "2.00 A".to_string())
        );
    }

    #[test]
    fn tenth_amp_grid_is_exact_decimal() {
        let currents = source_currents(0.1, 110);
        assert_eq!(currents[3], 0.3);
        assert_eq!(currents[7], 0.7);
        // 정수 분할이 아닌 간격은 곱셈으로 만든다
        let odd = source_currents(0.3, 4);
        assert!((odd[3] - 0.9).abs() < 1e-12);
    }

    #[test]
    fn exact_point_for_zero_total_resistance() {
        assert_eq!(exact_operating_point(5.0, 0.0, 0.0), None);
    }
}
