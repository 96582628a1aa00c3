//! 그래프 격자선 위치 계산. 주 격자(1-2-5 간격)와 선택적 보조 격자를 만든다.

/// 격자선 하나. `step`은 해당 선이 속한 격자 간격이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub value: f64,
    pub step: f64,
}

/// 주 격자 목표 개수
const TARGET_MAJOR_LINES: f64 = 8.0;
/// 보조 격자 분할 수
const MINOR_DIVISIONS: f64 = 5.0;
/// 비정상 범위에서 격자선이 폭증하지 않도록 제한
const MAX_LINES: usize = 2_000;

/// `raw` 이상인 가장 작은 1·2·5×10ⁿ 간격.
pub fn nice_step(raw: f64) -> f64 {
    if !(raw.is_finite() && raw > 0.0) {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let norm = raw / magnitude;
    let mult = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    mult * magnitude
}

/// 화면 범위 `(min, max)`에 그릴 격자선 목록.
pub fn grid_lines(bounds: (f64, f64), show_minor: bool) -> Vec<GridLine> {
    let (lo, hi) = if bounds.0 <= bounds.1 {
        bounds
    } else {
        (bounds.1, bounds.0)
    };
    let span = hi - lo;
    if !(span.is_finite() && span > 0.0) {
        return Vec::new();
    }
    let major = nice_step(span / TARGET_MAJOR_LINES);
    let mut out = marks(lo, hi, major);
    if show_minor {
        let minor = major / MINOR_DIVISIONS;
        out.extend(marks(lo, hi, minor).into_iter().filter(|m| {
            let k = m.value / major;
            (k - k.round()).abs() > 1e-6
        }));
    }
    out
}

fn marks(lo: f64, hi: f64, step: f64) -> Vec<GridLine> {
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last)
        .take(MAX_LINES)
        .map(|k| GridLine {
            value: k as f64 * step,
            step,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_step_rounds_up_to_1_2_5() {
        assert!((nice_step(0.8) - 1.0).abs() < 1e-12);
        assert_eq!(nice_step(1.3), 2.0);
        assert_eq!(nice_step(3.0), 5.0);
        assert_eq!(nice_step(7.0), 10.0);
        assert!((nice_step(0.013) - 0.02).abs() < 1e-12);
    }

    #[test]
    fn major_only_without_minor() {
        let lines = grid_lines((0.0, 10.0), false);
        assert!(lines.iter().all(|l| (l.step - 2.0).abs() < 1e-12));
        let values: Vec<f64> = lines.iter().map(|l| l.value).collect();
        assert_eq!(values, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn minor_lines_do_not_duplicate_major() {
        let lines = grid_lines((0.0, 10.0), true);
        let major = lines.iter().filter(|l| l.step == 2.0).count();
        let minor = lines.iter().filter(|l| l.step < 2.0).count();
        assert_eq!(major, 6);
        // 0.4 간격, 0~10 사이 26개 중 주 격자 6개 제외
        assert_eq!(minor, 20);
    }

    #[test]
    fn empty_for_degenerate_bounds() {
        assert!(grid_lines((3.0, 3.0), true).is_empty());
        assert!(grid_lines((0.0, f64::INFINITY), false).is_empty());
    }
}
