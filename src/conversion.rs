use crate::input::{self, InputError};
use crate::quantity::{QuantityKind, QuantityValue};
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// 값 부분을 숫자로 읽지 못함
    Input(InputError),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "unknown unit: {u}"),
            ConversionError::Input(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<InputError> for ConversionError {
    fn from(value: InputError) -> Self {
        ConversionError::Input(value)
    }
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `mV`, `kV`, `uA`, `kOhm`, `MΩ` 등을 사용할 수 있다.
/// SI 접두어는 대소문자를 구분한다(`m`=milli, `M`=mega).
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Voltage => {
            let from = parse_voltage_unit(from_unit_str)?;
            let to = parse_voltage_unit(to_unit_str)?;
            Ok(convert_voltage(value, from, to))
        }
        QuantityKind::Current => {
            let from = parse_current_unit(from_unit_str)?;
            let to = parse_current_unit(to_unit_str)?;
            Ok(convert_current(value, from, to))
        }
        QuantityKind::Resistance => {
            let from = parse_resistance_unit(from_unit_str)?;
            let to = parse_resistance_unit(to_unit_str)?;
            Ok(convert_resistance(value, from, to))
        }
    }
}

/// 값을 기준 단위(V, A, Ω)로 환산한다.
pub fn to_base(
    kind: QuantityKind,
    value: f64,
    unit_str: &str,
) -> Result<QuantityValue, ConversionError> {
    let value_base = convert(kind, value, unit_str, kind.base_symbol())?;
    Ok(QuantityValue { kind, value_base })
}

/// `2.2k`, `470mV`, `10 kΩ` 같은 값+단위 문자열을 기준 단위로 읽는다.
/// 단위가 생략되면 기준 단위로 본다.
pub fn parse_quantity(kind: QuantityKind, text: &str) -> Result<QuantityValue, ConversionError> {
    let trimmed = text.trim();
    let split = trimmed
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '+' | 'e' | 'E')))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    // 지수 표기(1e3)는 숫자 쪽에 포함된다.
    let (number, unit) = trimmed.split_at(split);
    let value = input::parse_field(kind.base_symbol(), number)?;
    let unit = unit.trim();
    if unit.is_empty() {
        return Ok(QuantityValue {
            kind,
            value_base: value,
        });
    }
    match kind {
        QuantityKind::Voltage | QuantityKind::Current => to_base(kind, value, unit),
        // 저항은 `2.2k`처럼 Ω 기호 없이 접두어만 쓰는 경우가 흔하다.
        QuantityKind::Resistance => match parse_resistance_unit(unit) {
            Ok(u) => Ok(QuantityValue {
                kind,
                value_base: to_ohm(value, u),
            }),
            Err(_) => {
                let factor = prefix_factor(unit, true)
                    .ok_or_else(|| ConversionError::UnknownUnit(unit.to_string()))?;
                Ok(QuantityValue {
                    kind,
                    value_base: value * factor,
                })
            }
        },
    }
}

/// SI 접두어 배율. `allow_mega`가 false면 M/G 를 허용하지 않는다.
fn prefix_factor(prefix: &str, allow_mega: bool) -> Option<f64> {
    match prefix {
        "" => Some(1.0),
        "m" => Some(1e-3),
        "u" | "µ" | "μ" => Some(1e-6),
        "k" | "K" => Some(1e3),
        "M" if allow_mega => Some(1e6),
        "G" if allow_mega => Some(1e9),
        _ => None,
    }
}

fn strip_any_suffix<'a>(s: &'a str, suffixes: &[&str]) -> Option<&'a str> {
    suffixes.iter().find_map(|suf| s.strip_suffix(suf))
}

pub fn parse_voltage_unit(s: &str) -> Result<VoltageUnit, ConversionError> {
    let t = s.trim();
    let unit = strip_any_suffix(t, &["V", "v"])
        .and_then(|p| prefix_factor(p, false))
        .and_then(|f| VoltageUnit::ALL.into_iter().find(|u| u.factor() == f));
    unit.ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
}

pub fn parse_current_unit(s: &str) -> Result<CurrentUnit, ConversionError> {
    let t = s.trim();
    let unit = strip_any_suffix(t, &["A", "a"])
        .and_then(|p| prefix_factor(p, false))
        .and_then(|f| CurrentUnit::ALL.into_iter().find(|u| u.factor() == f));
    unit.ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
}

pub fn parse_resistance_unit(s: &str) -> Result<ResistanceUnit, ConversionError> {
    let t = s.trim();
    // U+03A9(그리스 오메가)와 U+2126(옴 기호) 모두 허용
    let unit = strip_any_suffix(t, &["Ω", "Ω", "ohm", "Ohm", "OHM"])
        .and_then(|p| prefix_factor(p.trim_end(), true))
        .and_then(|f| ResistanceUnit::ALL.into_iter().find(|u| u.factor() == f));
    unit.ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_micro_spellings() {
        for s in ["uV", "µV", "μV"] {
            assert_eq!(parse_voltage_unit(s).unwrap(), VoltageUnit::MicroVolt, "{s}");
        }
        assert_eq!(parse_current_unit("mA").unwrap(), CurrentUnit::MilliAmpere);
    }

    #[test]
    fn milli_and_mega_ohm_are_distinct() {
        assert_eq!(parse_resistance_unit("mΩ").unwrap(), ResistanceUnit::MilliOhm);
        assert_eq!(parse_resistance_unit("MΩ").unwrap(), ResistanceUnit::MegaOhm);
        assert_eq!(parse_resistance_unit("kohm").unwrap(), ResistanceUnit::KiloOhm);
        assert_eq!(parse_resistance_unit("k ohm").unwrap(), ResistanceUnit::KiloOhm);
    }

    #[test]
    fn mega_volt_is_not_supported() {
        assert!(parse_voltage_unit("MV").is_err());
        assert!(parse_current_unit("GA").is_err());
    }

    #[test]
    fn parse_quantity_reads_value_and_prefix() {
        let r = parse_quantity(QuantityKind::Resistance, "2.2k").unwrap();
        assert!((r.value_base - 2200.0).abs() < 1e-9);
        let r = parse_quantity(QuantityKind::Resistance, "4.7 MΩ").unwrap();
        assert!((r.value_base - 4.7e6).abs() < 1e-3);
        let u = parse_quantity(QuantityKind::Voltage, "470mV").unwrap();
        assert!((u.value_base - 0.47).abs() < 1e-12);
        let plain = parse_quantity(QuantityKind::Current, "3").unwrap();
        assert_eq!(plain.value_base, 3.0);
    }

    #[test]
    fn parse_quantity_rejects_garbage() {
        assert!(matches!(
            parse_quantity(QuantityKind::Resistance, "10 furlongs"),
            Err(ConversionError::UnknownUnit(_))
        ));
        assert!(matches!(
            parse_quantity(QuantityKind::Voltage, "V"),
            Err(ConversionError::Input(_))
        ));
    }
}
