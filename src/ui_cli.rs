use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::circuit::{
    self, OperatingPoint, ResistorDiagram, ResistorDiagramInput, ResistorSpec, SourceDiagram,
    SourceDiagramInput, RESISTOR_SLOTS,
};
use crate::config::Config;
use crate::conversion;
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;
use crate::units::{CurrentUnit, ResistanceUnit, VoltageUnit};

/// 표 출력 시 기본 행 수.
pub const TABLE_ROWS: usize = 11;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ResistorLines,
    SourceLoad,
    UnitConversion,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_RESISTOR_LINES));
    println!("{}", tr.t(keys::MAIN_MENU_SOURCE_LOAD));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::ResistorLines),
            "2" => return Ok(MenuChoice::SourceLoad),
            "3" => return Ok(MenuChoice::UnitConversion),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 저항 특성선 메뉴를 처리한다.
pub fn handle_resistor_lines(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::RESISTOR_HEADING));
    let u_min = read_f64(tr, keys::PROMPT_U_MIN)?;
    let u_max = read_f64(tr, keys::PROMPT_U_MAX)?;
    let u_unit = read_unit(tr, keys::PROMPT_U_UNIT, cfg.default_units.voltage, |s| {
        conversion::parse_voltage_unit(s).ok()
    })?;
    let i_unit = read_unit(tr, keys::PROMPT_I_UNIT, cfg.default_units.current, |s| {
        conversion::parse_current_unit(s).ok()
    })?;
    let mut resistors = Vec::with_capacity(RESISTOR_SLOTS);
    for n in 1..=RESISTOR_SLOTS {
        let prompt = tr.t_with(keys::PROMPT_RESISTOR, &[("n", n.to_string())]);
        let text = read_line(&prompt)?;
        if text.trim().is_empty() {
            resistors.push(None);
            continue;
        }
        let r = conversion::parse_quantity(QuantityKind::Resistance, &text)?;
        resistors.push(Some(ResistorSpec {
            value: r.value_base,
            unit: ResistanceUnit::Ohm,
        }));
    }
    let input = ResistorDiagramInput {
        u_min,
        u_max,
        u_unit,
        i_min: 0.0,
        i_max: 0.0,
        i_unit,
        resistors,
    };
    let diagram = circuit::resistor_lines(&input, TABLE_ROWS)?;
    print_resistor_table(&diagram);
    Ok(())
}

/// 전압원/부하 메뉴를 처리한다.
pub fn handle_source_load(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SOURCE_HEADING));
    let uq = read_quantity(tr, keys::PROMPT_UQ, QuantityKind::Voltage)?;
    let ri = read_quantity(tr, keys::PROMPT_RI, QuantityKind::Resistance)?;
    let rl = read_quantity(tr, keys::PROMPT_RL, QuantityKind::Resistance)?;
    let input = SourceDiagramInput {
        uq_v: uq,
        ri_ohm: ri,
        rl_ohm: rl,
        show_load: true,
    };
    let diagram = circuit::source_diagram(&input, &cfg.sweep.source);
    print_operating_points(tr, &diagram);
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(&tr.t(keys::PROMPT_KIND))?;
        if let Ok(n) = sel.trim().parse::<usize>() {
            if let Some(kind) = n.checked_sub(1).and_then(|i| QuantityKind::ALL.get(i)) {
                break *kind;
            }
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    println!("{}", kind.unit_symbols().join(", "));
    let value = read_f64(tr, keys::PROMPT_VALUE)?;
    let from_unit = read_line(&tr.t(keys::PROMPT_FROM_UNIT))?;
    let to_unit = read_line(&tr.t(keys::PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{} {result} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        to_unit.trim()
    );
    Ok(())
}

/// 저항 특성선 샘플을 표로 출력한다. 첫 열은 전압, 나머지는 저항별 전류.
pub fn print_resistor_table(diagram: &ResistorDiagram) {
    print!("{:>14}", diagram.x_label);
    for line in &diagram.lines {
        print!("  {:>20}", line.label);
    }
    println!("   [{}]", diagram.y_label);
    let rows = diagram.lines.first().map(|l| l.points.len()).unwrap_or(0);
    for row in 0..rows {
        print!("{:>14.4}", diagram.lines[0].points[row][0]);
        for line in &diagram.lines {
            print!("  {:>20.6}", line.points[row][1]);
        }
        println!();
    }
}

/// 동작점(스캔/해석해)을 출력한다.
pub fn print_operating_points(tr: &Translator, diagram: &SourceDiagram) {
    match &diagram.operating_point {
        Some(op) => print_point(&tr.t(keys::RESULT_OPERATING_POINT), op),
        None => println!("{}", tr.t(keys::RESULT_OPERATING_POINT_NONE)),
    }
    if let Some(op) = &diagram.exact_operating_point {
        print_point(&tr.t(keys::RESULT_OPERATING_POINT_EXACT), op);
    }
}

/// 부하 없이 전압원 직선만 요약해 출력한다 (10 샘플 간격).
pub fn print_source_line(diagram: &SourceDiagram) {
    println!("{:>10}  {:>10}", "I / A", "U / V");
    for [u, i] in diagram.source_line.iter().step_by(10) {
        println!("{i:>10.2}  {u:>10.3}");
    }
}

fn print_point(title: &str, op: &OperatingPoint) {
    println!("{title} U = {}, I = {}", op.voltage_text(), op.current_text());
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    read_line_from(&mut io::stdin().lock())
}

/// 한 줄을 읽는다. 입력이 끝났으면(EOF) `UnexpectedEof` 오류.
fn read_line_from(reader: &mut impl BufRead) -> Result<String, AppError> {
    let mut buf = String::new();
    if reader.read_line(&mut buf).map_err(AppError::Io)? == 0 {
        return Err(AppError::Io(io::ErrorKind::UnexpectedEof.into()));
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt_key: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(&tr.t(prompt_key))?;
        match crate::input::parse_field(prompt_key, &s) {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_quantity(tr: &Translator, prompt_key: &str, kind: QuantityKind) -> Result<f64, AppError> {
    loop {
        let s = read_line(&tr.t(prompt_key))?;
        match conversion::parse_quantity(kind, &s) {
            Ok(q) => {
                log::debug!("{prompt_key}: {q}");
                return Ok(q.value_base);
            }
            Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
        }
    }
}

/// 단위 기호를 읽는다. 비어 있으면 기본 단위, 알 수 없으면 안내 후 기본 단위.
fn read_unit<U: Copy>(
    tr: &Translator,
    prompt_key: &str,
    default: U,
    parse: impl Fn(&str) -> Option<U>,
) -> Result<U, AppError> {
    let s = read_line(&tr.t(prompt_key))?;
    if s.trim().is_empty() {
        return Ok(default);
    }
    Ok(parse(s.trim()).unwrap_or_else(|| {
        println!("{}", tr.t(keys::ERROR_INVALID_UNIT));
        default
    }))
}

/// `resistors` 명령의 `-r` 값들을 해석한다. 최대 `RESISTOR_SLOTS`개.
pub fn parse_resistor_args(texts: &[String]) -> Result<Vec<Option<ResistorSpec>>, AppError> {
    if texts.len() > RESISTOR_SLOTS {
        return Err(AppError::TooManyResistors {
            count: texts.len(),
            max: RESISTOR_SLOTS,
        });
    }
    texts
        .iter()
        .map(|text| {
            let r = conversion::parse_quantity(QuantityKind::Resistance, text)?;
            Ok(Some(ResistorSpec {
                value: r.value_base,
                unit: ResistanceUnit::Ohm,
            }))
        })
        .collect()
}

/// 비대화형 `resistors` 명령의 단위 문자열을 해석한다.
pub fn parse_axis_units(
    u_unit: &str,
    i_unit: &str,
) -> Result<(VoltageUnit, CurrentUnit), AppError> {
    Ok((
        conversion::parse_voltage_unit(u_unit)?,
        conversion::parse_current_unit(i_unit)?,
    ))
}
