use std::path::PathBuf;

use clap::{Parser, Subcommand};
use iu_diagram_tool::{
    app::{self, AppError},
    circuit::{self, ResistorDiagramInput, SourceDiagramInput},
    config, conversion, i18n, logging,
    quantity::QuantityKind,
    ui_cli,
};

/// I-U 특성선 도구의 터미널 버전.
#[derive(Parser, Debug)]
#[command(name = "iu_diagram_tool_cli", version, about = "Resistor lines and source load-line calculator")]
struct Cli {
    /// 언어: auto, en-us, de-de, ko-kr
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 로그를 debug 레벨로 출력
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 저항별 I = U/R 표를 출력한다.
    Resistors {
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        u_min: f64,
        #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
        u_max: f64,
        #[arg(long, default_value = "V")]
        u_unit: String,
        #[arg(long, default_value = "mA")]
        i_unit: String,
        /// 저항 값, 예: 100, 2.2k, 4.7MΩ (최대 3개)
        #[arg(short = 'r', long = "resistor", required = true, num_args = 1..=3)]
        resistors: Vec<String>,
        #[arg(long, default_value_t = ui_cli::TABLE_ROWS)]
        samples: usize,
    },
    /// 전압원/부하 동작점을 출력한다.
    Source {
        /// 전원 전압, 예: 10, 500mV
        #[arg(long)]
        uq: String,
        /// 내부 저항
        #[arg(long)]
        ri: String,
        /// 부하 저항
        #[arg(long)]
        rl: String,
        /// 부하선과 동작점을 계산하지 않는다
        #[arg(long)]
        no_load: bool,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령 또는 대화형 메뉴를 실행한다.
fn main() {
    if let Err(err) = try_run() {
        log::error!("{err}");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = config::load_or_default_at(&cli.config)?;
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        logging::parse_level(&cfg.log_level)
    };
    logging::init_logging(level)?;
    log::debug!("config loaded from {}", cli.config.display());

    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    match cli.command {
        None => app::run(&cfg, &tr)?,
        Some(Command::Resistors {
            u_min,
            u_max,
            u_unit,
            i_unit,
            resistors,
            samples,
        }) => {
            let (u_unit, i_unit) = ui_cli::parse_axis_units(&u_unit, &i_unit)?;
            let resistors = ui_cli::parse_resistor_args(&resistors)?;
            let input = ResistorDiagramInput {
                u_min,
                u_max,
                u_unit,
                i_min: 0.0,
                i_max: 0.0,
                i_unit,
                resistors,
            };
            let diagram = circuit::resistor_lines(&input, samples).map_err(AppError::from)?;
            ui_cli::print_resistor_table(&diagram);
        }
        Some(Command::Source { uq, ri, rl, no_load }) => {
            let input = SourceDiagramInput {
                uq_v: conversion::parse_quantity(QuantityKind::Voltage, &uq)?.value_base,
                ri_ohm: conversion::parse_quantity(QuantityKind::Resistance, &ri)?.value_base,
                rl_ohm: conversion::parse_quantity(QuantityKind::Resistance, &rl)?.value_base,
                show_load: !no_load,
            };
            let diagram = circuit::source_diagram(&input, &cfg.sweep.source);
            if no_load {
                ui_cli::print_source_line(&diagram);
            } else {
                ui_cli::print_operating_points(&tr, &diagram);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_resistor_flags_are_capped() {
        let cli = Cli::try_parse_from(["iu", "resistors", "-r", "1", "2", "3", "-r", "4"])
            .expect("clap accepts repeated -r");
        let Some(Command::Resistors { resistors, .. }) = cli.command else {
            panic!("expected resistors subcommand");
        };
        assert_eq!(resistors.len(), 4);
        assert!(matches!(
            ui_cli::parse_resistor_args(&resistors),
            Err(AppError::TooManyResistors { count: 4, max: 3 })
        ));
    }

    #[test]
    fn three_resistors_with_units_are_accepted() {
        let cli = Cli::try_parse_from(["iu", "resistors", "-r", "100", "2.2k", "-r", "1MΩ"])
            .expect("valid arguments");
        let Some(Command::Resistors { resistors, .. }) = cli.command else {
            panic!("expected resistors subcommand");
        };
        let specs = ui_cli::parse_resistor_args(&resistors).unwrap();
        let ohms: Vec<f64> = specs.iter().map(|s| s.unwrap().value).collect();
        assert_eq!(ohms.len(), 3);
        assert!((ohms[1] - 2200.0).abs() < 1e-9);
        assert!((ohms[2] - 1.0e6).abs() < 1e-6);
    }
}
