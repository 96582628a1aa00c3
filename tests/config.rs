use std::{fs, path::PathBuf};

use iu_diagram_tool::{
    config::{load_or_default_at, Config},
    units::{CurrentUnit, ResistanceUnit},
};

fn temp_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("iu_diagram_tool_{}_{name}", std::process::id()));
    fs::create_dir_all(&dir).expect("temp dir");
    dir.join("config.toml")
}

#[test]
fn missing_file_is_created_with_defaults() {
    let path = temp_path("missing");
    let _ = fs::remove_file(&path);
    let cfg = load_or_default_at(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    assert_eq!(cfg.sweep.resistor_samples, 101);
    assert_eq!(cfg.sweep.source.sample_count, 110);
}

#[test]
fn partial_file_fills_remaining_fields() {
    let path = temp_path("partial");
    fs::write(&path, "log_level = \"debug\"\n[sweep.source]\ntolerance_v = 0.05\n").unwrap();
    let cfg = load_or_default_at(&path).unwrap();
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.sweep.source.tolerance_v, 0.05);
    assert_eq!(cfg.sweep.source.current_step_a, 0.1);
}

#[test]
fn saved_settings_load_back() {
    let path = temp_path("saved");
    let mut cfg = Config::default();
    cfg.language = "de-de".into();
    cfg.ui_scale = 1.25;
    cfg.default_units.current = CurrentUnit::MicroAmpere;
    cfg.default_units.resistance = ResistanceUnit::MegaOhm;
    cfg.save_to(&path).unwrap();
    let loaded = load_or_default_at(&path).unwrap();
    assert_eq!(loaded, cfg);
}

#[test]
fn broken_file_is_an_error() {
    let path = temp_path("broken");
    fs::write(&path, "ui_scale = \"big\"").unwrap();
    assert!(load_or_default_at(&path).is_err());
}

#[test]
fn ui_scale_from_file_is_clamped() {
    let path = temp_path("scale");
    fs::write(&path, "ui_scale = -2.0\n").unwrap();
    let cfg = load_or_default_at(&path).unwrap();
    assert_eq!(cfg.ui_scale, -2.0);
    assert_eq!(cfg.effective_ui_scale(), 0.8);

    let big = Config {
        ui_scale: 5.0,
        ..Config::default()
    };
    assert_eq!(big.effective_ui_scale(), 1.6);
    let nan = Config {
        ui_scale: f32::NAN,
        ..Config::default()
    };
    assert_eq!(nan.effective_ui_scale(), 1.0);
    assert_eq!(Config::default().effective_ui_scale(), 1.0);
}
