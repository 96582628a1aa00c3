use iu_diagram_tool::{
    conversion::{self, ConversionError},
    quantity::QuantityKind,
    units::{convert_resistance, ResistanceUnit},
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9 * b.abs().max(1.0)
}

#[test]
fn voltage_and_current_prefixes() {
    let v = conversion::convert(QuantityKind::Voltage, 1500.0, "mV", "V").unwrap();
    assert!(approx(v, 1.5));
    let i = conversion::convert(QuantityKind::Current, 0.02, "A", "mA").unwrap();
    assert!(approx(i, 20.0));
    let i = conversion::convert(QuantityKind::Current, 250.0, "uA", "mA").unwrap();
    assert!(approx(i, 0.25));
}

#[test]
fn resistance_including_megaohm() {
    let r = conversion::convert(QuantityKind::Resistance, 4.7, "MΩ", "kΩ").unwrap();
    assert!(approx(r, 4700.0));
    let r = conversion::convert(QuantityKind::Resistance, 2.2, "kOhm", "Ω").unwrap();
    assert!(approx(r, 2200.0));
    assert!(approx(
        convert_resistance(1.0, ResistanceUnit::GigaOhm, ResistanceUnit::MegaOhm),
        1000.0
    ));
}

#[test]
fn unknown_unit_is_an_error() {
    let err = conversion::convert(QuantityKind::Voltage, 1.0, "bar", "V").unwrap_err();
    assert!(matches!(err, ConversionError::UnknownUnit(ref u) if u == "bar"));
}

#[test]
fn quantity_text_with_prefix_only() {
    let r = conversion::parse_quantity(QuantityKind::Resistance, "2.2k").unwrap();
    assert!(approx(r.value_base, 2200.0));
    let u = conversion::parse_quantity(QuantityKind::Voltage, "470 mV").unwrap();
    assert!(approx(u.value_base, 0.47));
    let plain = conversion::parse_quantity(QuantityKind::Current, "3").unwrap();
    assert!(approx(plain.value_base, 3.0));
}

#[test]
fn to_base_reports_kind() {
    let q = conversion::to_base(QuantityKind::Current, 5.0, "kA").unwrap();
    assert_eq!(q.kind, QuantityKind::Current);
    assert!(approx(q.value_base, 5000.0));
}
