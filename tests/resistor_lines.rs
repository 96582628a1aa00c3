use iu_diagram_tool::{
    circuit::{resistor_lines, CircuitError, ResistorDiagramInput, ResistorForm, ResistorSpec},
    input::InputError,
    units::{CurrentUnit, ResistanceUnit, VoltageUnit},
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9 * b.abs().max(1.0)
}

#[test]
fn default_form_draws_three_lines_in_milliampere() {
    let diagram = ResistorForm::default().compute(101).expect("default form");
    assert_eq!(diagram.lines.len(), 3);
    assert_eq!(diagram.x_label, "U / V");
    assert_eq!(diagram.y_label, "I / mA");

    let r1 = &diagram.lines[0];
    assert_eq!(r1.points.len(), 101);
    let last = r1.points[100];
    assert!(approx(last[0], 10.0));
    assert!(approx(last[1], 100.0), "I at 10 V = {}", last[1]);
    // 500 Ω: 10 V / 500 Ω = 20 mA
    assert!(approx(diagram.lines[2].points[100][1], 20.0));
    assert_eq!(diagram.y_range.ordered(), (0.0, 100.0));
}

#[test]
fn kiloohm_and_millivolt_units_are_scaled() {
    let input = ResistorDiagramInput {
        u_min: 0.0,
        u_max: 500.0,
        u_unit: VoltageUnit::MilliVolt,
        i_min: 0.0,
        i_max: 1000.0,
        i_unit: CurrentUnit::MicroAmpere,
        resistors: vec![Some(ResistorSpec {
            value: 1.0,
            unit: ResistanceUnit::KiloOhm,
        })],
    };
    let diagram = resistor_lines(&input, 6).unwrap();
    let line = &diagram.lines[0];
    assert_eq!(line.label, "R1 = 1 kΩ");
    assert!(approx(line.resistance_ohm, 1000.0));
    // 500 mV / 1 kΩ = 500 µA
    assert!(approx(line.points[5][0], 500.0));
    assert!(approx(line.points[5][1], 500.0));
    assert!(approx(line.points[1][1], 100.0));
}

#[test]
fn zero_resistance_is_reported_with_label() {
    let mut form = ResistorForm::default();
    form.resistors[2].0 = "0".into();
    match form.compute(11) {
        Err(CircuitError::ZeroResistance { label }) => assert_eq!(label, "R3"),
        other => panic!("expected zero resistance error, got {other:?}"),
    }
}

#[test]
fn comma_decimal_separator_is_accepted() {
    let mut form = ResistorForm::default();
    form.resistors[0].0 = "2,5".into();
    form.resistors[0].1 = ResistanceUnit::KiloOhm;
    let diagram = form.compute(11).unwrap();
    assert!(approx(diagram.lines[0].resistance_ohm, 2500.0));
}

#[test]
fn invalid_number_names_the_field() {
    let mut form = ResistorForm::default();
    form.u_max = "ten".into();
    let err = form.compute(11).unwrap_err();
    assert_eq!(
        err,
        CircuitError::Input(InputError::InvalidNumber {
            field: "U max".into(),
            text: "ten".into(),
        })
    );
    assert!(err.to_string().contains("U max"));
}

#[test]
fn all_slots_empty_gives_empty_diagram() {
    let mut form = ResistorForm::default();
    for slot in form.resistors.iter_mut() {
        slot.0.clear();
    }
    let diagram = form.compute(11).unwrap();
    assert!(diagram.lines.is_empty());
}

#[test]
fn negative_voltage_range_gives_negative_current() {
    let mut form = ResistorForm::default();
    form.u_min = "-5".into();
    form.u_max = "5".into();
    form.i_unit = CurrentUnit::Ampere;
    let diagram = form.compute(3).unwrap();
    let pts = &diagram.lines[0].points;
    assert!(approx(pts[0][0], -5.0));
    assert!(approx(pts[0][1], -0.05));
    assert!(approx(pts[1][1], 0.0));
}
