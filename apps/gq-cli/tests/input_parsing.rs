use gq_cli::report::render_text;
use gq_cli::{CliError, GasInput};
use gq_fluids::Component;
use gq_solver::{DensityConfig, evaluate};

const N1_LINES: &str = "\
p 5
t 26,85

Метан 96,5
Этан 1,8
Пропан 0,45
и-бутан 0,1
н-бутан 0,1
и-пентан 0,05
н-пентан 0,03
н-гексан 0,07
Азот 0,3
Диоксид углерода 0,6
";

#[test]
fn line_format_with_russian_names_and_comma_decimals() {
    let input = GasInput::parse_lines(N1_LINES).unwrap();
    assert_eq!(input.pressure_mpa, 5.0);
    assert!((input.temperature_c - 26.85).abs() < 1e-12);
    assert_eq!(input.components.len(), 10);
    assert_eq!(input.components[0], (Component::Methane, 96.5));
    assert_eq!(input.components[9], (Component::CarbonDioxide, 0.6));

    let ctx = input.context().unwrap();
    assert!((ctx.temperature_k() - 300.0).abs() < 1e-9);
    assert!((ctx.fraction(0) - 0.965).abs() < 1e-12);
}

#[test]
fn line_format_reproduces_reference_point() {
    let ctx = GasInput::parse_lines(N1_LINES).unwrap().context().unwrap();
    let report = evaluate(&ctx, &DensityConfig::default()).unwrap();
    assert!((report.density_kg_m3() - 36.949).abs() < 0.1);
    assert!((report.compressibility - 0.9116).abs() < 2e-4);

    let text = render_text(&report);
    assert!(text.contains("Composition functions:"));
    assert!(text.contains("58  |"));
    assert!(text.contains("Compressibility factor: Z = 0.91"));
}

#[test]
fn yaml_format_keeps_component_order() {
    let yaml = "\
pressure_mpa: 5
temperature_c: 26.85
components:
  N2: 0.3
  CH4: 96.5
  n-butane: 3.2
";
    let input = GasInput::parse_yaml(yaml).unwrap();
    assert_eq!(
        input.components,
        vec![
            (Component::Nitrogen, 0.3),
            (Component::Methane, 96.5),
            (Component::NButane, 3.2),
        ]
    );
}

#[test]
fn short_line_is_rejected_with_its_number() {
    let err = GasInput::parse_lines("p 5\nt 20\nmethane\n").unwrap_err();
    assert!(matches!(err, CliError::Parse { line: 3, .. }), "{err}");
}

#[test]
fn line_without_value_is_rejected() {
    let err = GasInput::parse_lines("p 5\nt 20\nmethane many\n").unwrap_err();
    assert!(matches!(err, CliError::Parse { line: 3, .. }), "{err}");
}

#[test]
fn unknown_name_is_rejected() {
    let err = GasInput::parse_lines("p 5\nt 20\nargon 1\n").unwrap_err();
    match err {
        CliError::Parse { line, what } => {
            assert_eq!(line, 3);
            assert!(what.contains("argon"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_pressure_is_reported() {
    let err = GasInput::parse_lines("t 20\nmethane 100\n").unwrap_err();
    assert!(matches!(err, CliError::Missing { .. }), "{err}");
}

#[test]
fn trace_helium_is_folded_when_building_the_context() {
    let input = GasInput::parse_lines("p 1\nt 0\nmethane 99,97\nhelium 0,03\n").unwrap();
    let ctx = input.context().unwrap();
    assert_eq!(ctx.len(), 3);
    assert_eq!(ctx.component(2), Component::Nitrogen);
    assert!((ctx.fraction(2) - 0.0003).abs() < 1e-15);
}
