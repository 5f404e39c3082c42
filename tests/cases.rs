use airframe_aero::aerodas::ErrorKind;
use airframe_aero::case::{self, CaseError};
use airframe_aero::config::{AngleUnitConfig, ConfigError, TruthConfig, find_case, load_cases};
use airframe_aero::regression::{self, RegressionError};

fn aerodas_kind(err: CaseError) -> ErrorKind {
    match err {
        CaseError::Aerodas { source, .. } => source.kind(),
    }
}

#[test]
fn case_directory_loads_toml_cases_in_name_order() {
    let cases = load_cases("configs/cases").expect("cases dir");
    let names: Vec<_> = cases.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["solar_uav", "two_wing"]);

    let uav = find_case(&cases, "SOLAR_UAV").expect("case-insensitive lookup");
    assert_eq!(uav.angle_unit, AngleUnitConfig::Degrees);
    assert_eq!(uav.geometry.wings.len(), 3);
    assert!(uav.geometry.wings.iter().any(|w| w.vertical));
}

#[test]
fn stored_cases_reproduce_their_truth_values() {
    let cases = load_cases("configs/cases").expect("cases dir");
    for config in &cases {
        let result = case::evaluate(config).expect("evaluate");
        let truth = config.truth.as_ref().expect("truth block");
        let report = regression::check(&result, truth).expect("comparable");
        assert!(report.passed(), "{report}");
    }
}

#[test]
fn degrees_are_converted_before_blending() {
    let cases = load_cases("configs/cases/solar_uav.toml").expect("single toml");
    assert_eq!(cases.len(), 1);
    let prepared = case::prepare(&cases[0]);
    let alpha = prepared.state.angle_of_attack();
    assert!((alpha[1] - (-4.0_f64).to_radians()).abs() < 1e-12);
    assert!((alpha[9] - 45.0_f64.to_radians()).abs() < 1e-12);
    assert_eq!(prepared.state.pre_stall_coefficients().len(), 3);
}

#[test]
fn vertical_fin_lift_does_not_reach_the_total() {
    let cases = load_cases("configs/cases/solar_uav.toml").expect("single toml");
    let mut config = cases[0].clone();
    let baseline = case::evaluate(&config).expect("evaluate");

    for curve in [
        config.pre_stall.get_mut("vertical_stabilizer").unwrap(),
        config.post_stall.get_mut("vertical_stabilizer").unwrap(),
    ] {
        curve.lift_coefficient.iter_mut().for_each(|cl| *cl += 5.0);
    }
    let perturbed = case::evaluate(&config).expect("evaluate");
    assert_eq!(
        baseline.aggregate.lift_coefficient,
        perturbed.aggregate.lift_coefficient
    );
    assert_eq!(
        baseline.aggregate.drag_coefficient,
        perturbed.aggregate.drag_coefficient
    );
}

#[test]
fn yaml_scenarios_report_validation_failures() {
    let cases = load_cases("configs/scenarios.yaml").expect("yaml list");
    assert_eq!(cases.len(), 4);

    let short = find_case(&cases, "short_curve").unwrap();
    assert_eq!(
        aerodas_kind(case::evaluate(short).unwrap_err()),
        ErrorKind::ShapeMismatch
    );

    let missing = find_case(&cases, "missing_tail_curves").unwrap();
    let err = case::evaluate(missing).unwrap_err();
    assert!(err.to_string().contains("missing_tail_curves"), "{err}");
    assert_eq!(aerodas_kind(err), ErrorKind::ShapeMismatch);

    let zero = find_case(&cases, "zero_reference_area").unwrap();
    assert_eq!(
        aerodas_kind(case::evaluate(zero).unwrap_err()),
        ErrorKind::InvalidGeometry
    );
}

#[test]
fn stale_truth_fails_the_regression() {
    let cases = load_cases("configs/scenarios.yaml").expect("yaml list");
    let config = find_case(&cases, "stale_truth").unwrap();
    let result = case::evaluate(config).expect("evaluate");
    let report = regression::check(&result, config.truth.as_ref().unwrap()).expect("comparable");

    assert!(!report.passed());
    let lift = &report.errors[0];
    assert_eq!(lift.quantity, "lift_coefficient");
    assert!((lift.max_abs_error - 0.05).abs() < 1e-9);
    assert!(report.errors[1].max_abs_error < 1e-12);
}

#[test]
fn truth_with_wrong_length_is_not_comparable() {
    let cases = load_cases("configs/cases/two_wing.toml").expect("single toml");
    let result = case::evaluate(&cases[0]).expect("evaluate");
    let truth = TruthConfig {
        lift_coefficient: vec![0.3333333333333333],
        drag_coefficient: vec![0.026, 0.041],
        tolerance: 1e-6,
    };
    assert_eq!(
        regression::check(&result, &truth),
        Err(RegressionError::LengthMismatch {
            quantity: "lift_coefficient",
            truth: 1,
            computed: 2,
        })
    );
}

#[test]
fn missing_case_file_is_an_io_error() {
    let err = load_cases("configs/does_not_exist.yaml").unwrap_err();
    assert!(err.to_string().starts_with("failed to read case file"), "{err}");
}

#[test]
fn duplicate_case_names_in_a_directory_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let original = std::fs::read_to_string("configs/cases/two_wing.toml").expect("case text");
    std::fs::write(dir.path().join("a.toml"), &original).expect("write a");
    std::fs::write(
        dir.path().join("b.toml"),
        original.replace("name = \"two_wing\"", "name = \"TWO_WING\""),
    )
    .expect("write b");
    std::fs::write(dir.path().join("notes.txt"), "ignored").expect("write notes");

    match load_cases(dir.path()) {
        Err(ConfigError::DuplicateCase(name)) => assert_eq!(name, "TWO_WING"),
        other => panic!("expected duplicate case error, got {other:?}"),
    }

    std::fs::remove_file(dir.path().join("b.toml")).expect("remove b");
    let cases = load_cases(dir.path()).expect("single case dir");
    assert_eq!(cases.len(), 1);
}
