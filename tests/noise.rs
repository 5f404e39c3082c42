use airframe_aero::noise::{NoiseError, combine_airframe_engine, combine_spectra, decibel_sum};

#[test]
fn equal_sources_add_three_decibels() {
    let total = combine_airframe_engine(90.0, 90.0, true).expect("sum");
    assert!((total - 93.0103).abs() < 1e-4, "total = {total}");
}

#[test]
fn excluded_engine_leaves_airframe_level() {
    let total = combine_airframe_engine(87.5, 110.0, false).expect("sum");
    assert!((total - 87.5).abs() < 1e-12);
}

#[test]
fn quiet_source_barely_changes_the_total() {
    let total = decibel_sum(&[100.0, 70.0]).expect("sum");
    assert!(total > 100.0 && total < 100.01, "total = {total}");
}

#[test]
fn sum_is_order_independent() {
    let a = decibel_sum(&[62.0, 71.5, 80.25]).expect("sum");
    let b = decibel_sum(&[80.25, 62.0, 71.5]).expect("sum");
    assert!((a - b).abs() < 1e-9);
}

#[test]
fn invalid_inputs_are_rejected() {
    assert_eq!(decibel_sum(&[]), Err(NoiseError::EmptyLevels));
    assert!(matches!(
        decibel_sum(&[80.0, f64::NAN]),
        Err(NoiseError::NonFinite { index: 1, .. })
    ));
    assert_eq!(
        combine_spectra(&[80.0, 82.0], &[75.0], true),
        Err(NoiseError::LengthMismatch {
            airframe: 2,
            engine: 1
        })
    );
}

#[test]
fn spectra_combine_band_by_band() {
    let airframe = [70.0, 80.0, 90.0];
    let engine = [70.0, 60.0, 93.0];
    let combined = combine_spectra(&airframe, &engine, true).expect("spectra");
    assert_eq!(combined.len(), 3);
    assert!((combined[0] - 73.0103).abs() < 1e-4);
    assert!((combined[1] - 80.0432).abs() < 1e-4);
    assert!(combined[2] > 93.0 && combined[2] < 95.0);

    let airframe_only = combine_spectra(&airframe, &engine, false).expect("spectra");
    for (a, b) in airframe_only.iter().zip(&airframe) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn non_finite_band_reports_its_index() {
    let err = combine_spectra(&[70.0, f64::INFINITY], &[60.0, 60.0], true).unwrap_err();
    assert!(matches!(err, NoiseError::NonFinite { index: 1, .. }));
}

#[test]
fn levels_beyond_f64_range_are_rejected() {
    assert_eq!(
        decibel_sum(&[4000.0]),
        Err(NoiseError::Overflow {
            levels: vec![4000.0]
        })
    );
    assert!(matches!(
        combine_airframe_engine(90.0, 3100.0, true),
        Err(NoiseError::Overflow { .. })
    ));
    // The largest representable energy still sums.
    assert!(decibel_sum(&[3000.0]).expect("finite").is_finite());
}
