use neff::error::{InvalidInput, NeffError};
use neff::evaluator::{evaluate, Band, IDEAL_MAX, IDEAL_MIN};
use neff::measurements::MeasurementSet;
use rstest::rstest;

fn set(max_i: f64, max_c: f64, mand_i: f64, mand_c: f64) -> MeasurementSet {
    MeasurementSet::new(max_i, max_c, mand_i, mand_c)
}

#[test]
fn test_default_ideals_fall_below_band() {
    let res = evaluate(&MeasurementSet::default()).unwrap();
    assert!((res.maxillary_sum - 16.1).abs() < 1e-12);
    assert!((res.mandibular_sum - 11.5).abs() < 1e-12);
    assert_eq!(format!("{:.3}", res.coefficient), "0.714");
    assert_eq!(res.band, Band::BelowIdeal);
    assert!(res.message.contains("(0.714 < 1.20)"));
}

#[test]
fn test_mid_band_is_ideal() {
    let res = evaluate(&set(5.0, 5.0, 6.0, 6.1)).unwrap();
    assert!((res.coefficient - 1.21).abs() < 1e-12);
    assert_eq!(res.band, Band::Ideal);
}

// Power-of-two maxillary sums keep the division exact, so these hit the
// boundary literals bit-for-bit.
#[rstest]
#[case(set(4.0, 4.0, 4.8, 4.8), IDEAL_MIN)]
#[case(set(4.0, 4.0, 4.88, 4.88), IDEAL_MAX)]
fn test_boundaries_are_inclusive(#[case] input: MeasurementSet, #[case] expected: f64) {
    let res = evaluate(&input).unwrap();
    assert_eq!(res.coefficient, expected);
    assert_eq!(res.band, Band::Ideal);
}

#[rstest]
#[case(1.20, Band::Ideal)]
#[case(1.22, Band::Ideal)]
#[case(1.21, Band::Ideal)]
#[case(1.1999, Band::BelowIdeal)]
#[case(0.0, Band::BelowIdeal)]
#[case(-3.0, Band::BelowIdeal)]
#[case(1.2201, Band::AboveIdeal)]
#[case(f64::INFINITY, Band::AboveIdeal)]
fn test_classify(#[case] coefficient: f64, #[case] expected: Band) {
    assert_eq!(Band::classify(coefficient), expected);
}

#[rstest]
#[case(set(0.0, 0.0, 5.0, 6.5))]
#[case(set(0.0, 0.0, 0.0, 0.0))]
#[case(set(2.5, -2.5, 100.0, 1.0))]
fn test_zero_maxillary_sum_rejected(#[case] input: MeasurementSet) {
    match evaluate(&input) {
        Err(NeffError::InvalidInput(InvalidInput::ZeroMaxillarySum)) => {}
        other => panic!("expected ZeroMaxillarySum, got {:?}", other),
    }
}

#[test]
fn test_above_band_message() {
    let res = evaluate(&set(5.0, 5.0, 7.0, 7.0)).unwrap();
    assert_eq!(res.band, Band::AboveIdeal);
    assert!(res.message.starts_with("ABOVE IDEAL RANGE (1.400 > 1.22)"));
    assert!(res.message.contains("• Possible anterior spacing"));
}

#[test]
fn test_json_shape() {
    let res = evaluate(&MeasurementSet::default()).unwrap();
    let v = serde_json::to_value(&res).unwrap();
    assert_eq!(v["band"], "BelowIdeal");
    assert!(v.get("maxillarySum").is_some());
    assert!(v.get("mandibularSum").is_some());
}
