use kitcheck::catalog::fields;
use kitcheck::error::KitCheckError;
use kitcheck::predictor::{LinearModel, Predictor};
use kitcheck::record::ConfigurationRecord;
use std::fs;

fn midpoint_record() -> ConfigurationRecord {
    ConfigurationRecord::from_entries(
        fields()
            .iter()
            .map(|spec| (spec.name, spec.min.max(1.0)))
            .collect(),
    )
}

#[test]
fn artifact_round_trip_preserves_scoring() {
    let model = LinearModel::new_with_defaults();
    let record = midpoint_record();
    let expected = model.score(&record).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    fs::write(&path, serde_json::to_string_pretty(&model).unwrap()).unwrap();

    let loaded = LinearModel::load_from_file(&path).unwrap();
    let actual = loaded.score(&record).unwrap();
    assert_eq!(expected, actual);
}

#[test]
fn missing_coefficient_fails_scoring_without_panic() {
    let mut model = LinearModel::new_with_defaults();
    model.coefficients.remove("Gearbox_Ratio");

    match model.score(&midpoint_record()) {
        Err(KitCheckError::PredictionFailed(msg)) => assert!(msg.contains("Gearbox_Ratio")),
        other => panic!("Expected PredictionFailed, got {:?}", other),
    }
}

#[test]
fn malformed_artifact_is_a_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        LinearModel::load_from_file(&path),
        Err(KitCheckError::Json(_))
    ));
}

#[test]
fn missing_artifact_is_an_io_error() {
    assert!(matches!(
        LinearModel::load_from_file("does/not/exist.json"),
        Err(KitCheckError::Io(_))
    ));
}

#[test]
fn linear_sums_are_clamped_to_the_output_domain() {
    let mut model = LinearModel::new_with_defaults();
    model.intercept = 50.0;
    assert_eq!(model.score(&midpoint_record()).unwrap(), 1.0);

    model.intercept = -50.0;
    assert_eq!(model.score(&midpoint_record()).unwrap(), 0.0);
}
