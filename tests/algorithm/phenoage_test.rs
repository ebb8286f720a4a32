use biomarker_engine::algorithm::phenoage::{REQUIRED_INPUTS, estimate, estimate_for};
use biomarker_engine::{BiomarkerId, BiomarkerSnapshot, has_all_inputs, missing_inputs};

use crate::utils::{conventional_panel, pheno_age_panel, pheno_age_snapshot};

#[test]
fn test_healthy_panel() {
    let result = estimate(&pheno_age_snapshot(), 40.0).unwrap();
    assert_eq!(result.pheno_age, 28.7);
    assert_eq!(result.delta, -11.3);
}

#[test]
fn test_older_and_less_healthy_panel() {
    let mut snapshot = pheno_age_snapshot();
    snapshot.insert(BiomarkerId::Glucose, 6.0);
    snapshot.insert(BiomarkerId::Crp, 2.0);
    let result = estimate(&snapshot, 55.0).unwrap();
    assert_eq!(result.pheno_age, 48.7);
    assert_eq!(result.delta, -6.3);
}

#[test]
fn test_conventional_units_saturate() {
    // US conventional glucose (mg/dL) drives mortality to its clamp
    let snapshot = BiomarkerSnapshot::from_values(conventional_panel());
    let result = estimate(&snapshot, 40.0).unwrap();
    assert_eq!(result.pheno_age, 108.5);
    assert_eq!(result.delta, 68.5);
}

#[test]
fn test_result_clamps_at_zero() {
    let result = estimate(&pheno_age_snapshot(), 0.0).unwrap();
    assert_eq!(result.pheno_age, 0.0);
    assert_eq!(result.delta, 0.0);
}

#[test]
fn test_each_missing_input_gives_no_estimate() {
    for missing in REQUIRED_INPUTS {
        let snapshot: BiomarkerSnapshot = pheno_age_panel()
            .into_iter()
            .filter(|(id, _)| *id != missing)
            .collect();
        assert!(estimate(&snapshot, 40.0).is_none(), "estimate without {missing}");
        assert_eq!(missing_inputs(&snapshot), vec![missing]);
        assert!(!has_all_inputs(&snapshot));
    }
}

#[test]
fn test_zero_crp_is_finite() {
    let mut snapshot = pheno_age_snapshot();
    snapshot.insert(BiomarkerId::Crp, 0.0);
    let zero = estimate(&snapshot, 40.0).unwrap();

    snapshot.insert(BiomarkerId::Crp, 0.01);
    let floor = estimate(&snapshot, 40.0).unwrap();

    assert!(zero.pheno_age.is_finite() && zero.delta.is_finite());
    assert_eq!(zero, floor);
}

#[test]
fn test_uses_snapshot_age() {
    let snapshot = pheno_age_snapshot();
    assert!(estimate_for(&snapshot).is_none());
    assert_eq!(
        estimate_for(&snapshot.clone().with_age(40.0)),
        estimate(&snapshot, 40.0)
    );
}

#[test]
fn test_result_serializes_camel_case() {
    let result = estimate(&pheno_age_snapshot(), 40.0).unwrap();
    let json = serde_json::to_value(result).unwrap();
    assert_eq!(json, serde_json::json!({ "phenoAge": 28.7, "delta": -11.3 }));
}
