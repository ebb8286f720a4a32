use biomarker_engine::{
    BiomarkerId, BiomarkerSnapshot, EngineConfig, HealthReport, PatientInput, Sex,
};

use crate::utils::{activity_days, pheno_age_panel};

const PATIENT_JSON: &str = r#"{
    "id": "patient-1",
    "patientAge": 40,
    "sex": "female",
    "biomarkers": [
        { "name": "Albumin", "value": 45, "unit": "g/L" },
        { "name": "Creatinine", "value": 80 },
        { "name": "Glucose", "value": 4.7 },
        { "name": "hs-CRP", "value": 0.05 },
        { "name": "Lymphocytes %", "value": 30 },
        { "name": "MCV", "value": 88 },
        { "name": "RDW", "value": 12.5 },
        { "name": "Alk Phos", "value": 60 },
        { "name": "WBC", "value": 5.5 },
        { "name": "LDL-C", "value": 150 },
        { "name": "ldl", "value": 90 },
        { "name": "Cholesterol, Total", "value": 230 },
        { "name": "HDL-C", "value": 55 },
        { "name": "Mystery Marker", "value": 3 }
    ],
    "activity": [
        { "date": "2024-03-01", "hrv": 62, "rhr": 55, "sleepHours": 7.5, "steps": 10500 },
        { "date": "2024-03-02", "hrv": 58, "rhr": 57, "sleepHours": 6.9 }
    ],
    "bodyComposition": { "bodyFatPercent": 27.5, "leanMass": 120.4 }
}"#;

fn parse_patient() -> PatientInput {
    serde_json::from_str(PATIENT_JSON).expect("valid patient document")
}

#[test]
fn test_patient_document_parses() {
    let input = parse_patient();
    assert_eq!(input.patient_age, Some(40.0));
    assert_eq!(input.sex, Some(Sex::Female));
    assert_eq!(input.biomarkers.len(), 14);
    assert_eq!(input.activity.len(), 2);
    assert_eq!(input.activity[0].steps, Some(10_500));
    assert_eq!(
        input.body_composition.as_ref().and_then(|b| b.body_fat_percent),
        Some(27.5)
    );
}

#[test]
fn test_end_to_end_report() {
    let report = HealthReport::build(&parse_patient(), &EngineConfig::default()).unwrap();

    assert_eq!(report.patient_id.as_deref(), Some("patient-1"));
    assert_eq!(report.import.unrecognized, ["Mystery Marker"]);
    assert_eq!(report.import.duplicates_dropped, ["ldl"]);
    assert_eq!(report.snapshot.get(BiomarkerId::Ldl), Some(150.0));
    assert_eq!(report.snapshot.measured_ids().count(), report.import.accepted);

    let pheno = report.pheno_age.expect("all nine inputs present");
    assert_eq!(pheno.pheno_age, 28.7);
    assert_eq!(pheno.delta, -11.3);
    assert!(report.missing_pheno_age_inputs.is_empty());

    assert_eq!(report.snapshot.get(BiomarkerId::NonHdlC), Some(175.0));
    assert!(report.derived.iter().any(|c| c.id == BiomarkerId::TcHdlRatio));

    assert!(report.health_score.score <= 100);
    assert!(report.goals.iter().any(|g| g.id == "goal-ldl"));
    assert!(report.goals.iter().any(|g| g.id == "goal-bodyfat"));
    assert!(!report.goals.iter().any(|g| g.id == "goal-bioage"));
    assert!(report.top_markers.len() <= 5);

    let activity = report.activity.as_ref().unwrap();
    assert_eq!(activity.days, 2);
    assert_eq!(activity.avg_hrv, 60.0);
}

#[test]
fn test_report_json_shape() {
    let report = HealthReport::build(&parse_patient(), &EngineConfig::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["patientId"], "patient-1");
    assert_eq!(json["phenoAge"]["phenoAge"], 28.7);
    assert!(json["healthScore"]["breakdown"]["totalBiomarkers"].as_u64().unwrap() > 0);
    assert!(json["topMarkers"].is_array());
    assert!(json["missingPhenoAgeInputs"].as_array().unwrap().is_empty());
    assert!(json.get("sex").is_none());
}

#[test]
fn test_summary_text() {
    let report = HealthReport::build(&parse_patient(), &EngineConfig::default()).unwrap();
    let text = report.summary_text();

    assert!(text.contains("Chronological Age: 40 years"));
    assert!(text.contains("Biological Age (PhenoAge): 28.7 years"));
    assert!(text.contains("Delta: -11.3 years"));
    assert!(text.contains("LDL-C: 150 mg/dL (Out of Range)"));
    assert!(text.contains("--- Body Composition (DEXA Scan) ---"));
    assert!(text.contains("Lean Mass: 120.4 lbs"));
    assert!(text.contains("Steps: 10,500"));
    assert!(!text.contains("Mystery Marker"));
}

#[test]
fn test_activity_window_limits_summary_only() {
    let mut samples = activity_days(10, 30.0, 90.0, 5.0);
    for sample in samples.iter_mut().skip(7) {
        sample.hrv = 90.0;
    }
    let snapshot = BiomarkerSnapshot::from_values(pheno_age_panel());
    let config = EngineConfig::default().with_activity_window_days(3);
    let report = HealthReport::from_snapshot(snapshot, &samples, None, &config).unwrap();

    let summary = report.activity.as_ref().unwrap();
    assert_eq!(summary.days, 3);
    assert_eq!(summary.avg_hrv, 90.0);
    assert!(report.summary_text().contains("--- Activity (3-day average) ---"));
    // the score still averages all ten days: hrv 48 scores 70
    assert_eq!(report.health_score.breakdown.activity_score, 50.0);
}

#[test]
fn test_build_many_preserves_order() {
    let inputs: Vec<PatientInput> = (0..16)
        .map(|i| PatientInput {
            id: Some(format!("p{i}")),
            patient_age: Some(30.0 + f64::from(i)),
            ..parse_patient()
        })
        .collect();

    let reports = HealthReport::build_many(&inputs, &EngineConfig::default()).unwrap();
    assert_eq!(reports.len(), 16);
    for (i, report) in reports.iter().enumerate() {
        assert_eq!(report.patient_id, Some(format!("p{i}")));
    }
    assert!(reports[0].pheno_age.unwrap().pheno_age < reports[15].pheno_age.unwrap().pheno_age);
}

#[test]
fn test_empty_patient() {
    let report = HealthReport::build(&PatientInput::default(), &EngineConfig::default()).unwrap();
    assert_eq!(report.health_score.score, 50);
    assert!(report.goals.is_empty());
    assert!(report.top_markers.is_empty());
    assert!(report.activity.is_none());
    assert_eq!(report.summary_text(), "=== HEALTH DATA SUMMARY ===");
}
