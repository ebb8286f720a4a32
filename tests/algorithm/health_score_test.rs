use biomarker_engine::algorithm::health_score::{
    ACTIVITY_WEIGHT, AGE_WEIGHT, BIOMARKER_WEIGHT, NEUTRAL_SCORE, score, score_for_sex,
};
use biomarker_engine::{BiomarkerId, BiomarkerSnapshot, HealthScoreStatus, PhenoAgeResult, Sex};

use crate::utils::activity_days;

#[test]
fn test_neutral_without_any_data() {
    let result = score(&BiomarkerSnapshot::new(), None, &[]);
    assert_eq!(result.score, 50);
    assert_eq!(result.breakdown.biomarker_score, NEUTRAL_SCORE);
    assert_eq!(result.breakdown.age_score, NEUTRAL_SCORE);
    assert_eq!(result.breakdown.activity_score, NEUTRAL_SCORE);
    assert_eq!(result.breakdown.biomarker_weight, BIOMARKER_WEIGHT);
    assert_eq!(result.breakdown.age_weight, AGE_WEIGHT);
    assert_eq!(result.breakdown.activity_weight, ACTIVITY_WEIGHT);
}

#[test]
fn test_chronological_age_is_not_a_biomarker() {
    let snapshot = BiomarkerSnapshot::from_values([(BiomarkerId::Ldl, 65.0)]).with_age(40.0);
    let result = score(&snapshot, None, &[]);
    assert_eq!(result.breakdown.total_biomarkers, 1);
    assert_eq!(result.breakdown.optimal_count, 1);
}

#[test]
fn test_poor_profile_needs_work() {
    let snapshot = BiomarkerSnapshot::from_values([
        (BiomarkerId::Ldl, 190.0),
        (BiomarkerId::Hba1c, 7.5),
        (BiomarkerId::Crp, 8.0),
    ]);
    let pheno = PhenoAgeResult { pheno_age: 60.0, delta: 12.0 };
    let result = score(&snapshot, Some(&pheno), &activity_days(7, 25.0, 88.0, 5.0));

    // 0 * 0.5 + 0 * 0.3 + 40 * 0.2 = 8
    assert_eq!(result.breakdown.out_of_range_count, 3);
    assert_eq!(result.score, 8);
    assert_eq!(result.status, HealthScoreStatus::NeedsWork);
    assert_eq!(result.label, "Needs Work");
}

#[test]
fn test_activity_uses_every_sample() {
    let mut samples = activity_days(3, 70.0, 50.0, 8.0);
    samples.extend(activity_days(30, 70.0, 50.0, 8.0));
    let result = score(&BiomarkerSnapshot::new(), None, &samples);
    assert_eq!(result.breakdown.activity_score, 100.0);
    // 50 * 0.5 + 50 * 0.3 + 100 * 0.2 = 60
    assert_eq!(result.score, 60);
    assert_eq!(result.status, HealthScoreStatus::Good);
}

#[test]
fn test_sex_is_threaded_through() {
    let snapshot = BiomarkerSnapshot::from_values([(BiomarkerId::Ldl, 65.0)]);
    assert_eq!(
        score_for_sex(&snapshot, None, &[], Some(Sex::Female)),
        score_for_sex(&snapshot, None, &[], Some(Sex::Male))
    );
}

#[test]
fn test_result_serializes_camel_case() {
    let result = score(&BiomarkerSnapshot::new(), None, &[]);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["score"], 50);
    assert_eq!(json["status"], "fair");
    assert_eq!(json["breakdown"]["outOfRangeCount"], 0);
    assert_eq!(json["breakdown"]["totalBiomarkers"], 0);
}
