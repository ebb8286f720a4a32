use biomarker_engine::algorithm::goals::{GOAL_TEMPLATES, MAX_GOALS, select_goals_with};
use biomarker_engine::algorithm::top_markers::{MAX_TOP_MARKERS, marker_score};
use biomarker_engine::{
    BiomarkerId, BiomarkerSnapshot, BiomarkerStatus, BodyComposition, GoalPriority, PhenoAgeResult,
    Sex, select_goals, select_top_markers,
};

#[test]
fn test_goals_sorted_by_priority_then_source_order() {
    let snapshot = BiomarkerSnapshot::from_values([
        (BiomarkerId::Ldl, 150.0),
        (BiomarkerId::Glucose, 95.0),
        (BiomarkerId::Tsh, 3.0),
        (BiomarkerId::Ferritin, 800.0),
        (BiomarkerId::Hdl, 70.0),
    ]);
    let pheno = PhenoAgeResult { pheno_age: 44.0, delta: 4.0 };
    let body = BodyComposition::with_body_fat(32.0);

    let goals = select_goals(&snapshot, Some(&pheno), Some(&body));
    let ids: Vec<&str> = goals.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "goal-ldl",
            "goal-bodyfat",
            "goal-glucose",
            "goal-ferritin",
            "goal-tsh",
            "goal-bioage",
        ]
    );
    assert_eq!(goals[0].priority, GoalPriority::High);
    assert_eq!(goals[0].target_value.as_deref(), Some("≤70 mg/dL"));
    assert_eq!(goals[0].current_value, Some(150.0));
    assert!(goals.windows(2).all(|pair| pair[0].priority <= pair[1].priority));
}

#[test]
fn test_goals_truncated() {
    let worst: BiomarkerSnapshot = GOAL_TEMPLATES
        .iter()
        .map(|template| (template.biomarker, 1e6))
        .collect();
    let goals = select_goals(
        &worst,
        Some(&PhenoAgeResult { pheno_age: 70.0, delta: 20.0 }),
        Some(&BodyComposition::with_body_fat(40.0)),
    );
    assert_eq!(goals.len(), MAX_GOALS);
    assert!(goals.iter().all(|g| g.priority == GoalPriority::High));

    let limited = select_goals_with(&worst, None, None, None, 2);
    assert_eq!(limited.len(), 2);
}

#[test]
fn test_healthy_snapshot_has_no_goals() {
    let snapshot = BiomarkerSnapshot::from_values([
        (BiomarkerId::Ldl, 60.0),
        (BiomarkerId::Glucose, 85.0),
        (BiomarkerId::VitaminD, 50.0),
    ]);
    let pheno = PhenoAgeResult { pheno_age: 38.0, delta: -2.0 };
    let goals = select_goals(&snapshot, Some(&pheno), Some(&BodyComposition::with_body_fat(18.0)));
    assert!(goals.is_empty());
}

#[test]
fn test_goal_thresholds_are_exclusive() {
    let at_delta = PhenoAgeResult { pheno_age: 42.0, delta: 2.0 };
    let at_fat = BodyComposition::with_body_fat(25.0);
    assert!(select_goals(&BiomarkerSnapshot::new(), Some(&at_delta), Some(&at_fat)).is_empty());
}

#[test]
fn test_goal_serializes_camel_case() {
    let snapshot = BiomarkerSnapshot::from_values([(BiomarkerId::Ldl, 150.0)]);
    let goals = select_goals(&snapshot, None, None);
    let json = serde_json::to_value(&goals[0]).unwrap();
    assert_eq!(json["priority"], "high");
    assert_eq!(json["biomarker"], "ldl");
    assert!(json["actionItems"].as_array().is_some_and(|items| !items.is_empty()));
}

#[test]
fn test_top_markers_anchor_then_score() {
    let snapshot = BiomarkerSnapshot::from_values([
        (BiomarkerId::Ldl, 60.0),
        (BiomarkerId::Creatinine, 5.0),
        (BiomarkerId::Hba1c, 6.0),
        (BiomarkerId::Crp, 5.0),
        (BiomarkerId::Glucose, 85.0),
        (BiomarkerId::Ferritin, 100.0),
    ]);
    let markers = select_top_markers(&snapshot);
    let ids: Vec<BiomarkerId> = markers.iter().map(|m| m.id).collect();

    // CRP 190, LDL 70, creatinine 50, glucose 20, ferritin 0
    assert_eq!(
        ids,
        [
            BiomarkerId::Hba1c,
            BiomarkerId::Crp,
            BiomarkerId::Ldl,
            BiomarkerId::Creatinine,
            BiomarkerId::Glucose,
        ]
    );
    assert_eq!(markers[0].status, BiomarkerStatus::OutOfRange);
    assert_eq!(markers.len(), MAX_TOP_MARKERS);
}

#[test]
fn test_deprioritized_markers_sink() {
    assert!(
        marker_score(BiomarkerId::Wbc, BiomarkerStatus::OutOfRange)
            < marker_score(BiomarkerId::Albumin, BiomarkerStatus::Borderline)
    );
    assert!(
        marker_score(BiomarkerId::Rdw, BiomarkerStatus::Borderline)
            < marker_score(BiomarkerId::Ferritin, BiomarkerStatus::Normal)
    );
}

#[test]
fn test_top_markers_serialize() {
    let snapshot = BiomarkerSnapshot::from_values([(BiomarkerId::ApoB, 60.0)]);
    let markers = select_top_markers(&snapshot);
    let json = serde_json::to_value(&markers).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "id": "apoB",
            "name": "ApoB",
            "value": 60.0,
            "unit": "mg/dL",
            "status": "optimal"
        }])
    );
}

#[test]
fn test_sex_specific_top_marker_status() {
    let snapshot = BiomarkerSnapshot::from_values([(BiomarkerId::Ferritin, 100.0)]);
    let male = biomarker_engine::algorithm::select_top_markers_with(&snapshot, Some(Sex::Male), 5);
    let female = biomarker_engine::algorithm::select_top_markers_with(&snapshot, Some(Sex::Female), 5);
    assert_eq!(male[0].status, BiomarkerStatus::Optimal);
    assert_eq!(female[0].status, BiomarkerStatus::Borderline);
}
