use biomarker_engine::{BiomarkerId, BiomarkerStatus, Direction, Sex, classify, classify_for_sex};

#[test]
fn test_ldl_examples() {
    assert_eq!(classify(BiomarkerId::Ldl, 65.0), BiomarkerStatus::Optimal);
    assert_eq!(classify(BiomarkerId::Ldl, 150.0), BiomarkerStatus::OutOfRange);
}

#[test]
fn test_optimal_bounds_are_inclusive() {
    let reference = BiomarkerId::Ldl.reference();
    let max = reference
        .optimal_range
        .and_then(|range| range.max)
        .expect("LDL has an optimal maximum");
    assert_eq!(classify(BiomarkerId::Ldl, max), BiomarkerStatus::Optimal);
}

#[test]
fn test_between_ranges_is_borderline() {
    // inside standard (< 100) but above optimal (<= 70)
    assert_eq!(classify(BiomarkerId::Ldl, 85.0), BiomarkerStatus::Borderline);
}

#[test]
fn test_status_severity_order() {
    let mut statuses = vec![
        BiomarkerStatus::OutOfRange,
        BiomarkerStatus::Optimal,
        BiomarkerStatus::Borderline,
        BiomarkerStatus::Normal,
    ];
    statuses.sort();
    assert_eq!(
        statuses,
        [
            BiomarkerStatus::Optimal,
            BiomarkerStatus::Normal,
            BiomarkerStatus::Borderline,
            BiomarkerStatus::OutOfRange,
        ]
    );
    assert!(BiomarkerStatus::OutOfRange.needs_attention());
    assert!(!BiomarkerStatus::Normal.needs_attention());
}

#[test]
fn test_status_serializes_snake_case() {
    let json = serde_json::to_string(&BiomarkerStatus::OutOfRange).unwrap();
    assert_eq!(json, "\"out_of_range\"");
}

#[test]
fn test_sex_specific_falls_back_to_generic() {
    for id in BiomarkerId::ALL {
        let reference = id.reference();
        if reference.male_optimal.is_none() && reference.female_optimal.is_none() {
            for value in [0.5, 10.0, 100.0] {
                assert_eq!(
                    classify_for_sex(*id, value, Some(Sex::Male)),
                    classify(*id, value),
                    "{id} at {value}"
                );
            }
        }
    }
}

#[test]
fn test_sex_specific_ranges_change_status() {
    let with_split = BiomarkerId::ALL
        .iter()
        .map(|id| id.reference())
        .find(|r| r.male_optimal.is_some() && r.female_optimal.is_some() && r.male_optimal != r.female_optimal)
        .expect("catalog has a sex-specific optimal range");

    let male = with_split.male_optimal.unwrap();
    let female = with_split.female_optimal.unwrap();

    // a value inside one range and outside the other must classify differently
    let probe = [male.min, male.max, female.min, female.max]
        .into_iter()
        .flatten()
        .find(|v| male.contains(*v) != female.contains(*v));

    if let Some(value) = probe {
        assert_ne!(
            classify_for_sex(with_split.id, value, Some(Sex::Male)),
            classify_for_sex(with_split.id, value, Some(Sex::Female)),
        );
    }
}

#[test]
fn test_single_range_mid_range_markers_are_normal() {
    let value = 1e12;
    for id in BiomarkerId::ALL {
        let reference = id.reference();
        let mid = matches!(reference.direction, Direction::MidRange | Direction::Context);
        let only_optimal = reference.optimal_range.is_some() && reference.standard_range.is_none();
        if mid && only_optimal && !reference.optimal_range.is_some_and(|r| r.contains(value)) {
            assert_eq!(classify(*id, value), BiomarkerStatus::Normal, "{id}");
        }
    }
}
