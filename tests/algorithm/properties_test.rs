use biomarker_engine::algorithm::health_score::score;
use biomarker_engine::algorithm::phenoage::{PhenoAgeInputs, estimate};
use biomarker_engine::utils::math::round_half_up;
use biomarker_engine::{
    BiomarkerId, BiomarkerSnapshot, BiomarkerStatus, PhenoAgeResult, classify, classify_name,
    compute_derived, merge_derived,
};
use proptest::prelude::*;

use crate::utils::{activity_days, pheno_age_panel};

fn any_id() -> impl Strategy<Value = BiomarkerId> {
    (0..BiomarkerId::ALL.len()).prop_map(|index| BiomarkerId::ALL[index])
}

fn pheno_inputs() -> impl Strategy<Value = PhenoAgeInputs> {
    (
        (1.0..6.0f64, 0.3..3.0f64, 3.0..12.0f64, -1.0..20.0f64, 5.0..60.0f64),
        (70.0..110.0f64, 10.0..20.0f64, 20.0..200.0f64, 2.0..15.0f64),
    )
        .prop_map(|((albumin, creatinine, glucose, crp, lymph), (mcv, rdw, alp, wbc))| {
            PhenoAgeInputs {
                albumin,
                creatinine,
                glucose,
                crp,
                lymphocyte_percent: lymph,
                mcv,
                rdw,
                alkaline_phosphatase: alp,
                wbc,
            }
        })
}

proptest! {
    #[test]
    fn optimal_range_wins(id in any_id(), t in 0.01..0.99f64) {
        let reference = id.reference();
        if let (Some(optimal), Some(_)) = (reference.optimal_range, reference.standard_range) {
            let value = match (optimal.min, optimal.max) {
                (Some(min), Some(max)) => min + (max - min) * t,
                (Some(min), None) => min + 1.0 + t * 100.0,
                (None, Some(max)) => max - 1.0 - t * 100.0,
                (None, None) => t,
            };
            prop_assert_eq!(classify(id, value), BiomarkerStatus::Optimal);
        }
    }

    #[test]
    fn outside_standard_is_flagged(id in any_id(), t in 0.01..10.0f64) {
        let reference = id.reference();
        if let Some(standard) = reference.standard_range {
            for value in [standard.min.map(|min| min - t), standard.max.map(|max| max + t)]
                .into_iter()
                .flatten()
            {
                let in_optimal = reference.optimal_range.is_some_and(|r| r.contains(value));
                if !in_optimal {
                    let status = classify(id, value);
                    prop_assert_eq!(status, BiomarkerStatus::OutOfRange);
                }
            }
        }
    }

    #[test]
    fn classify_is_deterministic(id in any_id(), value in -1e6..1e6f64) {
        prop_assert_eq!(classify(id, value), classify(id, value));
        prop_assert_eq!(classify_name(id.as_str(), value), classify(id, value));
    }

    #[test]
    fn unknown_names_are_normal(value in -1e6..1e6f64, suffix in "[0-9]{1,6}") {
        let name = format!("zz-not-a-marker-{suffix}");
        prop_assert_eq!(classify_name(&name, value), BiomarkerStatus::Normal);
    }

    #[test]
    fn pheno_age_is_bounded(inputs in pheno_inputs(), age in 18.0..100.0f64) {
        let result = inputs.estimate(age).unwrap();
        prop_assert!(result.pheno_age.is_finite() && (0.0..=150.0).contains(&result.pheno_age));
        prop_assert!(result.delta.is_finite() && (-150.0..=150.0).contains(&result.delta));
        prop_assert_eq!(inputs.estimate(age), Some(result));
    }

    #[test]
    fn pheno_age_needs_every_input(skip in 0usize..9, age in 18.0..100.0f64) {
        let snapshot: BiomarkerSnapshot = pheno_age_panel()
            .into_iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, entry)| entry)
            .collect();
        prop_assert!(estimate(&snapshot, age).is_none());
    }

    #[test]
    fn health_score_is_bounded(
        values in proptest::collection::vec((any_id(), -1e4..1e4f64), 0..40),
        delta in proptest::option::of(-200.0..200.0f64),
        hrv in 0.0..200.0f64,
        rhr in 30.0..120.0f64,
        sleep in 0.0..14.0f64,
        days in 0u32..10,
    ) {
        let snapshot = BiomarkerSnapshot::from_values(values);
        let pheno = delta.map(|delta| PhenoAgeResult { pheno_age: 50.0, delta });
        let result = score(&snapshot, pheno.as_ref(), &activity_days(days, hrv, rhr, sleep));
        prop_assert!(result.score <= 100);
        prop_assert_eq!(result.breakdown.total_biomarkers, snapshot.len());
    }

    #[test]
    fn merge_keeps_measured_values(
        values in proptest::collection::vec((any_id(), 0.1..500.0f64), 0..30),
    ) {
        let mut snapshot = BiomarkerSnapshot::from_values(values);
        let before = snapshot.clone();
        let calculated = compute_derived(&snapshot);
        merge_derived(&mut snapshot, &calculated);

        for (id, value) in before.iter() {
            prop_assert_eq!(snapshot.get(id), Some(value));
        }
    }

    #[test]
    fn rounding_is_half_up(whole in -1000i64..1000) {
        let half = whole as f64 + 0.5;
        prop_assert_eq!(round_half_up(half, 0), (whole + 1) as f64);
        prop_assert_eq!(round_half_up(whole as f64 + 0.25, 1), round_half_up(whole as f64 + 0.3, 1));
    }
}
