//! Biomarker status classification
//!
//! This module classifies a single biomarker value against its catalog entry.
//! The checks run in a fixed order and the first match wins:
//!
//! 1. inside the optimal range → [`BiomarkerStatus::Optimal`]
//! 2. outside the standard range → [`BiomarkerStatus::OutOfRange`]
//! 3. both ranges defined (so inside standard, outside optimal) → [`BiomarkerStatus::Borderline`]
//! 4. direction-based fallback for `lower`/`higher` markers with a single range
//! 5. otherwise [`BiomarkerStatus::Normal`]
//!
//! Unknown biomarkers and non-finite values classify as normal: they are never
//! flagged as a problem or as a success.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::ReferenceCatalog;
use crate::models::biomarker::{BiomarkerId, BiomarkerReference, Direction, Range, Sex};

/// Above `optimal max × 1.2`, a lower-is-better marker with no standard range
/// counts as out of range.
///
/// Unvalidated heuristic carried over for compatibility with existing reports;
/// not a clinical threshold.
pub const LOWER_IS_BETTER_OUT_OF_RANGE_FACTOR: f64 = 1.2;

/// Below `optimal min × 0.8`, a higher-is-better marker with no standard range
/// counts as out of range.
///
/// Unvalidated heuristic carried over for compatibility with existing reports;
/// not a clinical threshold.
pub const HIGHER_IS_BETTER_OUT_OF_RANGE_FACTOR: f64 = 0.8;

/// Status of a biomarker value relative to its reference ranges
///
/// Variants are ordered by severity: `Optimal < Normal < Borderline < OutOfRange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiomarkerStatus {
    /// Inside the optimal range
    Optimal = 0,
    /// No concern, but no optimal range to compare against
    Normal = 1,
    /// Inside the standard range but outside the optimal range
    Borderline = 2,
    /// Outside the standard range
    OutOfRange = 3,
}

impl BiomarkerStatus {
    /// Severity rank, 0 (optimal) to 3 (out of range)
    #[must_use]
    pub const fn severity(self) -> u8 {
        self as u8
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Optimal => "Optimal",
            Self::Normal => "Normal",
            Self::Borderline => "Borderline",
            Self::OutOfRange => "Out of Range",
        }
    }

    /// Wire name, as used in JSON output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Optimal => "optimal",
            Self::Normal => "normal",
            Self::Borderline => "borderline",
            Self::OutOfRange => "out_of_range",
        }
    }

    /// Whether the status warrants attention (borderline or out of range)
    #[must_use]
    pub const fn needs_attention(self) -> bool {
        matches!(self, Self::Borderline | Self::OutOfRange)
    }
}

impl fmt::Display for BiomarkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify a value for a canonical biomarker id
#[must_use]
pub fn classify(id: BiomarkerId, value: f64) -> BiomarkerStatus {
    let reference = ReferenceCatalog::global().get(id);
    classify_against(reference, reference.optimal_range, value)
}

/// Classify a value using sex-specific optimal ranges where the catalog has them
#[must_use]
pub fn classify_for_sex(id: BiomarkerId, value: f64, sex: Option<Sex>) -> BiomarkerStatus {
    let reference = ReferenceCatalog::global().get(id);
    classify_against(reference, reference.optimal_for(sex), value)
}

/// Classify a value for a free-form biomarker name
///
/// Names that resolve to no catalog entry classify as normal.
#[must_use]
pub fn classify_name(name: &str, value: f64) -> BiomarkerStatus {
    match ReferenceCatalog::global().resolve(name) {
        Some(id) => classify(id, value),
        None => {
            log::debug!("No reference for '{name}', classifying as normal");
            BiomarkerStatus::Normal
        }
    }
}

/// Classify a value against a reference entry and an explicit optimal range
///
/// NaN and infinite values classify as normal.
#[must_use]
pub fn classify_against(
    reference: &BiomarkerReference,
    optimal: Option<Range>,
    value: f64,
) -> BiomarkerStatus {
    if !value.is_finite() {
        log::debug!("Non-finite value for {}, classifying as normal", reference.id);
        return BiomarkerStatus::Normal;
    }

    if optimal.is_some_and(|range| range.contains(value)) {
        return BiomarkerStatus::Optimal;
    }

    if reference
        .standard_range
        .is_some_and(|range| !range.contains(value))
    {
        return BiomarkerStatus::OutOfRange;
    }

    if optimal.is_some() && reference.standard_range.is_some() {
        return BiomarkerStatus::Borderline;
    }

    direction_fallback(reference.direction, optimal, value).unwrap_or(BiomarkerStatus::Normal)
}

/// Single-range fallback for markers with a favorable direction
///
/// A zero bound is treated as absent.
fn direction_fallback(
    direction: Direction,
    optimal: Option<Range>,
    value: f64,
) -> Option<BiomarkerStatus> {
    let optimal = optimal?;
    match direction {
        Direction::Lower => {
            let max = optimal.max.filter(|max| *max != 0.0)?;
            Some(if value > max * LOWER_IS_BETTER_OUT_OF_RANGE_FACTOR {
                BiomarkerStatus::OutOfRange
            } else if value > max {
                BiomarkerStatus::Borderline
            } else {
                BiomarkerStatus::Optimal
            })
        }
        Direction::Higher => {
            let min = optimal.min.filter(|min| *min != 0.0)?;
            Some(if value < min * HIGHER_IS_BETTER_OUT_OF_RANGE_FACTOR {
                BiomarkerStatus::OutOfRange
            } else if value < min {
                BiomarkerStatus::Borderline
            } else {
                BiomarkerStatus::Optimal
            })
        }
        Direction::MidRange | Direction::Context => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::biomarker::BiomarkerCategory;

    fn reference(direction: Direction) -> BiomarkerReference {
        BiomarkerReference::new(
            BiomarkerId::Ldl,
            "Test",
            BiomarkerCategory::Lipids,
            "mg/dL",
            direction,
        )
    }

    #[test]
    fn test_status_ordering() {
        assert!(BiomarkerStatus::Optimal < BiomarkerStatus::Normal);
        assert!(BiomarkerStatus::Borderline < BiomarkerStatus::OutOfRange);
        assert_eq!(BiomarkerStatus::OutOfRange.severity(), 3);
        assert_eq!(
            serde_json::to_string(&BiomarkerStatus::OutOfRange).unwrap(),
            "\"out_of_range\""
        );
    }

    #[test]
    fn test_ldl_examples() {
        assert_eq!(classify(BiomarkerId::Ldl, 65.0), BiomarkerStatus::Optimal);
        assert_eq!(classify(BiomarkerId::Ldl, 70.0), BiomarkerStatus::Optimal);
        assert_eq!(classify(BiomarkerId::Ldl, 85.0), BiomarkerStatus::Borderline);
        assert_eq!(classify(BiomarkerId::Ldl, 150.0), BiomarkerStatus::OutOfRange);
    }

    #[test]
    fn test_non_finite_is_normal() {
        assert_eq!(classify(BiomarkerId::Ldl, f64::NAN), BiomarkerStatus::Normal);
        assert_eq!(classify(BiomarkerId::Ldl, f64::INFINITY), BiomarkerStatus::Normal);
        assert_eq!(
            classify_for_sex(BiomarkerId::Hdl, f64::NEG_INFINITY, Some(Sex::Female)),
            BiomarkerStatus::Normal
        );
        assert_eq!(classify_name("LDL-C", f64::NAN), BiomarkerStatus::Normal);
    }

    #[test]
    fn test_unknown_name_is_normal() {
        assert_eq!(classify_name("unobtainium", 1e9), BiomarkerStatus::Normal);
        assert_eq!(classify_name("LDL-C", 150.0), BiomarkerStatus::OutOfRange);
    }

    #[test]
    fn test_lower_direction_fallback() {
        let r = reference(Direction::Lower).optimal(Range::at_most(10.0));
        assert_eq!(classify_against(&r, r.optimal_range, 9.0), BiomarkerStatus::Optimal);
        assert_eq!(classify_against(&r, r.optimal_range, 11.0), BiomarkerStatus::Borderline);
        assert_eq!(classify_against(&r, r.optimal_range, 12.0), BiomarkerStatus::Borderline);
        assert_eq!(classify_against(&r, r.optimal_range, 12.5), BiomarkerStatus::OutOfRange);
    }

    #[test]
    fn test_higher_direction_fallback() {
        let r = reference(Direction::Higher).optimal(Range::at_least(50.0));
        assert_eq!(classify_against(&r, r.optimal_range, 45.0), BiomarkerStatus::Borderline);
        assert_eq!(classify_against(&r, r.optimal_range, 40.0), BiomarkerStatus::Borderline);
        assert_eq!(classify_against(&r, r.optimal_range, 39.0), BiomarkerStatus::OutOfRange);
    }

    #[test]
    fn test_zero_bound_skips_fallback() {
        let r = reference(Direction::Lower).optimal(Range::between(-5.0, 0.0));
        assert_eq!(classify_against(&r, r.optimal_range, 3.0), BiomarkerStatus::Normal);
    }

    #[test]
    fn test_mid_range_single_range_is_normal() {
        let r = reference(Direction::MidRange).optimal(Range::between(1.0, 2.0));
        assert_eq!(classify_against(&r, r.optimal_range, 5.0), BiomarkerStatus::Normal);

        let r = reference(Direction::Context).standard(Range::between(1.0, 2.0));
        assert_eq!(classify_against(&r, r.optimal_range, 1.5), BiomarkerStatus::Normal);
        assert_eq!(classify_against(&r, r.optimal_range, 2.5), BiomarkerStatus::OutOfRange);
    }

    #[test]
    fn test_sex_specific_optimal() {
        let reference = ReferenceCatalog::global()
            .all()
            .iter()
            .find(|r| r.male_optimal.is_some())
            .expect("catalog has a sex-specific entry");
        let male = reference.male_optimal.unwrap();
        let probe = male.min.or(male.max).unwrap();
        assert_eq!(
            classify_for_sex(reference.id, probe, Some(Sex::Male)),
            BiomarkerStatus::Optimal
        );
        assert_eq!(
            classify_for_sex(reference.id, probe, None),
            classify(reference.id, probe)
        );
    }
}
