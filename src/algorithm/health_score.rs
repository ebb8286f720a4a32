//! Composite health score
//!
//! Three sub-scores on a 0-100 scale are blended with fixed weights:
//!
//! | Component  | Weight | Source                                  | Without data |
//! |------------|--------|-----------------------------------------|--------------|
//! | Biomarkers | 0.5    | status of every catalogued reading      | 50           |
//! | Age        | 0.3    | PhenoAge delta, clamped to ±10 years    | 50           |
//! | Activity   | 0.2    | mean HRV, resting heart rate and sleep  | 50           |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::algorithm::classify::{BiomarkerStatus, classify_for_sex};
use crate::algorithm::phenoage::PhenoAgeResult;
use crate::models::activity::{ActivitySample, ActivitySummary};
use crate::models::biomarker::Sex;
use crate::models::snapshot::BiomarkerSnapshot;
use crate::utils::math::round_half_up;

/// Weight of the biomarker sub-score
pub const BIOMARKER_WEIGHT: f64 = 0.5;
/// Weight of the age sub-score
pub const AGE_WEIGHT: f64 = 0.3;
/// Weight of the activity sub-score
pub const ACTIVITY_WEIGHT: f64 = 0.2;

/// Sub-score used when a component has no data
pub const NEUTRAL_SCORE: f64 = 50.0;

const OPTIMAL_POINTS: f64 = 100.0;
const NORMAL_POINTS: f64 = 60.0;
const OUT_OF_RANGE_POINTS: f64 = 0.0;

/// PhenoAge deltas beyond this many years score the same as the limit
const AGE_DELTA_LIMIT: f64 = 10.0;
/// Points lost per year of PhenoAge delta
const POINTS_PER_YEAR: f64 = 5.0;

/// Qualitative band of a health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthScoreStatus {
    /// 80 and above
    Optimal,
    /// 60 to 79
    Good,
    /// 40 to 59
    Fair,
    /// Below 40
    NeedsWork,
}

impl HealthScoreStatus {
    /// Band for a final score
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Optimal,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::NeedsWork,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Optimal => "Optimal",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsWork => "Needs Work",
        }
    }
}

impl fmt::Display for HealthScoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Sub-scores, weights and status counts behind a health score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthScoreBreakdown {
    pub biomarker_score: f64,
    pub biomarker_weight: f64,
    pub age_score: f64,
    pub age_weight: f64,
    pub activity_score: f64,
    pub activity_weight: f64,
    /// Readings classified optimal
    pub optimal_count: usize,
    /// Readings classified normal or borderline
    pub normal_count: usize,
    /// Readings classified out of range
    pub out_of_range_count: usize,
    /// Readings with a catalog entry
    pub total_biomarkers: usize,
}

/// Final health score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthScoreResult {
    /// Weighted score, 0 to 100
    pub score: u8,
    /// Qualitative band
    pub status: HealthScoreStatus,
    /// Display label of the band
    pub label: String,
    /// How the score was reached
    pub breakdown: HealthScoreBreakdown,
}

/// Status counts over a snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub optimal: usize,
    /// Normal and borderline together
    pub normal: usize,
    pub out_of_range: usize,
}

impl StatusCounts {
    /// Count the classified status of every finite reading
    #[must_use]
    pub fn from_snapshot(snapshot: &BiomarkerSnapshot, sex: Option<Sex>) -> Self {
        snapshot
            .iter()
            .filter(|(_, value)| value.is_finite())
            .fold(Self::default(), |mut counts, (id, value)| {
                match classify_for_sex(id, value, sex) {
                    BiomarkerStatus::Optimal => counts.optimal += 1,
                    BiomarkerStatus::Normal | BiomarkerStatus::Borderline => counts.normal += 1,
                    BiomarkerStatus::OutOfRange => counts.out_of_range += 1,
                }
                counts
            })
    }

    /// Number of readings counted
    #[must_use]
    pub const fn total(&self) -> usize {
        self.optimal + self.normal + self.out_of_range
    }
}

/// Biomarker sub-score: 100 per optimal, 60 per normal or borderline, 0 per out of range
#[must_use]
pub fn biomarker_score(counts: &StatusCounts) -> f64 {
    let total = counts.total();
    if total == 0 {
        return NEUTRAL_SCORE;
    }

    (counts.optimal as f64 * OPTIMAL_POINTS
        + counts.normal as f64 * NORMAL_POINTS
        + counts.out_of_range as f64 * OUT_OF_RANGE_POINTS)
        / total as f64
}

/// Age sub-score: a delta of -10 years scores 100, 0 scores 50, +10 scores 0
#[must_use]
pub fn age_score(pheno_age: Option<&PhenoAgeResult>) -> f64 {
    let Some(result) = pheno_age else {
        return NEUTRAL_SCORE;
    };
    if result.delta.is_nan() {
        return NEUTRAL_SCORE;
    }

    let delta = result.delta.clamp(-AGE_DELTA_LIMIT, AGE_DELTA_LIMIT);
    (NEUTRAL_SCORE - delta * POINTS_PER_YEAR).clamp(0.0, 100.0)
}

/// Activity sub-score from averaged wearable metrics
#[must_use]
pub fn activity_score(summary: Option<&ActivitySummary>) -> f64 {
    let Some(summary) = summary else {
        return NEUTRAL_SCORE;
    };

    let hrv = if summary.avg_hrv >= 60.0 {
        100.0
    } else if summary.avg_hrv >= 40.0 {
        70.0
    } else {
        40.0
    };

    let rhr = if summary.avg_rhr < 60.0 {
        100.0
    } else if summary.avg_rhr < 80.0 {
        70.0
    } else {
        40.0
    };

    let sleep = if (7.0..=9.0).contains(&summary.avg_sleep_hours) {
        100.0
    } else if (6.0..=10.0).contains(&summary.avg_sleep_hours) {
        70.0
    } else {
        40.0
    };

    (hrv + rhr + sleep) / 3.0
}

/// Score a snapshot with generic optimal ranges
#[must_use]
pub fn score(
    snapshot: &BiomarkerSnapshot,
    pheno_age: Option<&PhenoAgeResult>,
    activity: &[ActivitySample],
) -> HealthScoreResult {
    score_for_sex(snapshot, pheno_age, activity, None)
}

/// Score a snapshot, using sex-specific optimal ranges where defined
///
/// Activity is averaged over every supplied sample.
#[must_use]
pub fn score_for_sex(
    snapshot: &BiomarkerSnapshot,
    pheno_age: Option<&PhenoAgeResult>,
    activity: &[ActivitySample],
    sex: Option<Sex>,
) -> HealthScoreResult {
    let counts = StatusCounts::from_snapshot(snapshot, sex);
    let biomarkers = biomarker_score(&counts);
    let age = age_score(pheno_age);
    let activity = activity_score(ActivitySummary::from_samples(activity).as_ref());

    let weighted = biomarkers * BIOMARKER_WEIGHT + age * AGE_WEIGHT + activity * ACTIVITY_WEIGHT;
    // Sub-scores are each within [0, 100], so the cast cannot truncate
    let score = round_half_up(weighted, 0).clamp(0.0, 100.0) as u8;
    let status = HealthScoreStatus::from_score(score);

    log::debug!(
        "Health score {score} (biomarkers {biomarkers:.1}, age {age:.1}, activity {activity:.1})"
    );

    HealthScoreResult {
        score,
        status,
        label: status.label().to_string(),
        breakdown: HealthScoreBreakdown {
            biomarker_score: round_half_up(biomarkers, 0),
            biomarker_weight: BIOMARKER_WEIGHT,
            age_score: round_half_up(age, 0),
            age_weight: AGE_WEIGHT,
            activity_score: round_half_up(activity, 0),
            activity_weight: ACTIVITY_WEIGHT,
            optimal_count: counts.optimal,
            normal_count: counts.normal,
            out_of_range_count: counts.out_of_range,
            total_biomarkers: counts.total(),
        },
    }
}
