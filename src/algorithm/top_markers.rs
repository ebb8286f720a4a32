//! Top-marker selection
//!
//! Picks the handful of biomarkers worth showing first. ApoB and HbA1c are
//! anchors and always lead when present. The remaining slots go to the
//! highest-scoring readings, where the score adds up:
//!
//! - status severity: out of range 100, borderline 50, normal 10, optimal 0
//! - a longevity bonus of 90 down to 10 following [`LONGEVITY_PRIORITY`]
//! - a penalty of 50 for markers in [`DEPRIORITIZED`]
//!
//! Ties keep catalog order.

use serde::Serialize;

use crate::algorithm::classify::{BiomarkerStatus, classify_for_sex};
use crate::models::biomarker::{BiomarkerId, Sex};
use crate::models::snapshot::BiomarkerSnapshot;

/// Default number of markers selected
pub const MAX_TOP_MARKERS: usize = 5;

/// Markers that always lead the selection, in order
pub const ANCHORS: [BiomarkerId; 2] = [BiomarkerId::ApoB, BiomarkerId::Hba1c];

/// Longevity-relevant markers, most important first
pub const LONGEVITY_PRIORITY: [BiomarkerId; 9] = [
    BiomarkerId::Crp,
    BiomarkerId::VitaminD,
    BiomarkerId::Ldl,
    BiomarkerId::Hdl,
    BiomarkerId::Triglycerides,
    BiomarkerId::FastingInsulin,
    BiomarkerId::Homocysteine,
    BiomarkerId::Glucose,
    BiomarkerId::Albumin,
];

/// Markers pushed down even when out of range
pub const DEPRIORITIZED: [BiomarkerId; 5] = [
    BiomarkerId::AlkalinePhosphatase,
    BiomarkerId::Mcv,
    BiomarkerId::Rdw,
    BiomarkerId::Wbc,
    BiomarkerId::Creatinine,
];

const LONGEVITY_STEP: i32 = 10;
const DEPRIORITIZED_PENALTY: i32 = 50;

/// A biomarker selected for display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopMarker {
    pub id: BiomarkerId,
    /// Display name from the catalog
    pub name: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub status: BiomarkerStatus,
}

impl TopMarker {
    fn new(id: BiomarkerId, value: f64, status: BiomarkerStatus) -> Self {
        let reference = id.reference();
        Self {
            id,
            name: reference.name,
            value,
            unit: reference.unit,
            status,
        }
    }
}

/// Ranking score of a marker with a given status
#[must_use]
pub fn marker_score(id: BiomarkerId, status: BiomarkerStatus) -> i32 {
    let severity = match status {
        BiomarkerStatus::OutOfRange => 100,
        BiomarkerStatus::Borderline => 50,
        BiomarkerStatus::Normal => 10,
        BiomarkerStatus::Optimal => 0,
    };

    let longevity = LONGEVITY_PRIORITY
        .iter()
        .position(|priority| *priority == id)
        .map_or(0, |index| (LONGEVITY_PRIORITY.len() - index) as i32 * LONGEVITY_STEP);

    let penalty = if DEPRIORITIZED.contains(&id) {
        DEPRIORITIZED_PENALTY
    } else {
        0
    };

    severity + longevity - penalty
}

/// Select up to [`MAX_TOP_MARKERS`] markers with generic optimal ranges
#[must_use]
pub fn select_top_markers(snapshot: &BiomarkerSnapshot) -> Vec<TopMarker> {
    select_top_markers_with(snapshot, None, MAX_TOP_MARKERS)
}

/// Select up to `limit` markers, classifying with sex-specific ranges if known
#[must_use]
pub fn select_top_markers_with(
    snapshot: &BiomarkerSnapshot,
    sex: Option<Sex>,
    limit: usize,
) -> Vec<TopMarker> {
    let mut selected: Vec<TopMarker> = ANCHORS
        .iter()
        .filter_map(|id| {
            let value = snapshot.get(*id)?;
            Some(TopMarker::new(*id, value, classify_for_sex(*id, value, sex)))
        })
        .take(limit)
        .collect();

    let mut candidates: Vec<(i32, TopMarker)> = snapshot
        .iter()
        .filter(|(id, value)| !ANCHORS.contains(id) && value.is_finite())
        .map(|(id, value)| {
            let status = classify_for_sex(id, value, sex);
            (marker_score(id, status), TopMarker::new(id, value, status))
        })
        .collect();

    // stable, so equal scores keep catalog order
    candidates.sort_by(|a, b| b.0.cmp(&a.0));

    let remaining = limit.saturating_sub(selected.len());
    selected.extend(candidates.into_iter().take(remaining).map(|(_, marker)| marker));
    selected
}
