//! Biological age estimation (Levine PhenoAge)
//!
//! Implements the phenotypic age clock from Levine et al. (2018), "An epigenetic
//! biomarker of aging for lifespan and healthspan", doi:10.18632/aging.101414.
//!
//! The estimate needs nine biomarkers and a chronological age. With any of
//! them missing there is no estimate at all; a partial estimate is never
//! produced. The coefficients are the published ones and are applied to the
//! values exactly as supplied.

use serde::{Deserialize, Serialize};

use crate::models::biomarker::BiomarkerId;
use crate::models::snapshot::BiomarkerSnapshot;
use crate::utils::math::round_half_up;

/// The nine biomarkers the clock reads, in coefficient order
pub const REQUIRED_INPUTS: [BiomarkerId; 9] = [
    BiomarkerId::Albumin,
    BiomarkerId::Creatinine,
    BiomarkerId::Glucose,
    BiomarkerId::Crp,
    BiomarkerId::LymphocytePercent,
    BiomarkerId::Mcv,
    BiomarkerId::Rdw,
    BiomarkerId::AlkalinePhosphatase,
    BiomarkerId::Wbc,
];

const INTERCEPT: f64 = -19.9067;
const ALBUMIN: f64 = -0.0336;
const CREATININE: f64 = 0.0095;
const GLUCOSE: f64 = 0.1953;
const LN_CRP: f64 = 0.0954;
const LYMPHOCYTE_PERCENT: f64 = -0.012;
const MCV: f64 = 0.0268;
const RDW: f64 = 0.3306;
const ALKALINE_PHOSPHATASE: f64 = 0.00188;
const WBC: f64 = 0.0554;
const AGE: f64 = 0.0804;

/// Gompertz shape parameter of the mortality model
const GAMMA: f64 = 0.0077;
/// Horizon of the mortality score, in months
const HORIZON_MONTHS: f64 = 120.0;

/// CRP values at or below zero are replaced by this before taking the log
const CRP_FLOOR: f64 = 0.01;
/// Upper clamp on mortality so that `ln(1 - m)` stays finite
const MAX_MORTALITY: f64 = 0.9999;

const AGE_OFFSET: f64 = 141.50225;
const AGE_LOG_SCALE: f64 = -0.00553;
const AGE_DIVISOR: f64 = 0.090165;

/// Youngest and oldest age the estimate reports
const MIN_PHENO_AGE: f64 = 0.0;
const MAX_PHENO_AGE: f64 = 150.0;

/// Estimated biological age
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhenoAgeResult {
    /// Biological age in years, one decimal
    pub pheno_age: f64,
    /// `pheno_age - chronological age`, one decimal; negative is younger
    pub delta: f64,
}

/// The nine clock inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhenoAgeInputs {
    pub albumin: f64,
    pub creatinine: f64,
    pub glucose: f64,
    pub crp: f64,
    pub lymphocyte_percent: f64,
    pub mcv: f64,
    pub rdw: f64,
    pub alkaline_phosphatase: f64,
    pub wbc: f64,
}

impl PhenoAgeInputs {
    /// Collect the inputs from a snapshot, or `None` if any is missing
    ///
    /// Zero is a valid input here. Non-finite values count as missing.
    #[must_use]
    pub fn from_snapshot(snapshot: &BiomarkerSnapshot) -> Option<Self> {
        let get = |id| snapshot.get(id).filter(|value: &f64| value.is_finite());
        Some(Self {
            albumin: get(BiomarkerId::Albumin)?,
            creatinine: get(BiomarkerId::Creatinine)?,
            glucose: get(BiomarkerId::Glucose)?,
            crp: get(BiomarkerId::Crp)?,
            lymphocyte_percent: get(BiomarkerId::LymphocytePercent)?,
            mcv: get(BiomarkerId::Mcv)?,
            rdw: get(BiomarkerId::Rdw)?,
            alkaline_phosphatase: get(BiomarkerId::AlkalinePhosphatase)?,
            wbc: get(BiomarkerId::Wbc)?,
        })
    }

    /// Linear predictor `xb` of the mortality model
    #[must_use]
    pub fn linear_score(&self, chronological_age: f64) -> f64 {
        let crp = if self.crp <= 0.0 { CRP_FLOOR } else { self.crp };

        INTERCEPT
            + ALBUMIN * self.albumin
            + CREATININE * self.creatinine
            + GLUCOSE * self.glucose
            + LN_CRP * crp.ln()
            + LYMPHOCYTE_PERCENT * self.lymphocyte_percent
            + MCV * self.mcv
            + RDW * self.rdw
            + ALKALINE_PHOSPHATASE * self.alkaline_phosphatase
            + WBC * self.wbc
            + AGE * chronological_age
    }

    /// Evaluate the clock
    ///
    /// An infinite intermediate age is clamped like any other out-of-range
    /// age. Returns `None` only for a non-finite chronological age.
    #[must_use]
    pub fn estimate(&self, chronological_age: f64) -> Option<PhenoAgeResult> {
        if !chronological_age.is_finite() {
            log::debug!("PhenoAge skipped, chronological age is {chronological_age}");
            return None;
        }

        let xb = self.linear_score(chronological_age);
        let mortality = mortality_score(xb).min(MAX_MORTALITY);
        let pheno_age = AGE_OFFSET + (AGE_LOG_SCALE * (1.0 - mortality).ln()).ln() / AGE_DIVISOR;

        if pheno_age.is_nan() {
            log::debug!("PhenoAge is not a number (xb = {xb})");
            return None;
        }

        let pheno_age = round_half_up(pheno_age.clamp(MIN_PHENO_AGE, MAX_PHENO_AGE), 1);
        Some(PhenoAgeResult {
            pheno_age,
            delta: round_half_up(pheno_age - chronological_age, 1),
        })
    }
}

/// Ten-year mortality risk from the linear predictor
fn mortality_score(xb: f64) -> f64 {
    1.0 - (-xb.exp() * ((HORIZON_MONTHS * GAMMA).exp() - 1.0) / GAMMA).exp()
}

/// Estimate biological age from a snapshot and a chronological age
#[must_use]
pub fn estimate(snapshot: &BiomarkerSnapshot, chronological_age: f64) -> Option<PhenoAgeResult> {
    let Some(inputs) = PhenoAgeInputs::from_snapshot(snapshot) else {
        log::debug!("PhenoAge skipped, missing {:?}", missing_inputs(snapshot));
        return None;
    };
    inputs.estimate(chronological_age)
}

/// Estimate biological age using the snapshot's own chronological age
#[must_use]
pub fn estimate_for(snapshot: &BiomarkerSnapshot) -> Option<PhenoAgeResult> {
    estimate(snapshot, snapshot.chronological_age?)
}

/// Which of the nine inputs a snapshot lacks
#[must_use]
pub fn missing_inputs(snapshot: &BiomarkerSnapshot) -> Vec<BiomarkerId> {
    REQUIRED_INPUTS
        .iter()
        .copied()
        .filter(|id| !snapshot.get(*id).is_some_and(f64::is_finite))
        .collect()
}

/// Whether a snapshot has all nine inputs
#[must_use]
pub fn has_all_inputs(snapshot: &BiomarkerSnapshot) -> bool {
    missing_inputs(snapshot).is_empty()
}
