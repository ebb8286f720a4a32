//! Derived-biomarker calculator
//!
//! This module evaluates the formula table in [`formulas`] against a snapshot
//! and merges the results back in. A formula whose inputs are not all present
//! is skipped; so is one whose result is not a finite number. Neither is an
//! error.
//!
//! Merging follows one rule: a measured value is never replaced by a
//! calculated one.

pub mod formulas;

use serde::Serialize;
use smallvec::SmallVec;

use crate::catalog::ReferenceCatalog;
use crate::models::biomarker::BiomarkerId;
use crate::models::snapshot::BiomarkerSnapshot;
use crate::utils::math::round_half_up;
use formulas::{FORMULAS, Formula, FormulaInputs};

/// A biomarker computed from other biomarkers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedBiomarker {
    /// Id of the derived biomarker
    pub id: BiomarkerId,
    /// Display name
    pub name: &'static str,
    /// Rounded value
    pub value: f64,
    /// Unit from the catalog
    pub unit: &'static str,
    /// Human-readable formula
    pub formula: &'static str,
    /// Ids the value was computed from
    pub inputs: SmallVec<[BiomarkerId; 3]>,
}

/// Evaluate one formula
#[must_use]
pub fn evaluate(formula: &Formula, inputs: &FormulaInputs<'_>) -> Option<CalculatedBiomarker> {
    let Some(raw) = (formula.compute)(inputs) else {
        log::trace!("Skipping {}: missing inputs", formula.id);
        return None;
    };

    if !raw.is_finite() {
        log::debug!("Skipping {}: result is not finite ({raw})", formula.id);
        return None;
    }

    let reference = ReferenceCatalog::global().get(formula.id);
    Some(CalculatedBiomarker {
        id: formula.id,
        name: reference.name,
        value: round_half_up(raw, formula.decimals),
        unit: reference.unit,
        formula: formula.label,
        inputs: formula.inputs.iter().copied().collect(),
    })
}

/// Every derived biomarker computable from a snapshot, in table order
#[must_use]
pub fn compute_derived(snapshot: &BiomarkerSnapshot) -> Vec<CalculatedBiomarker> {
    let inputs = FormulaInputs::new(snapshot);
    let calculated: Vec<_> = FORMULAS
        .iter()
        .filter_map(|formula| evaluate(formula, &inputs))
        .collect();

    log::debug!(
        "Computed {} of {} derived biomarkers",
        calculated.len(),
        FORMULAS.len()
    );
    calculated
}

/// Merge calculated values into a snapshot; measured values win
///
/// Returns the number of values stored.
pub fn merge_derived(snapshot: &mut BiomarkerSnapshot, calculated: &[CalculatedBiomarker]) -> usize {
    let mut stored = 0;
    for biomarker in calculated {
        if snapshot.insert_calculated(biomarker.id, biomarker.value) {
            stored += 1;
        } else {
            log::debug!("Keeping measured {} over calculated value", biomarker.id);
        }
    }
    stored
}

/// Copy of a snapshot with every computable derived value merged in
#[must_use]
pub fn with_derived(snapshot: &BiomarkerSnapshot) -> BiomarkerSnapshot {
    let calculated = compute_derived(snapshot);
    let mut merged = snapshot.clone();
    merge_derived(&mut merged, &calculated);
    merged
}
