//! Algorithm implementations for biomarker interpretation
//!
//! This module contains the computational core of the engine: status
//! classification, derived-biomarker formulas, the PhenoAge clock, the
//! composite health score and goal/top-marker selection. Everything here is
//! pure and reads only the shared reference catalog.

pub mod classify;
pub mod derived;
pub mod goals;
pub mod health_score;
pub mod phenoage;
pub mod top_markers;

pub use classify::{BiomarkerStatus, classify, classify_for_sex, classify_name};
pub use derived::{CalculatedBiomarker, compute_derived, merge_derived, with_derived};
pub use goals::{Goal, GoalPriority, select_goals, select_goals_with};
pub use health_score::{HealthScoreBreakdown, HealthScoreResult, HealthScoreStatus};
pub use phenoage::{PhenoAgeInputs, PhenoAgeResult, has_all_inputs, missing_inputs};
pub use top_markers::{TopMarker, select_top_markers, select_top_markers_with};
