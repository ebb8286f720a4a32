//! A Rust library for interpreting blood-test biomarkers: reference-range
//! classification, derived ratios, biological age and a composite health score.

pub mod algorithm;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use models::{
    ActivitySample, ActivitySummary, BiomarkerCategory, BiomarkerId, BiomarkerReference,
    BiomarkerSnapshot, BodyComposition, Direction, ExtractedBiomarker, Range, Sex,
};
pub use report::{HealthReport, PatientInput};

// Catalog
pub use catalog::{ReferenceCatalog, normalize_lab_name};

// Algorithms
pub use algorithm::{
    BiomarkerStatus, CalculatedBiomarker, Goal, GoalPriority, HealthScoreResult, HealthScoreStatus,
    PhenoAgeResult, TopMarker, classify, classify_for_sex, classify_name, compute_derived,
    has_all_inputs, merge_derived, missing_inputs, select_goals, select_top_markers,
};
pub use algorithm::health_score::score as health_score;
pub use algorithm::phenoage::estimate as pheno_age;
