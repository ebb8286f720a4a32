//! Domain models for the biomarker engine
//!
//! This module contains the data types that flow through the engine: canonical
//! biomarker identifiers and reference entries, the per-patient snapshot of lab
//! values, wearable activity samples and body-composition scans.

pub mod activity;
pub mod biomarker;
pub mod body_composition;
pub mod snapshot;

// Re-export commonly used types
pub use activity::{ActivitySample, ActivitySummary};
pub use biomarker::{BiomarkerCategory, BiomarkerId, BiomarkerReference, Direction, Range, Sex};
pub use body_composition::BodyComposition;
pub use snapshot::{BiomarkerSnapshot, ExtractedBiomarker, ImportReport, Reading, ValueSource};
