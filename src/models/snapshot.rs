//! Per-patient biomarker snapshot
//!
//! A snapshot is the current set of lab values for one patient, keyed by the
//! closed [`BiomarkerId`] enum. Chronological age travels beside the readings as
//! an explicit field instead of a sentinel key inside the value map.
//!
//! Each reading remembers whether it was measured by a lab or calculated by the
//! engine, so that merging derived values never overwrites a measurement.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::normalize_lab_name;
use crate::error::{EngineError, Result};
use crate::models::biomarker::BiomarkerId;

/// Where a reading came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    /// Reported by a lab or an extraction service
    Measured,
    /// Computed from other readings
    Calculated,
}

/// A single biomarker value with its provenance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Numeric value in the catalog unit
    pub value: f64,
    /// Measured or calculated
    pub source: ValueSource,
}

impl Reading {
    /// A lab-measured reading
    #[must_use]
    pub const fn measured(value: f64) -> Self {
        Self {
            value,
            source: ValueSource::Measured,
        }
    }

    /// An engine-calculated reading
    #[must_use]
    pub const fn calculated(value: f64) -> Self {
        Self {
            value,
            source: ValueSource::Calculated,
        }
    }
}

/// One named value as handed over by a lab-report extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedBiomarker {
    /// Name as printed on the report
    pub name: String,
    /// Reported value
    pub value: f64,
    /// Reported unit, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl ExtractedBiomarker {
    /// Create an extracted record without a unit
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            unit: None,
        }
    }
}

/// Outcome of importing extracted records into a snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    /// Records that became readings
    pub accepted: usize,
    /// Names dropped because an earlier record resolved to the same id
    pub duplicates_dropped: Vec<String>,
    /// Names that resolved to no catalog entry
    pub unrecognized: Vec<String>,
    /// Names whose value was not a finite number
    pub rejected: Vec<String>,
}

impl ImportReport {
    /// True when every record was accepted
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.duplicates_dropped.is_empty() && self.unrecognized.is_empty() && self.rejected.is_empty()
    }
}

/// Lab values for a single patient at a single point in time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiomarkerSnapshot {
    readings: BTreeMap<BiomarkerId, Reading>,
    /// Chronological age in years, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chronological_age: Option<f64>,
}

impl BiomarkerSnapshot {
    /// Create an empty snapshot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chronological age
    #[must_use]
    pub fn with_age(mut self, age: f64) -> Self {
        self.chronological_age = Some(age);
        self
    }

    /// Build a snapshot of measured values
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = (BiomarkerId, f64)>,
    {
        let mut snapshot = Self::new();
        for (id, value) in values {
            snapshot.insert(id, value);
        }
        snapshot
    }

    /// Import extractor output
    ///
    /// Names are normalized through the catalog. The first record for a given id
    /// wins and later duplicates are dropped; unknown names and non-finite values
    /// are reported rather than failing the import.
    #[must_use]
    pub fn from_extracted(records: &[ExtractedBiomarker]) -> (Self, ImportReport) {
        let mut snapshot = Self::new();
        let mut report = ImportReport::default();

        for record in records {
            let Some(id) = normalize_lab_name(&record.name) else {
                log::debug!("Unrecognized biomarker name '{}'", record.name);
                report.unrecognized.push(record.name.clone());
                continue;
            };

            if !record.value.is_finite() {
                log::debug!("Rejected non-finite value for '{}'", record.name);
                report.rejected.push(record.name.clone());
                continue;
            }

            if snapshot.contains(id) {
                log::debug!("Dropped duplicate '{}' for {id}", record.name);
                report.duplicates_dropped.push(record.name.clone());
                continue;
            }

            snapshot.insert(id, record.value);
            report.accepted += 1;
        }

        (snapshot, report)
    }

    /// Insert or replace a measured value
    pub fn insert(&mut self, id: BiomarkerId, value: f64) {
        self.readings.insert(id, Reading::measured(value));
    }

    /// Insert a measured value, rejecting NaN and infinities
    pub fn try_insert(&mut self, id: BiomarkerId, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(EngineError::invalid_value(id.as_str(), value));
        }
        self.insert(id, value);
        Ok(())
    }

    /// Insert a calculated value unless a measured value already exists
    ///
    /// Returns whether the value was stored. An earlier calculated value for the
    /// same id is replaced.
    pub fn insert_calculated(&mut self, id: BiomarkerId, value: f64) -> bool {
        match self.readings.get(&id) {
            Some(existing) if existing.source == ValueSource::Measured => false,
            _ => {
                self.readings.insert(id, Reading::calculated(value));
                true
            }
        }
    }

    /// Remove a reading
    pub fn remove(&mut self, id: BiomarkerId) -> Option<Reading> {
        self.readings.remove(&id)
    }

    /// Value for an id
    #[must_use]
    pub fn get(&self, id: BiomarkerId) -> Option<f64> {
        self.readings.get(&id).map(|reading| reading.value)
    }

    /// Reading (value and source) for an id
    #[must_use]
    pub fn reading(&self, id: BiomarkerId) -> Option<&Reading> {
        self.readings.get(&id)
    }

    /// Whether a value exists for an id
    #[must_use]
    pub fn contains(&self, id: BiomarkerId) -> bool {
        self.readings.contains_key(&id)
    }

    /// Whether the value for an id was measured
    #[must_use]
    pub fn is_measured(&self, id: BiomarkerId) -> bool {
        self.readings
            .get(&id)
            .is_some_and(|reading| reading.source == ValueSource::Measured)
    }

    /// Number of readings
    #[must_use]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether the snapshot holds no readings
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// All values in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (BiomarkerId, f64)> + '_ {
        self.readings.iter().map(|(id, reading)| (*id, reading.value))
    }

    /// All readings in catalog order
    pub fn readings(&self) -> impl Iterator<Item = (BiomarkerId, &Reading)> + '_ {
        self.readings.iter().map(|(id, reading)| (*id, reading))
    }

    /// Ids with measured values
    pub fn measured_ids(&self) -> impl Iterator<Item = BiomarkerId> + '_ {
        self.readings
            .iter()
            .filter(|(_, reading)| reading.source == ValueSource::Measured)
            .map(|(id, _)| *id)
    }
}

impl FromIterator<(BiomarkerId, f64)> for BiomarkerSnapshot {
    fn from_iter<I: IntoIterator<Item = (BiomarkerId, f64)>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}
