//! End-to-end health report
//!
//! A [`HealthReport`] runs the whole engine over one patient:
//! import the extracted lab values, compute and merge derived biomarkers,
//! estimate PhenoAge, then score and pick goals and top markers. It also
//! renders the plain-text summary handed to chat-style consumers.

use std::fmt::Write as _;
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::algorithm::classify::classify_for_sex;
use crate::algorithm::derived::{CalculatedBiomarker, compute_derived, merge_derived};
use crate::algorithm::goals::{Goal, select_goals_with};
use crate::algorithm::health_score::{HealthScoreResult, score_for_sex};
use crate::algorithm::phenoage::{self, PhenoAgeResult};
use crate::algorithm::top_markers::{TopMarker, select_top_markers_with};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::models::activity::{ActivitySample, ActivitySummary};
use crate::models::biomarker::{BiomarkerId, Sex};
use crate::models::body_composition::BodyComposition;
use crate::models::snapshot::{BiomarkerSnapshot, ExtractedBiomarker, ImportReport, ValueSource};
use crate::utils::logging::{log_operation_complete, log_operation_start};
use crate::utils::math::round_half_up;

/// Everything known about one patient, as read from a JSON document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientInput {
    /// Optional label carried into the report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Chronological age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_age: Option<f64>,
    /// Overrides the configured sex when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    /// Lab values as extracted from reports
    pub biomarkers: Vec<ExtractedBiomarker>,
    /// Daily wearable samples
    pub activity: Vec<ActivitySample>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_composition: Option<BodyComposition>,
}

/// Result of running the engine over one patient
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    /// Readings after import and, if configured, derived merge
    pub snapshot: BiomarkerSnapshot,
    /// What happened to each extracted record
    pub import: ImportReport,
    /// Every derived biomarker computable from the measured values
    pub derived: Vec<CalculatedBiomarker>,
    pub pheno_age: Option<PhenoAgeResult>,
    /// PhenoAge inputs the snapshot lacks
    pub missing_pheno_age_inputs: Vec<BiomarkerId>,
    pub health_score: HealthScoreResult,
    pub goals: Vec<Goal>,
    pub top_markers: Vec<TopMarker>,
    /// Averages over the configured window of recent days
    pub activity: Option<ActivitySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_composition: Option<BodyComposition>,
    #[serde(skip)]
    sex: Option<Sex>,
    #[serde(skip)]
    activity_window_days: usize,
}

impl HealthReport {
    /// Build a report from a patient document
    pub fn build(input: &PatientInput, config: &EngineConfig) -> Result<Self> {
        let (mut snapshot, import) = BiomarkerSnapshot::from_extracted(&input.biomarkers);
        snapshot.chronological_age = input.patient_age;

        let config = match input.sex {
            Some(sex) => config.clone().with_sex(Some(sex)),
            None => config.clone(),
        };

        let mut report = Self::from_snapshot(
            snapshot,
            &input.activity,
            input.body_composition.clone(),
            &config,
        )?;
        report.patient_id.clone_from(&input.id);
        report.import = import;
        Ok(report)
    }

    /// Build a report from an already assembled snapshot
    pub fn from_snapshot(
        mut snapshot: BiomarkerSnapshot,
        activity: &[ActivitySample],
        body_composition: Option<BodyComposition>,
        config: &EngineConfig,
    ) -> Result<Self> {
        config.validate()?;
        let start = Instant::now();
        log_operation_start("Building health report for", &format!("{} readings", snapshot.len()));

        let derived = compute_derived(&snapshot);
        if config.merge_derived {
            merge_derived(&mut snapshot, &derived);
        }

        let pheno_age = phenoage::estimate_for(&snapshot);
        let missing_pheno_age_inputs = phenoage::missing_inputs(&snapshot);
        let health_score = score_for_sex(&snapshot, pheno_age.as_ref(), activity, config.sex);
        let goals = select_goals_with(
            &snapshot,
            pheno_age.as_ref(),
            body_composition.as_ref(),
            config.sex,
            config.max_goals,
        );
        let top_markers = select_top_markers_with(&snapshot, config.sex, config.max_top_markers);
        let activity_summary = ActivitySummary::from_window(activity, config.activity_window_days);

        log::debug!(
            "Scored health report over {} readings in {:?}",
            snapshot.len(),
            start.elapsed()
        );

        Ok(Self {
            patient_id: None,
            snapshot,
            import: ImportReport::default(),
            derived,
            pheno_age,
            missing_pheno_age_inputs,
            health_score,
            goals,
            top_markers,
            activity: activity_summary,
            body_composition,
            sex: config.sex,
            activity_window_days: config.activity_window_days,
        })
    }

    /// Build reports for many patients in parallel, preserving input order
    pub fn build_many(inputs: &[PatientInput], config: &EngineConfig) -> Result<Vec<Self>> {
        config.validate()?;
        let start = Instant::now();

        let reports = inputs
            .par_iter()
            .map(|input| Self::build(input, config))
            .collect::<Result<Vec<_>>>()?;

        log_operation_complete("built", "patient batch", reports.len(), Some(start.elapsed()));
        Ok(reports)
    }

    /// Plain-text summary of the report
    #[must_use]
    pub fn summary_text(&self) -> String {
        let mut out = String::new();
        if let Err(err) = self.write_summary(&mut out) {
            log::error!("Failed to render health summary: {err}");
        }
        out.truncate(out.trim_end().len());
        out
    }

    fn write_summary(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "=== HEALTH DATA SUMMARY ===")?;
        self.write_age(out)?;
        self.write_biomarkers(out)?;
        self.write_body_composition(out)?;
        self.write_activity(out)
    }

    fn write_age(&self, out: &mut String) -> std::fmt::Result {
        let Some(age) = self.snapshot.chronological_age else {
            return Ok(());
        };
        writeln!(out, "\nChronological Age: {age} years")?;
        if let Some(pheno) = &self.pheno_age {
            let sign = if pheno.delta >= 0.0 { "+" } else { "" };
            writeln!(out, "Biological Age (PhenoAge): {} years", pheno.pheno_age)?;
            writeln!(out, "Delta: {sign}{} years", pheno.delta)?;
        }
        Ok(())
    }

    fn write_biomarkers(&self, out: &mut String) -> std::fmt::Result {
        if self.snapshot.is_empty() {
            return Ok(());
        }
        writeln!(out, "\n--- Biomarkers ---")?;
        for (id, reading) in self.snapshot.readings() {
            let reference = id.reference();
            let status = classify_for_sex(id, reading.value, self.sex);
            let calculated = if reading.source == ValueSource::Calculated {
                ", calculated"
            } else {
                ""
            };
            if reference.unit.is_empty() {
                writeln!(out, "{}: {} ({status}{calculated})", reference.name, reading.value)?;
            } else {
                writeln!(
                    out,
                    "{}: {} {} ({status}{calculated})",
                    reference.name, reading.value, reference.unit
                )?;
            }
        }
        Ok(())
    }

    fn write_body_composition(&self, out: &mut String) -> std::fmt::Result {
        let Some(body) = self.body_composition.as_ref().filter(|b| !b.is_empty()) else {
            return Ok(());
        };
        writeln!(out, "\n--- Body Composition (DEXA Scan) ---")?;

        let lines = [
            ("Body Fat", body.body_fat_percent, "%"),
            ("Lean Mass", body.lean_mass, " lbs"),
            ("Fat Mass", body.fat_mass, " lbs"),
            ("Total Mass", body.total_mass, " lbs"),
            ("Bone Mineral Content", body.bone_mineral_content, " lbs"),
            ("Visceral Fat (VAT)", body.visceral_fat, " lbs"),
            ("ALMI", body.almi, " kg/m²"),
            ("Resting Metabolic Rate", body.resting_metabolic_rate, " cal/day"),
        ];
        for (label, value, suffix) in lines {
            if let Some(value) = value {
                writeln!(out, "{label}: {value}{suffix}")?;
            }
        }
        if let Some(ratio) = body.android_gynoid_ratio {
            writeln!(out, "Android/Gynoid Ratio: {ratio} (target: < 1.0)")?;
        }
        if body.bone_density_t_score.is_some() || body.bone_density_z_score.is_some() {
            writeln!(out, "Bone Density:")?;
            if let Some(t) = body.bone_density_t_score {
                writeln!(out, "  T-Score: {t}")?;
            }
            if let Some(z) = body.bone_density_z_score {
                writeln!(out, "  Z-Score: {z}")?;
            }
        }
        Ok(())
    }

    fn write_activity(&self, out: &mut String) -> std::fmt::Result {
        let Some(summary) = &self.activity else {
            return Ok(());
        };
        writeln!(out, "\n--- Activity ({}-day average) ---", self.activity_window_days)?;
        writeln!(out, "HRV: {:.1} ms", summary.avg_hrv)?;
        writeln!(out, "Resting Heart Rate: {:.1} bpm", summary.avg_rhr)?;
        writeln!(out, "Sleep: {:.1} hours", summary.avg_sleep_hours)?;
        if let Some(recovery) = summary.avg_recovery {
            writeln!(out, "Recovery: {:.0}%", round_half_up(recovery, 0))?;
        }
        if let Some(strain) = summary.avg_strain {
            writeln!(out, "Strain: {strain:.1}")?;
        }
        if let Some(steps) = summary.avg_steps {
            writeln!(out, "Steps: {}", group_thousands(round_half_up(steps, 0) as u64))?;
        }
        Ok(())
    }
}

/// `8432` as `8,432`
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
