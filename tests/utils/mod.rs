use biomarker_engine::{ActivitySample, BiomarkerId, BiomarkerSnapshot};
use chrono::NaiveDate;

/// The nine PhenoAge inputs in SI-style units, for a healthy 40-year-old
#[must_use]
pub fn pheno_age_panel() -> Vec<(BiomarkerId, f64)> {
    vec![
        (BiomarkerId::Albumin, 45.0),
        (BiomarkerId::Creatinine, 80.0),
        (BiomarkerId::Glucose, 4.7),
        (BiomarkerId::Crp, 0.05),
        (BiomarkerId::LymphocytePercent, 30.0),
        (BiomarkerId::Mcv, 88.0),
        (BiomarkerId::Rdw, 12.5),
        (BiomarkerId::AlkalinePhosphatase, 60.0),
        (BiomarkerId::Wbc, 5.5),
    ]
}

/// Snapshot holding only the PhenoAge panel
#[must_use]
pub fn pheno_age_snapshot() -> BiomarkerSnapshot {
    BiomarkerSnapshot::from_values(pheno_age_panel())
}

/// The same panel in US conventional units
#[must_use]
pub fn conventional_panel() -> Vec<(BiomarkerId, f64)> {
    vec![
        (BiomarkerId::Albumin, 4.5),
        (BiomarkerId::Creatinine, 0.9),
        (BiomarkerId::Glucose, 85.0),
        (BiomarkerId::Crp, 0.5),
        (BiomarkerId::LymphocytePercent, 30.0),
        (BiomarkerId::Mcv, 88.0),
        (BiomarkerId::Rdw, 12.5),
        (BiomarkerId::AlkalinePhosphatase, 60.0),
        (BiomarkerId::Wbc, 5.5),
    ]
}

/// Calendar day in March 2024
#[must_use]
pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).expect("valid test date")
}

/// `n` identical consecutive days of activity
#[must_use]
pub fn activity_days(n: u32, hrv: f64, rhr: f64, sleep_hours: f64) -> Vec<ActivitySample> {
    (1..=n)
        .map(|d| ActivitySample::new(day(d), hrv, rhr, sleep_hours))
        .collect()
}
