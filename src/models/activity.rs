//! Wearable activity samples
//!
//! One [`ActivitySample`] is one day from a fitness tracker. The engine never
//! looks at individual days: it consumes averages over a window, produced by
//! [`ActivitySummary`].

use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::utils::math::mean;

/// A single day of wearable-tracker data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySample {
    /// Calendar day the sample covers
    pub date: NaiveDate,
    /// Heart rate variability (ms)
    pub hrv: f64,
    /// Resting heart rate (bpm)
    pub rhr: f64,
    /// Total sleep (hours)
    pub sleep_hours: f64,
    /// Tracker sleep score (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_score: Option<f64>,
    /// Tracker sleep consistency (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_consistency: Option<f64>,
    /// Day strain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strain: Option<f64>,
    /// Recovery (%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery: Option<f64>,
    /// Step count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
}

impl ActivitySample {
    /// Create a sample with the three metrics the health score uses
    #[must_use]
    pub const fn new(date: NaiveDate, hrv: f64, rhr: f64, sleep_hours: f64) -> Self {
        Self {
            date,
            hrv,
            rhr,
            sleep_hours,
            sleep_score: None,
            sleep_consistency: None,
            strain: None,
            recovery: None,
            steps: None,
        }
    }
}

/// Averages over a set of activity samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    /// Number of samples averaged
    pub days: usize,
    /// Mean HRV (ms)
    pub avg_hrv: f64,
    /// Mean resting heart rate (bpm)
    pub avg_rhr: f64,
    /// Mean sleep (hours)
    pub avg_sleep_hours: f64,
    /// Mean recovery over the samples that report it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_recovery: Option<f64>,
    /// Mean strain over the samples that report it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_strain: Option<f64>,
    /// Mean steps over the samples that report it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_steps: Option<f64>,
}

impl ActivitySummary {
    /// Average every sample; `None` when there are none
    #[must_use]
    pub fn from_samples(samples: &[ActivitySample]) -> Option<Self> {
        Self::summarize(samples.iter())
    }

    /// Average the most recent `days` samples by date
    ///
    /// A window of zero days covers no samples and yields `None`.
    #[must_use]
    pub fn from_window(samples: &[ActivitySample], days: usize) -> Option<Self> {
        let recent = samples
            .iter()
            .sorted_by_key(|sample| sample.date)
            .rev()
            .take(days)
            .collect_vec();
        Self::summarize(recent.into_iter())
    }

    fn summarize<'a, I>(samples: I) -> Option<Self>
    where
        I: Iterator<Item = &'a ActivitySample> + Clone,
    {
        let days = samples.clone().count();
        if days == 0 {
            return None;
        }

        Some(Self {
            days,
            avg_hrv: mean(samples.clone().map(|s| s.hrv))?,
            avg_rhr: mean(samples.clone().map(|s| s.rhr))?,
            avg_sleep_hours: mean(samples.clone().map(|s| s.sleep_hours))?,
            avg_recovery: mean(samples.clone().filter_map(|s| s.recovery)),
            avg_strain: mean(samples.clone().filter_map(|s| s.strain)),
            avg_steps: mean(samples.filter_map(|s| s.steps.map(f64::from))),
        })
    }
}
