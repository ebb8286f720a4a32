//! Configuration for report generation.
//!
//! Score weights and classification thresholds are fixed constants in the
//! algorithm modules. Only the knobs that shape a report live here.

use std::fmt;

use crate::error::{EngineError, Result};
use crate::models::biomarker::Sex;

/// Default number of days averaged for the activity section of the summary
pub const DEFAULT_ACTIVITY_WINDOW_DAYS: usize = 7;

/// Environment variable overriding the activity summary window
pub const ACTIVITY_WINDOW_ENV: &str = "BIOMARKER_ACTIVITY_WINDOW_DAYS";
/// Environment variable overriding the goal limit
pub const MAX_GOALS_ENV: &str = "BIOMARKER_MAX_GOALS";
/// Environment variable overriding the top-marker limit
pub const MAX_TOP_MARKERS_ENV: &str = "BIOMARKER_MAX_TOP_MARKERS";

/// Configuration for building a `HealthReport`
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Number of most recent activity days shown in the text summary
    pub activity_window_days: usize,
    /// Maximum number of goals in a report
    pub max_goals: usize,
    /// Maximum number of top markers in a report
    pub max_top_markers: usize,
    /// Whether derived biomarkers are merged into the snapshot before scoring
    pub merge_derived: bool,
    /// Patient sex, used for sex-specific optimal ranges
    pub sex: Option<Sex>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            activity_window_days: DEFAULT_ACTIVITY_WINDOW_DAYS,
            max_goals: crate::algorithm::goals::MAX_GOALS,
            max_top_markers: crate::algorithm::top_markers::MAX_TOP_MARKERS,
            merge_derived: true,
            sex: None,
        }
    }
}

impl EngineConfig {
    /// Defaults with any environment overrides applied
    ///
    /// Unparseable values are ignored with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(days) = env_usize(ACTIVITY_WINDOW_ENV) {
            config.activity_window_days = days;
        }
        if let Some(limit) = env_usize(MAX_GOALS_ENV) {
            config.max_goals = limit;
        }
        if let Some(limit) = env_usize(MAX_TOP_MARKERS_ENV) {
            config.max_top_markers = limit;
        }
        config
    }

    #[must_use]
    pub const fn with_activity_window_days(mut self, days: usize) -> Self {
        self.activity_window_days = days;
        self
    }

    #[must_use]
    pub const fn with_max_goals(mut self, limit: usize) -> Self {
        self.max_goals = limit;
        self
    }

    #[must_use]
    pub const fn with_max_top_markers(mut self, limit: usize) -> Self {
        self.max_top_markers = limit;
        self
    }

    #[must_use]
    pub const fn with_merge_derived(mut self, merge: bool) -> Self {
        self.merge_derived = merge;
        self
    }

    #[must_use]
    pub const fn with_sex(mut self, sex: Option<Sex>) -> Self {
        self.sex = sex;
        self
    }

    /// Check that every limit is usable
    pub fn validate(&self) -> Result<()> {
        if self.activity_window_days == 0 {
            return Err(EngineError::InvalidConfig(
                "activity_window_days must be > 0".to_string(),
            ));
        }
        if self.max_goals == 0 {
            return Err(EngineError::InvalidConfig("max_goals must be > 0".to_string()));
        }
        if self.max_top_markers == 0 {
            return Err(EngineError::InvalidConfig(
                "max_top_markers must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Engine Configuration:")?;
        writeln!(f, "  Activity Window: {} days", self.activity_window_days)?;
        writeln!(f, "  Max Goals: {}", self.max_goals)?;
        writeln!(f, "  Max Top Markers: {}", self.max_top_markers)?;
        writeln!(f, "  Merge Derived: {}", self.merge_derived)?;
        if let Some(sex) = self.sex {
            writeln!(f, "  Sex: {sex:?}")?;
        }
        Ok(())
    }
}

/// Read a non-negative integer from the environment
fn env_usize(name: &str) -> Option<usize> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<usize>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring {name}={raw}: not a non-negative integer");
            None
        }
    }
}
