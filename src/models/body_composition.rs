//! Body composition (DEXA scan) model

use serde::{Deserialize, Serialize};

/// Results of a body-composition scan; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BodyComposition {
    /// Body fat (%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
    /// Lean mass (lbs)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lean_mass: Option<f64>,
    /// Fat mass (lbs)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_mass: Option<f64>,
    /// Total mass (lbs)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_mass: Option<f64>,
    /// Bone mineral content (lbs)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bone_mineral_content: Option<f64>,
    /// Visceral adipose tissue (lbs)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visceral_fat: Option<f64>,
    /// Android/gynoid fat ratio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_gynoid_ratio: Option<f64>,
    /// Resting metabolic rate (cal/day)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resting_metabolic_rate: Option<f64>,
    /// Bone density T-score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bone_density_t_score: Option<f64>,
    /// Bone density Z-score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bone_density_z_score: Option<f64>,
    /// Appendicular lean mass index (kg/m²)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub almi: Option<f64>,
}

impl BodyComposition {
    /// Scan with only a body-fat reading
    #[must_use]
    pub fn with_body_fat(percent: f64) -> Self {
        Self {
            body_fat_percent: Some(percent),
            ..Self::default()
        }
    }

    /// Whether no field is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
