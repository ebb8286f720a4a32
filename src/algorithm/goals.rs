//! Goal recommendations
//!
//! Goals come from three sources:
//!
//! - biomarker templates, which fire when their biomarker classifies as
//!   borderline or out of range (out of range gets the higher priority)
//! - a biological-age goal, when PhenoAge runs more than two years ahead
//! - a body-composition goal, when body fat is above 25 %
//!
//! The list is ordered by priority (stable within a priority) and truncated.

use std::fmt;

use serde::Serialize;

use crate::algorithm::classify::{BiomarkerStatus, classify_for_sex};
use crate::algorithm::phenoage::PhenoAgeResult;
use crate::models::biomarker::{BiomarkerId, Sex};
use crate::models::body_composition::BodyComposition;
use crate::models::snapshot::BiomarkerSnapshot;

/// Default number of goals returned
pub const MAX_GOALS: usize = 7;

/// PhenoAge delta (years) above which the biological-age goal fires
const BIO_AGE_DELTA_THRESHOLD: f64 = 2.0;
/// PhenoAge delta (years) above which the biological-age goal is high priority
const BIO_AGE_HIGH_PRIORITY_DELTA: f64 = 5.0;
/// Body fat (%) above which the body-composition goal fires
const BODY_FAT_THRESHOLD: f64 = 25.0;
/// Body fat (%) above which the body-composition goal is high priority
const BODY_FAT_HIGH_PRIORITY: f64 = 30.0;

/// Goal urgency; sorts `High` first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPriority {
    High,
    Medium,
    Low,
}

impl GoalPriority {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for GoalPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An actionable recommendation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Stable id, `goal-<key>`
    pub id: String,
    pub title: &'static str,
    pub description: String,
    pub priority: GoalPriority,
    /// Health area, e.g. "Cardiovascular"
    pub category: &'static str,
    pub action_items: &'static [&'static str],
    /// Biomarker the goal is about, for template goals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biomarker: Option<BiomarkerId>,
    /// Current value of that biomarker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<f64>,
    /// Optimal range with unit, e.g. "≤70 mg/dL"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_value: Option<String>,
}

/// A biomarker-driven goal definition
#[derive(Debug, Clone, Copy)]
pub struct GoalTemplate {
    pub biomarker: BiomarkerId,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub action_items: &'static [&'static str],
    pub priority_if_out_of_range: GoalPriority,
    pub priority_if_borderline: GoalPriority,
}

impl GoalTemplate {
    /// Priority for a status, or `None` if the status needs no goal
    #[must_use]
    pub const fn priority_for(&self, status: BiomarkerStatus) -> Option<GoalPriority> {
        match status {
            BiomarkerStatus::OutOfRange => Some(self.priority_if_out_of_range),
            BiomarkerStatus::Borderline => Some(self.priority_if_borderline),
            BiomarkerStatus::Optimal | BiomarkerStatus::Normal => None,
        }
    }
}

/// Biomarker goal templates, in evaluation order
pub static GOAL_TEMPLATES: &[GoalTemplate] = &[
    GoalTemplate {
        biomarker: BiomarkerId::Ldl,
        title: "Lower artery-clogging cholesterol",
        description: "High LDL cholesterol increases risk of heart disease. Focus on diet and lifestyle changes.",
        category: "Cardiovascular",
        action_items: &[
            "Reduce saturated fat intake (red meat, full-fat dairy)",
            "Increase soluble fiber (oats, beans, fruits)",
            "Add plant sterols to diet",
            "Exercise 150+ min/week of moderate cardio",
            "Consider fish oil supplements",
        ],
        priority_if_out_of_range: GoalPriority::High,
        priority_if_borderline: GoalPriority::Medium,
    },
    GoalTemplate {
        biomarker: BiomarkerId::Glucose,
        title: "Optimize blood sugar control",
        description: "Elevated fasting glucose can indicate insulin resistance. Address through diet and exercise.",
        category: "Metabolic",
        action_items: &[
            "Reduce refined carbs and sugars",
            "Eat more protein and healthy fats",
            "Walk after meals to lower glucose spikes",
            "Strength training 2-3x/week",
            "Consider berberine or metformin (consult doctor)",
        ],
        priority_if_out_of_range: GoalPriority::High,
        priority_if_borderline: GoalPriority::Medium,
    },
    GoalTemplate {
        biomarker: BiomarkerId::Crp,
        title: "Reduce systemic inflammation",
        description: "Elevated CRP indicates chronic inflammation, linked to many diseases.",
        category: "Inflammation",
        action_items: &[
            "Eliminate processed foods and seed oils",
            "Eat fatty fish 2-3x/week",
            "Add turmeric/curcumin to diet",
            "Prioritize quality sleep (7-8 hours)",
            "Manage stress with meditation or exercise",
        ],
        priority_if_out_of_range: GoalPriority::High,
        priority_if_borderline: GoalPriority::Medium,
    },
    GoalTemplate {
        biomarker: BiomarkerId::Hdl,
        title: "Boost protective HDL cholesterol",
        description: "Low HDL reduces your body's ability to clear LDL from arteries.",
        category: "Cardiovascular",
        action_items: &[
            "Increase aerobic exercise intensity",
            "Add healthy fats (olive oil, avocado, nuts)",
            "Moderate alcohol may help (1 drink/day)",
            "Quit smoking if applicable",
            "Consider niacin supplements (consult doctor)",
        ],
        priority_if_out_of_range: GoalPriority::High,
        priority_if_borderline: GoalPriority::Low,
    },
    GoalTemplate {
        biomarker: BiomarkerId::Triglycerides,
        title: "Lower triglyceride levels",
        description: "High triglycerides increase cardiovascular risk and often indicate metabolic issues.",
        category: "Cardiovascular",
        action_items: &[
            "Cut sugar and refined carbs drastically",
            "Limit alcohol consumption",
            "Eat fatty fish or take omega-3s",
            "Lose excess body fat",
            "Exercise regularly",
        ],
        priority_if_out_of_range: GoalPriority::High,
        priority_if_borderline: GoalPriority::Medium,
    },
    GoalTemplate {
        biomarker: BiomarkerId::VitaminD,
        title: "Optimize vitamin D levels",
        description: "Low vitamin D affects bone health, immune function, and mood.",
        category: "Vitamins",
        action_items: &[
            "Get 15-20 min of midday sun exposure",
            "Supplement with D3 (2000-5000 IU/day)",
            "Take with fat for better absorption",
            "Eat vitamin D rich foods (fatty fish, eggs)",
            "Retest in 3 months",
        ],
        priority_if_out_of_range: GoalPriority::Medium,
        priority_if_borderline: GoalPriority::Low,
    },
    GoalTemplate {
        biomarker: BiomarkerId::Hba1c,
        title: "Improve long-term blood sugar",
        description: "Elevated HbA1c shows average blood sugar over 3 months. Indicates diabetes risk.",
        category: "Metabolic",
        action_items: &[
            "Adopt low-carb or Mediterranean diet",
            "Time-restricted eating (16:8 fasting)",
            "Regular exercise, especially after meals",
            "Monitor blood glucose regularly",
            "Work with doctor on medication if needed",
        ],
        priority_if_out_of_range: GoalPriority::High,
        priority_if_borderline: GoalPriority::Medium,
    },
    GoalTemplate {
        biomarker: BiomarkerId::Homocysteine,
        title: "Lower homocysteine levels",
        description: "High homocysteine is linked to cardiovascular disease and cognitive decline.",
        category: "Cardiovascular",
        action_items: &[
            "Supplement with B12, B6, and folate",
            "Eat leafy greens and legumes",
            "Reduce red meat consumption",
            "Consider methylated B vitamins",
            "Check for MTHFR gene variants",
        ],
        priority_if_out_of_range: GoalPriority::Medium,
        priority_if_borderline: GoalPriority::Low,
    },
    GoalTemplate {
        biomarker: BiomarkerId::Ferritin,
        title: "Optimize iron stores",
        description: "Ferritin out of range can indicate iron deficiency or overload.",
        category: "Blood",
        action_items: &[
            "If low: eat iron-rich foods with vitamin C",
            "If high: donate blood regularly",
            "Avoid excessive red meat and supplements",
            "Get full iron panel tested",
            "Rule out underlying conditions",
        ],
        priority_if_out_of_range: GoalPriority::Medium,
        priority_if_borderline: GoalPriority::Low,
    },
    GoalTemplate {
        biomarker: BiomarkerId::Tsh,
        title: "Optimize thyroid function",
        description: "TSH out of range indicates thyroid issues affecting metabolism and energy.",
        category: "Hormones",
        action_items: &[
            "Get full thyroid panel (T3, T4, antibodies)",
            "Check iodine and selenium intake",
            "Manage stress levels",
            "Consider thyroid medication if needed",
            "Monitor symptoms: fatigue, weight, temperature",
        ],
        priority_if_out_of_range: GoalPriority::High,
        priority_if_borderline: GoalPriority::Medium,
    },
];

const BIO_AGE_ACTIONS: &[&str] = &[
    "Focus on reducing inflammation (CRP)",
    "Optimize metabolic markers (glucose, HbA1c)",
    "Improve kidney function (creatinine)",
    "Boost immune markers (lymphocytes, WBC)",
    "Consider rapamycin protocol (consult longevity physician)",
];

const BODY_FAT_ACTIONS: &[&str] = &[
    "Create modest caloric deficit (300-500 cal/day)",
    "Strength train 3x/week to preserve muscle",
    "High protein intake (1g/lb lean body mass)",
    "Walk 8,000-10,000 steps daily",
    "Track progress with DEXA scans quarterly",
];

/// Goal for one template, if the snapshot's value calls for it
#[must_use]
pub fn template_goal(
    template: &GoalTemplate,
    snapshot: &BiomarkerSnapshot,
    sex: Option<Sex>,
) -> Option<Goal> {
    let value = snapshot.get(template.biomarker)?;
    let priority = template.priority_for(classify_for_sex(template.biomarker, value, sex))?;

    let reference = template.biomarker.reference();
    let target_value = reference
        .optimal_for(sex)
        .and_then(|range| range.label())
        .map(|label| format!("{label} {}", reference.unit));

    Some(Goal {
        id: format!("goal-{}", template.biomarker),
        title: template.title,
        description: template.description.to_string(),
        priority,
        category: template.category,
        action_items: template.action_items,
        biomarker: Some(template.biomarker),
        current_value: Some(value),
        target_value,
    })
}

/// Biological-age goal, if PhenoAge runs more than two years ahead
#[must_use]
pub fn bio_age_goal(pheno_age: &PhenoAgeResult) -> Option<Goal> {
    if pheno_age.delta <= BIO_AGE_DELTA_THRESHOLD || pheno_age.delta.is_nan() {
        return None;
    }

    Some(Goal {
        id: "goal-bioage".to_string(),
        title: "Reverse biological aging",
        description: format!(
            "Your biological age is {:.1} years older than your chronological age. \
             Focus on the key biomarkers that drive PhenoAge.",
            pheno_age.delta
        ),
        priority: if pheno_age.delta > BIO_AGE_HIGH_PRIORITY_DELTA {
            GoalPriority::High
        } else {
            GoalPriority::Medium
        },
        category: "Longevity",
        action_items: BIO_AGE_ACTIONS,
        biomarker: None,
        current_value: None,
        target_value: None,
    })
}

/// Body-composition goal, if body fat is above 25 %
#[must_use]
pub fn body_fat_goal(body_composition: &BodyComposition) -> Option<Goal> {
    let body_fat = body_composition
        .body_fat_percent
        .filter(|percent| *percent > BODY_FAT_THRESHOLD)?;

    Some(Goal {
        id: "goal-bodyfat".to_string(),
        title: "Optimize body composition",
        description: format!(
            "Current body fat is {body_fat}%. Reducing to 15-20% improves metabolic health significantly."
        ),
        priority: if body_fat > BODY_FAT_HIGH_PRIORITY {
            GoalPriority::High
        } else {
            GoalPriority::Medium
        },
        category: "Body Composition",
        action_items: BODY_FAT_ACTIONS,
        biomarker: None,
        current_value: Some(body_fat),
        target_value: Some("15-20%".to_string()),
    })
}

/// Select up to [`MAX_GOALS`] goals with generic optimal ranges
#[must_use]
pub fn select_goals(
    snapshot: &BiomarkerSnapshot,
    pheno_age: Option<&PhenoAgeResult>,
    body_composition: Option<&BodyComposition>,
) -> Vec<Goal> {
    select_goals_with(snapshot, pheno_age, body_composition, None, MAX_GOALS)
}

/// Select up to `limit` goals, classifying with sex-specific ranges if known
#[must_use]
pub fn select_goals_with(
    snapshot: &BiomarkerSnapshot,
    pheno_age: Option<&PhenoAgeResult>,
    body_composition: Option<&BodyComposition>,
    sex: Option<Sex>,
    limit: usize,
) -> Vec<Goal> {
    let mut goals: Vec<Goal> = GOAL_TEMPLATES
        .iter()
        .filter_map(|template| template_goal(template, snapshot, sex))
        .collect();

    goals.extend(pheno_age.and_then(bio_age_goal));
    goals.extend(body_composition.and_then(body_fat_goal));

    goals.sort_by_key(|goal| goal.priority);
    if goals.len() > limit {
        log::debug!("Dropping {} lower-priority goals", goals.len() - limit);
        goals.truncate(limit);
    }
    goals
}
