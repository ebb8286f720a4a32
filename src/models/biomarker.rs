//! Biomarker identity and reference model
//!
//! This module defines the closed set of biomarker identifiers known to the
//! engine, together with the reference-range types the catalog is built from.
//! Identifiers serialize as their canonical camelCase key (e.g. `"totalCholesterol"`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EngineError;

/// Generate the `BiomarkerId` enum and its key mapping from a list of
/// `Variant => "key"` pairs.
macro_rules! biomarker_ids {
    ($($variant:ident => $key:literal),* $(,)?) => {
        /// Canonical identifier of a biomarker known to the reference catalog
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum BiomarkerId {
            $($variant,)*
        }

        impl BiomarkerId {
            /// Every identifier, in catalog order
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// The canonical key used in lab snapshots and serialized output
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)*
                }
            }

            /// Exact, case-sensitive match on the canonical key
            #[must_use]
            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $($key => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

biomarker_ids! {
    TotalCholesterol => "totalCholesterol",
    Ldl => "ldl",
    Hdl => "hdl",
    Triglycerides => "triglycerides",
    ApoB => "apoB",
    Lpa => "lpa",
    LdlP => "ldlP",
    SdLdl => "sdLDL",
    Vldl => "vldl",
    NonHdlC => "nonHdlC",
    OxidizedLdl => "oxidizedLDL",
    TcHdlRatio => "tcHdlRatio",
    LdlHdlRatio => "ldlHdlRatio",
    TgHdlRatio => "tgHdlRatio",
    AtherogenicIndex => "atherogenicIndex",
    RemnantCholesterol => "remnantCholesterol",
    AtherogenicCoeff => "atherogenicCoeff",
    LdlApoBRatio => "ldlApoBRatio",
    NonHdlApoBRatio => "nonHdlApoBRatio",
    TgApoBRatio => "tgApoBRatio",
    LdlTcRatio => "ldlTcRatio",
    NonHdlTcRatio => "nonHdlTcRatio",
    Glucose => "glucose",
    Hba1c => "hba1c",
    FastingInsulin => "fastingInsulin",
    CPeptide => "cPeptide",
    Fructosamine => "fructosamine",
    HomaIr => "homaIr",
    Quicki => "quicki",
    TygIndex => "tygIndex",
    Ast => "ast",
    Alt => "alt",
    Ggt => "ggt",
    AlkalinePhosphatase => "alkalinePhosphatase",
    TotalBilirubin => "totalBilirubin",
    Albumin => "albumin",
    AgRatio => "agRatio",
    DeRitisRatio => "deRitisRatio",
    BilirubinAlbuminRatio => "bilirubinAlbuminRatio",
    IndirectDirectBilirubin => "indirectDirectBilirubin",
    Creatinine => "creatinine",
    Bun => "bun",
    Egfr => "egfr",
    CystatinC => "cystatinC",
    BunCreatinineRatio => "bunCreatinineRatio",
    UricAcid => "uricAcid",
    Rbc => "rbc",
    Wbc => "wbc",
    Hemoglobin => "hemoglobin",
    Hematocrit => "hematocrit",
    Mcv => "mcv",
    Rdw => "rdw",
    Platelets => "platelets",
    Mpv => "mpv",
    Ferritin => "ferritin",
    SerumIron => "serumIron",
    Tibc => "tibc",
    IronSaturation => "ironSaturation",
    Transferrin => "transferrin",
    Nlr => "nlr",
    Plr => "plr",
    Mlr => "mlr",
    Sii => "sii",
    Siri => "siri",
    Lmr => "lmr",
    Pwr => "pwr",
    Mhr => "mhr",
    Nhr => "nhr",
    GgtHdlRatio => "ggtHdlRatio",
    Car => "car",
    FerritinAlbuminRatio => "ferritinAlbuminRatio",
    RdwMcvRatio => "rdwMcvRatio",
    Nlpr => "nlpr",
    UricAcidHdlRatio => "uricAcidHdlRatio",
    TestosteroneEstradiolRatio => "testosteroneEstradiolRatio",
    Tsh => "tsh",
    FreeT4 => "freeT4",
    FreeT3 => "freeT3",
    ReverseT3 => "reverseT3",
    TpoAntibodies => "tpoAntibodies",
    TgAb => "tgAb",
    Ft3Rt3Ratio => "ft3Rt3Ratio",
    T3Uptake => "t3Uptake",
    TotalT4 => "totalT4",
    FreeT4Index => "freeT4Index",
    BioavailableTestosterone => "bioavailableTestosterone",
    EagMgDl => "eagMgDl",
    EagMmolL => "eagMmolL",
    DirectBilirubin => "directBilirubin",
    IndirectBilirubin => "indirectBilirubin",
    Crp => "crp",
    Esr => "esr",
    Homocysteine => "homocysteine",
    Fibrinogen => "fibrinogen",
    Il6 => "il6",
    TnfAlpha => "tnfAlpha",
    VitaminD => "vitaminD",
    VitaminB12 => "vitaminB12",
    Folate => "folate",
    Mma => "mma",
    VitaminB6 => "vitaminB6",
    MagnesiumRbc => "magnesiumRbc",
    MagnesiumSerum => "magnesiumSerum",
    Zinc => "zinc",
    Selenium => "selenium",
    Copper => "copper",
    CopperZincRatio => "copperZincRatio",
    Omega3Index => "omega3Index",
    Omega6Omega3Ratio => "omega6Omega3Ratio",
    TotalTestosterone => "totalTestosterone",
    FreeTestosterone => "freeTestosterone",
    Shbg => "shbg",
    EstradiolMale => "estradiolMale",
    Dheas => "dheas",
    CortisolAm => "cortisolAm",
    Igf1 => "igf1",
    Prolactin => "prolactin",
    Lh => "lh",
    Fsh => "fsh",
    FreeAndrogenIndex => "freeAndrogenIndex",
    EstradiolFollicular => "estradiolFollicular",
    ProgesteroneLuteal => "progesteroneLuteal",
    Amh => "amh",
    LpPla2 => "lpPla2",
    Mpo => "mpo",
    Tmao => "tmao",
    NtProBnp => "ntProBnp",
    GlycA => "glycA",
    Neutrophils => "neutrophils",
    Lymphocytes => "lymphocytes",
    Monocytes => "monocytes",
    LymphocytePercent => "lymphocytePercent",
    NeutrophilPercent => "neutrophilPercent",
    MonocytePercent => "monocytePercent",
    Eosinophils => "eosinophils",
    Basophils => "basophils",
    Mch => "mch",
    Mchc => "mchc",
    Sodium => "sodium",
    Potassium => "potassium",
    Chloride => "chloride",
    Co2 => "co2",
    Calcium => "calcium",
    CorrectedCalcium => "correctedCalcium",
    TotalProtein => "totalProtein",
    Globulin => "globulin",
    Estradiol => "estradiol",
}

impl fmt::Display for BiomarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BiomarkerId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| EngineError::UnknownBiomarker(s.to_string()))
    }
}

impl Serialize for BiomarkerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BiomarkerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Self::from_key(&key)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown biomarker id '{key}'")))
    }
}

/// Panel a biomarker belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BiomarkerCategory {
    /// Lipid panel
    Lipids,
    /// Ratios calculated from the lipid panel
    LipidRatios,
    /// Glucose, electrolytes and related chemistry
    Metabolic,
    /// Insulin-sensitivity indices
    InsulinCalcs,
    /// Liver function
    Liver,
    /// Kidney function
    Kidney,
    /// Complete blood count
    Cbc,
    /// Iron panel
    Iron,
    /// Inflammation ratios derived from the blood count
    CbcRatios,
    /// Thyroid panel
    Thyroid,
    /// Inflammation markers
    Inflammation,
    /// Vitamins
    Vitamins,
    /// Minerals and fatty acids
    Minerals,
    /// Male hormone panel
    MaleHormones,
    /// Female hormone panel
    FemaleHormones,
    /// Advanced cardiovascular markers
    Cardiovascular,
}

impl BiomarkerCategory {
    /// Get the display name for this category
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Lipids => "Lipid Panel",
            Self::LipidRatios => "Lipid Ratios",
            Self::Metabolic => "Metabolic Panel",
            Self::InsulinCalcs => "Insulin Calculations",
            Self::Liver => "Liver Function",
            Self::Kidney => "Kidney Function",
            Self::Cbc => "Complete Blood Count",
            Self::Iron => "Iron Panel",
            Self::CbcRatios => "CBC Inflammation Ratios",
            Self::Thyroid => "Thyroid Panel",
            Self::Inflammation => "Inflammation Markers",
            Self::Vitamins => "Vitamins",
            Self::Minerals => "Minerals & Fatty Acids",
            Self::MaleHormones => "Male Hormones",
            Self::FemaleHormones => "Female Hormones",
            Self::Cardiovascular => "Advanced Cardiovascular",
        }
    }

    /// Get all categories
    #[must_use]
    pub fn all_categories() -> Vec<Self> {
        vec![
            Self::Lipids,
            Self::LipidRatios,
            Self::Metabolic,
            Self::InsulinCalcs,
            Self::Liver,
            Self::Kidney,
            Self::Cbc,
            Self::Iron,
            Self::CbcRatios,
            Self::Thyroid,
            Self::Inflammation,
            Self::Vitamins,
            Self::Minerals,
            Self::MaleHormones,
            Self::FemaleHormones,
            Self::Cardiovascular,
        ]
    }
}

impl fmt::Display for BiomarkerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Which side of a range is favorable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Lower values are better
    Lower,
    /// Higher values are better
    Higher,
    /// Values near the middle of the range are better
    MidRange,
    /// Interpretation depends on clinical context
    Context,
}

/// Biological sex, used to pick sex-specific optimal ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male reference ranges
    Male,
    /// Female reference ranges
    Female,
}

/// Inclusive numeric range; an absent bound is unbounded on that side
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Range {
    /// Lower bound (inclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Upper bound (inclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Range {
    /// Range with no bounds at all
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
    };

    /// Range bounded on both sides
    #[must_use]
    pub const fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Range bounded from below only
    #[must_use]
    pub const fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Range bounded from above only
    #[must_use]
    pub const fn at_most(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Whether `value` lies inside the range, bounds included
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        if self.min.is_some_and(|min| value < min) {
            return false;
        }
        if self.max.is_some_and(|max| value > max) {
            return false;
        }
        true
    }

    /// Human-readable label such as `"60-100"`, `"≤70"` or `"≥40"`
    #[must_use]
    pub fn label(&self) -> Option<String> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => Some(format!("{min}-{max}")),
            (Some(min), None) => Some(format!("≥{min}")),
            (None, Some(max)) => Some(format!("≤{max}")),
            (None, None) => None,
        }
    }
}

/// One entry of the reference catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BiomarkerReference {
    /// Canonical identifier
    pub id: BiomarkerId,
    /// Display name
    pub name: &'static str,
    /// Panel the biomarker belongs to
    pub category: BiomarkerCategory,
    /// Unit of measurement
    pub unit: &'static str,
    /// Conventional laboratory reference range
    pub standard_range: Option<Range>,
    /// Longevity-oriented optimal range
    pub optimal_range: Option<Range>,
    /// Which side of the range is favorable
    pub direction: Direction,
    /// Whether the value is normally derived from other biomarkers
    pub is_calculated: bool,
    /// Human-readable formula; a display label only, never evaluated
    pub formula: Option<&'static str>,
    /// Optimal range for men, where it differs by sex
    pub male_optimal: Option<Range>,
    /// Optimal range for women, where it differs by sex
    pub female_optimal: Option<Range>,
}

impl BiomarkerReference {
    /// Start a reference entry with no ranges
    #[must_use]
    pub const fn new(
        id: BiomarkerId,
        name: &'static str,
        category: BiomarkerCategory,
        unit: &'static str,
        direction: Direction,
    ) -> Self {
        Self {
            id,
            name,
            category,
            unit,
            standard_range: None,
            optimal_range: None,
            direction,
            is_calculated: false,
            formula: None,
            male_optimal: None,
            female_optimal: None,
        }
    }

    /// Set the standard laboratory range
    #[must_use]
    pub const fn standard(mut self, range: Range) -> Self {
        self.standard_range = Some(range);
        self
    }

    /// Set the optimal range
    #[must_use]
    pub const fn optimal(mut self, range: Range) -> Self {
        self.optimal_range = Some(range);
        self
    }

    /// Set the sex-specific optimal ranges
    #[must_use]
    pub const fn sex_specific(mut self, male: Range, female: Range) -> Self {
        self.male_optimal = Some(male);
        self.female_optimal = Some(female);
        self
    }

    /// Mark the entry as calculated, with its display formula
    #[must_use]
    pub const fn calculated(mut self, formula: &'static str) -> Self {
        self.is_calculated = true;
        self.formula = Some(formula);
        self
    }

    /// Optimal range for the given sex, falling back to the generic range
    #[must_use]
    pub fn optimal_for(&self, sex: Option<Sex>) -> Option<Range> {
        let specific = match sex {
            Some(Sex::Male) => self.male_optimal,
            Some(Sex::Female) => self.female_optimal,
            None => None,
        };
        specific.or(self.optimal_range)
    }
}
