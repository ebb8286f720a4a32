//! Executable derived-biomarker formulas
//!
//! Every formula is a plain function over [`FormulaInputs`]. The display label
//! beside it is for humans only; nothing parses it.

use crate::models::biomarker::BiomarkerId as Id;
use crate::models::snapshot::BiomarkerSnapshot;

/// mg/dL → mmol/L divisor for triglycerides
const TG_MG_PER_MMOL: f64 = 88.57;
/// mg/dL → mmol/L divisor for HDL cholesterol
const HDL_MG_PER_MMOL: f64 = 38.67;
/// ng/dL → nmol/L divisor for total testosterone
const TESTOSTERONE_NG_PER_NMOL: f64 = 28.84;

/// Read access to a snapshot for formula evaluation
///
/// A value counts as present only if it is finite and non-zero. Absolute
/// neutrophil, lymphocyte and monocyte counts fall back to `percent / 100 × WBC`
/// when the absolute count was not reported.
#[derive(Debug, Clone, Copy)]
pub struct FormulaInputs<'a> {
    snapshot: &'a BiomarkerSnapshot,
    neutrophils: Option<f64>,
    lymphocytes: Option<f64>,
    monocytes: Option<f64>,
}

impl<'a> FormulaInputs<'a> {
    /// Prepare inputs for a snapshot
    #[must_use]
    pub fn new(snapshot: &'a BiomarkerSnapshot) -> Self {
        Self {
            snapshot,
            neutrophils: absolute_count(snapshot, Id::Neutrophils, Id::NeutrophilPercent),
            lymphocytes: absolute_count(snapshot, Id::Lymphocytes, Id::LymphocytePercent),
            monocytes: absolute_count(snapshot, Id::Monocytes, Id::MonocytePercent),
        }
    }

    /// Present value for an id
    #[must_use]
    pub fn get(&self, id: Id) -> Option<f64> {
        let value = match id {
            Id::Neutrophils => self.neutrophils,
            Id::Lymphocytes => self.lymphocytes,
            Id::Monocytes => self.monocytes,
            _ => self.snapshot.get(id),
        };
        value.filter(|v| is_present(*v))
    }

    /// Present and strictly positive value for an id
    #[must_use]
    pub fn positive(&self, id: Id) -> Option<f64> {
        self.get(id).filter(|v| *v > 0.0)
    }

    /// `numerator / denominator` with a positive denominator
    fn ratio(&self, numerator: Id, denominator: Id) -> Option<f64> {
        Some(self.get(numerator)? / self.positive(denominator)?)
    }
}

fn is_present(value: f64) -> bool {
    value.is_finite() && value != 0.0
}

/// A reported absolute count wins, even when it is zero
fn absolute_count(snapshot: &BiomarkerSnapshot, absolute: Id, percent: Id) -> Option<f64> {
    if let Some(count) = snapshot.get(absolute) {
        return Some(count);
    }
    let percent = snapshot.get(percent).filter(|v| is_present(*v))?;
    let wbc = snapshot.get(Id::Wbc).filter(|v| is_present(*v))?;
    Some(percent / 100.0 * wbc)
}

/// One derived biomarker
#[derive(Debug, Clone, Copy)]
pub struct Formula {
    /// Id of the derived biomarker
    pub id: Id,
    /// Human-readable formula
    pub label: &'static str,
    /// Ids the formula reads
    pub inputs: &'static [Id],
    /// Decimal places of the rounded result
    pub decimals: u32,
    /// Evaluation; `None` when an input is missing
    pub compute: fn(&FormulaInputs<'_>) -> Option<f64>,
}

/// Every formula the engine evaluates, grouped by panel
pub static FORMULAS: &[Formula] = &[
    // Lipid ratios
    Formula {
        id: Id::TcHdlRatio,
        label: "Total Cholesterol ÷ HDL",
        inputs: &[Id::TotalCholesterol, Id::Hdl],
        decimals: 2,
        compute: |x| x.ratio(Id::TotalCholesterol, Id::Hdl),
    },
    Formula {
        id: Id::LdlHdlRatio,
        label: "LDL ÷ HDL",
        inputs: &[Id::Ldl, Id::Hdl],
        decimals: 2,
        compute: |x| x.ratio(Id::Ldl, Id::Hdl),
    },
    Formula {
        id: Id::TgHdlRatio,
        label: "Triglycerides ÷ HDL",
        inputs: &[Id::Triglycerides, Id::Hdl],
        decimals: 2,
        compute: |x| x.ratio(Id::Triglycerides, Id::Hdl),
    },
    Formula {
        id: Id::AtherogenicIndex,
        label: "log₁₀(TG/HDL) [mmol/L]",
        inputs: &[Id::Triglycerides, Id::Hdl],
        decimals: 3,
        compute: |x| {
            let tg = x.get(Id::Triglycerides)? / TG_MG_PER_MMOL;
            let hdl = x.get(Id::Hdl)? / HDL_MG_PER_MMOL;
            Some((tg / hdl).log10())
        },
    },
    Formula {
        id: Id::NonHdlC,
        label: "TC − HDL",
        inputs: &[Id::TotalCholesterol, Id::Hdl],
        decimals: 0,
        compute: |x| Some(x.get(Id::TotalCholesterol)? - x.get(Id::Hdl)?),
    },
    Formula {
        id: Id::RemnantCholesterol,
        label: "TC − HDL − LDL",
        inputs: &[Id::TotalCholesterol, Id::Hdl, Id::Ldl],
        decimals: 0,
        compute: |x| Some(x.get(Id::TotalCholesterol)? - x.get(Id::Hdl)? - x.get(Id::Ldl)?),
    },
    Formula {
        id: Id::AtherogenicCoeff,
        label: "(TC − HDL) ÷ HDL",
        inputs: &[Id::TotalCholesterol, Id::Hdl],
        decimals: 2,
        compute: |x| {
            let hdl = x.positive(Id::Hdl)?;
            Some((x.get(Id::TotalCholesterol)? - hdl) / hdl)
        },
    },
    Formula {
        id: Id::LdlApoBRatio,
        label: "LDL ÷ ApoB",
        inputs: &[Id::Ldl, Id::ApoB],
        decimals: 2,
        compute: |x| x.ratio(Id::Ldl, Id::ApoB),
    },
    Formula {
        id: Id::NonHdlApoBRatio,
        label: "(TC − HDL) ÷ ApoB",
        inputs: &[Id::TotalCholesterol, Id::Hdl, Id::ApoB],
        decimals: 2,
        compute: |x| {
            Some((x.get(Id::TotalCholesterol)? - x.get(Id::Hdl)?) / x.positive(Id::ApoB)?)
        },
    },
    Formula {
        id: Id::TgApoBRatio,
        label: "Triglycerides ÷ ApoB",
        inputs: &[Id::Triglycerides, Id::ApoB],
        decimals: 2,
        compute: |x| x.ratio(Id::Triglycerides, Id::ApoB),
    },
    Formula {
        id: Id::LdlTcRatio,
        label: "LDL ÷ TC",
        inputs: &[Id::Ldl, Id::TotalCholesterol],
        decimals: 2,
        compute: |x| x.ratio(Id::Ldl, Id::TotalCholesterol),
    },
    Formula {
        id: Id::NonHdlTcRatio,
        label: "(TC − HDL) ÷ TC",
        inputs: &[Id::TotalCholesterol, Id::Hdl],
        decimals: 2,
        compute: |x| {
            let tc = x.positive(Id::TotalCholesterol)?;
            Some((tc - x.get(Id::Hdl)?) / tc)
        },
    },
    // Insulin sensitivity
    Formula {
        id: Id::HomaIr,
        label: "(Fasting Insulin × Glucose) ÷ 405",
        inputs: &[Id::FastingInsulin, Id::Glucose],
        decimals: 2,
        compute: |x| Some(x.get(Id::FastingInsulin)? * x.get(Id::Glucose)? / 405.0),
    },
    Formula {
        id: Id::Quicki,
        label: "1 ÷ (log₁₀(Insulin) + log₁₀(Glucose))",
        inputs: &[Id::FastingInsulin, Id::Glucose],
        decimals: 3,
        compute: |x| {
            let insulin = x.positive(Id::FastingInsulin)?;
            let glucose = x.positive(Id::Glucose)?;
            Some(1.0 / (insulin.log10() + glucose.log10()))
        },
    },
    Formula {
        id: Id::TygIndex,
        label: "Ln[(TG × Glucose) ÷ 2]",
        inputs: &[Id::Triglycerides, Id::Glucose],
        decimals: 2,
        compute: |x| Some((x.get(Id::Triglycerides)? * x.get(Id::Glucose)? / 2.0).ln()),
    },
    // Liver
    Formula {
        id: Id::DeRitisRatio,
        label: "AST ÷ ALT",
        inputs: &[Id::Ast, Id::Alt],
        decimals: 2,
        compute: |x| x.ratio(Id::Ast, Id::Alt),
    },
    Formula {
        id: Id::AgRatio,
        label: "Albumin ÷ Globulin",
        inputs: &[Id::Albumin, Id::Globulin],
        decimals: 2,
        compute: |x| x.ratio(Id::Albumin, Id::Globulin),
    },
    Formula {
        id: Id::BilirubinAlbuminRatio,
        label: "Total Bilirubin ÷ Albumin",
        inputs: &[Id::TotalBilirubin, Id::Albumin],
        decimals: 2,
        compute: |x| x.ratio(Id::TotalBilirubin, Id::Albumin),
    },
    Formula {
        id: Id::IndirectDirectBilirubin,
        label: "Indirect Bilirubin ÷ Direct Bilirubin",
        inputs: &[Id::IndirectBilirubin, Id::DirectBilirubin],
        decimals: 2,
        compute: |x| x.ratio(Id::IndirectBilirubin, Id::DirectBilirubin),
    },
    // Kidney
    Formula {
        id: Id::BunCreatinineRatio,
        label: "BUN ÷ Creatinine",
        inputs: &[Id::Bun, Id::Creatinine],
        decimals: 1,
        compute: |x| x.ratio(Id::Bun, Id::Creatinine),
    },
    // CBC inflammation ratios
    Formula {
        id: Id::Nlr,
        label: "Neutrophils ÷ Lymphocytes",
        inputs: &[Id::Neutrophils, Id::Lymphocytes],
        decimals: 2,
        compute: |x| x.ratio(Id::Neutrophils, Id::Lymphocytes),
    },
    Formula {
        id: Id::Plr,
        label: "(Platelets × 1000) ÷ Lymphocytes",
        inputs: &[Id::Platelets, Id::Lymphocytes],
        decimals: 0,
        compute: |x| Some(x.get(Id::Platelets)? * 1000.0 / x.positive(Id::Lymphocytes)?),
    },
    Formula {
        id: Id::Mlr,
        label: "Monocytes ÷ Lymphocytes",
        inputs: &[Id::Monocytes, Id::Lymphocytes],
        decimals: 2,
        compute: |x| x.ratio(Id::Monocytes, Id::Lymphocytes),
    },
    Formula {
        id: Id::Sii,
        label: "(Platelets × Neutrophils) ÷ Lymphocytes",
        inputs: &[Id::Platelets, Id::Neutrophils, Id::Lymphocytes],
        decimals: 0,
        compute: |x| {
            Some(x.get(Id::Platelets)? * x.get(Id::Neutrophils)? / x.positive(Id::Lymphocytes)?)
        },
    },
    Formula {
        id: Id::Siri,
        label: "(Monocytes × Neutrophils) ÷ (Lymphocytes × 1000)",
        inputs: &[Id::Monocytes, Id::Neutrophils, Id::Lymphocytes],
        decimals: 2,
        compute: |x| {
            let lymphocytes = x.positive(Id::Lymphocytes)?;
            Some(x.get(Id::Monocytes)? * x.get(Id::Neutrophils)? / (lymphocytes * 1000.0))
        },
    },
    Formula {
        id: Id::Lmr,
        label: "Lymphocytes ÷ Monocytes",
        inputs: &[Id::Lymphocytes, Id::Monocytes],
        decimals: 2,
        compute: |x| x.ratio(Id::Lymphocytes, Id::Monocytes),
    },
    Formula {
        id: Id::Pwr,
        label: "Platelets ÷ WBC",
        inputs: &[Id::Platelets, Id::Wbc],
        decimals: 1,
        compute: |x| x.ratio(Id::Platelets, Id::Wbc),
    },
    Formula {
        id: Id::Mhr,
        label: "(Monocytes ÷ 1000) ÷ HDL",
        inputs: &[Id::Monocytes, Id::Hdl],
        decimals: 3,
        compute: |x| Some(x.get(Id::Monocytes)? / 1000.0 / x.positive(Id::Hdl)?),
    },
    Formula {
        id: Id::Nhr,
        label: "(Neutrophils ÷ 1000) ÷ HDL",
        inputs: &[Id::Neutrophils, Id::Hdl],
        decimals: 3,
        compute: |x| Some(x.get(Id::Neutrophils)? / 1000.0 / x.positive(Id::Hdl)?),
    },
    Formula {
        id: Id::GgtHdlRatio,
        label: "GGT ÷ HDL",
        inputs: &[Id::Ggt, Id::Hdl],
        decimals: 2,
        compute: |x| x.ratio(Id::Ggt, Id::Hdl),
    },
    Formula {
        id: Id::Car,
        label: "CRP ÷ Albumin",
        inputs: &[Id::Crp, Id::Albumin],
        decimals: 2,
        compute: |x| x.ratio(Id::Crp, Id::Albumin),
    },
    Formula {
        id: Id::FerritinAlbuminRatio,
        label: "Ferritin ÷ Albumin",
        inputs: &[Id::Ferritin, Id::Albumin],
        decimals: 2,
        compute: |x| x.ratio(Id::Ferritin, Id::Albumin),
    },
    Formula {
        id: Id::RdwMcvRatio,
        label: "RDW ÷ MCV",
        inputs: &[Id::Rdw, Id::Mcv],
        decimals: 3,
        compute: |x| x.ratio(Id::Rdw, Id::Mcv),
    },
    Formula {
        id: Id::Nlpr,
        label: "NLR ÷ (Platelets ÷ 100)",
        inputs: &[Id::Neutrophils, Id::Lymphocytes, Id::Platelets],
        decimals: 3,
        compute: |x| {
            let nlr = x.ratio(Id::Neutrophils, Id::Lymphocytes)?;
            Some(nlr / (x.positive(Id::Platelets)? / 100.0))
        },
    },
    Formula {
        id: Id::UricAcidHdlRatio,
        label: "Uric Acid ÷ HDL",
        inputs: &[Id::UricAcid, Id::Hdl],
        decimals: 3,
        compute: |x| x.ratio(Id::UricAcid, Id::Hdl),
    },
    // Hormones
    Formula {
        id: Id::TestosteroneEstradiolRatio,
        label: "Total Testosterone ÷ Estradiol",
        inputs: &[Id::TotalTestosterone, Id::Estradiol],
        decimals: 1,
        compute: |x| x.ratio(Id::TotalTestosterone, Id::Estradiol),
    },
    Formula {
        id: Id::FreeAndrogenIndex,
        label: "(Total Testosterone [nmol/L] × 100) ÷ SHBG",
        inputs: &[Id::TotalTestosterone, Id::Shbg],
        decimals: 1,
        compute: |x| {
            let testosterone = x.get(Id::TotalTestosterone)? / TESTOSTERONE_NG_PER_NMOL;
            Some(testosterone * 100.0 / x.positive(Id::Shbg)?)
        },
    },
    // Thyroid
    Formula {
        id: Id::Ft3Rt3Ratio,
        label: "Free T3 ÷ Reverse T3",
        inputs: &[Id::FreeT3, Id::ReverseT3],
        decimals: 2,
        compute: |x| x.ratio(Id::FreeT3, Id::ReverseT3),
    },
    // Minerals
    Formula {
        id: Id::CopperZincRatio,
        label: "Copper ÷ Zinc",
        inputs: &[Id::Copper, Id::Zinc],
        decimals: 2,
        compute: |x| x.ratio(Id::Copper, Id::Zinc),
    },
    Formula {
        id: Id::CorrectedCalcium,
        label: "Ca + 0.8 × (4.0 − Albumin)",
        inputs: &[Id::Calcium, Id::Albumin],
        decimals: 2,
        compute: |x| Some(x.get(Id::Calcium)? + 0.8 * (4.0 - x.get(Id::Albumin)?)),
    },
];

/// Formula that produces a given id, if any
#[must_use]
pub fn formula_for(id: Id) -> Option<&'static Formula> {
    FORMULAS.iter().find(|formula| formula.id == id)
}
