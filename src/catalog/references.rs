//! Static biomarker reference table
//!
//! Ranges are expressed in the units lab reports most commonly use in the US
//! (mg/dL for lipids and glucose). Entries appear in the same order as the
//! `BiomarkerId` variants so the catalog can be indexed by discriminant.

use crate::models::biomarker::{
    BiomarkerCategory as C, BiomarkerId as Id, BiomarkerReference as R, Direction as D, Range,
};

/// Every biomarker the engine knows about
pub static REFERENCES: &[R] = &[
    // Lipid panel
    R::new(Id::TotalCholesterol, "Total Cholesterol", C::Lipids, "mg/dL", D::Lower)
        .standard(Range::at_most(200.0))
        .optimal(Range::at_most(180.0)),
    R::new(Id::Ldl, "LDL-C", C::Lipids, "mg/dL", D::Lower)
        .standard(Range::at_most(100.0))
        .optimal(Range::at_most(70.0)),
    R::new(Id::Hdl, "HDL-C", C::Lipids, "mg/dL", D::Higher)
        .standard(Range::at_least(40.0))
        .optimal(Range::between(60.0, 100.0))
        .sex_specific(Range::between(60.0, 100.0), Range::between(60.0, 100.0)),
    R::new(Id::Triglycerides, "Triglycerides", C::Lipids, "mg/dL", D::Lower)
        .standard(Range::at_most(150.0))
        .optimal(Range::at_most(70.0)),
    R::new(Id::ApoB, "ApoB", C::Lipids, "mg/dL", D::Lower)
        .standard(Range::at_most(90.0))
        .optimal(Range::between(40.0, 70.0)),
    R::new(Id::Lpa, "Lp(a)", C::Lipids, "nmol/L", D::Lower)
        .standard(Range::at_most(75.0))
        .optimal(Range::at_most(50.0)),
    R::new(Id::LdlP, "LDL-P", C::Lipids, "nmol/L", D::Lower)
        .standard(Range::at_most(1300.0))
        .optimal(Range::at_most(1000.0)),
    R::new(Id::SdLdl, "Small Dense LDL", C::Lipids, "nmol/L", D::Lower)
        .standard(Range::at_most(527.0))
        .optimal(Range::at_most(142.0)),
    R::new(Id::Vldl, "VLDL", C::Lipids, "mg/dL", D::Lower)
        .standard(Range::at_most(30.0))
        .optimal(Range::at_most(30.0)),
    R::new(Id::NonHdlC, "Non-HDL-C", C::Lipids, "mg/dL", D::Lower)
        .standard(Range::at_most(130.0))
        .optimal(Range::at_most(100.0))
        .calculated("totalCholesterol - hdl"),
    R::new(Id::OxidizedLdl, "Oxidized LDL", C::Lipids, "U/L", D::Lower)
        .standard(Range::at_most(70.0))
        .optimal(Range::at_most(60.0)),
    // Lipid ratios
    R::new(Id::TcHdlRatio, "TC/HDL Ratio (Castelli Index)", C::LipidRatios, "ratio", D::Lower)
        .optimal(Range::at_most(3.5))
        .calculated("totalCholesterol / hdl"),
    R::new(Id::LdlHdlRatio, "LDL/HDL Ratio", C::LipidRatios, "ratio", D::Lower)
        .optimal(Range::at_most(2.0))
        .calculated("ldl / hdl"),
    R::new(Id::TgHdlRatio, "TG/HDL Ratio", C::LipidRatios, "ratio", D::Lower)
        .optimal(Range::at_most(1.0))
        .calculated("triglycerides / hdl"),
    R::new(Id::AtherogenicIndex, "Atherogenic Index of Plasma", C::LipidRatios, "index", D::Lower)
        .optimal(Range::at_most(0.11))
        .calculated("log10(triglycerides / hdl) [mmol/L]"),
    R::new(Id::RemnantCholesterol, "Remnant Cholesterol", C::LipidRatios, "mg/dL", D::Lower)
        .optimal(Range::at_most(30.0))
        .calculated("totalCholesterol - hdl - ldl"),
    R::new(Id::AtherogenicCoeff, "Atherogenic Coefficient", C::LipidRatios, "ratio", D::Lower)
        .optimal(Range::at_most(3.0))
        .calculated("(TC - HDL) / HDL"),
    R::new(Id::LdlApoBRatio, "LDL/ApoB Ratio", C::LipidRatios, "ratio", D::MidRange)
        .optimal(Range::between(1.3, 1.5))
        .calculated("LDL / ApoB"),
    R::new(Id::NonHdlApoBRatio, "Non-HDL/ApoB Ratio", C::LipidRatios, "ratio", D::MidRange)
        .optimal(Range::between(1.4, 1.6))
        .calculated("(TC - HDL) / ApoB"),
    R::new(Id::TgApoBRatio, "TG/ApoB Ratio", C::LipidRatios, "ratio", D::Lower)
        .optimal(Range::at_most(0.8))
        .calculated("TG / ApoB"),
    R::new(Id::LdlTcRatio, "LDL/TC Ratio", C::LipidRatios, "ratio", D::Lower)
        .optimal(Range::at_most(0.6))
        .calculated("LDL / TC"),
    R::new(Id::NonHdlTcRatio, "Non-HDL/TC Ratio", C::LipidRatios, "ratio", D::Lower)
        .optimal(Range::at_most(0.75))
        .calculated("(TC - HDL) / TC"),
    // Metabolic panel
    R::new(Id::Glucose, "Fasting Glucose", C::Metabolic, "mg/dL", D::Lower)
        .standard(Range::between(65.0, 99.0))
        .optimal(Range::between(80.0, 90.0)),
    R::new(Id::Hba1c, "HbA1c", C::Metabolic, "%", D::Lower)
        .standard(Range::at_most(5.69))
        .optimal(Range::between(4.5, 5.25)),
    R::new(Id::FastingInsulin, "Fasting Insulin", C::Metabolic, "μU/mL", D::Lower)
        .standard(Range::between(2.0, 25.0))
        .optimal(Range::between(2.0, 5.0)),
    R::new(Id::CPeptide, "C-peptide", C::Metabolic, "ng/mL", D::MidRange)
        .standard(Range::between(0.8, 3.85))
        .optimal(Range::between(1.0, 2.5)),
    R::new(Id::Fructosamine, "Fructosamine", C::Metabolic, "μmol/L", D::Lower)
        .standard(Range::between(190.0, 285.0))
        .optimal(Range::between(190.0, 250.0)),
    // Insulin calculations
    R::new(Id::HomaIr, "HOMA-IR", C::InsulinCalcs, "index", D::Lower)
        .optimal(Range::at_most(1.0))
        .calculated("(fastingInsulin * glucose) / 405"),
    R::new(Id::Quicki, "QUICKI", C::InsulinCalcs, "index", D::Higher)
        .optimal(Range::at_least(0.35))
        .calculated("1 / (log10(fastingInsulin) + log10(glucose))"),
    R::new(Id::TygIndex, "TyG Index", C::InsulinCalcs, "index", D::Lower)
        .optimal(Range::at_most(8.5))
        .calculated("ln((triglycerides * glucose) / 2)"),
    // Liver function
    R::new(Id::Ast, "AST", C::Liver, "U/L", D::Lower)
        .standard(Range::between(10.0, 40.0))
        .optimal(Range::at_most(20.0)),
    R::new(Id::Alt, "ALT", C::Liver, "U/L", D::Lower)
        .standard(Range::at_most(45.0))
        .optimal(Range::at_most(20.0)),
    R::new(Id::Ggt, "GGT", C::Liver, "U/L", D::Lower)
        .standard(Range::at_most(50.0))
        .optimal(Range::at_most(25.0)),
    R::new(Id::AlkalinePhosphatase, "Alkaline Phosphatase", C::Liver, "U/L", D::MidRange)
        .standard(Range::between(45.0, 115.0))
        .optimal(Range::between(44.0, 100.0)),
    R::new(Id::TotalBilirubin, "Total Bilirubin", C::Liver, "mg/dL", D::Lower)
        .standard(Range::between(0.1, 1.2))
        .optimal(Range::between(0.1, 1.0)),
    R::new(Id::Albumin, "Albumin", C::Liver, "g/dL", D::Higher)
        .standard(Range::between(3.5, 5.0))
        .optimal(Range::between(4.0, 5.0)),
    R::new(Id::AgRatio, "A/G Ratio", C::Liver, "ratio", D::Higher)
        .standard(Range::between(1.0, 2.0))
        .optimal(Range::between(1.2, 2.0)),
    R::new(Id::DeRitisRatio, "AST:ALT (De Ritis Ratio)", C::Liver, "ratio", D::MidRange)
        .optimal(Range::between(0.8, 1.2))
        .calculated("ast / alt"),
    R::new(Id::BilirubinAlbuminRatio, "Bilirubin/Albumin Ratio", C::Liver, "ratio", D::Lower)
        .optimal(Range::at_most(0.25))
        .calculated("totalBilirubin / albumin"),
    R::new(Id::IndirectDirectBilirubin, "Indirect/Direct Bilirubin Ratio", C::Liver, "ratio", D::MidRange)
        .optimal(Range::between(3.0, 5.0))
        .calculated("indirectBilirubin / directBilirubin"),
    // Kidney function
    R::new(Id::Creatinine, "Creatinine", C::Kidney, "mg/dL", D::Context)
        .standard(Range::between(0.7, 1.3))
        .optimal(Range::between(0.8, 1.2))
        .sex_specific(Range::between(0.8, 1.2), Range::between(0.6, 1.0)),
    R::new(Id::Bun, "BUN", C::Kidney, "mg/dL", D::MidRange)
        .standard(Range::between(6.0, 24.0))
        .optimal(Range::between(10.0, 16.0)),
    R::new(Id::Egfr, "eGFR", C::Kidney, "mL/min/1.73m²", D::Higher)
        .standard(Range::at_least(60.0))
        .optimal(Range::at_least(90.0)),
    R::new(Id::CystatinC, "Cystatin C", C::Kidney, "mg/L", D::Lower)
        .standard(Range::between(0.5, 1.0))
        .optimal(Range::between(0.6, 0.9)),
    R::new(Id::BunCreatinineRatio, "BUN/Creatinine Ratio", C::Kidney, "ratio", D::MidRange)
        .standard(Range::between(10.0, 20.0))
        .optimal(Range::between(12.0, 16.0))
        .calculated("bun / creatinine"),
    R::new(Id::UricAcid, "Uric Acid", C::Kidney, "mg/dL", D::Lower)
        .standard(Range::between(3.4, 7.0))
        .optimal(Range::at_most(5.0))
        .sex_specific(Range::at_most(5.0), Range::at_most(4.0)),
    // Complete blood count
    R::new(Id::Rbc, "RBC", C::Cbc, "million/µL", D::MidRange)
        .standard(Range::between(4.6, 6.2))
        .optimal(Range::between(4.4, 4.9))
        .sex_specific(Range::between(4.4, 4.9), Range::between(4.0, 4.5)),
    R::new(Id::Wbc, "WBC", C::Cbc, "×10⁹/L", D::MidRange)
        .standard(Range::between(4.5, 11.0))
        .optimal(Range::between(5.0, 8.0)),
    R::new(Id::Hemoglobin, "Hemoglobin", C::Cbc, "g/dL", D::MidRange)
        .standard(Range::between(13.8, 17.2))
        .optimal(Range::between(14.0, 15.0))
        .sex_specific(Range::between(14.0, 15.0), Range::between(13.5, 14.5)),
    R::new(Id::Hematocrit, "Hematocrit", C::Cbc, "%", D::MidRange)
        .standard(Range::between(40.0, 54.0))
        .optimal(Range::between(39.0, 45.0))
        .sex_specific(Range::between(39.0, 45.0), Range::between(37.0, 44.0)),
    R::new(Id::Mcv, "MCV", C::Cbc, "fL", D::MidRange)
        .standard(Range::between(80.0, 100.0))
        .optimal(Range::between(85.0, 92.0)),
    R::new(Id::Rdw, "RDW", C::Cbc, "%", D::Lower)
        .standard(Range::between(11.5, 15.4))
        .optimal(Range::between(11.5, 13.0)),
    R::new(Id::Platelets, "Platelets", C::Cbc, "×10⁹/L", D::MidRange)
        .standard(Range::between(150.0, 400.0))
        .optimal(Range::between(175.0, 250.0)),
    R::new(Id::Mpv, "MPV", C::Cbc, "fL", D::MidRange)
        .standard(Range::between(7.5, 11.5))
        .optimal(Range::between(7.5, 10.5)),
    // Iron panel
    R::new(Id::Ferritin, "Ferritin", C::Iron, "ng/mL", D::MidRange)
        .standard(Range::between(12.0, 300.0))
        .optimal(Range::between(50.0, 150.0))
        .sex_specific(Range::between(50.0, 150.0), Range::between(40.0, 70.0)),
    R::new(Id::SerumIron, "Serum Iron", C::Iron, "µg/dL", D::MidRange)
        .standard(Range::between(59.0, 158.0))
        .optimal(Range::between(85.0, 130.0)),
    R::new(Id::Tibc, "TIBC", C::Iron, "µg/dL", D::MidRange)
        .standard(Range::between(250.0, 450.0))
        .optimal(Range::between(250.0, 350.0)),
    R::new(Id::IronSaturation, "Iron Saturation", C::Iron, "%", D::MidRange)
        .standard(Range::between(20.0, 50.0))
        .optimal(Range::between(20.0, 35.0)),
    R::new(Id::Transferrin, "Transferrin", C::Iron, "mg/dL", D::MidRange)
        .standard(Range::between(200.0, 360.0))
        .optimal(Range::between(200.0, 300.0)),
    // CBC inflammation ratios
    R::new(Id::Nlr, "NLR (Neutrophil-to-Lymphocyte)", C::CbcRatios, "ratio", D::Lower)
        .optimal(Range::between(1.2, 2.0))
        .calculated("neutrophils / lymphocytes (absolute)"),
    R::new(Id::Plr, "PLR (Platelet-to-Lymphocyte)", C::CbcRatios, "ratio", D::Lower)
        .optimal(Range::at_most(135.0))
        .calculated("platelets / lymphocytes (absolute)"),
    R::new(Id::Mlr, "MLR (Monocyte-to-Lymphocyte)", C::CbcRatios, "ratio", D::Lower)
        .optimal(Range::at_most(0.25))
        .calculated("monocytes / lymphocytes (absolute)"),
    R::new(Id::Sii, "SII (Systemic Immune-Inflammation Index)", C::CbcRatios, "index", D::MidRange)
        .optimal(Range::between(200.0, 500.0))
        .calculated("(platelets * neutrophils) / lymphocytes"),
    R::new(Id::Siri, "SIRI (Systemic Inflammation Response Index)", C::CbcRatios, "index", D::Lower)
        .optimal(Range::at_most(1.0))
        .calculated("(monocytes * neutrophils) / lymphocytes"),
    R::new(Id::Lmr, "LMR (Lymphocyte-to-Monocyte)", C::CbcRatios, "ratio", D::Higher)
        .optimal(Range::at_least(4.0))
        .calculated("lymphocytes / monocytes"),
    R::new(Id::Pwr, "PWR (Platelet-to-WBC)", C::CbcRatios, "ratio", D::MidRange)
        .optimal(Range::between(20.0, 40.0))
        .calculated("platelets / wbc"),
    R::new(Id::Mhr, "MHR (Monocyte-to-HDL)", C::CbcRatios, "ratio", D::Lower)
        .optimal(Range::at_most(0.01))
        .calculated("(monocytes / 1000) / hdl"),
    R::new(Id::Nhr, "NHR (Neutrophil-to-HDL)", C::CbcRatios, "ratio", D::Lower)
        .optimal(Range::at_most(0.06))
        .calculated("(neutrophils / 1000) / hdl"),
    R::new(Id::GgtHdlRatio, "GGT/HDL Ratio", C::CbcRatios, "ratio", D::Lower)
        .optimal(Range::at_most(0.5))
        .calculated("ggt / hdl"),
    R::new(Id::Car, "CAR (CRP-to-Albumin)", C::CbcRatios, "ratio", D::Lower)
        .optimal(Range::at_most(0.25))
        .calculated("crp / albumin"),
    R::new(Id::FerritinAlbuminRatio, "Ferritin/Albumin Ratio", C::CbcRatios, "ratio", D::Lower)
        .optimal(Range::at_most(30.0))
        .calculated("ferritin / albumin"),
    R::new(Id::RdwMcvRatio, "RDW/MCV Ratio", C::CbcRatios, "ratio", D::Lower)
        .optimal(Range::at_most(0.15))
        .calculated("rdw / mcv"),
    R::new(Id::Nlpr, "NLPR (NLR-Platelet Ratio)", C::CbcRatios, "ratio", D::Lower)
        .optimal(Range::at_most(0.8))
        .calculated("NLR / (platelets / 100)"),
    // Metabolic panel
    R::new(Id::UricAcidHdlRatio, "Uric Acid/HDL Ratio", C::Metabolic, "ratio", D::Lower)
        .optimal(Range::at_most(0.1))
        .calculated("uricAcid / hdl"),
    // Male hormones
    R::new(Id::TestosteroneEstradiolRatio, "Testosterone/Estradiol Ratio", C::MaleHormones, "ratio", D::MidRange)
        .optimal(Range::between(10.0, 20.0))
        .calculated("totalTestosterone / estradiol"),
    // Thyroid panel
    R::new(Id::Tsh, "TSH", C::Thyroid, "mIU/L", D::Lower)
        .standard(Range::between(0.45, 4.5))
        .optimal(Range::between(1.0, 2.5)),
    R::new(Id::FreeT4, "Free T4", C::Thyroid, "ng/dL", D::Higher)
        .standard(Range::between(0.82, 1.76))
        .optimal(Range::between(1.1, 1.6)),
    R::new(Id::FreeT3, "Free T3", C::Thyroid, "pg/mL", D::Higher)
        .standard(Range::between(2.0, 4.4))
        .optimal(Range::between(3.2, 4.2)),
    R::new(Id::ReverseT3, "Reverse T3", C::Thyroid, "ng/dL", D::Lower)
        .standard(Range::between(9.0, 27.0))
        .optimal(Range::between(10.0, 20.0)),
    R::new(Id::TpoAntibodies, "TPO Antibodies", C::Thyroid, "IU/mL", D::Lower)
        .standard(Range::at_most(34.0))
        .optimal(Range::at_most(9.0)),
    R::new(Id::TgAb, "Thyroglobulin Antibodies", C::Thyroid, "IU/mL", D::Lower)
        .standard(Range::at_most(40.0))
        .optimal(Range::at_most(1.0)),
    R::new(Id::Ft3Rt3Ratio, "FT3/rT3 Ratio", C::Thyroid, "ratio", D::Higher)
        .optimal(Range::at_least(0.2))
        .calculated("freeT3 / reverseT3"),
    R::new(Id::T3Uptake, "T3 Uptake", C::Thyroid, "%", D::MidRange)
        .standard(Range::between(22.0, 35.0))
        .optimal(Range::between(24.0, 32.0)),
    R::new(Id::TotalT4, "Total T4", C::Thyroid, "mcg/dL", D::MidRange)
        .standard(Range::between(4.5, 12.5))
        .optimal(Range::between(6.0, 10.0)),
    R::new(Id::FreeT4Index, "Free T4 Index", C::Thyroid, "index", D::MidRange)
        .standard(Range::between(1.4, 3.8))
        .optimal(Range::between(1.5, 4.5)),
    // Male hormones
    R::new(Id::BioavailableTestosterone, "Bioavailable Testosterone", C::MaleHormones, "ng/dL", D::Higher)
        .standard(Range::between(130.0, 680.0))
        .optimal(Range::between(250.0, 500.0)),
    // Metabolic panel
    R::new(Id::EagMgDl, "eAG (Estimated Average Glucose)", C::Metabolic, "mg/dL", D::Lower)
        .standard(Range::at_most(117.0))
        .optimal(Range::at_most(100.0)),
    R::new(Id::EagMmolL, "eAG (mmol/L)", C::Metabolic, "mmol/L", D::Lower)
        .standard(Range::at_most(6.5))
        .optimal(Range::at_most(5.6)),
    // Liver function
    R::new(Id::DirectBilirubin, "Direct Bilirubin", C::Liver, "mg/dL", D::Lower)
        .standard(Range::at_most(0.3))
        .optimal(Range::at_most(0.2)),
    R::new(Id::IndirectBilirubin, "Indirect Bilirubin", C::Liver, "mg/dL", D::Lower)
        .standard(Range::between(0.1, 0.9))
        .optimal(Range::between(0.1, 0.8)),
    // Inflammation markers
    R::new(Id::Crp, "hs-CRP", C::Inflammation, "mg/L", D::Lower)
        .standard(Range::at_most(3.0))
        .optimal(Range::at_most(0.5)),
    R::new(Id::Esr, "ESR", C::Inflammation, "mm/hr", D::Lower)
        .standard(Range::at_most(20.0))
        .optimal(Range::at_most(10.0))
        .sex_specific(Range::at_most(10.0), Range::at_most(15.0)),
    R::new(Id::Homocysteine, "Homocysteine", C::Inflammation, "µmol/L", D::Lower)
        .standard(Range::between(5.0, 15.0))
        .optimal(Range::at_most(7.0)),
    R::new(Id::Fibrinogen, "Fibrinogen", C::Inflammation, "mg/dL", D::Lower)
        .standard(Range::between(200.0, 400.0))
        .optimal(Range::between(200.0, 300.0)),
    R::new(Id::Il6, "IL-6", C::Inflammation, "pg/mL", D::Lower)
        .standard(Range::at_most(5.0))
        .optimal(Range::at_most(2.0)),
    R::new(Id::TnfAlpha, "TNF-alpha", C::Inflammation, "pg/mL", D::Lower)
        .standard(Range::at_most(8.1))
        .optimal(Range::at_most(2.0)),
    // Vitamins
    R::new(Id::VitaminD, "Vitamin D (25-OH)", C::Vitamins, "ng/mL", D::Higher)
        .standard(Range::between(30.0, 100.0))
        .optimal(Range::between(40.0, 60.0)),
    R::new(Id::VitaminB12, "Vitamin B12", C::Vitamins, "pg/mL", D::Higher)
        .standard(Range::between(200.0, 900.0))
        .optimal(Range::between(450.0, 2000.0)),
    R::new(Id::Folate, "Folate", C::Vitamins, "ng/mL", D::Higher)
        .standard(Range::between(3.0, 20.0))
        .optimal(Range::at_least(8.0)),
    R::new(Id::Mma, "MMA (B12 Functional)", C::Vitamins, "nmol/L", D::Lower)
        .standard(Range::between(70.0, 378.0))
        .optimal(Range::at_most(260.0)),
    R::new(Id::VitaminB6, "Vitamin B6", C::Vitamins, "ng/mL", D::Higher)
        .standard(Range::between(5.0, 50.0))
        .optimal(Range::between(20.0, 50.0)),
    // Minerals and fatty acids
    R::new(Id::MagnesiumRbc, "Magnesium RBC", C::Minerals, "mg/dL", D::Higher)
        .standard(Range::between(4.2, 6.8))
        .optimal(Range::between(5.5, 6.5)),
    R::new(Id::MagnesiumSerum, "Serum Magnesium", C::Minerals, "mg/dL", D::Higher)
        .standard(Range::between(1.7, 2.4))
        .optimal(Range::at_least(2.0)),
    R::new(Id::Zinc, "Zinc", C::Minerals, "µg/dL", D::MidRange)
        .standard(Range::between(60.0, 130.0))
        .optimal(Range::between(80.0, 120.0)),
    R::new(Id::Selenium, "Selenium", C::Minerals, "µg/L", D::Higher)
        .standard(Range::between(70.0, 150.0))
        .optimal(Range::between(110.0, 150.0)),
    R::new(Id::Copper, "Copper", C::Minerals, "µg/dL", D::MidRange)
        .standard(Range::between(70.0, 140.0))
        .optimal(Range::between(80.0, 120.0)),
    R::new(Id::CopperZincRatio, "Copper/Zinc Ratio", C::Minerals, "ratio", D::MidRange)
        .optimal(Range::between(0.7, 1.0))
        .calculated("copper / zinc"),
    R::new(Id::Omega3Index, "Omega-3 Index", C::Minerals, "%", D::Higher)
        .standard(Range::between(4.0, 5.0))
        .optimal(Range::between(8.0, 12.0)),
    R::new(Id::Omega6Omega3Ratio, "Omega-6/Omega-3 Ratio", C::Minerals, "ratio", D::Lower)
        .standard(Range::between(15.0, 20.0))
        .optimal(Range::between(2.0, 4.0)),
    // Male hormones
    R::new(Id::TotalTestosterone, "Total Testosterone", C::MaleHormones, "ng/dL", D::Higher)
        .standard(Range::between(250.0, 1100.0))
        .optimal(Range::between(400.0, 700.0)),
    R::new(Id::FreeTestosterone, "Free Testosterone", C::MaleHormones, "pg/mL", D::Higher)
        .standard(Range::between(35.0, 155.0))
        .optimal(Range::between(100.0, 155.0)),
    R::new(Id::Shbg, "SHBG", C::MaleHormones, "nmol/L", D::MidRange)
        .standard(Range::between(10.0, 57.0))
        .optimal(Range::between(20.0, 40.0)),
    R::new(Id::EstradiolMale, "Estradiol (Male)", C::MaleHormones, "pg/mL", D::MidRange)
        .standard(Range::between(10.0, 40.0))
        .optimal(Range::between(20.0, 30.0)),
    R::new(Id::Dheas, "DHEA-S", C::MaleHormones, "µg/dL", D::Higher)
        .standard(Range::between(160.0, 449.0))
        .optimal(Range::between(300.0, 450.0)),
    R::new(Id::CortisolAm, "Cortisol (AM)", C::MaleHormones, "µg/dL", D::MidRange)
        .standard(Range::between(6.0, 23.0))
        .optimal(Range::between(10.0, 18.0)),
    R::new(Id::Igf1, "IGF-1", C::MaleHormones, "ng/mL", D::Context)
        .standard(Range::between(101.0, 267.0))
        .optimal(Range::at_most(175.0)),
    R::new(Id::Prolactin, "Prolactin", C::MaleHormones, "ng/mL", D::Lower)
        .standard(Range::between(2.0, 18.0))
        .optimal(Range::at_most(10.0)),
    R::new(Id::Lh, "LH", C::MaleHormones, "mIU/mL", D::MidRange)
        .standard(Range::between(1.5, 9.3))
        .optimal(Range::between(2.0, 8.0)),
    R::new(Id::Fsh, "FSH", C::MaleHormones, "mIU/mL", D::MidRange)
        .standard(Range::between(1.5, 12.4))
        .optimal(Range::between(1.0, 8.0)),
    R::new(Id::FreeAndrogenIndex, "Free Androgen Index", C::MaleHormones, "index", D::MidRange)
        .standard(Range::between(30.0, 150.0))
        .optimal(Range::between(40.0, 80.0))
        .calculated("(totalTestosterone [nmol/L] * 100) / shbg"),
    // Female hormones
    R::new(Id::EstradiolFollicular, "Estradiol (Follicular)", C::FemaleHormones, "pg/mL", D::Context)
        .standard(Range::between(20.0, 150.0)),
    R::new(Id::ProgesteroneLuteal, "Progesterone (Luteal)", C::FemaleHormones, "ng/mL", D::Higher)
        .standard(Range::between(5.0, 20.0))
        .optimal(Range::at_least(10.0)),
    R::new(Id::Amh, "AMH", C::FemaleHormones, "ng/mL", D::Higher),
    // Advanced cardiovascular
    R::new(Id::LpPla2, "Lp-PLA2 (PLAC)", C::Cardiovascular, "ng/mL", D::Lower)
        .standard(Range::at_most(200.0))
        .optimal(Range::at_most(200.0)),
    R::new(Id::Mpo, "MPO (Myeloperoxidase)", C::Cardiovascular, "pmol/L", D::Lower)
        .standard(Range::at_most(480.0))
        .optimal(Range::at_most(420.0)),
    R::new(Id::Tmao, "TMAO", C::Cardiovascular, "µmol/L", D::Lower)
        .standard(Range::at_most(4.6))
        .optimal(Range::at_most(2.5)),
    R::new(Id::NtProBnp, "NT-proBNP", C::Cardiovascular, "pg/mL", D::Lower)
        .standard(Range::at_most(125.0))
        .optimal(Range::at_most(125.0)),
    R::new(Id::GlycA, "GlycA", C::Cardiovascular, "µmol/L", D::Lower)
        .standard(Range::between(300.0, 500.0)),
    // Complete blood count
    R::new(Id::Neutrophils, "Neutrophils (Absolute)", C::Cbc, "×10⁹/L", D::MidRange)
        .standard(Range::between(1.5, 8.0))
        .optimal(Range::between(2.0, 7.0)),
    R::new(Id::Lymphocytes, "Lymphocytes (Absolute)", C::Cbc, "×10⁹/L", D::MidRange)
        .standard(Range::between(1.0, 4.8))
        .optimal(Range::between(1.5, 3.5)),
    R::new(Id::Monocytes, "Monocytes (Absolute)", C::Cbc, "×10⁹/L", D::MidRange)
        .standard(Range::between(0.2, 0.8))
        .optimal(Range::between(0.2, 0.6)),
    R::new(Id::LymphocytePercent, "Lymphocytes %", C::Cbc, "%", D::MidRange)
        .standard(Range::between(20.0, 40.0))
        .optimal(Range::between(25.0, 35.0)),
    R::new(Id::NeutrophilPercent, "Neutrophils %", C::Cbc, "%", D::MidRange)
        .standard(Range::between(40.0, 70.0))
        .optimal(Range::between(45.0, 65.0)),
    R::new(Id::MonocytePercent, "Monocytes %", C::Cbc, "%", D::MidRange)
        .standard(Range::between(2.0, 8.0))
        .optimal(Range::between(3.0, 7.0)),
    R::new(Id::Eosinophils, "Eosinophils", C::Cbc, "×10⁹/L", D::Lower)
        .standard(Range::between(0.0, 0.5))
        .optimal(Range::between(0.0, 0.3)),
    R::new(Id::Basophils, "Basophils", C::Cbc, "×10⁹/L", D::Lower)
        .standard(Range::between(0.0, 0.2))
        .optimal(Range::between(0.0, 0.1)),
    R::new(Id::Mch, "MCH", C::Cbc, "pg", D::MidRange)
        .standard(Range::between(27.0, 33.0))
        .optimal(Range::between(28.0, 32.0)),
    R::new(Id::Mchc, "MCHC", C::Cbc, "g/dL", D::MidRange)
        .standard(Range::between(32.0, 36.0))
        .optimal(Range::between(33.0, 35.0)),
    // Metabolic panel
    R::new(Id::Sodium, "Sodium", C::Metabolic, "mEq/L", D::MidRange)
        .standard(Range::between(136.0, 145.0))
        .optimal(Range::between(138.0, 142.0)),
    R::new(Id::Potassium, "Potassium", C::Metabolic, "mEq/L", D::MidRange)
        .standard(Range::between(3.5, 5.0))
        .optimal(Range::between(4.0, 4.5)),
    R::new(Id::Chloride, "Chloride", C::Metabolic, "mEq/L", D::MidRange)
        .standard(Range::between(98.0, 106.0))
        .optimal(Range::between(100.0, 104.0)),
    R::new(Id::Co2, "CO2 (Bicarbonate)", C::Metabolic, "mEq/L", D::MidRange)
        .standard(Range::between(23.0, 29.0))
        .optimal(Range::between(24.0, 28.0)),
    R::new(Id::Calcium, "Calcium", C::Metabolic, "mg/dL", D::MidRange)
        .standard(Range::between(8.5, 10.5))
        .optimal(Range::between(9.0, 10.0)),
    R::new(Id::CorrectedCalcium, "Corrected Calcium", C::Metabolic, "mg/dL", D::MidRange)
        .standard(Range::between(8.5, 10.5))
        .optimal(Range::between(9.0, 10.0))
        .calculated("Ca + 0.8 × (4.0 − Albumin)"),
    // Liver function
    R::new(Id::TotalProtein, "Total Protein", C::Liver, "g/dL", D::MidRange)
        .standard(Range::between(6.0, 8.3))
        .optimal(Range::between(6.5, 7.5)),
    R::new(Id::Globulin, "Globulin", C::Liver, "g/dL", D::MidRange)
        .standard(Range::between(2.0, 3.5))
        .optimal(Range::between(2.3, 3.0)),
    // Male hormones
    R::new(Id::Estradiol, "Estradiol", C::MaleHormones, "pg/mL", D::MidRange)
        .standard(Range::between(10.0, 40.0))
        .optimal(Range::between(20.0, 30.0)),
];
