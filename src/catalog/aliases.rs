//! Lab-report name aliases
//!
//! Keys are lowercase and trimmed. Canonical keys that already match after
//! lowercasing (e.g. `"egfr"`) are left out; the lowercase resolution step
//! handles them.

use crate::models::biomarker::BiomarkerId as Id;

/// Alias name to canonical biomarker
pub static ALIASES: &[(&str, Id)] = &[
    ("e2", Id::Estradiol),
    ("oestradiol", Id::Estradiol),
    ("rbc count", Id::Rbc),
    ("wbc count", Id::Wbc),
    ("hgb", Id::Hemoglobin),
    ("hct", Id::Hematocrit),
    ("plt", Id::Platelets),
    ("ldl-c", Id::Ldl),
    ("hdl-c", Id::Hdl),
    ("total chol", Id::TotalCholesterol),
    ("tc", Id::TotalCholesterol),
    ("tg", Id::Triglycerides),
    ("trigs", Id::Triglycerides),
    ("free t4", Id::FreeT4),
    ("free t3", Id::FreeT3),
    ("t4 free", Id::FreeT4),
    ("t3 free", Id::FreeT3),
    ("sgot", Id::Ast),
    ("sgpt", Id::Alt),
    ("alk phos", Id::AlkalinePhosphatase),
    ("hs-crp", Id::Crp),
    ("hscrp", Id::Crp),
    ("vit d", Id::VitaminD),
    ("25-oh vitamin d", Id::VitaminD),
    ("total cholesterol", Id::TotalCholesterol),
    ("cholesterol, total", Id::TotalCholesterol),
    ("cholesterol", Id::TotalCholesterol),
    ("ldl cholesterol", Id::Ldl),
    ("ldl-cholesterol", Id::Ldl),
    ("ldl chol calc", Id::Ldl),
    ("hdl cholesterol", Id::Hdl),
    ("apolipoprotein b", Id::ApoB),
    ("apob", Id::ApoB),
    ("apo b", Id::ApoB),
    ("lp(a)", Id::Lpa),
    ("lipoprotein(a)", Id::Lpa),
    ("lipoprotein a", Id::Lpa),
    ("vldl cholesterol", Id::Vldl),
    ("glucose, fasting", Id::Glucose),
    ("fasting glucose", Id::Glucose),
    ("glucose, serum", Id::Glucose),
    ("hemoglobin a1c", Id::Hba1c),
    ("glycohemoglobin", Id::Hba1c),
    ("a1c", Id::Hba1c),
    ("insulin", Id::FastingInsulin),
    ("fasting insulin", Id::FastingInsulin),
    ("c-peptide", Id::CPeptide),
    ("c peptide", Id::CPeptide),
    ("aspartate aminotransferase", Id::Ast),
    ("alanine aminotransferase", Id::Alt),
    ("gamma gt", Id::Ggt),
    ("gamma-glutamyl transferase", Id::Ggt),
    ("alkaline phosphatase", Id::AlkalinePhosphatase),
    ("alp", Id::AlkalinePhosphatase),
    ("bilirubin", Id::TotalBilirubin),
    ("total bilirubin", Id::TotalBilirubin),
    ("bilirubin, total", Id::TotalBilirubin),
    ("total protein", Id::TotalProtein),
    ("blood urea nitrogen", Id::Bun),
    ("urea nitrogen", Id::Bun),
    ("gfr", Id::Egfr),
    ("estimated gfr", Id::Egfr),
    ("cystatin c", Id::CystatinC),
    ("uric acid", Id::UricAcid),
    ("red blood cell count", Id::Rbc),
    ("red blood cells", Id::Rbc),
    ("white blood cell count", Id::Wbc),
    ("white blood cells", Id::Wbc),
    ("mean cell volume", Id::Mcv),
    ("mean corpuscular volume", Id::Mcv),
    ("mean cell hemoglobin", Id::Mch),
    ("mean corpuscular hemoglobin", Id::Mch),
    ("mean cell hemoglobin concentration", Id::Mchc),
    ("red cell distribution width", Id::Rdw),
    ("platelet count", Id::Platelets),
    ("mean platelet volume", Id::Mpv),
    ("neutrophil count", Id::Neutrophils),
    ("absolute neutrophils", Id::Neutrophils),
    ("anc", Id::Neutrophils),
    ("neutrophils %", Id::NeutrophilPercent),
    ("neutrophil %", Id::NeutrophilPercent),
    ("lymphocyte count", Id::Lymphocytes),
    ("absolute lymphocytes", Id::Lymphocytes),
    ("alc", Id::Lymphocytes),
    ("lymphocytes %", Id::LymphocytePercent),
    ("lymphocyte %", Id::LymphocytePercent),
    ("monocyte count", Id::Monocytes),
    ("absolute monocytes", Id::Monocytes),
    ("monocytes %", Id::MonocytePercent),
    ("monocyte %", Id::MonocytePercent),
    ("eosinophil count", Id::Eosinophils),
    ("basophil count", Id::Basophils),
    ("iron", Id::SerumIron),
    ("serum iron", Id::SerumIron),
    ("total iron binding capacity", Id::Tibc),
    ("iron saturation", Id::IronSaturation),
    ("% saturation", Id::IronSaturation),
    ("thyroid stimulating hormone", Id::Tsh),
    ("t4, free", Id::FreeT4),
    ("ft4", Id::FreeT4),
    ("t3, free", Id::FreeT3),
    ("ft3", Id::FreeT3),
    ("reverse t3", Id::ReverseT3),
    ("rt3", Id::ReverseT3),
    ("tpo antibodies", Id::TpoAntibodies),
    ("thyroid peroxidase ab", Id::TpoAntibodies),
    ("c-reactive protein", Id::Crp),
    ("hs crp", Id::Crp),
    ("high sensitivity crp", Id::Crp),
    ("sed rate", Id::Esr),
    ("erythrocyte sedimentation rate", Id::Esr),
    ("vitamin d", Id::VitaminD),
    ("vitamin d, 25-oh", Id::VitaminD),
    ("vitamin d,25-oh,total,ia", Id::VitaminD),
    ("25-hydroxyvitamin d", Id::VitaminD),
    ("vitamin b12", Id::VitaminB12),
    ("b12", Id::VitaminB12),
    ("folic acid", Id::Folate),
    ("vitamin b6", Id::VitaminB6),
    ("magnesium", Id::MagnesiumSerum),
    ("magnesium, serum", Id::MagnesiumSerum),
    ("magnesium rbc", Id::MagnesiumRbc),
    ("carbon dioxide", Id::Co2),
    ("bicarbonate", Id::Co2),
    ("testosterone", Id::TotalTestosterone),
    ("total testosterone", Id::TotalTestosterone),
    ("free testosterone", Id::FreeTestosterone),
    ("sex hormone binding globulin", Id::Shbg),
    ("dhea-s", Id::Dheas),
    ("cortisol", Id::CortisolAm),
    ("cortisol, am", Id::CortisolAm),
    ("igf-1", Id::Igf1),
    ("luteinizing hormone", Id::Lh),
    ("follicle stimulating hormone", Id::Fsh),
    ("anti-mullerian hormone", Id::Amh),
    ("iron, total", Id::SerumIron),
    ("iron total", Id::SerumIron),
    ("total iron", Id::SerumIron),
    ("iron binding capacity", Id::Tibc),
    ("iron bind.cap.(tibc)", Id::Tibc),
    ("t3 uptake", Id::T3Uptake),
    ("t4 (thyroxine), total", Id::TotalT4),
    ("t4, total", Id::TotalT4),
    ("thyroxine, total", Id::TotalT4),
    ("t4 thyroxine total", Id::TotalT4),
    ("free t4 index (t7)", Id::FreeT4Index),
    ("free t4 index", Id::FreeT4Index),
    ("t7", Id::FreeT4Index),
    ("testosterone, total, ms", Id::TotalTestosterone),
    ("testosterone total ms", Id::TotalTestosterone),
    ("testosterone, free", Id::FreeTestosterone),
    ("testosterone, bioavailable", Id::BioavailableTestosterone),
    ("bioavailable testosterone", Id::BioavailableTestosterone),
    ("chol/hdlc ratio", Id::TcHdlRatio),
    ("cholesterol/hdl ratio", Id::TcHdlRatio),
    ("ldl/hdl ratio", Id::LdlHdlRatio),
    ("non hdl cholesterol", Id::NonHdlC),
    ("non-hdl cholesterol", Id::NonHdlC),
    ("non hdl-c", Id::NonHdlC),
    ("urea nitrogen (bun)", Id::Bun),
    ("protein, total", Id::TotalProtein),
    ("protein total", Id::TotalProtein),
    ("albumin/globulin ratio", Id::AgRatio),
    ("a/g ratio", Id::AgRatio),
    ("ag ratio", Id::AgRatio),
    ("eag (mg/dl)", Id::EagMgDl),
    ("eag mg/dl", Id::EagMgDl),
    ("eag (mmol/l)", Id::EagMmolL),
    ("eag mmol/l", Id::EagMmolL),
    ("bilirubin, direct", Id::DirectBilirubin),
    ("direct bilirubin", Id::DirectBilirubin),
    ("bilirubin, indirect", Id::IndirectBilirubin),
    ("indirect bilirubin", Id::IndirectBilirubin),
    ("dhea sulfate", Id::Dheas),
    ("dhea-sulfate", Id::Dheas),
    ("cortisol, total", Id::CortisolAm),
    ("cortisol total", Id::CortisolAm),
    ("absolute eosinophils", Id::Eosinophils),
    ("eosinophils absolute", Id::Eosinophils),
    ("absolute basophils", Id::Basophils),
    ("basophils absolute", Id::Basophils),
    ("neutrophils (absolute)", Id::Neutrophils),
    ("lymphocytes (absolute)", Id::Lymphocytes),
    ("monocytes (absolute)", Id::Monocytes),
];
