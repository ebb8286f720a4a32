use biomarker_engine::catalog::resolve::RESOLUTION_CHAIN;
use biomarker_engine::{
    BiomarkerCategory, BiomarkerId, EngineError, ReferenceCatalog, classify_name, normalize_lab_name,
};

#[test]
fn test_every_key_resolves_to_itself() {
    let catalog = ReferenceCatalog::global();
    for id in BiomarkerId::ALL {
        assert_eq!(catalog.resolve(id.as_str()), Some(*id), "key {id}");
        assert_eq!(catalog.lookup(id.as_str()).map(|r| r.id), Some(*id));
    }
}

#[test]
fn test_lab_report_names() {
    let cases = [
        ("LDL-C", BiomarkerId::Ldl),
        ("HGB", BiomarkerId::Hemoglobin),
        ("T4, Total", BiomarkerId::TotalT4),
        ("Cholesterol, Total", BiomarkerId::TotalCholesterol),
        ("Neutrophils (Absolute)", BiomarkerId::Neutrophils),
        ("Hemoglobin A1c", BiomarkerId::Hba1c),
        ("Apolipoprotein B", BiomarkerId::ApoB),
        ("  hs-CRP ", BiomarkerId::Crp),
        ("Vitamin D", BiomarkerId::VitaminD),
        ("fasting insulin", BiomarkerId::FastingInsulin),
    ];
    for (name, expected) in cases {
        assert_eq!(normalize_lab_name(name), Some(expected), "name {name}");
    }
}

#[test]
fn test_unknown_names_are_absent() {
    assert_eq!(normalize_lab_name("unobtainium"), None);
    assert_eq!(normalize_lab_name(""), None);
    assert!(ReferenceCatalog::global().lookup("not a biomarker").is_none());
}

#[test]
fn test_unknown_name_classifies_normal() {
    assert_eq!(classify_name("unobtainium", 1e9).label(), "Normal");
    assert_eq!(classify_name("LDL-C", 65.0).label(), "Optimal");
}

#[test]
fn test_chain_order() {
    let steps: Vec<&str> = RESOLUTION_CHAIN.iter().map(|(step, _)| *step).collect();
    assert_eq!(steps, ["exact", "lowercase", "alias", "display-name", "camel-case"]);
}

#[test]
fn test_from_str() {
    assert_eq!("homaIr".parse::<BiomarkerId>().ok(), Some(BiomarkerId::HomaIr));
    let err = "HOMA-IR".parse::<BiomarkerId>().unwrap_err();
    assert!(matches!(err, EngineError::UnknownBiomarker(name) if name == "HOMA-IR"));
}

#[test]
fn test_catalog_queries() {
    let catalog = ReferenceCatalog::global();
    let lipids = catalog.by_category(BiomarkerCategory::Lipids);
    assert!(lipids.iter().any(|r| r.id == BiomarkerId::Ldl));
    assert!(lipids.iter().all(|r| r.category == BiomarkerCategory::Lipids));
    assert_eq!(BiomarkerCategory::Lipids.display_name(), "Lipid Panel");

    for category in BiomarkerCategory::all_categories() {
        assert!(!catalog.by_category(category).is_empty(), "{category:?} is empty");
    }

    let calculated = catalog.calculated();
    assert!(calculated.iter().all(|r| r.is_calculated && r.formula.is_some()));
    assert!(calculated.iter().any(|r| r.id == BiomarkerId::HomaIr));
}
