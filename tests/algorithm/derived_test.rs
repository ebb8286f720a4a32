use biomarker_engine::algorithm::derived::formulas::FORMULAS;
use biomarker_engine::{BiomarkerId as Id, BiomarkerSnapshot, CalculatedBiomarker, compute_derived, merge_derived};

fn value_of(calculated: &[CalculatedBiomarker], id: Id) -> Option<f64> {
    calculated.iter().find(|c| c.id == id).map(|c| c.value)
}

#[test]
fn test_empty_snapshot_has_no_derived_values() {
    assert!(compute_derived(&BiomarkerSnapshot::new()).is_empty());
}

#[test]
fn test_formula_table_covers_calculated_catalog_entries() {
    for reference in biomarker_engine::ReferenceCatalog::global().calculated() {
        assert!(
            FORMULAS.iter().any(|f| f.id == reference.id),
            "{} has no formula",
            reference.id
        );
    }
    assert!(FORMULAS.iter().all(|f| !f.inputs.is_empty()));
    let mut ids: Vec<Id> = FORMULAS.iter().map(|f| f.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), FORMULAS.len(), "duplicate formula id");
    assert!(FORMULAS.len() >= 25);
}

#[test]
fn test_metabolic_and_kidney_formulas() {
    let snapshot = BiomarkerSnapshot::from_values([
        (Id::Triglycerides, 150.0),
        (Id::Glucose, 100.0),
        (Id::Bun, 14.0),
        (Id::Creatinine, 0.9),
        (Id::Calcium, 9.0),
        (Id::Albumin, 3.5),
    ]);
    let calculated = compute_derived(&snapshot);

    assert_eq!(value_of(&calculated, Id::TygIndex), Some(8.92));
    assert_eq!(value_of(&calculated, Id::BunCreatinineRatio), Some(15.6));
    assert_eq!(value_of(&calculated, Id::CorrectedCalcium), Some(9.4));
}

#[test]
fn test_absolute_counts_win_over_percentages() {
    let snapshot = BiomarkerSnapshot::from_values([
        (Id::Wbc, 10.0),
        (Id::Neutrophils, 3.0),
        (Id::Lymphocytes, 1.5),
        (Id::NeutrophilPercent, 50.0),
        (Id::LymphocytePercent, 50.0),
    ]);
    assert_eq!(value_of(&compute_derived(&snapshot), Id::Nlr), Some(2.0));
}

#[test]
fn test_reported_zero_absolute_count_is_missing() {
    let snapshot = BiomarkerSnapshot::from_values([
        (Id::Wbc, 10.0),
        (Id::Neutrophils, 3.0),
        (Id::Lymphocytes, 0.0),
        (Id::LymphocytePercent, 30.0),
    ]);
    assert_eq!(value_of(&compute_derived(&snapshot), Id::Nlr), None);
}

#[test]
fn test_zero_input_counts_as_missing() {
    let snapshot = BiomarkerSnapshot::from_values([(Id::TotalCholesterol, 200.0), (Id::Hdl, 0.0)]);
    let calculated = compute_derived(&snapshot);
    assert_eq!(value_of(&calculated, Id::TcHdlRatio), None);
    assert_eq!(value_of(&calculated, Id::NonHdlC), None);
}

#[test]
fn test_merge_never_overwrites_measured() {
    let mut snapshot =
        BiomarkerSnapshot::from_values([(Id::Ldl, 1.0), (Id::Hdl, 1.0), (Id::LdlHdlRatio, 2.5)]);
    let calculated = compute_derived(&snapshot);
    assert_eq!(value_of(&calculated, Id::LdlHdlRatio), Some(1.0));

    merge_derived(&mut snapshot, &calculated);
    assert_eq!(snapshot.get(Id::LdlHdlRatio), Some(2.5));
    assert!(snapshot.is_measured(Id::LdlHdlRatio));
}

#[test]
fn test_merge_is_idempotent() {
    let mut snapshot = BiomarkerSnapshot::from_values([(Id::Ast, 30.0), (Id::Alt, 20.0)]);
    let calculated = compute_derived(&snapshot);
    merge_derived(&mut snapshot, &calculated);
    let once = snapshot.clone();
    merge_derived(&mut snapshot, &calculated);
    assert_eq!(snapshot, once);
}

#[test]
fn test_calculated_record_serializes_camel_case() {
    let snapshot = BiomarkerSnapshot::from_values([(Id::FastingInsulin, 10.0), (Id::Glucose, 90.0)]);
    let calculated = compute_derived(&snapshot);
    let homa = calculated.iter().find(|c| c.id == Id::HomaIr).unwrap();

    let json = serde_json::to_value(homa).unwrap();
    assert_eq!(json["id"], "homaIr");
    assert_eq!(json["value"], 2.22);
    assert_eq!(json["inputs"], serde_json::json!(["fastingInsulin", "glucose"]));
}
