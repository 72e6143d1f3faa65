use super::common::{document, score, supplier};
use crate::portal::compliance::catalog::CategoryCatalog;
use crate::portal::compliance::domain::{CategoryId, RiskLevel};
use crate::portal::compliance::report::{fleet_report, supplier_report};

#[test]
fn supplier_report_carries_labels_and_checklist_entries() {
    let catalog = CategoryCatalog::standard();
    let mut subject = supplier("3", "Bangalore Electronics Corp", 45, RiskLevel::High);
    subject.categories.insert(CategoryId::CarbonEmissions, score(35));
    subject.documents.push(document(
        "1",
        CategoryId::CarbonEmissions,
        "GHG Inventory Reports",
    ));

    let report = supplier_report(&catalog, &subject);

    assert_eq!(report.supplier_name, "Bangalore Electronics Corp");
    assert_eq!(report.risk_label, "High Risk");
    assert_eq!(report.location, "Mumbai, Maharashtra, India");
    assert_eq!(report.checklist.len(), 10, "one entry per catalog category");

    let carbon = report
        .checklist
        .iter()
        .find(|entry| entry.category == CategoryId::CarbonEmissions)
        .expect("carbon entry present");
    assert_eq!(carbon.satisfied, 1);
    assert_eq!(carbon.total, 4);
    assert!((carbon.percentage - 25.0).abs() < 1e-9);
    assert!(!carbon.complete);

    // Only scored categories appear in the score listing.
    assert_eq!(report.category_scores.len(), 1);
    assert_eq!(report.category_scores[0].tier, RiskLevel::High);
    assert_eq!(report.documents.len(), 1);
    assert_eq!(report.documents[0].status_label, "Approved");
}

#[test]
fn fleet_report_rows_mirror_the_supplier_snapshot() {
    let fleet = vec![
        supplier("1", "ABC Manufacturing Ltd.", 85, RiskLevel::Low),
        supplier("3", "Bangalore Electronics Corp", 45, RiskLevel::High),
    ];

    let dashboard = fleet_report(&fleet);

    assert_eq!(dashboard.summary.low, 1);
    assert_eq!(dashboard.summary.high, 1);
    assert_eq!(dashboard.summary.average_score, Some(65));
    assert_eq!(dashboard.suppliers.len(), 2);
    assert_eq!(dashboard.suppliers[0].name, "ABC Manufacturing Ltd.");
    assert_eq!(dashboard.suppliers[1].risk_label, "High Risk");
}

#[test]
fn fleet_report_over_no_suppliers_is_well_defined() {
    let dashboard = fleet_report(&[]);
    assert!(dashboard.suppliers.is_empty());
    assert_eq!(dashboard.summary.average_score, None);
}

#[test]
fn reports_serialize_for_the_presentation_layer() {
    let catalog = CategoryCatalog::standard();
    let subject = supplier("1", "ABC Manufacturing Ltd.", 85, RiskLevel::Low);

    let report = supplier_report(&catalog, &subject);
    let value = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(value["supplier_name"], "ABC Manufacturing Ltd.");
    assert_eq!(value["risk_level"], "low");

    let dashboard = fleet_report(&[subject]);
    let value = serde_json::to_value(&dashboard).expect("dashboard serializes");
    assert_eq!(value["summary"]["low"], 1);
}
