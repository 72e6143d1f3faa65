use esg_supplier_portal::portal::compliance::{
    aggregate_fleet_risk, fleet_report, overall_completion, CategoryCatalog, RiskLevel,
};
use esg_supplier_portal::portal::fixtures;

#[test]
fn seed_fleet_partitions_two_two_one() {
    let roster = fixtures::seed_suppliers();
    let summary = aggregate_fleet_risk(&roster);

    assert_eq!(summary.low, 2);
    assert_eq!(summary.medium, 2);
    assert_eq!(summary.high, 1);
    assert_eq!(summary.average_score, Some(68));
}

#[test]
fn dashboard_rows_follow_roster_order() {
    let roster = fixtures::seed_suppliers();
    let dashboard = fleet_report(&roster);

    let names: Vec<&str> = dashboard
        .suppliers
        .iter()
        .map(|row| row.name.as_str())
        .collect();
    assert_eq!(
        names,
        [
            "ABC Manufacturing Ltd.",
            "Delhi Textiles Pvt Ltd",
            "Bangalore Electronics Corp",
            "Chennai Auto Parts Ltd",
            "Kolkata Steel Works",
        ]
    );

    let bangalore = &dashboard.suppliers[2];
    assert_eq!(bangalore.risk_level, RiskLevel::High);
    assert_eq!(bangalore.risk_event_count, 2);
    assert_eq!(bangalore.document_count, 1);
}

#[test]
fn empty_fleet_dashboard_special_cases_the_average() {
    let dashboard = fleet_report(&[]);
    assert_eq!(dashboard.summary.total_suppliers(), 0);
    assert_eq!(dashboard.summary.average_score, None);
    assert!(dashboard.suppliers.is_empty());
}

#[test]
fn seed_completion_is_sparse_but_well_defined() {
    let catalog = CategoryCatalog::standard();

    for supplier in fixtures::seed_suppliers() {
        let overall = overall_completion(&supplier.documents, &catalog);
        assert!(
            (0.0..=1.0).contains(&overall),
            "completion for supplier {} out of range: {overall}",
            supplier.id
        );
    }
}

#[test]
fn dashboard_serializes_with_lowercase_risk_levels() {
    let roster = fixtures::seed_suppliers();
    let value = serde_json::to_value(fleet_report(&roster)).expect("dashboard serializes");

    assert_eq!(value["summary"]["low"], 2);
    assert_eq!(value["suppliers"][2]["risk_level"], "high");
}
