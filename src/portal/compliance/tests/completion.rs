use super::common::{document, empty_checklist_catalog};
use crate::portal::compliance::catalog::CategoryCatalog;
use crate::portal::compliance::domain::CategoryId;
use crate::portal::compliance::scoring::{
    completion_for_category, documents_for_category, overall_completion,
};

#[test]
fn carbon_emissions_checklist_counts_one_of_four() {
    let catalog = CategoryCatalog::standard();
    let category = catalog
        .category(CategoryId::CarbonEmissions)
        .expect("standard catalog has carbon emissions");

    let documents = vec![document(
        "1",
        CategoryId::CarbonEmissions,
        "GHG Inventory Reports",
    )];

    let completion = completion_for_category(&documents, category);
    assert_eq!(completion.satisfied, 1);
    assert_eq!(completion.total, 4);
    assert!((completion.ratio() - 0.25).abs() < f64::EPSILON);
    assert!(!completion.is_complete());
}

#[test]
fn duplicate_uploads_of_one_type_satisfy_the_requirement_once() {
    let catalog = CategoryCatalog::standard();
    let category = catalog
        .category(CategoryId::CarbonEmissions)
        .expect("category present");

    let documents = vec![
        document("1", CategoryId::CarbonEmissions, "GHG Inventory Reports"),
        document("2", CategoryId::CarbonEmissions, "GHG Inventory Reports"),
    ];

    let completion = completion_for_category(&documents, category);
    assert_eq!(completion.satisfied, 1);
}

#[test]
fn free_form_document_types_do_not_satisfy_requirements() {
    let catalog = CategoryCatalog::standard();
    let category = catalog
        .category(CategoryId::CarbonEmissions)
        .expect("category present");

    let documents = vec![document(
        "1",
        CategoryId::CarbonEmissions,
        "Quarterly Emissions Memo",
    )];

    assert_eq!(completion_for_category(&documents, category).satisfied, 0);
}

#[test]
fn documents_outside_the_category_are_ignored() {
    let catalog = CategoryCatalog::standard();
    let category = catalog
        .category(CategoryId::RenewableEnergy)
        .expect("category present");

    // Same label text filed under a different category must not count.
    let documents = vec![document(
        "1",
        CategoryId::CarbonEmissions,
        "Renewable Energy Certificates (RECs)",
    )];

    assert_eq!(completion_for_category(&documents, category).satisfied, 0);
}

#[test]
fn category_filter_preserves_upload_order() {
    let documents = vec![
        document("3", CategoryId::WasteManagement, "Waste diversion rate reports"),
        document("1", CategoryId::CarbonEmissions, "GHG Inventory Reports"),
        document("2", CategoryId::WasteManagement, "TRUE Zero Waste certifications"),
    ];

    let filtered = documents_for_category(&documents, CategoryId::WasteManagement);
    let ids: Vec<&str> = filtered.iter().map(|doc| doc.id.as_str()).collect();
    assert_eq!(ids, ["3", "2"]);
}

#[test]
fn zero_requirement_category_is_vacuously_complete() {
    let catalog = empty_checklist_catalog();
    let category = catalog
        .category(CategoryId::Transparency)
        .expect("category present");

    let completion = completion_for_category(&[], category);
    assert_eq!(completion.satisfied, 0);
    assert_eq!(completion.total, 0);
    assert!((completion.ratio() - 1.0).abs() < f64::EPSILON);
    assert!(completion.is_complete());
}

#[test]
fn overall_completion_weights_categories_equally() {
    let catalog = CategoryCatalog::standard();

    // One of four carbon documents: that category contributes 0.25; the
    // other nine contribute 0. Mean across ten categories = 0.025.
    let documents = vec![document(
        "1",
        CategoryId::CarbonEmissions,
        "GHG Inventory Reports",
    )];

    let overall = overall_completion(&documents, &catalog);
    assert!((overall - 0.025).abs() < 1e-9);
}

#[test]
fn overall_completion_of_empty_catalog_is_vacuously_complete() {
    let catalog = CategoryCatalog::new(Vec::new());
    assert!((overall_completion(&[], &catalog) - 1.0).abs() < f64::EPSILON);
}
