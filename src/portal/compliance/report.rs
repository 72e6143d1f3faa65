use chrono::NaiveDate;
use serde::Serialize;

use super::catalog::CategoryCatalog;
use super::domain::{
    CategoryId, Document, RiskEvent, RiskLevel, RiskSeverity, Supplier,
};
use super::scoring::{
    aggregate_fleet_risk, completion_for_category, overall_completion, FleetRiskSummary,
};

/// Per-category numeric score with its derived tier.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryScoreEntry {
    pub category: CategoryId,
    pub category_label: String,
    pub score: u8,
    pub tier: RiskLevel,
}

/// Per-category checklist progress.
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistEntry {
    pub category: CategoryId,
    pub category_label: String,
    pub satisfied: usize,
    pub total: usize,
    pub percentage: f64,
    pub complete: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentView {
    pub id: String,
    pub name: String,
    pub category: CategoryId,
    pub document_type: String,
    pub upload_date: NaiveDate,
    pub size: String,
    pub status_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskEventView {
    pub id: String,
    pub event_type: String,
    pub severity: RiskSeverity,
    pub severity_label: String,
    pub date: NaiveDate,
    pub description: String,
}

/// Everything the supplier-facing profile page needs for one supplier.
#[derive(Debug, Clone, Serialize)]
pub struct SupplierComplianceReport {
    pub supplier_id: String,
    pub supplier_name: String,
    pub location: String,
    pub esg_score: u8,
    pub risk_level: RiskLevel,
    pub risk_label: String,
    pub last_audit: NaiveDate,
    pub certifications: Vec<String>,
    pub category_scores: Vec<CategoryScoreEntry>,
    pub checklist: Vec<ChecklistEntry>,
    pub overall_completion_percent: f64,
    pub documents: Vec<DocumentView>,
    pub risk_events: Vec<RiskEventView>,
}

/// One row of the buyer dashboard's supplier table.
#[derive(Debug, Clone, Serialize)]
pub struct SupplierRow {
    pub id: String,
    pub name: String,
    pub location: String,
    pub esg_score: u8,
    pub risk_level: RiskLevel,
    pub risk_label: String,
    pub document_count: usize,
    pub risk_event_count: usize,
}

/// Fleet aggregates plus per-supplier rows for the buyer dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct FleetDashboard {
    pub summary: FleetRiskSummary,
    pub suppliers: Vec<SupplierRow>,
}

/// Build the full compliance view for one supplier against a catalog.
pub fn supplier_report(catalog: &CategoryCatalog, supplier: &Supplier) -> SupplierComplianceReport {
    let category_scores = catalog
        .categories()
        .iter()
        .filter_map(|category| {
            supplier
                .categories
                .get(&category.id)
                .map(|score| CategoryScoreEntry {
                    category: category.id,
                    category_label: category.name.to_string(),
                    score: score.value(),
                    tier: score.tier(),
                })
        })
        .collect();

    let checklist = catalog
        .categories()
        .iter()
        .map(|category| {
            let completion = completion_for_category(&supplier.documents, category);
            ChecklistEntry {
                category: category.id,
                category_label: category.name.to_string(),
                satisfied: completion.satisfied,
                total: completion.total,
                percentage: completion.percentage(),
                complete: completion.is_complete(),
            }
        })
        .collect();

    SupplierComplianceReport {
        supplier_id: supplier.id.clone(),
        supplier_name: supplier.name.clone(),
        location: supplier.location.summary(),
        esg_score: supplier.esg_score.value(),
        risk_level: supplier.risk_level,
        risk_label: supplier.risk_level.label().to_string(),
        last_audit: supplier.last_audit,
        certifications: supplier.certifications.clone(),
        category_scores,
        checklist,
        overall_completion_percent: overall_completion(&supplier.documents, catalog) * 100.0,
        documents: supplier.documents.iter().map(document_view).collect(),
        risk_events: supplier.risk_events.iter().map(risk_event_view).collect(),
    }
}

/// Build the buyer dashboard from a supplier snapshot.
pub fn fleet_report(suppliers: &[Supplier]) -> FleetDashboard {
    let rows = suppliers
        .iter()
        .map(|supplier| SupplierRow {
            id: supplier.id.clone(),
            name: supplier.name.clone(),
            location: supplier.location.summary(),
            esg_score: supplier.esg_score.value(),
            risk_level: supplier.risk_level,
            risk_label: supplier.risk_level.label().to_string(),
            document_count: supplier.documents.len(),
            risk_event_count: supplier.risk_events.len(),
        })
        .collect();

    FleetDashboard {
        summary: aggregate_fleet_risk(suppliers),
        suppliers: rows,
    }
}

fn document_view(document: &Document) -> DocumentView {
    DocumentView {
        id: document.id.clone(),
        name: document.name.clone(),
        category: document.category,
        document_type: document.document_type.clone(),
        upload_date: document.upload_date,
        size: document.size.clone(),
        status_label: document.status.label().to_string(),
    }
}

fn risk_event_view(event: &RiskEvent) -> RiskEventView {
    RiskEventView {
        id: event.id.clone(),
        event_type: event.event_type.clone(),
        severity: event.severity,
        severity_label: event.severity.label().to_string(),
        date: event.date,
        description: event.description.clone(),
    }
}
