//! Supplier compliance domain: typed category catalog, document-checklist
//! scoring, risk tiering, fleet aggregation, and upload intake.

pub mod catalog;
pub mod domain;
pub mod intake;
pub mod report;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use catalog::{CategoryCatalog, EsgCategory};
pub use domain::{
    CategoryId, Document, DocumentStatus, EsgScore, RiskEvent, RiskLevel, RiskSeverity, Supplier,
    SupplierLocation,
};
pub use intake::{record_upload, UploadRequest};
pub use report::{
    fleet_report, supplier_report, FleetDashboard, SupplierComplianceReport, SupplierRow,
};
pub use scoring::{
    aggregate_fleet_risk, completion_for_category, documents_for_category, overall_completion,
    tier_for_score, CategoryCompletion, FleetRiskSummary, ScoringError,
};
