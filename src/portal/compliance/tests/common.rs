use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::portal::compliance::catalog::{CategoryCatalog, EsgCategory};
use crate::portal::compliance::domain::{
    CategoryId, Document, DocumentStatus, EsgScore, RiskLevel, Supplier, SupplierLocation,
};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn score(raw: u16) -> EsgScore {
    EsgScore::new(raw).expect("score within range")
}

pub(super) fn document(id: &str, category: CategoryId, document_type: &str) -> Document {
    Document {
        id: id.to_string(),
        name: format!("{document_type}.pdf"),
        category,
        document_type: document_type.to_string(),
        upload_date: date(2024, 1, 10),
        size: "1.0 MB".to_string(),
        status: DocumentStatus::Approved,
    }
}

pub(super) fn supplier(id: &str, name: &str, esg_score: u16, risk_level: RiskLevel) -> Supplier {
    Supplier {
        id: id.to_string(),
        name: name.to_string(),
        location: SupplierLocation {
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            country: "India".to_string(),
            lat: 19.0760,
            lng: 72.8777,
        },
        risk_level,
        esg_score: score(esg_score),
        last_audit: date(2024, 1, 15),
        certifications: Vec::new(),
        categories: BTreeMap::new(),
        risk_events: Vec::new(),
        documents: Vec::new(),
    }
}

/// A one-category catalog with an empty checklist, for the vacuous
/// completion cases.
pub(super) fn empty_checklist_catalog() -> CategoryCatalog {
    CategoryCatalog::new(vec![EsgCategory {
        id: CategoryId::Transparency,
        name: "Reporting and Transparency",
        description: "Willingness to share sustainability data",
        required_documents: Vec::new(),
    }])
}
