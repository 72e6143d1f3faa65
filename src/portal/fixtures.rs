//! Seed supplier roster and JSON fixture loading.
//!
//! The seed mirrors the pilot roster the portal demos against. In a real
//! deployment the same shapes would arrive from an API or database layer;
//! the engine only ever sees the loaded snapshot.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use super::compliance::domain::{
    CategoryId, Document, DocumentStatus, EsgScore, RiskEvent, RiskLevel, RiskSeverity, Supplier,
    SupplierLocation,
};

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to read supplier fixture file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse supplier fixtures: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(
        "supplier '{id}' stores risk level '{stored:?}' but score {score} derives '{derived:?}'"
    )]
    RiskLevelMismatch {
        id: String,
        stored: RiskLevel,
        score: u8,
        derived: RiskLevel,
    },
}

/// Load a supplier snapshot from a JSON fixture file and validate it.
pub fn load_suppliers(path: &Path) -> Result<Vec<Supplier>, FixtureError> {
    let raw = fs::read_to_string(path)?;
    let suppliers: Vec<Supplier> = serde_json::from_str(&raw)?;
    validate_suppliers(&suppliers)?;
    Ok(suppliers)
}

/// Enforce the tiering invariant: a stored risk level must agree with the
/// tier derived from the score. Score ranges are already guaranteed by the
/// `EsgScore` type during deserialization.
pub fn validate_suppliers(suppliers: &[Supplier]) -> Result<(), FixtureError> {
    for supplier in suppliers {
        if !supplier.risk_level_consistent() {
            return Err(FixtureError::RiskLevelMismatch {
                id: supplier.id.clone(),
                stored: supplier.risk_level,
                score: supplier.esg_score.value(),
                derived: supplier.esg_score.tier(),
            });
        }
    }
    Ok(())
}

/// The five pilot suppliers with their locations, scores, incident history,
/// and uploaded documents.
pub fn seed_suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: "1".to_string(),
            name: "ABC Manufacturing Ltd.".to_string(),
            location: location("Mumbai", "Maharashtra", "India", 19.0760, 72.8777),
            risk_level: RiskLevel::Low,
            esg_score: score(85),
            last_audit: date(2024, 1, 15),
            certifications: strings(&["ISO 14001", "SA8000", "Fair Trade"]),
            categories: category_scores(&[
                (CategoryId::CarbonEmissions, 88),
                (CategoryId::RenewableEnergy, 82),
                (CategoryId::WasteManagement, 90),
                (CategoryId::WaterStewardship, 85),
                (CategoryId::SustainableSourcing, 87),
                (CategoryId::LaborPractices, 92),
                (CategoryId::EnvironmentalCompliance, 89),
                (CategoryId::PackagingSustainability, 83),
                (CategoryId::Transparency, 78),
                (CategoryId::Certifications, 95),
            ]),
            risk_events: vec![RiskEvent {
                id: "1".to_string(),
                event_type: "Environmental Compliance".to_string(),
                severity: RiskSeverity::Low,
                date: date(2024, 2, 1),
                description: "Minor wastewater treatment adjustment required".to_string(),
            }],
            documents: vec![
                Document {
                    id: "1".to_string(),
                    name: "Carbon Footprint Report 2024.pdf".to_string(),
                    category: CategoryId::CarbonEmissions,
                    document_type: "GHG Inventory Reports".to_string(),
                    upload_date: date(2024, 1, 10),
                    size: "2.3 MB".to_string(),
                    status: DocumentStatus::Approved,
                },
                Document {
                    id: "2".to_string(),
                    name: "Labor Audit Certificate.pdf".to_string(),
                    category: CategoryId::LaborPractices,
                    document_type: "Social audits (SMETA)".to_string(),
                    upload_date: date(2024, 1, 8),
                    size: "1.8 MB".to_string(),
                    status: DocumentStatus::Approved,
                },
            ],
        },
        Supplier {
            id: "2".to_string(),
            name: "Delhi Textiles Pvt Ltd".to_string(),
            location: location("New Delhi", "Delhi", "India", 28.6139, 77.2090),
            risk_level: RiskLevel::Medium,
            esg_score: score(68),
            last_audit: date(2023, 11, 20),
            certifications: strings(&["ISO 14001"]),
            categories: category_scores(&[
                (CategoryId::CarbonEmissions, 65),
                (CategoryId::RenewableEnergy, 45),
                (CategoryId::WasteManagement, 72),
                (CategoryId::WaterStewardship, 68),
                (CategoryId::SustainableSourcing, 70),
                (CategoryId::LaborPractices, 75),
                (CategoryId::EnvironmentalCompliance, 82),
                (CategoryId::PackagingSustainability, 60),
                (CategoryId::Transparency, 58),
                (CategoryId::Certifications, 65),
            ]),
            risk_events: vec![RiskEvent {
                id: "2".to_string(),
                event_type: "Labor Practices".to_string(),
                severity: RiskSeverity::Medium,
                date: date(2024, 1, 20),
                description: "Overtime hours exceeded recommended limits".to_string(),
            }],
            documents: vec![Document {
                id: "3".to_string(),
                name: "Environmental Impact Assessment.pdf".to_string(),
                category: CategoryId::EnvironmentalCompliance,
                // Free-form type: counts as an upload but satisfies no
                // checklist requirement.
                document_type: "Environmental Impact Assessment".to_string(),
                upload_date: date(2023, 12, 15),
                size: "4.2 MB".to_string(),
                status: DocumentStatus::Pending,
            }],
        },
        Supplier {
            id: "3".to_string(),
            name: "Bangalore Electronics Corp".to_string(),
            location: location("Bangalore", "Karnataka", "India", 12.9716, 77.5946),
            risk_level: RiskLevel::High,
            esg_score: score(45),
            last_audit: date(2023, 8, 10),
            certifications: Vec::new(),
            categories: category_scores(&[
                (CategoryId::CarbonEmissions, 35),
                (CategoryId::RenewableEnergy, 25),
                (CategoryId::WasteManagement, 50),
                (CategoryId::WaterStewardship, 42),
                (CategoryId::SustainableSourcing, 38),
                (CategoryId::LaborPractices, 55),
                (CategoryId::EnvironmentalCompliance, 60),
                (CategoryId::PackagingSustainability, 45),
                (CategoryId::Transparency, 30),
                (CategoryId::Certifications, 20),
            ]),
            risk_events: vec![
                RiskEvent {
                    id: "3".to_string(),
                    event_type: "Environmental Violation".to_string(),
                    severity: RiskSeverity::High,
                    date: date(2024, 1, 25),
                    description: "Exceeded permitted emission levels".to_string(),
                },
                RiskEvent {
                    id: "4".to_string(),
                    event_type: "Labor Compliance".to_string(),
                    severity: RiskSeverity::High,
                    date: date(2024, 1, 18),
                    description: "Audit found workplace safety violations".to_string(),
                },
            ],
            documents: vec![Document {
                id: "4".to_string(),
                name: "Emission Control Report.pdf".to_string(),
                category: CategoryId::CarbonEmissions,
                document_type: "Emission Control Report".to_string(),
                upload_date: date(2023, 10, 1),
                size: "1.1 MB".to_string(),
                status: DocumentStatus::Rejected,
            }],
        },
        Supplier {
            id: "4".to_string(),
            name: "Chennai Auto Parts Ltd".to_string(),
            location: location("Chennai", "Tamil Nadu", "India", 13.0827, 80.2707),
            risk_level: RiskLevel::Low,
            esg_score: score(82),
            last_audit: date(2024, 2, 1),
            certifications: strings(&["ISO 14001", "ISO 50001"]),
            categories: category_scores(&[
                (CategoryId::CarbonEmissions, 80),
                (CategoryId::RenewableEnergy, 75),
                (CategoryId::WasteManagement, 85),
                (CategoryId::WaterStewardship, 78),
                (CategoryId::SustainableSourcing, 82),
                (CategoryId::LaborPractices, 88),
                (CategoryId::EnvironmentalCompliance, 90),
                (CategoryId::PackagingSustainability, 70),
                (CategoryId::Transparency, 72),
                (CategoryId::Certifications, 85),
            ]),
            risk_events: Vec::new(),
            documents: vec![Document {
                id: "5".to_string(),
                name: "Renewable Energy Certificates.pdf".to_string(),
                category: CategoryId::RenewableEnergy,
                document_type: "Renewable Energy Certificates (RECs)".to_string(),
                upload_date: date(2024, 1, 20),
                size: "3.1 MB".to_string(),
                status: DocumentStatus::Approved,
            }],
        },
        Supplier {
            id: "5".to_string(),
            name: "Kolkata Steel Works".to_string(),
            location: location("Kolkata", "West Bengal", "India", 22.5726, 88.3639),
            risk_level: RiskLevel::Medium,
            esg_score: score(62),
            last_audit: date(2023, 12, 5),
            certifications: strings(&["ISO 14001"]),
            categories: category_scores(&[
                (CategoryId::CarbonEmissions, 55),
                (CategoryId::RenewableEnergy, 40),
                (CategoryId::WasteManagement, 68),
                (CategoryId::WaterStewardship, 60),
                (CategoryId::SustainableSourcing, 65),
                (CategoryId::LaborPractices, 70),
                (CategoryId::EnvironmentalCompliance, 75),
                (CategoryId::PackagingSustainability, 58),
                (CategoryId::Transparency, 65),
                (CategoryId::Certifications, 60),
            ]),
            risk_events: vec![RiskEvent {
                id: "5".to_string(),
                event_type: "Water Usage".to_string(),
                severity: RiskSeverity::Medium,
                date: date(2024, 1, 12),
                description: "Water consumption above sustainable levels".to_string(),
            }],
            documents: vec![Document {
                id: "6".to_string(),
                name: "Water Usage Report.pdf".to_string(),
                category: CategoryId::WaterStewardship,
                document_type: "Audited water usage reports".to_string(),
                upload_date: date(2023, 11, 30),
                size: "2.0 MB".to_string(),
                status: DocumentStatus::Pending,
            }],
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

fn score(raw: u16) -> EsgScore {
    EsgScore::new(raw).expect("fixture score within range")
}

fn location(city: &str, state: &str, country: &str, lat: f64, lng: f64) -> SupplierLocation {
    SupplierLocation {
        city: city.to_string(),
        state: state.to_string(),
        country: country.to_string(),
        lat,
        lng,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn category_scores(entries: &[(CategoryId, u16)]) -> BTreeMap<CategoryId, EsgScore> {
    entries.iter().map(|(id, raw)| (*id, score(*raw))).collect()
}
