use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::scoring::ScoringError;

/// Closed set of ESG compliance dimensions tracked by the portal.
///
/// Wire keys use the camelCase identifiers carried by supplier fixture
/// files, so score maps and document records deserialize directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryId {
    CarbonEmissions,
    RenewableEnergy,
    WasteManagement,
    WaterStewardship,
    SustainableSourcing,
    LaborPractices,
    EnvironmentalCompliance,
    PackagingSustainability,
    Transparency,
    Certifications,
}

impl CategoryId {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::CarbonEmissions,
            Self::RenewableEnergy,
            Self::WasteManagement,
            Self::WaterStewardship,
            Self::SustainableSourcing,
            Self::LaborPractices,
            Self::EnvironmentalCompliance,
            Self::PackagingSustainability,
            Self::Transparency,
            Self::Certifications,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::CarbonEmissions => "carbonEmissions",
            Self::RenewableEnergy => "renewableEnergy",
            Self::WasteManagement => "wasteManagement",
            Self::WaterStewardship => "waterStewardship",
            Self::SustainableSourcing => "sustainableSourcing",
            Self::LaborPractices => "laborPractices",
            Self::EnvironmentalCompliance => "environmentalCompliance",
            Self::PackagingSustainability => "packagingSustainability",
            Self::Transparency => "transparency",
            Self::Certifications => "certifications",
        }
    }

    /// Validated lookup for string identifiers arriving from outside the
    /// typed model (CLI arguments, legacy data).
    pub fn from_key(raw: &str) -> Result<Self, ScoringError> {
        Self::ordered()
            .into_iter()
            .find(|id| id.key() == raw)
            .ok_or_else(|| ScoringError::UnknownCategory(raw.to_owned()))
    }
}

/// Compliance score validated into the 0-100 range at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct EsgScore(u8);

impl EsgScore {
    pub fn new(raw: u16) -> Result<Self, ScoringError> {
        if raw > 100 {
            return Err(ScoringError::InvalidScore(raw));
        }
        Ok(Self(raw as u8))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Risk tier derived from the score: 80+ low, 60-79 medium, below 60 high.
    pub const fn tier(self) -> RiskLevel {
        if self.0 >= 80 {
            RiskLevel::Low
        } else if self.0 >= 60 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

impl TryFrom<u16> for EsgScore {
    type Error = ScoringError;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<EsgScore> for u16 {
    fn from(score: EsgScore) -> Self {
        score.0 as u16
    }
}

/// Coarse supplier risk classification shown on the buyer dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }
}

/// Severity of a recorded risk event. Same wire spelling as [`RiskLevel`]
/// but a distinct concept: events grade incidents, not suppliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskSeverity {
    Low,
    Medium,
    High,
}

impl RiskSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Review state of an uploaded document. New uploads always start
/// [`DocumentStatus::Pending`]; approve/reject transitions are applied by
/// an external reviewer, never by the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Approved,
    Pending,
    Rejected,
}

impl DocumentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Pending => "Pending Review",
            Self::Rejected => "Rejected",
        }
    }
}

/// An uploaded compliance document.
///
/// `document_type` is free-form; it satisfies a catalog requirement only
/// when it matches one of the category's required labels exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    pub category: CategoryId,
    pub document_type: String,
    pub upload_date: NaiveDate,
    pub size: String,
    pub status: DocumentStatus,
}

/// Immutable incident record in a supplier's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub severity: RiskSeverity,
    pub date: NaiveDate,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierLocation {
    pub city: String,
    pub state: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
}

impl SupplierLocation {
    pub fn summary(&self) -> String {
        format!("{}, {}, {}", self.city, self.state, self.country)
    }
}

/// Full supplier record: identity, stored risk posture, per-category
/// scores, incident history, and uploaded documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub location: SupplierLocation,
    pub risk_level: RiskLevel,
    pub esg_score: EsgScore,
    pub last_audit: NaiveDate,
    pub certifications: Vec<String>,
    pub categories: BTreeMap<CategoryId, EsgScore>,
    pub risk_events: Vec<RiskEvent>,
    pub documents: Vec<Document>,
}

impl Supplier {
    /// Whether the stored risk level agrees with the score-derived tier.
    /// Fixture loading rejects records where this is false; a caller that
    /// overrides the tier after loading owns that decision.
    pub fn risk_level_consistent(&self) -> bool {
        self.risk_level == self.esg_score.tier()
    }
}
