use super::domain::CategoryId;
use super::scoring::ScoringError;

/// Reference definition of one ESG dimension: display copy plus the
/// checklist of document types a supplier must upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EsgCategory {
    pub id: CategoryId,
    pub name: &'static str,
    pub description: &'static str,
    pub required_documents: Vec<&'static str>,
}

/// Immutable catalog of ESG categories, loaded once at startup and shared
/// read-only with the scoring engine.
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    categories: Vec<EsgCategory>,
}

impl CategoryCatalog {
    pub fn new(categories: Vec<EsgCategory>) -> Self {
        Self { categories }
    }

    /// The standard ten-dimension catalog used by the portal.
    pub fn standard() -> Self {
        Self::new(standard_categories())
    }

    pub fn categories(&self) -> &[EsgCategory] {
        &self.categories
    }

    /// Explicit error path for ids missing from a non-standard catalog.
    pub fn category(&self, id: CategoryId) -> Result<&EsgCategory, ScoringError> {
        self.categories
            .iter()
            .find(|category| category.id == id)
            .ok_or_else(|| ScoringError::UnknownCategory(id.key().to_owned()))
    }
}

fn standard_categories() -> Vec<EsgCategory> {
    vec![
        EsgCategory {
            id: CategoryId::CarbonEmissions,
            name: "Carbon Emissions & Energy Use",
            description: "Measure and reduce Scope 1, 2, and 3 emissions",
            required_documents: vec![
                "GHG Inventory Reports",
                "Third-party certifications (Carbon Trust)",
                "Utility bills or energy management data",
                "IoT-connected meter data",
            ],
        },
        EsgCategory {
            id: CategoryId::RenewableEnergy,
            name: "Renewable Energy Use",
            description: "Percentage of energy from renewable sources",
            required_documents: vec![
                "Renewable Energy Certificates (RECs)",
                "Utility contracts showing green tariffs",
                "On-site generation data",
            ],
        },
        EsgCategory {
            id: CategoryId::WasteManagement,
            name: "Waste Management",
            description: "Practices for reducing, reusing, recycling waste",
            required_documents: vec![
                "Waste diversion rate reports",
                "Third-party waste management receipts",
                "TRUE Zero Waste certifications",
            ],
        },
        EsgCategory {
            id: CategoryId::WaterStewardship,
            name: "Water Use and Stewardship",
            description: "Managing water consumption and wastewater responsibly",
            required_documents: vec![
                "Water meter readings",
                "Audited water usage reports",
                "Alliance for Water Stewardship certifications",
            ],
        },
        EsgCategory {
            id: CategoryId::SustainableSourcing,
            name: "Sustainable Sourcing of Inputs",
            description: "Using certified raw materials (FSC, organic)",
            required_documents: vec![
                "Certificates from standards organizations",
                "Chain-of-custody documentation",
            ],
        },
        EsgCategory {
            id: CategoryId::LaborPractices,
            name: "Ethical Labor Practices",
            description: "No forced labor, child labor, fair wages",
            required_documents: vec![
                "Social audits (SMETA)",
                "Supplier Code of Conduct signatures",
                "Audit reports from SGS or Intertek",
            ],
        },
        EsgCategory {
            id: CategoryId::EnvironmentalCompliance,
            name: "Environmental Regulations Compliance",
            description: "Meeting local environmental laws",
            required_documents: vec![
                "Government permits",
                "Inspection reports",
                "Legal compliance certificates",
            ],
        },
        EsgCategory {
            id: CategoryId::PackagingSustainability,
            name: "Packaging Sustainability",
            description: "Recyclable, minimal, responsibly sourced packaging",
            required_documents: vec![
                "Packaging specifications",
                "FSC certifications for paper",
                "Packaging sustainability audits",
            ],
        },
        EsgCategory {
            id: CategoryId::Transparency,
            name: "Reporting and Transparency",
            description: "Willingness to share sustainability data",
            required_documents: vec![
                "Participation in Walmart Sustainability Index",
                "Annual sustainability reports",
                "Project Gigaton reporting data",
            ],
        },
        EsgCategory {
            id: CategoryId::Certifications,
            name: "Third-Party Certifications",
            description: "Industry-recognized certifications",
            required_documents: vec![
                "ISO 14001 (Environmental Management)",
                "ISO 50001 (Energy Management)",
                "SA8000 (Social Accountability)",
                "Rainforest Alliance, Fair Trade, Organic",
                "GHG Protocol compliance",
            ],
        },
    ]
}
