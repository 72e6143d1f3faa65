//! Pure scoring engine: risk tiering, document-checklist completion, and
//! fleet-wide aggregation. Every function takes a snapshot and returns a
//! derived value; there is no state, no I/O, and no logging here.

mod completion;
mod fleet;

pub use completion::{
    completion_for_category, documents_for_category, overall_completion, CategoryCompletion,
};
pub use fleet::{aggregate_fleet_risk, FleetRiskSummary};

use super::domain::{EsgScore, RiskLevel};

/// Contract violations surfaced to callers as typed errors. Empty inputs
/// and zero-sized checklists are edge cases with defined results, never
/// errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("score {0} is outside the 0-100 compliance range")]
    InvalidScore(u16),
    #[error("category '{0}' has no entry in the catalog")]
    UnknownCategory(String),
}

/// Derive the risk tier for a raw score, rejecting out-of-range input.
pub fn tier_for_score(raw: u16) -> Result<RiskLevel, ScoringError> {
    EsgScore::new(raw).map(EsgScore::tier)
}
