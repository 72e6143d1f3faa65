use serde::Serialize;

use super::super::domain::{RiskLevel, Supplier};

/// Fleet-wide risk posture for the buyer dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FleetRiskSummary {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    /// Mean supplier score rounded to the nearest integer. `None` for an
    /// empty fleet; callers render that case explicitly.
    pub average_score: Option<u8>,
}

impl FleetRiskSummary {
    pub fn total_suppliers(&self) -> usize {
        self.low + self.medium + self.high
    }

    pub fn count_for(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Low => self.low,
            RiskLevel::Medium => self.medium,
            RiskLevel::High => self.high,
        }
    }
}

/// Partition suppliers by their stored risk level and average their scores.
///
/// Counting uses the stored field rather than re-deriving tiers, so a
/// deliberate post-load override survives aggregation.
pub fn aggregate_fleet_risk(suppliers: &[Supplier]) -> FleetRiskSummary {
    let mut summary = FleetRiskSummary::default();

    for supplier in suppliers {
        match supplier.risk_level {
            RiskLevel::Low => summary.low += 1,
            RiskLevel::Medium => summary.medium += 1,
            RiskLevel::High => summary.high += 1,
        }
    }

    if !suppliers.is_empty() {
        let sum: u32 = suppliers
            .iter()
            .map(|supplier| supplier.esg_score.value() as u32)
            .sum();
        let average = (sum as f64 / suppliers.len() as f64).round() as u8;
        summary.average_score = Some(average);
    }

    summary
}
