//! Risk evaluation over the static catalogue.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalogue::{RiskCategory, RiskScenario, CATALOGUE};
use super::severity::{classify, severity_score, SeverityTier};
use crate::ratios::{compute_trend, RatioName, RatioSet, TrendValue};

/// Scatter position of a scenario on the risk matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Probability
    pub x: u8,
    /// Impact
    pub y: u8,
}

/// Current/previous values of a ratio a scenario refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioReading {
    pub ratio: RatioName,
    pub current: Option<Decimal>,
    pub previous: Option<Decimal>,
    pub change_pct: TrendValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub id: u32,
    pub category: RiskCategory,
    pub title: String,
    pub description: String,
    pub impact: u8,
    pub impact_level: SeverityTier,
    pub probability: u8,
    pub probability_level: SeverityTier,
    pub score: Decimal,
    pub severity: SeverityTier,
    pub factors: Vec<String>,
    pub mitigation: Vec<String>,
    pub related_ratios: Vec<RatioName>,
    pub ratio_readings: Vec<RatioReading>,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
    pub critical: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub assessments: Vec<RiskAssessment>,
    pub highest_severity: Option<SeverityTier>,
    pub tier_counts: TierCounts,
}

fn assess(scenario: &RiskScenario, current: &RatioSet, previous: &RatioSet) -> RiskAssessment {
    let score = severity_score(scenario.impact, scenario.probability);
    let ratio_readings = scenario
        .related_ratios
        .iter()
        .map(|&ratio| RatioReading {
            ratio,
            current: current.get(ratio),
            previous: previous.get(ratio),
            change_pct: compute_trend(current, previous, ratio),
        })
        .collect();

    RiskAssessment {
        id: scenario.id,
        category: scenario.category,
        title: scenario.title.to_string(),
        description: scenario.description.to_string(),
        impact: scenario.impact,
        impact_level: classify(Decimal::from(scenario.impact)),
        probability: scenario.probability,
        probability_level: classify(Decimal::from(scenario.probability)),
        score,
        severity: classify(score),
        factors: scenario.factors.iter().map(|s| s.to_string()).collect(),
        mitigation: scenario.mitigation.iter().map(|s| s.to_string()).collect(),
        related_ratios: scenario.related_ratios.to_vec(),
        ratio_readings,
        coordinates: Coordinates {
            x: scenario.probability,
            y: scenario.impact,
        },
    }
}

/// Assess every catalogue scenario, in catalogue order.
///
/// The ratio sets only populate `ratio_readings`; tiers and scores come from
/// the authored impact and probability.
pub fn evaluate_risks(current: &RatioSet, previous: &RatioSet) -> Vec<RiskAssessment> {
    let assessments: Vec<RiskAssessment> = CATALOGUE
        .iter()
        .map(|scenario| assess(scenario, current, previous))
        .collect();
    debug!(count = assessments.len(), "evaluated risk catalogue");
    assessments
}

/// Highest tier and per-tier counts over a set of assessments.
pub fn summarize(assessments: Vec<RiskAssessment>) -> RiskProfile {
    let mut tier_counts = TierCounts::default();
    for a in &assessments {
        match a.severity {
            SeverityTier::Low => tier_counts.low += 1,
            SeverityTier::Medium => tier_counts.medium += 1,
            SeverityTier::High => tier_counts.high += 1,
            SeverityTier::Critical => tier_counts.critical += 1,
        }
    }
    let highest_severity = assessments.iter().map(|a| a.severity).max();
    RiskProfile {
        assessments,
        highest_severity,
        tier_counts,
    }
}
