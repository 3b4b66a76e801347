use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity tiers, ordered `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeverityTier {
    Low,
    Medium,
    High,
    Critical,
}

impl SeverityTier {
    pub const ALL: [SeverityTier; 4] = [
        SeverityTier::Low,
        SeverityTier::Medium,
        SeverityTier::High,
        SeverityTier::Critical,
    ];
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        };
        write!(f, "{}", s)
    }
}

/// Map a 0-10 score to a tier. Lower bounds are inclusive: 4, 6 and 8.
pub fn classify(score: Decimal) -> SeverityTier {
    if score >= dec!(8) {
        SeverityTier::Critical
    } else if score >= dec!(6) {
        SeverityTier::High
    } else if score >= dec!(4) {
        SeverityTier::Medium
    } else {
        SeverityTier::Low
    }
}

/// Composite score `impact * probability / 10`, in 0.1..=10 for 1..=10 inputs.
pub fn severity_score(impact: u8, probability: u8) -> Decimal {
    Decimal::from(u32::from(impact) * u32::from(probability)) / dec!(10)
}
