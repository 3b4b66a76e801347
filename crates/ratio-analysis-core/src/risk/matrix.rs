//! Background grid for the impact/probability risk matrix.
//!
//! Cells are banded on the raw product `z = probability * impact` with
//! thresholds 64/36/16, not by [`classify`] on `z / 10`. On that scale the
//! grid's High band starts at 3.6 and its Critical band at 6.4, so a scenario
//! dot and the cell under it can disagree.
//!
//! [`classify`]: super::severity::classify

use serde::{Deserialize, Serialize};

use super::severity::SeverityTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskMatrixCell {
    /// Probability, 1..=10
    pub x: u8,
    /// Impact, 1..=10
    pub y: u8,
    pub z: u32,
    pub band: SeverityTier,
}

/// Colour band of a grid cell from its raw product.
pub fn grid_band(z: u32) -> SeverityTier {
    if z >= 64 {
        SeverityTier::Critical
    } else if z >= 36 {
        SeverityTier::High
    } else if z >= 16 {
        SeverityTier::Medium
    } else {
        SeverityTier::Low
    }
}

/// All 100 cells, impact-major then probability.
pub fn risk_matrix() -> Vec<RiskMatrixCell> {
    let mut cells = Vec::with_capacity(100);
    for impact in 1..=10u8 {
        for probability in 1..=10u8 {
            let z = u32::from(impact) * u32::from(probability);
            cells.push(RiskMatrixCell {
                x: probability,
                y: impact,
                z,
                band: grid_band(z),
            });
        }
    }
    cells
}
