//! Read-only table of per-year statement figures.

pub mod case_data;
pub mod comparison;
pub mod integrity;
pub mod statements;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::types::FiscalYear;
use crate::{RatioAnalysisError, RatioAnalysisResult};

pub use statements::StatementFigures;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialDataset {
    pub company: String,
    #[serde(default)]
    pub units: String,
    pub years: BTreeMap<FiscalYear, StatementFigures>,
}

impl FinancialDataset {
    /// Look up one year's figures; unknown years are a `MissingYear` error.
    pub fn figures(&self, year: FiscalYear) -> RatioAnalysisResult<&StatementFigures> {
        self.years.get(&year).ok_or_else(|| {
            warn!(year, company = %self.company, "requested year not in dataset");
            RatioAnalysisError::MissingYear { year }
        })
    }

    /// Available years in ascending order.
    pub fn years(&self) -> Vec<FiscalYear> {
        self.years.keys().copied().collect()
    }

    pub fn latest_year(&self) -> Option<FiscalYear> {
        self.years.keys().next_back().copied()
    }

    /// Parse a dataset from JSON and validate it.
    pub fn from_json(json: &str) -> RatioAnalysisResult<Self> {
        let dataset: FinancialDataset = serde_json::from_str(json)?;
        validate(&dataset)?;
        Ok(dataset)
    }
}

/// Reject structurally unusable datasets.
///
/// Sub-total mismatches are not rejected here; see [`integrity::check_integrity`].
pub fn validate(dataset: &FinancialDataset) -> RatioAnalysisResult<()> {
    if dataset.years.is_empty() {
        return Err(RatioAnalysisError::InsufficientData(format!(
            "dataset '{}' contains no fiscal years",
            dataset.company
        )));
    }
    for (year, figures) in &dataset.years {
        for (field, value) in figures.non_negative_fields() {
            if value < Decimal::ZERO {
                return Err(RatioAnalysisError::InvalidInput {
                    field: format!("{year}.{field}"),
                    reason: "must not be negative".into(),
                });
            }
        }
    }
    Ok(())
}
