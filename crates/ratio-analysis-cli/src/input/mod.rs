pub mod file;
pub mod stdin;

use ratio_analysis_core::dataset::{self, FinancialDataset};

/// Load and validate a dataset file (JSON, or YAML by extension).
pub fn load_dataset(path: &str) -> Result<FinancialDataset, Box<dyn std::error::Error>> {
    let ds: FinancialDataset = file::read_any(path)?;
    dataset::validate(&ds)?;
    tracing::debug!(company = %ds.company, years = ?ds.years(), "loaded dataset from {path}");
    Ok(ds)
}
