pub mod ratios;
pub mod report;
pub mod risk;

use clap::Args;

use ratio_analysis_core::analysis::AnalysisInput;

use crate::input;

/// Year selection and data source shared by every analysis command
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Path to a JSON analysis request (dataset, year, previous_year); overrides the flags below
    #[arg(long)]
    pub input: Option<String>,

    /// Path to a JSON or YAML dataset file (defaults to the built-in DIA case)
    #[arg(long)]
    pub dataset: Option<String>,

    /// Fiscal year to analyse (defaults to the latest year in the dataset)
    #[arg(long)]
    pub year: Option<i32>,

    /// Comparison year (defaults to the year before --year)
    #[arg(long)]
    pub previous_year: Option<i32>,
}

/// Resolve the analysis request from a request file, piped stdin, or flags.
pub fn build_input(sel: &SelectionArgs) -> Result<AnalysisInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = sel.input {
        return Ok(input::file::read_json(path)?);
    }
    if sel.dataset.is_none() {
        if let Some(request) = input::stdin::read_stdin()? {
            return Ok(request);
        }
    }

    let dataset = match sel.dataset {
        Some(ref path) => Some(input::load_dataset(path)?),
        None => None,
    };
    let year = match (sel.year, &dataset) {
        (Some(year), _) => year,
        (None, Some(ds)) => ds.latest_year().ok_or("dataset contains no fiscal years")?,
        (None, None) => ratio_analysis_core::dataset::FinancialDataset::dia_case()
            .latest_year()
            .ok_or("built-in case contains no fiscal years")?,
    };

    Ok(AnalysisInput {
        dataset,
        year,
        previous_year: sel.previous_year,
    })
}
