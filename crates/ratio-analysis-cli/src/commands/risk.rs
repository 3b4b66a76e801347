use clap::Args;
use serde_json::Value;

use ratio_analysis_core::analysis;
use ratio_analysis_core::risk::risk_matrix;

use super::{build_input, SelectionArgs};

/// Arguments for the risk catalogue evaluation
#[derive(Args)]
pub struct RisksArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Arguments for the risk matrix grid
#[derive(Args)]
pub struct RiskMatrixArgs {
    /// Only list cells in this band (low, medium, high, critical)
    #[arg(long)]
    pub band: Option<String>,
}

pub fn run_risks(args: RisksArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = build_input(&args.selection)?;
    let output = analysis::analyze_risks(&input)?;
    Ok(serde_json::to_value(output)?)
}

pub fn run_risk_matrix(args: RiskMatrixArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let band = args.band.map(|b| b.to_ascii_lowercase());
    let cells: Vec<_> = risk_matrix()
        .into_iter()
        .filter(|cell| match band {
            Some(ref b) => cell.band.to_string().to_ascii_lowercase() == *b,
            None => true,
        })
        .collect();

    if cells.is_empty() {
        return Err("--band must be one of: low, medium, high, critical".into());
    }

    Ok(serde_json::json!({
        "result": cells,
        "methodology": "Risk matrix grid: z = probability x impact, bands at 64/36/16",
        "warnings": [],
    }))
}
