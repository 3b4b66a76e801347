use clap::Args;
use serde_json::Value;

use ratio_analysis_core::analysis;

use super::{build_input, SelectionArgs};

/// Arguments for the full analysis report
#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

pub fn run_report(args: ReportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = build_input(&args.selection)?;
    let output = analysis::build_report(&input)?;
    Ok(serde_json::to_value(output)?)
}
