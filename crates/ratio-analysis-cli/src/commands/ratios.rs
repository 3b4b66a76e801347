use clap::Args;
use serde_json::Value;

use ratio_analysis_core::analysis;
use ratio_analysis_core::ratios::RatioName;

use super::{build_input, SelectionArgs};
use crate::output::display;

/// Arguments for the ratio set of one year
#[derive(Args)]
pub struct RatiosArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Arguments for a single ratio trend
#[derive(Args)]
pub struct TrendArgs {
    /// Ratio name, e.g. equityStrength or equity_strength
    #[arg(long)]
    pub ratio: RatioName,

    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Arguments for the full trend table
#[derive(Args)]
pub struct TrendsArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Arguments for DuPont decomposition
#[derive(Args)]
pub struct DupontArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Arguments for comparative statements
#[derive(Args)]
pub struct StatementsArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

pub fn run_ratios(args: RatiosArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = build_input(&args.selection)?;
    let output = analysis::analyze_ratios(&input)?;

    let mut value = serde_json::to_value(&output)?;
    value["result"]["display"] = Value::Object(
        output
            .result
            .ratios
            .iter()
            .map(|(name, v)| {
                (
                    name.as_str().to_string(),
                    Value::String(display::format_ratio(v, name.kind())),
                )
            })
            .collect(),
    );
    Ok(value)
}

pub fn run_trend(args: TrendArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = build_input(&args.selection)?;
    let output = analysis::analyze_trend(&input, args.ratio)?;
    Ok(serde_json::to_value(output)?)
}

pub fn run_trends(args: TrendsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = build_input(&args.selection)?;
    let output = analysis::analyze_trends(&input)?;

    let mut value = serde_json::to_value(&output)?;
    if let Some(Value::Array(rows)) = value["result"].get_mut("trends") {
        for (row, line) in rows.iter_mut().zip(output.result.trends.iter()) {
            row["current_display"] = Value::String(display::format_ratio(line.current, line.kind));
            row["trend_display"] = Value::String(display::format_trend(line.change_pct));
        }
    }
    Ok(value)
}

pub fn run_dupont(args: DupontArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = build_input(&args.selection)?;
    let output = analysis::analyze_dupont(&input)?;
    Ok(serde_json::to_value(output)?)
}

pub fn run_statements(args: StatementsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input = build_input(&args.selection)?;
    let output = analysis::analyze_statements(&input)?;
    Ok(serde_json::to_value(output)?)
}
