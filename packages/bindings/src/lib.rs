use napi::Result as NapiResult;
use napi_derive::napi;

use ratio_analysis_core::analysis::{self, AnalysisInput};
use ratio_analysis_core::ratios::RatioName;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_input(input_json: &str) -> NapiResult<AnalysisInput> {
    serde_json::from_str(input_json).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Ratios
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_ratios(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let output = analysis::analyze_ratios(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn compute_trend(input_json: String, ratio: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let name: RatioName = ratio.parse().map_err(to_napi_error)?;
    let output = analysis::analyze_trend(&input, name).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn compute_trends(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let output = analysis::analyze_trends(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn dupont_analysis(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let output = analysis::analyze_dupont(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn comparative_statements(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let output = analysis::analyze_statements(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Risk
// ---------------------------------------------------------------------------

#[napi]
pub fn evaluate_risks(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let output = analysis::analyze_risks(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn risk_matrix() -> NapiResult<String> {
    let cells = ratio_analysis_core::risk::risk_matrix();
    serde_json::to_string(&cells).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[napi]
pub fn analysis_report(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let output = analysis::build_report(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
