//! Dataset-level analyses keyed by year.
//!
//! Each function resolves the requested years against a dataset (the
//! built-in case unless one is supplied), runs the pure engines, and wraps
//! the result in a [`ComputationOutput`] envelope. Undefined ratios and
//! sub-total mismatches surface as warnings; only unknown years are errors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::time::Instant;
use tracing::debug;

use crate::dataset::comparison::{compare_statements, StatementComparison};
use crate::dataset::integrity::check_integrity;
use crate::dataset::{validate, FinancialDataset, StatementFigures};
use crate::ratios::dupont::{decompose_roe, DupontBreakdown};
use crate::ratios::{compute_ratios, compute_trend, trend_report, RatioName, RatioSet, TrendLine};
use crate::types::{with_metadata, ComputationOutput, FiscalYear};
use crate::RatioAnalysisResult;

#[cfg(feature = "risk")]
use crate::risk::{evaluate_risks, risk_matrix, summarize, RiskMatrixCell, RiskProfile};

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisInput {
    /// Defaults to the built-in case when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<FinancialDataset>,
    pub year: FiscalYear,
    /// Defaults to `year - 1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_year: Option<FiscalYear>,
}

impl AnalysisInput {
    pub fn new(year: FiscalYear) -> Self {
        AnalysisInput {
            dataset: None,
            year,
            previous_year: None,
        }
    }

    pub fn comparison_year(&self) -> FiscalYear {
        self.previous_year
            .unwrap_or_else(|| self.year.saturating_sub(1))
    }

    /// The supplied dataset after validation, or the built-in case.
    fn dataset(&self) -> RatioAnalysisResult<Cow<'_, FinancialDataset>> {
        match &self.dataset {
            Some(ds) => {
                validate(ds)?;
                Ok(Cow::Borrowed(ds))
            }
            None => Ok(Cow::Owned(FinancialDataset::dia_case())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearRatios {
    pub company: String,
    pub year: FiscalYear,
    pub ratios: RatioSet,
    pub undefined: Vec<RatioName>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendOutput {
    pub ratio: RatioName,
    pub year: FiscalYear,
    pub previous_year: FiscalYear,
    pub current: Option<Decimal>,
    pub previous: Option<Decimal>,
    pub change_pct: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendReport {
    pub year: FiscalYear,
    pub previous_year: FiscalYear,
    pub trends: Vec<TrendLine>,
}

#[cfg(feature = "risk")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskReport {
    pub year: FiscalYear,
    pub previous_year: FiscalYear,
    pub profile: RiskProfile,
}

#[cfg(feature = "risk")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseReport {
    pub company: String,
    pub units: String,
    pub year: FiscalYear,
    pub previous_year: FiscalYear,
    pub current_ratios: RatioSet,
    pub previous_ratios: RatioSet,
    pub trends: Vec<TrendLine>,
    pub dupont: DupontBreakdown,
    pub statements: StatementComparison,
    pub risks: RiskProfile,
    pub risk_matrix: Vec<RiskMatrixCell>,
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

struct YearPair<'a> {
    year: FiscalYear,
    previous_year: FiscalYear,
    current: &'a StatementFigures,
    previous: &'a StatementFigures,
}

fn resolve_pair<'a>(
    dataset: &'a FinancialDataset,
    input: &AnalysisInput,
) -> RatioAnalysisResult<YearPair<'a>> {
    let previous_year = input.comparison_year();
    Ok(YearPair {
        year: input.year,
        previous_year,
        current: dataset.figures(input.year)?,
        previous: dataset.figures(previous_year)?,
    })
}

fn undefined_warnings(year: FiscalYear, ratios: &RatioSet) -> Vec<String> {
    ratios
        .undefined()
        .into_iter()
        .map(|name| format!("{year}: {} is undefined (zero denominator)", name.as_str()))
        .collect()
}

fn pair_warnings(pair: &YearPair<'_>, current: &RatioSet, previous: &RatioSet) -> Vec<String> {
    let mut warnings = check_integrity(pair.year, pair.current);
    warnings.extend(check_integrity(pair.previous_year, pair.previous));
    warnings.extend(undefined_warnings(pair.year, current));
    warnings.extend(undefined_warnings(pair.previous_year, previous));
    warnings
}

fn ratio_assumptions() -> serde_json::Value {
    serde_json::json!({
        "ebitda": "ebit + depreciation",
        "financial_debt": "long-term liabilities + short-term financial debt",
        "value_scale": "decimal fractions, not percentages",
        "zero_denominator": "ratio is null"
    })
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Ratio set for `input.year`.
pub fn analyze_ratios(input: &AnalysisInput) -> RatioAnalysisResult<ComputationOutput<YearRatios>> {
    let start = Instant::now();
    let dataset = input.dataset()?;
    let figures = dataset.figures(input.year)?;

    let ratios = compute_ratios(figures);
    let mut warnings = check_integrity(input.year, figures);
    warnings.extend(undefined_warnings(input.year, &ratios));

    let output = YearRatios {
        company: dataset.company.clone(),
        year: input.year,
        undefined: ratios.undefined(),
        ratios,
    };

    Ok(with_metadata(
        "Financial ratio analysis (structure, liquidity, profitability, efficiency, debt service)",
        &ratio_assumptions(),
        warnings,
        start.elapsed().as_micros() as u64,
        output,
    ))
}

/// Percentage change of one ratio between `input.year` and the comparison year.
pub fn analyze_trend(
    input: &AnalysisInput,
    ratio: RatioName,
) -> RatioAnalysisResult<ComputationOutput<TrendOutput>> {
    let start = Instant::now();
    let dataset = input.dataset()?;
    let pair = resolve_pair(&dataset, input)?;

    let current = compute_ratios(pair.current);
    let previous = compute_ratios(pair.previous);
    let change_pct = compute_trend(&current, &previous, ratio);

    let mut warnings = Vec::new();
    if change_pct.is_none() {
        warnings.push(format!(
            "No trend available for {} between {} and {}",
            ratio.as_str(),
            pair.previous_year,
            pair.year
        ));
    }

    let output = TrendOutput {
        ratio,
        year: pair.year,
        previous_year: pair.previous_year,
        current: current.get(ratio),
        previous: previous.get(ratio),
        change_pct,
    };

    Ok(with_metadata(
        "Year-over-year ratio trend: (current / previous - 1) x 100",
        &serde_json::json!({ "undefined_when": "previous is zero or either value is undefined" }),
        warnings,
        start.elapsed().as_micros() as u64,
        output,
    ))
}

/// Trends for all fifteen ratios.
pub fn analyze_trends(input: &AnalysisInput) -> RatioAnalysisResult<ComputationOutput<TrendReport>> {
    let start = Instant::now();
    let dataset = input.dataset()?;
    let pair = resolve_pair(&dataset, input)?;

    let current = compute_ratios(pair.current);
    let previous = compute_ratios(pair.previous);
    let warnings = pair_warnings(&pair, &current, &previous);

    let output = TrendReport {
        year: pair.year,
        previous_year: pair.previous_year,
        trends: trend_report(&current, &previous),
    };

    Ok(with_metadata(
        "Year-over-year ratio trends: (current / previous - 1) x 100",
        &ratio_assumptions(),
        warnings,
        start.elapsed().as_micros() as u64,
        output,
    ))
}

/// DuPont decomposition of the current year, with changes against the comparison year.
pub fn analyze_dupont(input: &AnalysisInput) -> RatioAnalysisResult<ComputationOutput<DupontBreakdown>> {
    let start = Instant::now();
    let dataset = input.dataset()?;
    let pair = resolve_pair(&dataset, input)?;

    let current = compute_ratios(pair.current);
    let previous = compute_ratios(pair.previous);
    let breakdown = decompose_roe(&current, Some(&previous));

    let mut warnings = Vec::new();
    if !breakdown.identity_holds {
        warnings.push("DuPont identity could not be verified (undefined component)".into());
    }

    Ok(with_metadata(
        "DuPont decomposition: EBT margin x asset turnover x financial leverage",
        &serde_json::json!({ "return_basis": "earnings before taxes" }),
        warnings,
        start.elapsed().as_micros() as u64,
        breakdown,
    ))
}

/// Comparative balance-sheet and income lines.
pub fn analyze_statements(
    input: &AnalysisInput,
) -> RatioAnalysisResult<ComputationOutput<StatementComparison>> {
    let start = Instant::now();
    let dataset = input.dataset()?;
    let pair = resolve_pair(&dataset, input)?;

    let mut warnings = check_integrity(pair.year, pair.current);
    warnings.extend(check_integrity(pair.previous_year, pair.previous));

    Ok(with_metadata(
        "Comparative statements and current-year balance structure",
        &serde_json::json!({ "units": dataset.units }),
        warnings,
        start.elapsed().as_micros() as u64,
        compare_statements(pair.current, pair.previous),
    ))
}

/// Risk catalogue assessment for the selected year pair.
#[cfg(feature = "risk")]
pub fn analyze_risks(input: &AnalysisInput) -> RatioAnalysisResult<ComputationOutput<RiskReport>> {
    let start = Instant::now();
    let dataset = input.dataset()?;
    let pair = resolve_pair(&dataset, input)?;

    let current = compute_ratios(pair.current);
    let previous = compute_ratios(pair.previous);
    let profile = summarize(evaluate_risks(&current, &previous));

    let output = RiskReport {
        year: pair.year,
        previous_year: pair.previous_year,
        profile,
    };

    Ok(with_metadata(
        "Risk catalogue: severity = classify(impact x probability / 10)",
        &serde_json::json!({
            "thresholds": { "critical": 8, "high": 6, "medium": 4 },
            "impact_probability": "authored per scenario, not derived from ratios"
        }),
        Vec::new(),
        start.elapsed().as_micros() as u64,
        output,
    ))
}

/// Everything the dashboard shows for one year pair.
#[cfg(feature = "risk")]
pub fn build_report(input: &AnalysisInput) -> RatioAnalysisResult<ComputationOutput<CaseReport>> {
    let start = Instant::now();
    let dataset = input.dataset()?;
    let pair = resolve_pair(&dataset, input)?;

    let current = compute_ratios(pair.current);
    let previous = compute_ratios(pair.previous);
    let warnings = pair_warnings(&pair, &current, &previous);

    let report = CaseReport {
        company: dataset.company.clone(),
        units: dataset.units.clone(),
        year: pair.year,
        previous_year: pair.previous_year,
        trends: trend_report(&current, &previous),
        dupont: decompose_roe(&current, Some(&previous)),
        statements: compare_statements(pair.current, pair.previous),
        risks: summarize(evaluate_risks(&current, &previous)),
        risk_matrix: risk_matrix(),
        current_ratios: current,
        previous_ratios: previous,
    };
    debug!(year = report.year, previous_year = report.previous_year, "built case report");

    Ok(with_metadata(
        "Two-year financial statement analysis",
        &ratio_assumptions(),
        warnings,
        start.elapsed().as_micros() as u64,
        report,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
