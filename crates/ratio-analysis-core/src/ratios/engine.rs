//! Ratio engine: fifteen structure, liquidity, profitability, efficiency and
//! debt-service ratios derived from one year's statement figures.
//!
//! Values are un-scaled (0.0899 means 8.99%). A ratio whose denominator is
//! zero is `None`; that is a normal outcome, never an error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::dataset::StatementFigures;
use crate::types::{checked_ratio, Money, Multiple, Rate};
use crate::RatioAnalysisError;

// ---------------------------------------------------------------------------
// Ratio names
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioName {
    EquityStrength,
    SolvencyCapacity,
    FinancialLeverage,
    CurrentLiquidity,
    QuickLiquidity,
    ImmediateLiquidity,
    WorkingCapital,
    ReturnOnEquity,
    ReturnOnAssets,
    OperatingReturnOnAssets,
    GrossMargin,
    EbitMargin,
    EbtMargin,
    AssetTurnover,
    DebtServiceCapacity,
}

/// How a ratio value should be read by presentation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioKind {
    /// Decimal fraction, shown x100 with a percent sign.
    Percent,
    /// Plain x-times ratio.
    Multiple,
    /// Monetary amount in dataset units.
    Money,
}

impl RatioName {
    pub const ALL: [RatioName; 15] = [
        RatioName::EquityStrength,
        RatioName::SolvencyCapacity,
        RatioName::FinancialLeverage,
        RatioName::CurrentLiquidity,
        RatioName::QuickLiquidity,
        RatioName::ImmediateLiquidity,
        RatioName::WorkingCapital,
        RatioName::ReturnOnEquity,
        RatioName::ReturnOnAssets,
        RatioName::OperatingReturnOnAssets,
        RatioName::GrossMargin,
        RatioName::EbitMargin,
        RatioName::EbtMargin,
        RatioName::AssetTurnover,
        RatioName::DebtServiceCapacity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EquityStrength => "equityStrength",
            Self::SolvencyCapacity => "solvencyCapacity",
            Self::FinancialLeverage => "financialLeverage",
            Self::CurrentLiquidity => "currentLiquidity",
            Self::QuickLiquidity => "quickLiquidity",
            Self::ImmediateLiquidity => "immediateLiquidity",
            Self::WorkingCapital => "workingCapital",
            Self::ReturnOnEquity => "returnOnEquity",
            Self::ReturnOnAssets => "returnOnAssets",
            Self::OperatingReturnOnAssets => "operatingReturnOnAssets",
            Self::GrossMargin => "grossMargin",
            Self::EbitMargin => "ebitMargin",
            Self::EbtMargin => "ebtMargin",
            Self::AssetTurnover => "assetTurnover",
            Self::DebtServiceCapacity => "debtServiceCapacity",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::EquityStrength => "Equity strength",
            Self::SolvencyCapacity => "Solvency capacity",
            Self::FinancialLeverage => "Financial leverage",
            Self::CurrentLiquidity => "Current liquidity",
            Self::QuickLiquidity => "Quick liquidity",
            Self::ImmediateLiquidity => "Immediate liquidity",
            Self::WorkingCapital => "Working capital",
            Self::ReturnOnEquity => "Return on equity",
            Self::ReturnOnAssets => "Return on assets",
            Self::OperatingReturnOnAssets => "Operating return on assets",
            Self::GrossMargin => "Gross margin",
            Self::EbitMargin => "EBIT margin",
            Self::EbtMargin => "EBT margin",
            Self::AssetTurnover => "Asset turnover",
            Self::DebtServiceCapacity => "Debt service capacity",
        }
    }

    pub fn kind(&self) -> RatioKind {
        match self {
            Self::EquityStrength
            | Self::ReturnOnEquity
            | Self::ReturnOnAssets
            | Self::OperatingReturnOnAssets
            | Self::GrossMargin
            | Self::EbitMargin
            | Self::EbtMargin => RatioKind::Percent,
            Self::WorkingCapital => RatioKind::Money,
            Self::SolvencyCapacity
            | Self::FinancialLeverage
            | Self::CurrentLiquidity
            | Self::QuickLiquidity
            | Self::ImmediateLiquidity
            | Self::AssetTurnover
            | Self::DebtServiceCapacity => RatioKind::Multiple,
        }
    }
}

impl fmt::Display for RatioName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RatioName {
    type Err = RatioAnalysisError;

    /// Accepts `equityStrength`, `equity_strength` or `equity-strength`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        RatioName::ALL
            .into_iter()
            .find(|name| name.as_str().to_ascii_lowercase() == wanted)
            .ok_or_else(|| RatioAnalysisError::InvalidInput {
                field: "ratio".into(),
                reason: format!("unknown ratio '{s}'"),
            })
    }
}

// ---------------------------------------------------------------------------
// Ratio set
// ---------------------------------------------------------------------------

/// The fifteen ratios for one year. `None` marks an undefined ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioSet {
    // Structure and solvency
    pub equity_strength: Option<Rate>,
    pub solvency_capacity: Option<Multiple>,
    pub financial_leverage: Option<Multiple>,
    // Liquidity
    pub current_liquidity: Option<Multiple>,
    pub quick_liquidity: Option<Multiple>,
    pub immediate_liquidity: Option<Multiple>,
    pub working_capital: Option<Money>,
    // Profitability
    pub return_on_equity: Option<Rate>,
    pub return_on_assets: Option<Rate>,
    pub operating_return_on_assets: Option<Rate>,
    // Margins
    pub gross_margin: Option<Rate>,
    pub ebit_margin: Option<Rate>,
    pub ebt_margin: Option<Rate>,
    // Efficiency
    pub asset_turnover: Option<Multiple>,
    // Debt service
    pub debt_service_capacity: Option<Multiple>,
}

impl RatioSet {
    pub fn get(&self, name: RatioName) -> Option<Decimal> {
        match name {
            RatioName::EquityStrength => self.equity_strength,
            RatioName::SolvencyCapacity => self.solvency_capacity,
            RatioName::FinancialLeverage => self.financial_leverage,
            RatioName::CurrentLiquidity => self.current_liquidity,
            RatioName::QuickLiquidity => self.quick_liquidity,
            RatioName::ImmediateLiquidity => self.immediate_liquidity,
            RatioName::WorkingCapital => self.working_capital,
            RatioName::ReturnOnEquity => self.return_on_equity,
            RatioName::ReturnOnAssets => self.return_on_assets,
            RatioName::OperatingReturnOnAssets => self.operating_return_on_assets,
            RatioName::GrossMargin => self.gross_margin,
            RatioName::EbitMargin => self.ebit_margin,
            RatioName::EbtMargin => self.ebt_margin,
            RatioName::AssetTurnover => self.asset_turnover,
            RatioName::DebtServiceCapacity => self.debt_service_capacity,
        }
    }

    /// All ratios in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (RatioName, Option<Decimal>)> + '_ {
        RatioName::ALL.into_iter().map(move |name| (name, self.get(name)))
    }

    /// Names of ratios with no value (zero denominator).
    pub fn undefined(&self) -> Vec<RatioName> {
        self.iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| name)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the full ratio set for one year's figures.
pub fn compute_ratios(figures: &StatementFigures) -> RatioSet {
    let total_assets = figures.assets.total;
    let current_assets = figures.assets.current.total;
    let current_liabilities = figures.liabilities.short_term.total;
    let equity = figures.equity;
    let sales = figures.income.sales;
    let ebit = figures.income.ebit;
    let ebt = figures.income.ebt;

    let ratios = RatioSet {
        equity_strength: checked_ratio(equity, total_assets),
        solvency_capacity: checked_ratio(total_assets, figures.liabilities.total),
        financial_leverage: checked_ratio(total_assets, equity),

        current_liquidity: checked_ratio(current_assets, current_liabilities),
        quick_liquidity: current_assets
            .checked_sub(figures.assets.current.inventory)
            .and_then(|quick| checked_ratio(quick, current_liabilities)),
        immediate_liquidity: checked_ratio(
            figures.assets.current.cash_and_equivalents,
            current_liabilities,
        ),
        working_capital: figures.working_capital(),

        return_on_equity: checked_ratio(ebt, equity),
        return_on_assets: checked_ratio(ebt, total_assets),
        operating_return_on_assets: checked_ratio(ebit, total_assets),

        gross_margin: figures
            .gross_profit()
            .and_then(|gp| checked_ratio(gp, sales)),
        ebit_margin: checked_ratio(ebit, sales),
        ebt_margin: checked_ratio(ebt, sales),

        asset_turnover: checked_ratio(sales, total_assets),

        debt_service_capacity: match (figures.ebitda(), figures.financial_debt()) {
            (Some(ebitda), Some(debt)) => checked_ratio(ebitda, debt),
            _ => None,
        },
    };

    debug!(undefined = ?ratios.undefined(), "computed ratio set");
    ratios
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::FinancialDataset;
    use rust_decimal_macros::dec;

    fn approx_eq(a: Decimal, b: Decimal, eps: Decimal) -> bool {
        (a - b).abs() < eps
    }

    fn ratios_2017() -> RatioSet {
        let ds = FinancialDataset::dia_case();
        compute_ratios(ds.figures(2017).unwrap())
    }

    #[test]
    fn test_equity_strength_2017() {
        let r = ratios_2017();
        assert_eq!(r.equity_strength, Some(dec!(325_983) / dec!(3_626_174)));
        assert!(approx_eq(r.equity_strength.unwrap(), dec!(0.0899), dec!(0.0001)));
    }

    #[test]
    fn test_liquidity_ratios_2017() {
        let r = ratios_2017();
        assert!(approx_eq(r.current_liquidity.unwrap(), dec!(0.5514), dec!(0.0001)));
        // (1,263,319 - 569,644) / 2,290,993
        assert!(approx_eq(r.quick_liquidity.unwrap(), dec!(0.3028), dec!(0.0001)));
        assert!(approx_eq(r.immediate_liquidity.unwrap(), dec!(0.1517), dec!(0.0001)));
        assert_eq!(r.working_capital, Some(dec!(-1_027_674)));
    }

    #[test]
    fn test_profitability_and_margins_2017() {
        let r = ratios_2017();
        assert!(approx_eq(r.return_on_equity.unwrap(), dec!(0.5707), dec!(0.0001)));
        assert!(approx_eq(r.return_on_assets.unwrap(), dec!(0.0513), dec!(0.0001)));
        assert!(approx_eq(r.operating_return_on_assets.unwrap(), dec!(0.0338), dec!(0.0001)));
        assert!(approx_eq(r.gross_margin.unwrap(), dec!(0.2102), dec!(0.0001)));
        assert!(approx_eq(r.ebit_margin.unwrap(), dec!(0.0142), dec!(0.0001)));
        assert!(approx_eq(r.ebt_margin.unwrap(), dec!(0.0216), dec!(0.0001)));
    }

    #[test]
    fn test_leverage_turnover_and_debt_service_2017() {
        let r = ratios_2017();
        assert!(approx_eq(r.financial_leverage.unwrap(), dec!(11.1238), dec!(0.0001)));
        assert!(approx_eq(r.solvency_capacity.unwrap(), dec!(1.0988), dec!(0.0001)));
        assert!(approx_eq(r.asset_turnover.unwrap(), dec!(2.3773), dec!(0.0001)));
        // (122,428 + 235,512) / (1,009,198 + 483,560)
        assert!(approx_eq(r.debt_service_capacity.unwrap(), dec!(0.2398), dec!(0.0001)));
    }

    #[test]
    fn test_all_fifteen_defined_for_case() {
        let r = ratios_2017();
        assert_eq!(r.iter().count(), 15);
        assert!(r.undefined().is_empty());
    }

    #[test]
    fn test_zero_denominators_are_undefined_not_errors() {
        let figures = StatementFigures::default();
        let r = compute_ratios(&figures);
        // Only working capital has no denominator.
        assert_eq!(r.working_capital, Some(Decimal::ZERO));
        assert_eq!(r.undefined().len(), 14);
    }

    #[test]
    fn test_zero_equity_only_affects_equity_denominators() {
        let ds = FinancialDataset::dia_case();
        let mut figures = ds.figures(2017).unwrap().clone();
        figures.equity = Decimal::ZERO;
        let r = compute_ratios(&figures);
        assert_eq!(
            r.undefined(),
            vec![RatioName::FinancialLeverage, RatioName::ReturnOnEquity]
        );
        assert_eq!(r.equity_strength, Some(Decimal::ZERO));
    }

    #[test]
    fn test_extreme_figures_do_not_panic() {
        let mut figures = StatementFigures::default();
        figures.income.ebit = Decimal::MAX;
        figures.income.depreciation = dec!(1);
        figures.liabilities.long_term = dec!(100);
        figures.income.sales = dec!(1);
        figures.assets.total = dec!(1);
        figures.equity = dec!(1);
        assert!(crate::dataset::validate(&crate::dataset::FinancialDataset {
            company: "Extreme".into(),
            units: String::new(),
            years: [(2020, figures.clone())].into_iter().collect(),
        })
        .is_ok());

        let r = compute_ratios(&figures);
        assert_eq!(r.debt_service_capacity, None);
        assert_eq!(r.ebit_margin, Some(Decimal::MAX));
    }

    #[test]
    fn test_pure_and_input_untouched() {
        let ds = FinancialDataset::dia_case();
        let figures = ds.figures(2016).unwrap().clone();
        let snapshot = figures.clone();
        let a = compute_ratios(&figures);
        let b = compute_ratios(&figures);
        assert_eq!(a, b);
        assert_eq!(figures, snapshot);
    }

    #[test]
    fn test_ratio_name_parsing() {
        assert_eq!(
            "equityStrength".parse::<RatioName>().unwrap(),
            RatioName::EquityStrength
        );
        assert_eq!(
            "debt_service_capacity".parse::<RatioName>().unwrap(),
            RatioName::DebtServiceCapacity
        );
        assert_eq!(
            "ebit-margin".parse::<RatioName>().unwrap(),
            RatioName::EbitMargin
        );
        assert!("roce".parse::<RatioName>().is_err());
    }

    #[test]
    fn test_ratio_kinds() {
        assert_eq!(RatioName::EquityStrength.kind(), RatioKind::Percent);
        assert_eq!(RatioName::CurrentLiquidity.kind(), RatioKind::Multiple);
        assert_eq!(RatioName::WorkingCapital.kind(), RatioKind::Money);
    }
}
