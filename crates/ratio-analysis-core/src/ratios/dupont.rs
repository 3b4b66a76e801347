//! DuPont decomposition of return on equity on an EBT basis.
//!
//! ROE = EBT margin x asset turnover x financial leverage, i.e.
//! `ebt/sales * sales/assets * assets/equity`. All components come straight
//! from a [`RatioSet`] so undefined ratios propagate as `None`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::engine::RatioSet;
use crate::types::{Multiple, Rate};

/// Tolerance for the product-equals-ROE identity.
const IDENTITY_TOLERANCE: Decimal = dec!(0.000000001);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DupontChanges {
    pub roe_change: Option<Rate>,
    pub margin_change: Option<Rate>,
    pub turnover_change: Option<Multiple>,
    pub leverage_change: Option<Multiple>,
    pub primary_driver: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DupontBreakdown {
    pub ebt_margin: Option<Rate>,
    pub asset_turnover: Option<Multiple>,
    pub financial_leverage: Option<Multiple>,
    pub return_on_equity: Option<Rate>,
    pub roe_check: Option<Rate>,
    pub identity_holds: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<DupontChanges>,
    pub diagnosis: String,
}

fn diagnose(margin: Option<Rate>, turnover: Option<Multiple>, leverage: Option<Multiple>) -> String {
    let mut parts = Vec::new();

    if let Some(m) = margin {
        if m < dec!(0.05) {
            parts.push("Thin pre-tax margins leave little room for cost or price shocks");
        } else if m > dec!(0.20) {
            parts.push("Strong pre-tax margins");
        }
    }
    if let Some(t) = turnover {
        if t > dec!(2.0) {
            parts.push("High asset turnover carries most of the operating return");
        } else if t < dec!(0.5) {
            parts.push("Low asset turnover points to a capital-intensive asset base");
        }
    }
    if let Some(l) = leverage {
        if l > dec!(5.0) {
            parts.push("Return on equity is driven mainly by very high financial leverage, which magnifies risk");
        } else if l > dec!(3.0) {
            parts.push("Elevated financial leverage amplifies return on equity");
        }
    }

    if parts.is_empty() {
        "Balanced DuPont profile with no notable concerns".to_string()
    } else {
        parts.join(". ") + "."
    }
}

fn delta(cur: Option<Decimal>, prev: Option<Decimal>) -> Option<Decimal> {
    cur?.checked_sub(prev?)
}

fn compute_changes(current: &RatioSet, previous: &RatioSet) -> DupontChanges {
    let margin_change = delta(current.ebt_margin, previous.ebt_margin);
    let turnover_change = delta(current.asset_turnover, previous.asset_turnover);
    let leverage_change = delta(current.financial_leverage, previous.financial_leverage);

    // Primary driver = component with largest absolute change
    let primary_driver = [
        ("EBT margin", margin_change),
        ("Asset turnover", turnover_change),
        ("Financial leverage", leverage_change),
    ]
    .into_iter()
    .filter_map(|(name, change)| change.map(|c| (name, c.abs())))
    .max_by(|a, b| a.1.cmp(&b.1))
    .map(|(name, _)| name.to_string());

    DupontChanges {
        roe_change: delta(current.return_on_equity, previous.return_on_equity),
        margin_change,
        turnover_change,
        leverage_change,
        primary_driver,
    }
}

/// Decompose the current year's return on equity, optionally against a prior year.
pub fn decompose_roe(current: &RatioSet, previous: Option<&RatioSet>) -> DupontBreakdown {
    let roe_check = match (
        current.ebt_margin,
        current.asset_turnover,
        current.financial_leverage,
    ) {
        (Some(m), Some(t), Some(l)) => m.checked_mul(t).and_then(|mt| mt.checked_mul(l)),
        _ => None,
    };

    let identity_holds = match (roe_check, current.return_on_equity) {
        (Some(check), Some(roe)) => check
            .checked_sub(roe)
            .is_some_and(|gap| gap.abs() < IDENTITY_TOLERANCE),
        _ => false,
    };

    DupontBreakdown {
        ebt_margin: current.ebt_margin,
        asset_turnover: current.asset_turnover,
        financial_leverage: current.financial_leverage,
        return_on_equity: current.return_on_equity,
        roe_check,
        identity_holds,
        changes: previous.map(|prev| compute_changes(current, prev)),
        diagnosis: diagnose(
            current.ebt_margin,
            current.asset_turnover,
            current.financial_leverage,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{FinancialDataset, StatementFigures};
    use crate::ratios::compute_ratios;

    fn approx_eq(a: Decimal, b: Decimal, eps: Decimal) -> bool {
        (a - b).abs() < eps
    }

    fn case_sets() -> (RatioSet, RatioSet) {
        let ds = FinancialDataset::dia_case();
        (
            compute_ratios(ds.figures(2017).unwrap()),
            compute_ratios(ds.figures(2016).unwrap()),
        )
    }

    #[test]
    fn test_identity_holds_for_case() {
        let (cur, _) = case_sets();
        let d = decompose_roe(&cur, None);
        assert!(d.identity_holds);
        assert!(approx_eq(d.roe_check.unwrap(), dec!(0.5707), dec!(0.0001)));
        assert!(d.changes.is_none());
    }

    #[test]
    fn test_leverage_is_primary_driver() {
        let (cur, prev) = case_sets();
        let d = decompose_roe(&cur, Some(&prev));
        let changes = d.changes.unwrap();
        // Leverage moved from 9.97x to 11.12x, far more than margin or turnover.
        assert_eq!(changes.primary_driver.as_deref(), Some("Financial leverage"));
        assert!(approx_eq(changes.leverage_change.unwrap(), dec!(1.1556), dec!(0.0001)));
        assert!(changes.margin_change.unwrap() < Decimal::ZERO);
    }

    #[test]
    fn test_diagnosis_flags_leverage_and_margins() {
        let (cur, _) = case_sets();
        let d = decompose_roe(&cur, None);
        assert!(d.diagnosis.contains("very high financial leverage"));
        assert!(d.diagnosis.contains("Thin pre-tax margins"));
        assert!(d.diagnosis.contains("High asset turnover"));
    }

    #[test]
    fn test_extreme_changes_are_undefined() {
        let (mut cur, mut prev) = case_sets();
        cur.ebt_margin = Some(Decimal::MIN);
        prev.ebt_margin = Some(Decimal::MAX);
        let changes = decompose_roe(&cur, Some(&prev)).changes.unwrap();
        assert_eq!(changes.margin_change, None);
        assert_eq!(changes.primary_driver.as_deref(), Some("Financial leverage"));
    }

    #[test]
    fn test_undefined_components_propagate() {
        let empty = compute_ratios(&StatementFigures::default());
        let d = decompose_roe(&empty, Some(&empty));
        assert_eq!(d.roe_check, None);
        assert!(!d.identity_holds);
        let changes = d.changes.unwrap();
        assert_eq!(changes.primary_driver, None);
        assert_eq!(d.diagnosis, "Balanced DuPont profile with no notable concerns");
    }
}
