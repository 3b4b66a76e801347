//! Sub-total consistency checks.
//!
//! Findings are reported as warnings; the ratio engine works on whatever
//! totals it is given.

use tracing::warn;

use super::statements::StatementFigures;
use crate::types::{checked_sum, FiscalYear, Money};

fn check(
    findings: &mut Vec<String>,
    year: FiscalYear,
    what: &str,
    reported: Money,
    expected: Option<Money>,
) {
    match expected {
        Some(expected) if reported == expected => {}
        Some(expected) => {
            let difference = reported
                .checked_sub(expected)
                .map(|d| d.to_string())
                .unwrap_or_else(|| "out of range".to_string());
            findings.push(format!(
                "{year}: {what} reported as {reported} but components sum to {expected} (difference {difference})"
            ));
        }
        None => findings.push(format!(
            "{year}: {what} reported as {reported} but its components overflow when summed"
        )),
    }
}

/// Compare each reported total with the sum of its children.
pub fn check_integrity(year: FiscalYear, figures: &StatementFigures) -> Vec<String> {
    let mut findings = Vec::new();
    let a = &figures.assets;
    let l = &figures.liabilities;

    check(
        &mut findings,
        year,
        "non-current assets total",
        a.non_current.total,
        a.non_current.sum_of_lines(),
    );
    check(
        &mut findings,
        year,
        "current assets total",
        a.current.total,
        a.current.sum_of_lines(),
    );
    check(
        &mut findings,
        year,
        "total assets",
        a.total,
        checked_sum(&[a.non_current.total, a.current.total]),
    );
    check(
        &mut findings,
        year,
        "short-term liabilities total",
        l.short_term.total,
        checked_sum(&[l.short_term.suppliers, l.short_term.short_term_financial_debt]),
    );
    check(
        &mut findings,
        year,
        "total liabilities",
        l.total,
        checked_sum(&[l.long_term, l.short_term.total]),
    );
    check(
        &mut findings,
        year,
        "balance identity (assets vs equity + liabilities)",
        a.total,
        checked_sum(&[figures.equity, l.total]),
    );

    for finding in &findings {
        warn!(year, "{finding}");
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::FinancialDataset;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_case_figures_are_consistent() {
        let ds = FinancialDataset::dia_case();
        for (year, figures) in &ds.years {
            assert!(check_integrity(*year, figures).is_empty());
        }
    }

    #[test]
    fn test_inventory_mismatch_reported() {
        let ds = FinancialDataset::dia_case();
        let mut figures = ds.figures(2017).unwrap().clone();
        figures.assets.current.inventory += dec!(1_000);
        let findings = check_integrity(2017, &figures);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].contains("current assets total"));
        assert!(findings[0].contains("-1000"));
    }

    #[test]
    fn test_overflowing_components_reported() {
        let mut figures = StatementFigures::default();
        figures.assets.current.inventory = Decimal::MAX;
        figures.assets.current.cash_and_equivalents = Decimal::MAX;
        let findings = check_integrity(2020, &figures);
        assert!(findings
            .iter()
            .any(|f| f.contains("current assets total") && f.contains("overflow")));
    }

    #[test]
    fn test_balance_identity_reported() {
        let ds = FinancialDataset::dia_case();
        let mut figures = ds.figures(2016).unwrap().clone();
        figures.equity = dec!(1);
        let findings = check_integrity(2016, &figures);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].starts_with("2016: balance identity"));
    }
}
