//! Side-by-side comparison of two years of statement figures.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::statements::StatementFigures;
use crate::types::{checked_ratio, Money, Rate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonLine {
    pub item: String,
    pub previous: Money,
    pub current: Money,
    /// `None` when the difference leaves the Decimal range.
    pub change: Option<Money>,
    /// Percentage change (e.g. -2.79 for -2.79%); `None` when previous is zero.
    pub change_pct: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureShare {
    pub item: String,
    pub amount: Money,
    /// Fraction of total assets (0.65 = 65%).
    pub share_of_total_assets: Option<Rate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementComparison {
    pub balance_sheet: Vec<ComparisonLine>,
    pub income_statement: Vec<ComparisonLine>,
    pub current_structure: Vec<StructureShare>,
}

fn line(item: &str, previous: Money, current: Money) -> ComparisonLine {
    ComparisonLine {
        item: item.to_string(),
        previous,
        current,
        change: current.checked_sub(previous),
        change_pct: checked_ratio(current, previous)
            .and_then(|r| r.checked_sub(Decimal::ONE))
            .and_then(|r| r.checked_mul(dec!(100))),
    }
}

fn balance_lines(f: &StatementFigures) -> [(&'static str, Money); 5] {
    [
        ("Non-current assets", f.assets.non_current.total),
        ("Current assets", f.assets.current.total),
        ("Equity", f.equity),
        ("Long-term liabilities", f.liabilities.long_term),
        ("Current liabilities", f.liabilities.short_term.total),
    ]
}

/// Build the balance-sheet and income comparisons between two years.
pub fn compare_statements(
    current: &StatementFigures,
    previous: &StatementFigures,
) -> StatementComparison {
    let balance_sheet = balance_lines(previous)
        .iter()
        .zip(balance_lines(current).iter())
        .map(|((item, prev), (_, cur))| line(item, *prev, *cur))
        .collect();

    let income_statement = vec![
        line("Sales", previous.income.sales, current.income.sales),
        line("EBIT", previous.income.ebit, current.income.ebit),
        line("EBT", previous.income.ebt, current.income.ebt),
    ];

    let current_structure = balance_lines(current)
        .iter()
        .map(|(item, amount)| StructureShare {
            item: item.to_string(),
            amount: *amount,
            share_of_total_assets: checked_ratio(*amount, current.assets.total),
        })
        .collect();

    StatementComparison {
        balance_sheet,
        income_statement,
        current_structure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::FinancialDataset;

    fn approx_eq(a: Decimal, b: Decimal, eps: Decimal) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn test_sales_decline() {
        let ds = FinancialDataset::dia_case();
        let cmp = compare_statements(ds.figures(2017).unwrap(), ds.figures(2016).unwrap());
        let sales = &cmp.income_statement[0];
        assert_eq!(sales.item, "Sales");
        assert_eq!(sales.change, Some(dec!(-247_071)));
        // 8,620,550 / 8,867,621 - 1 = -2.786%
        assert!(approx_eq(sales.change_pct.unwrap(), dec!(-2.786), dec!(0.001)));
    }

    #[test]
    fn test_balance_line_order() {
        let ds = FinancialDataset::dia_case();
        let cmp = compare_statements(ds.figures(2017).unwrap(), ds.figures(2016).unwrap());
        let items: Vec<&str> = cmp.balance_sheet.iter().map(|l| l.item.as_str()).collect();
        assert_eq!(
            items,
            vec![
                "Non-current assets",
                "Current assets",
                "Equity",
                "Long-term liabilities",
                "Current liabilities"
            ]
        );
        assert_eq!(cmp.balance_sheet[2].previous, dec!(392_883));
        assert_eq!(cmp.balance_sheet[2].current, dec!(325_983));
    }

    #[test]
    fn test_structure_shares_sum_to_two() {
        // Assets side and financing side each sum to total assets.
        let ds = FinancialDataset::dia_case();
        let cmp = compare_statements(ds.figures(2017).unwrap(), ds.figures(2016).unwrap());
        let total: Decimal = cmp
            .current_structure
            .iter()
            .filter_map(|s| s.share_of_total_assets)
            .sum();
        assert!(approx_eq(total, dec!(2), dec!(0.0000001)));
    }

    #[test]
    fn test_extreme_results_do_not_panic() {
        let mut current = StatementFigures::default();
        let mut previous = StatementFigures::default();
        current.income.ebt = Decimal::MIN;
        previous.income.ebt = Decimal::MAX;
        current.income.ebit = Decimal::MIN;
        previous.income.ebit = dec!(0.5);
        let cmp = compare_statements(&current, &previous);
        assert_eq!(cmp.income_statement[2].change, None);
        assert_eq!(cmp.income_statement[1].change_pct, None);
    }

    #[test]
    fn test_zero_previous_has_no_pct() {
        let current = StatementFigures::default();
        let mut previous = StatementFigures::default();
        previous.income.sales = Decimal::ZERO;
        let cmp = compare_statements(&current, &previous);
        assert_eq!(cmp.income_statement[0].change_pct, None);
        assert_eq!(cmp.current_structure[0].share_of_total_assets, None);
    }
}
