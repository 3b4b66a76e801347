//! Balance-sheet and income-statement figures for one fiscal year.
//!
//! Every field is mandatory in the type; fields missing from serialized input
//! load as zero so a year without, say, assets held for sale still produces a
//! complete record.

use serde::{Deserialize, Serialize};

use crate::types::{checked_sum, Money};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NonCurrentAssets {
    pub intangible_assets: Money,
    pub tangible_assets: Money,
    pub long_term_financial_investments: Money,
    pub deferred_tax_assets: Money,
    pub total: Money,
}

impl NonCurrentAssets {
    /// Sum of the line items; `None` if it overflows.
    pub fn sum_of_lines(&self) -> Option<Money> {
        checked_sum(&[
            self.intangible_assets,
            self.tangible_assets,
            self.long_term_financial_investments,
            self.deferred_tax_assets,
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentAssets {
    pub non_current_assets_held_for_sale: Money,
    pub inventory: Money,
    pub accounts_receivable: Money,
    pub short_term_financial_investments: Money,
    pub cash_and_equivalents: Money,
    pub total: Money,
}

impl CurrentAssets {
    pub fn sum_of_lines(&self) -> Option<Money> {
        checked_sum(&[
            self.non_current_assets_held_for_sale,
            self.inventory,
            self.accounts_receivable,
            self.short_term_financial_investments,
            self.cash_and_equivalents,
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assets {
    pub non_current: NonCurrentAssets,
    pub current: CurrentAssets,
    pub total: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortTermLiabilities {
    pub suppliers: Money,
    pub short_term_financial_debt: Money,
    pub total: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Liabilities {
    pub long_term: Money,
    pub short_term: ShortTermLiabilities,
    pub total: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomeStatement {
    pub sales: Money,
    pub cost_of_sales: Money,
    pub personnel_costs: Money,
    pub other_operating_costs: Money,
    pub depreciation: Money,
    /// Operating result; may be negative.
    pub ebit: Money,
    /// May be negative.
    pub extraordinary_results: Money,
    pub financial_expenses: Money,
    /// Result before taxes; may be negative.
    pub ebt: Money,
}

/// One year of statement figures. Never mutated once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementFigures {
    pub assets: Assets,
    pub equity: Money,
    pub liabilities: Liabilities,
    pub income: IncomeStatement,
}

impl StatementFigures {
    // Derived figures are `None` when the Decimal range is exceeded.

    /// EBIT plus depreciation.
    pub fn ebitda(&self) -> Option<Money> {
        self.income.ebit.checked_add(self.income.depreciation)
    }

    /// Long-term liabilities plus short-term financial debt.
    pub fn financial_debt(&self) -> Option<Money> {
        self.liabilities
            .long_term
            .checked_add(self.liabilities.short_term.short_term_financial_debt)
    }

    pub fn gross_profit(&self) -> Option<Money> {
        self.income.sales.checked_sub(self.income.cost_of_sales)
    }

    /// Current assets minus current liabilities (fondo de maniobra).
    pub fn working_capital(&self) -> Option<Money> {
        self.assets
            .current
            .total
            .checked_sub(self.liabilities.short_term.total)
    }

    /// Named monetary fields that must never be negative.
    pub(crate) fn non_negative_fields(&self) -> Vec<(&'static str, Money)> {
        let a = &self.assets;
        let l = &self.liabilities;
        let i = &self.income;
        vec![
            ("assets.non_current.intangible_assets", a.non_current.intangible_assets),
            ("assets.non_current.tangible_assets", a.non_current.tangible_assets),
            (
                "assets.non_current.long_term_financial_investments",
                a.non_current.long_term_financial_investments,
            ),
            ("assets.non_current.deferred_tax_assets", a.non_current.deferred_tax_assets),
            ("assets.non_current.total", a.non_current.total),
            (
                "assets.current.non_current_assets_held_for_sale",
                a.current.non_current_assets_held_for_sale,
            ),
            ("assets.current.inventory", a.current.inventory),
            ("assets.current.accounts_receivable", a.current.accounts_receivable),
            (
                "assets.current.short_term_financial_investments",
                a.current.short_term_financial_investments,
            ),
            ("assets.current.cash_and_equivalents", a.current.cash_and_equivalents),
            ("assets.current.total", a.current.total),
            ("assets.total", a.total),
            ("equity", self.equity),
            ("liabilities.long_term", l.long_term),
            ("liabilities.short_term.suppliers", l.short_term.suppliers),
            (
                "liabilities.short_term.short_term_financial_debt",
                l.short_term.short_term_financial_debt,
            ),
            ("liabilities.short_term.total", l.short_term.total),
            ("liabilities.total", l.total),
            ("income.sales", i.sales),
            ("income.cost_of_sales", i.cost_of_sales),
            ("income.personnel_costs", i.personnel_costs),
            ("income.other_operating_costs", i.other_operating_costs),
            ("income.depreciation", i.depreciation),
            ("income.financial_expenses", i.financial_expenses),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_missing_fields_default_to_zero() {
        let json = r#"{
            "assets": { "current": { "inventory": "100", "total": "150" }, "total": "150" },
            "equity": "50"
        }"#;
        let figures: StatementFigures = serde_json::from_str(json).unwrap();
        assert_eq!(figures.assets.current.inventory, dec!(100));
        assert_eq!(figures.assets.current.non_current_assets_held_for_sale, Decimal::ZERO);
        assert_eq!(figures.liabilities.short_term.total, Decimal::ZERO);
        assert_eq!(figures.income.ebt, Decimal::ZERO);
    }

    #[test]
    fn test_derived_helpers() {
        let mut f = StatementFigures::default();
        f.income.ebit = dec!(-10);
        f.income.depreciation = dec!(25);
        f.income.sales = dec!(100);
        f.income.cost_of_sales = dec!(70);
        f.liabilities.long_term = dec!(40);
        f.liabilities.short_term.short_term_financial_debt = dec!(15);
        f.assets.current.total = dec!(30);
        f.liabilities.short_term.total = dec!(45);

        assert_eq!(f.ebitda(), Some(dec!(15)));
        assert_eq!(f.financial_debt(), Some(dec!(55)));
        assert_eq!(f.gross_profit(), Some(dec!(30)));
        assert_eq!(f.working_capital(), Some(dec!(-15)));
    }

    #[test]
    fn test_overflowing_helpers_are_none() {
        let mut f = StatementFigures::default();
        f.income.ebit = Decimal::MAX;
        f.income.depreciation = dec!(1);
        f.liabilities.long_term = Decimal::MAX;
        f.liabilities.short_term.short_term_financial_debt = Decimal::MAX;
        f.assets.current.inventory = Decimal::MAX;
        f.assets.current.cash_and_equivalents = Decimal::MAX;

        assert_eq!(f.ebitda(), None);
        assert_eq!(f.financial_debt(), None);
        assert_eq!(f.assets.current.sum_of_lines(), None);
    }
}
