//! Built-in case: two fiscal years of a Spanish food retailer (DIA),
//! figures in thousands of euros.

use rust_decimal_macros::dec;
use std::collections::BTreeMap;

use super::statements::*;
use super::FinancialDataset;

pub const CASE_COMPANY: &str = "DIA";
pub const CASE_UNITS: &str = "EUR thousands";

fn fiscal_2017() -> StatementFigures {
    StatementFigures {
        assets: Assets {
            non_current: NonCurrentAssets {
                intangible_assets: dec!(595_838),
                tangible_assets: dec!(1_363_963),
                long_term_financial_investments: dec!(149_071),
                deferred_tax_assets: dec!(253_983),
                total: dec!(2_362_855),
            },
            current: CurrentAssets {
                non_current_assets_held_for_sale: dec!(39_663),
                inventory: dec!(569_644),
                accounts_receivable: dec!(286_932),
                short_term_financial_investments: dec!(19_500),
                cash_and_equivalents: dec!(347_580),
                total: dec!(1_263_319),
            },
            total: dec!(3_626_174),
        },
        equity: dec!(325_983),
        liabilities: Liabilities {
            long_term: dec!(1_009_198),
            short_term: ShortTermLiabilities {
                suppliers: dec!(1_807_433),
                short_term_financial_debt: dec!(483_560),
                total: dec!(2_290_993),
            },
            total: dec!(3_300_191),
        },
        income: IncomeStatement {
            sales: dec!(8_620_550),
            cost_of_sales: dec!(6_808_596),
            personnel_costs: dec!(808_943),
            other_operating_costs: dec!(645_071),
            depreciation: dec!(235_512),
            ebit: dec!(122_428),
            extraordinary_results: dec!(128_941),
            financial_expenses: dec!(65_334),
            ebt: dec!(186_035),
        },
    }
}

fn fiscal_2016() -> StatementFigures {
    StatementFigures {
        assets: Assets {
            non_current: NonCurrentAssets {
                intangible_assets: dec!(595_323),
                tangible_assets: dec!(1_469_078),
                long_term_financial_investments: dec!(128_588),
                deferred_tax_assets: dec!(314_273),
                total: dec!(2_507_262),
            },
            current: CurrentAssets {
                non_current_assets_held_for_sale: dec!(0),
                inventory: dec!(669_592),
                accounts_receivable: dec!(340_781),
                short_term_financial_investments: dec!(25_954),
                cash_and_equivalents: dec!(372_740),
                total: dec!(1_409_067),
            },
            total: dec!(3_916_329),
        },
        equity: dec!(392_883),
        liabilities: Liabilities {
            long_term: dec!(1_154_223),
            short_term: ShortTermLiabilities {
                suppliers: dec!(2_053_847),
                short_term_financial_debt: dec!(315_376),
                total: dec!(2_369_223),
            },
            total: dec!(3_523_446),
        },
        income: IncomeStatement {
            sales: dec!(8_867_621),
            cost_of_sales: dec!(6_942_007),
            personnel_costs: dec!(846_103),
            other_operating_costs: dec!(653_549),
            depreciation: dec!(232_953),
            ebit: dec!(193_009),
            extraordinary_results: dec!(109_572),
            financial_expenses: dec!(59_928),
            ebt: dec!(242_653),
        },
    }
}

impl FinancialDataset {
    /// The 2016/2017 case the dashboard was built around.
    pub fn dia_case() -> Self {
        let mut years = BTreeMap::new();
        years.insert(2016, fiscal_2016());
        years.insert(2017, fiscal_2017());
        FinancialDataset {
            company: CASE_COMPANY.to_string(),
            units: CASE_UNITS.to_string(),
            years,
        }
    }
}
