//! Hand-authored catalogue of the five risk scenarios for the case.
//!
//! Impact, probability and the narrative text are static content, written
//! against the 2017 vs 2016 figures. They are not recomputed from ratios at
//! run time; `related_ratios` only names the ratios each scenario is bound to
//! for display.

use serde::{Deserialize, Serialize};

use crate::ratios::RatioName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Insolvency,
    Liquidity,
    OperatingProfitability,
    Refinancing,
    Market,
}

/// One static catalogue row. Impact and probability are on a 1..=10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskScenario {
    pub id: u32,
    pub category: RiskCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub impact: u8,
    pub probability: u8,
    pub factors: &'static [&'static str],
    pub mitigation: &'static [&'static str],
    pub related_ratios: &'static [RatioName],
}

pub const CATALOGUE: [RiskScenario; 5] = [
    RiskScenario {
        id: 1,
        category: RiskCategory::Insolvency,
        title: "Insolvency risk",
        description: "Weak equity strength (8.99%) and heavy reliance on external financing \
                      raise the risk of insolvency under adverse conditions.",
        impact: 9,
        probability: 6,
        factors: &[
            "Equity covers only 8.99% of total assets",
            "High financial leverage (11.12x)",
            "Equity strength down from the previous year (10.03%)",
            "Critical dependence on external financing",
        ],
        mitigation: &[
            "Urgent financial restructuring to rebuild equity",
            "Capital increase or full retention of earnings",
            "Divest non-strategic assets to reduce debt",
            "Renegotiate debt terms and maturities",
        ],
        related_ratios: &[RatioName::EquityStrength, RatioName::FinancialLeverage],
    },
    RiskScenario {
        id: 2,
        category: RiskCategory::Liquidity,
        title: "Liquidity risk",
        description: "Low liquidity (0.55) and negative working capital compromise the \
                      company's ability to meet short-term obligations.",
        impact: 8,
        probability: 7,
        factors: &[
            "Current liquidity (0.55) far below the 1.0 minimum",
            "Negative working capital (-1,027,674 thousand EUR)",
            "Thin cover of current liabilities by cash (0.15)",
            "Deterioration from the previous year (2016 liquidity: 0.59)",
        ],
        mitigation: &[
            "Negotiate longer payment terms with suppliers",
            "Aggressive optimisation of working capital",
            "Refinance short-term debt",
            "Accelerate inventory turnover",
            "Tighter customer credit management",
        ],
        related_ratios: &[
            RatioName::CurrentLiquidity,
            RatioName::QuickLiquidity,
            RatioName::ImmediateLiquidity,
        ],
    },
    RiskScenario {
        id: 3,
        category: RiskCategory::OperatingProfitability,
        title: "Operating profitability deterioration",
        description: "A marked fall in operating margin and return on assets suggests \
                      problems in the operating efficiency of the business.",
        impact: 7,
        probability: 8,
        factors: &[
            "EBIT margin down from 2.18% to 1.42%",
            // Matches compute_ratios on the case figures; earlier drafts quoted 4.97% and 3.43%.
            "Operating return on assets down from 4.93% to 3.38%",
            "Margins eroding despite slightly better asset turnover",
            "Possible loss of operating efficiency or rising costs",
        ],
        mitigation: &[
            "Detailed review of the cost structure",
            "Streamline operating processes",
            "Review pricing policy",
            "Assess profitability by product line",
            "Company-wide operating efficiency plan",
        ],
        related_ratios: &[RatioName::EbitMargin, RatioName::OperatingReturnOnAssets],
    },
    RiskScenario {
        id: 4,
        category: RiskCategory::Refinancing,
        title: "Refinancing risk",
        description: "Low debt service capacity could make refinancing on favourable \
                      terms difficult.",
        impact: 6,
        probability: 7,
        factors: &[
            "Debt service capacity (EBITDA / financial debt) of 0.24",
            "Down from the previous year (0.29)",
            "Likely higher financing cost on new facilities",
            "Potential credit rating downgrade",
        ],
        mitigation: &[
            "Diversify funding sources",
            "Seek lower-cost financing alternatives",
            "Refinance early to avoid unfavourable conditions",
            "Improve EBITDA through operating optimisation",
        ],
        related_ratios: &[RatioName::DebtServiceCapacity],
    },
    RiskScenario {
        id: 5,
        category: RiskCategory::Market,
        title: "Market risk",
        description: "Falling sales and eroding margins point to competitive pressure \
                      that could intensify.",
        impact: 7,
        probability: 6,
        factors: &[
            "Sales down from 8,867,621 to 8,620,550 thousand EUR (-2.8%)",
            "EBIT margin down by 35%",
            "Possible increase in competitive pressure in the sector",
            "Shifts in consumer preferences or behaviour",
        ],
        mitigation: &[
            "Market and competitor analysis",
            "Review of strategic positioning",
            "Refresh the value proposition",
            "Optimise the product mix",
            "Improve the customer experience",
        ],
        related_ratios: &[RatioName::EbitMargin],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_sequential_in_order() {
        let ids: Vec<u32> = CATALOGUE.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_scores_within_scale() {
        for s in CATALOGUE.iter() {
            assert!((1..=10).contains(&s.impact), "{} impact", s.title);
            assert!((1..=10).contains(&s.probability), "{} probability", s.title);
            assert!(!s.factors.is_empty());
            assert!(!s.mitigation.is_empty());
            assert!(!s.related_ratios.is_empty());
        }
    }

    #[test]
    fn test_authored_scores() {
        let pairs: Vec<(u8, u8)> = CATALOGUE.iter().map(|s| (s.impact, s.probability)).collect();
        assert_eq!(pairs, vec![(9, 6), (8, 7), (7, 8), (6, 7), (7, 6)]);
    }

    #[test]
    fn test_profitability_factors_match_case_ratios() {
        use crate::dataset::FinancialDataset;
        use crate::ratios::compute_ratios;
        use rust_decimal_macros::dec;

        let ds = FinancialDataset::dia_case();
        let pct = |year: i32| {
            let r = compute_ratios(ds.figures(year).unwrap());
            (r.operating_return_on_assets.unwrap() * dec!(100)).round_dp(2)
        };
        assert_eq!(pct(2016), dec!(4.93));
        assert_eq!(pct(2017), dec!(3.38));
        assert!(CATALOGUE[2].factors[1].contains("4.93% to 3.38%"));
    }
}
