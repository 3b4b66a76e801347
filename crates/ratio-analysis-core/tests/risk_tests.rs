use pretty_assertions::assert_eq;
use ratio_analysis_core::dataset::{FinancialDataset, StatementFigures};
use ratio_analysis_core::ratios::compute_ratios;
use ratio_analysis_core::risk::{
    classify, evaluate_risks, grid_band, risk_matrix, severity_score, SeverityTier, CATALOGUE,
};
use rust_decimal_macros::dec;

// ===========================================================================
// Severity classification
// ===========================================================================

#[test]
fn test_classify_thresholds() {
    assert_eq!(classify(dec!(4)), SeverityTier::Medium);
    assert_eq!(classify(dec!(8)), SeverityTier::Critical);
    assert_eq!(classify(dec!(5.4)), SeverityTier::Medium);
    assert_eq!(classify(dec!(5.6)), SeverityTier::Medium);
}

#[test]
fn test_classify_monotonic_on_fine_grid() {
    let mut prev = SeverityTier::Low;
    let mut score = dec!(0);
    while score <= dec!(10) {
        let tier = classify(score);
        assert!(tier >= prev, "tier dropped at {score}");
        prev = tier;
        score += dec!(0.05);
    }
}

// ===========================================================================
// Catalogue evaluation
// ===========================================================================

#[test]
fn test_catalogue_titles_in_order() {
    let ds = FinancialDataset::dia_case();
    let cur = compute_ratios(ds.figures(2017).unwrap());
    let prev = compute_ratios(ds.figures(2016).unwrap());
    let risks = evaluate_risks(&cur, &prev);
    let titles: Vec<&str> = risks.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Insolvency risk",
            "Liquidity risk",
            "Operating profitability deterioration",
            "Refinancing risk",
            "Market risk",
        ]
    );
}

#[test]
fn test_always_five_regardless_of_inputs() {
    let zero = compute_ratios(&StatementFigures::default());
    let ds = FinancialDataset::dia_case();
    let case = compute_ratios(ds.figures(2017).unwrap());
    assert_eq!(evaluate_risks(&zero, &case).len(), 5);
    assert_eq!(evaluate_risks(&case, &zero).len(), 5);
}

#[test]
fn test_levels_follow_catalogue_scores() {
    let ds = FinancialDataset::dia_case();
    let cur = compute_ratios(ds.figures(2017).unwrap());
    let prev = compute_ratios(ds.figures(2016).unwrap());
    for (assessment, scenario) in evaluate_risks(&cur, &prev).iter().zip(CATALOGUE.iter()) {
        assert_eq!(assessment.impact, scenario.impact);
        assert_eq!(assessment.probability, scenario.probability);
        assert_eq!(
            assessment.severity,
            classify(severity_score(scenario.impact, scenario.probability))
        );
        assert_eq!(assessment.coordinates.x, scenario.probability);
        assert_eq!(assessment.coordinates.y, scenario.impact);
    }
}

// ===========================================================================
// Risk matrix grid
// ===========================================================================

#[test]
fn test_matrix_covers_full_grid() {
    let cells = risk_matrix();
    assert_eq!(cells.len(), 100);
    for cell in &cells {
        assert_eq!(cell.z, u32::from(cell.x) * u32::from(cell.y));
        assert_eq!(cell.band, grid_band(cell.z));
    }
}

#[test]
fn test_matrix_band_counts() {
    let cells = risk_matrix();
    let count = |tier: SeverityTier| cells.iter().filter(|c| c.band == tier).count();
    // Products >= 64: 7x10, 8x8, 8x9, 8x10, 9x9, 9x10, 10x10 and mirrors
    assert_eq!(count(SeverityTier::Critical), 11);
    assert_eq!(
        count(SeverityTier::Low)
            + count(SeverityTier::Medium)
            + count(SeverityTier::High)
            + count(SeverityTier::Critical),
        100
    );
}

#[test]
fn test_grid_scale_differs_from_scenario_scale() {
    // Same cell, two tiers: grid on raw product, scenarios on product / 10.
    let cell = risk_matrix()
        .into_iter()
        .find(|c| c.x == 8 && c.y == 8)
        .unwrap();
    assert_eq!(cell.band, SeverityTier::Critical);
    assert_eq!(classify(severity_score(8, 8)), SeverityTier::High);
}
