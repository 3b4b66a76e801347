pub mod catalogue;
pub mod evaluator;
pub mod matrix;
pub mod severity;

pub use catalogue::{RiskCategory, RiskScenario, CATALOGUE};
pub use evaluator::{evaluate_risks, summarize, RatioReading, RiskAssessment, RiskProfile};
pub use matrix::{grid_band, risk_matrix, RiskMatrixCell};
pub use severity::{classify, severity_score, SeverityTier};
