pub mod dupont;
pub mod engine;
pub mod trend;

pub use engine::{compute_ratios, RatioKind, RatioName, RatioSet};
pub use trend::{compute_trend, trend_report, TrendDirection, TrendLine, TrendValue};
