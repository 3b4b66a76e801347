pub mod dataset;
pub mod error;
pub mod types;

#[cfg(feature = "ratios")]
pub mod ratios;

#[cfg(feature = "risk")]
pub mod risk;

#[cfg(feature = "ratios")]
pub mod analysis;

pub use error::RatioAnalysisError;
pub use types::*;

/// Standard result type for all ratio-analysis operations
pub type RatioAnalysisResult<T> = Result<T, RatioAnalysisError>;
