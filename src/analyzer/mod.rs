// Analyzer module: aggregates submodules for different aspects of analysis.

pub mod competition;
pub mod market;
pub mod profit;

// Re-export the main analyzer types for ease of use.
pub use competition::CompetitionAnalyzer;
pub use market::{CategoryProfile, MarketAnalyzer, MarketCatalog, PriceBands};
pub use profit::ProfitEstimator;

/// Rounds to two decimal places; all published scores use this.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
