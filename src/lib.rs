pub mod advisor;
pub mod analyzer;
pub mod cleaner;
pub mod config;
pub mod model;
pub mod server;
pub mod service;

pub use analyzer::{CompetitionAnalyzer, MarketAnalyzer, ProfitEstimator};
pub use service::AnalysisService;
