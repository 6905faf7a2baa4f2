// Core structs: ProductAttributes, analysis reports, market estimates
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Dimensions extracted from a scraped free-text field. The unit is taken
/// from the first match in the source text and applies to all three values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub unit: String,
}

/// Validated listing attributes supplied by the request layer.
/// Immutable input to every analysis function; never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductAttributes {
    pub asin: String,
    pub title: String,
    pub price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u64>,
    #[serde(default)]
    pub sales_rank: Option<u64>,
    #[serde(default)]
    pub sales_rank_category: Option<String>,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    #[serde(default)]
    pub weight: Option<f64>,
}

fn default_currency() -> String {
    "USD".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompetitionLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionReport {
    /// Weighted competition score in [0, 1], rounded to 2 decimals.
    pub score: f64,
    pub level: CompetitionLevel,
    pub estimated_competitors: u32,
    /// Market saturation in [0, 1], rounded to 2 decimals.
    pub market_saturation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitReport {
    /// Margin as a fraction of recommended price. May be negative.
    pub margin: f64,
    pub recommended_price: f64,
    pub estimated_monthly_sales: u64,
    /// Always equals estimated_monthly_sales * recommended_price.
    pub estimated_monthly_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub summary: String,
    pub opportunities: Vec<String>,
    pub risks: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Combined result assembled once per analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub competition: CompetitionReport,
    pub profit: ProfitReport,
    pub advisory: Option<Advisory>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketStrength {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSizeEstimate {
    pub daily_sales: f64,
    pub monthly_sales: f64,
    pub market_strength: MarketStrength,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricePosition {
    Low,
    Medium,
    High,
    Premium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePointReport {
    pub position: PricePosition,
    pub recommendation: String,
    pub optimal_range: OptimalRange,
}

/// One historical sales observation used by the seasonality detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: DateTime<Utc>,
    pub sales: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seasonality {
    High,
    Medium,
    Low,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityReport {
    pub seasonality: Seasonality,
    pub peak_months: Vec<u32>,
    pub low_months: Vec<u32>,
    /// Average sales per calendar month (1-12); empty when no history was given.
    pub monthly_trends: BTreeMap<u32, f64>,
}

#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error("completion API error: {0}")]
    Api(String),
    #[error("completion request timed out")]
    Timeout,
    #[error("completion response contained no text")]
    EmptyResponse,
    #[error("no API key configured")]
    MissingCredentials,
}
