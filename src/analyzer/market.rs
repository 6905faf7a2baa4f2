use super::round2;
use crate::model::{
    MarketSizeEstimate, MarketStrength, OptimalRange, PricePointReport, PricePosition,
    SalesRecord, Seasonality, SeasonalityReport,
};
use chrono::Datelike;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Optimal price bands for a category. Upper bounds are inclusive.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceBands {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

/// Per-category market parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryProfile {
    /// Demand coefficient applied to the rank-band sales estimate.
    pub demand_coefficient: f64,
    pub price_bands: PriceBands,
}

/// Category lookup table with a mandatory fallback entry, loadable from the
/// config file so tests and deployments can substitute their own tables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarketCatalog {
    pub categories: HashMap<String, CategoryProfile>,
    pub default: CategoryProfile,
}

impl Default for MarketCatalog {
    fn default() -> Self {
        let profile = |coef: f64, low: f64, medium: f64, high: f64| CategoryProfile {
            demand_coefficient: coef,
            price_bands: PriceBands { low, medium, high },
        };
        let categories = HashMap::from([
            ("Electronics".to_string(), profile(0.8, 20.0, 50.0, 100.0)),
            ("Home & Kitchen".to_string(), profile(0.7, 15.0, 35.0, 70.0)),
            ("Sports & Outdoors".to_string(), profile(0.6, 15.0, 40.0, 80.0)),
            ("Beauty & Personal Care".to_string(), profile(0.75, 10.0, 25.0, 50.0)),
            ("Toys & Games".to_string(), profile(0.65, 10.0, 30.0, 60.0)),
        ]);
        Self {
            categories,
            default: profile(0.5, 15.0, 35.0, 70.0),
        }
    }
}

/// Category-parameterized market sizing, price point classification and
/// seasonality detection. Unknown categories silently use the default entry.
pub struct MarketAnalyzer {
    catalog: MarketCatalog,
}

impl MarketAnalyzer {
    pub fn new(catalog: MarketCatalog) -> Self {
        Self { catalog }
    }

    fn profile(&self, category: &str) -> &CategoryProfile {
        self.catalog.categories.get(category).unwrap_or(&self.catalog.default)
    }

    /// Estimates daily/monthly sales volume from the sales rank, scaled by
    /// the category demand coefficient.
    pub fn market_size(&self, rank: u64, category: &str) -> MarketSizeEstimate {
        let coef = self.profile(category).demand_coefficient;

        let base_daily = if rank < 1000 {
            100.0
        } else if rank < 5000 {
            50.0
        } else if rank < 10_000 {
            20.0
        } else {
            (1_000_000.0 / rank as f64).max(5.0)
        };
        let daily_sales = round2(base_daily * coef);

        let market_strength = if rank < 1000 {
            MarketStrength::High
        } else if rank < 10_000 {
            MarketStrength::Medium
        } else {
            MarketStrength::Low
        };

        MarketSizeEstimate {
            daily_sales,
            monthly_sales: round2(daily_sales * 30.0),
            market_strength,
        }
    }

    /// Classifies a price against the category bands, inclusive upper bounds.
    pub fn price_point(&self, price: f64, category: &str) -> PricePointReport {
        let bands = &self.profile(category).price_bands;

        let (position, recommendation) = if price <= bands.low {
            (
                PricePosition::Low,
                "Consider increasing price if quality permits",
            )
        } else if price <= bands.medium {
            (PricePosition::Medium, "Price point is optimal")
        } else if price <= bands.high {
            (
                PricePosition::High,
                "Consider value-added features to justify price",
            )
        } else {
            (
                PricePosition::Premium,
                "Ensure premium positioning is well-justified",
            )
        };

        PricePointReport {
            position,
            recommendation: recommendation.to_string(),
            optimal_range: OptimalRange {
                min: bands.low,
                max: bands.high,
            },
        }
    }

    /// Detects seasonality from historical sales. A month is a peak when its
    /// average exceeds 1.2x the overall mean and low below 0.8x. Three or
    /// more peak or low months mean High seasonality, at least one of either
    /// Medium, otherwise Low. Empty history is Unknown.
    pub fn seasonal_trend(&self, history: &[SalesRecord]) -> SeasonalityReport {
        if history.is_empty() {
            return SeasonalityReport {
                seasonality: Seasonality::Unknown,
                peak_months: vec![],
                low_months: vec![],
                monthly_trends: BTreeMap::new(),
            };
        }

        let mut by_month: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
        for record in history {
            by_month.entry(record.date.month()).or_default().push(record.sales);
        }

        let monthly_trends: BTreeMap<u32, f64> = by_month
            .into_iter()
            .map(|(month, sales)| {
                let avg = sales.iter().sum::<f64>() / sales.len() as f64;
                (month, avg)
            })
            .collect();

        let overall = monthly_trends.values().sum::<f64>() / monthly_trends.len() as f64;
        let peak_months: Vec<u32> = monthly_trends
            .iter()
            .filter(|&(_, &avg)| avg > overall * 1.2)
            .map(|(&month, _)| month)
            .collect();
        let low_months: Vec<u32> = monthly_trends
            .iter()
            .filter(|&(_, &avg)| avg < overall * 0.8)
            .map(|(&month, _)| month)
            .collect();

        let seasonality = if peak_months.len() >= 3 || low_months.len() >= 3 {
            Seasonality::High
        } else if !peak_months.is_empty() || !low_months.is_empty() {
            Seasonality::Medium
        } else {
            Seasonality::Low
        };

        SeasonalityReport {
            seasonality,
            peak_months,
            low_months,
            monthly_trends,
        }
    }
}

impl Default for MarketAnalyzer {
    fn default() -> Self {
        Self::new(MarketCatalog::default())
    }
}
