use super::round2;
use crate::model::{ProductAttributes, ProfitReport};

/// Markup applied to the current price to get the recommended price.
const PRICE_UPLIFT: f64 = 1.15;
/// Marketplace referral fee taken off the sale price.
const REFERRAL_FEE_RATE: f64 = 0.15;
/// Landed unit cost assumed as a share of the current price.
const UNIT_COST_RATE: f64 = 0.55;
/// Flat per-unit fulfillment fee.
const FULFILLMENT_FEE: f64 = 3.0;
/// Recommended price when the listing has no usable price.
const FALLBACK_PRICE: f64 = 9.99;

/// Estimates margin, a recommended price and monthly sales/revenue.
/// Missing optional fields degrade to zero; the estimator never fails.
pub struct ProfitEstimator;

impl ProfitEstimator {
    pub fn new() -> Self {
        Self
    }

    pub fn estimate(&self, attrs: &ProductAttributes) -> ProfitReport {
        let recommended_price = Self::recommended_price(attrs.price);
        let margin = Self::margin(attrs.price, recommended_price);
        let estimated_monthly_sales = Self::monthly_sales(attrs.sales_rank);

        ProfitReport {
            margin,
            recommended_price,
            estimated_monthly_sales,
            // Computed from the published fields so the identity
            // revenue == sales * price holds exactly.
            estimated_monthly_revenue: estimated_monthly_sales as f64 * recommended_price,
        }
    }

    fn recommended_price(price: f64) -> f64 {
        if price > 0.0 {
            round2(price * PRICE_UPLIFT)
        } else {
            FALLBACK_PRICE
        }
    }

    /// Fraction of the recommended price left after fees and unit cost.
    /// Negative for items too cheap to cover the flat fulfillment fee.
    fn margin(price: f64, recommended_price: f64) -> f64 {
        let net_revenue = recommended_price * (1.0 - REFERRAL_FEE_RATE);
        let unit_cost = price * UNIT_COST_RATE + FULFILLMENT_FEE;
        round2((net_revenue - unit_cost) / recommended_price)
    }

    /// Rank-band daily sales estimate, scaled to a month. No rank, no sales.
    fn monthly_sales(rank: Option<u64>) -> u64 {
        let daily = match rank {
            None | Some(0) => 0.0,
            Some(r) if r < 1000 => 100.0,
            Some(r) if r < 5000 => 50.0,
            Some(r) if r < 10_000 => 20.0,
            Some(r) => (1_000_000.0 / r as f64).max(5.0),
        };
        (daily * 30.0) as u64
    }
}

impl Default for ProfitEstimator {
    fn default() -> Self {
        Self::new()
    }
}
