use super::round2;
use crate::model::{CompetitionLevel, CompetitionReport, ProductAttributes};

/// Scores the competitive position of a listing from reviews, rating and
/// sales rank. Absent inputs contribute a neutral zero instead of failing.
pub struct CompetitionAnalyzer;

impl CompetitionAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, attrs: &ProductAttributes) -> CompetitionReport {
        let reviews_norm = Self::normalize_reviews(attrs.review_count);
        let rating_norm = Self::normalize_rating(attrs.rating);
        let rank_norm = Self::normalize_rank(attrs.sales_rank);

        let weighted = reviews_norm * 0.4 + rating_norm * 0.3 + rank_norm * 0.3;
        let score = round2(weighted.clamp(0.0, 1.0));

        CompetitionReport {
            score,
            level: Self::level(score),
            estimated_competitors: Self::estimate_competitors(attrs),
            market_saturation: Self::market_saturation(attrs),
        }
    }

    /// reviews / 1000, capped at 1. No reviews means no signal.
    fn normalize_reviews(reviews: Option<u64>) -> f64 {
        match reviews {
            None | Some(0) => 0.0,
            Some(n) => (n as f64 / 1000.0).min(1.0),
        }
    }

    fn normalize_rating(rating: Option<f64>) -> f64 {
        match rating {
            Some(r) if r > 0.0 => r / 5.0,
            _ => 0.0,
        }
    }

    /// Lower rank is a better seller, so a low rank maps close to 1.
    fn normalize_rank(rank: Option<u64>) -> f64 {
        match rank {
            None | Some(0) => 0.0,
            Some(r) => 1.0 - (r as f64 / 100_000.0).min(1.0),
        }
    }

    pub fn level(score: f64) -> CompetitionLevel {
        if score < 0.3 {
            CompetitionLevel::Low
        } else if score < 0.7 {
            CompetitionLevel::Medium
        } else {
            CompetitionLevel::High
        }
    }

    fn estimate_competitors(attrs: &ProductAttributes) -> u32 {
        let mut competitors: u64 = 10;
        if let Some(rank) = attrs.sales_rank.filter(|&r| r > 0) {
            competitors += (rank / 1000).min(50);
        }
        if let Some(reviews) = attrs.review_count.filter(|&n| n > 0) {
            competitors += (reviews / 100).min(30);
        }
        competitors as u32
    }

    fn market_saturation(attrs: &ProductAttributes) -> f64 {
        let mut saturation = 0.5;
        if let Some(rank) = attrs.sales_rank.filter(|&r| r > 0) {
            saturation += 0.3 * (1.0 - (rank as f64 / 100_000.0).min(1.0));
        }
        if let Some(reviews) = attrs.review_count.filter(|&n| n > 0) {
            saturation += 0.2 * (reviews as f64 / 1000.0).min(1.0);
        }
        round2(saturation.clamp(0.0, 1.0))
    }
}

impl Default for CompetitionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(rating: Option<f64>, reviews: Option<u64>, rank: Option<u64>) -> ProductAttributes {
        ProductAttributes {
            asin: "B000TEST00".into(),
            title: "Test product".into(),
            price: 24.99,
            currency: "USD".into(),
            url: None,
            description: None,
            features: vec![],
            rating,
            review_count: reviews,
            sales_rank: rank,
            sales_rank_category: None,
            dimensions: None,
            weight: None,
        }
    }

    #[test]
    fn score_combines_weighted_factors() {
        // reviews 500 -> 0.5, rating 4.0 -> 0.8, rank 50000 -> 0.5
        let report = CompetitionAnalyzer::new().analyze(&attrs(
            Some(4.0),
            Some(500),
            Some(50_000),
        ));
        assert_eq!(report.score, 0.59);
        assert_eq!(report.level, CompetitionLevel::Medium);
        assert_eq!(report.estimated_competitors, 10 + 50 + 5);
        assert_eq!(report.market_saturation, 0.75);
    }

    #[test]
    fn absent_inputs_degrade_to_neutral() {
        let report = CompetitionAnalyzer::new().analyze(&attrs(None, None, None));
        assert_eq!(report.score, 0.0);
        assert_eq!(report.level, CompetitionLevel::Low);
        assert_eq!(report.estimated_competitors, 10);
        assert_eq!(report.market_saturation, 0.5);
    }

    #[test]
    fn score_stays_in_unit_interval_at_extremes() {
        let report =
            CompetitionAnalyzer::new().analyze(&attrs(Some(5.0), Some(1_000_000), Some(1)));
        assert!(report.score <= 1.0);
        assert!(report.market_saturation <= 1.0);
        assert_eq!(report.level, CompetitionLevel::High);
    }

    #[test]
    fn level_thresholds_are_inclusive_at_boundaries() {
        assert_eq!(CompetitionAnalyzer::level(0.29), CompetitionLevel::Low);
        assert_eq!(CompetitionAnalyzer::level(0.3), CompetitionLevel::Medium);
        assert_eq!(CompetitionAnalyzer::level(0.69), CompetitionLevel::Medium);
        assert_eq!(CompetitionAnalyzer::level(0.7), CompetitionLevel::High);
    }

    #[test]
    fn competitor_contributions_are_capped() {
        let report = CompetitionAnalyzer::new().analyze(&attrs(
            None,
            Some(100_000),
            Some(1_000_000),
        ));
        assert_eq!(report.estimated_competitors, 10 + 50 + 30);
    }
}
