// Orchestrates the scoring pipeline for one analysis request.
use crate::advisor::AdvisoryGenerator;
use crate::analyzer::{CompetitionAnalyzer, ProfitEstimator};
use crate::model::{AnalysisReport, ProductAttributes};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

/// Sequences competition scoring, profit estimation and the optional
/// advisory. The three steps share no state and run joined; only the
/// advisory can actually suspend.
pub struct AnalysisService {
    competition: CompetitionAnalyzer,
    profit: ProfitEstimator,
    advisor: AdvisoryGenerator,
}

impl AnalysisService {
    pub fn new(advisor: AdvisoryGenerator) -> Self {
        Self {
            competition: CompetitionAnalyzer::new(),
            profit: ProfitEstimator::new(),
            advisor,
        }
    }

    pub async fn analyze(
        &self,
        attrs: &ProductAttributes,
        include_advisory: bool,
    ) -> AnalysisReport {
        info!("Starting analysis for product: {}", attrs.asin);

        let advisory_step = async {
            if include_advisory {
                Some(self.advisor.generate(attrs).await)
            } else {
                None
            }
        };
        let (competition, profit, advisory) = tokio::join!(
            async { self.competition.analyze(attrs) },
            async { self.profit.estimate(attrs) },
            advisory_step,
        );

        let report = AnalysisReport {
            analysis_id: Uuid::new_v4(),
            competition,
            profit,
            advisory,
            generated_at: Utc::now(),
        };
        info!("Analysis {} completed for product: {}", report.analysis_id, attrs.asin);
        report
    }
}
