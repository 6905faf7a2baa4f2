// Advisory generation: prompt, external completion call, reply parsing.
// Generation is best-effort: any failure is contained here and replaced by
// the fixed fallback advisory, never surfaced to the caller.

pub mod openai;
pub mod parser;
pub mod prompt;

pub use openai::OpenAiBackend;
pub use parser::SectionKeywords;

use crate::model::{Advisory, AdvisorError, ProductAttributes};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

/// Role instruction sent with every advisory request.
pub const SYSTEM_PROMPT: &str = "You are an expert in marketplace product analysis. \
Analyze the data and provide structured, actionable recommendations. \
Focus on specific, concrete advice.";

/// Opaque boundary to the external text-generation service.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, AdvisorError>;
}

pub struct AdvisoryGenerator {
    backend: Arc<dyn CompletionBackend>,
    keywords: SectionKeywords,
}

impl AdvisoryGenerator {
    pub fn new(backend: Arc<dyn CompletionBackend>, keywords: SectionKeywords) -> Self {
        Self { backend, keywords }
    }

    /// Builds the prompt, submits it and parses the reply. Total: a failed
    /// or timed-out call degrades to `fallback_advisory`.
    pub async fn generate(&self, attrs: &ProductAttributes) -> Advisory {
        let user_prompt = prompt::build_prompt(attrs);
        match self.backend.complete(SYSTEM_PROMPT, &user_prompt).await {
            Ok(text) => parser::parse_advisory(&text, &self.keywords),
            Err(e) => {
                warn!("Advisory generation failed, using fallback: {e}");
                fallback_advisory()
            }
        }
    }
}

/// Fixed advisory returned whenever generation fails. Feeding its rendered
/// text back through the parser does not reproduce it structurally; parsing
/// is lossy by design.
pub fn fallback_advisory() -> Advisory {
    Advisory {
        summary: "Baseline product assessment from the available listing data.".to_string(),
        opportunities: vec![
            "Review the listing content and imagery for improvements".to_string(),
            "Consider optimizing the pricing strategy".to_string(),
        ],
        risks: vec![
            "Competitor landscape needs further research".to_string(),
            "Seasonal demand swings are unverified".to_string(),
        ],
        recommendations: vec![
            "Collect more market data before committing".to_string(),
            "Analyze competitor reviews for unmet needs".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingBackend;

    #[async_trait]
    impl CompletionBackend for FailingBackend {
        async fn complete(&self, _: &str, _: &str) -> Result<String, AdvisorError> {
            Err(AdvisorError::Timeout)
        }
    }

    struct CannedBackend(&'static str);

    #[async_trait]
    impl CompletionBackend for CannedBackend {
        async fn complete(&self, _: &str, _: &str) -> Result<String, AdvisorError> {
            Ok(self.0.to_string())
        }
    }

    fn attrs() -> ProductAttributes {
        ProductAttributes {
            asin: "B000TEST00".into(),
            title: "Test product".into(),
            price: 19.99,
            currency: "USD".into(),
            url: None,
            description: None,
            features: vec![],
            rating: None,
            review_count: None,
            sales_rank: None,
            sales_rank_category: None,
            dimensions: None,
            weight: None,
        }
    }

    #[tokio::test]
    async fn failure_yields_the_exact_fallback() {
        let generator = AdvisoryGenerator::new(Arc::new(FailingBackend), SectionKeywords::default());
        let advisory = generator.generate(&attrs()).await;
        assert_eq!(advisory, fallback_advisory());
        assert_eq!(advisory.opportunities.len(), 2);
        assert_eq!(advisory.risks.len(), 2);
        assert_eq!(advisory.recommendations.len(), 2);
        assert!(!advisory.summary.is_empty());
    }

    #[tokio::test]
    async fn successful_reply_is_parsed_into_sections() {
        let generator = AdvisoryGenerator::new(
            Arc::new(CannedBackend(
                "Looks promising.\nOpportunities:\n- niche demand\nRisks:\n- price war\n",
            )),
            SectionKeywords::default(),
        );
        let advisory = generator.generate(&attrs()).await;
        assert_eq!(advisory.summary, "Looks promising. ");
        assert_eq!(advisory.opportunities, vec!["niche demand"]);
        assert_eq!(advisory.risks, vec!["price war"]);
    }
}
