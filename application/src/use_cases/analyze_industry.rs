//! Industry analysis step.
//!
//! Wraps the secondary provider to produce a short prose assessment of
//! how a company's industry shapes its cloud cost structure. Provider
//! failure is absorbed here: the step logs a warning and substitutes a
//! deterministic templated sentence, so it never raises to its caller.

use crate::config::GenerationParams;
use crate::ports::completion_model::{CompletionModel, CompletionRequest};
use crate::ports::exchange_logger::{ExchangeEvent, ExchangeLogger, NoExchangeLogger};
use advisor_domain::{CompanyIntelligence, RecommendationPromptTemplate};
use std::sync::Arc;
use tracing::{debug, warn};

/// Output cap for the 2-3 sentence analysis.
const ANALYSIS_MAX_TOKENS: u32 = 256;

/// Produces the industry assessment fed into the recommendation prompt.
pub struct IndustryAnalyzer {
    model: Arc<dyn CompletionModel>,
    params: GenerationParams,
    logger: Arc<dyn ExchangeLogger>,
}

impl IndustryAnalyzer {
    pub fn new(model: Arc<dyn CompletionModel>, params: GenerationParams) -> Self {
        Self {
            model,
            params,
            logger: Arc::new(NoExchangeLogger),
        }
    }

    /// Create with an exchange logger.
    pub fn with_logger(mut self, logger: Arc<dyn ExchangeLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Analyze the company's industry in 2-3 sentences.
    ///
    /// Never fails: any provider-level error (timeout, error response,
    /// credential rejection) is logged and replaced with a templated
    /// sentence built from the company name, industry, and business
    /// model.
    pub async fn analyze(&self, intelligence: &CompanyIntelligence) -> String {
        let request = CompletionRequest::new(
            RecommendationPromptTemplate::industry_system(),
            RecommendationPromptTemplate::industry_analysis(intelligence),
            self.params.clone().with_max_output_tokens(ANALYSIS_MAX_TOKENS),
        );

        match self.model.complete(request).await {
            Ok(text) if !text.trim().is_empty() => {
                let text = text.trim().to_string();
                debug!("Industry analysis completed ({} bytes)", text.len());
                self.logger.record(ExchangeEvent::new(
                    "industry_analysis",
                    serde_json::json!({
                        "provider": self.model.name(),
                        "company": intelligence.company_name,
                        "text": text.clone(),
                    }),
                ));
                text
            }
            Ok(_) => {
                warn!("Industry analysis returned empty text, using templated sentence");
                RecommendationPromptTemplate::industry_fallback(intelligence)
            }
            Err(e) => {
                warn!("Industry analysis failed, using templated sentence: {}", e);
                self.logger.record(ExchangeEvent::new(
                    "industry_analysis_fallback",
                    serde_json::json!({
                        "provider": self.model.name(),
                        "company": intelligence.company_name,
                        "error": e.to_string(),
                    }),
                ));
                RecommendationPromptTemplate::industry_fallback(intelligence)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::completion_model::ProviderError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct MockModel {
        responses: Mutex<VecDeque<Result<String, ProviderError>>>,
    }

    impl MockModel {
        fn new(responses: Vec<Result<String, ProviderError>>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from(responses)),
            }
        }
    }

    #[async_trait]
    impl CompletionModel for MockModel {
        fn name(&self) -> &str {
            "mock"
        }

        async fn complete(&self, _request: CompletionRequest) -> Result<String, ProviderError> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(ProviderError::NoCandidates))
        }
    }

    fn intelligence() -> CompanyIntelligence {
        CompanyIntelligence {
            company_name: "Globex".to_string(),
            industry: "Logistics".to_string(),
            business_model: "B2B SaaS".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_successful_analysis_is_returned() {
        let model = Arc::new(MockModel::new(vec![Ok(
            "Logistics SaaS margins are cloud-sensitive.".to_string(),
        )]));
        let analyzer = IndustryAnalyzer::new(model, GenerationParams::default());

        let text = analyzer.analyze(&intelligence()).await;
        assert_eq!(text, "Logistics SaaS margins are cloud-sensitive.");
    }

    #[tokio::test]
    async fn test_provider_failure_yields_templated_sentence() {
        let model = Arc::new(MockModel::new(vec![Err(ProviderError::Timeout)]));
        let analyzer = IndustryAnalyzer::new(model, GenerationParams::default());

        let text = analyzer.analyze(&intelligence()).await;
        assert!(text.contains("Globex"));
        assert!(text.contains("Logistics"));
        assert!(text.contains("B2B SaaS"));
    }

    #[tokio::test]
    async fn test_empty_response_yields_templated_sentence() {
        let model = Arc::new(MockModel::new(vec![Ok("   ".to_string())]));
        let analyzer = IndustryAnalyzer::new(model, GenerationParams::default());

        let text = analyzer.analyze(&intelligence()).await;
        assert!(text.contains("Globex"));
    }
}
