//! Generate Recommendation use case.
//!
//! Orchestrates the full pipeline for one company: credential
//! pre-flight, intelligence gathering, industry analysis, prompt
//! construction, the primary provider call, and parsing/validation of
//! its output.
//!
//! The flow is strictly sequential; the industry analysis (when
//! performed) always completes before the prompt is built, and the
//! prompt is always fully built before the primary provider is
//! invoked. There are no retries, and no automatic substitution of the
//! offline generator — degraded-mode policy belongs to the caller.

use crate::config::{GenerationParams, ProviderCredentials};
use crate::ports::completion_model::{CompletionModel, CompletionRequest, ProviderError};
use crate::ports::exchange_logger::{ExchangeEvent, ExchangeLogger, NoExchangeLogger};
use crate::ports::intelligence::{IntelligenceError, IntelligenceGatherer};
use crate::use_cases::analyze_industry::IndustryAnalyzer;
use advisor_domain::{
    CompanyContext, Recommendation, RecommendationParseError, RecommendationPromptTemplate,
    parse_recommendation,
};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur during recommendation generation.
#[derive(Error, Debug)]
pub enum GenerateRecommendationError {
    /// Required credential missing or implausible. Nothing was invoked.
    #[error("Credential error: {0}")]
    Credential(String),

    /// The external intelligence gatherer failed. Propagated unmodified.
    #[error("Intelligence gathering failed: {0}")]
    IntelligenceGathering(#[from] IntelligenceError),

    /// The primary provider call itself failed.
    #[error("Primary provider failed: {0}")]
    Provider(#[from] ProviderError),

    /// The primary provider returned no usable content.
    #[error("Primary provider returned no content")]
    EmptyResponse,

    /// The primary provider's text is not valid JSON. Carries the raw
    /// text for diagnosis.
    #[error("Failed to parse provider response: {message}")]
    Parse { message: String, raw: String },

    /// Parsed data is missing required fields or has the wrong shape.
    #[error("Provider response failed validation: {0}")]
    SchemaValidation(String),

    /// The caller cancelled the request between steps.
    #[error("Operation cancelled")]
    Cancelled,
}

impl GenerateRecommendationError {
    /// Whether a caller-composed degraded-mode policy may reasonably
    /// absorb this error by switching to the offline generator.
    ///
    /// Credential problems are configuration mistakes and should fail
    /// loudly; cancellation means the caller no longer wants a result.
    pub fn is_degradable(&self) -> bool {
        !matches!(
            self,
            GenerateRecommendationError::Credential(_) | GenerateRecommendationError::Cancelled
        )
    }
}

/// Use case for generating FinOps recommendations for one company.
pub struct GenerateRecommendationUseCase {
    primary: Arc<dyn CompletionModel>,
    industry_analyzer: IndustryAnalyzer,
    gatherer: Arc<dyn IntelligenceGatherer>,
    credentials: ProviderCredentials,
    params: GenerationParams,
    logger: Arc<dyn ExchangeLogger>,
    cancellation_token: Option<CancellationToken>,
}

impl GenerateRecommendationUseCase {
    pub fn new(
        primary: Arc<dyn CompletionModel>,
        secondary: Arc<dyn CompletionModel>,
        gatherer: Arc<dyn IntelligenceGatherer>,
        credentials: ProviderCredentials,
        params: GenerationParams,
    ) -> Self {
        Self {
            primary,
            industry_analyzer: IndustryAnalyzer::new(secondary, params.clone()),
            gatherer,
            credentials,
            params,
            logger: Arc::new(NoExchangeLogger),
            cancellation_token: None,
        }
    }

    /// Create with an exchange logger shared by both provider steps.
    pub fn with_logger(mut self, logger: Arc<dyn ExchangeLogger>) -> Self {
        self.industry_analyzer = self.industry_analyzer.with_logger(logger.clone());
        self.logger = logger;
        self
    }

    /// Create with a cancellation token checked between pipeline steps.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Execute the pipeline for one company.
    pub async fn execute(
        &self,
        context: &CompanyContext,
    ) -> Result<Recommendation, GenerateRecommendationError> {
        // Step 1: primary credential pre-flight. Fatal before any call.
        if !self.credentials.primary_plausible() {
            return Err(GenerateRecommendationError::Credential(
                "primary provider API key is missing or looks like a placeholder".to_string(),
            ));
        }

        // Step 2: secondary pre-flight. Non-fatal — skip the analysis.
        let secondary_ok = self.credentials.secondary_plausible();
        if !secondary_ok {
            warn!("Secondary provider credentials implausible; skipping industry analysis");
        }

        info!("Generating recommendations for {}", context.company_name);

        // Step 3: intelligence gathering. Failure propagates untouched.
        self.check_cancelled()?;
        let intelligence = self
            .gatherer
            .gather(&context.company_name, &context.website_url)
            .await?;
        debug!(
            "Gathered intelligence: industry={}, {} tech stack entries",
            intelligence.industry,
            intelligence.tech_stack.len()
        );

        // Step 4: industry analysis, or empty text when skipped.
        self.check_cancelled()?;
        let industry_analysis = if secondary_ok {
            self.industry_analyzer.analyze(&intelligence).await
        } else {
            String::new()
        };

        // Steps 5-6: build the prompt, then invoke the primary provider.
        self.check_cancelled()?;
        let prompt =
            RecommendationPromptTemplate::recommendation(context, &intelligence, &industry_analysis);
        let request = CompletionRequest::new(
            RecommendationPromptTemplate::system(),
            prompt,
            self.params.clone(),
        );
        let raw = self.primary.complete(request).await?;

        // Step 7: reject empty output.
        if raw.trim().is_empty() {
            return Err(GenerateRecommendationError::EmptyResponse);
        }

        self.logger.record(ExchangeEvent::new(
            "recommendation_response",
            serde_json::json!({
                "provider": self.primary.name(),
                "company": context.company_name,
                "bytes": raw.len(),
                "text": raw.clone(),
            }),
        ));

        // Steps 8-9: strip fences, parse, check required fields.
        let recommendation = parse_recommendation(&raw).map_err(|e| match e {
            RecommendationParseError::InvalidJson { message, raw } => {
                GenerateRecommendationError::Parse { message, raw }
            }
            other => GenerateRecommendationError::SchemaValidation(other.to_string()),
        })?;

        // Step 10: return as-is. List lengths are not enforced on this
        // path; only the fallback generator guarantees them.
        info!(
            "Generated {} unit metrics and {} conversation starters",
            recommendation.unit_metrics.len(),
            recommendation.conversation_starters.len()
        );

        Ok(recommendation)
    }

    fn check_cancelled(&self) -> Result<(), GenerateRecommendationError> {
        match &self.cancellation_token {
            Some(token) if token.is_cancelled() => Err(GenerateRecommendationError::Cancelled),
            _ => Ok(()),
        }
    }
}
