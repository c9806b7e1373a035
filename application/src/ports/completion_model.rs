//! Completion model port
//!
//! Defines the interface for the generative-text providers. The
//! pipeline uses two instances of this port: a primary model that
//! produces the recommendation JSON and a secondary model that writes
//! the short industry analysis. Implementations (adapters) live in the
//! infrastructure layer.

use crate::config::GenerationParams;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while talking to a generative-text provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Provider returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Provider response contained no usable candidates")]
    NoCandidates,

    #[error("Provider response could not be decoded: {0}")]
    Decode(String),

    #[error("Request timed out")]
    Timeout,
}

/// One request to a generative-text provider.
///
/// A request is a complete, self-contained exchange: system
/// instruction, user prompt, and sampling configuration. Sessions and
/// multi-turn state are deliberately out of scope.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System instruction establishing the model's role.
    pub system: String,
    /// The full user prompt.
    pub prompt: String,
    /// Sampling configuration for this call.
    pub params: GenerationParams,
}

impl CompletionRequest {
    pub fn new(
        system: impl Into<String>,
        prompt: impl Into<String>,
        params: GenerationParams,
    ) -> Self {
        Self {
            system: system.into(),
            prompt: prompt.into(),
            params,
        }
    }
}

/// Gateway to a single generative-text provider.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Short provider identifier for logs (e.g. "gemini").
    fn name(&self) -> &str;

    /// Send one request and return the model's text output.
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError>;
}
