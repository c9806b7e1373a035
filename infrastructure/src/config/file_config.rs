//! Declarative configuration file schema.

use advisor_application::GenerationParams;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure, loadable from `advisor.toml` with
/// `ADVISOR_*` environment overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub providers: ProvidersConfig,
    pub generation: GenerationParams,
    pub intelligence: IntelligenceConfig,
    pub logging: LoggingConfig,
}

/// Provider model selection and request behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    /// Gemini model identifier for the primary call.
    pub gemini_model: String,
    /// Azure OpenAI deployment name for the industry analysis.
    pub azure_deployment: String,
    /// Azure OpenAI API version.
    pub azure_api_version: String,
    /// Per-call timeout applied to every outbound HTTP request.
    pub request_timeout_secs: u64,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            gemini_model: "gemini-2.0-flash".to_string(),
            azure_deployment: "gpt-4o-mini".to_string(),
            azure_api_version: "2024-08-01-preview".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Where the web-intelligence service lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntelligenceConfig {
    /// Lookup endpoint URL. Required for online runs.
    pub endpoint: String,
}

/// Structured exchange logging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// JSONL file receiving provider exchanges; disabled when unset.
    pub exchange_log: Option<PathBuf>,
}
