//! Azure OpenAI adapter for the secondary completion model.
//!
//! Used for the short industry analysis. The credential is a pair:
//! API key plus resource endpoint, with the deployment name and API
//! version coming from configuration.

use advisor_application::ports::completion_model::{
    CompletionModel, CompletionRequest, ProviderError,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Secondary provider adapter.
pub struct AzureOpenAiModel {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    deployment: String,
    api_version: String,
}

impl AzureOpenAiModel {
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        deployment: impl Into<String>,
        api_version: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            deployment: deployment.into(),
            api_version: api_version.into(),
        })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.deployment,
            self.api_version
        )
    }

    fn request_body(request: &CompletionRequest) -> serde_json::Value {
        serde_json::json!({
            "messages": [
                {"role": "system", "content": request.system},
                {"role": "user", "content": request.prompt}
            ],
            "max_tokens": request.params.max_output_tokens,
            "temperature": request.params.temperature,
        })
    }
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChatMessage>,
}

#[derive(Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: String,
}

impl ChatCompletionResponse {
    fn text(&self) -> String {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .map(|m| m.content.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CompletionModel for AzureOpenAiModel {
    fn name(&self) -> &str {
        "azure-openai"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        let url = self.completions_url();
        debug!("Azure OpenAI request: deployment={}", self.deployment);

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .json(&Self::request_body(&request))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        let text = parsed.text();
        if text.trim().is_empty() {
            return Err(ProviderError::NoCandidates);
        }
        Ok(text)
    }
}
