//! HTTP adapter for the web-intelligence service.
//!
//! The gatherer is an opaque external collaborator: this adapter posts
//! the company name and website to a configured endpoint and decodes
//! the fixed-shape intelligence record it returns.

use advisor_application::ports::intelligence::{IntelligenceError, IntelligenceGatherer};
use advisor_domain::CompanyIntelligence;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Intelligence gatherer backed by an HTTP lookup service.
pub struct HttpIntelligenceGatherer {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpIntelligenceGatherer {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, IntelligenceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| IntelligenceError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl IntelligenceGatherer for HttpIntelligenceGatherer {
    async fn gather(
        &self,
        company_name: &str,
        website_url: &str,
    ) -> Result<CompanyIntelligence, IntelligenceError> {
        debug!("Gathering intelligence for {}", company_name);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({
                "companyName": company_name,
                "websiteUrl": website_url,
            }))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    IntelligenceError::Timeout
                } else {
                    IntelligenceError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IntelligenceError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<CompanyIntelligence>()
            .await
            .map_err(|e| IntelligenceError::Decode(e.to_string()))
    }
}
