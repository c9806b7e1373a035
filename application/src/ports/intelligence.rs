//! Intelligence gatherer port
//!
//! The web-intelligence lookup is an external collaborator: the
//! pipeline hands it a company name and website and receives a
//! fixed-shape [`CompanyIntelligence`] record back. Its failures are
//! fatal to the request — there is no fallback substitution at this
//! layer.

use advisor_domain::CompanyIntelligence;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during intelligence gathering.
#[derive(Error, Debug)]
pub enum IntelligenceError {
    #[error("Intelligence request failed: {0}")]
    RequestFailed(String),

    #[error("Intelligence service returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Intelligence response could not be decoded: {0}")]
    Decode(String),

    #[error("Intelligence request timed out")]
    Timeout,
}

/// Gateway to the web-intelligence service.
#[async_trait]
pub trait IntelligenceGatherer: Send + Sync {
    /// Look up a company and return its intelligence record.
    async fn gather(
        &self,
        company_name: &str,
        website_url: &str,
    ) -> Result<CompanyIntelligence, IntelligenceError>;
}
