//! Company context value object — the caller's input for one request.

use serde::{Deserialize, Serialize};

/// Input describing the company a recommendation run is about.
///
/// Constructed once by the caller and never mutated by the pipeline.
/// The three focus flags are independent: each one switches a dedicated
/// insight section on or off in the generated recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyContext {
    /// Company name as entered by the user. Must be non-empty.
    pub company_name: String,
    /// Company website URL. May be empty, in which case identity
    /// matching is skipped.
    #[serde(default)]
    pub website_url: String,
    /// Contact email, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Focus on Private Pricing Agreement / commitment optimization.
    #[serde(default)]
    pub ppa: bool,
    /// Focus on generative-AI infrastructure cost.
    #[serde(default, rename = "genAI")]
    pub gen_ai: bool,
    /// Focus on cloud-cost risk signals.
    #[serde(default)]
    pub cloud_cost_concerns: bool,
}

impl CompanyContext {
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            website_url: String::new(),
            email: None,
            ppa: false,
            gen_ai: false,
            cloud_cost_concerns: false,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_website_url(mut self, url: impl Into<String>) -> Self {
        self.website_url = url.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_ppa(mut self, enabled: bool) -> Self {
        self.ppa = enabled;
        self
    }

    pub fn with_gen_ai(mut self, enabled: bool) -> Self {
        self.gen_ai = enabled;
        self
    }

    pub fn with_cloud_cost_concerns(mut self, enabled: bool) -> Self {
        self.cloud_cost_concerns = enabled;
        self
    }

    /// True when at least one focus flag is enabled.
    pub fn has_focus_flags(&self) -> bool {
        self.ppa || self.gen_ai || self.cloud_cost_concerns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let ctx = CompanyContext::new("Globex")
            .with_website_url("https://globex.com")
            .with_email("cto@globex.com")
            .with_ppa(true);

        assert_eq!(ctx.company_name, "Globex");
        assert_eq!(ctx.website_url, "https://globex.com");
        assert_eq!(ctx.email.as_deref(), Some("cto@globex.com"));
        assert!(ctx.ppa);
        assert!(!ctx.gen_ai);
        assert!(ctx.has_focus_flags());
    }

    #[test]
    fn test_no_focus_flags_by_default() {
        let ctx = CompanyContext::new("Globex");
        assert!(!ctx.has_focus_flags());
    }

    #[test]
    fn test_serde_uses_camel_case_keys() {
        let ctx = CompanyContext::new("Globex").with_gen_ai(true);
        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json["companyName"], "Globex");
        assert_eq!(json["genAI"], true);
        assert_eq!(json["cloudCostConcerns"], false);
    }
}
