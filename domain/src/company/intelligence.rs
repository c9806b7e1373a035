//! Company intelligence record produced by the external gatherer.

use serde::{Deserialize, Serialize};

/// Stock performance summary for publicly traded companies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockPerformance {
    pub summary: String,
}

/// Structured summary of a company's industry, business model, and
/// technology signals.
///
/// Produced by the intelligence gatherer and consumed read-only by the
/// recommendation pipeline. There is no invariant beyond field presence;
/// empty lists are valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyIntelligence {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub business_model: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub recent_news: Vec<String>,
    #[serde(default)]
    pub cloud_usage_indicators: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_performance: Option<StockPerformance>,
}

impl CompanyIntelligence {
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_record() {
        let json = r#"{
            "companyName": "Globex",
            "industry": "Logistics",
            "businessModel": "B2B SaaS",
            "techStack": ["AWS", "Kubernetes"],
            "recentNews": [],
            "cloudUsageIndicators": ["job postings mention EKS"],
            "stockPerformance": {"summary": "Up 12% YoY"}
        }"#;

        let intel: CompanyIntelligence = serde_json::from_str(json).unwrap();
        assert_eq!(intel.company_name, "Globex");
        assert_eq!(intel.tech_stack.len(), 2);
        assert!(intel.recent_news.is_empty());
        assert_eq!(intel.stock_performance.unwrap().summary, "Up 12% YoY");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let intel: CompanyIntelligence =
            serde_json::from_str(r#"{"companyName": "Globex"}"#).unwrap();
        assert!(intel.industry.is_empty());
        assert!(intel.tech_stack.is_empty());
        assert!(intel.stock_performance.is_none());
    }
}
