//! Prompt templates for the recommendation pipeline.

use crate::company::{CompanyContext, CompanyIntelligence};

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn join_or_unknown(items: &[String]) -> String {
    if items.is_empty() {
        "unknown".to_string()
    } else {
        items.join(", ")
    }
}

/// Templates for the two provider calls in the recommendation flow.
pub struct RecommendationPromptTemplate;

impl RecommendationPromptTemplate {
    /// System instruction for the primary provider.
    pub fn system() -> &'static str {
        r#"You are a cloud cost optimization expert advising enterprise FinOps teams.
You analyze a company's business model and technology signals to recommend unit cost metrics that connect cloud spend to business value.
Reply with a single JSON object only. No prose, no Markdown, no explanation outside the JSON."#
    }

    /// System instruction for the secondary provider's industry analysis.
    pub fn industry_system() -> &'static str {
        r#"You are a business analyst specializing in how industry structure shapes cloud infrastructure economics.
Write short, factual prose."#
    }

    /// User prompt for the industry analysis step.
    ///
    /// Embeds every intelligence field; the stock-performance line is
    /// omitted when the record has none.
    pub fn industry_analysis(intelligence: &CompanyIntelligence) -> String {
        let mut prompt = format!(
            r#"Company: {}
Industry: {}
Business model: {}
Tech stack: {}
Recent news: {}
Cloud usage indicators: {}
"#,
            intelligence.company_name,
            intelligence.industry,
            intelligence.business_model,
            join_or_unknown(&intelligence.tech_stack),
            join_or_unknown(&intelligence.recent_news),
            join_or_unknown(&intelligence.cloud_usage_indicators),
        );

        if let Some(stock) = &intelligence.stock_performance {
            prompt.push_str(&format!("Stock performance: {}\n", stock.summary));
        }

        prompt.push_str(
            r#"
In 2-3 sentences, analyze how this company's industry and business model shape its cloud cost structure, and where unit economics pressure is most likely to show up."#,
        );

        prompt
    }

    /// Deterministic replacement sentence used when the industry
    /// analysis provider fails. Built only from the company name,
    /// industry, and business model.
    pub fn industry_fallback(intelligence: &CompanyIntelligence) -> String {
        format!(
            "{} operates in the {} industry with a {} business model, where cloud \
             infrastructure costs directly shape unit economics and margin.",
            intelligence.company_name, intelligence.industry, intelligence.business_model
        )
    }

    /// Full instruction block for the primary provider.
    ///
    /// Pure: identical inputs always yield an identical block.
    pub fn recommendation(
        context: &CompanyContext,
        intelligence: &CompanyIntelligence,
        industry_analysis: &str,
    ) -> String {
        let mut prompt = format!(
            r#"Generate FinOps recommendations for an upcoming conversation with this company.

## Company

Name: {}
Website: {}
Industry: {}
Business model: {}
Tech stack: {}
Recent news: {}
Cloud usage indicators: {}

## Industry analysis

{}

## Focus areas

Private pricing / commitment optimization: {}
Generative AI infrastructure: {}
Cloud cost concerns: {}

## Required output

1. Recommend 4-5 unit cost metrics tailored to this company. For each, give a short title and a 2-3 sentence rationale linking the metric to business value.
2. Write exactly 3 open-ended conversation starter questions a seller could ask this company about cloud cost.
"#,
            context.company_name,
            context.website_url,
            intelligence.industry,
            intelligence.business_model,
            join_or_unknown(&intelligence.tech_stack),
            join_or_unknown(&intelligence.recent_news),
            join_or_unknown(&intelligence.cloud_usage_indicators),
            industry_analysis,
            yes_no(context.ppa),
            yes_no(context.gen_ai),
            yes_no(context.cloud_cost_concerns),
        );

        let mut section = 3;
        if context.ppa {
            prompt.push_str(&format!(
                "{}. Provide exactly 3 insights on private pricing agreement and \
                 commitment optimization opportunities for this company.\n",
                section
            ));
            section += 1;
        }
        if context.gen_ai {
            prompt.push_str(&format!(
                "{}. Provide exactly 3 insights on generative AI infrastructure \
                 cost for this company.\n",
                section
            ));
            section += 1;
        }
        if context.cloud_cost_concerns {
            prompt.push_str(&format!(
                "{}. Provide exactly 3 insights on cloud cost risk signals this \
                 company is likely exposed to.\n",
                section
            ));
        }

        prompt.push_str(&format!(
            r#"
## Output format

Respond with a JSON object of exactly this shape:

{}

`conditionalInsights` must contain only the keys shown above."#,
            Self::output_schema(context)
        ));

        prompt
    }

    /// Render the output-schema fragment embedded in the instruction
    /// block.
    ///
    /// The conditional keys are collected into a map first and
    /// serialized as one JSON document, so the fragment stays
    /// well-formed for every flag combination — zero enabled flags
    /// yields an empty `conditionalInsights` object, never a dangling
    /// separator.
    fn output_schema(context: &CompanyContext) -> String {
        let insight_shape = serde_json::json!([
            "string (insight 1)",
            "string (insight 2)",
            "string (insight 3)"
        ]);

        let mut conditional = serde_json::Map::new();
        if context.ppa {
            conditional.insert("ppa".to_string(), insight_shape.clone());
        }
        if context.gen_ai {
            conditional.insert("genAI".to_string(), insight_shape.clone());
        }
        if context.cloud_cost_concerns {
            conditional.insert("cloudCostConcerns".to_string(), insight_shape);
        }

        let schema = serde_json::json!({
            "unitMetrics": [
                {"title": "string", "description": "string"}
            ],
            "conversationStarters": [
                "string (question 1)",
                "string (question 2)",
                "string (question 3)"
            ],
            "conditionalInsights": serde_json::Value::Object(conditional),
        });

        // Map keys serialize in sorted order, so the output is stable
        serde_json::to_string_pretty(&schema).expect("static schema serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::StockPerformance;

    fn intelligence() -> CompanyIntelligence {
        CompanyIntelligence {
            company_name: "Globex".to_string(),
            industry: "Logistics".to_string(),
            business_model: "B2B SaaS".to_string(),
            tech_stack: vec!["AWS".to_string(), "Kubernetes".to_string()],
            recent_news: vec!["Opened EU region".to_string()],
            cloud_usage_indicators: vec!["Hiring for platform team".to_string()],
            stock_performance: None,
        }
    }

    /// Extract the JSON schema fragment from a built prompt and parse it.
    fn embedded_schema(prompt: &str) -> serde_json::Value {
        let start = prompt.find('{').expect("prompt contains a schema block");
        let end = prompt.rfind('}').expect("schema block is closed");
        serde_json::from_str(&prompt[start..=end]).expect("schema block is valid JSON")
    }

    #[test]
    fn test_schema_with_no_flags_is_empty_object() {
        let ctx = CompanyContext::new("Globex");
        let prompt = RecommendationPromptTemplate::recommendation(&ctx, &intelligence(), "");
        let schema = embedded_schema(&prompt);
        let insights = schema["conditionalInsights"].as_object().unwrap();
        assert!(insights.is_empty());
    }

    #[test]
    fn test_schema_with_one_flag_has_exactly_one_key() {
        let ctx = CompanyContext::new("Globex").with_gen_ai(true);
        let prompt = RecommendationPromptTemplate::recommendation(&ctx, &intelligence(), "");
        let schema = embedded_schema(&prompt);
        let insights = schema["conditionalInsights"].as_object().unwrap();
        assert_eq!(insights.len(), 1);
        assert!(insights.contains_key("genAI"));
    }

    #[test]
    fn test_schema_with_all_flags_has_all_keys() {
        let ctx = CompanyContext::new("Globex")
            .with_ppa(true)
            .with_gen_ai(true)
            .with_cloud_cost_concerns(true);
        let prompt = RecommendationPromptTemplate::recommendation(&ctx, &intelligence(), "");
        let schema = embedded_schema(&prompt);
        let insights = schema["conditionalInsights"].as_object().unwrap();
        assert_eq!(insights.len(), 3);
        assert!(insights.contains_key("ppa"));
        assert!(insights.contains_key("genAI"));
        assert!(insights.contains_key("cloudCostConcerns"));
    }

    #[test]
    fn test_conditional_paragraph_present_iff_flag_enabled() {
        let intel = intelligence();

        let none = RecommendationPromptTemplate::recommendation(
            &CompanyContext::new("Globex"),
            &intel,
            "",
        );
        assert!(!none.contains("commitment optimization opportunities"));
        assert!(!none.contains("generative AI infrastructure cost for this company"));

        let ppa_only = RecommendationPromptTemplate::recommendation(
            &CompanyContext::new("Globex").with_ppa(true),
            &intel,
            "",
        );
        assert!(ppa_only.contains("commitment optimization opportunities"));
        assert!(!ppa_only.contains("cloud cost risk signals this"));
    }

    #[test]
    fn test_flags_rendered_as_yes_no() {
        let ctx = CompanyContext::new("Globex").with_ppa(true);
        let prompt = RecommendationPromptTemplate::recommendation(&ctx, &intelligence(), "");
        assert!(prompt.contains("Private pricing / commitment optimization: Yes"));
        assert!(prompt.contains("Generative AI infrastructure: No"));
    }

    #[test]
    fn test_industry_analysis_text_is_embedded() {
        let ctx = CompanyContext::new("Globex");
        let prompt = RecommendationPromptTemplate::recommendation(
            &ctx,
            &intelligence(),
            "Logistics margins are thin.",
        );
        assert!(prompt.contains("Logistics margins are thin."));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let ctx = CompanyContext::new("Globex").with_cloud_cost_concerns(true);
        let intel = intelligence();
        let a = RecommendationPromptTemplate::recommendation(&ctx, &intel, "analysis");
        let b = RecommendationPromptTemplate::recommendation(&ctx, &intel, "analysis");
        assert_eq!(a, b);
    }

    #[test]
    fn test_industry_prompt_omits_stock_line_when_absent() {
        let prompt = RecommendationPromptTemplate::industry_analysis(&intelligence());
        assert!(!prompt.contains("Stock performance:"));

        let mut with_stock = intelligence();
        with_stock.stock_performance = Some(StockPerformance {
            summary: "Flat over 12 months".to_string(),
        });
        let prompt = RecommendationPromptTemplate::industry_analysis(&with_stock);
        assert!(prompt.contains("Stock performance: Flat over 12 months"));
    }

    #[test]
    fn test_industry_prompt_joins_list_fields() {
        let prompt = RecommendationPromptTemplate::industry_analysis(&intelligence());
        assert!(prompt.contains("Tech stack: AWS, Kubernetes"));
    }

    #[test]
    fn test_industry_fallback_uses_three_fields_only() {
        let sentence = RecommendationPromptTemplate::industry_fallback(&intelligence());
        assert!(sentence.contains("Globex"));
        assert!(sentence.contains("Logistics"));
        assert!(sentence.contains("B2B SaaS"));
        assert!(!sentence.contains("Kubernetes"));
    }
}
