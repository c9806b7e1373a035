//! Provider response parsing for recommendations.
//!
//! The primary provider is instructed to reply with bare JSON, but
//! models routinely wrap output in Markdown code fences. These functions
//! strip that wrapper and turn the raw text into a typed
//! [`Recommendation`], distinguishing malformed JSON from structurally
//! incomplete JSON. Pure domain logic — no I/O.

use super::entities::Recommendation;
use thiserror::Error;

/// Why a provider response could not be turned into a recommendation.
#[derive(Error, Debug)]
pub enum RecommendationParseError {
    /// The response is not valid JSON. Carries the original raw text so
    /// callers can log it for diagnosis.
    #[error("Response is not valid JSON: {message}")]
    InvalidJson { message: String, raw: String },

    /// The JSON parsed but a required top-level key is missing.
    #[error("Response is missing required field `{0}`")]
    MissingField(&'static str),

    /// The JSON has the required keys but an element has the wrong shape
    /// (e.g. a unit metric without a description).
    #[error("Response structure mismatch: {0}")]
    InvalidShape(String),
}

/// Top-level keys every recommendation payload must carry.
const REQUIRED_FIELDS: [&str; 2] = ["unitMetrics", "conversationStarters"];

/// Strip a surrounding Markdown code fence, including an optional
/// language tag after the opening fence.
///
/// Text without a fence is returned trimmed but otherwise unchanged.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the language tag line ("json", "JSON", ...) if present
    let rest = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Parse raw provider text into a [`Recommendation`].
///
/// Validation here is deliberately minimal: the two required top-level
/// keys must be present and elements must deserialize, but list-length
/// invariants are not enforced on this path.
pub fn parse_recommendation(raw: &str) -> Result<Recommendation, RecommendationParseError> {
    let text = strip_code_fences(raw);

    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| RecommendationParseError::InvalidJson {
            message: e.to_string(),
            raw: raw.to_string(),
        })?;

    for field in REQUIRED_FIELDS {
        if value.get(field).is_none() {
            return Err(RecommendationParseError::MissingField(field));
        }
    }

    serde_json::from_value(value)
        .map_err(|e| RecommendationParseError::InvalidShape(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_PAYLOAD: &str = r#"{
        "unitMetrics": [
            {"title": "Cost per order", "description": "Ties spend to revenue."}
        ],
        "conversationStarters": ["How do you track spend?"],
        "conditionalInsights": {"ppa": ["a", "b", "c"]}
    }"#;

    #[test]
    fn test_parse_bare_json() {
        let rec = parse_recommendation(VALID_PAYLOAD).unwrap();
        assert_eq!(rec.unit_metrics[0].title, "Cost per order");
        assert_eq!(rec.conditional_insights.ppa.as_ref().unwrap().len(), 3);
    }

    #[test]
    fn test_parse_fenced_json() {
        let fenced = format!("```json\n{}\n```", VALID_PAYLOAD);
        assert!(parse_recommendation(&fenced).is_ok());
    }

    #[test]
    fn test_parse_fence_without_language_tag() {
        let fenced = format!("```\n{}\n```", VALID_PAYLOAD);
        assert!(parse_recommendation(&fenced).is_ok());
    }

    #[test]
    fn test_invalid_json_carries_raw_text() {
        let err = parse_recommendation("not json at all").unwrap_err();
        match err {
            RecommendationParseError::InvalidJson { raw, .. } => {
                assert_eq!(raw, "not json at all");
            }
            other => panic!("Expected InvalidJson, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_unit_metrics_is_schema_error() {
        let err =
            parse_recommendation(r#"{"conversationStarters": ["q"]}"#).unwrap_err();
        assert!(matches!(
            err,
            RecommendationParseError::MissingField("unitMetrics")
        ));
    }

    #[test]
    fn test_missing_conversation_starters_is_schema_error() {
        let err = parse_recommendation(r#"{"unitMetrics": []}"#).unwrap_err();
        assert!(matches!(
            err,
            RecommendationParseError::MissingField("conversationStarters")
        ));
    }

    #[test]
    fn test_malformed_element_is_shape_error() {
        let payload = r#"{
            "unitMetrics": [{"title": "no description"}],
            "conversationStarters": ["q"]
        }"#;
        assert!(matches!(
            parse_recommendation(payload).unwrap_err(),
            RecommendationParseError::InvalidShape(_)
        ));
    }

    #[test]
    fn test_strip_code_fences_variants() {
        assert_eq!(strip_code_fences("{\"a\": 1}"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("```json\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("  ```json\n{}\n```  "), "{}");
    }
}
